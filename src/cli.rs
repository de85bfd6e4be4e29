//! Command-line interface definitions.
//!
//! Kept in the library so `xtask` can render man pages from the same
//! definitions the binary parses.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::abi::{EntryKind, FilterCriteria};
use crate::render::{FormatOptions, OutputFormat};

#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("ABITRIM_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ABITRIM_BUILD_DATE"),
    ")"
);

/// Select, trim and export contract ABI entries.
#[derive(Debug, Parser)]
#[command(
    name = "abitrim",
    version = VERSION,
    about = "Select, trim and export contract ABI entries",
    long_about = "Select, trim and export contract ABI entries.\n\n\
        Reads a JSON ABI (an array of function, event, error, constructor, \
        fallback and receive entries), lets you pick a subset by key, type, \
        search term or by trimming known boilerplate, and writes the result \
        as JSON or as human-readable signatures."
)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug). ABITRIM_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List ABI entries with their selection keys
    #[command(long_about = "List ABI entries with their selection keys.\n\n\
        Keys look like `function-transfer(address,uint256)` and are what \
        `export --select/--exclude` expect.")]
    List(ListArgs),

    /// Remove boilerplate entries and print the rest
    #[command(long_about = "Remove boilerplate entries and print the rest.\n\n\
        Drops constructor, fallback and receive handlers, ownership, access \
        control, pausability, initialization, interface introspection and \
        diamond dispatch entries, and functions or errors named *_ROLE. \
        Extra names can be configured under [trim] in the config file.")]
    Trim(TrimArgs),

    /// Export a selection of entries to stdout, a file or the clipboard
    Export(ExportArgs),

    /// Pick entries interactively
    Select(SelectArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where the ABI comes from.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// ABI JSON file. Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// The file path, or `None` for stdin.
    pub fn path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|p| *p != Path::new("-"))
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Only entries of this type (function, event, error, constructor, fallback, receive)
    #[arg(long = "type", short = 't', value_name = "KIND")]
    pub kind: Option<EntryKind>,

    /// Only entries whose name or key contains TERM (case-insensitive)
    #[arg(long, short = 's', value_name = "TERM")]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.kind, self.search.clone().unwrap_or_default())
    }
}

/// Output formatting flags; they override the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct FormatArgs {
    /// Spaces per indentation level
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=8))]
    pub indent: Option<u8>,

    /// Compact output without whitespace
    #[arg(long)]
    pub minify: bool,

    /// Do not soft-wrap long lines on the terminal
    #[arg(long)]
    pub no_wrap: bool,
}

impl FormatArgs {
    /// Layer the flags over `base`.
    pub fn apply(&self, base: FormatOptions) -> FormatOptions {
        FormatOptions {
            indentation: self.indent.map_or(base.indentation, usize::from),
            minified: base.minified || self.minify,
            word_wrap: base.word_wrap && !self.no_wrap,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Show inputs, outputs and mutability of each entry
    #[arg(long, short = 'l')]
    pub long: bool,
}

#[derive(Debug, Clone, Args)]
pub struct TrimArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print each removed entry and the reason to stderr
    #[arg(long)]
    pub explain: bool,

    #[command(flatten)]
    pub format_args: FormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Select only these keys (repeatable)
    #[arg(long = "select", value_name = "KEY")]
    pub select: Vec<String>,

    /// Deselect these keys (repeatable)
    #[arg(long = "exclude", value_name = "KEY")]
    pub exclude: Vec<String>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Trim boilerplate from the selection
    #[arg(long)]
    pub trim: bool,

    /// Copy the result to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Save to selected-abi.json / selected-abi.txt in the export directory
    #[arg(long)]
    pub save: bool,

    /// Save to this path (file or directory)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub format_args: FormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
    /// ABI JSON file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Initial preview format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub format_args: FormatArgs,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Open the config file in $EDITOR
    Edit,
}
