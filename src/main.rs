mod commands;

use anyhow::Result;
use clap::Parser;

use abitrim::cli::{Cli, Commands, ConfigCommands};
use abitrim::theme::current_theme;

fn main() {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, Commands::Select(_));
    abitrim::logging::init(interactive, cli.verbose);

    if let Err(err) = run(cli) {
        let theme = current_theme();
        eprintln!("{} {:#}", theme.error_text("error:"), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List(args) => commands::list::handle(&args),
        Commands::Trim(args) => commands::trim::handle(&args),
        Commands::Export(args) => commands::export::handle(&args),
        Commands::Select(args) => commands::select::handle(&args),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
