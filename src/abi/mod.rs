//! Contract ABI model and the pure operations over it.
//!
//! - `entry` - the closed set of entry variants
//! - `identity` - stable keys used for selection
//! - `filter` - display filtering by kind and search term
//! - `exclusions` / `trim` - boilerplate removal

pub mod entry;
pub mod error;
pub mod exclusions;
pub mod filter;
pub mod identity;
pub mod parse;
pub mod trim;

pub use entry::{
    AbiEntry, Constructor, CustomError, EntryKind, Event, EventParam, ExtraFields, Fallback,
    Function, Param, Receive, StateMutability,
};
pub use error::ParseError;
pub use exclusions::{is_unused_event, is_unused_function, ExclusionCategory, ExclusionSet};
pub use filter::{filter_entries, matches, FilterCriteria};
pub use identity::{derive_key, EntryKey};
pub use parse::parse_abi;
pub use trim::{trim_entries, trim_entries_with, trim_reason, TrimReason};
