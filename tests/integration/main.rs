//! Integration tests for the abitrim binary.

mod helpers;

mod config_test;
mod export_test;
mod list_test;
mod trim_test;
mod usage_test;
