//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ProverbFields, ViewArgs};
pub use output::{format_choice_list, format_detail, format_proverb_list};
