//! CLI module for camtools - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;
