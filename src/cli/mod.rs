//! Command-line front end for the `noughts` binary
//!
//! `analyze` searches a single position given on the command line; `play`
//! runs an interactive session on the terminal.

pub mod commands;
pub mod output;
