//! CLI module for argument parsing and terminal rendering.

pub mod args;
pub mod output;
