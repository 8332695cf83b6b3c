//! Scripted console doubles for driving sessions without a terminal.

pub mod console;

pub use console::*;
