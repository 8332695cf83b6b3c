//! Zero-dependency argument parser for quadsolve.
//!
//! The solving session itself takes no arguments; these are meta flags
//! that control help, version output and rendering.

use std::env;

/// Command to execute
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Command {
    /// Run the interactive solver (default)
    #[default]
    Solve,
    /// Print version information
    Version,
}

/// Parsed command line arguments
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Command to execute
    pub command: Command,
    /// Disable colored output
    pub no_color: bool,
    /// Do not redraw the equation template before each prompt
    pub plain: bool,
    /// Show help
    pub help: bool,
}

impl Args {
    /// Parse command line arguments from std::env::args(), then apply
    /// environment overrides.
    pub fn parse() -> Result<Self, String> {
        let args: Vec<String> = env::args().skip(1).collect();
        let mut result = Self::parse_from(&args)?;

        // https://no-color.org
        if env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            result.no_color = true;
        }

        Ok(result)
    }

    /// Parse command line arguments from a slice (for testing)
    pub fn parse_from(args: &[String]) -> Result<Self, String> {
        let mut result = Args::default();

        for arg in args {
            match arg.as_str() {
                "version" | "-V" | "--version" => result.command = Command::Version,
                "-h" | "--help" => result.help = true,
                "--no-color" => result.no_color = true,
                "--plain" => result.plain = true,

                _ if arg.starts_with('-') => {
                    return Err(format!("Unknown option: '{}'", arg));
                }
                _ => {
                    return Err(format!("Unexpected argument: '{}'", arg));
                }
            }
        }

        Ok(result)
    }
}
