//! quadsolve library
//!
//! Interactive console solver for quadratic equations `a*x^2 + b*x + c = 0`
//! with integer coefficients.
//!
//! The library is split the same way the binary uses it:
//! - `equation`: coefficient slots, validation invariants and the root solver
//! - `session`: the line-based input collector and the top-level control loop
//! - `cli`: argument parsing and terminal rendering
//! - `logging`: opt-in `tracing` output on stderr
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use quadsolve::{run, Roots, SessionConfig};
//!
//! let config = SessionConfig { color: false, redraw_equation: false };
//! let input = Cursor::new("1\n-3\n2\n");
//! let mut output = Vec::new();
//!
//! let roots = run(config, input, &mut output).expect("session failed");
//! assert_eq!(roots, Roots::Pair(2.0, 1.0));
//! ```

pub mod cli;
pub mod equation;
pub mod logging;
pub mod session;
pub mod version;

use cli::args::Args;
use session::console::Console;
use std::fmt;
use std::io::{BufRead, IsTerminal, Write};

// Re-exports for public API
pub use equation::coefficients::{Coefficients, Quadratic, Slot, SlotValue, Snapshot};
pub use equation::solver::{solve, Roots};

/// Severity of a message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Input was wrong and has to be corrected
    Error,
    /// Input was understood but cannot be used as-is
    Warning,
    /// Informational hint about accepted ranges
    Notification,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Notification => write!(f, "Notification"),
        }
    }
}

/// Why a coefficient could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// Text is not an integer at all ("abc", "12.5", "")
    NotANumber,
    /// Text is an integer outside the `i32` range
    OutOfRange,
}

/// Error types for quadsolve operations.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadraticError {
    /// Coefficient text could not be parsed
    Parse {
        slot: Slot,
        input: String,
        kind: ParseFailure,
        snapshot: Option<Snapshot>,
    },
    /// The leading coefficient `a` was zero
    ZeroLeadingCoefficient,
    /// The discriminant is negative
    NoRealRoots {
        discriminant: i128,
    },
    /// The solver was handed an incomplete coefficient set
    MissingCoefficient {
        slot: Slot,
        snapshot: Snapshot,
    },
    /// Input stream reached end-of-file
    InputClosed,
    /// Console I/O failed
    Io {
        context: String,
        message: String,
    },
    /// Invalid runtime configuration
    Config {
        message: String,
    },
}

impl QuadraticError {
    /// Severity used when this error is shown in a banner.
    pub fn severity(&self) -> Severity {
        match self {
            QuadraticError::Parse {
                kind: ParseFailure::OutOfRange,
                ..
            } => Severity::Notification,
            QuadraticError::ZeroLeadingCoefficient | QuadraticError::NoRealRoots { .. } => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }

    /// Coefficient snapshot attached for diagnostics, if any.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            QuadraticError::Parse { snapshot, .. } => snapshot.as_ref(),
            QuadraticError::MissingCoefficient { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }

    /// True if the collector handles this error by re-prompting the same slot.
    pub fn is_slot_local(&self) -> bool {
        matches!(
            self,
            QuadraticError::Parse { .. } | QuadraticError::ZeroLeadingCoefficient
        )
    }

    /// True if no further input can be obtained and the session must end.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            QuadraticError::InputClosed | QuadraticError::Io { .. } | QuadraticError::Config { .. }
        )
    }
}

impl fmt::Display for QuadraticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadraticError::Parse {
                input,
                kind: ParseFailure::NotANumber,
                ..
            } => {
                write!(f, "Cannot parse the variable \"{}\".", input)
            }
            QuadraticError::Parse {
                input,
                kind: ParseFailure::OutOfRange,
                ..
            } => {
                write!(
                    f,
                    "Number must be in range {} < \"{}\" < {}.",
                    i32::MIN,
                    input,
                    i32::MAX
                )
            }
            QuadraticError::ZeroLeadingCoefficient => {
                write!(f, "Variable \"{}\" cannot be zero.", Slot::A)
            }
            QuadraticError::NoRealRoots { discriminant } => {
                write!(f, "No real values found (discriminant = {}).", discriminant)
            }
            QuadraticError::MissingCoefficient { slot, .. } => {
                write!(f, "Variable \"{}\" has no value.", slot)
            }
            QuadraticError::InputClosed => {
                write!(f, "Input closed before the equation was solved")
            }
            QuadraticError::Io { context, message } => {
                write!(f, "I/O error while {}: {}", context, message)
            }
            QuadraticError::Config { message } => {
                write!(f, "Configuration error: {}", message)
            }
        }
    }
}

impl std::error::Error for QuadraticError {}

/// Configuration for an interactive solving session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Use ANSI colours for severity banners
    pub color: bool,
    /// Print the equation template before every prompt
    pub redraw_equation: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            color: true,
            redraw_equation: true,
        }
    }
}

impl SessionConfig {
    /// Create configuration from command line arguments.
    ///
    /// Colour is only enabled when stdout is a terminal.
    pub fn from_args(args: &Args) -> Self {
        SessionConfig {
            color: !args.no_color && std::io::stdout().is_terminal(),
            redraw_equation: !args.plain,
        }
    }
}

/// Process exit code for the outcome of a session.
///
/// `0` once solved, `2` for configuration errors, `1` for everything that
/// ended the session before a solve.
pub fn exit_code(outcome: &Result<Roots, QuadraticError>) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(QuadraticError::Config { .. }) => 2,
        Err(_) => 1,
    }
}

/// Run an interactive solving session until the equation is solved.
///
/// Coefficients are read line by line from `input`; prompts, banners and the
/// final roots are written to `output`. Recoverable errors are reported on
/// `output` and the session keeps prompting. Only end-of-file and I/O
/// failures end the session with an error.
pub fn run<R: BufRead, W: Write>(
    config: SessionConfig,
    input: R,
    output: W,
) -> Result<Roots, QuadraticError> {
    let mut console = Console::new(input, output, &config);
    session::control::run(&mut console)
}
