//! Line-based console over any reader/writer pair.
//!
//! The binary wires this to locked stdin/stdout; tests use in-memory
//! buffers. All I/O failures are mapped to `QuadraticError` here so the
//! collector and control loop only deal with one error type.

use crate::cli::output::TerminalFormatter;
use crate::equation::coefficients::{Coefficients, Slot};
use crate::equation::solver::Roots;
use crate::{QuadraticError, SessionConfig};
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    formatter: TerminalFormatter,
    redraw_equation: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: &SessionConfig) -> Self {
        Console {
            input,
            output,
            formatter: TerminalFormatter::new(config.color),
            redraw_equation: config.redraw_equation,
        }
    }

    /// Read one line with the trailing newline and surrounding whitespace
    /// removed. End-of-file is reported as `InputClosed`.
    ///
    /// Bytes that are not UTF-8 are replaced with U+FFFD so that the line
    /// is rejected by the parser instead of ending the session.
    pub fn read_line(&mut self) -> Result<String, QuadraticError> {
        let mut bytes = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut bytes)
            .map_err(|e| io_error("reading input", e))?;

        if read == 0 {
            return Err(QuadraticError::InputClosed);
        }

        Ok(String::from_utf8_lossy(&bytes).trim().to_string())
    }

    /// Print the equation template, unless redrawing is disabled.
    pub fn show_equation(&mut self, coefficients: &Coefficients) -> Result<(), QuadraticError> {
        if !self.redraw_equation {
            return Ok(());
        }
        let line = self.formatter.equation(coefficients);
        self.write_line(&line)
    }

    /// Print the prompt for `slot` without a newline and flush it.
    pub fn prompt(&mut self, slot: Slot) -> Result<(), QuadraticError> {
        let prompt = self.formatter.prompt(slot);
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| io_error("writing prompt", e))
    }

    pub fn report(&mut self, error: &QuadraticError) -> Result<(), QuadraticError> {
        let banner = self.formatter.error_banner(error);
        self.output
            .write_all(banner.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| io_error("writing banner", e))
    }

    pub fn show_roots(&mut self, roots: &Roots) -> Result<(), QuadraticError> {
        let line = self.formatter.roots(roots);
        self.write_line(&line)
    }

    fn write_line(&mut self, line: &str) -> Result<(), QuadraticError> {
        writeln!(self.output, "{}", line)
            .and_then(|_| self.output.flush())
            .map_err(|e| io_error("writing output", e))
    }

    /// Give back the writer, e.g. to inspect a test buffer.
    pub fn into_output(self) -> W {
        self.output
    }
}

fn io_error(context: &str, error: std::io::Error) -> QuadraticError {
    QuadraticError::Io {
        context: context.to_string(),
        message: error.to_string(),
    }
}
