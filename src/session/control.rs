//! Top-level control loop.
//!
//! Two states: `Collecting` gathers a fresh coefficient set and tries to
//! solve it; `Solved` prints the roots and ends the session. Errors that
//! escape the collector, and a negative discriminant, send the loop back
//! to `Collecting` with empty coefficients.

use crate::equation::coefficients::Coefficients;
use crate::equation::solver::{solve, Roots};
use crate::session::collector::collect;
use crate::session::console::Console;
use crate::QuadraticError;
use std::io::{BufRead, Write};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Collecting,
    Solved(Roots),
}

/// Run until the equation is solved.
///
/// Returns the roots once they have been printed. Only terminal errors
/// (closed input, I/O failure) are returned as `Err`.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Roots, QuadraticError> {
    let mut state = State::Collecting;
    let mut attempt: u32 = 1;

    loop {
        match state {
            State::Collecting => match attempt_solve(console) {
                Ok(roots) => {
                    info!(attempt, roots = %roots, "equation solved");
                    state = State::Solved(roots);
                }
                Err(err) if err.is_terminal() => {
                    error!(attempt, error = %err, "session ended before a solve");
                    return Err(err);
                }
                Err(err) => {
                    warn!(
                        attempt,
                        severity = %err.severity(),
                        error = %err,
                        "restarting coefficient collection"
                    );
                    console.report(&err)?;
                    attempt += 1;
                }
            },
            State::Solved(roots) => {
                console.show_roots(&roots)?;
                return Ok(roots);
            }
        }
    }
}

/// One pass of collection followed by a solve, on a fresh coefficient set.
fn attempt_solve<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Roots, QuadraticError> {
    let mut coefficients = Coefficients::new();
    let equation = collect(console, &mut coefficients)?;
    console.show_equation(&coefficients)?;
    solve(&equation)
}
