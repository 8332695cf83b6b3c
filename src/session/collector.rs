//! Input collector.
//!
//! Prompts for `a`, `b` and `c` in order. A slot is re-prompted until its
//! text parses as an `i32` and passes the domain check; rejected text never
//! reaches the coefficient set.

use crate::equation::coefficients::{Coefficients, Quadratic, Slot};
use crate::session::console::Console;
use crate::{ParseFailure, QuadraticError};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, info};

/// Fill every slot of `coefficients` and return the resulting equation.
///
/// Parse and zero-leading errors are reported and retried in place. Any
/// other error is returned to the caller.
pub fn collect<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    coefficients: &mut Coefficients,
) -> Result<Quadratic, QuadraticError> {
    for slot in Slot::ALL {
        collect_slot(console, coefficients, slot)?;
    }
    coefficients.complete()
}

fn collect_slot<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    coefficients: &mut Coefficients,
    slot: Slot,
) -> Result<i32, QuadraticError> {
    loop {
        console.show_equation(coefficients)?;
        console.prompt(slot)?;
        let text = console.read_line()?;

        match accept(slot, &text, coefficients) {
            Ok(value) => {
                debug!(slot = %slot, value, "coefficient accepted");
                return Ok(value);
            }
            Err(err) if err.is_slot_local() => {
                info!(
                    slot = %slot,
                    input = %text,
                    severity = %err.severity(),
                    error = %err,
                    "coefficient rejected"
                );
                console.report(&err)?;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Validate `text` for `slot` and store it on success.
pub fn accept(
    slot: Slot,
    text: &str,
    coefficients: &mut Coefficients,
) -> Result<i32, QuadraticError> {
    let value = parse_coefficient(slot, text, coefficients)?;
    coefficients.set(slot, value)?;
    Ok(value)
}

/// Parse `text` as a signed 32-bit coefficient.
///
/// Non-numeric text carries a snapshot of the current slots; out-of-range
/// text only carries the accepted range in its message.
pub fn parse_coefficient(
    slot: Slot,
    text: &str,
    coefficients: &Coefficients,
) -> Result<i32, QuadraticError> {
    let text = text.trim();
    text.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => QuadraticError::Parse {
            slot,
            input: text.to_string(),
            kind: ParseFailure::OutOfRange,
            snapshot: None,
        },
        _ => QuadraticError::Parse {
            slot,
            input: text.to_string(),
            kind: ParseFailure::NotANumber,
            snapshot: Some(coefficients.snapshot_rejecting(slot, text)),
        },
    })
}
