//! Real root solver.
//!
//! Roots follow the quadratic formula `(-b ± √d) / 2a`. The root that would
//! suffer cancellation is derived from the other through `x1 * x2 = c / a`,
//! which gives the same values with full `f64` precision.

use crate::equation::coefficients::Quadratic;
use crate::QuadraticError;
use std::fmt;
use tracing::debug;

/// Real roots of a quadratic equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// Discriminant is zero
    Single(f64),
    /// Discriminant is positive; `(-b + √d) / 2a` first
    Pair(f64, f64),
}

impl Roots {
    pub fn count(&self) -> usize {
        match self {
            Roots::Single(_) => 1,
            Roots::Pair(_, _) => 2,
        }
    }

    pub fn values(&self) -> Vec<f64> {
        match *self {
            Roots::Single(x) => vec![x],
            Roots::Pair(x1, x2) => vec![x1, x2],
        }
    }
}

impl fmt::Display for Roots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Roots::Single(x) => write!(f, "x = {}", x),
            Roots::Pair(x1, x2) => write!(f, "x1 = {}, x2 = {}", x1, x2),
        }
    }
}

/// Solve `equation` over the reals.
///
/// Fails with `NoRealRoots` when the discriminant is negative.
pub fn solve(equation: &Quadratic) -> Result<Roots, QuadraticError> {
    let discriminant = equation.discriminant();
    debug!(
        a = equation.a(),
        b = equation.b(),
        c = equation.c(),
        discriminant = %discriminant,
        "computed discriminant"
    );

    if discriminant < 0 {
        return Err(QuadraticError::NoRealRoots { discriminant });
    }

    let a = f64::from(equation.a());
    let b = f64::from(equation.b());
    let c = f64::from(equation.c());

    if discriminant == 0 {
        return Ok(Roots::Single(normalize_zero(-b / (2.0 * a))));
    }

    let sqrt_d = (discriminant as f64).sqrt();

    // q = -(b + sign(b)·√d) / 2 never cancels; q/a and c/q are the two roots.
    // q is non-zero because d > 0.
    let (plus, minus) = if b < 0.0 {
        let q = (-b + sqrt_d) / 2.0;
        (q / a, c / q)
    } else {
        let q = -(b + sqrt_d) / 2.0;
        (c / q, q / a)
    };

    Ok(Roots::Pair(normalize_zero(plus), normalize_zero(minus)))
}

/// Map `-0.0` to `0.0` so it never displays as "-0".
fn normalize_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}
