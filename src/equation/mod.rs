//! Quadratic equation model and solver.

pub mod coefficients;
pub mod solver;
