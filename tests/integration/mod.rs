//! Integration tests for quadsolve.
//!
//! Sessions are driven end to end through in-memory input and output.

pub mod session_tests;
