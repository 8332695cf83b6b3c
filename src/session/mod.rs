//! Interactive session: console I/O, coefficient collection and the
//! collect-then-solve control loop.

pub mod collector;
pub mod console;
pub mod control;
