//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks keep the `&str`-heavy port trait simple to fake and let
//! tests control exactly what each call returns.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
