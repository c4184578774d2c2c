//! Common test utilities for terraform-install CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated install directory plus helpers to run the binary
//! - Assertion macros: `assert_created!`, `assert_not_created!`
//! - Fixtures: Answer sets and hand-written install configs

pub mod assertions;
pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
