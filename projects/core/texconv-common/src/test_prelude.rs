//! Common test imports and utilities for the common crate's tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use proptest::prelude::*;
pub use rstest::rstest;
