//! Integration test aggregator
//!
//! This file serves as the entry point for all integration tests.
//! Individual test modules are declared in `suite/mod.rs`.

mod suite;
