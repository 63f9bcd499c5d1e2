#![allow(unused_crate_dependencies)] // false positives because there is both a library and a binary

//! Integration Tests (IT)
//!
//! All integration tests are contained in this single binary and organized
//! in modules, so that `cargo test` links the workspace crates once instead
//! of once per test file.
