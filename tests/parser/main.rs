//! Integration tests for the lantern_parser crate.
//!
//! Drives the standard dispatcher end to end:
//! - Verb lookup and trailing words
//! - Overload selection and kind mismatches
//! - Effort suffixes and argument reuse
//! - Thing resolution in light and dark
//! - Command execution against the world

mod common;
mod dispatch_tests;
mod execution_tests;
mod overload_tests;
mod resolution_tests;
