//! End-to-end tests for masmcp-eval
//!
//! These tests drive the table emitter, fixture validator and manifest
//! writer against temporary directories, and run the binary for exit codes.

pub mod helpers;
pub mod manifest;
pub mod scenarios;

pub use helpers::*;
