//! Test Module
//!
//! Cross-module test suite for Heartwell core.
//!
//! ## Test Categories
//! - `brain_tests`: classification, crisis escalation, composition and rendering
//! - `counselor_tests`: remote-then-local pipeline with mock backends
//! - `transcript_tests`: session transcript export

pub mod brain_tests;
pub mod transcript_tests;
