//! Test Module
//!
//! Cross-module test suite for preference detection.
//!
//! ## Test Categories
//! - `preference_tests`: Classification properties, vocabularies, strength analysis
//! - `probe_tests`: Probe configuration and end-to-end rendering

pub mod preference_tests;
