//! Core library for the `apistat` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration parsing, log discovery and parsing, windowed metric
//! aggregation, report rendering, and the dashboard chart. The primary
//! user-facing interface is the `apistat` command-line application; library
//! APIs may evolve as the CLI grows.
pub mod app;
pub mod args;
pub mod charts;
pub mod config;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod report;
