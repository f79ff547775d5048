//! Core library for the `storyfix` story rewriter.
//!
//! Removes empty `args: {}` blocks that sit directly under
//! `export const <Name>: Story = {` lines in component story files, using two
//! textual substitution rules applied in a fixed order.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Module defining the entry point logic shared by both binaries.
pub mod entry_point;

/// Error types for file access, path containment and configuration.
pub mod error;

/// Module for CLI output formatting with colored text.
pub mod output;

/// The per-file rewriter and its outcomes.
pub mod rewriter;

/// Substitution rules for story files.
pub mod rules;

/// Module containing utility functions.
pub mod utils;

pub use error::StoryFixError;
pub use rewriter::{FileOutcome, FixStatus, Rewriter};
