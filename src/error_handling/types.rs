//! Error type definitions.
//!
//! This module defines the error types for the application boundary and the
//! rejection reasons produced by domain normalization.

use std::path::PathBuf;

use log::SetLoggerError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for reading the raw domain lists.
#[derive(Error, Debug)]
pub enum InputError {
    /// Both lists were requested from stdin.
    #[error("Only one list can be read from stdin ('-')")]
    StdinUsedTwice,

    /// The input is not valid UTF-8.
    #[error("Input {} is not valid UTF-8", .0.display())]
    InvalidUtf8(PathBuf),
}

/// Why a raw line was excluded during normalization.
///
/// Rejection is an expected outcome for a best-effort filter, so this is a
/// plain value rather than an error type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIterMacro,
)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Nothing left after trimming and stripping
    Empty,
    /// Longer than 253 characters
    TooLong,
    /// Fails the label grammar (bad characters, empty labels, hyphen placement, label length)
    InvalidSyntax,
    /// Still starts with `www.` after the single `www.` strip
    RedundantWwwPrefix,
}

impl RejectReason {
    /// Human-readable description used in statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::Empty => "empty after cleanup",
            RejectReason::TooLong => "longer than 253 characters",
            RejectReason::InvalidSyntax => "invalid domain syntax",
            RejectReason::RedundantWwwPrefix => "repeated www. prefix",
        }
    }
}
