//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization and input reading
//! - Rejection reasons for lines excluded by normalization
//! - Per-list processing statistics
//!
//! Only the application boundary can fail. Domain content never produces an
//! error; a malformed line is just counted under its `RejectReason`.

mod stats;
mod types;

// Re-export public API
pub use stats::ListStats;
pub use types::{InitializationError, InputError, RejectReason};
