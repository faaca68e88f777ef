//! domain_list_filter library: domain list cleanup and comparison
//!
//! This library cleans up two user-supplied lists of domain names (stripping
//! schemes, `www.` prefixes, paths, ports and casing), deduplicates and
//! validates them, groups the survivors by apex domain, and compares the two
//! lists (only in A, only in B, in both, combined).
//!
//! # Example
//!
//! ```
//! use domain_list_filter::{compare_texts, ListProcessor};
//!
//! let report = compare_texts(
//!     "example.com\nsub.example.com\nWWW.Example.com",
//!     "example.com\nother.org",
//!     &ListProcessor::default(),
//! );
//! assert_eq!(report.counts.only_a, 1);
//! assert_eq!(report.counts.only_b, 1);
//! assert_eq!(report.counts.both, 1);
//! assert_eq!(report.counts.combined, 3);
//! ```
//!
//! Everything is synchronous and pure apart from reading the input files in
//! [`run_comparison`].

#![warn(missing_docs)]

mod app;
mod compare;
pub mod config;
mod domain;
mod error_handling;
mod grouping;
pub mod initialization;
mod processing;

// Re-export public API
pub use app::{render, render_json, render_text, summary_line};
pub use compare::{compare, ComparisonCounts, ComparisonResult};
pub use config::{Config, LogFormat, LogLevel, OutputFormat, Section};
pub use domain::{normalize, normalize_with_reason, CanonicalDomain};
pub use error_handling::{InitializationError, InputError, ListStats, RejectReason};
pub use grouping::{group, DomainGroup, GroupedResult};
pub use processing::{ListProcessor, ProcessedList};
pub use run::{compare_texts, run_comparison, ComparisonReport};

// Internal run module (ties input reading, processing and comparison together)
mod run {
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{debug, info};
    use serde::Serialize;

    use crate::app::input::{ensure_single_stdin, read_list};
    use crate::app::statistics::log_list_statistics;
    use crate::compare::{compare, ComparisonCounts, ComparisonResult};
    use crate::config::Config;
    use crate::error_handling::ListStats;
    use crate::processing::ListProcessor;

    /// Results of comparing two domain lists.
    #[derive(Debug, Clone, Serialize)]
    pub struct ComparisonReport {
        /// Counts of each comparison view
        pub counts: ComparisonCounts,
        /// The four grouped views
        pub result: ComparisonResult,
        /// Line accounting for list A
        pub stats_a: ListStats,
        /// Line accounting for list B
        pub stats_b: ListStats,
    }

    /// Compares two raw, newline-delimited domain lists.
    ///
    /// Never fails: malformed lines are dropped and lines beyond the
    /// processor's cap are ignored.
    pub fn compare_texts(raw_a: &str, raw_b: &str, processor: &ListProcessor) -> ComparisonReport {
        let processed_a = processor.process_with_stats(raw_a);
        let processed_b = processor.process_with_stats(raw_b);

        let result = compare(&processed_a.grouped, &processed_b.grouped);
        let counts = result.counts();

        ComparisonReport {
            counts,
            result,
            stats_a: processed_a.stats,
            stats_b: processed_b.stats,
        }
    }

    /// Reads both lists named in `config` and compares them.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Both lists are requested from stdin
    /// - An input file cannot be read or is not valid UTF-8
    ///
    /// Domain content never causes an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use domain_list_filter::{run_comparison, Config};
    /// use std::path::PathBuf;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config {
    ///     list_a: PathBuf::from("a.txt"),
    ///     list_b: PathBuf::from("b.txt"),
    ///     ..Default::default()
    /// };
    /// let report = run_comparison(&config)?;
    /// println!("{} domains in common", report.counts.both);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run_comparison(config: &Config) -> Result<ComparisonReport> {
        let start_time = Instant::now();
        ensure_single_stdin(&config.list_a, &config.list_b)?;

        let raw_a = read_list(&config.list_a)
            .with_context(|| format!("Failed to read list A from {}", config.list_a.display()))?;
        let raw_b = read_list(&config.list_b)
            .with_context(|| format!("Failed to read list B from {}", config.list_b.display()))?;
        debug!(
            "Read {} bytes for list A and {} bytes for list B",
            raw_a.len(),
            raw_b.len()
        );

        let processor = ListProcessor::new(config.max_entries);
        let report = compare_texts(&raw_a, &raw_b, &processor);

        if config.show_stats {
            log_list_statistics("A", &report.stats_a);
            log_list_statistics("B", &report.stats_b);
        }
        info!(
            "Compared {} and {} domains in {:.3}s",
            report.stats_a.accepted,
            report.stats_b.accepted,
            start_time.elapsed().as_secs_f64()
        );

        Ok(report)
    }
}
