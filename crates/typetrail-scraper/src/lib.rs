#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Trace scraper: turns an inference-engine spew into a provenance model.
//!
//! The pipeline:
//! - `classify` - per-line classification into typed trace records
//! - `scrape` - two-pass graph construction over the classified records
//!
//! Input is one newline-delimited text blob, consumed as a single batch.
//! Lines the classifier does not recognize are dropped silently; trace
//! sources routinely interleave unrelated diagnostic output. Structural
//! inconsistencies in the recognized records, by contrast, abort the whole
//! build: a partially-constructed model is never returned.

pub mod classify;
pub mod scrape;

#[cfg(test)]
mod scrape_tests;

pub use classify::{Op, classify};
pub use scrape::scrape;

/// Fatal trace inconsistencies detected during graph construction.
///
/// These indicate the trace itself is broken (truncated or reordered
/// input), not a malformed single line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrapeError {
    /// An `addType` record targeted a typeset no `typeSet` record declares.
    #[error("line {line}: adding type to nonexistent typeset `{typeset}`")]
    UnknownTypeset { line: usize, typeset: String },

    /// A `resolve` record referenced a constraint no `addConstraint`
    /// record declares.
    #[error("line {line}: resolving nonexistent constraint `{constraint}`")]
    UnknownConstraint { line: usize, constraint: String },

    /// An `addConstraint` record named a source typeset that is declared
    /// nowhere in the trace.
    #[error("constraint `{constraint}` flows from nonexistent typeset `{typeset}`")]
    UnknownConstraintSource { constraint: String, typeset: String },
}
