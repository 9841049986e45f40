//! Error types for the boundaries of the domain.
//!
//! The projection itself never fails: absent data degrades to zero-valued
//! display strings. Only decoding a snapshot document can go wrong.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum VisitorStatsError {
    #[error("invalid snapshot document")]
    Snapshot(#[from] serde_json::Error),
}
