//! Error types for signature-table rendering.

use thiserror::Error;

/// Failures surfacing from [`crate::render_signature_block`]. Malformed
/// tables are not errors; they degrade to inline diagnostics per section.
#[derive(Error, Debug)]
pub enum SigTableError {
    #[error("table emission error: {0}")]
    Emit(#[from] std::fmt::Error),
}

/// Why a section could not be parsed as a table. Rendered inline in place
/// of the table, never propagated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("missing table header row")]
    MissingHeader,
    #[error("missing table separator row")]
    MissingSeparator,
    #[error("table needs a label column and at least one signatory column")]
    TooFewColumns,
}
