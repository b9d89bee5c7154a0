// src/error.rs
//! Unified error type for the document pipeline and CLI.

use thiserror::Error;

/// The main error enum for high-level operations. The orchestrator itself
/// degrades engine failures to inline placeholders, so in practice only the
/// I/O variant reaches callers; the engine variants exist for embedders
/// driving the engines directly.
#[derive(Error, Debug)]
pub enum PrepressError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Timeline engine error: {0}")]
    Timeline(#[from] prepress_timeline::TimelineError),
    #[error("Signature table engine error: {0}")]
    SigTable(#[from] prepress_sigtable::SigTableError),
}
