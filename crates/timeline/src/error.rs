//! Error type for timeline rendering.

use thiserror::Error;

/// Failures surfacing from [`crate::render_timeline`].
///
/// Parse defects never reach this type; unusable lines are skipped and an
/// empty parse degrades to a sentinel message. Only markup emission can fail.
#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("SVG emission error: {0}")]
    Emit(#[from] std::fmt::Error),
}
