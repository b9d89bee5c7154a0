//! # prepress
//!
//! Directive-processing core that prepares prose-markup documents for an
//! external renderer. The pipeline substitutes the `[Date]` placeholder,
//! sanitizes characters for the rendering surface, splices generated markup
//! in place of ```` ```timeline ```` and ```` ```signatures ```` fenced
//! blocks, and converts horizontal rules into explicit page-break markers.
//!
//! The renderer itself, final page compositing, and the hosting shell are
//! external collaborators; this crate is a pure text transform.

pub mod error;
pub mod pipeline;

pub use error::PrepressError;
pub use pipeline::{
    DATE_PLACEHOLDER, DIRECTIVE_FAILURE_PLACEHOLDER, PAGE_BREAK_MARKER, process,
    process_with_date,
};

// Re-export the engines for embedders that drive them directly.
pub use prepress_sanitize::sanitize;
pub use prepress_sigtable::{field_identifier, render_signature_block};
pub use prepress_timeline::render_timeline;
