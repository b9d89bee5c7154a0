//! Typed model for one signatures directive block.

use crate::error::MalformedReason;

/// One table within a signatures block. Blocks may hold several, separated
/// by `---` lines.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureSection {
    pub title: Option<String>,
    /// Header text of the leading label column.
    pub label_header: String,
    /// Signatory column names, in table order. May contain blanks.
    pub signatories: Vec<String>,
    pub rows: Vec<SignatureRow>,
}

/// A data row: the field label plus cells aligned positionally to the
/// signatory columns. Rows shorter than the column list leave the missing
/// trailing cells implicitly fillable.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureRow {
    /// Emphasis markup already stripped.
    pub label: String,
    pub cells: Vec<CellValue>,
}

/// A signatory cell is either destined to become an interactive field or
/// carries pre-filled static text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Fillable,
    Static(String),
}

/// Parse outcome for one `---`-delimited section of the block.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionOutcome {
    Table(SignatureSection),
    Malformed {
        title: Option<String>,
        reason: MalformedReason,
    },
}
