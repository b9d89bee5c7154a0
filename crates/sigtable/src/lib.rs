//! # prepress-sigtable
//!
//! Parses the pipe-delimited signature/approval table dialect and emits
//! table markup whose cells are either static text or fillable-field
//! placeholders. Placeholders carry deterministic identifiers
//! (`{Section}_{Signatory}_{FieldLabel}`, whitespace stripped) that the
//! downstream form materializer binds to interactive document fields.

pub mod error;
pub mod fields;
pub mod model;
pub mod parser;
pub mod render;

pub use error::{MalformedReason, SigTableError};
pub use fields::field_identifier;
pub use model::{CellValue, SectionOutcome, SignatureRow, SignatureSection};

/// Renders a signatures directive block to table markup.
pub fn render_signature_block(text: &str) -> Result<String, SigTableError> {
    if text.trim().is_empty() {
        return Ok(String::new());
    }
    let outcomes = parser::parse_sections(text);
    render::render(&outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPROVALS: &str = "\
## Approval Signatures

| Field | Project Manager | Director |
|-------|-----------------|----------|
| Name       |     |     |
| Title      |     |     |
| Department |     |     |
| Signature  | ... | ... |
| Date       |     |     |
";

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render_signature_block("").unwrap(), "");
        assert_eq!(render_signature_block("  \n\t ").unwrap(), "");
    }

    #[test]
    fn approval_table_yields_deterministic_field_names() {
        let out = render_signature_block(APPROVALS).unwrap();
        // 5 rows x 2 signatories = 10 distinct fields.
        assert_eq!(out.matches("fillable-field").count(), 10);
        for id in [
            "ApprovalSignatures_ProjectManager_Name",
            "ApprovalSignatures_ProjectManager_Title",
            "ApprovalSignatures_ProjectManager_Department",
            "ApprovalSignatures_ProjectManager_Signature",
            "ApprovalSignatures_ProjectManager_Date",
            "ApprovalSignatures_Director_Name",
            "ApprovalSignatures_Director_Title",
            "ApprovalSignatures_Director_Department",
            "ApprovalSignatures_Director_Signature",
            "ApprovalSignatures_Director_Date",
        ] {
            assert!(out.contains(&format!("data-field=\"{id}\"")), "missing {id}");
        }
    }

    #[test]
    fn signature_rows_get_the_taller_placeholder_class() {
        let out = render_signature_block(APPROVALS).unwrap();
        assert_eq!(out.matches("fillable-signature").count(), 2);
    }

    #[test]
    fn prefilled_cells_render_as_static_text() {
        let out = render_signature_block(
            "## Sign Off\n| Field | PM | QA |\n|---|---|---|\n| Name | John Smith | |\n",
        )
        .unwrap();
        assert!(out.contains(">John Smith</span>"));
        assert!(!out.contains("fillable-field fillable-signature"));
        // The pre-filled triple is tagged but never fillable.
        assert!(out.contains("data-field=\"SignOff_PM_Name\">John Smith"));
        assert!(out.contains("class=\"fillable-field\" data-field=\"SignOff_QA_Name\""));
    }

    #[test]
    fn text_is_escaped() {
        let out = render_signature_block(
            "## R&D <Review>\n| Field | R&D Lead |\n|---|---|\n| Name | A & B |\n",
        )
        .unwrap();
        assert!(out.contains("R&amp;D &lt;Review&gt;"));
        assert!(out.contains("A &amp; B"));
        assert!(!out.contains("<Review>"));
    }

    #[test]
    fn malformed_table_renders_inline_diagnostic_and_siblings_survive() {
        let out = render_signature_block(
            "## Broken\nno pipes at all\n---\n## Fine\n| F | A |\n|---|---|\n| Name | |\n",
        )
        .unwrap();
        assert!(out.contains("table-error"));
        assert!(out.contains("Fine_A_Name"));
    }

    #[test]
    fn blank_headers_render_non_collapsing_blanks() {
        let out = render_signature_block("| Field | | X |\n|---|---|---|\n| Name | | |\n").unwrap();
        assert!(out.contains("<th>&#160;</th>"));
        // Blank signatory names fall back to positional identifiers.
        assert!(out.contains("data-field=\"_Col1_Name\""));
    }
}
