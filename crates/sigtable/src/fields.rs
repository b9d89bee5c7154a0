//! Deterministic field-identifier synthesis.
//!
//! Kept apart from the table parser so the identifier rules stay
//! unit-testable on their own. The downstream form materializer binds
//! placeholders to interactive fields by these names, so the same
//! (section, signatory, label) triple must always produce the same string.

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `{Section}_{Signatory}_{FieldLabel}` with internal whitespace removed
/// throughout and slashes removed from the label component. A blank
/// signatory name falls back to `Col{index}` (1-based column position).
pub fn field_identifier(section: &str, signatory: &str, column_index: usize, label: &str) -> String {
    let section = strip_whitespace(section);
    let signatory = match strip_whitespace(signatory) {
        s if s.is_empty() => format!("Col{column_index}"),
        s => s,
    };
    let label: String = label
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '/')
        .collect();
    format!("{section}_{signatory}_{label}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_stripped_from_every_component() {
        assert_eq!(
            field_identifier("Approval Signatures", "Project Manager", 1, "Name"),
            "ApprovalSignatures_ProjectManager_Name"
        );
    }

    #[test]
    fn slashes_are_removed_from_the_label_only() {
        assert_eq!(
            field_identifier("Sign Off", "QA Lead", 1, "Date / Time"),
            "SignOff_QALead_DateTime"
        );
    }

    #[test]
    fn blank_signatory_falls_back_to_column_index() {
        assert_eq!(field_identifier("S", "", 2, "Name"), "S_Col2_Name");
        assert_eq!(field_identifier("S", "   ", 3, "Name"), "S_Col3_Name");
    }

    #[test]
    fn identical_triples_are_stable() {
        let a = field_identifier("Reviews", "Director", 1, "Signature");
        let b = field_identifier("Reviews", "Director", 1, "Signature");
        assert_eq!(a, b);
    }
}
