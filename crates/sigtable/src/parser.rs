//! Parser for the constrained pipe-table dialect of signatures blocks.

use crate::error::MalformedReason;
use crate::model::{CellValue, SectionOutcome, SignatureRow, SignatureSection};

/// Splits block text on `---` rule lines and parses each section
/// independently. A malformed section never hides its siblings.
pub fn parse_sections(text: &str) -> Vec<SectionOutcome> {
    split_on_rules(text)
        .into_iter()
        .filter(|section| !section.trim().is_empty())
        .map(|section| parse_section(&section))
        .collect()
}

fn split_on_rules(text: &str) -> Vec<String> {
    let mut sections = vec![String::new()];
    for line in text.lines() {
        if is_rule_line(line) {
            sections.push(String::new());
        } else if let Some(current) = sections.last_mut() {
            current.push_str(line);
            current.push('\n');
        }
    }
    sections
}

/// A section delimiter is a line of exactly three hyphens. Table separator
/// rows also contain dash runs but always carry pipes, so they never match.
fn is_rule_line(line: &str) -> bool {
    line.trim() == "---"
}

fn parse_section(text: &str) -> SectionOutcome {
    let mut title = None;
    let mut body: Vec<&str> = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if title.is_none() && trimmed.starts_with('#') {
            title = Some(trimmed.trim_start_matches('#').trim().to_string());
        } else {
            body.push(line);
        }
    }

    match parse_table(&body) {
        Ok((label_header, signatories, rows)) => SectionOutcome::Table(SignatureSection {
            title,
            label_header,
            signatories,
            rows,
        }),
        Err(reason) => {
            log::warn!("malformed signature table: {reason}");
            SectionOutcome::Malformed { title, reason }
        }
    }
}

type TableParts = (String, Vec<String>, Vec<SignatureRow>);

fn parse_table(body: &[&str]) -> Result<TableParts, MalformedReason> {
    let header_idx = body
        .iter()
        .position(|line| line.contains('|'))
        .ok_or(MalformedReason::MissingHeader)?;
    let separator_idx = body
        .iter()
        .enumerate()
        .skip(header_idx + 1)
        .find(|(_, line)| line.contains('|') && line.contains("--"))
        .map(|(i, _)| i)
        .ok_or(MalformedReason::MissingSeparator)?;

    let header_cells = split_cells(body[header_idx]);
    if header_cells.len() < 2 {
        return Err(MalformedReason::TooFewColumns);
    }
    let label_header = header_cells[0].clone();
    let signatories = header_cells[1..].to_vec();

    let rows = body[separator_idx + 1..]
        .iter()
        .filter(|line| line.contains('|'))
        .filter_map(|line| parse_row(line))
        .collect();

    Ok((label_header, signatories, rows))
}

fn parse_row(line: &str) -> Option<SignatureRow> {
    let cells = split_cells(line);
    if cells.len() < 2 {
        return None;
    }
    Some(SignatureRow {
        label: strip_emphasis(&cells[0]),
        cells: cells[1..].iter().map(|c| classify_cell(c)).collect(),
    })
}

/// Splits on `|`, trims each cell, and drops the edge-empty cells produced
/// by a leading/trailing delimiter. Interior empties survive as cells.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(String::from).collect()
}

/// Drops surrounding markdown emphasis markers from a field label.
fn strip_emphasis(label: &str) -> String {
    label.trim_matches(['*', '_']).trim().to_string()
}

/// A cell is fillable when it holds nothing, a `...` token, or only
/// whitespace and periods; anything else is pre-filled static text.
fn classify_cell(cell: &str) -> CellValue {
    let fillable = cell.trim().is_empty()
        || cell.contains("...")
        || cell.chars().all(|c| c.is_whitespace() || c == '.');
    if fillable {
        CellValue::Fillable
    } else {
        CellValue::Static(cell.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "\
## Approval Signatures

| Field | Project Manager | Director |
|-------|-----------------|----------|
| Name      |     |     |
| Signature | ... | ... |
| Date      |     |     |
";

    #[test]
    fn parses_title_header_and_rows() {
        let outcomes = parse_sections(SIMPLE);
        assert_eq!(outcomes.len(), 1);
        let SectionOutcome::Table(table) = &outcomes[0] else {
            panic!("expected a table");
        };
        assert_eq!(table.title.as_deref(), Some("Approval Signatures"));
        assert_eq!(table.label_header, "Field");
        assert_eq!(table.signatories, vec!["Project Manager", "Director"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1].label, "Signature");
        assert_eq!(table.rows[1].cells, vec![CellValue::Fillable, CellValue::Fillable]);
    }

    #[test]
    fn sections_split_on_three_hyphen_rule() {
        let text = format!("{SIMPLE}\n---\n### Second\n| F | A |\n|---|---|\n| Name | |\n");
        let outcomes = parse_sections(&text);
        assert_eq!(outcomes.len(), 2);
        assert!(matches!(&outcomes[1], SectionOutcome::Table(t) if t.title.as_deref() == Some("Second")));
    }

    #[test]
    fn missing_separator_is_malformed() {
        let outcomes = parse_sections("## T\n| F | A |\n| Name | |\n");
        assert!(matches!(
            &outcomes[0],
            SectionOutcome::Malformed { reason: MalformedReason::MissingSeparator, .. }
        ));
    }

    #[test]
    fn missing_header_is_malformed() {
        let outcomes = parse_sections("## T\nno table here\n");
        assert!(matches!(
            &outcomes[0],
            SectionOutcome::Malformed { reason: MalformedReason::MissingHeader, .. }
        ));
    }

    #[test]
    fn single_column_header_is_malformed() {
        let outcomes = parse_sections("| OnlyOne |\n|---------|\n| x |\n");
        assert!(matches!(
            &outcomes[0],
            SectionOutcome::Malformed { reason: MalformedReason::TooFewColumns, .. }
        ));
    }

    #[test]
    fn prefilled_cells_are_static() {
        let outcomes = parse_sections(
            "| Field | PM |\n|---|---|\n| Name | John Smith |\n| Date | .... |\n",
        );
        let SectionOutcome::Table(table) = &outcomes[0] else {
            panic!("expected a table");
        };
        assert_eq!(table.rows[0].cells[0], CellValue::Static("John Smith".into()));
        // Periods-only cells are placeholders, not content.
        assert_eq!(table.rows[1].cells[0], CellValue::Fillable);
    }

    #[test]
    fn emphasis_is_stripped_from_labels() {
        let outcomes =
            parse_sections("| Field | PM |\n|---|---|\n| **Name** | |\n| _Date_ | |\n");
        let SectionOutcome::Table(table) = &outcomes[0] else {
            panic!("expected a table");
        };
        assert_eq!(table.rows[0].label, "Name");
        assert_eq!(table.rows[1].label, "Date");
    }

    #[test]
    fn short_rows_are_dropped() {
        let outcomes = parse_sections("| Field | PM |\n|---|---|\n| lonely |\n| Name | |\n");
        let SectionOutcome::Table(table) = &outcomes[0] else {
            panic!("expected a table");
        };
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].label, "Name");
    }
}
