//! Table markup emission for parsed signature sections.

use crate::error::SigTableError;
use crate::fields::field_identifier;
use crate::model::{CellValue, SectionOutcome, SignatureSection};
use quick_xml::escape::escape;
use std::fmt::Write;

/// Non-collapsing blank for empty header cells and field placeholders.
const BLANK: &str = "&#160;";

/// Renders every parsed section; malformed sections become an inline
/// diagnostic in place of their table.
pub fn render(outcomes: &[SectionOutcome]) -> Result<String, SigTableError> {
    let mut out = String::new();
    for outcome in outcomes {
        match outcome {
            SectionOutcome::Table(table) => render_table(&mut out, table)?,
            SectionOutcome::Malformed { title, reason } => {
                if let Some(title) = title {
                    writeln!(out, "<h3>{}</h3>", escape(title.as_str()))?;
                }
                writeln!(
                    out,
                    "<p class=\"table-error\">[signature table: {reason}]</p>"
                )?;
            }
        }
    }
    Ok(out)
}

fn render_table(out: &mut String, table: &SignatureSection) -> Result<(), SigTableError> {
    let section_name = table.title.as_deref().unwrap_or("");
    if let Some(title) = &table.title {
        writeln!(out, "<h3>{}</h3>", escape(title.as_str()))?;
    }

    writeln!(out, "<table class=\"signature-table\">")?;
    write!(out, "  <tr>{}", header_cell(&table.label_header))?;
    for signatory in &table.signatories {
        write!(out, "{}", header_cell(signatory))?;
    }
    writeln!(out, "</tr>")?;

    for row in &table.rows {
        write!(out, "  <tr><td><b>{}</b></td>", escape(row.label.as_str()))?;
        let signature_row = row.label.to_ascii_lowercase().contains("signature");
        for (index, signatory) in table.signatories.iter().enumerate() {
            let id = field_identifier(section_name, signatory, index + 1, &row.label);
            // Rows shorter than the column list leave trailing cells fillable.
            match row.cells.get(index) {
                Some(CellValue::Static(text)) => {
                    write!(
                        out,
                        "<td><span data-field=\"{}\">{}</span></td>",
                        escape(id.as_str()),
                        escape(text.as_str()),
                    )?;
                }
                Some(CellValue::Fillable) | None => {
                    let class = if signature_row {
                        "fillable-field fillable-signature"
                    } else {
                        "fillable-field"
                    };
                    write!(
                        out,
                        "<td><span class=\"{class}\" data-field=\"{}\">{BLANK}</span></td>",
                        escape(id.as_str()),
                    )?;
                }
            }
        }
        writeln!(out, "</tr>")?;
    }
    writeln!(out, "</table>")?;
    Ok(())
}

fn header_cell(text: &str) -> String {
    if text.trim().is_empty() {
        format!("<th>{BLANK}</th>")
    } else {
        format!("<th>{}</th>", escape(text))
    }
}
