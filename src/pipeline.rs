//! The directive orchestrator: the ordered sequence of substitutions that
//! turns raw document text into renderer-ready markup.
//!
//! Step order is a hard contract; later steps rely on earlier ones. Fenced
//! directive blocks are handled per-block: one failing block becomes a
//! visible placeholder and never aborts the rest of the document.

use crate::error::PrepressError;
use chrono::{Local, NaiveDate};
use prepress_sanitize::sanitize;
use prepress_sigtable::render_signature_block;
use prepress_timeline::render_timeline;

/// Token replaced with the current date.
pub const DATE_PLACEHOLDER: &str = "[Date]";

/// Marker the downstream renderer understands as a forced page break.
pub const PAGE_BREAK_MARKER: &str = "<div style=\"page-break-after: always\"></div>";

/// Substituted for a directive block whose engine failed outright.
pub const DIRECTIVE_FAILURE_PLACEHOLDER: &str =
    "<p class=\"directive-error\">[directive rendering failed]</p>";

/// Transforms a document using today's date for the `[Date]` placeholder.
pub fn process(document: &str) -> String {
    process_with_date(document, Local::now().date_naive())
}

/// Deterministic variant of [`process`] used by tests and batch tooling.
pub fn process_with_date(document: &str, today: NaiveDate) -> String {
    // 1. Date placeholder, before sanitization can touch surrounding text.
    let text = document.replace(DATE_PLACEHOLDER, &today.format("%m/%d/%Y").to_string());
    // 2. Character sanitization over the whole document.
    let text = sanitize(&text);
    // 3. Canonical line endings so fence scanning sees one form.
    let text = normalize_line_endings(&text);
    // 4./5. Directive blocks, signatures first, in document order.
    let text = replace_directive_blocks(&text, "signatures", |body| {
        render_signature_block(body).map_err(PrepressError::from)
    });
    let text = replace_directive_blocks(&text, "timeline", |body| {
        render_timeline(body).map_err(PrepressError::from)
    });
    // 6. Horizontal rules become explicit page breaks.
    let text = replace_horizontal_rules(&text);
    // 7. Back to the platform convention where it differs.
    restore_platform_line_endings(text)
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(windows)]
fn restore_platform_line_endings(text: String) -> String {
    text.replace('\n', "\r\n")
}

#[cfg(not(windows))]
fn restore_platform_line_endings(text: String) -> String {
    text
}

/// Replaces every ```` ```<tag> ```` fenced block, fences included, with the
/// engine's output. Engine errors are logged and degrade to
/// [`DIRECTIVE_FAILURE_PLACEHOLDER`]. An unclosed fence is left untouched.
fn replace_directive_blocks<F>(text: &str, tag: &str, render: F) -> String
where
    F: Fn(&str) -> Result<String, PrepressError>,
{
    let open = format!("```{tag}");
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if line.trim() == open {
            if let Some(close) = (i + 1..lines.len()).find(|&j| lines[j].trim() == "```") {
                let body = lines[i + 1..close].join("\n");
                match render(&body) {
                    Ok(markup) => out.push(markup.trim_end().to_string()),
                    Err(err) => {
                        log::error!("{tag} directive block failed: {err}");
                        out.push(DIRECTIVE_FAILURE_PLACEHOLDER.to_string());
                    }
                }
                i = close + 1;
                continue;
            }
        }
        out.push(line.to_string());
        i += 1;
    }
    out.join("\n")
}

/// A line of four or more hyphens (horizontal whitespace allowed around it)
/// becomes a forced page break. Runs after directive splicing so rules
/// inside fenced blocks are never touched.
fn replace_horizontal_rules(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.len() >= 4 && trimmed.chars().all(|c| c == '-') {
                PAGE_BREAK_MARKER
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    #[test]
    fn date_placeholder_is_substituted() {
        let out = process_with_date("Effective: [Date].", today());
        assert_eq!(out, "Effective: 08/26/2026.");
    }

    #[test]
    fn horizontal_rules_become_page_breaks() {
        let out = process_with_date("a\n----\nb\n  --------  \nc\n---\nd", today());
        assert_eq!(out.matches(PAGE_BREAK_MARKER).count(), 2);
        // Three hyphens is not a document-level rule.
        assert!(out.contains("\n---\n"));
    }

    #[test]
    fn unclosed_fence_is_left_untouched() {
        let text = "before\n```timeline\nsection S\n";
        let out = process_with_date(text, today());
        assert!(out.contains("```timeline"));
    }

    #[test]
    fn crlf_input_is_normalized() {
        let out = process_with_date("a\r\nb\rc", today());
        #[cfg(not(windows))]
        assert_eq!(out, "a\nb\nc");
    }

    #[test]
    fn non_directive_text_passes_through() {
        let text = "# Heading\n\nplain paragraph\n";
        assert_eq!(process_with_date(text, today()), text);
    }
}
