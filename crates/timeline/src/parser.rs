//! Line-oriented parser for the timeline DSL.
//!
//! Each trimmed, non-blank line is classified by an ordered list of
//! discriminator functions; the first match wins. Lines no discriminator
//! recognizes are skipped so one bad line never poisons the block.

use crate::model::{Section, Task, TimelineDocument};
use chrono::NaiveDate;

/// What a single input line contributes to the document.
#[derive(Debug, Clone, PartialEq)]
enum LineDirective {
    Title(String),
    /// Recognized but deliberately without effect (`dateFormat`, `axisFormat`).
    Ignored,
    Section(String),
    Task(Task),
}

/// Discriminators in priority order. Extending the ignored-directive set is
/// a one-line change in `classify_ignored`.
const CLASSIFIERS: &[fn(&str) -> Option<LineDirective>] = &[
    classify_title,
    classify_ignored,
    classify_section,
    classify_task,
];

/// Builds a [`TimelineDocument`] from raw directive-block text.
pub fn parse_timeline(text: &str) -> TimelineDocument {
    let mut doc = TimelineDocument::default();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match CLASSIFIERS.iter().find_map(|classify| classify(line)) {
            Some(LineDirective::Title(title)) => doc.title = Some(title),
            Some(LineDirective::Ignored) => {}
            Some(LineDirective::Section(name)) => doc.sections.push(Section::new(name)),
            Some(LineDirective::Task(task)) => {
                if doc.sections.is_empty() {
                    doc.sections.push(Section::new(""));
                }
                if let Some(section) = doc.sections.last_mut() {
                    section.tasks.push(task);
                }
            }
            None => log::debug!("skipping unrecognized timeline line: {line:?}"),
        }
    }
    doc
}

/// If `line` opens with `keyword` (case-insensitive) followed by whitespace
/// or end of line, returns the trimmed remainder.
fn keyword_rest<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &line[keyword.len()..];
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

fn classify_title(line: &str) -> Option<LineDirective> {
    keyword_rest(line, "title").map(|rest| LineDirective::Title(rest.to_string()))
}

fn classify_ignored(line: &str) -> Option<LineDirective> {
    ["dateFormat", "axisFormat"]
        .into_iter()
        .find_map(|kw| keyword_rest(line, kw))
        .map(|_| LineDirective::Ignored)
}

fn classify_section(line: &str) -> Option<LineDirective> {
    keyword_rest(line, "section").map(|rest| LineDirective::Section(rest.to_string()))
}

/// `<label> :<id>, <date>[, <duration>]`. Lines without a colon, with fewer
/// than two comma tokens, or with an unparsable date are not task lines.
fn classify_task(line: &str) -> Option<LineDirective> {
    let (label, rest) = line.split_once(':')?;
    let tokens: Vec<&str> = rest
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() < 2 {
        return None;
    }
    let id_token = tokens[0];
    let start = parse_date(tokens[1])?;
    let duration_token = tokens.get(2).copied().unwrap_or("1d");

    let is_milestone = is_milestone_token(duration_token) || is_milestone_id(id_token);
    let duration_days = if is_milestone {
        0.0
    } else {
        parse_duration(duration_token)
    };

    Some(LineDirective::Task(Task {
        label: label.trim().to_string(),
        start,
        duration_days,
        is_milestone,
    }))
}

/// Accepted date forms, tried in order; the first successful parse wins.
/// chrono's numeric specifiers already accept unpadded fields, so the loose
/// `YYYY-M-D` and `M/D/YYYY` forms ride on the padded patterns.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    // General fallback forms for hand-written dates.
    "%d %B %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

pub(crate) fn parse_date(token: &str) -> Option<NaiveDate> {
    let token = token.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}

fn is_milestone_token(token: &str) -> bool {
    token.eq_ignore_ascii_case("m") || token.eq_ignore_ascii_case("milestone")
}

/// An id token of `m`/`milestone` followed by only digits also marks a
/// milestone, e.g. `m1` or `milestone3`.
fn is_milestone_id(id: &str) -> bool {
    let lower = id.to_ascii_lowercase();
    let digits = lower
        .strip_prefix("milestone")
        .or_else(|| lower.strip_prefix('m'));
    match digits {
        Some(rest) => rest.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

/// Duration in fractional days. `<number>d` or a bare number is days;
/// `<number>h` is hours; a number-free `h` token means one hour.
pub(crate) fn parse_duration(token: &str) -> f64 {
    let token = token.trim();
    let in_hours = token.ends_with(['h', 'H']);
    let numeric: String = token
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let value = numeric.parse::<f64>().unwrap_or(1.0);
    if in_hours { value / 24.0 } else { value }
}
