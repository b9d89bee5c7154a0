//! # prepress-timeline
//!
//! Parses the Gantt-style timeline DSL and renders it as inline SVG.
//!
//! The engine is a pure text transform: [`render_timeline`] builds a typed
//! [`model::TimelineDocument`], computes a [`layout::ChartLayout`], and emits
//! markup. Unparsable lines are skipped, an empty parse degrades to a
//! sentinel message, and whitespace-only input yields an empty string.

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod svg;

pub use error::TimelineError;
pub use model::{Section, Task, TimelineDocument};

/// Sentinel substituted when a non-empty block parses to zero tasks.
pub const NO_TASKS_SENTINEL: &str = "<p class=\"timeline-empty\">No tasks parsed</p>";

/// Renders a timeline directive block to SVG markup.
pub fn render_timeline(text: &str) -> Result<String, TimelineError> {
    if text.trim().is_empty() {
        return Ok(String::new());
    }
    let doc = parser::parse_timeline(text);
    let Some(chart) = layout::ChartLayout::compute(&doc) else {
        log::warn!("timeline block produced no tasks");
        return Ok(NO_TASKS_SENTINEL.to_string());
    };
    svg::render(&doc, &chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_input_render_empty() {
        assert_eq!(render_timeline("").unwrap(), "");
        assert_eq!(render_timeline("   \n\t  ").unwrap(), "");
    }

    #[test]
    fn unparsable_input_yields_sentinel() {
        let out = render_timeline("just some prose\nwith no tasks").unwrap();
        assert!(out.contains("No tasks parsed"));
        assert!(!out.contains("<svg"));
    }

    #[test]
    fn simple_section_renders_svg() {
        let out = render_timeline("section Planning\n    Task 1 :task1, 2025-01-01, 5d").unwrap();
        assert!(out.starts_with("<svg"));
        assert!(out.ends_with("</svg>"));
        assert!(out.contains("Planning"));
        assert!(out.contains("Task 1"));
        assert!(out.contains("class=\"task-bar\""));
        // No title line was given.
        assert!(!out.contains("font-size=\"16\""));
    }

    #[test]
    fn title_is_rendered_when_present() {
        let out = render_timeline("title Roadmap\nsection S\nA :t1, 2025-01-01, 1d").unwrap();
        assert!(out.contains(">Roadmap</text>"));
    }

    #[test]
    fn milestones_render_as_diamonds_not_bars() {
        let out = render_timeline("section S\nShip :m1, 2025-01-10, m").unwrap();
        assert!(out.contains("class=\"milestone\""));
        assert!(!out.contains("class=\"task-bar\""));
        assert!(!out.contains("<rect"));
    }

    #[test]
    fn labels_are_entity_escaped() {
        let out = render_timeline("section A & B\n<x> :t1, 2025-01-01, 1d").unwrap();
        assert!(out.contains("A &amp; B"));
        assert!(out.contains("&lt;x&gt;"));
        assert!(!out.contains("<x>"));
    }

    #[test]
    fn bar_carries_start_date_text() {
        let out = render_timeline("section S\nA :t1, 2025-03-07, 2d").unwrap();
        assert!(out.contains("Mar 7"));
    }
}
