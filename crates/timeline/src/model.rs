//! In-memory representation of a parsed timeline, built in one parse pass
//! and consumed immediately by the SVG renderer.

use chrono::NaiveDate;

/// A whole timeline directive block after parsing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineDocument {
    pub title: Option<String>,
    pub sections: Vec<Section>,
}

impl TimelineDocument {
    /// Total number of tasks across all sections.
    pub fn task_count(&self) -> usize {
        self.sections.iter().map(|s| s.tasks.len()).sum()
    }
}

/// A named group of tasks. A section opened by a `section` line stays open
/// until the next `section` line or end of input. Tasks appearing before any
/// `section` line land in an implicit section with an empty name, which
/// renders no heading row.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), tasks: Vec::new() }
    }
}

/// One task line. Milestones keep their parsed flag but always have an
/// effective duration of zero for layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub label: String,
    pub start: NaiveDate,
    /// Fractional days, >= 0.
    pub duration_days: f64,
    pub is_milestone: bool,
}

impl Task {
    /// Duration used for layout; zero for milestones regardless of the token.
    pub fn effective_duration(&self) -> f64 {
        if self.is_milestone { 0.0 } else { self.duration_days }
    }
}
