//! Chart geometry derived from a parsed timeline.
//!
//! Pure arithmetic; the SVG emitter consumes the computed layout without
//! revisiting the document's dates.

use crate::model::TimelineDocument;
use chrono::NaiveDate;
use itertools::Itertools;

pub const SVG_WIDTH: f64 = 1000.0;
pub const LABEL_COL_WIDTH: f64 = 200.0;
pub const CHART_RIGHT_PAD: f64 = 20.0;
pub const HEADER_HEIGHT: f64 = 48.0;
pub const ROW_HEIGHT: f64 = 28.0;
pub const BAR_HEIGHT: f64 = 18.0;
pub const MIN_BAR_WIDTH: f64 = 2.0;
pub const MILESTONE_HALF: f64 = 6.0;
pub const MIN_SVG_HEIGHT: f64 = 120.0;
pub const BOTTOM_PAD: f64 = 16.0;

/// Resolved geometry for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub min_start: NaiveDate,
    /// Chart span in whole days, always >= 1.
    pub total_days: i64,
    pub day_width: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartLayout {
    /// Computes the layout, or `None` when the document holds no tasks.
    pub fn compute(doc: &TimelineDocument) -> Option<Self> {
        let mut min_start: Option<NaiveDate> = None;
        let mut max_end_offset = 0.0_f64;

        for task in doc.sections.iter().flat_map(|s| s.tasks.iter()) {
            min_start = Some(match min_start {
                Some(cur) => cur.min(task.start),
                None => task.start,
            });
        }
        let min_start = min_start?;
        for task in doc.sections.iter().flat_map(|s| s.tasks.iter()) {
            let offset = (task.start - min_start).num_days() as f64 + task.effective_duration();
            max_end_offset = max_end_offset.max(offset);
        }

        let total_days = (max_end_offset.ceil() as i64).max(1);
        let chart_width = SVG_WIDTH - LABEL_COL_WIDTH - CHART_RIGHT_PAD;
        let day_width = (chart_width / total_days as f64).max(1.0);

        let heading_rows = doc.sections.iter().filter(|s| !s.name.is_empty()).count();
        let rows = doc.task_count() + heading_rows;
        let height = (HEADER_HEIGHT + rows as f64 * ROW_HEIGHT + BOTTOM_PAD).max(MIN_SVG_HEIGHT);

        Some(Self {
            min_start,
            total_days,
            day_width,
            width: SVG_WIDTH,
            height,
        })
    }

    /// Horizontal pixel position of a date on the chart.
    pub fn x_for(&self, date: NaiveDate) -> f64 {
        LABEL_COL_WIDTH + (date - self.min_start).num_days() as f64 * self.day_width
    }

    /// Day offsets at which axis ticks are drawn. Daily up to a month's
    /// span, then every `ceil(total/10)` days, always ending on the final
    /// day exactly once.
    pub fn tick_days(&self) -> Vec<i64> {
        let step = if self.total_days <= 31 {
            1
        } else {
            (self.total_days + 9) / 10
        };
        (0..=self.total_days)
            .step_by(step as usize)
            .chain(std::iter::once(self.total_days))
            .dedup()
            .collect()
    }
}
