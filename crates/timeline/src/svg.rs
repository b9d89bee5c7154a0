//! SVG emission for a laid-out timeline.

use crate::error::TimelineError;
use crate::layout::{
    BAR_HEIGHT, ChartLayout, HEADER_HEIGHT, MILESTONE_HALF, MIN_BAR_WIDTH, ROW_HEIGHT,
};
use crate::model::TimelineDocument;
use quick_xml::escape::escape;
use std::fmt::Write;

const BAR_FILL: &str = "#4a7eb5";
const MILESTONE_FILL: &str = "#8e44ad";
const GRID_STROKE: &str = "#dddddd";
const AXIS_TEXT: &str = "#666666";

/// Renders the document as a standalone `<svg>` element.
pub fn render(doc: &TimelineDocument, layout: &ChartLayout) -> Result<String, TimelineError> {
    let mut out = String::new();
    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" \
         viewBox=\"0 0 {w:.0} {h:.0}\" font-family=\"Helvetica, Arial, sans-serif\" font-size=\"12\">",
        w = layout.width,
        h = layout.height,
    )?;

    if let Some(title) = &doc.title {
        writeln!(
            out,
            "  <text x=\"{x:.0}\" y=\"20\" text-anchor=\"middle\" font-size=\"16\" font-weight=\"bold\">{}</text>",
            escape(title.as_str()),
            x = layout.width / 2.0,
        )?;
    }

    render_axis(&mut out, layout)?;
    render_rows(&mut out, doc, layout)?;

    out.push_str("</svg>");
    Ok(out)
}

fn render_axis(out: &mut String, layout: &ChartLayout) -> Result<(), TimelineError> {
    for day in layout.tick_days() {
        let date = layout.min_start + chrono::Duration::days(day);
        let x = layout.x_for(date);
        writeln!(
            out,
            "  <line x1=\"{x:.1}\" y1=\"{top:.0}\" x2=\"{x:.1}\" y2=\"{bottom:.0}\" stroke=\"{GRID_STROKE}\"/>",
            top = HEADER_HEIGHT,
            bottom = layout.height,
        )?;
        writeln!(
            out,
            "  <text x=\"{x:.1}\" y=\"{y:.0}\" text-anchor=\"middle\" font-size=\"10\" fill=\"{AXIS_TEXT}\">{label}</text>",
            y = HEADER_HEIGHT - 6.0,
            label = date.format("%b %-d"),
        )?;
    }
    Ok(())
}

fn render_rows(
    out: &mut String,
    doc: &TimelineDocument,
    layout: &ChartLayout,
) -> Result<(), TimelineError> {
    let mut y = HEADER_HEIGHT;
    for section in &doc.sections {
        if !section.name.is_empty() {
            writeln!(
                out,
                "  <text x=\"8\" y=\"{baseline:.1}\" font-weight=\"bold\" class=\"section-heading\">{}</text>",
                escape(section.name.as_str()),
                baseline = y + ROW_HEIGHT / 2.0 + 4.0,
            )?;
            y += ROW_HEIGHT;
        }
        for task in &section.tasks {
            let baseline = y + ROW_HEIGHT / 2.0 + 4.0;
            writeln!(
                out,
                "  <text x=\"16\" y=\"{baseline:.1}\">{}</text>",
                escape(task.label.as_str()),
            )?;

            let x = layout.x_for(task.start);
            if task.is_milestone {
                let cy = y + ROW_HEIGHT / 2.0;
                writeln!(
                    out,
                    "  <path class=\"milestone\" d=\"M {x:.1} {top:.1} L {right:.1} {cy:.1} L {x:.1} {bottom:.1} L {left:.1} {cy:.1} Z\" fill=\"{MILESTONE_FILL}\"/>",
                    top = cy - MILESTONE_HALF,
                    right = x + MILESTONE_HALF,
                    bottom = cy + MILESTONE_HALF,
                    left = x - MILESTONE_HALF,
                )?;
            } else {
                let width = (task.effective_duration() * layout.day_width).max(MIN_BAR_WIDTH);
                let bar_y = y + (ROW_HEIGHT - BAR_HEIGHT) / 2.0;
                writeln!(
                    out,
                    "  <rect class=\"task-bar\" x=\"{x:.1}\" y=\"{bar_y:.1}\" width=\"{width:.1}\" height=\"{BAR_HEIGHT:.0}\" rx=\"3\" fill=\"{BAR_FILL}\"/>",
                )?;
                writeln!(
                    out,
                    "  <text x=\"{tx:.1}\" y=\"{ty:.1}\" font-size=\"10\" fill=\"#ffffff\">{label}</text>",
                    tx = x + 4.0,
                    ty = bar_y + BAR_HEIGHT - 5.0,
                    label = task.start.format("%b %-d"),
                )?;
            }
            y += ROW_HEIGHT;
        }
    }
    Ok(())
}
