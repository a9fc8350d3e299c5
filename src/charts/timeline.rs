use super::{date_at, gridded_axis, plain_axis, require, themed_layout, top_legend, ChartSpec};
use crate::dataset::TabularDataset;
use crate::error::{RenderError, RenderResult};
use plotly::{
    common::{Line, Mode},
    layout::AxisType,
    Plot, Scatter,
};
use std::collections::HashSet;

const BAR_WIDTH: f64 = 20.0;

fn status_color(status: &str) -> &'static str {
    match status {
        "In Progress" => "#3b82f6",
        "Approved" => "#10b981",
        "Planned" => "#8b5cf6",
        "Future" => "#f59e0b",
        _ => super::DEFAULT_COLOR,
    }
}

/// Gantt-style chart: one thick line per task spanning start to finish on a
/// date axis. Each status appears in the legend once.
pub fn build(ds: &TabularDataset) -> RenderResult<ChartSpec> {
    let task = require(ds, "Task")?;
    let start = require(ds, "Start")?;
    let finish = require(ds, "Finish")?;
    let status = require(ds, "Status")?;

    let mut seen = HashSet::new();
    let mut plot = Plot::new();
    let mut points = 0;
    for (i, row) in ds.rows().iter().enumerate() {
        let from = date_at(i, "Start", &row[start])?;
        let to = date_at(i, "Finish", &row[finish])?;
        if to < from {
            return Err(RenderError::InvalidCell {
                row: i,
                column: "Finish".to_string(),
                reason: format!("{} precedes start {}", to, from),
            });
        }
        let label = row[status].to_string();
        let name = row[task].to_string();

        let trace = Scatter::new(vec![from.to_string(), to.to_string()], vec![name.clone(), name])
            .mode(Mode::Lines)
            .name(&label)
            .legend_group(&label)
            .show_legend(seen.insert(label.clone()))
            .line(Line::new().color(status_color(&label)).width(BAR_WIDTH))
            .hover_template(&format!("<b>%{{y}}</b><br>{}<br>{} to {}<extra></extra>", label, from, to));
        plot.add_trace(trace);
        points += 1;
    }

    plot.set_layout(
        themed_layout("Career Pathway Timeline (2025-2029)", 500)
            .x_axis(gridded_axis("Timeline").type_(AxisType::Date))
            .y_axis(plain_axis())
            .legend(top_legend()),
    );
    Ok(ChartSpec::new(plot, points))
}
