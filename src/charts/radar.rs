use super::{int_at, require, themed_layout, ChartSpec, GRID_COLOR, TICK_COLOR, TRANSPARENT};
use crate::dataset::TabularDataset;
use crate::error::RenderResult;
use plotly::{
    common::{Fill, Line, Marker, Mode},
    Plot, ScatterPolar,
};
use serde_json::json;

const ACCENT: &str = "#3b82f6";

/// Filled polar chart of experience level per knowledge area.
///
/// The optional `Color` column paints the individual markers.
pub fn build(ds: &TabularDataset) -> RenderResult<ChartSpec> {
    let area = require(ds, "Knowledge Area")?;
    let level = require(ds, "Experience Level")?;
    let color = ds.column_index("Color");

    let mut r = Vec::with_capacity(ds.row_count());
    let mut theta = Vec::with_capacity(ds.row_count());
    let mut colors = Vec::with_capacity(ds.row_count());
    for (i, row) in ds.rows().iter().enumerate() {
        r.push(int_at(i, "Experience Level", &row[level])?);
        theta.push(row[area].to_string());
        colors.push(color.map_or_else(|| ACCENT.to_string(), |c| row[c].to_string()));
    }
    let points = r.len();

    let trace = ScatterPolar::new(theta, r)
        .name("Experience Level")
        .mode(Mode::LinesMarkers)
        .fill(Fill::ToSelf)
        .fill_color("rgba(59, 130, 246, 0.3)")
        .line(Line::new().color(ACCENT).width(2.0))
        .marker(Marker::new().color_array(colors).size(8))
        .hover_template("<b>%{theta}</b><br>Experience Level: %{r}%<extra></extra>");

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(themed_layout("CAPM Knowledge Areas - Experience Level", 500).show_legend(false));

    let polar = json!({
        "radialaxis": {
            "visible": true,
            "range": [0.0, 100.0],
            "gridcolor": GRID_COLOR,
            "tickfont": { "color": TICK_COLOR }
        },
        "angularaxis": {
            "gridcolor": GRID_COLOR,
            "tickfont": { "color": TICK_COLOR }
        },
        "bgcolor": TRANSPARENT
    });
    Ok(ChartSpec::new(plot, points).with_polar(polar))
}
