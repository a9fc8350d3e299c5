use super::{gridded_axis, int_at, plain_axis, require, themed_layout, top_legend, ChartSpec};
use crate::dataset::TabularDataset;
use crate::error::RenderResult;
use plotly::{
    common::{Marker, Orientation, TextPosition},
    Bar, Plot,
};

fn status_color(status: &str) -> &'static str {
    match status {
        "In Progress" => "#3b82f6",
        "Approved" => "#10b981",
        "Completed" => "#8b5cf6",
        "Planned" => "#f59e0b",
        _ => super::DEFAULT_COLOR,
    }
}

#[derive(Default)]
struct Group {
    status: String,
    credentials: Vec<String>,
    progress: Vec<i64>,
}

/// Horizontal progress bars, one trace per status in first-seen order.
pub fn build(ds: &TabularDataset) -> RenderResult<ChartSpec> {
    let credential = require(ds, "Credential")?;
    let status = require(ds, "Status")?;
    let progress = require(ds, "Progress")?;

    let mut groups: Vec<Group> = Vec::new();
    for (i, row) in ds.rows().iter().enumerate() {
        let label = row[status].to_string();
        let pct = int_at(i, "Progress", &row[progress])?;

        let idx = match groups.iter().position(|g| g.status == label) {
            Some(idx) => idx,
            None => {
                groups.push(Group {
                    status: label,
                    ..Group::default()
                });
                groups.len() - 1
            }
        };
        groups[idx].credentials.push(row[credential].to_string());
        groups[idx].progress.push(pct);
    }

    let mut plot = Plot::new();
    let mut points = 0;
    for g in groups {
        points += g.progress.len();
        let text: Vec<String> = g.progress.iter().map(|p| format!("{}%", p)).collect();
        let trace = Bar::new(g.progress, g.credentials)
            .orientation(Orientation::Horizontal)
            .name(&g.status)
            .marker(Marker::new().color(status_color(&g.status)))
            .text_array(text)
            .text_position(TextPosition::Outside)
            .hover_template(&format!(
                "<b>%{{y}}</b><br>Progress: %{{x}}%<br>Status: {}<extra></extra>",
                g.status
            ));
        plot.add_trace(trace);
    }

    plot.set_layout(
        themed_layout("PM Credentials Progress Status", 400)
            .bar_gap(0.3)
            .x_axis(gridded_axis("Progress (%)").range(vec![0.0, 110.0]))
            .y_axis(plain_axis())
            .legend(top_legend()),
    );
    Ok(ChartSpec::new(plot, points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::credential_progress;
    use crate::error::RenderError;
    use serde_json::json;

    #[test]
    fn groups_by_status_without_dropping_rows() {
        let spec = build(&credential_progress()).unwrap();
        let json = spec.to_value().unwrap();
        let names: Vec<_> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["In Progress", "Approved", "Completed", "Planned"]);
        assert_eq!(spec.point_count(), 6);
    }

    #[test]
    fn labels_are_percentages() {
        let json = build(&credential_progress()).unwrap().to_value().unwrap();
        let in_progress = &json["data"][0];
        assert_eq!(in_progress["type"], "bar");
        assert_eq!(in_progress["orientation"], "h");
        assert_eq!(in_progress["y"], json!(["Google PM", "Risk Mgmt"]));
        assert_eq!(in_progress["x"], json!([50, 60]));
        assert_eq!(in_progress["text"], json!(["50%", "60%"]));
        assert_eq!(json["layout"]["xaxis"]["range"], json!([0.0, 110.0]));
    }

    #[test]
    fn text_progress_fails() {
        let ds = TabularDataset::literal(
            &["Credential", "Status", "Progress"],
            vec![vec!["PMP".into(), "Planned".into(), "half".into()]],
        );
        assert!(matches!(
            build(&ds).err(),
            Some(RenderError::InvalidCell { row: 0, .. })
        ));
    }
}
