//! Chart specifications as Plotly figure JSON.
//!
//! Builders are pure: a dataset goes in, a [`ChartSpec`] wrapping a
//! `plotly::Plot` comes out. The page hands its JSON to plotly.js unchanged.

pub mod progress;
pub mod radar;
pub mod timeline;

use crate::catalog;
use crate::dataset::{Scalar, TabularDataset};
use crate::error::{RenderError, RenderResult, UnknownKind};
use chrono::NaiveDate;
use plotly::{
    common::{Font, Orientation, Title},
    layout::{Axis, Legend},
    Layout, Plot,
};
use serde_json::Value;
use std::{fmt, str::FromStr};

const FONT_COLOR: &str = "#e2e8f0";
const TICK_COLOR: &str = "#94a3b8";
const GRID_COLOR: &str = "rgba(255,255,255,0.1)";
const TRANSPARENT: &str = "rgba(0,0,0,0)";
pub(crate) const DEFAULT_COLOR: &str = "#64748b";

/// A built figure plus the number of dataset rows plotted into it.
pub struct ChartSpec {
    plot: Plot,
    points: usize,
    polar: Option<Value>,
}

impl ChartSpec {
    fn new(plot: Plot, points: usize) -> Self {
        Self {
            plot,
            points,
            polar: None,
        }
    }

    /// `plotly` has no polar layout type; the axes are merged in as raw JSON.
    fn with_polar(mut self, polar: Value) -> Self {
        self.polar = Some(polar);
        self
    }

    /// Dataset rows that ended up in a trace.
    pub fn point_count(&self) -> usize {
        self.points
    }

    /// The figure as `{"data": [...], "layout": {...}}`.
    pub fn to_value(&self) -> RenderResult<Value> {
        let mut figure: Value = serde_json::from_str(&self.plot.to_json())?;
        if let Some(polar) = &self.polar {
            figure["layout"]["polar"] = polar.clone();
        }
        Ok(figure)
    }

    pub fn to_json(&self) -> RenderResult<String> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }
}

fn tick_font() -> Font {
    Font::new().color(TICK_COLOR)
}

fn plain_axis() -> Axis {
    Axis::new().show_grid(false).tick_font(tick_font())
}

fn gridded_axis(title: &str) -> Axis {
    Axis::new()
        .title(Title::new(title))
        .show_grid(true)
        .grid_color(GRID_COLOR)
        .tick_font(tick_font())
}

fn top_legend() -> Legend {
    Legend::new()
        .orientation(Orientation::Horizontal)
        .x(1.0)
        .y(1.02)
}

/// Dark transparent theme shared by every chart on the page.
fn themed_layout(title: &str, height: usize) -> Layout {
    Layout::new()
        .title(Title::new(title))
        .height(height)
        .font(Font::new().color(FONT_COLOR).family("Inter"))
        .plot_background_color(TRANSPARENT)
        .paper_background_color(TRANSPARENT)
}

/// The charts the dashboard can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Timeline,
    Progress,
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Timeline, ChartKind::Progress, ChartKind::Radar];

    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::Timeline => "timeline",
            ChartKind::Progress => "progress",
            ChartKind::Radar => "radar",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Timeline => "Career Pathway Timeline",
            ChartKind::Progress => "PM Credentials Progress",
            ChartKind::Radar => "CAPM Knowledge Areas",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ChartKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|k| k.slug() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Build one of the dashboard charts from its catalog dataset.
pub fn build_chart(kind: ChartKind) -> RenderResult<ChartSpec> {
    match kind {
        ChartKind::Timeline => timeline::build(&catalog::pathway_timeline()),
        ChartKind::Progress => progress::build(&catalog::credential_progress()),
        ChartKind::Radar => radar::build(&catalog::capm_knowledge_areas()),
    }
}

pub(crate) fn require(ds: &TabularDataset, name: &str) -> RenderResult<usize> {
    ds.column_index(name)
        .ok_or_else(|| RenderError::MissingColumn(name.to_string()))
}

pub(crate) fn date_at(row: usize, column: &str, cell: &Scalar) -> RenderResult<NaiveDate> {
    cell.as_date().ok_or_else(|| RenderError::InvalidCell {
        row,
        column: column.to_string(),
        reason: format!("`{}` is not a YYYY-MM-DD date", cell),
    })
}

pub(crate) fn int_at(row: usize, column: &str, cell: &Scalar) -> RenderResult<i64> {
    cell.as_i64().ok_or_else(|| RenderError::InvalidCell {
        row,
        column: column.to_string(),
        reason: format!("`{}` is not an integer", cell),
    })
}
