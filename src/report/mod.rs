//! Paginated documents: a styled block model, three builders, pagination and
//! PDF output.

pub mod charter;
pub mod layout;
pub mod pdf;
pub mod portfolio;
pub mod project_report;

use crate::catalog;
use crate::config::PortfolioProfile;
use crate::dataset::TabularDataset;
use crate::error::{RenderResult, UnknownKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{fmt, str::FromStr, sync::Arc};

pub const PDF_MIME: &str = "application/pdf";

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static regex should compile"));

/// Collapse runs of whitespace within each line; `\n` is kept as a hard break
/// and blank lines are dropped.
pub fn collapse_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| WHITESPACE.replace_all(line.trim(), " ").into_owned())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Title,
    Name,
    Subtitle,
    Caption,
    Heading,
    Subheading,
    Body,
    Bullet,
    Highlight,
    Footer,
}

impl TextStyle {
    pub fn font_size(self) -> f32 {
        match self {
            TextStyle::Title => 24.0,
            TextStyle::Name => 22.0,
            TextStyle::Subtitle => 16.0,
            TextStyle::Caption => 10.0,
            TextStyle::Heading => 18.0,
            TextStyle::Subheading => 14.0,
            TextStyle::Body | TextStyle::Bullet | TextStyle::Highlight => 11.0,
            TextStyle::Footer => 9.0,
        }
    }

    pub fn bold(self) -> bool {
        matches!(
            self,
            TextStyle::Title
                | TextStyle::Name
                | TextStyle::Subtitle
                | TextStyle::Heading
                | TextStyle::Subheading
                | TextStyle::Highlight
        )
    }

    pub fn centered(self) -> bool {
        matches!(
            self,
            TextStyle::Title
                | TextStyle::Name
                | TextStyle::Subtitle
                | TextStyle::Caption
                | TextStyle::Footer
        )
    }

    pub fn indent(self) -> f32 {
        match self {
            TextStyle::Bullet => 20.0,
            _ => 0.0,
        }
    }

    pub fn space_before(self) -> f32 {
        match self {
            TextStyle::Heading => 25.0,
            TextStyle::Subheading => 15.0,
            TextStyle::Footer => 20.0,
            _ => 0.0,
        }
    }

    pub fn space_after(self) -> f32 {
        match self {
            TextStyle::Title | TextStyle::Subtitle => 30.0,
            TextStyle::Heading => 12.0,
            TextStyle::Name | TextStyle::Caption => 10.0,
            TextStyle::Subheading => 8.0,
            TextStyle::Body | TextStyle::Highlight => 6.0,
            TextStyle::Bullet => 4.0,
            TextStyle::Footer => 0.0,
        }
    }

    /// Line height in points.
    pub fn leading(self) -> f32 {
        self.font_size() * 1.2
    }

    /// Fill color as RGB fractions.
    pub fn color(self) -> (f32, f32, f32) {
        let hex: u32 = match self {
            TextStyle::Title | TextStyle::Heading => 0x1e3a8a,
            TextStyle::Name | TextStyle::Highlight => 0x1e40af,
            TextStyle::Subtitle | TextStyle::Footer => 0x4b5563,
            TextStyle::Caption => 0x6b7280,
            TextStyle::Subheading => 0x065f46,
            TextStyle::Body | TextStyle::Bullet => 0x000000,
        };
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        (channel(16), channel(8), channel(0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text { style: TextStyle, text: String },
    /// Vertical gap in points.
    Spacer(f32),
    PageBreak,
}

/// An ordered sequence of styled blocks. Same inputs, same document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn text(&mut self, style: TextStyle, text: impl AsRef<str>) -> &mut Self {
        self.blocks.push(Block::Text {
            style,
            text: collapse_whitespace(text.as_ref()),
        });
        self
    }

    pub fn body(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.text(TextStyle::Body, text)
    }

    pub fn bullet(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.text(TextStyle::Bullet, text)
    }

    pub fn heading(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.text(TextStyle::Heading, text)
    }

    pub fn subheading(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.text(TextStyle::Subheading, text)
    }

    pub fn spacer(&mut self, points: f32) -> &mut Self {
        self.blocks.push(Block::Spacer(points));
        self
    }

    pub fn page_break(&mut self) -> &mut Self {
        self.blocks.push(Block::PageBreak);
        self
    }

    /// Heading texts in order.
    pub fn sections(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Text {
                    style: TextStyle::Heading,
                    text,
                } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn page_breaks(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::PageBreak))
            .count()
    }

    /// All text blocks joined by newlines, for search and tests.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Datasets the portfolio summary draws from.
#[derive(Debug, Clone)]
pub struct PortfolioInputs {
    pub certifications: Arc<TabularDataset>,
    pub pathway: TabularDataset,
    pub skills: TabularDataset,
    pub knowledge_areas: TabularDataset,
}

impl PortfolioInputs {
    /// Resolved certifications plus the static catalog tables.
    pub fn with_certifications(certifications: Arc<TabularDataset>) -> Self {
        Self {
            certifications,
            pathway: catalog::career_pathway(),
            skills: catalog::translated_skills(),
            knowledge_areas: catalog::capm_knowledge_areas(),
        }
    }
}

/// The downloadable documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Portfolio,
    Charter,
    ProjectReport,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Portfolio,
        DocumentKind::Charter,
        DocumentKind::ProjectReport,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            DocumentKind::Portfolio => "portfolio",
            DocumentKind::Charter => "charter",
            DocumentKind::ProjectReport => "project-report",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Portfolio => "Download Professional Portfolio",
            DocumentKind::Charter => "Download Project Charter",
            DocumentKind::ProjectReport => "Download Professional Project Report",
        }
    }

    pub fn mime(self) -> &'static str {
        PDF_MIME
    }

    /// Download filename stamped with the profile's report date.
    pub fn filename(self, profile: &PortfolioProfile) -> String {
        let stamp = profile.date_stamp();
        match self {
            DocumentKind::Portfolio => {
                format!("{}_PM_Portfolio_{}.pdf", profile.owner_slug(), stamp)
            }
            DocumentKind::Charter => format!("PM_Portfolio_Project_Charter_{}.pdf", stamp),
            DocumentKind::ProjectReport => format!("PM_Portfolio_Project_Report_{}.pdf", stamp),
        }
    }

    pub fn build(self, inputs: &PortfolioInputs, profile: &PortfolioProfile) -> RenderResult<Document> {
        match self {
            DocumentKind::Portfolio => portfolio::build(inputs, profile),
            DocumentKind::Charter => Ok(charter::build(profile)),
            DocumentKind::ProjectReport => Ok(project_report::build(profile)),
        }
    }

    /// Build and render to PDF bytes.
    pub fn render(self, inputs: &PortfolioInputs, profile: &PortfolioProfile) -> RenderResult<Vec<u8>> {
        let document = self.build(inputs, profile)?;
        pdf::render(&document)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DocumentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .into_iter()
            .find(|k| k.slug() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
