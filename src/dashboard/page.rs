//! Server-rendered dashboard markup.

use crate::catalog::certification_count;
use crate::charts::ChartKind;
use crate::config::PortfolioProfile;
use crate::dataset::TabularDataset;
use crate::provision::{Origin, Resolution};
use crate::report::DocumentKind;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const SPRINT_PHASES: [(&str, &str, &str); 4] = [
    ("#3b82f6", "Initiation", "Requirements, technology selection, charter"),
    ("#10b981", "Planning", "Architecture, data modeling, wireframes"),
    ("#8b5cf6", "Development", "Core features, charts, fallbacks"),
    ("#f59e0b", "Testing & Deployment", "Testing, deployment, documentation"),
];

const STYLE: &str = r#"
body { margin: 0; background: #0f172a; color: #e2e8f0; font-family: Inter, Arial, sans-serif; }
main { max-width: 1200px; margin: 0 auto; padding: 24px; }
h1, h2, h3, h4 { margin: 0 0 10px 0; }
.banner { padding: 24px; border-radius: 12px; margin-bottom: 20px; }
.blue { background: linear-gradient(135deg, #1e3a8a 0%, #3b82f6 100%); }
.green { background: linear-gradient(135deg, #065f46 0%, #10b981 100%); }
.purple { background: linear-gradient(135deg, #5b21b6 0%, #8b5cf6 100%); }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; margin-bottom: 24px; }
.card { background: rgba(30, 41, 59, 0.7); border: 1px solid rgba(255,255,255,0.1); border-radius: 12px; padding: 16px; }
.muted { color: #94a3b8; font-size: 0.9rem; }
.badge { display: inline-block; padding: 2px 10px; border-radius: 999px; background: #334155; font-size: 0.8rem; margin-bottom: 8px; }
.bar { height: 8px; background: #1e293b; border-radius: 4px; overflow: hidden; margin: 8px 0; }
.fill { height: 100%; background: linear-gradient(90deg, #3b82f6 0%, #60a5fa 100%); }
.big { font-size: 1.2rem; font-weight: 600; }
.downloads a { display: block; text-align: center; color: white; text-decoration: none; padding: 12px 24px; border-radius: 8px; font-weight: 600; background: linear-gradient(135deg, #dc2626 0%, #b91c1c 100%); }
.note { font-size: 0.85rem; color: #fbbf24; margin-bottom: 8px; }
.note.live { color: #34d399; }
table { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
th, td { text-align: left; padding: 6px 8px; border-bottom: 1px solid rgba(255,255,255,0.08); }
.row { display: flex; justify-content: space-between; margin-bottom: 6px; }
.error { color: #ef4444; padding: 10px; }
footer { text-align: center; color: #94a3b8; font-size: 0.9rem; padding: 20px; }
"#;

/// Inputs for one render of the dashboard.
pub struct PageView<'a> {
    pub profile: &'a PortfolioProfile,
    pub core_pm: &'a Resolution,
    pub certifications: &'a Resolution,
    pub pathway: TabularDataset,
    /// Serialized chart spec per chart, or the reason it is unavailable.
    pub charts: Vec<(ChartKind, Result<String, String>)>,
}

/// Make JSON safe to inline inside a `<script>` element.
pub fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn origin_note(origin: &Origin) -> Markup {
    match origin {
        Origin::Remote => html! { div class="note live" { "Live data from the published spreadsheet" } },
        Origin::Fallback { reason } => html! {
            div class="note" title=(reason) { "Showing sample data; the live source is unavailable" }
        },
    }
}

fn dataset_table(ds: &TabularDataset) -> Markup {
    html! {
        table {
            thead { tr { @for c in ds.columns() { th { (c) } } } }
            tbody {
                @for row in ds.rows() {
                    tr { @for cell in row { td { (cell) } } }
                }
            }
        }
    }
}

fn progress_card(label: &str, value: &str, percent: f32, caption: &str) -> Markup {
    html! {
        div class="card" {
            div class="muted" { (label) }
            div class="big" { (value) }
            div class="bar" { div class="fill" style=(format!("width: {}%;", percent.clamp(0.0, 100.0))) {} }
            div class="muted" { (caption) }
        }
    }
}

fn pathway_cards(pathway: &TabularDataset) -> Markup {
    html! {
        div class="grid" {
            @for row in 0..pathway.row_count() {
                div class="card" {
                    h4 { (pathway.text(row, "Certification/Qualification").unwrap_or_default()) }
                    div class="badge" { (pathway.text(row, "Status").unwrap_or_default()) }
                    div class="muted" { (pathway.text(row, "Timeline").unwrap_or_default()) }
                    div class="muted" { (pathway.text(row, "Provider").unwrap_or_default()) }
                }
            }
        }
    }
}

fn chart_panel(kind: ChartKind, spec: &Result<String, String>) -> Markup {
    let id = format!("chart-{}", kind.slug());
    html! {
        div class="card" {
            h3 { (kind.title()) }
            @match spec {
                Ok(json) => {
                    div id=(id) {}
                    script {
                        (PreEscaped(format!(
                            "(function(){{var f={};Plotly.newPlot('{}',f.data,f.layout,{{responsive:true}});}})();",
                            script_safe(json),
                            id
                        )))
                    }
                }
                Err(reason) => div class="error" { "Chart unavailable: " (reason) },
            }
        }
    }
}

fn info_row(label: &str, value: &str) -> Markup {
    html! { div class="row" { span class="muted" { (label) } span { (value) } } }
}

pub fn render(view: &PageView<'_>) -> Markup {
    let p = view.profile;
    let certs = certification_count(&view.certifications.dataset);
    let days = p.sprint_days().max(1);
    let dates = p.phase_dates(SPRINT_PHASES.len());

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (p.owner) " - Project Management Portfolio" }
                script src=(PLOTLY_CDN) {}
                style { (PreEscaped(STYLE)) }
            }
            body {
                main {
                    div class="banner blue" {
                        h1 { "Project Management Career Pathway" }
                        p { (p.owner) " · " (p.headline) }
                    }

                    div class="grid downloads" {
                        @for kind in DocumentKind::ALL {
                            a href=(format!("/download/{}", kind.slug())) download=(kind.filename(p)) { (kind.label()) }
                        }
                    }

                    div class="banner green" {
                        h2 { "PM Certification Pathway" }
                        p { "A structured journey from foundation to master's level expertise" }
                    }
                    (pathway_cards(&view.pathway))

                    div class="banner purple" {
                        h2 { "Progress Status Overview" }
                        p { "Key metrics and progress tracking" }
                    }
                    div class="grid" {
                        (progress_card("Current Stage", &p.current_focus, p.current_focus_progress as f32,
                            &format!("{}% Complete", p.current_focus_progress)))
                        (progress_card("CAPM Progress", &format!("{}%", p.capm_progress), p.capm_progress as f32,
                            "Approved, exam pending"))
                        div class="card" {
                            div class="muted" { "Certifications" }
                            div class="big" { (certs) "+" }
                            div class="muted" { "Accumulated Credentials" }
                        }
                        (progress_card("Pathway Progress", &format!("{}%", p.pathway_progress), p.pathway_progress,
                            "First milestone in progress"))
                    }

                    div class="grid" {
                        div class="card" {
                            h3 { "Core PM Credentials" }
                            (origin_note(&view.core_pm.origin))
                            (dataset_table(&view.core_pm.dataset))
                        }
                        div class="card" {
                            h3 { "Certifications" }
                            (origin_note(&view.certifications.origin))
                            (dataset_table(&view.certifications.dataset))
                        }
                    }

                    div class="grid" {
                        @for (kind, spec) in &view.charts {
                            (chart_panel(*kind, spec))
                        }
                    }

                    div class="banner blue" {
                        h2 { "Project Management Documentation" }
                        p { "This dashboard was developed as a professional project management initiative" }
                    }
                    div class="grid" {
                        div class="card" {
                            h4 { "Project Charter" }
                            (info_row("Status:", "Approved"))
                            (info_row("Version:", &p.report_version))
                            (info_row("Manager:", &p.owner))
                        }
                        div class="card" {
                            h4 { "Project Metrics" }
                            (info_row("Timeline:", &format!("{} days", days)))
                            (info_row("Budget:", "$0 (Open Source)"))
                            (info_row("Risk Level:", "Medium"))
                        }
                        div class="card" {
                            h4 { "Project Outcomes" }
                            (info_row("Deliverables:", "3/3 Complete"))
                            (info_row("Success Rate:", "100%"))
                            (info_row("Stakeholder Sat:", "High"))
                        }
                    }

                    div class="banner green" {
                        h2 { "Rapid Project Execution" }
                        p {
                            "This entire project was completed in a focused " (days)
                            "-day development sprint (" (p.sprint_window_short()) ")"
                        }
                    }
                    div class="grid" {
                        @for ((color, phase, detail), date) in SPRINT_PHASES.iter().zip(&dates) {
                            div class="card" {
                                h4 style=(format!("color: {};", color)) { (date.format("%b %-d")) }
                                div class="big" { (phase) }
                                div class="muted" { (detail) }
                            }
                        }
                    }

                    footer {
                        p { "© " (p.report_date.format("%Y")) " " (p.owner) " - Project Management Portfolio Dashboard" }
                        p { "Contact: " (p.linkedin) " | Report Version: " (p.report_version) " | " (p.report_date_long()) }
                    }
                }
            }
        }
    }
}

/// Inline message shown when a document cannot be produced.
pub fn render_error(kind: DocumentKind, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head { meta charset="utf-8"; title { "Document unavailable" } }
            body {
                div class="error" style="color: #ef4444; padding: 10px;" {
                    "Error generating " (kind.label().trim_start_matches("Download ").to_lowercase())
                    ". Please try again."
                }
                pre { (message) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::charts::build_chart;
    use std::sync::Arc;

    fn resolution(ds: TabularDataset, origin: Origin) -> Resolution {
        Resolution {
            dataset: Arc::new(ds),
            origin,
        }
    }

    fn render_with(certs_origin: Origin, charts: Vec<(ChartKind, Result<String, String>)>) -> String {
        let profile = PortfolioProfile::default();
        let core_pm = resolution(catalog::sample_core_pm(), Origin::Remote);
        let certs = resolution(catalog::sample_certifications(), certs_origin);
        let view = PageView {
            profile: &profile,
            core_pm: &core_pm,
            certifications: &certs,
            pathway: catalog::career_pathway(),
            charts,
        };
        render(&view).into_string()
    }

    #[test]
    fn script_safe_breaks_closing_tags() {
        assert_eq!(script_safe(r#"{"t":"</script>"}"#), r#"{"t":"<\/script>"}"#);
    }

    #[test]
    fn page_shows_counts_and_origin() {
        let html = render_with(
            Origin::Fallback {
                reason: "unexpected HTTP status 503".to_string(),
            },
            vec![],
        );
        assert!(html.contains("16+"));
        assert!(html.contains("Live data from the published spreadsheet"));
        assert!(html.contains("Showing sample data"));
        assert!(html.contains("unexpected HTTP status 503"));
        assert!(html.contains("Evron_Hadai_PM_Portfolio_20260113.pdf"));
        assert!(html.contains("4-day development sprint (Jan 10-13, 2026)"));
    }

    #[test]
    fn charts_are_embedded_or_explained() {
        let spec = build_chart(ChartKind::Timeline).unwrap().to_json().unwrap();
        let html = render_with(
            Origin::Remote,
            vec![
                (ChartKind::Timeline, Ok(spec)),
                (ChartKind::Radar, Err("column `Color` not found".to_string())),
            ],
        );
        assert!(html.contains("Plotly.newPlot('chart-timeline'"));
        assert!(html.contains("Chart unavailable: column `Color` not found"));
    }

    #[test]
    fn cell_text_is_escaped() {
        let profile = PortfolioProfile::default();
        let hostile = TabularDataset::literal(
            &["Credential", "Status", "Description"],
            vec![vec!["<script>x</script>".into(), "Done".into(), "d".into()]],
        );
        let core_pm = resolution(hostile, Origin::Remote);
        let certs = resolution(catalog::sample_certifications(), Origin::Remote);
        let view = PageView {
            profile: &profile,
            core_pm: &core_pm,
            certifications: &certs,
            pathway: catalog::career_pathway(),
            charts: vec![],
        };
        let html = render(&view).into_string();
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    }

    #[test]
    fn error_page_names_the_document() {
        let html = render_error(DocumentKind::Charter, "boom").into_string();
        assert!(html.contains("Error generating project charter. Please try again."));
        assert!(html.contains("boom"));
    }
}
