use super::{Document, PortfolioInputs, TextStyle};
use crate::catalog::{capm_description, certification_count, domain_count};
use crate::config::PortfolioProfile;
use crate::dataset::{Scalar, TabularDataset};
use crate::error::{RenderError, RenderResult};

const RECOMMENDATIONS: [&str; 6] = [
    "Complete Google PM Certification final modules (Next 3 months)",
    "Begin CAPM exam preparation with PMI materials (Next 6 months)",
    "Join PMI local chapter and relevant LinkedIn groups (Ongoing)",
    "Document 3 case studies from operational experience (Next 6 months)",
    "Build project portfolio with 5+ documented projects (Next 12 months)",
    "Secure mentor from established PM community (Next 12 months)",
];

const PHASES: [(&str, &str); 3] = [
    (
        "Foundation Phase (2024-2026)",
        "Google PM Certification, CAPM Certification, Agile/Scrum Mastery",
    ),
    (
        "Development Phase (2026-2028)",
        "OTHM Level 7 Diploma, Industry specialization, Advanced PM tools",
    ),
    (
        "Advanced Phase (2028-2029)",
        "MSc Project Management, Senior PM role, Industry recognition",
    ),
];

fn field(ds: &TabularDataset, row: usize, column: &str) -> RenderResult<String> {
    if ds.column_index(column).is_none() {
        return Err(RenderError::MissingColumn(column.to_string()));
    }
    Ok(ds.text(row, column).unwrap_or_default())
}

/// Earliest and latest values of the `Year` column, if any parse.
fn year_span(certs: &TabularDataset) -> Option<(i64, i64)> {
    let years: Vec<i64> = certs.column("Year")?.filter_map(Scalar::as_i64).collect();
    Some((*years.iter().min()?, *years.iter().max()?))
}

/// Portfolio summary: cover, six numbered sections and a footer.
pub fn build(inputs: &PortfolioInputs, profile: &PortfolioProfile) -> RenderResult<Document> {
    let certs = &inputs.certifications;
    let cert_count = certification_count(certs);
    let domains = domain_count(certs);
    let generated = profile.report_date_long();

    let mut doc = Document::new(format!("{} - Project Management Portfolio", profile.owner));

    doc.spacer(100.0)
        .text(TextStyle::Title, "PROJECT MANAGEMENT PORTFOLIO")
        .spacer(20.0)
        .text(TextStyle::Name, &profile.owner)
        .text(TextStyle::Subtitle, &profile.headline)
        .text(TextStyle::Caption, format!("Report Generated: {}", generated))
        .page_break();

    doc.heading("1. Executive Summary").spacer(10.0).body(
        "This portfolio documents the structured transition from operations management to \
         professional project management. With over 10 years of operational experience in \
         high-risk industries, this pathway leverages existing expertise while systematically \
         building formal PM competencies through certifications and academic progression.",
    );
    doc.spacer(10.0).subheading("Key Highlights:");
    let highlights = [
        format!(
            "Pathway Progress: First milestone in progress ({} {}% complete)",
            profile.current_focus, profile.current_focus_progress
        ),
        format!(
            "Certification Portfolio: {} accumulated credentials across {} domains",
            cert_count, domains
        ),
        format!(
            "Current Focus: {} ({}% complete) with CAPM exam approved for {}",
            profile.current_focus,
            profile.current_focus_progress,
            profile.report_date.format("%Y")
        ),
        format!(
            "Experience Mapping: {}%+ alignment with PMI knowledge areas from operational background",
            profile.experience_alignment
        ),
        "Strategic Timeline: 5-year progression plan from foundation to advanced qualifications"
            .to_string(),
    ];
    for h in &highlights {
        doc.bullet(format!("• {}", h));
    }
    doc.page_break();

    let pathway = &inputs.pathway;
    doc.heading("2. Career Pathway Overview").spacer(10.0);
    if !pathway.is_empty() {
        doc.subheading("CURRENT STAGE:")
            .text(TextStyle::Highlight, field(pathway, 0, "Certification/Qualification")?)
            .body(format!(
                "Timeline: {} | Level: {}",
                field(pathway, 0, "Timeline")?,
                field(pathway, 0, "Level")?
            ))
            .body(format!("Provider: {}", field(pathway, 0, "Provider")?))
            .body(format!("Focus: {}", field(pathway, 0, "Focus Areas")?))
            .body(format!("Status: {}", field(pathway, 0, "Status")?))
            .spacer(15.0);

        doc.subheading("FUTURE PATHWAY:");
        for row in 1..pathway.row_count() {
            doc.body(field(pathway, row, "Certification/Qualification")?)
                .bullet(format!(
                    "Timeline: {} | Status: {}",
                    field(pathway, row, "Timeline")?,
                    field(pathway, row, "Status")?
                ))
                .spacer(8.0);
        }
    }
    doc.page_break();

    let years = year_span(certs)
        .map(|(lo, hi)| format!("{}-{}", lo, hi))
        .unwrap_or_else(|| "Dates not recorded".to_string());
    let metrics = [
        (
            "Current Focus".to_string(),
            profile.current_focus.clone(),
            format!("{}% Complete", profile.current_focus_progress),
            "On Track".to_string(),
        ),
        (
            "Accumulated Credentials".to_string(),
            format!("{} certifications", cert_count),
            years,
            "Portfolio Established".to_string(),
        ),
        (
            "Next Major Milestone".to_string(),
            "CAPM Certification".to_string(),
            "Approved/Exam Pending".to_string(),
            format!("{}% prepared", profile.capm_progress),
        ),
        (
            "Long-term Education Path".to_string(),
            "OTHM → MSc".to_string(),
            "2027-2029".to_string(),
            "Future Planning".to_string(),
        ),
        (
            "Experience-to-PM Transition".to_string(),
            format!("{}% skills alignment", profile.experience_alignment),
            "Industry experience".to_string(),
            "Strong Foundation".to_string(),
        ),
    ];
    doc.heading("3. Progress Status & Metrics").spacer(10.0);
    for (name, current, details, status) in &metrics {
        doc.subheading(name)
            .bullet(format!("Current: {}", current))
            .bullet(format!("Details: {}", details))
            .bullet(format!("Status: {}", status))
            .spacer(10.0);
    }
    doc.page_break();

    let skills = &inputs.skills;
    doc.heading("4. Skills Translation Matrix")
        .spacer(10.0)
        .subheading("Transferring Operational Expertise to PM Competencies:")
        .spacer(10.0);
    for row in 0..skills.row_count() {
        doc.text(
            TextStyle::Highlight,
            format!(
                "{} → {}",
                field(skills, row, "Operational Skill")?,
                field(skills, row, "Translated PM Skill")?
            ),
        )
        .body(format!("Examples:\n{}", field(skills, row, "Specific Examples")?))
        .body(format!("Strategic Value: {}", field(skills, row, "Strategic Value")?))
        .spacer(15.0);
    }
    doc.page_break();

    let areas = &inputs.knowledge_areas;
    doc.heading("5. CAPM Knowledge Areas Mapping")
        .spacer(10.0)
        .subheading("Operational Experience Mapped to PMI Knowledge Areas:")
        .spacer(10.0);
    for row in 0..areas.row_count() {
        let area = field(areas, row, "Knowledge Area")?;
        let level = field(areas, row, "Experience Level")?;
        doc.body(format!("{} ({}%)", area, level))
            .bullet(capm_description(&area))
            .spacer(8.0);
    }
    doc.page_break();

    doc.heading("6. Timeline & Strategic Recommendations")
        .spacer(10.0)
        .subheading("Career Pathway Timeline:");
    for (phase, milestones) in PHASES {
        doc.body(phase)
            .bullet(format!("Key Milestones: {}", milestones))
            .spacer(10.0);
    }
    doc.spacer(15.0).subheading("Immediate Recommendations:");
    for rec in RECOMMENDATIONS {
        doc.bullet(format!("• {}", rec));
    }

    doc.spacer(30.0).text(
        TextStyle::Footer,
        format!(
            "{} - Project Management Portfolio\nLinkedIn: {} | Report Version: {}\nGenerated: {}",
            profile.owner, profile.linkedin, profile.report_version, generated
        ),
    );

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::sync::Arc;

    fn inputs() -> PortfolioInputs {
        PortfolioInputs::with_certifications(Arc::new(catalog::sample_certifications()))
    }

    #[test]
    fn six_sections_in_order() {
        let doc = build(&inputs(), &PortfolioProfile::default()).unwrap();
        assert_eq!(
            doc.sections(),
            [
                "1. Executive Summary",
                "2. Career Pathway Overview",
                "3. Progress Status & Metrics",
                "4. Skills Translation Matrix",
                "5. CAPM Knowledge Areas Mapping",
                "6. Timeline & Strategic Recommendations",
            ]
        );
        assert_eq!(doc.page_breaks(), 6);
    }

    #[test]
    fn summary_reports_counts() {
        let text = build(&inputs(), &PortfolioProfile::default())
            .unwrap()
            .plain_text();
        assert!(text.contains("16 accumulated credentials across 8 domains"));
        assert!(text.contains("16 certifications"));
        assert!(text.contains("Details: 2011-2026"));
        assert!(text.contains("Report Generated: January 13, 2026"));
    }

    #[test]
    fn profile_drives_cover_and_footer() {
        let profile = PortfolioProfile {
            owner: "Ada Byron".to_string(),
            ..PortfolioProfile::default()
        };
        let doc = build(&inputs(), &profile).unwrap();
        assert!(doc.title.starts_with("Ada Byron"));
        assert!(doc.plain_text().contains("Ada Byron - Project Management Portfolio\nLinkedIn:"));
    }

    #[test]
    fn deterministic_for_fixed_inputs() {
        let profile = PortfolioProfile::default();
        assert_eq!(
            build(&inputs(), &profile).unwrap(),
            build(&inputs(), &profile).unwrap()
        );
    }

    #[test]
    fn pathway_without_expected_column_fails() {
        let mut bad = inputs();
        bad.pathway = TabularDataset::literal(&["Stage"], vec![vec!["x".into()]]);
        assert!(matches!(
            build(&bad, &PortfolioProfile::default()),
            Err(RenderError::MissingColumn(c)) if c == "Certification/Qualification"
        ));
    }

    #[test]
    fn remote_certifications_change_counts() {
        let certs = TabularDataset::literal(
            &["Certification", "Issuer", "Year", "Domain"],
            vec![vec!["PMP".into(), "PMI".into(), 2027_i64.into(), "PM".into()]],
        );
        let doc = build(
            &PortfolioInputs::with_certifications(Arc::new(certs)),
            &PortfolioProfile::default(),
        )
        .unwrap();
        assert!(doc
            .plain_text()
            .contains("1 accumulated credentials across 1 domains"));
    }
}
