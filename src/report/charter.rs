use super::{Document, TextStyle};
use crate::config::{long_date, short_date, PortfolioProfile};

const OBJECTIVES: [&str; 4] = [
    "Demonstrate practical application of project management principles through project execution",
    "Create a tangible portfolio piece that bridges operational experience with formal PM qualifications",
    "Develop an interactive tool for tracking and visualizing career progression",
    "Establish a professional digital presence in the project management domain",
];

const IN_SCOPE: [&str; 8] = [
    "Interactive web dashboard with client-side data visualization",
    "PDF report generation system for professional documentation",
    "Integration with published spreadsheets for data management",
    "Career pathway visualization (Gantt charts, progress tracking)",
    "Skills translation matrix showcasing operational-to-PM transition",
    "Professional UI/UX design with responsive layout",
    "Error handling and fallback mechanisms",
    "Comprehensive project documentation",
];

const OUT_OF_SCOPE: [&str; 5] = [
    "Mobile application development",
    "User authentication and multi-user system",
    "Database backend implementation",
    "Advanced analytics and machine learning features",
    "Commercial deployment and monetization",
];

const SUCCESS_CRITERIA: [(&str, &str); 6] = [
    ("Functional Dashboard", "All visualizations render correctly, interactive elements work as intended"),
    ("PDF Generation", "Professional PDF reports generate without errors in under 10 seconds"),
    ("Data Integration", "Live data loads from published spreadsheets with fallback to sample data"),
    ("Performance", "Dashboard loads in under 3 seconds, all calculations perform efficiently"),
    ("User Experience", "Intuitive interface, responsive design, clear navigation"),
    ("Documentation", "Comprehensive project documentation including this charter"),
];

const ROLES: [(&str, &str); 4] = [
    ("Project Sponsor & Manager", "Overall project leadership, requirements definition, development"),
    ("Lead Developer", "Full-stack development, architecture design, implementation"),
    ("UI/UX Designer", "Interface design, user experience optimization"),
    ("Quality Assurance", "Testing, bug reporting, quality control"),
];

const STAKEHOLDERS: [&str; 4] = [
    "Hiring Managers & Recruiters (Primary audience for portfolio)",
    "Project Management Community (Peer review and feedback)",
    "Career Coaches & Mentors (Reference tool for clients)",
    "Educational Institutions (Example of career transition documentation)",
];

const PHASES: [(&str, &str); 4] = [
    ("Phase 1: Initiation", "Requirements gathering, technology selection, initial planning"),
    ("Phase 2: Planning", "Architecture design, data modeling, UI wireframing"),
    ("Phase 3: Development", "Core functionality implementation, visualization development"),
    ("Phase 4: Testing & Deployment", "Testing, debugging, deployment, documentation finalization"),
];

/// (risk, impact, probability, mitigation)
const RISKS: [(&str, &str, &str, &str); 4] = [
    ("Technical Complexity", "Medium", "High", "Modular development approach, extensive testing"),
    ("Data Source Reliability", "Medium", "Medium", "Fallback to sample data, error handling"),
    ("Time Constraints", "High", "Medium", "Agile methodology, prioritized feature development"),
    ("Quality Standards", "High", "Low", "Regular code reviews, user testing sessions"),
];

const TECHNOLOGIES: [(&str, &str, &str); 5] = [
    ("warp", "Web server framework", "HTTP routes, downloads and the dashboard page"),
    ("Plotly", "Data visualization", "Interactive charts and graphs"),
    ("csv", "Data processing", "Parsing and normalizing the remote tables"),
    ("printpdf", "PDF generation", "Professional report creation"),
    ("Published spreadsheets", "Data storage", "Cloud-based data management"),
];

/// Project charter for the portfolio dashboard project.
///
/// Phase dates are spread across the sprint window; the last phase always
/// lands on the sprint end.
pub fn build(profile: &PortfolioProfile) -> Document {
    let days = profile.sprint_days().max(1);
    let mut doc = Document::new(format!("{} - Project Charter", profile.project_title));

    doc.spacer(80.0)
        .text(TextStyle::Title, "PROJECT CHARTER")
        .spacer(30.0)
        .text(TextStyle::Name, &profile.project_title)
        .text(TextStyle::Caption, format!("Project ID: {}", profile.project_id))
        .spacer(30.0);
    let info = [
        ("Project Sponsor:", profile.owner.clone()),
        ("Project Manager:", profile.owner.clone()),
        ("Start Date:", long_date(profile.sprint_start)),
        ("Target Completion:", long_date(profile.sprint_end)),
        ("Version:", profile.report_version.clone()),
        ("Status:", "Active".to_string()),
    ];
    for (label, value) in &info {
        doc.body(format!("{} {}", label, value)).spacer(5.0);
    }
    doc.page_break();

    doc.heading("1. Project Overview").spacer(10.0).body(
        "This project involves the development of an interactive digital portfolio dashboard \
         that showcases the structured transition from operations management to professional \
         project management. The dashboard serves as both a career development tool and a \
         demonstration of project management competencies applied in a real-world context.",
    );
    doc.spacer(10.0).subheading("Business Objectives:");
    for obj in OBJECTIVES {
        doc.bullet(format!("• {}", obj));
    }
    doc.page_break();

    doc.heading("2. Project Scope").spacer(10.0).subheading("In-Scope:");
    for item in IN_SCOPE {
        doc.bullet(format!("✓ {}", item));
    }
    doc.spacer(15.0).subheading("Out-of-Scope:");
    for item in OUT_OF_SCOPE {
        doc.bullet(format!("✗ {}", item));
    }
    doc.page_break();

    doc.heading("3. Success Criteria").spacer(10.0);
    for (criterion, description) in SUCCESS_CRITERIA {
        doc.subheading(criterion).body(description).spacer(8.0);
    }
    doc.page_break();

    doc.heading("4. Project Team & Stakeholders")
        .spacer(10.0)
        .subheading("Project Team:");
    for (role, duties) in ROLES {
        doc.text(TextStyle::Highlight, format!("{} - {}", profile.owner, role))
            .body(format!("Responsibilities: {}", duties))
            .spacer(8.0);
    }
    doc.spacer(10.0).subheading("Key Stakeholders:");
    for s in STAKEHOLDERS {
        doc.bullet(format!("• {}", s));
    }
    doc.page_break();

    doc.heading("5. Timeline & Milestones").spacer(10.0);
    let dates = profile.phase_dates(PHASES.len());
    for ((phase, description), date) in PHASES.iter().zip(dates) {
        doc.subheading(format!("{} ({})", phase, short_date(date)))
            .body(description)
            .spacer(8.0);
    }
    doc.page_break();

    doc.heading("6. Risk Management").spacer(10.0).body(
        "A comprehensive risk management approach was applied throughout the project \
         lifecycle. Key risks were identified during the planning phase and mitigation \
         strategies were implemented proactively.",
    );
    doc.spacer(10.0).subheading("Key Risks and Mitigations:");
    for (risk, impact, probability, mitigation) in RISKS {
        doc.subheading(risk)
            .bullet(format!("Impact: {} | Probability: {}", impact, probability))
            .bullet(format!("Mitigation: {}", mitigation))
            .spacer(8.0);
    }
    doc.page_break();

    doc.heading("7. Technology Stack").spacer(10.0);
    for (tech, category, purpose) in TECHNOLOGIES {
        doc.subheading(format!("{} - {}", tech, category))
            .body(format!("Purpose: {}", purpose))
            .spacer(8.0);
    }
    doc.page_break();

    doc.heading("8. Budget & Resources")
        .spacer(10.0)
        .subheading("Resource Allocation:");
    let resources = [
        format!("Development Time: {} hours ({} days × 8 hours)", days * 8, days),
        "Testing Time: 8 hours".to_string(),
        "Documentation: 8 hours".to_string(),
        "Project Management: 8 hours".to_string(),
    ];
    for r in &resources {
        doc.bullet(format!("• {}", r));
    }
    doc.spacer(15.0).subheading("Cost Estimate:").text(
        TextStyle::Highlight,
        format!(
            "Total Estimated Cost: $0 (Utilizing open-source technologies and focused {}-day development sprint)",
            days
        ),
    );

    doc.spacer(30.0).text(
        TextStyle::Footer,
        format!(
            "PM Portfolio Dashboard Project Charter\n\
             Project Manager: {} | Charter Version: {}\n\
             Generated: {}\n\
             This document outlines the formal authorization for the PM Portfolio Dashboard project.",
            profile.owner,
            profile.report_version,
            profile.report_date_long()
        ),
    );

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ymd;

    #[test]
    fn eight_sections() {
        let doc = build(&PortfolioProfile::default());
        assert_eq!(doc.sections().len(), 8);
        assert_eq!(doc.sections()[0], "1. Project Overview");
        assert_eq!(doc.sections()[7], "8. Budget & Resources");
        assert_eq!(doc.page_breaks(), 8);
    }

    #[test]
    fn phases_follow_sprint_days() {
        let text = build(&PortfolioProfile::default()).plain_text();
        assert!(text.contains("Phase 1: Initiation (Jan 10, 2026)"));
        assert!(text.contains("Phase 2: Planning (Jan 11, 2026)"));
        assert!(text.contains("Phase 4: Testing & Deployment (Jan 13, 2026)"));
        assert!(text.contains("Development Time: 32 hours (4 days × 8 hours)"));
        assert!(text.contains("Start Date: January 10, 2026"));
    }

    #[test]
    fn one_day_sprint_keeps_phases_on_that_day() {
        let profile = PortfolioProfile {
            sprint_start: ymd(2026, 5, 4),
            sprint_end: ymd(2026, 5, 4),
            ..PortfolioProfile::default()
        };
        let text = build(&profile).plain_text();
        assert!(text.contains("Phase 4: Testing & Deployment (May 4, 2026)"));
        assert!(text.contains("focused 1-day development sprint"));
    }

    #[test]
    fn deterministic() {
        let profile = PortfolioProfile::default();
        assert_eq!(build(&profile), build(&profile));
    }
}
