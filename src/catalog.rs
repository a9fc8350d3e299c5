//! Hardcoded datasets: fallbacks for the remote sources and the static tables
//! behind the charts and documents.

use crate::config::Settings;
use crate::dataset::{ymd, Scalar, TabularDataset};
use crate::provision::FallbackPolicy;
use std::collections::BTreeSet;

pub const CORE_PM_DATASET: &str = "Core PM Credentials";
pub const CERTIFICATIONS_DATASET: &str = "Certifications";

fn t(s: &str) -> Scalar {
    Scalar::from(s)
}

fn n(v: i64) -> Scalar {
    Scalar::Integer(v)
}

pub fn core_pm_policy(settings: &Settings) -> FallbackPolicy {
    FallbackPolicy {
        name: CORE_PM_DATASET,
        source: settings.core_pm_csv.clone(),
        fallback: sample_core_pm,
    }
}

pub fn certifications_policy(settings: &Settings) -> FallbackPolicy {
    FallbackPolicy {
        name: CERTIFICATIONS_DATASET,
        source: settings.certs_csv.clone(),
        fallback: sample_certifications,
    }
}

pub fn sample_core_pm() -> TabularDataset {
    let rows = [
        ("Google Project Management", "In Progress", "Foundation certification covering core PM principles"),
        ("CAPM Certification", "Approved/Pending Exam", "PMI's Certified Associate in Project Management"),
        ("Agile Methodologies", "Completed", "Scrum, Kanban, and Agile frameworks"),
        ("Risk Management", "In Progress", "Identifying and mitigating project risks"),
        ("Stakeholder Management", "Completed", "Communication and engagement strategies"),
        ("Budget & Cost Control", "Planned", "Financial management for projects"),
    ];
    TabularDataset::literal(
        &["Credential", "Status", "Description"],
        rows.iter().map(|&(c, s, d)| vec![t(c), t(s), t(d)]).collect(),
    )
}

pub fn sample_certifications() -> TabularDataset {
    let rows = [
        ("Google Professional Certification - PM", "Google", 2025, "PM/Agile"),
        ("Agile and Scrum", "Google Career Certificates", 2026, "PM/Agile"),
        ("IBM Agile Explorer", "IBM", 2026, "PM/Agile"),
        ("IBM Project Management Fundamentals", "IBM", 2026, "PM"),
        ("Six Sigma White Belt", "2025", 2025, "Process Improvement"),
        ("IBM Digital Literacy", "IBM", 2025, "Digital Skills"),
        ("IBM Data Fundamentals", "IBM", 2025, "Data"),
        ("Collaborative Working in a Remote Team", "University of Leeds", 2025, "Collaboration"),
        ("Digital Power", "Huawei ICT Academy", 2025, "Digital Skills"),
        ("Safety Training Programme", "2019", 2019, "Safety"),
        ("Inventory and Warehouse Management", "2018", 2018, "Safety"),
        ("Certified Explosive User", "2016", 2016, "Safety"),
        ("OSHA 30HR General and Construction Industry", "2015", 2015, "Safety"),
        ("Fall Protection Competent Person", "2015", 2015, "Safety"),
        ("Hazard Communication Certificate", "2014", 2014, "Safety"),
        ("Introductory to Supervisory Management", "Cipriani College", 2011, "Leadership"),
    ];
    TabularDataset::literal(
        &["Certification", "Issuer", "Year", "Domain"],
        rows.iter()
            .map(|&(c, i, y, d)| vec![t(c), t(i), n(y), t(d)])
            .collect(),
    )
}

pub fn career_pathway() -> TabularDataset {
    let rows = [
        ("Google Professional Certification", "2025-2026", "Foundation", "Google", "Core PM concepts, Agile, Scrum", "In Progress"),
        ("CAPM (PMI)", "2026 (Approved/Pending Exam)", "Professional", "Project Management Institute", "PMBOK Guide, PM framework", "Approved"),
        ("OTHM Level 7 Diploma", "2027-2028", "Advanced", "OTHM Qualifications", "Strategic PM, Leadership, Risk", "Planned"),
        ("MSc Project Management", "2028-2029", "Master's", "University Target", "Research, Advanced PM Theory", "Future Goal"),
    ];
    TabularDataset::literal(
        &["Certification/Qualification", "Timeline", "Level", "Provider", "Focus Areas", "Status"],
        rows.iter()
            .map(|&(c, tl, l, p, f, s)| vec![t(c), t(tl), t(l), t(p), t(f), t(s)])
            .collect(),
    )
}

pub fn translated_skills() -> TabularDataset {
    let rows = [
        (
            "Field Operations",
            "Project Coordination",
            "Managed 300+ property assessments → Project scope management\nSite coordination → Stakeholder engagement\nData validation → Quality assurance processes",
            "Operational execution translated to project planning and monitoring",
        ),
        (
            "Inventory Management",
            "Resource Management",
            "Stock control → Resource allocation\nWarehouse logistics → Project logistics\nDatabase management → Project documentation",
            "Physical inventory skills translated to digital project resource tracking",
        ),
        (
            "Wireline Operations",
            "Risk Management",
            "Safety protocols → Risk mitigation plans\nEquipment tracking → Project asset management\nOffshore coordination → Remote team management",
            "High-risk operations experience translated to project risk assessment",
        ),
        (
            "Data Processing",
            "Information Management",
            "Data entry → Project data analysis\nRecord digitization → Digital transformation projects\nDatabase maintenance → Project knowledge management",
            "Administrative precision translated to project information governance",
        ),
        (
            "Compliance Monitoring",
            "Quality Assurance",
            "Regulation adherence → Project compliance\nSafety certifications → Project quality standards\nProcess verification → Project audits",
            "Regulatory compliance translated to project quality control",
        ),
    ];
    TabularDataset::literal(
        &["Operational Skill", "Translated PM Skill", "Specific Examples", "Strategic Value"],
        rows.iter()
            .map(|&(o, p, e, v)| vec![t(o), t(p), t(e), t(v)])
            .collect(),
    )
}

pub fn capm_knowledge_areas() -> TabularDataset {
    let rows = [
        ("Integration", 85, "#3b82f6"),
        ("Scope", 80, "#8b5cf6"),
        ("Schedule", 75, "#10b981"),
        ("Cost", 70, "#f59e0b"),
        ("Quality", 90, "#ef4444"),
        ("Resource", 85, "#ec4899"),
        ("Risk", 95, "#14b8a6"),
        ("Stakeholder", 80, "#0ea5e9"),
    ];
    TabularDataset::literal(
        &["Knowledge Area", "Experience Level", "Color"],
        rows.iter().map(|&(a, l, c)| vec![t(a), n(l), t(c)]).collect(),
    )
}

pub fn credential_progress() -> TabularDataset {
    let rows = [
        ("Google PM", "In Progress", 50, "Certification"),
        ("CAPM", "Approved", 50, "Certification"),
        ("Agile", "Completed", 75, "Skill"),
        ("Risk Mgmt", "In Progress", 60, "Skill"),
        ("Stakeholder", "Completed", 75, "Skill"),
        ("Budget", "Planned", 45, "Skill"),
    ];
    TabularDataset::literal(
        &["Credential", "Status", "Progress", "Category"],
        rows.iter()
            .map(|&(c, s, p, k)| vec![t(c), t(s), n(p), t(k)])
            .collect(),
    )
}

pub fn pathway_timeline() -> TabularDataset {
    let rows = [
        ("Google PM Certification", ymd(2025, 1, 1), ymd(2026, 6, 30), "In Progress"),
        ("CAPM Exam Preparation", ymd(2026, 1, 1), ymd(2026, 12, 31), "Approved"),
        ("OTHM Level 7", ymd(2027, 1, 1), ymd(2028, 6, 30), "Planned"),
        ("MSc Project Management", ymd(2028, 9, 1), ymd(2029, 8, 31), "Future"),
        ("Industry Networking", ymd(2025, 1, 1), ymd(2029, 12, 31), "Ongoing"),
        ("Portfolio Development", ymd(2024, 11, 1), ymd(2029, 12, 31), "Ongoing"),
    ];
    TabularDataset::literal(
        &["Task", "Start", "Finish", "Status"],
        rows.iter()
            .map(|&(task, start, finish, status)| {
                vec![t(task), start.into(), finish.into(), t(status)]
            })
            .collect(),
    )
}

/// How operational experience maps onto a CAPM knowledge area.
pub fn capm_description(area: &str) -> &'static str {
    match area {
        "Integration" => "Field operations coordination → Project charter development & integration management",
        "Scope" => "Assessment scoping → Requirements collection & scope definition",
        "Schedule" => "Timeline management → Activity sequencing & schedule development",
        "Cost" => "Resource tracking → Budget estimation & cost control",
        "Quality" => "Compliance monitoring → Quality planning & control",
        "Resource" => "Inventory management → Team acquisition & resource allocation",
        "Risk" => "Safety protocols → Risk identification, analysis, and response planning",
        "Stakeholder" => "Stakeholder interaction → Communication planning & engagement",
        _ => "Operational experience applicable to PM area",
    }
}

/// Number of accumulated certifications.
pub fn certification_count(certs: &TabularDataset) -> usize {
    certs.row_count()
}

/// Distinct non-blank values in the `Domain` column; 0 if the column is absent.
pub fn domain_count(certs: &TabularDataset) -> usize {
    certs
        .column("Domain")
        .map(|cells| {
            cells
                .filter(|c| !c.is_blank())
                .map(|c| c.to_string())
                .collect::<BTreeSet<_>>()
                .len()
        })
        .unwrap_or(0)
}
