//! Service settings (environment) and the portfolio profile (YAML).

use crate::dataset::ymd;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, time::Duration};
use url::Url;

pub const DEFAULT_CORE_PM_CSV: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTFJ959Chtv5sEuQ-PTyXQDyulOUr86vNMVifjCcw_WWhPJOtGaYG1SyqutW2gjtmTZYrIBXPNcqGB8/pub?gid=0&single=true&output=csv";
pub const DEFAULT_CERTS_CSV: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTFJ959Chtv5sEuQ-PTyXQDyulOUr86vNMVifjCcw_WWhPJOtGaYG1SyqutW2gjtmTZYrIBXPNcqGB8/pub?gid=1561095255&single=true&output=csv";

/// Runtime settings read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub log_level: String,
    pub core_pm_csv: String,
    pub certs_csv: String,
    pub cache_ttl: Duration,
    pub profile_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 8080,
            log_level: "info".to_string(),
            core_pm_csv: DEFAULT_CORE_PM_CSV.to_string(),
            certs_csv: DEFAULT_CERTS_CSV.to_string(),
            cache_ttl: Duration::from_secs(300),
            profile_path: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(port) = lookup("PORT") {
            settings.port = port
                .trim()
                .parse()
                .with_context(|| format!("parsing PORT `{}`", port))?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            settings.log_level = level;
        }
        if let Some(url) = lookup("CORE_PM_CSV_URL") {
            Url::parse(&url).with_context(|| format!("parsing CORE_PM_CSV_URL `{}`", url))?;
            settings.core_pm_csv = url;
        }
        if let Some(url) = lookup("CERTS_CSV_URL") {
            Url::parse(&url).with_context(|| format!("parsing CERTS_CSV_URL `{}`", url))?;
            settings.certs_csv = url;
        }
        if let Some(ttl) = lookup("CACHE_TTL_SECS") {
            let secs: u64 = ttl
                .trim()
                .parse()
                .with_context(|| format!("parsing CACHE_TTL_SECS `{}`", ttl))?;
            settings.cache_ttl = Duration::from_secs(secs);
        }
        settings.profile_path = lookup("PROFILE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(settings)
    }

    /// The profile named by `PROFILE_PATH`, or the built-in one.
    pub fn load_profile(&self) -> Result<PortfolioProfile> {
        match &self.profile_path {
            Some(path) => PortfolioProfile::load(path),
            None => Ok(PortfolioProfile::default()),
        }
    }
}

/// Names, dates and progress figures shared by the page and the documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioProfile {
    pub owner: String,
    pub headline: String,
    pub linkedin: String,
    pub report_date: NaiveDate,
    pub report_version: String,
    pub project_id: String,
    pub project_title: String,
    pub sprint_start: NaiveDate,
    pub sprint_end: NaiveDate,
    pub current_focus: String,
    pub current_focus_progress: u8,
    pub capm_progress: u8,
    pub pathway_progress: f32,
    pub experience_alignment: u8,
}

impl Default for PortfolioProfile {
    fn default() -> Self {
        Self {
            owner: "Evron Hadai".to_string(),
            headline: "Operations Professional → Project Manager".to_string(),
            linkedin: "linkedin.com/in/evron-hadai".to_string(),
            report_date: ymd(2026, 1, 13),
            report_version: "1.0".to_string(),
            project_id: "PM-PORT-001".to_string(),
            project_title: "Interactive Project Management Career Portfolio Dashboard".to_string(),
            sprint_start: ymd(2026, 1, 10),
            sprint_end: ymd(2026, 1, 13),
            current_focus: "Google PM Certification".to_string(),
            current_focus_progress: 50,
            capm_progress: 50,
            pathway_progress: 12.5,
            experience_alignment: 85,
        }
    }
}

impl PortfolioProfile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading profile {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("parsing profile {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Inclusive number of days in the development sprint.
    pub fn sprint_days(&self) -> i64 {
        (self.sprint_end - self.sprint_start).num_days() + 1
    }

    /// `January 10-13, 2026`, or a full range when months differ.
    pub fn sprint_window(&self) -> String {
        let (s, e) = (self.sprint_start, self.sprint_end);
        if s.year() == e.year() && s.month() == e.month() {
            format!("{} {}-{}, {}", s.format("%B"), s.day(), e.day(), e.year())
        } else {
            format!("{} - {}", long_date(s), long_date(e))
        }
    }

    /// `Jan 10-13, 2026` for compact captions.
    pub fn sprint_window_short(&self) -> String {
        let (s, e) = (self.sprint_start, self.sprint_end);
        if s.year() == e.year() && s.month() == e.month() {
            format!("{} {}-{}, {}", s.format("%b"), s.day(), e.day(), e.year())
        } else {
            format!("{} - {}", short_date(s), short_date(e))
        }
    }

    /// `n` milestone dates spread evenly over the sprint, first on the start
    /// date and last on the end date.
    pub fn phase_dates(&self, n: usize) -> Vec<NaiveDate> {
        let span = (self.sprint_days() - 1).max(0);
        let last = (n as i64 - 1).max(1);
        (0..n as i64)
            .map(|i| self.sprint_start + chrono::Duration::days(i * span / last))
            .collect()
    }

    pub fn report_date_long(&self) -> String {
        long_date(self.report_date)
    }

    /// `YYYYMMDD` stamp used in download filenames.
    pub fn date_stamp(&self) -> String {
        self.report_date.format("%Y%m%d").to_string()
    }

    /// The owner's name with spaces replaced, for filenames.
    pub fn owner_slug(&self) -> String {
        self.owner.split_whitespace().collect::<Vec<_>>().join("_")
    }
}

/// `January 13, 2026`
pub fn long_date(d: NaiveDate) -> String {
    d.format("%B %-d, %Y").to_string()
}

/// `Jan 13, 2026`
pub fn short_date(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let s = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(s.port, 8080);
        assert_eq!(s.cache_ttl, Duration::from_secs(300));
        assert_eq!(s.certs_csv, DEFAULT_CERTS_CSV);
        assert!(s.profile_path.is_none());
    }

    #[test]
    fn overrides_from_lookup() {
        let s = Settings::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("CACHE_TTL_SECS", "60"),
            ("CERTS_CSV_URL", "http://localhost:1234/certs.csv"),
            ("PROFILE_PATH", "/tmp/profile.yaml"),
        ]))
        .unwrap();
        assert_eq!(s.port, 9000);
        assert_eq!(s.cache_ttl, Duration::from_secs(60));
        assert_eq!(s.certs_csv, "http://localhost:1234/certs.csv");
        assert_eq!(s.profile_path, Some(PathBuf::from("/tmp/profile.yaml")));
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(Settings::from_lookup(lookup(&[("PORT", "eighty")])).is_err());
        assert!(Settings::from_lookup(lookup(&[("CACHE_TTL_SECS", "-1")])).is_err());
        assert!(Settings::from_lookup(lookup(&[("CORE_PM_CSV_URL", "no scheme")])).is_err());
    }

    #[test]
    fn profile_derived_values() {
        let p = PortfolioProfile::default();
        assert_eq!(p.sprint_days(), 4);
        assert_eq!(p.sprint_window(), "January 10-13, 2026");
        assert_eq!(p.sprint_window_short(), "Jan 10-13, 2026");
        assert_eq!(p.report_date_long(), "January 13, 2026");
        assert_eq!(p.date_stamp(), "20260113");
        assert_eq!(p.owner_slug(), "Evron_Hadai");
    }

    #[test]
    fn phase_dates_cover_the_sprint() {
        let p = PortfolioProfile::default();
        assert_eq!(
            p.phase_dates(4),
            vec![ymd(2026, 1, 10), ymd(2026, 1, 11), ymd(2026, 1, 12), ymd(2026, 1, 13)]
        );
        assert_eq!(p.phase_dates(1), vec![ymd(2026, 1, 10)]);
        let single = PortfolioProfile {
            sprint_end: ymd(2026, 1, 10),
            ..PortfolioProfile::default()
        };
        assert!(single.phase_dates(3).iter().all(|d| *d == ymd(2026, 1, 10)));
    }

    #[test]
    fn partial_yaml_overrides_defaults() {
        let p = PortfolioProfile::from_yaml(
            "owner: Ada Byron\nreport_date: 2026-03-02\ncapm_progress: 80\n",
        )
        .unwrap();
        assert_eq!(p.owner, "Ada Byron");
        assert_eq!(p.date_stamp(), "20260302");
        assert_eq!(p.capm_progress, 80);
        assert_eq!(p.project_id, "PM-PORT-001");
    }

    #[test]
    fn profile_loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "sprint_start: 2026-01-30\nsprint_end: 2026-02-02").unwrap();
        let settings = Settings {
            profile_path: Some(file.path().to_path_buf()),
            ..Settings::default()
        };
        let p = settings.load_profile().unwrap();
        assert_eq!(p.sprint_days(), 4);
        assert_eq!(p.sprint_window(), "January 30, 2026 - February 2, 2026");
    }

    #[test]
    fn missing_profile_file_is_error() {
        assert!(PortfolioProfile::load("/nonexistent/profile.yaml").is_err());
    }
}
