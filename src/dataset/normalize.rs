use std::collections::HashSet;

const BOM: char = '\u{feff}';

/// Strip every BOM and stray `"` from a header, then trim whitespace.
///
/// Removal happens before trimming so the result never changes when cleaned
/// a second time.
pub fn clean_header(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|&c| c != BOM && c != '"').collect();
    stripped.trim().to_string()
}

/// Trim a cell value and drop one pair of enclosing quotes if present.
pub fn clean_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].trim().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalized column set: kept names plus the index each one came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedColumns {
    pub names: Vec<String>,
    pub source_indices: Vec<usize>,
}

impl NormalizedColumns {
    pub fn dropped_any(&self, original_len: usize) -> bool {
        self.names.len() != original_len
    }
}

/// Clean every header and drop duplicates, leftmost wins.
pub fn normalize_columns<S: AsRef<str>>(raw: &[S]) -> NormalizedColumns {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut names = Vec::with_capacity(raw.len());
    let mut source_indices = Vec::with_capacity(raw.len());

    for (idx, header) in raw.iter().enumerate() {
        let name = clean_header(header.as_ref());
        if seen.insert(name.clone()) {
            names.push(name);
            source_indices.push(idx);
        }
    }

    NormalizedColumns {
        names,
        source_indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom_quotes_and_whitespace() {
        assert_eq!(clean_header("\u{feff}Certification"), "Certification");
        assert_eq!(clean_header("  \"Issuer\"  "), "Issuer");
        assert_eq!(clean_header("\" Year\""), "Year");
        assert_eq!(clean_header("Focus Areas"), "Focus Areas");
    }

    #[test]
    fn clean_header_is_idempotent() {
        let samples = [
            "\u{feff}\"Domain\"",
            " \" A \" ",
            "\"\u{feff} B",
            "plain",
            "",
            "\"\"",
        ];
        for raw in samples {
            let once = clean_header(raw);
            assert_eq!(clean_header(&once), once, "input {:?}", raw);
        }
    }

    #[test]
    fn duplicates_keep_leftmost() {
        let cols = normalize_columns(&["A", "A", "B"]);
        assert_eq!(cols.names, vec!["A", "B"]);
        assert_eq!(cols.source_indices, vec![0, 2]);
        assert!(cols.dropped_any(3));
    }

    #[test]
    fn duplicates_detected_after_cleaning() {
        let cols = normalize_columns(&["\u{feff}Year", "\"Year\"", " Domain "]);
        assert_eq!(cols.names, vec!["Year", "Domain"]);
        assert_eq!(cols.source_indices, vec![0, 2]);
    }

    #[test]
    fn normalizing_normalized_set_is_noop() {
        let first = normalize_columns(&["\"Credential\"", "Status ", "Status", "\u{feff}Description"]);
        let second = normalize_columns(&first.names);
        assert_eq!(second.names, first.names);
        assert_eq!(second.source_indices, (0..first.names.len()).collect::<Vec<_>>());
    }

    #[test]
    fn clean_cell_trims_and_unquotes() {
        assert_eq!(clean_cell("  Google "), "Google");
        assert_eq!(clean_cell("\"2025\""), "2025");
        assert_eq!(clean_cell("\""), "\"");
    }
}
