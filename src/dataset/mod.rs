//! Tabular datasets: ordered, normalized columns and fixed-arity rows.

pub mod csv;
pub mod normalize;

use crate::error::DatasetError;
use chrono::NaiveDate;
use serde::Serialize;
use std::{collections::HashSet, fmt};

pub use normalize::{clean_header, normalize_columns, NormalizedColumns};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Date(NaiveDate),
    Text(String),
}

impl Scalar {
    /// Type an already-cleaned cell: integer, then ISO date, else text.
    ///
    /// A typed value must print back as the exact cell text, so `007` or
    /// `+5` stay text.
    pub fn infer(cell: &str) -> Self {
        if let Some(n) = cell.parse::<i64>().ok().filter(|n| n.to_string() == cell) {
            Scalar::Integer(n)
        } else if let Some(d) = NaiveDate::parse_from_str(cell, DATE_FORMAT)
            .ok()
            .filter(|d| d.format(DATE_FORMAT).to_string() == cell)
        {
            Scalar::Date(d)
        } else {
            Scalar::Text(cell.to_string())
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Integer(n) => Some(*n),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Date(_) => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Scalar::Date(d) => Some(*d),
            Scalar::Text(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok(),
            Scalar::Integer(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(d: NaiveDate) -> Self {
        Scalar::Date(d)
    }
}

pub type Row = Vec<Scalar>;

/// Date from static parts; only for hardcoded literals.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("static date should be valid")
}

/// Ordered columns plus rows aligned to them. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabularDataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl TabularDataset {
    /// Build a dataset, normalizing column names.
    ///
    /// Every row must match the raw column count. Duplicate columns (after
    /// normalization) are dropped together with their cells; the leftmost
    /// occurrence is kept.
    pub fn new<S: AsRef<str>>(columns: &[S], rows: Vec<Row>) -> Result<Self, DatasetError> {
        if columns.is_empty() {
            return Err(DatasetError::NoColumns);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DatasetError::Arity {
                    row: i,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }

        let normalized = normalize_columns(columns);
        let rows = if normalized.dropped_any(columns.len()) {
            rows.into_iter()
                .map(|row| {
                    normalized
                        .source_indices
                        .iter()
                        .map(|&i| row[i].clone())
                        .collect()
                })
                .collect()
        } else {
            rows
        };

        Ok(Self {
            columns: normalized.names,
            rows,
        })
    }

    /// Build from a compile-time literal table.
    ///
    /// Panics on a malformed literal; only used for the hardcoded catalog.
    pub fn literal(columns: &[&str], rows: Vec<Row>) -> Self {
        Self::new(columns, rows).expect("literal dataset should be well-formed")
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cells of one column, in row order.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Scalar> + 'a> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |r| &r[idx]))
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&Scalar> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Cell rendered as text, `None` if the row or column is absent.
    pub fn text(&self, row: usize, name: &str) -> Option<String> {
        self.cell(row, name).map(Scalar::to_string)
    }

    pub fn has_columns<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().all(|n| self.column_index(n.as_ref()).is_some())
    }

    /// Columns of `expected` that this dataset lacks.
    pub fn missing_columns(&self, expected: &TabularDataset) -> Vec<String> {
        let present: HashSet<&str> = self.columns.iter().map(String::as_str).collect();
        expected
            .columns
            .iter()
            .filter(|c| !present.contains(c.as_str()))
            .cloned()
            .collect()
    }
}
