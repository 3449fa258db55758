// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned, typed, column-oriented tables.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// The value type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// `f64` values; `NaN` marks a missing value.
    Number,
    /// Strings (categories, labels, unparsed dates).
    Text,
    /// Boolean flags.
    Bool,
    /// Calendar dates.
    Date,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Number => "number",
            Self::Text => "text",
            Self::Bool => "bool",
            Self::Date => "date",
        })
    }
}

/// Errors returned when building, reading, or validating a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A required column is absent.
    #[error("missing column `{name}`")]
    MissingColumn {
        /// Column name.
        name: String,
    },
    /// A column exists but holds the wrong value type.
    #[error("column `{name}` is {found}, expected {expected}")]
    TypeMismatch {
        /// Column name.
        name: String,
        /// Expected type.
        expected: ColumnType,
        /// Actual type.
        found: ColumnType,
    },
    /// A pushed column does not match the table's row count.
    #[error("column `{name}` has {found} rows, table has {expected}")]
    LengthMismatch {
        /// Column name.
        name: String,
        /// Table row count.
        expected: usize,
        /// Column length.
        found: usize,
    },
    /// A pushed column reuses an existing name.
    #[error("duplicate column `{name}`")]
    DuplicateColumn {
        /// Column name.
        name: String,
    },
    /// The table has no rows.
    #[error("table has no rows")]
    EmptyTable,
    /// A text value could not be parsed as a date.
    #[error("column `{name}` row {row}: `{value}` is not a date")]
    InvalidDate {
        /// Column name.
        name: String,
        /// Row index.
        row: usize,
        /// Offending text.
        value: String,
    },
}

/// A single typed column.
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    /// Numeric values.
    Number(Vec<f64>),
    /// Text values.
    Text(Vec<String>),
    /// Boolean values.
    Bool(Vec<bool>),
    /// Date values.
    Date(Vec<NaiveDate>),
}

impl Column {
    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Number(v) => v.len(),
            Self::Text(v) => v.len(),
            Self::Bool(v) => v.len(),
            Self::Date(v) => v.len(),
        }
    }

    /// Returns `true` if the column has no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value type.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Number(_) => ColumnType::Number,
            Self::Text(_) => ColumnType::Text,
            Self::Bool(_) => ColumnType::Bool,
            Self::Date(_) => ColumnType::Date,
        }
    }

    fn take(&self, rows: &[usize]) -> Self {
        match self {
            Self::Number(v) => Self::Number(rows.iter().map(|&r| v[r]).collect()),
            Self::Text(v) => Self::Text(rows.iter().map(|&r| v[r].clone()).collect()),
            Self::Bool(v) => Self::Bool(rows.iter().map(|&r| v[r]).collect()),
            Self::Date(v) => Self::Date(rows.iter().map(|&r| v[r]).collect()),
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(value: Vec<f64>) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<String>> for Column {
    fn from(value: Vec<String>) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<&str>> for Column {
    fn from(value: Vec<&str>) -> Self {
        Self::Text(value.into_iter().map(ToString::to_string).collect())
    }
}

impl From<Vec<bool>> for Column {
    fn from(value: Vec<bool>) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<NaiveDate>> for Column {
    fn from(value: Vec<NaiveDate>) -> Self {
        Self::Date(value)
    }
}

/// An ordered set of uniquely named columns with a shared row count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Creates a table with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Table::push_column`].
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> Result<Self, TableError> {
        self.push_column(name, column)?;
        Ok(self)
    }

    /// Appends a column.
    ///
    /// The first column fixes the row count; later columns must match it.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> Result<(), TableError> {
        let name = name.into();
        let column = column.into();
        if self.names.contains(&name) {
            return Err(TableError::DuplicateColumn { name });
        }
        if self.columns.is_empty() {
            self.row_count = column.len();
        } else if column.len() != self.row_count {
            return Err(TableError::LengthMismatch {
                name,
                expected: self.row_count,
                found: column.len(),
            });
        }
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Column names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column, TableError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| TableError::MissingColumn {
                name: name.to_string(),
            })
    }

    /// Numeric column values.
    pub fn numbers(&self, name: &str) -> Result<&[f64], TableError> {
        match self.column(name)? {
            Column::Number(v) => Ok(v),
            other => Err(mismatch(name, ColumnType::Number, other)),
        }
    }

    /// Text column values.
    pub fn texts(&self, name: &str) -> Result<&[String], TableError> {
        match self.column(name)? {
            Column::Text(v) => Ok(v),
            other => Err(mismatch(name, ColumnType::Text, other)),
        }
    }

    /// Boolean column values.
    pub fn bools(&self, name: &str) -> Result<&[bool], TableError> {
        match self.column(name)? {
            Column::Bool(v) => Ok(v),
            other => Err(mismatch(name, ColumnType::Bool, other)),
        }
    }

    /// Date values from either a date column or an ISO text column.
    pub fn dates(&self, name: &str) -> Result<Vec<NaiveDate>, TableError> {
        match self.column(name)? {
            Column::Date(v) => Ok(v.clone()),
            Column::Text(v) => parse_dates(name, v),
            other => Err(mismatch(name, ColumnType::Date, other)),
        }
    }

    /// Returns a new table holding `rows` (by index, in the given order).
    ///
    /// Panics if an index is out of bounds.
    pub fn take(&self, rows: &[usize]) -> Self {
        Self {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.take(rows)).collect(),
            row_count: rows.len(),
        }
    }
}

fn mismatch(name: &str, expected: ColumnType, found: &Column) -> TableError {
    TableError::TypeMismatch {
        name: name.to_string(),
        expected,
        found: found.column_type(),
    }
}

// `YYYY-MM-DD`, optionally followed by ` HH:MM:SS`.
fn parse_dates(name: &str, values: &[String]) -> Result<Vec<NaiveDate>, TableError> {
    values
        .iter()
        .enumerate()
        .map(|(row, s)| {
            let s = s.trim();
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|t| t.date()))
                .map_err(|_| TableError::InvalidDate {
                    name: name.to_string(),
                    row,
                    value: s.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn sample() -> Table {
        Table::new()
            .with_column("state", vec!["SP", "RJ", "MG"])
            .unwrap()
            .with_column("revenue", vec![10.0, 20.0, 5.0])
            .unwrap()
    }

    #[test]
    fn typed_access_and_missing_columns() {
        let t = sample();
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.numbers("revenue").unwrap(), &[10.0, 20.0, 5.0]);
        assert_eq!(
            t.numbers("Revenue"),
            Err(TableError::MissingColumn {
                name: "Revenue".into()
            })
        );
        assert_eq!(
            t.numbers("state"),
            Err(TableError::TypeMismatch {
                name: "state".into(),
                expected: ColumnType::Number,
                found: ColumnType::Text,
            })
        );
    }

    #[test]
    fn push_rejects_ragged_and_duplicate_columns() {
        let mut t = sample();
        assert!(matches!(
            t.push_column("x", vec![1.0]),
            Err(TableError::LengthMismatch { expected: 3, found: 1, .. })
        ));
        assert!(matches!(
            t.push_column("state", vec!["a", "b", "c"]),
            Err(TableError::DuplicateColumn { .. })
        ));
        assert_eq!(t.names().count(), 2);
    }

    #[test]
    fn take_reorders_every_column() {
        let t = sample().take(&[2, 0]);
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.texts("state").unwrap(), &["MG".to_string(), "SP".to_string()]);
        assert_eq!(t.numbers("revenue").unwrap(), &[5.0, 10.0]);
    }

    #[test]
    fn dates_parse_text_columns() {
        let t = Table::new()
            .with_column("date", vec!["2017-01-02", "2017-01-01 00:00:00"])
            .unwrap();
        let dates = t.dates("date").unwrap();
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2017, 1, 2).unwrap());
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(2017, 1, 1).unwrap());

        let bad = Table::new().with_column("date", vec!["yesterday"]).unwrap();
        assert!(matches!(
            bad.dates("date"),
            Err(TableError::InvalidDate { row: 0, .. })
        ));
    }
}
