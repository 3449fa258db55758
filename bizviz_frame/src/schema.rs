// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column contracts checked before a chart touches its input.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::table::{ColumnType, Table, TableError};

/// One required column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Accepted column types; the first one is reported on mismatch.
    pub accepts: Vec<ColumnType>,
}

impl Field {
    /// A column that must have exactly `ty`.
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            accepts: alloc::vec![ty],
        }
    }

    /// A column that may have any of `types`.
    pub fn any_of(name: impl Into<String>, types: &[ColumnType]) -> Self {
        Self {
            name: name.into(),
            accepts: types.to_vec(),
        }
    }
}

/// An ordered list of required columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required column of type `ty`.
    pub fn field(mut self, name: impl Into<String>, ty: ColumnType) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }

    /// Adds a required column accepting any of `types`.
    pub fn field_any_of(mut self, name: impl Into<String>, types: &[ColumnType]) -> Self {
        self.fields.push(Field::any_of(name, types));
        self
    }

    /// The required columns.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Checks `table` against this schema.
    ///
    /// Fields are checked in order and the first violation is returned. A table
    /// that has every column but no rows fails with [`TableError::EmptyTable`].
    pub fn check(&self, table: &Table) -> Result<(), TableError> {
        for field in &self.fields {
            let found = table.column(&field.name)?.column_type();
            if !field.accepts.contains(&found) {
                return Err(TableError::TypeMismatch {
                    name: field.name.clone(),
                    expected: field.accepts.first().copied().unwrap_or(found),
                    found,
                });
            }
        }
        if table.is_empty() {
            return Err(TableError::EmptyTable);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn schema() -> Schema {
        Schema::new()
            .field("customer_state", ColumnType::Text)
            .field("Revenue", ColumnType::Number)
    }

    #[test]
    fn reports_first_missing_column() {
        let t = Table::new()
            .with_column("customer_state", vec!["SP"])
            .unwrap();
        assert_eq!(
            schema().check(&t),
            Err(TableError::MissingColumn {
                name: "Revenue".into()
            })
        );
    }

    #[test]
    fn empty_tables_fail_after_column_checks() {
        let t = Table::new()
            .with_column("customer_state", Vec::<String>::new())
            .unwrap()
            .with_column("Revenue", Vec::<f64>::new())
            .unwrap();
        assert_eq!(schema().check(&t), Err(TableError::EmptyTable));
    }

    #[test]
    fn any_of_accepts_alternatives() {
        let s = Schema::new().field_any_of("date", &[ColumnType::Date, ColumnType::Text]);
        let t = Table::new().with_column("date", vec!["2017-01-01"]).unwrap();
        assert_eq!(s.check(&t), Ok(()));

        let t = Table::new().with_column("date", vec![1.0]).unwrap();
        assert!(matches!(
            s.check(&t),
            Err(TableError::TypeMismatch {
                expected: ColumnType::Date,
                found: ColumnType::Number,
                ..
            })
        ));
    }
}
