// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use bizviz_frame::TableError;

/// Errors returned by chart builders and display surfaces.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The input table does not satisfy the chart's schema.
    #[error("invalid input table: {0}")]
    Schema(#[from] TableError),
    /// A year outside the supported report range.
    #[error("unsupported year {0}, expected 2016, 2017 or 2018")]
    UnsupportedYear(i32),
    /// A column holds values the chart cannot draw.
    #[error("column `{column}`: {reason}")]
    InvalidValue {
        /// Column name.
        column: String,
        /// What is wrong with the values.
        reason: String,
    },
    /// A surface failed to write its output.
    #[error("failed to write {}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub(crate) fn invalid_value(column: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}
