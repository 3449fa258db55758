// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use bizviz_frame::TableError;
use bizviz_report::ReportError;

/// Everything that can stop the demo.
#[derive(Debug, thiserror::Error)]
pub(crate) enum DemoError {
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to read config {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid color `{value}`: {reason}")]
    Color { value: String, reason: String },
    #[error("invalid dpi {0}, expected a positive number")]
    Dpi(f64),
    #[error("sample data: {0}")]
    Sample(#[from] TableError),
}
