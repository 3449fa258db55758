// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display surfaces: where a finished [`Chart`] ends up.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::svg::escape_xml;
use crate::{Chart, ReportError};

/// A destination for finished charts.
pub trait Surface {
    /// Displays one chart. Blocks until the chart is written.
    fn show(&mut self, chart: &Chart) -> Result<(), ReportError>;
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes each chart to `<dir>/<name>.svg`.
#[derive(Clone, Debug)]
pub struct SvgDir {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl SvgDir {
    /// Creates a surface writing into `dir` (created on first write).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl Surface for SvgDir {
    fn show(&mut self, chart: &Chart) -> Result<(), ReportError> {
        let path = self.dir.join(format!("{}.svg", chart.name));
        write_file(&path, &chart.to_svg())?;
        info!("wrote {} to {}", chart.name, path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Collects charts into a single HTML page.
///
/// Charts are kept as inline SVG sections; call [`HtmlReport::finish`] to
/// write the page.
#[derive(Clone, Debug)]
pub struct HtmlReport {
    path: PathBuf,
    title: String,
    sections: Vec<(String, String)>,
}

impl HtmlReport {
    /// Creates an empty report that will be written to `path`.
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Number of charts collected.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if no chart has been shown yet.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Renders the HTML page.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_xml(&self.title)));
        out.push_str(
            "<style>body{font-family:sans-serif;margin:24px;background:#fafafa}\
             section{margin-bottom:32px}svg{background:#fff;max-width:100%;height:auto}</style>\n",
        );
        out.push_str("</head>\n<body>\n");
        out.push_str(&format!("<h1>{}</h1>\n", escape_xml(&self.title)));
        for (heading, svg) in &self.sections {
            out.push_str("<section>\n");
            out.push_str(&format!("<h2>{}</h2>\n", escape_xml(heading)));
            out.push_str(svg);
            out.push_str("</section>\n");
        }
        out.push_str("</body>\n</html>\n");
        out
    }

    /// Writes the page and returns its path.
    pub fn finish(&self) -> Result<&Path, ReportError> {
        write_file(&self.path, &self.render())?;
        info!(
            "wrote report with {} charts to {}",
            self.sections.len(),
            self.path.display()
        );
        Ok(&self.path)
    }
}

impl Surface for HtmlReport {
    fn show(&mut self, chart: &Chart) -> Result<(), ReportError> {
        debug!("adding {} to html report", chart.name);
        self.sections.push((chart.title.clone(), chart.to_svg()));
        info!("showed {}", chart.name);
        Ok(())
    }
}

/// Keeps shown charts in memory.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    charts: Vec<Chart>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Charts shown so far, oldest first.
    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }
}

impl Surface for Recorder {
    fn show(&mut self, chart: &Chart) -> Result<(), ReportError> {
        info!("recorded {}", chart.name);
        self.charts.push(chart.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bizviz_frame::Table;

    use super::*;
    use crate::{Theme, charts};

    fn chart() -> Chart {
        let table = Table::new()
            .with_column("customer_state", vec!["SP".to_string(), "RJ".to_string()])
            .and_then(|t| t.with_column("Revenue", vec![10.0, 5.0]))
            .unwrap();
        charts::revenue_per_state(&table, &Theme::default()).unwrap()
    }

    #[test]
    fn svg_dir_writes_one_file_per_chart() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = SvgDir::new(dir.path().join("out"));
        surface.show(&chart()).unwrap();

        let path = dir.path().join("out").join("revenue_per_state.svg");
        assert_eq!(surface.written(), &[path.clone()]);
        let svg = fs::read_to_string(path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("SP"));
    }

    #[test]
    fn html_report_embeds_each_chart() {
        let dir = tempfile::tempdir().unwrap();
        let mut report = HtmlReport::new(dir.path().join("report.html"), "Q&A");
        report.show(&chart()).unwrap();
        report.show(&chart()).unwrap();
        assert_eq!(report.len(), 2);

        let path = report.finish().unwrap().to_path_buf();
        let html = fs::read_to_string(path).unwrap();
        assert_eq!(html.matches("<svg").count(), 2);
        assert!(html.contains("<title>Q&amp;A</title>"));
    }

    #[test]
    fn recorder_keeps_charts_in_order() {
        let mut recorder = Recorder::new();
        assert!(recorder.charts().is_empty());
        recorder.show(&chart()).unwrap();
        recorder.show(&chart()).unwrap();
        let names: Vec<_> = recorder.charts().iter().map(|c| c.name).collect();
        assert_eq!(names, ["revenue_per_state", "revenue_per_state"]);
    }

    #[test]
    fn unwritable_destinations_report_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let mut surface = SvgDir::new(&blocker);
        let err = surface.show(&chart()).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }), "{err}");
    }
}
