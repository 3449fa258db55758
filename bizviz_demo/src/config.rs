// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The optional TOML config file.
//!
//! ```toml
//! out_dir = "charts"
//! html = true
//! year = 2018
//!
//! [theme]
//! dpi = 144
//! font_family = "Helvetica, sans-serif"
//! palette = ["#4c72b0", "#dd8452", "#55a868"]
//! background = "#fafafa"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use bizviz_report::Theme;
use log::debug;
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::Deserialize;

use crate::error::DemoError;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) out_dir: Option<PathBuf>,
    pub(crate) html: bool,
    pub(crate) year: Option<i32>,
    pub(crate) theme: ThemeConfig,
}

/// Overrides applied on top of [`Theme::default`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ThemeConfig {
    pub(crate) dpi: Option<f64>,
    pub(crate) font_family: Option<String>,
    pub(crate) palette: Option<Vec<String>>,
    pub(crate) background: Option<String>,
}

impl Config {
    pub(crate) fn load(path: &Path) -> Result<Self, DemoError> {
        let text = fs::read_to_string(path).map_err(|source| DemoError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| DemoError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded {}: {config:?}", path.display());
        Ok(config)
    }

    fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

impl ThemeConfig {
    pub(crate) fn apply(&self, mut theme: Theme) -> Result<Theme, DemoError> {
        if let Some(dpi) = self.dpi {
            if !(dpi.is_finite() && dpi > 0.0) {
                return Err(DemoError::Dpi(dpi));
            }
            theme.dpi = dpi;
        }
        if let Some(family) = &self.font_family {
            theme.font_family.clone_from(family);
        }
        if let Some(palette) = &self.palette {
            theme.palette = palette
                .iter()
                .map(String::as_str)
                .map(color)
                .collect::<Result<_, _>>()?;
        }
        if let Some(background) = &self.background {
            theme.background = color(background)?;
        }
        Ok(theme)
    }
}

fn color(value: &str) -> Result<Color, DemoError> {
    parse_color(value)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|e| DemoError::Color {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn empty_file_is_the_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn theme_overrides_apply_over_defaults() {
        let config = Config::parse(
            r##"
            year = 2018
            [theme]
            dpi = 144
            palette = ["#ff0000", "steelblue"]
            background = "black"
            "##,
        )
        .unwrap();
        assert_eq!(config.year, Some(2018));
        assert!(!config.html);

        let theme = config.theme.apply(Theme::default()).unwrap();
        assert_eq!(theme.dpi, 144.0);
        assert_eq!(theme.palette.len(), 2);
        assert_eq!(theme.palette[0].to_rgba8(), css::RED.to_rgba8());
        assert_eq!(theme.background.to_rgba8(), css::BLACK.to_rgba8());
        assert_eq!(theme.font_family, Theme::default().font_family);
    }

    #[test]
    fn bad_values_are_reported() {
        assert!(Config::parse("colour = 1").is_err());

        let bad_color = ThemeConfig {
            background: Some("not-a-color".to_string()),
            ..ThemeConfig::default()
        };
        let err = bad_color.apply(Theme::default()).unwrap_err();
        assert!(err.to_string().contains("not-a-color"), "{err}");

        let bad_dpi = ThemeConfig {
            dpi: Some(0.0),
            ..ThemeConfig::default()
        };
        assert!(matches!(bad_dpi.apply(Theme::default()), Err(DemoError::Dpi(_))));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"), "{err}");
    }
}
