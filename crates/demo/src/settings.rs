// File: crates/demo/src/settings.rs
// Summary: Dashboard configuration loaded from an optional file plus FORECAST_CHARTS_* environment variables.

use std::path::{Path, PathBuf};

use chart_core::ChartBlock;
use serde::Deserialize;

pub const ENV_PREFIX: &str = "FORECAST_CHARTS";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub width: f64,
    pub top_height: f64,
    pub bottom_height: f64,
    pub theme: String,
    pub format: OutputFormat,
    pub output_dir: PathBuf,
    /// Replaces the built-in dashboard panels when set.
    pub blocks: Option<Vec<ChartBlock>>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            top_height: 220.0,
            bottom_height: 360.0,
            theme: "light".into(),
            format: OutputFormat::Svg,
            output_dir: PathBuf::from("target/out"),
            blocks: None,
        }
    }
}

/// Merge the config file (TOML/JSON/YAML by extension) with the environment.
/// Nested keys use `__`, e.g. `FORECAST_CHARTS_TOP_HEIGHT=180`.
pub fn load(file: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    let mut builder = config::Config::builder();
    if let Some(path) = file {
        builder = builder.add_source(config::File::from(path).required(true));
    }
    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_sources() {
        let cfg = load(None).unwrap();
        assert_eq!(cfg.width, 1200.0);
        assert_eq!(cfg.format, OutputFormat::Svg);
        assert!(cfg.blocks.is_none());
    }

    #[test]
    fn file_overrides_defaults_and_carries_blocks() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
theme = "dark"
format = "json"
width = 900

[[blocks]]
title = "Zone"
height = 200
series = [
  {{ type = "band", low_key = "LOW", high_key = "HIGH" }},
  {{ type = "line", key = "TSF", role = "forecast" }},
]
"#
        )
        .unwrap();

        let cfg = load(Some(file.path())).unwrap();
        assert_eq!(cfg.theme, "dark");
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.width, 900.0);
        assert_eq!(cfg.top_height, 220.0);
        let blocks = cfg.blocks.unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].height, 200.0);
        assert_eq!(blocks[0].width, 1200.0);
        assert_eq!(blocks[0].series.len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(Some(Path::new("does/not/exist.toml"))).is_err());
    }
}
