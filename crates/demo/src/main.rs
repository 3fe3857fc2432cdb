// File: crates/demo/src/main.rs
// Summary: forecast-charts CLI: loads rows and dashboard config, composes every block, writes SVG/PNG/JSON.

mod sample;
mod settings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::block::{composer_for, dashboard, stacked};
use chart_core::source::{source_for_path, InMemoryRowSource};
use chart_core::svg::render_svg;
use chart_core::{Composer, Layout, Row, RowSource, SceneGraph, ViewQuery};
use chart_render_skia::{RasterOptions, SkiaRenderer};
use chrono::NaiveDate;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use settings::{DashboardConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "forecast-charts", version, about = "Render forecast charts (actuals, forecasts, confidence zones)")]
struct Cli {
    /// Row data (.csv or .json); the built-in demo month otherwise
    #[arg(long)]
    rows: Option<PathBuf>,
    /// Dashboard config file (toml/json/yaml)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Output directory
    #[arg(long)]
    out: Option<PathBuf>,
    /// Theme preset: light, dark or classical
    #[arg(long)]
    theme: Option<String>,
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    date_from: Option<NaiveDate>,
    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    date_to: Option<NaiveDate>,
    /// Keep only rows whose `series` column matches
    #[arg(long)]
    series: Option<String>,
}

impl Cli {
    fn apply(&self, cfg: &mut DashboardConfig) {
        if let Some(f) = self.format { cfg.format = f; }
        if let Some(out) = &self.out { cfg.output_dir = out.clone(); }
        if let Some(theme) = &self.theme { cfg.theme = theme.clone(); }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut cfg = settings::load(cli.config.as_deref()).context("loading dashboard config")?;
    cli.apply(&mut cfg);
    debug!(?cfg, "effective config");

    let query = ViewQuery { series: cli.series.clone().unwrap_or_default(), ..ViewQuery::default() }
        .between(cli.date_from, cli.date_to);
    let rows = match &cli.rows {
        Some(path) => source_for_path(path)
            .query(&query)
            .with_context(|| format!("failed to load rows from '{}'", path.display()))?,
        None => InMemoryRowSource::new(sample::demo_rows()).query(&query)?,
    };
    info!(rows = rows.len(), "loaded rows");
    if rows.is_empty() {
        tracing::warn!("no rows in range; charts will be empty");
    }

    let composer = composer_for(&cfg.theme);
    let layout = match cfg.blocks.clone() {
        Some(blocks) => stacked(blocks),
        None => dashboard(cfg.width, cfg.top_height, cfg.bottom_height),
    };

    std::fs::create_dir_all(&cfg.output_dir)
        .with_context(|| format!("creating {}", cfg.output_dir.display()))?;
    let written = write_blocks(&layout, &rows, &composer, &cfg)?;

    let combined = cfg.output_dir.join("dashboard.svg");
    let svg = layout.render_svg(&rows, &composer)?;
    std::fs::write(&combined, svg).with_context(|| format!("writing {}", combined.display()))?;
    info!(path = %combined.display(), charts = written.len(), "wrote dashboard");
    Ok(())
}

/// One output file per block; returns the paths written.
fn write_blocks(layout: &Layout, rows: &[Row], composer: &Composer, cfg: &DashboardConfig) -> Result<Vec<PathBuf>> {
    let mut renderer = (cfg.format == OutputFormat::Png).then(SkiaRenderer::new);
    let mut written = Vec::with_capacity(layout.placements.len());
    for (i, placement) in layout.placements.iter().enumerate() {
        let block = &placement.block;
        let scene = block
            .compose(rows, composer)
            .with_context(|| format!("composing chart '{}'", block.title))?;
        let out = cfg
            .output_dir
            .join(format!("{:02}_{}.{}", i + 1, slug(&block.title), cfg.format.extension()));
        write_scene(&scene, composer, cfg.format, renderer.as_mut(), &out)?;
        info!(path = %out.display(), items = scene.items.len(), "wrote chart");
        written.push(out);
    }
    Ok(written)
}

fn write_scene(
    scene: &SceneGraph,
    composer: &Composer,
    format: OutputFormat,
    renderer: Option<&mut SkiaRenderer>,
    out: &Path,
) -> Result<()> {
    match (format, renderer) {
        (OutputFormat::Png, Some(r)) => r.render_to_png(scene, &RasterOptions::for_theme(&composer.theme), out),
        (OutputFormat::Png, None) => anyhow::bail!("png output requested without a renderer"),
        (OutputFormat::Svg, _) => std::fs::write(out, render_svg(scene, Some(composer.theme.background)))
            .with_context(|| format!("writing {}", out.display())),
        (OutputFormat::Json, _) => {
            let json = serde_json::to_string_pretty(scene)?;
            std::fs::write(out, json).with_context(|| format!("writing {}", out.display()))
        }
    }
}

/// File-name friendly form of a title: `Classical Forecast (Actual)` → `classical_forecast_actual`.
fn slug(title: &str) -> String {
    let mut out = String::new();
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    let trimmed = out.trim_end_matches('_');
    if trimmed.is_empty() { "chart".to_string() } else { trimmed.to_string() }
}
