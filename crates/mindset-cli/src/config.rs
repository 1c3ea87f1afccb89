use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use mindset_export::styles::ChartStyle;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Accepted values for `chart_width`.
pub const CHART_WIDTH_RANGE: RangeInclusive<usize> = 1..=200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindsetConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Cells a full-mark bar takes in the terminal radar chart.
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_chart_width() -> usize {
    ChartStyle::default().width
}

fn default_show_legend() -> bool {
    true
}

impl Default for MindsetConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            chart_width: default_chart_width(),
            show_legend: default_show_legend(),
            output: OutputFormat::default(),
        }
    }
}

impl MindsetConfig {
    pub fn validate(&self) -> eyre::Result<()> {
        if !CHART_WIDTH_RANGE.contains(&self.chart_width) {
            return Err(eyre::eyre!(
                "chart_width {} is outside {}..={}",
                self.chart_width,
                CHART_WIDTH_RANGE.start(),
                CHART_WIDTH_RANGE.end(),
            ));
        }
        Ok(())
    }

    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle::with_width(self.chart_width)
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.mindset.cli"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

/// Load the user's config, falling back to defaults when none exists.
pub fn load_config() -> eyre::Result<MindsetConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(MindsetConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<MindsetConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: MindsetConfig = serde_json::from_value(migrated)?;
    config.validate()?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update mindset."
        ));
    }

    // v0 → v1: `bar_width` renamed to `chart_width`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(width) = obj.remove("bar_width") {
            obj.entry("chart_width").or_insert(width);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (bar_width → chart_width)");
    }

    Ok(json)
}

pub fn save_config(config: &MindsetConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    save_config_to(&path, config)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, config: &MindsetConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    config.validate()?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config() -> eyre::Result<()> {
    delete_config_at(&config_path()?)
}

pub fn delete_config_at(path: &Path) -> eyre::Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}
