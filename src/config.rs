// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use crate::series::{PlotBox, RawInputs, Solver};
pub const DEFAULT_CONFIG_FILE: &str = "fourier.json";
/// Settings read once at start-up. Every field falls back to its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub waveform_canvas: PlotBox,
    pub harmonics_canvas: PlotBox,
    pub defaults: RawInputs,
    pub solver: Solver,
    pub export_dir: PathBuf,
}
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            waveform_canvas: PlotBox::new(800.0, 400.0, 40.0),
            harmonics_canvas: PlotBox::new(800.0, 300.0, 40.0),
            defaults: RawInputs::default(),
            solver: Solver::Direct,
            export_dir: PathBuf::from("plots"),
        }
    }
}
impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text).context("invalid configuration JSON")?;
        config
            .waveform_canvas
            .validate()
            .context("waveform_canvas")?;
        config
            .harmonics_canvas
            .validate()
            .context("harmonics_canvas")?;
        Ok(config)
    }
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }
    /// An explicit path must exist; otherwise `fourier.json` is used when present.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(&path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            Self::load(fallback)
        } else {
            info!("no {DEFAULT_CONFIG_FILE} found, using built-in defaults");
            Ok(Self::default())
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn missing_fields_use_defaults() {
        let config = AppConfig::from_json(r#"{ "solver": "fft", "defaults": { "samples": "64" } }"#)
            .unwrap();
        assert_eq!(config.solver, Solver::Fft);
        assert_eq!(config.defaults.samples, "64");
        assert_eq!(config.defaults.harmonics, "5");
        assert_eq!(config.waveform_canvas, PlotBox::new(800.0, 400.0, 40.0));
        assert_eq!(config.export_dir, PathBuf::from("plots"));
    }
    #[test]
    fn empty_object_is_the_default_config() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }
    #[test]
    fn unusable_canvas_is_rejected() {
        let err = AppConfig::from_json(
            r#"{ "harmonics_canvas": { "width": 60, "height": 300, "margin": 40 } }"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("harmonics_canvas"));
    }
    #[test]
    fn unknown_solver_is_an_error() {
        assert!(AppConfig::from_json(r#"{ "solver": "magic" }"#).is_err());
    }
    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("fourier-config-that-does-not-exist.json");
        assert!(AppConfig::resolve(Some(path)).is_err());
    }
}
