use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::{DEFAULT_INTERVAL, MAX_INTERVAL, MIN_INTERVAL};
use crate::render::{CurveStyle, RenderStyle};
use crate::rose::{AnimationState, DEFAULT_D, DEFAULT_N};

/// Returns the path to the settings file: `~/.config/maurer-rose/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("maurer-rose");
    path.push("settings.json");
    path
}

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Tick interval of {0} ms is out of range")]
    InvalidInterval(u64),

    #[error("Stroke width for {curve} must be positive, got {width}")]
    InvalidStrokeWidth { curve: &'static str, width: f32 },

    #[error("Window size must be positive, got {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Animation
    pub tick_interval_ms: u64,
    pub initial_n: f64,
    pub initial_d: f64,
    pub autostart: bool,

    // Display
    pub maurer: CurveStyle,
    pub sine: CurveStyle,
    pub antialias: bool,

    // Window
    pub window_width: f32,
    pub window_height: f32,
    pub show_settings: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        let style = RenderStyle::default();
        Self {
            tick_interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            initial_n: DEFAULT_N,
            initial_d: DEFAULT_D,
            autostart: true,

            maurer: style.maurer,
            sine: style.sine,
            antialias: style.antialias,

            window_width: 600.0,
            window_height: 600.0,
            show_settings: false,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Read and validate a settings file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_INTERVAL..=MAX_INTERVAL).contains(&self.tick_interval()) {
            return Err(SettingsError::InvalidInterval(self.tick_interval_ms));
        }
        for (curve, style) in [("maurer", &self.maurer), ("sine", &self.sine)] {
            if !style.width.is_finite() || style.width <= 0.0 {
                return Err(SettingsError::InvalidStrokeWidth {
                    curve,
                    width: style.width,
                });
            }
        }
        for dimension in [self.window_width, self.window_height] {
            if !dimension.is_finite() || dimension <= 0.0 {
                return Err(SettingsError::InvalidWindowSize {
                    width: self.window_width,
                    height: self.window_height,
                });
            }
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn initial_animation(&self) -> AnimationState {
        AnimationState::new(self.initial_n, self.initial_d)
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            maurer: self.maurer,
            sine: self.sine,
            antialias: self.antialias,
        }
    }

    /// Copy the live drawing style back for saving
    pub fn set_render_style(&mut self, style: &RenderStyle) {
        self.maurer = style.maurer;
        self.sine = style.sine;
        self.antialias = style.antialias;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rgb;

    #[test]
    fn test_defaults_match_reference() {
        let settings = AppSettings::default();
        assert_eq!(settings.tick_interval(), Duration::from_millis(1000));
        assert_eq!(settings.tick_interval(), DEFAULT_INTERVAL);
        assert_eq!(settings.initial_animation(), AnimationState::new(3.0, 47.0));
        assert!(settings.autostart);
        assert_eq!(settings.maurer.color, Rgb::MEDIUM_VIOLET_RED);
        assert_eq!(settings.maurer.width, 1.0);
        assert_eq!(settings.sine.color, Rgb::ORANGE);
        assert_eq!(settings.sine.width, 3.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = AppSettings::from_json(r#"{ "tick_interval_ms": 250, "autostart": false }"#)
            .expect("partial settings should parse");
        assert_eq!(settings.tick_interval_ms, 250);
        assert!(!settings.autostart);
        assert_eq!(settings.initial_n, 3.0);
        assert_eq!(settings.sine, AppSettings::default().sine);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = AppSettings::default();
        settings.maurer.color = Rgb(1, 2, 3);
        settings.initial_d = 29.0;

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let parsed = AppSettings::from_json(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = AppSettings::from_json(r#"{ "tick_interval_ms": 0 }"#);
        assert!(matches!(result, Err(SettingsError::InvalidInterval(0))));
    }

    #[test]
    fn test_interval_bounds() {
        let result = AppSettings::from_json(r#"{ "tick_interval_ms": 10 }"#);
        assert!(matches!(result, Err(SettingsError::InvalidInterval(10))));

        let result = AppSettings::from_json(r#"{ "tick_interval_ms": 5001 }"#);
        assert!(matches!(result, Err(SettingsError::InvalidInterval(5001))));

        assert!(AppSettings::from_json(r#"{ "tick_interval_ms": 50 }"#).is_ok());
        assert!(AppSettings::from_json(r#"{ "tick_interval_ms": 5000 }"#).is_ok());
    }

    #[test]
    fn test_bad_window_size_rejected() {
        let result = AppSettings::from_json(r#"{ "window_width": 0.0 }"#);
        assert!(matches!(result, Err(SettingsError::InvalidWindowSize { .. })));

        let result = AppSettings::from_json(r#"{ "window_height": -300.0 }"#);
        assert!(matches!(
            result,
            Err(SettingsError::InvalidWindowSize { height, .. }) if height == -300.0
        ));
    }

    #[test]
    fn test_bad_stroke_width_rejected() {
        let result =
            AppSettings::from_json(r#"{ "sine": { "color": [255, 165, 0], "width": -2.0 } }"#);
        assert!(matches!(
            result,
            Err(SettingsError::InvalidStrokeWidth { curve: "sine", .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let result = AppSettings::from_json("{ not json");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_render_style_roundtrip() {
        let mut settings = AppSettings::default();
        let mut style = settings.render_style();
        style.antialias = false;
        style.maurer.width = 2.5;

        settings.set_render_style(&style);
        assert_eq!(settings.render_style(), style);
    }
}
