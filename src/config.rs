//! Editor configuration.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Tunables for the viewport, snapping grid and playback.
///
/// Every field has a default, so partial JSON documents are accepted:
///
/// ```
/// use slint_slide_editor::EditorConfig;
///
/// let config = EditorConfig::from_json_str(r#"{ "max_zoom": 5.0 }"#).unwrap();
/// assert_eq!(config.max_zoom, 5.0);
/// assert_eq!(config.grid_unit, 8.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_step: f32,
    /// Free-form elements snap to multiples of this on drop.
    pub grid_unit: f32,
    /// Spacing of the rendered canvas grid (before zoom).
    pub grid_overlay_spacing: f32,
    pub auto_advance_interval_ms: u64,
    pub default_slide_title: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.5,
            max_zoom: 3.0,
            zoom_step: 0.25,
            grid_unit: 8.0,
            grid_overlay_spacing: 24.0,
            auto_advance_interval_ms: 8000,
            default_slide_title: "New Slide".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON and normalise it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Repair inconsistent values instead of rejecting them.
    ///
    /// A swapped zoom range is swapped back; non-positive or non-finite
    /// values fall back to their defaults.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if !positive(self.min_zoom) {
            self.min_zoom = defaults.min_zoom;
        }
        if !positive(self.max_zoom) {
            self.max_zoom = defaults.max_zoom;
        }
        if self.min_zoom > self.max_zoom {
            std::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }
        if !positive(self.zoom_step) {
            self.zoom_step = defaults.zoom_step;
        }
        if !positive(self.grid_unit) {
            self.grid_unit = defaults.grid_unit;
        }
        if !positive(self.grid_overlay_spacing) {
            self.grid_overlay_spacing = defaults.grid_overlay_spacing;
        }
        if self.auto_advance_interval_ms == 0 {
            self.auto_advance_interval_ms = defaults.auto_advance_interval_ms;
        }
        if self.default_slide_title.trim().is_empty() {
            self.default_slide_title = defaults.default_slide_title;
        }
        self
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
