//! Animator Settings
//!
//! Tunables for a scroll session. The defaults reproduce the landing page:
//!
//! ```rust,ignore
//! use scrollscape::app::AnimatorSettings;
//!
//! // Default: 10 ms trailing debounce, 10% easing per frame
//! let settings = AnimatorSettings::default();
//!
//! // Snappier camera, no debounce
//! let settings = AnimatorSettings::default()
//!     .with_debounce_ms(0)
//!     .with_camera_smoothing(0.25);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

const DEFAULT_DEBOUNCE_MS: u64 = 10;
const DEFAULT_SMOOTHING: f32 = 0.1;

/// Session tunables. Fields are private so every smoothing factor read
/// back is inside `[0, 1]`, whatever the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorSettings {
    /// Quiet period after the last scroll event before progress is updated.
    debounce_ms: u64,
    /// Fraction of the remaining distance the camera covers each frame.
    camera_smoothing: f32,
    /// Fraction of the remaining color difference the material covers each frame.
    color_smoothing: f32,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            camera_smoothing: DEFAULT_SMOOTHING,
            color_smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl AnimatorSettings {
    /// Reads settings from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    #[must_use]
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    #[must_use]
    pub fn with_camera_smoothing(mut self, alpha: f32) -> Self {
        self.camera_smoothing = alpha;
        self.sanitized()
    }

    #[must_use]
    pub fn with_color_smoothing(mut self, alpha: f32) -> Self {
        self.color_smoothing = alpha;
        self.sanitized()
    }

    #[must_use]
    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub fn camera_smoothing(&self) -> f32 {
        sanitize_smoothing(self.camera_smoothing)
    }

    #[must_use]
    pub fn color_smoothing(&self) -> f32 {
        sanitize_smoothing(self.color_smoothing)
    }

    fn sanitized(mut self) -> Self {
        self.camera_smoothing = sanitize_smoothing(self.camera_smoothing);
        self.color_smoothing = sanitize_smoothing(self.color_smoothing);
        self
    }
}

/// Clamps to `[0, 1]`; NaN falls back to the default.
fn sanitize_smoothing(alpha: f32) -> f32 {
    if alpha.is_nan() {
        DEFAULT_SMOOTHING
    } else {
        alpha.clamp(0.0, 1.0)
    }
}
