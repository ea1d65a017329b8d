use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ar::camera::{CameraFacing, SimulatedOutcome};
use crate::consts::{MAX_ZOOM, MIN_ZOOM, VIEWPORT_TRANSITION_MS, ZOOM_STEP};
use crate::error::{Result, WayfindError};
use crate::i18n::Language;
use crate::topology::DEFAULT_DESTINATION;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WayfindConfig {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_step: f32,
    /// Duration of the eased transition after a zoom button press.
    pub transition_ms: u64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            transition_ms: VIEWPORT_TRANSITION_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub facing: CameraFacing,
    /// How the simulated camera backend answers acquisition requests.
    pub simulated: SimulatedOutcome,
    /// Artificial delay before the simulated backend answers.
    pub latency_ms: u64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            facing: CameraFacing::Environment,
            simulated: SimulatedOutcome::Grant,
            latency_ms: 400,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub destination: String,
    pub language: Language,
    pub color_blind_mode: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            destination: DEFAULT_DESTINATION.to_string(),
            language: Language::default(),
            color_blind_mode: false,
        }
    }
}

impl WayfindConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: WayfindConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| WayfindError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        let v = &self.viewport;
        if v.min_zoom <= 0.0 {
            return Err(WayfindError::Config(format!(
                "min_zoom must be positive, got {}",
                v.min_zoom
            )));
        }
        if v.min_zoom > v.max_zoom {
            return Err(WayfindError::Config(format!(
                "min_zoom {} exceeds max_zoom {}",
                v.min_zoom, v.max_zoom
            )));
        }
        if v.zoom_step <= 0.0 {
            return Err(WayfindError::Config(format!(
                "zoom_step must be positive, got {}",
                v.zoom_step
            )));
        }
        Ok(())
    }
}
