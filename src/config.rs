use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureConfig {
    /// When false the engine keeps tracking but always exposes the identity transform.
    pub scalable: bool,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            scalable: true,
            min_scale: 1.0,
            max_scale: 2.0,
        }
    }
}

impl GestureConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GestureConfig =
            serde_json::from_str(json).context("Failed to parse gesture config")?;
        config.validate()?;
        log::info!(
            "Loaded gesture config: scalable={}, scale range=({}, {})",
            config.scalable,
            config.min_scale,
            config.max_scale
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_scale.is_finite() && self.max_scale.is_finite(),
            "scale bounds must be finite (min={}, max={})",
            self.min_scale,
            self.max_scale
        );
        ensure!(
            self.min_scale >= 0.0,
            "minScale ({}) must not be negative",
            self.min_scale
        );
        ensure!(
            self.min_scale < self.max_scale,
            "minScale ({}) must be below maxScale ({})",
            self.min_scale,
            self.max_scale
        );
        Ok(())
    }

    /// Open interval test; the bounds themselves are never accepted.
    pub fn accepts_scale(&self, scale: f64) -> bool {
        scale > self.min_scale && scale < self.max_scale
    }
}
