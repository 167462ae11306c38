use std::fs;
use std::path::Path;

use anyhow::{ensure, Context};
use serde::Deserialize;

use crate::primitives::light::{PointLight, DEFAULT_LIGHT};
use crate::process::trace::MAX_DEPTH;

pub const DEFAULT_SIZE: [u32; 2] = [800, 600];

/// Settings read from a TOML file. Missing keys fall back to the defaults:
///
/// ```toml
/// size = [800, 600]
/// max_depth = 3
/// light = [1.0, 1.0, -0.5]
/// ```
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub size: [u32; 2],
    pub max_depth: u32,
    pub light: [f64; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            max_depth: MAX_DEPTH,
            light: DEFAULT_LIGHT,
        }
    }
}

impl RenderConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: RenderConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.size[0] > 0 && self.size[1] > 0,
            "frame size must be non-zero, got {}x{}",
            self.size[0],
            self.size[1]
        );
        ensure!(
            self.size[0]
                .checked_mul(self.size[1])
                .and_then(|pixels| pixels.checked_mul(4))
                .is_some(),
            "frame size {}x{} is too large",
            self.size[0],
            self.size[1]
        );
        ensure!(
            self.light.iter().all(|c| c.is_finite()),
            "light position must be finite, got {:?}",
            self.light
        );
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.size[0]
    }

    pub fn height(&self) -> u32 {
        self.size[1]
    }

    pub fn light(&self) -> PointLight {
        PointLight::from(self.light)
    }
}
