//! Preprocessing and display options applied between a loaded path and the
//! reconstructor.

use serde::{Deserialize, Serialize};

use crate::dft;
use crate::error::Result;
use crate::signal::{self, DEFAULT_CENTER_SCALE};
use crate::types::Point;
use crate::wave::WaveSet;

/// Subtract the centroid, then scale.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct Centering {
    pub scale: f64,
}

impl Default for Centering {
    fn default() -> Self {
        Self {
            scale: DEFAULT_CENTER_SCALE,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Keep every `stride`-th point. 1 keeps them all.
    pub stride: usize,
    pub centering: Option<Centering>,
    pub sort_by_amplitude: bool,
    /// Keep only this many waves after ordering.
    pub max_waves: Option<usize>,
    /// Decimals in the printed inverse equation.
    pub precision: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stride: 1,
            centering: None,
            sort_by_amplitude: true,
            max_waves: None,
            precision: None,
        }
    }
}

impl PipelineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Runs the named preprocessing steps, in order: downsample, center.
    pub fn preprocess(&self, points: &[Point]) -> Result<Vec<Point>> {
        let points = signal::downsample(points, self.stride)?;
        match self.centering {
            Some(c) => signal::center(&points, c.scale),
            None => Ok(points),
        }
    }

    /// Preprocess, transform, then order and select for display.
    pub fn waves(&self, points: &[Point]) -> Result<WaveSet> {
        let mut waves = dft::transform(&self.preprocess(points)?)?;
        if self.sort_by_amplitude {
            waves = waves.sorted_by_amplitude();
        }
        if let Some(count) = self.max_waves {
            waves = waves.truncated(count);
        }
        Ok(waves)
    }
}
