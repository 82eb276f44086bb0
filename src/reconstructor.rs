//! Rebuilding the drawing from its waves, one tick at a time.
//!
//! [`epicycles`] is the pure part: given a wave set, an origin and `theta`, it
//! chains one rotating vector per wave and returns every intermediate center
//! plus the final point. [`Reconstructor`] owns the animation state around it.

use std::f64::consts::TAU;

use glam::DVec2;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::circle::{Circle, Frame};
use crate::error::{Error, Result};
use crate::types::Point;
use crate::wave::WaveSet;

/// Chains the waves from `origin` at `theta`.
///
/// `center_{j+1} = center_j + amp_j·(cos φ_j, sin φ_j)` with `φ_j = freq_j·θ + phase_j`.
/// Ordering only changes the intermediate centers, never the final point.
pub fn epicycles(waves: &WaveSet, origin: Point, theta: f64) -> Frame {
    let mut center: DVec2 = origin.into();
    let mut circles = Vec::with_capacity(waves.len());

    for wave in waves {
        let tip = center + wave.vector(theta);
        circles.push(Circle::new(center.into(), tip.into(), wave.amp, wave.freq));
        center = tip;
    }

    Frame {
        theta,
        circles,
        point: center.into(),
    }
}

/// The only mutable state of the pipeline.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReconstructionState {
    /// In `[0, 2π]`, wrapped to 0 once it passes 2π.
    pub theta: f64,
    /// `2π/N`
    pub delta: f64,
    /// Points traced since the last wrap, oldest first.
    pub path: Vec<Point>,
}

impl ReconstructionState {
    fn new(sample_count: usize) -> Result<Self> {
        if sample_count == 0 {
            return Err(Error::NoSamples);
        }

        Ok(Self {
            theta: 0.,
            delta: TAU / sample_count as f64,
            path: vec![],
        })
    }

    fn advance(&mut self) {
        self.theta += self.delta;
        if self.theta > TAU {
            trace!("period complete after {} points, clearing path", self.path.len());
            self.theta = 0.;
            self.path.clear();
        }
    }
}

pub struct Reconstructor {
    waves: WaveSet,
    origin: Point,
    state: ReconstructionState,
}

impl Reconstructor {
    pub fn new(waves: WaveSet, origin: Point) -> Result<Self> {
        let state = ReconstructionState::new(waves.sample_count())?;
        Ok(Self {
            waves,
            origin,
            state,
        })
    }

    /// Swaps in a new wave set and resets theta, delta and the traced path
    /// together. On error nothing changes.
    pub fn set_waves(&mut self, waves: WaveSet) -> Result<&mut Self> {
        self.state = ReconstructionState::new(waves.sample_count())?;
        self.waves = waves;
        Ok(self)
    }

    // the renderer owns the window, so it decides where the drawing sits
    pub fn set_origin(&mut self, origin: Point) -> &mut Self {
        self.origin = origin;
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        self.state.theta = 0.;
        self.state.path.clear();
        self
    }

    pub fn waves(&self) -> &WaveSet {
        &self.waves
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn state(&self) -> &ReconstructionState {
        &self.state
    }

    pub fn theta(&self) -> f64 {
        self.state.theta
    }

    pub fn delta(&self) -> f64 {
        self.state.delta
    }

    pub fn path(&self) -> &[Point] {
        &self.state.path
    }

    /// The frame at the current theta, without advancing.
    pub fn frame(&self) -> Frame {
        epicycles(&self.waves, self.origin, self.state.theta)
    }

    /// Computes the current frame, records its point, then advances theta.
    pub fn tick(&mut self) -> Frame {
        let frame = self.frame();
        self.state.path.push(frame.point);
        self.state.advance();
        frame
    }
}
