//! Frequency components produced by the DFT.

use glam::DVec2;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::types::Point;

/// One epicycle: a circle of radius `amp` turning `freq` times per period,
/// starting at angle `phase`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    /// DFT bin index k. Never reassigned by ordering.
    pub freq: usize,
    pub amp: f64,
    /// In `(-π, π]`.
    pub phase: f64,
}

impl Wave {
    pub fn new(freq: usize, amp: f64, phase: f64) -> Self {
        Self { freq, amp, phase }
    }

    /// `freq·θ + phase`
    pub fn angle(&self, theta: f64) -> f64 {
        self.freq as f64 * theta + self.phase
    }

    /// The rotating vector `amp·(cos φ, sin φ)` at `theta`.
    pub fn vector(&self, theta: f64) -> DVec2 {
        let phi = self.angle(theta);
        DVec2::new(phi.cos(), phi.sin()) * self.amp
    }
}

/// The ordered waves of one DFT run.
///
/// `sample_count` is the N of the transform. It fixes the animation step
/// `2π/N` even after [`WaveSet::truncated`] drops waves.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WaveSet {
    waves: Vec<Wave>,
    sample_count: usize,
}

impl WaveSet {
    pub fn from_waves(waves: Vec<Wave>, sample_count: usize) -> Self {
        Self {
            waves,
            sample_count,
        }
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Wave> {
        self.waves.iter()
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Reorders by descending amplitude. Stable, so equal amplitudes keep
    /// their frequency order.
    pub fn sorted_by_amplitude(mut self) -> Self {
        self.waves.sort_by(|a, b| b.amp.total_cmp(&a.amp));
        self
    }

    /// Keeps the first `count` waves of the current ordering.
    pub fn truncated(mut self, count: usize) -> Self {
        if count > self.waves.len() {
            warn!(
                "asked for {} waves but only {} exist, keeping all",
                count,
                self.waves.len()
            );
        }
        self.waves.truncate(count);
        self
    }

    /// `Σ amp²`
    pub fn energy(&self) -> f64 {
        self.waves.iter().map(|w| w.amp * w.amp).sum()
    }

    /// Direct evaluation of the inverse sum at `theta`, relative to the origin.
    pub fn evaluate(&self, theta: f64) -> Point {
        self.waves
            .iter()
            .fold(DVec2::ZERO, |acc, w| acc + w.vector(theta))
            .into()
    }
}

impl<'a> IntoIterator for &'a WaveSet {
    type Item = &'a Wave;
    type IntoIter = std::slice::Iter<'a, Wave>;

    fn into_iter(self) -> Self::IntoIter {
        self.waves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn set() -> WaveSet {
        WaveSet::from_waves(
            vec![
                Wave::new(0, 1., 0.),
                Wave::new(1, 3., PI / 2.),
                Wave::new(2, 0.5, -PI / 4.),
                Wave::new(3, 3., 0.),
            ],
            4,
        )
    }

    #[test]
    fn test_sorted_by_amplitude() {
        let sorted = set().sorted_by_amplitude();
        let freqs: Vec<usize> = sorted.iter().map(|w| w.freq).collect();
        // stable: freq 1 stays ahead of freq 3
        assert_eq!(freqs, vec![1, 3, 0, 2]);
        assert_eq!(sorted.sample_count(), 4);
    }

    #[test]
    fn test_sorting_keeps_waves_intact() {
        let original = set();
        let sorted = original.clone().sorted_by_amplitude();
        for wave in original.iter() {
            assert!(sorted.iter().any(|w| w == wave));
        }
    }

    #[test]
    fn test_truncated() {
        let top = set().sorted_by_amplitude().truncated(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top.sample_count(), 4);

        let all = set().truncated(10);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_energy() {
        assert_abs_diff_eq!(set().energy(), 1. + 9. + 0.25 + 9., epsilon = 1e-12);
    }

    #[test]
    fn test_wave_vector() {
        let v = Wave::new(1, 2., 0.).vector(PI / 2.);
        assert_abs_diff_eq!(v.x, 0., epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 2., epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_dc_only() {
        let dc = WaveSet::from_waves(vec![Wave::new(0, 2., PI)], 1);
        let p = dc.evaluate(1.234);
        assert_abs_diff_eq!(p.x, -2., epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0., epsilon = 1e-12);
    }
}
