use serde::{Deserialize, Serialize};

use crate::types::Point;


/// One epicycle as a renderer draws it: a circle around `center`, with the
/// arm ending at `tip`, which is the next circle's center.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub tip: Point,
    pub radius: f64,
    pub freq: usize,
}

impl Circle {
    pub fn new(center: Point, tip: Point, radius: f64, freq: usize) -> Self {
        Self {
            center,
            tip,
            radius,
            freq,
        }
    }
}

/// Everything the renderer needs for one tick.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Frame {
    pub theta: f64,
    /// Chained epicycles, one per wave, in wave order.
    pub circles: Vec<Circle>,
    /// The reconstructed point, i.e. the tip of the last circle.
    pub point: Point,
}

impl Frame {
    /// The partial sums `center_0 .. center_{N-1}`.
    pub fn centers(&self) -> impl Iterator<Item = Point> + '_ {
        self.circles.iter().map(|c| c.center)
    }
}
