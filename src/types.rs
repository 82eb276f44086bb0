use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::complex::Complex;


/// A 2D coordinate, either sampled from a drawing or reconstructed.
///
/// Serializes as `{"x": .., "y": ..}`, which is the path file format.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0., y: 0. };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `x + i·y`
    pub fn to_complex(self) -> Complex {
        Complex::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<Complex> for Point {
    fn from(z: Complex) -> Self {
        Self { x: z.re, y: z.im }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
