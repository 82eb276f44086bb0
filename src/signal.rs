//! Turning a drawn path into the signal the DFT consumes.
//!
//! The path is read as one complex sequence `z[n] = x[n] + i·y[n]`. No resampling,
//! filtering or interpolation happens here unless one of the explicit
//! preprocessing steps ([`downsample`], [`center`]) is applied first.

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::types::Point;

/// Default scale applied by [`center`] in the drawing tool.
pub const DEFAULT_CENTER_SCALE: f64 = 2.0;

/// Converts points to the complex signal, rejecting empty or non-finite input.
pub fn extract(points: &[Point]) -> Result<Vec<Complex>> {
    if points.is_empty() {
        return Err(Error::NoSamples);
    }

    points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            if p.is_finite() {
                Ok(p.to_complex())
            } else {
                Err(Error::NonFiniteSample { index })
            }
        })
        .collect()
}

/// Keeps every `stride`-th point, starting with the first.
pub fn downsample(points: &[Point], stride: usize) -> Result<Vec<Point>> {
    if stride == 0 {
        return Err(Error::InvalidStride);
    }

    Ok(points.iter().step_by(stride).copied().collect())
}

pub fn centroid(points: &[Point]) -> Result<Point> {
    if points.is_empty() {
        return Err(Error::NoSamples);
    }

    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0., 0.), |(sx, sy), p| (sx + p.x, sy + p.y));

    Ok(Point::new(sx / n, sy / n))
}

/// Subtracts the centroid from every point, then multiplies by `scale`.
///
/// This moves the DC term (k = 0) to zero and rescales every other amplitude, so
/// fixtures built from centered paths are not interchangeable with raw ones.
pub fn center(points: &[Point], scale: f64) -> Result<Vec<Point>> {
    let c = centroid(points)?;

    Ok(points
        .iter()
        .map(|p| Point::new((p.x - c.x) * scale, (p.y - c.y) * scale))
        .collect())
}
