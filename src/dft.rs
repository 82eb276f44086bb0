use std::f64::consts::PI;

use log::debug;

use crate::complex::{expi, Complex};
use crate::error::{Error, Result};
use crate::signal;
use crate::types::Point;
use crate::wave::{Wave, WaveSet};


//raw definition of dft, scaled by 1/n on the way in.
//o(n^2), no fft shortcut
pub fn coefficients(signal: &[Complex]) -> Result<Vec<Complex>> {
    let n = signal.len();
    if n == 0 {
        return Err(Error::NoSamples);
    }

    if let Some(index) = signal.iter().position(|z| !z.is_finite()) {
        return Err(Error::NonFiniteSample { index });
    }

    Ok((0..n)
        .map(|k| {
            signal
                .iter()
                .enumerate()
                .map(|(m, z)| z * expi(-2.0 * PI * (k * m) as f64 / n as f64))
                .sum::<Complex>()
                / n as f64
        })
        .collect())
}

/// Forward DFT of a complex signal into one wave per bin, in bin order.
pub fn dft(signal: &[Complex]) -> Result<WaveSet> {
    let n = signal.len();
    let waves: Vec<Wave> = coefficients(signal)?
        .into_iter()
        .enumerate()
        .map(|(k, c)| Wave::new(k, c.norm(), phase(c)))
        .collect();

    debug!(
        "dft over {} samples, dc amp {:.4}",
        n,
        waves.first().map_or(0., |w| w.amp)
    );

    Ok(WaveSet::from_waves(waves, n))
}

/// Extracts the signal from `points` and transforms it.
pub fn transform(points: &[Point]) -> Result<WaveSet> {
    dft(&signal::extract(points)?)
}

// atan2 can land on -π when the imaginary sum is -0.0
fn phase(c: Complex) -> f64 {
    if c.re == 0. && c.im == 0. {
        return 0.;
    }

    let phi = c.im.atan2(c.re);
    if phi <= -PI {
        PI
    } else {
        phi
    }
}
