//! Text view of the inverse transform.
//!
//! The forward DFT already divides by N, so each amplitude printed here is the
//! `(1/N)·|X_k|` the reconstructor uses, and the sum is written without a
//! separate `1/N` factor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wave::WaveSet;

/// Which axis of the reconstruction to print.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// `x(θ) = Σ amp·cos(freq·θ + phase)`
    Cosine,
    /// `y(θ) = Σ amp·sin(freq·θ + phase)`
    Sine,
}

impl Orientation {
    fn function(self) -> &'static str {
        match self {
            Orientation::Cosine => "cos",
            Orientation::Sine => "sin",
        }
    }

    fn axis(self) -> &'static str {
        match self {
            Orientation::Cosine => "x",
            Orientation::Sine => "y",
        }
    }
}

/// Displays one axis of the inverse sum, one term per wave in wave order.
pub struct InverseEquation<'a> {
    waves: &'a WaveSet,
    orientation: Orientation,
    precision: Option<usize>,
}

impl<'a> InverseEquation<'a> {
    pub fn new(waves: &'a WaveSet, orientation: Orientation) -> Self {
        Self {
            waves,
            orientation,
            precision: None,
        }
    }

    /// Rounds amplitudes and phases to `precision` decimals. `None` prints
    /// the shortest representation that reads back to the same `f64`.
    pub fn precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }
}

fn number(f: &mut fmt::Formatter<'_>, value: f64, precision: Option<usize>) -> fmt::Result {
    match precision {
        Some(p) => write!(f, "{:.*}", p, value),
        None => write!(f, "{}", value),
    }
}

impl fmt::Display for InverseEquation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(θ) = ", self.orientation.axis())?;

        if self.waves.is_empty() {
            return write!(f, "0");
        }

        for (i, wave) in self.waves.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }

            number(f, wave.amp, self.precision)?;
            write!(f, "·{}({}θ", self.orientation.function(), wave.freq)?;
            if wave.phase.is_sign_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            number(f, wave.phase.abs(), self.precision)?;
            write!(f, ")")?;
        }

        Ok(())
    }
}

pub fn format(waves: &WaveSet, orientation: Orientation) -> String {
    InverseEquation::new(waves, orientation).to_string()
}

/// Both axes, `x(θ)` first, on separate lines.
pub fn format_both(waves: &WaveSet, precision: Option<usize>) -> String {
    format!(
        "{}\n{}",
        InverseEquation::new(waves, Orientation::Cosine).precision(precision),
        InverseEquation::new(waves, Orientation::Sine).precision(precision)
    )
}
