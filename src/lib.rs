//! Drawing with epicycles.
//!
//! A drawn path is read as the complex signal `z[n] = x[n] + i·y[n]`, transformed
//! with a plain DFT into one [`Wave`] per frequency bin, optionally ordered by
//! amplitude, and then rebuilt one tick at a time as a chain of rotating vectors.
//!
//! ```
//! use epicycles::{dft, reconstructor::Reconstructor, Point};
//!
//! let square = [
//!     Point::new(0., 0.),
//!     Point::new(1., 0.),
//!     Point::new(1., 1.),
//!     Point::new(0., 1.),
//! ];
//! let waves = dft::transform(&square).unwrap().sorted_by_amplitude();
//! let mut reconstructor = Reconstructor::new(waves, Point::ORIGIN).unwrap();
//!
//! let frame = reconstructor.tick();
//! assert!(frame.point.x.abs() < 1e-9 && frame.point.y.abs() < 1e-9);
//! ```
//!
//! Rendering is left to the caller, which consumes [`Frame`]s.

pub mod animator;
pub mod circle;
pub mod complex;
pub mod config;
pub mod dft;
pub mod equation;
pub mod error;
pub mod path_file;
pub mod reconstructor;
pub mod signal;
pub mod types;
pub mod wave;

pub use animator::Animator;
pub use circle::{Circle, Frame};
pub use complex::Complex;
pub use config::{Centering, PipelineConfig};
pub use equation::Orientation;
pub use error::{Error, Result};
pub use path_file::PathLibrary;
pub use reconstructor::{ReconstructionState, Reconstructor};
pub use types::Point;
pub use wave::{Wave, WaveSet};
