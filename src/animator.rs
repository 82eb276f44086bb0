use log::info;

use crate::circle::Frame;
use crate::config::PipelineConfig;
use crate::equation;
use crate::error::Result;
use crate::path_file::PathLibrary;
use crate::reconstructor::Reconstructor;
use crate::types::Point;
use crate::wave::WaveSet;


/// What the front end talks to: it hands over paths, asks for the equation,
/// and pulls one [`Frame`] per rendered frame.
pub struct Animator {
    config: PipelineConfig,
    origin: Point,
    reconstructor: Option<Reconstructor>,
}

impl Animator {
    pub fn new(config: PipelineConfig, origin: Point) -> Self {
        Self {
            config,
            origin,
            reconstructor: None,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn reconstructor(&self) -> Option<&Reconstructor> {
        self.reconstructor.as_ref()
    }

    pub fn waves(&self) -> Option<&WaveSet> {
        self.reconstructor.as_ref().map(|r| r.waves())
    }

    pub fn set_origin(&mut self, origin: Point) -> &mut Self {
        self.origin = origin;
        if let Some(reconstructor) = self.reconstructor.as_mut() {
            reconstructor.set_origin(origin);
        }
        self
    }

    /// Recomputes the waves for a new path and restarts the animation.
    ///
    /// The previous animation keeps running if the new path is rejected.
    pub fn on_path_changed(&mut self, points: &[Point]) -> Result<&mut Self> {
        let waves = self.config.waves(points)?;
        info!(
            "path changed: {} points, {} waves shown",
            waves.sample_count(),
            waves.len()
        );

        match self.reconstructor.as_mut() {
            Some(reconstructor) => {
                reconstructor.set_waves(waves)?;
            }
            None => self.reconstructor = Some(Reconstructor::new(waves, self.origin)?),
        }
        Ok(self)
    }

    /// Loads `name` from `library` and switches to it.
    pub fn on_path_selected(&mut self, library: &PathLibrary, name: &str) -> Result<&mut Self> {
        let points = library.load(name)?;
        self.on_path_changed(&points)
    }

    /// Both axes of the inverse sum, or `None` before any path was loaded.
    pub fn on_inverse_requested(&self) -> Option<String> {
        self.waves()
            .map(|waves| equation::format_both(waves, self.config.precision))
    }

    pub fn tick(&mut self) -> Option<Frame> {
        self.reconstructor.as_mut().map(|r| r.tick())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(1., 1.),
            Point::new(0., 1.),
        ]
    }

    #[test]
    fn test_idle_until_path() {
        let mut animator = Animator::new(PipelineConfig::default(), Point::ORIGIN);
        assert!(animator.tick().is_none());
        assert!(animator.on_inverse_requested().is_none());
    }

    #[test]
    fn test_path_change_restarts() {
        let mut animator = Animator::new(PipelineConfig::default(), Point::new(10., 10.));
        animator.on_path_changed(&square()).unwrap();

        let first = animator.tick().unwrap();
        assert_abs_diff_eq!(first.point.x, 10., epsilon = 1e-9);
        assert_abs_diff_eq!(first.point.y, 10., epsilon = 1e-9);
        animator.tick();

        animator.on_path_changed(&[Point::new(5., 5.)]).unwrap();
        let rec = animator.reconstructor().unwrap();
        assert_eq!(rec.theta(), 0.);
        assert!(rec.path().is_empty());
        assert_eq!(rec.waves().len(), 1);
    }

    #[test]
    fn test_rejected_path_keeps_animation() {
        let mut animator = Animator::new(PipelineConfig::default(), Point::ORIGIN);
        animator.on_path_changed(&square()).unwrap();
        animator.tick();

        assert!(animator.on_path_changed(&[]).is_err());
        let rec = animator.reconstructor().unwrap();
        assert_eq!(rec.waves().sample_count(), 4);
        assert_eq!(rec.path().len(), 1);
    }

    #[test]
    fn test_inverse_uses_active_waves() {
        let mut animator = Animator::new(PipelineConfig::default(), Point::ORIGIN);
        animator.on_path_changed(&square()).unwrap();
        let text = animator.on_inverse_requested().unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("x(θ) = "));
        assert!(lines.next().unwrap().starts_with("y(θ) = "));
        assert_eq!(text.matches("cos(").count(), 4);
    }

    #[test]
    fn test_origin_moves_live_animation() {
        let mut animator = Animator::new(PipelineConfig::default(), Point::ORIGIN);
        animator.on_path_changed(&[Point::new(1., 0.)]).unwrap();
        animator.set_origin(Point::new(0., 3.));
        let frame = animator.tick().unwrap();
        assert_abs_diff_eq!(frame.point.x, 1., epsilon = 1e-12);
        assert_abs_diff_eq!(frame.point.y, 3., epsilon = 1e-12);
    }
}
