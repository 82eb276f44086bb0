//! Path files: a JSON array of `{"x": .., "y": ..}` objects in drawing order.
//!
//! The drawing tool writes this format and the transform reads it, so
//! serialization must round-trip exactly.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::types::Point;

pub const EXTENSION: &str = "json";

pub fn from_json(json: &str) -> Result<Vec<Point>> {
    Ok(serde_json::from_str(json)?)
}

pub fn to_json(points: &[Point]) -> Result<String> {
    Ok(serde_json::to_string(points)?)
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let points = from_json(&json)?;
    debug!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

pub fn save(path: impl AsRef<Path>, points: &[Point]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_json(points)?).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// A directory of named path files, `<dir>/<name>.json`.
#[derive(Clone, Debug)]
pub struct PathLibrary {
    dir: PathBuf,
}

impl PathLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, EXTENSION))
    }

    pub fn load(&self, name: &str) -> Result<Vec<Point>> {
        load(self.path_of(name))
    }

    pub fn save(&self, name: &str, points: &[Point]) -> Result<()> {
        save(self.path_of(name), points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("epicycles-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_exact_roundtrip() {
        let mut rng = StdRng::seed_from_u64(1);
        let points: Vec<Point> = (0..200)
            .map(|_| Point::new(rng.gen::<f64>() * 1e3 - 500., rng.gen::<f64>() / 3.))
            .collect();
        let json = to_json(&points).unwrap();
        assert_eq!(from_json(&json).unwrap(), points);
    }

    #[test]
    fn test_reads_drawing_tool_output() {
        let points = from_json(r#"[{"x":10,"y":20.5},{"x":-3.25,"y":0}]"#).unwrap();
        assert_eq!(points, vec![Point::new(10., 20.5), Point::new(-3.25, 0.)]);
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(from_json("[{\"x\": 1}]"), Err(Error::Json(_))));
        assert!(matches!(from_json("not json"), Err(Error::Json(_))));
        assert!(matches!(from_json("{\"x\": 1, \"y\": 2}"), Err(Error::Json(_))));
    }

    #[test]
    fn test_library_roundtrip() {
        let library = PathLibrary::new(temp_dir("library"));
        let points = vec![Point::new(1., 2.), Point::new(3.5, -4.)];
        library.save("my path", &points).unwrap();
        assert!(library.path_of("my path").ends_with("my path.json"));
        assert_eq!(library.load("my path").unwrap(), points);
    }

    #[test]
    fn test_missing_file() {
        let library = PathLibrary::new(temp_dir("missing"));
        assert!(matches!(library.load("nope"), Err(Error::Io { .. })));
    }
}
