//! The source point, touch points and bounds fed to the intercept, optionally read from a
//! TOML file.

use std::{fs, path::Path};

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use edgecast_geometry::{Bounds, Point};

/// A source around the middle of the screen.
pub const SAMPLE_SOURCE: Point = Point::new(500.0, 350.0);

/// Touches all over the place, including a vertical, a horizontal and a coincident one.
pub const SAMPLE_TOUCHES: [Point; 7] = [
    Point::new(100.0, 100.0),
    Point::new(50.0, 400.0),
    Point::new(450.0, 800.0),
    Point::new(700.0, 25.0),
    Point::new(500.0, 400.0),
    Point::new(950.0, 350.0),
    Point::new(500.0, 350.0),
];

/// Intermediate representation for deserializing TOML configuration files.
///
/// Every key is optional and falls back to the samples.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    source: Option<Point>,
    #[serde(default)]
    touches: Option<Vec<Point>>,
    #[serde(default)]
    bounds: Option<Bounds>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub source: Point,
    pub touches: Vec<Point>,
    pub bounds: Bounds,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            source: SAMPLE_SOURCE,
            touches: SAMPLE_TOUCHES.to_vec(),
            bounds: Bounds::SCREEN,
        }
    }
}

impl Configuration {
    pub fn load(path: &Path) -> Result<Self> {
        let toml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        Self::from_toml(&toml, &path.display().to_string())
    }

    /// Parse a configuration. `name` is only used in error messages.
    pub fn from_toml(toml: &str, name: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(toml)
            .with_context(|| format!("Failed to parse TOML configuration {name}"))?;

        let defaults = Self::default();
        let configuration = Self {
            source: file.source.unwrap_or(defaults.source),
            touches: file.touches.unwrap_or(defaults.touches),
            bounds: file.bounds.unwrap_or(defaults.bounds),
        };
        configuration
            .validate()
            .with_context(|| format!("Invalid configuration {name}"))?;
        Ok(configuration)
    }

    fn validate(&self) -> Result<()> {
        let b = &self.bounds;
        ensure!(
            [b.left, b.right, b.bottom, b.top]
                .iter()
                .all(|v| v.is_finite()),
            "Bounds must be finite: {b:?}"
        );
        ensure!(
            b.is_valid(),
            "Bounds must satisfy left < right and bottom < top: {b:?}"
        );
        ensure!(
            self.source.is_finite(),
            "Source must be finite: {:?}",
            self.source
        );
        if let Some(touch) = self.touches.iter().find(|t| !t.is_finite()) {
            anyhow::bail!("Touch must be finite: {touch:?}");
        }
        Ok(())
    }
}
