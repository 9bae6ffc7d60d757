use crate::api::generator::GeneratorConfig;
use crate::api::roads::RoadStyle;
use crate::core::constants::SCENE_SCALE;
use crate::util::error::SceneError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Everything that shapes a composed scene besides the layout itself.
///
/// Missing fields fall back to their defaults when loaded from JSON.
///
/// # Example
/// ```
/// use cityscene_rs::{GeneratorConfig, SceneConfig};
///
/// let config = SceneConfig::new()
///     .scale(5_000.0)
///     .generator(GeneratorConfig::new().count(200).seed(1));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Scene units per degree.
    pub scale: f64,
    pub generator: GeneratorConfig,
    pub roads: RoadStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scale: SCENE_SCALE,
            generator: GeneratorConfig::default(),
            roads: RoadStyle::default(),
        }
    }
}

impl SceneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    pub fn roads(mut self, roads: RoadStyle) -> Self {
        self.roads = roads;
        self
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SceneError::InvalidConfig(format!(
                "scale must be > 0, got {}",
                self.scale
            )));
        }
        if !self.roads.width_scale.is_finite() || self.roads.width_scale < 0.0 {
            return Err(SceneError::InvalidConfig(format!(
                "road width scale must be >= 0, got {}",
                self.roads.width_scale
            )));
        }
        self.generator.validate()
    }

    /// Loads and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let file = File::open(path).map_err(|e| SceneError::IoError(e.to_string()))?;
        let config: SceneConfig = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| SceneError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scale, SCENE_SCALE);
    }

    #[test]
    fn test_rejects_bad_scale() {
        assert!(matches!(
            SceneConfig::new().scale(0.0).validate(),
            Err(SceneError::InvalidConfig(_))
        ));
        assert!(SceneConfig::new().scale(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_from_json_file() -> Result<(), SceneError> {
        let dir = tempdir().map_err(|e| SceneError::IoError(e.to_string()))?;
        let path = dir.path().join("scene.json");

        let mut file = File::create(&path).map_err(|e| SceneError::IoError(e.to_string()))?;
        writeln!(
            file,
            r#"{{"scale": 2000.0, "generator": {{"count": 25, "min_height": 10.0, "max_height": 12.0}}}}"#
        )
        .map_err(|e| SceneError::IoError(e.to_string()))?;

        let config = SceneConfig::from_json_file(&path)?;
        assert_eq!(config.scale, 2000.0);
        assert_eq!(config.generator.count, 25);
        assert_eq!(config.generator.min_height, 10.0);
        assert_eq!(config.roads, RoadStyle::default());
        Ok(())
    }

    #[test]
    fn test_from_json_file_invalid_values() -> Result<(), SceneError> {
        let dir = tempdir().map_err(|e| SceneError::IoError(e.to_string()))?;
        let path = dir.path().join("scene.json");
        std::fs::write(&path, r#"{"generator": {"min_height": 50.0, "max_height": 10.0}}"#)
            .map_err(|e| SceneError::IoError(e.to_string()))?;

        assert!(matches!(
            SceneConfig::from_json_file(&path),
            Err(SceneError::InvalidConfig(_))
        ));
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SceneConfig::from_json_file("/nonexistent/scene.json"),
            Err(SceneError::IoError(_))
        ));
    }
}
