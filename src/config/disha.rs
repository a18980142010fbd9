//! Main DishaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::OccupancyThresholds;
use crate::error::Result;
use crate::frontier::FinderConfig;
use crate::io::SvgConfig;

use super::sections::{FrontierSection, OccupancySection, OutputSection};

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full Disha configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct DishaConfig {
    /// Frontier detection settings
    #[serde(default)]
    pub frontier: FrontierSection,

    /// ROS occupancy value mapping
    #[serde(default)]
    pub occupancy: OccupancySection,

    /// SVG output settings
    #[serde(default)]
    pub output: OutputSection,
}

impl DishaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/config.yaml), or defaults if absent
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section holds usable values.
    pub fn validate(&self) -> Result<()> {
        self.to_finder_config().validate()?;
        self.occupancy_thresholds().validate()?;
        self.svg_config().validate()
    }

    /// Convert to FinderConfig
    pub fn to_finder_config(&self) -> FinderConfig {
        self.frontier.to_finder_config()
    }

    /// Get the ROS value thresholds
    pub fn occupancy_thresholds(&self) -> OccupancyThresholds {
        self.occupancy.to_thresholds()
    }

    /// Get the SVG rendering config
    pub fn svg_config(&self) -> SvgConfig {
        SvgConfig {
            scale: self.output.svg_scale,
            padding: self.output.svg_padding,
            ..Default::default()
        }
    }

    /// Get robot radius
    pub fn robot_radius(&self) -> f32 {
        self.frontier.robot_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrontierError;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DishaConfig::default();
        assert_eq!(config.frontier.robot_radius, 0.17);
        assert_eq!(config.frontier.max_clusters, 255);
        assert_eq!(config.occupancy.free_threshold, 0);
        assert_eq!(config.occupancy.occupied_threshold, 1);
        assert_eq!(config.output.svg_scale, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_match_library_defaults() {
        let config = DishaConfig::default();
        assert_eq!(config.to_finder_config(), FinderConfig::default());
        assert_eq!(config.occupancy_thresholds(), OccupancyThresholds::default());

        let empty = DishaConfig::from_yaml("{}").unwrap();
        assert_eq!(empty.to_finder_config(), FinderConfig::default());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DishaConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = DishaConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = DishaConfig::from_yaml("frontier:\n  robot_radius: 0.25\n").unwrap();
        assert_eq!(config.robot_radius(), 0.25);
        assert_eq!(config.frontier.max_clusters, 255);
        assert_eq!(config.occupancy, OccupancySection::default());

        let finder = config.to_finder_config();
        assert_eq!(finder.robot_radius, 0.25);
        assert_eq!(finder.max_clusters, 255);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = DishaConfig::from_yaml("frontier:\n  robot_radius: 0.0\n").unwrap_err();
        assert!(matches!(err, FrontierError::Configuration(_)));

        let err = DishaConfig::from_yaml(
            "occupancy:\n  free_threshold: 60\n  occupied_threshold: 50\n",
        )
        .unwrap_err();
        assert!(matches!(err, FrontierError::Configuration(_)));

        let err = DishaConfig::from_yaml("frontier: [1, 2").unwrap_err();
        assert!(matches!(err, FrontierError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "frontier:\n  max_clusters: 16\noutput:\n  svg_scale: 80.0").unwrap();

        let config = DishaConfig::load(file.path()).unwrap();
        assert_eq!(config.frontier.max_clusters, 16);
        assert_eq!(config.svg_config().scale, 80.0);
        assert_eq!(config.svg_config().padding, 20.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DishaConfig::load(Path::new("/nonexistent/disha.yaml")).unwrap_err();
        assert_eq!(err.code(), "IO");
    }
}
