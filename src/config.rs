//! Board configuration, loadable from TOML.

use std::path::Path;

use log::warn;

use crate::error::ConfigError;

/// Default number of rows.
pub const DEFAULT_HEIGHT: usize = 6;

/// Default number of columns.
pub const DEFAULT_WIDTH: usize = 7;

/// Largest accepted dimension on either axis.
pub const MAX_DIMENSION: usize = 64;

/// Board dimensions for a game.
///
/// Missing keys fall back to the standard 6x7 board:
///
/// ```toml
/// height = 6
/// width = 7
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl EngineConfig {
    /// Config for an explicit board size.
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(
                "config file '{}' not found, using default {}x{} board",
                path.display(),
                DEFAULT_HEIGHT,
                DEFAULT_WIDTH
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::Validation("height must be >= 1".into()));
        }
        if self.width == 0 {
            return Err(ConfigError::Validation("width must be >= 1".into()));
        }
        if self.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "height must be <= {MAX_DIMENSION}"
            )));
        }
        if self.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "width must be <= {MAX_DIMENSION}"
            )));
        }
        Ok(())
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config, EngineConfig::new(6, 7));
        assert_eq!(config.cell_count(), 42);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("width = 9").unwrap();
        assert_eq!(config, EngineConfig::new(6, 9));
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_dimensions() {
        assert!(matches!(
            EngineConfig::new(0, 7).validate(),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("width = 0"),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let err = EngineConfig::new(6, MAX_DIMENSION + 1).validate().unwrap_err();
        assert_eq!(err.to_string(), "config validation error: width must be <= 64");
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        assert!(matches!(
            EngineConfig::from_toml_str("height = \"tall\""),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            EngineConfig::load_or_default(Path::new("/nonexistent/connect-four.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = EngineConfig::load(Path::new("/nonexistent/connect-four.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "height = 8\nwidth = 10").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config, EngineConfig::new(8, 10));
    }
}
