use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Board, MAX_CELLS, STANDARD_HEIGHT, STANDARD_WIDTH};

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        match self.board.width.checked_mul(self.board.height) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(ConfigError::Validation(format!(
                "board.width * board.height must be <= {MAX_CELLS}"
            ))),
        }
    }

    /// Build an empty board with the configured dimensions.
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        Board::new(self.board.width, self.board.height)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_is_standard_board() {
        let config = AppConfig::default();
        assert_eq!(config.board, BoardConfig { width: 7, height: 6 });
        assert!(config.validate().is_ok());
        let board = config.build_board().unwrap();
        assert_eq!((board.width(), board.height()), (7, 6));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml("[board]\nwidth = 9\n").unwrap();
        assert_eq!(config.board, BoardConfig { width: 9, height: 6 });

        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = AppConfig::from_toml("[board]\nheight = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("height")));
    }

    #[test]
    fn test_oversized_board_rejected() {
        let config = AppConfig {
            board: BoardConfig {
                width: MAX_CELLS,
                height: 2,
            },
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_bad_toml() {
        let err = AppConfig::from_toml("[board]\nwidth = \"wide\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[board]\nwidth = 5\nheight = 4").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.board, BoardConfig { width: 5, height: 4 });
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
