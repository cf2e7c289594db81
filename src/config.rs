use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{ConfigError, EngineError};
use crate::game::{GridEngine, Tile, DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_WIN_THRESHOLD};

/// Board geometry and goal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
    pub win_threshold: Tile,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            win_threshold: DEFAULT_WIN_THRESHOLD,
        }
    }
}

/// Gameplay options.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed; absent means seeded from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the given file, or use the defaults without touching the
    /// filesystem when no path is given. A named file that is missing is an
    /// error.
    pub fn from_optional_file(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height == 0 {
            return Err(ConfigError::Validation(
                "board.height must be >= 1".into(),
            ));
        }
        if self.board.width == 0 {
            return Err(ConfigError::Validation(
                "board.width must be >= 1".into(),
            ));
        }
        if self.board.win_threshold < 2 {
            return Err(ConfigError::Validation(
                "board.win_threshold must be >= 2".into(),
            ));
        }

        Ok(())
    }

    /// Build a fresh engine for this configuration.
    pub fn build_engine(&self) -> Result<GridEngine, EngineError> {
        let BoardConfig {
            height,
            width,
            win_threshold,
        } = self.board;
        match self.game.seed {
            Some(seed) => {
                GridEngine::with_rng(height, width, win_threshold, StdRng::seed_from_u64(seed))
            }
            None => GridEngine::new(height, width, win_threshold),
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.height, 4);
        assert_eq!(config.board.width, 4);
        assert_eq!(config.board.win_threshold, 2048);
        assert_eq!(config.game.seed, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
win_threshold = 32
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.win_threshold, 32);
        assert_eq!(config.board.height, 4);
        assert_eq!(config.board.width, 4);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_height() {
        let mut config = AppConfig::default();
        config.board.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_width() {
        let mut config = AppConfig::default();
        config.board.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_tiny_threshold() {
        let mut config = AppConfig::default();
        config.board.win_threshold = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_no_config_path_uses_defaults() {
        let config = AppConfig::from_optional_file(None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_named_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            AppConfig::from_optional_file(Some(&path)),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("twenty48.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
height = 5
width = 6

[game]
seed = 42
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.height, 5);
        assert_eq!(config.board.width, 6);
        assert_eq!(config.game.seed, Some(42));
        // Others are defaults
        assert_eq!(config.board.win_threshold, 2048);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nwidth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[board\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_seeded_engines_match() {
        let mut config = AppConfig::default();
        config.game.seed = Some(7);
        let a = config.build_engine().unwrap();
        let b = config.build_engine().unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.height(), 4);
    }
}
