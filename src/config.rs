use std::path::Path;

use tracing::warn;

use crate::ai::Strategy;
use crate::error::{ConfigError, GameError};
use crate::game::{Board, COLS, ROWS, WIN_LENGTH};

/// Board shape.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
            win_length: WIN_LENGTH,
        }
    }
}

impl BoardConfig {
    pub fn build(&self) -> Result<Board, GameError> {
        Board::new(self.rows, self.cols, self.win_length)
    }
}

/// Alpha-beta search settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched before falling back to static evaluation.
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 4 }
    }
}

/// Computer-vs-computer series settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    pub red: Strategy,
    pub yellow: Strategy,
    /// Seed for random agents; Yellow uses `seed + 1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 10,
            red: Strategy::Random,
            yellow: Strategy::AlphaBeta,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub arena: ArenaConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        if board.win_length == 0 {
            return Err(ConfigError::Validation(
                "board.win_length must be > 0".into(),
            ));
        }
        if board.win_length > board.rows.max(board.cols) {
            return Err(ConfigError::Validation(
                "board.win_length must fit on the board".into(),
            ));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation(
                "search.depth must be >= 1".into(),
            ));
        }
        if self.search.depth > board.rows * board.cols {
            return Err(ConfigError::Validation(
                "search.depth must not exceed the number of board cells".into(),
            ));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation(
                "arena.games must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
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
        let board = config.board.build().unwrap();
        assert_eq!((board.rows(), board.cols(), board.win_length()), (7, 6, 4));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
depth = 6
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.depth, 6);
        // Other fields should be defaults
        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(config.arena.games, 10);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_strategies_parse_from_toml() {
        let toml_str = r#"
[arena]
red = "alpha_beta"
yellow = "learned"
seed = 17
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.arena.red, Strategy::AlphaBeta);
        assert_eq!(config.arena.yellow, Strategy::Learned);
        assert_eq!(config.arena.seed, Some(17));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[arena]\nred = \"dqn\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_caps_depth_at_board_cells() {
        let mut config = AppConfig::default();
        config.search.depth = ROWS * COLS;
        config.validate().expect("full-board depth should be valid");
        config.search.depth = ROWS * COLS + 1;
        assert!(config.validate().is_err());
        config.search.depth = usize::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.arena.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_board() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_win_length() {
        let mut config = AppConfig::default();
        config.board.win_length = 8;
        assert!(config.validate().is_err());
        config.board.win_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 6
cols = 7

[arena]
games = 3
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.arena.games, 3);
        // Others are defaults
        assert_eq!(config.search.depth, 4);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[search]\ndepth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
