//! Application configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    search::EngineKind,
    tictactoe::{BoardGeometry, DEFAULT_BOARD_WIDTH, MAX_SIZE, MIN_SIZE, Player},
};

/// Settings for a game session.
///
/// Missing keys fall back to the defaults, so an empty file is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use noughts::config::AppConfig;
/// use noughts::search::EngineKind;
/// use noughts::tictactoe::Player;
///
/// let config = AppConfig::default()
///     .with_board_size(4)
///     .with_engine(EngineKind::Minimax)
///     .with_computer(Player::O);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Board side, 3 to 5
    pub board_size: usize,
    /// Search algorithm used for computer moves
    pub engine: EngineKind,
    /// Side played automatically by the engine, if any
    pub computer: Option<Player>,
    /// Board width in pixels, used to map pointer positions to cells
    pub board_width: u32,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board_size: MIN_SIZE,
            engine: EngineKind::default(),
            computer: None,
            board_width: DEFAULT_BOARD_WIDTH,
            log_filter: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, crate::Error> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.board_size) {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "board_size must be between {MIN_SIZE} and {MAX_SIZE}, got {}",
                    self.board_size
                ),
            });
        }
        if (self.board_width as usize) < self.board_size {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "board_width must be at least {} pixels",
                    self.board_size
                ),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(crate::Error::InvalidConfiguration {
                message: "log_filter must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Pixel layout for the configured board
    pub fn geometry(&self) -> Result<BoardGeometry, crate::Error> {
        BoardGeometry::new(self.board_size, self.board_width)
    }

    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_engine(mut self, engine: EngineKind) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_computer(mut self, player: Player) -> Self {
        self.computer = Some(player);
        self
    }

    pub fn with_board_width(mut self, width: u32) -> Self {
        self.board_width = width;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
