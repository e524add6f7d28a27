use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::Error;
use crate::game::{Color, DEFAULT_CARD_SIZE, MIN_CELL, Rect, Size};

const CONFIG_DIR_NAME: &str = "pairs";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: Color,
    pub region: Rect,
}

/// Layout and pacing, read from `config.json` in the user config directory.
/// Every field may be left out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_ms: u64,
    pub surface: Size,
    pub board: Rect,
    pub card: Size,
    pub min_cell: Size,
    pub table_color: Color,
    pub players: [PlayerConfig; 2],
    /// Directory holding `c1.png` .. `c12.png` and `back.png`.
    pub art_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let board = Rect::new(5.0, 120.0, 590.0, 340.0);
        let lower_y = board.y + board.h + 10.0;
        Config {
            tick_ms: 10,
            surface: Size::new(600.0, 580.0),
            board,
            card: DEFAULT_CARD_SIZE,
            min_cell: MIN_CELL,
            table_color: Color::TABLE,
            players: [
                PlayerConfig {
                    name: "Player 1".to_string(),
                    color: Color::rgba(242.0 / 255.0, 245.0 / 255.0, 66.0 / 255.0, 170.0 / 255.0),
                    region: Rect::new(5.0, 5.0, 590.0, 100.0),
                },
                PlayerConfig {
                    name: "Player 2".to_string(),
                    color: Color::rgba(219.0 / 255.0, 157.0 / 255.0, 252.0 / 255.0, 170.0 / 255.0),
                    region: Rect::new(5.0, lower_y, 590.0, 100.0),
                },
            ],
            art_dir: None,
        }
    }
}

pub fn config_path() -> PathBuf {
    glib::user_config_dir()
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

impl Config {
    /// Reads the user's config; a missing file yields the defaults.
    pub fn load() -> Result<Self, Error> {
        let path = config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    #[instrument]
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&raw).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        info!(tick_ms = config.tick_ms, "config loaded");
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: Config = serde_json::from_str(raw)?;
        config.tick_ms = config.tick_ms.max(1);
        Ok(config)
    }
}
