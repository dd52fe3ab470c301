//! Persisted GUI preferences (players, depth, orientation).
//!
//! This is application configuration, not a save-game: the board itself is
//! never persisted. Loading falls back to defaults on any error and saving
//! is best-effort.

use crate::app::PlayerType;
use serde::{Deserialize, Serialize};

const SETTINGS_FILE: &str = "corners_settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub red_player: PlayerType,
    pub white_player: PlayerType,
    pub engine_depth: u8,
    pub board_flipped: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            red_player: PlayerType::Human,
            white_player: PlayerType::Minimax,
            engine_depth: 4,
            board_flipped: false,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        std::fs::read_to_string(SETTINGS_FILE)
            .ok()
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Ok(data) = serde_json::to_string_pretty(self) {
            std::fs::write(SETTINGS_FILE, data).ok();
        }
    }
}
