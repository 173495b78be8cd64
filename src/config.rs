//! Session configuration supplied by the presentation layer.

use crate::game::levels::LevelTable;
use crate::geometry::{Boundaries, Position, Size};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("level table is empty")]
    EmptyLevelTable,

    #[error("level {level}: {reason}")]
    InvalidLevel { level: u8, reason: String },

    #[error("player size {width}x{height} must be positive")]
    InvalidSize { width: f64, height: f64 },

    #[error("arena {arena:?} must be at least three times a {player:?} player")]
    ArenaTooSmall { arena: Size, player: Size },

    #[error("player start ({x}, {y}) lies outside the arena")]
    PlayerOutOfBounds { x: f64, y: f64 },

    #[error("config parse error: {0}")]
    Parse(String),
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub player_start: Position,
    pub player_size: Size,
    pub arena: Size,
    pub levels: LevelTable,
    /// Fixed RNG seed for reproducible spawns; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_start: Position::new(0.0, 0.0),
            player_size: Size::square(20.0),
            arena: Size::new(600.0, 400.0),
            levels: LevelTable::classic(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn boundaries(&self) -> Boundaries {
        Boundaries::from_arena(self.arena, self.player_size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.levels.validate()?;
        let Size { width, height } = self.player_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidSize { width, height });
        }
        // Spawning needs boundaries of at least two player sizes on each axis.
        let bounds = self.boundaries();
        if !(bounds.max_x - bounds.min_x >= 2.0 * width && bounds.max_y - bounds.min_y >= 2.0 * height) {
            return Err(ConfigError::ArenaTooSmall { arena: self.arena, player: self.player_size });
        }
        if !self.boundaries().contains(self.player_start) {
            return Err(ConfigError::PlayerOutOfBounds { x: self.player_start.x, y: self.player_start.y });
        }
        Ok(())
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.boundaries(), Boundaries { min_x: 0.0, min_y: 0.0, max_x: 580.0, max_y: 380.0 });
    }

    #[test]
    fn rejects_arena_smaller_than_player() {
        let cfg = GameConfig { arena: Size::new(20.0, 300.0), ..GameConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::ArenaTooSmall { .. })));
    }

    #[test]
    fn arena_must_fit_three_player_widths() {
        let player_size = Size::square(20.0);
        let exact = GameConfig { arena: Size::new(60.0, 60.0), player_size, ..GameConfig::default() };
        assert_eq!(exact.validate(), Ok(()));
        let narrow = GameConfig { arena: Size::new(59.0, 60.0), player_size, ..GameConfig::default() };
        assert!(matches!(narrow.validate(), Err(ConfigError::ArenaTooSmall { .. })));
        let short = GameConfig { arena: Size::new(40.0, 40.0), player_size, ..GameConfig::default() };
        assert!(matches!(short.validate(), Err(ConfigError::ArenaTooSmall { .. })));
    }

    #[test]
    fn rejects_start_outside_boundaries() {
        let cfg = GameConfig { player_start: Position::new(590.0, 10.0), ..GameConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::PlayerOutOfBounds { x: 590.0, y: 10.0 }));
    }

    #[test]
    fn rejects_degenerate_player_size() {
        let cfg = GameConfig { player_size: Size::new(0.0, 10.0), ..GameConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidSize { .. })));
    }
}
