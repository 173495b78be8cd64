//! Level table: cumulative score goals, time allotted and player speed per level.
use crate::config::ConfigError;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelSpec {
    /// Cumulative score needed to clear the level.
    pub par: u32,
    /// Seconds on the clock when the level begins.
    pub time: u32,
    /// Player step length while the level is active.
    pub speed: f64,
}

pub static CLASSIC_LEVELS: [LevelSpec; 5] = [
    LevelSpec { par: 5, time: 60, speed: 1.5 },
    LevelSpec { par: 10, time: 50, speed: 2.0 },
    LevelSpec { par: 15, time: 30, speed: 2.5 },
    LevelSpec { par: 20, time: 20, speed: 3.0 },
    LevelSpec { par: 30, time: 15, speed: 3.5 },
];

/// Ordered levels, numbered from 1.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, PartialEq)]
pub struct LevelTable(Vec<LevelSpec>);

impl LevelTable {
    pub fn new(levels: Vec<LevelSpec>) -> Self {
        Self(levels)
    }

    pub fn classic() -> Self {
        Self(CLASSIC_LEVELS.to_vec())
    }

    /// Level `n` (1-based).
    pub fn get(&self, n: u8) -> Option<&LevelSpec> {
        (n as usize).checked_sub(1).and_then(|i| self.0.get(i))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn final_level(&self) -> u8 {
        self.0.len().min(u8::MAX as usize) as u8
    }

    /// Score at which enemies stop respawning and the run is won.
    pub fn final_par(&self) -> u32 {
        self.0.last().map(|l| l.par).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelSpec> {
        self.0.iter()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.0.is_empty() {
            return Err(ConfigError::EmptyLevelTable);
        }
        if self.0.len() > u8::MAX as usize {
            return Err(ConfigError::InvalidLevel { level: u8::MAX, reason: "too many levels".into() });
        }
        let mut prev_par = 0;
        for (i, spec) in self.0.iter().enumerate() {
            let level = (i + 1) as u8;
            if spec.par <= prev_par {
                return Err(ConfigError::InvalidLevel {
                    level,
                    reason: format!("par {} must exceed previous par {}", spec.par, prev_par),
                });
            }
            if spec.time == 0 {
                return Err(ConfigError::InvalidLevel { level, reason: "time must be positive".into() });
            }
            if !spec.speed.is_finite() || spec.speed <= 0.0 {
                return Err(ConfigError::InvalidLevel {
                    level,
                    reason: format!("speed {} must be positive", spec.speed),
                });
            }
            prev_par = spec.par;
        }
        Ok(())
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::classic()
    }
}
