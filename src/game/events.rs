//! Notifications the controller emits for the presentation layer.

/// How a finished run ended.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    /// Victory once the final par is reached, defeat otherwise.
    pub fn from_score(score: u32, final_par: u32) -> Self {
        if score >= final_par { Outcome::Victory } else { Outcome::Defeat }
    }

    pub fn message(self, score: u32) -> String {
        match self {
            Outcome::Victory => "You saved the world!!!".to_string(),
            Outcome::Defeat => format!("You have failed! Score:{}", score),
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// An enemy was touched; fired after every kill.
    Scored { score: u32, level: u8 },
    LevelUp { level: u8 },
    /// Remaining level time, fired on every countdown tick and when a level (re)arms.
    TimeTick { minutes: u32, seconds: u32 },
    /// Terminal; fired once per run.
    GameOver { outcome: Outcome, score: u32 },
}
