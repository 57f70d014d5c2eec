use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised difficulty {0:?}, expected 1, 2 or 3")]
pub struct MalformedDifficultyInput(pub String);

impl Difficulty {
    /// Accepts the menu numbers "1"/"2"/"3" or the difficulty names, ignoring case.
    pub fn from_choice(choice: &str) -> Result<Difficulty, MalformedDifficultyInput> {
        match choice.trim().to_ascii_lowercase().as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "normal" => Ok(Difficulty::Normal),
            "3" | "hard" => Ok(Difficulty::Hard),
            _ => Err(MalformedDifficultyInput(choice.trim().to_string())),
        }
    }

    pub fn time_budget(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_secs(60),
            Difficulty::Normal => Duration::from_secs(30),
            Difficulty::Hard => Duration::from_secs(15),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Settings fixed at startup and kept for the whole process.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub goals: usize,
    pub difficulty: Difficulty,
    pub tick_rate: u32,
    pub result_pause: Duration,
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 10,
            height: 10,
            goals: 3,
            difficulty: Difficulty::default(),
            tick_rate: 60,
            result_pause: Duration::from_secs(2),
            seed: None,
        }
    }
}
