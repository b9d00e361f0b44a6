/// Seat of a player in the two-player session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerIndex {
    First,
    Second,
}

impl PlayerIndex {
    pub const ALL: [PlayerIndex; 2] = [PlayerIndex::First, PlayerIndex::Second];

    /// Returns the opponent's seat.
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub const fn as_usize(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    pub const fn from_usize(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            _ => None,
        }
    }
}

/// Per-player scoreboard, mutated only by the engine on turn resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub words_played: u32,
    pub longest_word: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            words_played: 0,
            longest_word: String::new(),
        }
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Deducts `points`, clamping the score at zero.
    pub fn deduct(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }

    /// Counts an accepted word; `longest_word` only changes for a strictly longer word.
    pub fn record_word(&mut self, word: &str) {
        self.words_played += 1;
        if word.len() > self.longest_word.len() {
            self.longest_word = word.to_string();
        }
    }
}
