/// Game rules and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Seconds on the clock at the start of every turn.
    pub turn_seconds: u32,
    /// Shortest word accepted, in letters.
    pub min_word_length: usize,
    /// A player reaching this score ends the game.
    pub winning_score: u32,
    /// A score gap of at least this much ends the game.
    pub winning_margin: u32,
    pub skip_penalty: u32,
    pub timeout_penalty: u32,
    /// Deducted when the dictionary does not know the submitted word.
    pub invalid_word_penalty: u32,
    pub player_names: [String; 2],
}

impl GameConfig {
    pub const DEFAULT_TURN_SECONDS: u32 = 30;
    pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;
    pub const DEFAULT_WINNING_SCORE: u32 = 20;
    pub const DEFAULT_WINNING_MARGIN: u32 = 10;
    pub const DEFAULT_SKIP_PENALTY: u32 = 1;
    pub const DEFAULT_TIMEOUT_PENALTY: u32 = 2;
    pub const DEFAULT_INVALID_WORD_PENALTY: u32 = 1;

    pub fn new() -> Self {
        Self {
            turn_seconds: Self::DEFAULT_TURN_SECONDS,
            min_word_length: Self::DEFAULT_MIN_WORD_LENGTH,
            winning_score: Self::DEFAULT_WINNING_SCORE,
            winning_margin: Self::DEFAULT_WINNING_MARGIN,
            skip_penalty: Self::DEFAULT_SKIP_PENALTY,
            timeout_penalty: Self::DEFAULT_TIMEOUT_PENALTY,
            invalid_word_penalty: Self::DEFAULT_INVALID_WORD_PENALTY,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }

    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
