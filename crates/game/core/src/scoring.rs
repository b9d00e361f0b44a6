//! Points awarded for an accepted word.
//!
//! A word earns 1 base point, a length bonus and a speed bonus. The speed
//! bonus can be half a point, and the total is floored only once at the end,
//! so the arithmetic is done exactly in half-points.

/// Words at least this long earn the large length bonus.
pub const LONG_WORD_LENGTH: usize = 7;
/// Words at least this long earn the small length bonus.
pub const MEDIUM_WORD_LENGTH: usize = 6;
/// Answering with at least this many seconds left earns the full speed bonus.
pub const FAST_ANSWER_TIME_LEFT: u32 = 25;
/// Answering with at least this many seconds left earns the half speed bonus.
pub const QUICK_ANSWER_TIME_LEFT: u32 = 20;

const BASE_HALF_POINTS: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthBonus {
    None,
    /// +1
    Medium,
    /// +2
    Long,
}

impl LengthBonus {
    pub fn for_length(length: usize) -> Self {
        if length >= LONG_WORD_LENGTH {
            Self::Long
        } else if length >= MEDIUM_WORD_LENGTH {
            Self::Medium
        } else {
            Self::None
        }
    }

    pub const fn half_points(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Medium => 2,
            Self::Long => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedBonus {
    None,
    /// +0.5
    Half,
    /// +1
    Full,
}

impl SpeedBonus {
    pub fn for_time_left(time_left: u32) -> Self {
        if time_left >= FAST_ANSWER_TIME_LEFT {
            Self::Full
        } else if time_left >= QUICK_ANSWER_TIME_LEFT {
            Self::Half
        } else {
            Self::None
        }
    }

    pub const fn half_points(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Half => 1,
            Self::Full => 2,
        }
    }
}

/// Bonuses applied to one accepted word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub length: LengthBonus,
    pub speed: SpeedBonus,
}

impl ScoreBreakdown {
    pub fn new(word_length: usize, time_left: u32) -> Self {
        Self {
            length: LengthBonus::for_length(word_length),
            speed: SpeedBonus::for_time_left(time_left),
        }
    }

    /// Unfloored total in half-points.
    pub fn half_points(&self) -> u32 {
        BASE_HALF_POINTS + self.length.half_points() + self.speed.half_points()
    }

    /// `floor(base + length bonus + speed bonus)`.
    pub fn points(&self) -> u32 {
        self.half_points() / 2
    }

    /// Describes the bonuses, e.g. `" +2 length bonus! +1 speed bonus!"`.
    /// Empty when no bonus applies.
    pub fn bonus_message(&self) -> String {
        let mut message = String::new();
        match self.length {
            LengthBonus::Long => message.push_str(" +2 length bonus!"),
            LengthBonus::Medium => message.push_str(" +1 length bonus!"),
            LengthBonus::None => {}
        }
        match self.speed {
            SpeedBonus::Full => message.push_str(" +1 speed bonus!"),
            SpeedBonus::Half => message.push_str(" +0.5 speed bonus!"),
            SpeedBonus::None => {}
        }
        message
    }
}

/// Points for `word` submitted with `time_left` seconds on the clock.
pub fn points(word: &str, time_left: u32) -> u32 {
    ScoreBreakdown::new(word.len(), time_left).points()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn long_fast_word_scores_four() {
        assert_eq!(points("example", 30), 4);
        assert_eq!(points("elephant", 30), 4);
    }

    #[test]
    fn half_speed_bonus_is_truncated() {
        assert_eq!(points("test", 22), 1);
        assert_eq!(points("eagles", 20), 2);
    }

    #[test]
    fn threshold_edges() {
        assert_eq!(points("test", 25), 2);
        assert_eq!(points("test", 24), 1);
        assert_eq!(points("test", 19), 1);
        assert_eq!(points("abcdef", 0), 2);
        assert_eq!(points("abcdefg", 0), 3);
    }

    #[test]
    fn bonus_message_lists_applied_bonuses() {
        assert_eq!(
            ScoreBreakdown::new(8, 30).bonus_message(),
            " +2 length bonus! +1 speed bonus!"
        );
        assert_eq!(ScoreBreakdown::new(6, 21).bonus_message(), " +1 length bonus! +0.5 speed bonus!");
        assert_eq!(ScoreBreakdown::new(4, 5).bonus_message(), "");
    }

    proptest! {
        #[test]
        fn points_stay_within_bounds(len in 4usize..32, time_left in 0u32..=30) {
            let score = ScoreBreakdown::new(len, time_left).points();
            prop_assert!((1..=4).contains(&score));
        }

        #[test]
        fn points_never_drop_with_more_time(len in 4usize..32, time_left in 0u32..30) {
            let slower = ScoreBreakdown::new(len, time_left).points();
            let faster = ScoreBreakdown::new(len, time_left + 1).points();
            prop_assert!(faster >= slower);
        }
    }
}
