//! Habits ("quests"), their difficulty, and the records completing them leaves behind.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::HabitError;
use crate::constants::{EASY_XP, HARD_XP, MEDIUM_XP};
use crate::streak::StreakState;

/// Storage key of a habit.
pub type HabitId = u64;

/// How demanding a habit is. Decides the experience a completion is worth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Experience awarded for one completion.
    pub fn xp(self) -> u32 {
        match self {
            Difficulty::Easy => EASY_XP,
            Difficulty::Medium => MEDIUM_XP,
            Difficulty::Hard => HARD_XP,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = HabitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| HabitError::UnknownDifficulty(s.to_string()))
    }
}

/// Lifecycle of a habit.
///
/// There is exactly one state. Completing a habit always succeeds and leaves it `Idle`, so a habit
/// has no cooldown and no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HabitState {
    #[default]
    Idle,
}

impl HabitState {
    pub fn is_completable(self) -> bool {
        match self {
            HabitState::Idle => true,
        }
    }

    /// The state after a completion.
    pub fn complete(self) -> HabitState {
        match self {
            HabitState::Idle => HabitState::Idle,
        }
    }
}

/// A recurring task definition as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    pub id: HabitId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub streak: u32,
    pub best_streak: u32,
}

impl Habit {
    pub fn state(&self) -> HabitState {
        HabitState::Idle
    }

    pub fn streak_state(&self) -> StreakState {
        StreakState {
            streak: self.streak,
            best_streak: self.best_streak,
        }
    }
}

/// A validated habit definition, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
}

impl NewHabit {
    /// Trims the text fields and rejects a blank title. Difficulty defaults to medium.
    pub fn new(
        title: &str,
        description: &str,
        difficulty: Option<Difficulty>,
    ) -> Result<Self, HabitError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(HabitError::EmptyTitle);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
            difficulty: difficulty.unwrap_or_default(),
        })
    }

    /// The stored habit, with a fresh streak.
    pub fn into_habit(self, id: HabitId) -> Habit {
        Habit {
            id,
            title: self.title,
            description: self.description,
            difficulty: self.difficulty,
            streak: 0,
            best_streak: 0,
        }
    }
}

/// Append-only record of one completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionRecord {
    pub habit_id: HabitId,
    pub completed_at: DateTime<Utc>,
    pub xp_earned: u32,
}
