//! Progression rules for the habit tracker: levels, experience, streaks and stat allocation.
//!
//! Everything in this crate is synchronous and free of I/O. Persistence goes through the
//! [`ProgressStore`] trait, implemented by the server module.

pub mod allocation;
pub mod character;
pub mod constants;
pub mod error;
pub mod habit;
pub mod level;
pub mod orchestrator;
pub mod progression;
pub mod store;
pub mod streak;
pub mod summary;

pub use allocation::{Allocation, StatAllocator, StatHistoryEntry};
pub use character::{
    Attribute, Attributes, CharacterSheet, DerivedResource, StatName, display_label,
};
pub use error::{HabitError, OrchestrationError, ProgressionError};
pub use habit::{CompletionRecord, Difficulty, Habit, HabitId, HabitState, NewHabit};
pub use level::LevelTable;
pub use orchestrator::{
    AppliedUpdate, CharacterUpdate, CompletionOrchestrator, CompletionPlan, CompletionReceipt,
    plan_completion,
};
pub use progression::{ExperienceAward, ProgressionEngine};
pub use store::{MemoryStore, MemoryStoreError, ProgressStore};
pub use streak::{StreakState, StreakTracker, calendar_day};
pub use summary::ProgressSummary;
