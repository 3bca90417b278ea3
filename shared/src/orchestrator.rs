//! Use-case coordination: completing a habit and allocating stat points.
//!
//! Planning is pure. [`plan_completion`] turns already-fetched inputs into three independent
//! update sets (a completion insert, the habit's new streak, a character update). The
//! [`CompletionOrchestrator`] then reads from and writes to a [`ProgressStore`] in a fixed order:
//!
//! 1. read the character, the habit and the habit's last completion
//! 2. compute the new streak and the experience award
//! 3. apply the character update, then the habit streak, then the completion insert
//!
//! Character updates are additive: they carry deltas that the store applies to the row it holds,
//! so two completions landing back to back cannot overwrite each other's experience. The caller is
//! expected to run one orchestrator call inside one transaction.

use chrono::{DateTime, Utc};

use crate::constants::MANUAL_ALLOCATION_REASON;
use crate::{
    Allocation, Attribute, CharacterSheet, CompletionRecord, ExperienceAward, Habit, HabitId,
    OrchestrationError, ProgressStore, ProgressionEngine, ProgressionError, StatAllocator,
    StatHistoryEntry, StatName, StreakState, StreakTracker, streak::calendar_day,
};

/// A change to a character, expressed relative to whatever row it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterUpdate {
    /// Adds experience. Level and stat points are recomputed from the row being written.
    GainExperience { amount: u32 },

    /// Spends stat points. Re-validated against the row being written.
    Allocate { attribute: Attribute, points: u32 },
}

impl CharacterUpdate {
    pub fn apply(&self, stored: &CharacterSheet) -> Result<AppliedUpdate, ProgressionError> {
        match *self {
            CharacterUpdate::GainExperience { amount } => {
                let award = ProgressionEngine::award_experience(stored, amount);
                let mut sheet = *stored;
                award.apply(&mut sheet);
                Ok(AppliedUpdate::Experience { sheet, award })
            }
            CharacterUpdate::Allocate { attribute, points } => {
                StatAllocator::allocate(stored, attribute, points).map(AppliedUpdate::Allocation)
            }
        }
    }
}

/// What a [`CharacterUpdate`] turned into once applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedUpdate {
    Experience {
        sheet: CharacterSheet,
        award: ExperienceAward,
    },
    Allocation(Allocation),
}

impl AppliedUpdate {
    /// The character row as written.
    pub fn sheet(&self) -> &CharacterSheet {
        match self {
            AppliedUpdate::Experience { sheet, .. } => sheet,
            AppliedUpdate::Allocation(allocation) => &allocation.sheet,
        }
    }
}

/// The update sets for one habit completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionPlan {
    pub completion: CompletionRecord,
    pub streak: StreakState,
    pub character: CharacterUpdate,
    /// The award as computed against the sheet the plan was made from.
    pub award: ExperienceAward,
}

/// Works out everything a completion of `habit` at `now` changes.
///
/// `last_completion` is the habit's most recent completion, if any. Days are compared in UTC.
pub fn plan_completion(
    habit: &Habit,
    sheet: &CharacterSheet,
    last_completion: Option<&CompletionRecord>,
    now: DateTime<Utc>,
) -> CompletionPlan {
    let xp = habit.difficulty.xp();
    let streak = StreakTracker::next_streak(
        habit.streak_state(),
        last_completion.map(|c| calendar_day(c.completed_at)),
        calendar_day(now),
    );
    let award = ProgressionEngine::award_experience(sheet, xp);

    log::debug!(
        "Planned completion of habit {}: +{xp} xp, streak {} -> {}",
        habit.id,
        habit.streak,
        streak.streak
    );

    CompletionPlan {
        completion: CompletionRecord {
            habit_id: habit.id,
            completed_at: now,
            xp_earned: xp,
        },
        streak,
        character: CharacterUpdate::GainExperience { amount: xp },
        award,
    }
}

/// Outcome of a completion, as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionReceipt {
    pub habit_id: HabitId,
    pub xp_earned: u32,
    pub streak: StreakState,
    pub award: ExperienceAward,
    pub sheet: CharacterSheet,
}

/// Runs completions and allocations against a [`ProgressStore`].
#[derive(Debug)]
pub struct CompletionOrchestrator<S> {
    store: S,
}

impl<S: ProgressStore> CompletionOrchestrator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Completes `habit_id` for `user` at `now`.
    ///
    /// All reads happen before the first write, so a missing character or habit leaves the store
    /// untouched.
    pub fn complete_habit(
        &mut self,
        user: &S::UserId,
        habit_id: HabitId,
        now: DateTime<Utc>,
    ) -> Result<CompletionReceipt, OrchestrationError<S::Error>> {
        let sheet = self
            .store
            .character(user)
            .map_err(OrchestrationError::Store)?
            .ok_or(OrchestrationError::CharacterNotFound)?;
        let habit = self
            .store
            .habit(user, habit_id)
            .map_err(OrchestrationError::Store)?
            .ok_or(OrchestrationError::HabitNotFound(habit_id))?;
        let last = self
            .store
            .last_completion(user, habit_id)
            .map_err(OrchestrationError::Store)?;

        debug_assert!(habit.state().is_completable());
        let plan = plan_completion(&habit, &sheet, last.as_ref(), now);

        let applied = self.store.update_character(user, plan.character)?;
        self.store
            .update_habit_streak(user, habit_id, plan.streak)
            .map_err(OrchestrationError::Store)?;
        self.store
            .insert_completion(user, plan.completion)
            .map_err(OrchestrationError::Store)?;

        // The stored row is authoritative for the award, the plan's copy may be stale.
        let award = match applied {
            AppliedUpdate::Experience { award, .. } => award,
            AppliedUpdate::Allocation(_) => plan.award,
        };
        if award.leveled_up {
            log::info!(
                "Level up to {} (+{} stat points)",
                award.new_level,
                award.stat_points_awarded
            );
        }

        Ok(CompletionReceipt {
            habit_id,
            xp_earned: plan.completion.xp_earned,
            streak: plan.streak,
            award,
            sheet: *applied.sheet(),
        })
    }

    /// Spends `points` on `stat` for `user` and records it in the stat history.
    ///
    /// `hp`/`mp` are rejected before anything is read.
    pub fn allocate_points(
        &mut self,
        user: &S::UserId,
        stat: StatName,
        points: u32,
        now: DateTime<Utc>,
    ) -> Result<Allocation, OrchestrationError<S::Error>> {
        let attribute = Attribute::try_from(stat)?;
        let sheet = self
            .store
            .character(user)
            .map_err(OrchestrationError::Store)?
            .ok_or(OrchestrationError::CharacterNotFound)?;

        // Fail fast on the snapshot; the store re-checks against the row it writes.
        StatAllocator::allocate(&sheet, attribute, points)?;

        let applied = self
            .store
            .update_character(user, CharacterUpdate::Allocate { attribute, points })?;

        // The history describes the row that was actually written, not the snapshot.
        let allocation = match applied {
            AppliedUpdate::Allocation(allocation) => allocation,
            AppliedUpdate::Experience { sheet: written, .. } => {
                log::error!("Store answered an allocation with an experience gain");
                Allocation {
                    sheet: written,
                    history: StatHistoryEntry {
                        attribute,
                        old_value: sheet.attributes.get(attribute),
                        new_value: written.attributes.get(attribute),
                        reason: MANUAL_ALLOCATION_REASON,
                    },
                }
            }
        };
        self.store
            .insert_stat_history(user, allocation.history, now)
            .map_err(OrchestrationError::Store)?;

        log::info!(
            "Allocated {points} point(s) to {attribute}: {} -> {}",
            allocation.history.old_value,
            allocation.history.new_value
        );
        Ok(allocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, MemoryStore, MemoryStoreError, NewHabit};
    use chrono::TimeZone;

    const USER: &str = "hunter-1";

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }

    fn habit(streak: u32, best_streak: u32, difficulty: Difficulty) -> Habit {
        Habit {
            id: 1,
            title: "Run".into(),
            description: String::new(),
            difficulty,
            streak,
            best_streak,
        }
    }

    fn seeded(
        sheet: CharacterSheet,
        difficulty: Difficulty,
    ) -> (CompletionOrchestrator<MemoryStore>, HabitId) {
        let mut store = MemoryStore::new();
        store.put_character(USER, sheet);
        let habit = store.create_habit(USER, NewHabit::new("Run", "", Some(difficulty)).unwrap());
        (CompletionOrchestrator::new(store), habit.id)
    }

    #[test]
    fn plan_produces_three_update_sets() {
        let sheet = CharacterSheet {
            experience: 90,
            ..CharacterSheet::new_hunter()
        };
        let last = CompletionRecord {
            habit_id: 1,
            completed_at: at(9, 22),
            xp_earned: 25,
        };
        let plan = plan_completion(
            &habit(5, 7, Difficulty::Medium),
            &sheet,
            Some(&last),
            at(10, 8),
        );

        assert_eq!(
            plan.completion,
            CompletionRecord {
                habit_id: 1,
                completed_at: at(10, 8),
                xp_earned: 25,
            }
        );
        assert_eq!(
            plan.streak,
            StreakState {
                streak: 6,
                best_streak: 7
            }
        );
        assert_eq!(plan.character, CharacterUpdate::GainExperience { amount: 25 });
        assert_eq!(plan.award.new_level, 2);
        assert_eq!(plan.award.stat_points_awarded, 3);
    }

    #[test]
    fn plan_same_day_keeps_streak_but_still_awards_xp() {
        let last = CompletionRecord {
            habit_id: 1,
            completed_at: at(10, 1),
            xp_earned: 50,
        };
        let plan = plan_completion(
            &habit(5, 7, Difficulty::Hard),
            &CharacterSheet::new_hunter(),
            Some(&last),
            at(10, 23),
        );
        assert_eq!(plan.streak.streak, 5);
        assert_eq!(plan.award.new_experience, 50);
    }

    #[test]
    fn completion_round_trip_applies_exactly_once() {
        let (mut orchestrator, habit_id) = seeded(CharacterSheet::new_hunter(), Difficulty::Hard);

        let receipt = orchestrator.complete_habit(USER, habit_id, at(10, 8)).unwrap();
        assert_eq!(receipt.xp_earned, 50);

        let store = orchestrator.store();
        let sheet = store.character(USER).unwrap().unwrap();
        assert_eq!(sheet.experience, 50);
        assert_eq!(sheet, receipt.sheet);
        let habits = store.habits(USER);
        assert_eq!((habits[0].streak, habits[0].best_streak), (1, 1));
        assert_eq!(store.completions(USER).len(), 1);
    }

    #[test]
    fn level_up_through_completions_grants_points() {
        let sheet = CharacterSheet {
            experience: 90,
            ..CharacterSheet::new_hunter()
        };
        let (mut orchestrator, habit_id) = seeded(sheet, Difficulty::Easy);

        let receipt = orchestrator.complete_habit(USER, habit_id, at(10, 8)).unwrap();
        assert!(receipt.award.leveled_up);
        assert_eq!(receipt.sheet.level, 2);
        assert_eq!(receipt.sheet.stat_points, 3);
    }

    #[test]
    fn consecutive_days_and_repeats_drive_the_streak() {
        let (mut orchestrator, habit_id) = seeded(CharacterSheet::new_hunter(), Difficulty::Medium);

        orchestrator.complete_habit(USER, habit_id, at(10, 8)).unwrap();
        orchestrator.complete_habit(USER, habit_id, at(10, 20)).unwrap();
        let receipt = orchestrator.complete_habit(USER, habit_id, at(11, 7)).unwrap();

        assert_eq!(
            receipt.streak,
            StreakState {
                streak: 2,
                best_streak: 2
            }
        );
        // Same-day repeats still award experience.
        assert_eq!(receipt.sheet.experience, 75);
        assert_eq!(orchestrator.store().completions(USER).len(), 3);
    }

    #[test]
    fn back_to_back_completions_do_not_lose_experience() {
        let mut store = MemoryStore::new();
        store.put_character(USER, CharacterSheet::new_hunter());
        let hard = Some(Difficulty::Hard);
        let first = store.create_habit(USER, NewHabit::new("Run", "", hard).unwrap());
        let second = store.create_habit(USER, NewHabit::new("Read", "", hard).unwrap());
        let mut orchestrator = CompletionOrchestrator::new(store);

        orchestrator.complete_habit(USER, first.id, at(10, 8)).unwrap();
        let receipt = orchestrator.complete_habit(USER, second.id, at(10, 8)).unwrap();

        assert_eq!(receipt.sheet.experience, 100);
        assert_eq!(receipt.sheet.level, 2);
        assert_eq!(receipt.sheet.stat_points, 3);
    }

    #[test]
    fn stale_plan_is_corrected_by_the_stored_row() {
        let mut stored = CharacterSheet {
            experience: 90,
            ..CharacterSheet::new_hunter()
        };
        // A plan made from an older snapshot that had not yet reached 90 xp.
        let stale = CharacterSheet::new_hunter();
        let plan = plan_completion(&habit(0, 0, Difficulty::Easy), &stale, None, at(10, 8));
        assert!(!plan.award.leveled_up);

        let applied = plan.character.apply(&stored).unwrap();
        stored = *applied.sheet();
        assert_eq!((stored.experience, stored.level, stored.stat_points), (100, 2, 3));
    }

    #[test]
    fn completing_someone_elses_habit_is_not_found() {
        let (mut orchestrator, habit_id) = seeded(CharacterSheet::new_hunter(), Difficulty::Easy);
        let mut store = orchestrator.into_store();
        store.put_character("intruder", CharacterSheet::new_hunter());
        orchestrator = CompletionOrchestrator::new(store);

        let err = orchestrator
            .complete_habit("intruder", habit_id, at(10, 8))
            .unwrap_err();
        assert!(matches!(err, OrchestrationError::HabitNotFound(id) if id == habit_id));
        assert!(orchestrator.store().completions("intruder").is_empty());
    }

    #[test]
    fn missing_character_writes_nothing() {
        let mut store = MemoryStore::new();
        let habit = store.create_habit(USER, NewHabit::new("Run", "", None).unwrap());
        let mut orchestrator = CompletionOrchestrator::new(store);

        let err = orchestrator
            .complete_habit(USER, habit.id, at(10, 8))
            .unwrap_err();
        assert!(matches!(err, OrchestrationError::CharacterNotFound));
        assert!(orchestrator.store().completions(USER).is_empty());
        assert_eq!(orchestrator.store().habits(USER)[0].streak, 0);
    }

    #[test]
    fn allocation_updates_sheet_and_history() {
        let sheet = CharacterSheet {
            stat_points: 3,
            ..CharacterSheet::new_hunter()
        };
        let (mut orchestrator, _) = seeded(sheet, Difficulty::Easy);

        let allocation = orchestrator
            .allocate_points(USER, StatName::Attribute(Attribute::Vitality), 3, at(10, 8))
            .unwrap();
        assert_eq!(allocation.sheet.attributes.vitality, 13);

        let store = orchestrator.store();
        let stored = store.character(USER).unwrap().unwrap();
        assert_eq!((stored.max_hp, stored.hp, stored.stat_points), (130, 130, 0));
        assert_eq!(store.history(USER), vec![allocation.history]);
    }

    #[test]
    fn rejected_allocation_leaves_points_untouched() {
        let sheet = CharacterSheet {
            stat_points: 2,
            ..CharacterSheet::new_hunter()
        };
        let (mut orchestrator, _) = seeded(sheet, Difficulty::Easy);

        let err = orchestrator
            .allocate_points(USER, StatName::Attribute(Attribute::Luck), 3, at(10, 8))
            .unwrap_err();
        assert!(matches!(
            err,
            OrchestrationError::Rules(ProgressionError::InvalidAllocation { .. })
        ));

        let err = orchestrator
            .allocate_points(USER, StatName::Hp, 1, at(10, 8))
            .unwrap_err();
        assert!(matches!(
            err,
            OrchestrationError::Rules(ProgressionError::InvalidStat(_))
        ));

        let store = orchestrator.store();
        assert_eq!(store.character(USER).unwrap().unwrap().stat_points, 2);
        assert!(store.history(USER).is_empty());
    }

    #[test]
    fn unknown_habit_is_rejected_before_writing() {
        let mut store = MemoryStore::new();
        store.put_character(USER, CharacterSheet::new_hunter());
        let err = store
            .update_habit_streak(USER, 99, StreakState::default())
            .unwrap_err();
        assert_eq!(err, MemoryStoreError::UnknownHabit(99, USER.to_string()));

        let mut orchestrator = CompletionOrchestrator::new(store);
        let err = orchestrator.complete_habit(USER, 99, at(10, 8)).unwrap_err();
        assert!(matches!(err, OrchestrationError::HabitNotFound(99)));
        assert_eq!(orchestrator.store().character(USER).unwrap().unwrap().experience, 0);
    }

    #[test]
    fn seeded_streak_advances_through_the_store() {
        let mut store = MemoryStore::new();
        store.put_character(USER, CharacterSheet::new_hunter());
        store.put_habit(USER, habit(5, 7, Difficulty::Medium));
        store.push_completion(
            USER,
            CompletionRecord {
                habit_id: 1,
                completed_at: at(9, 21),
                xp_earned: 25,
            },
        );
        let mut orchestrator = CompletionOrchestrator::new(store);

        let receipt = orchestrator.complete_habit(USER, 1, at(10, 7)).unwrap();
        assert_eq!(
            receipt.streak,
            StreakState {
                streak: 6,
                best_streak: 7
            }
        );

        let store = orchestrator.store();
        let stored = &store.habits(USER)[0];
        assert_eq!((stored.streak, stored.best_streak), (6, 7));
        assert_eq!(store.completions(USER).len(), 2);
        assert_eq!(store.character(USER).unwrap().unwrap().experience, 25);
    }

    /// Delegates to a [`MemoryStore`] but refuses every character write.
    struct CharacterWritesFail(MemoryStore);

    impl ProgressStore for CharacterWritesFail {
        type UserId = str;
        type Error = MemoryStoreError;

        fn character(&self, user: &str) -> Result<Option<CharacterSheet>, MemoryStoreError> {
            self.0.character(user)
        }

        fn habit(&self, user: &str, habit_id: HabitId) -> Result<Option<Habit>, MemoryStoreError> {
            self.0.habit(user, habit_id)
        }

        fn last_completion(
            &self,
            user: &str,
            habit_id: HabitId,
        ) -> Result<Option<CompletionRecord>, MemoryStoreError> {
            self.0.last_completion(user, habit_id)
        }

        fn insert_completion(
            &mut self,
            user: &str,
            record: CompletionRecord,
        ) -> Result<(), MemoryStoreError> {
            self.0.insert_completion(user, record)
        }

        fn update_habit_streak(
            &mut self,
            user: &str,
            habit_id: HabitId,
            streak: StreakState,
        ) -> Result<(), MemoryStoreError> {
            self.0.update_habit_streak(user, habit_id, streak)
        }

        fn update_character(
            &mut self,
            user: &str,
            _update: CharacterUpdate,
        ) -> Result<AppliedUpdate, OrchestrationError<MemoryStoreError>> {
            Err(OrchestrationError::Store(MemoryStoreError::UnknownCharacter(
                user.to_string(),
            )))
        }

        fn insert_stat_history(
            &mut self,
            user: &str,
            entry: StatHistoryEntry,
            at: DateTime<Utc>,
        ) -> Result<(), MemoryStoreError> {
            self.0.insert_stat_history(user, entry, at)
        }
    }

    #[test]
    fn store_failure_reaches_the_caller_and_stops_the_writes() {
        let sheet = CharacterSheet {
            stat_points: 3,
            ..CharacterSheet::new_hunter()
        };
        let (orchestrator, habit_id) = seeded(sheet, Difficulty::Hard);
        let mut orchestrator = CompletionOrchestrator::new(CharacterWritesFail(
            orchestrator.into_store(),
        ));

        let err = orchestrator
            .complete_habit(USER, habit_id, at(10, 8))
            .unwrap_err();
        assert!(matches!(
            err,
            OrchestrationError::Store(MemoryStoreError::UnknownCharacter(ref user)) if user == USER
        ));

        let err = orchestrator
            .allocate_points(USER, StatName::Attribute(Attribute::Luck), 1, at(10, 8))
            .unwrap_err();
        assert!(matches!(err, OrchestrationError::Store(_)));

        let store = &orchestrator.store().0;
        assert!(store.completions(USER).is_empty());
        assert_eq!(store.habits(USER)[0].streak, 0);
        let stored = store.character(USER).unwrap().unwrap();
        assert_eq!((stored.experience, stored.stat_points), (0, 3));
        assert!(store.history(USER).is_empty());
    }

    #[test]
    fn history_keeps_the_pre_allocation_value_when_the_attribute_saturates() {
        let mut sheet = CharacterSheet {
            stat_points: 3,
            ..CharacterSheet::new_hunter()
        };
        sheet.attributes.luck = u32::MAX - 1;
        let (mut orchestrator, _) = seeded(sheet, Difficulty::Easy);

        let allocation = orchestrator
            .allocate_points(USER, StatName::Attribute(Attribute::Luck), 3, at(10, 8))
            .unwrap();
        assert_eq!(allocation.history.old_value, u32::MAX - 1);
        assert_eq!(allocation.history.new_value, u32::MAX);
        assert_eq!(orchestrator.store().history(USER), vec![allocation.history]);
    }
}
