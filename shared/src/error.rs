use crate::HabitId;

/// Rule violations raised by the progression engine.
///
/// Both variants are input errors: the caller is expected to re-prompt rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    /// Zero points, or more points than the character has unspent.
    #[error("cannot allocate {requested} point(s) with {available} available")]
    InvalidAllocation { requested: u32, available: u32 },

    /// The named stat is unknown or is not allocatable (`hp`, `mp`).
    #[error("`{0}` is not an allocatable stat")]
    InvalidStat(String),
}

/// Validation failures for habit definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HabitError {
    #[error("habit title must not be empty")]
    EmptyTitle,

    #[error("unknown difficulty `{0}`")]
    UnknownDifficulty(String),
}

/// Failures while coordinating a completion or allocation against a store.
///
/// `E` is the storage collaborator's own error. It is carried through untouched; retry policy
/// belongs to whoever called the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum OrchestrationError<E> {
    #[error(transparent)]
    Rules(#[from] ProgressionError),

    #[error("no character exists for this user")]
    CharacterNotFound,

    #[error("habit {0} not found")]
    HabitNotFound(HabitId),

    #[error("storage failure: {0}")]
    Store(#[source] E),
}
