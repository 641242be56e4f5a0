use thiserror::Error;

#[derive(Debug, Error)]
pub enum OneError {
    #[error("not initialized: run 'one init'")]
    NotInitialized,

    #[error("an objective is already active: complete, fail, or reset it first")]
    ObjectiveLocked,

    #[error("no objective defined: run 'one define'")]
    NoObjective,

    #[error("objective is not active (status: {0})")]
    NotActive(String),

    #[error("a focus session is already running")]
    SessionInProgress,

    #[error("no focus session is running")]
    NoActiveSession,

    #[error("no habit challenge started: run 'one habit start'")]
    NoHabit,

    #[error("invalid cascade field '{0}': expected someday, month, week, today, or now")]
    InvalidCascadeField(String),

    #[error(
        "invalid thief '{0}': expected inability_to_say_no, fear_of_chaos, \
         poor_health_habits, or unsupportive_environment"
    )]
    InvalidThief(String),

    #[error("invalid deadline '{0}': expected RFC 3339 or YYYY-MM-DD")]
    InvalidDeadline(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, OneError>;
