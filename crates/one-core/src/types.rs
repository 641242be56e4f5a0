use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ObjectiveStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveStatus {
    Active,
    Completed,
    Failed,
}

impl ObjectiveStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectiveStatus::Active => "active",
            ObjectiveStatus::Completed => "completed",
            ObjectiveStatus::Failed => "failed",
        }
    }

    /// Completed and failed are absorbing: the only way out is `reset`.
    pub fn is_terminal(self) -> bool {
        matches!(self, ObjectiveStatus::Completed | ObjectiveStatus::Failed)
    }
}

impl fmt::Display for ObjectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContractState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractState {
    Stable,
    Tension,
    Broken,
    Fulfilled,
}

impl ContractState {
    pub fn as_str(self) -> &'static str {
        match self {
            ContractState::Stable => "stable",
            ContractState::Tension => "tension",
            ContractState::Broken => "broken",
            ContractState::Fulfilled => "fulfilled",
        }
    }
}

impl fmt::Display for ContractState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CascadeField
// ---------------------------------------------------------------------------

/// One level of the goal cascade, from long-term vision down to the very
/// next physical action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadeField {
    Someday,
    Month,
    Week,
    Today,
    RightNow,
}

impl CascadeField {
    pub fn all() -> &'static [CascadeField] {
        &[
            CascadeField::Someday,
            CascadeField::Month,
            CascadeField::Week,
            CascadeField::Today,
            CascadeField::RightNow,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CascadeField::Someday => "someday",
            CascadeField::Month => "month",
            CascadeField::Week => "week",
            CascadeField::Today => "today",
            CascadeField::RightNow => "now",
        }
    }
}

impl fmt::Display for CascadeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CascadeField {
    type Err = crate::error::OneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "someday" => Ok(CascadeField::Someday),
            "month" => Ok(CascadeField::Month),
            "week" => Ok(CascadeField::Week),
            "today" => Ok(CascadeField::Today),
            "now" | "right-now" | "right_now" => Ok(CascadeField::RightNow),
            _ => Err(crate::error::OneError::InvalidCascadeField(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
