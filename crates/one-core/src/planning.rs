use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Auxiliary planning artifacts. Each is a plain record keyed to the
// objective, created and edited independently; none participates in the
// lifecycle invariants of the core state machine.

// ---------------------------------------------------------------------------
// FourOneOne
// ---------------------------------------------------------------------------

/// The 4-1-1: annual goals, monthly goals, and this week's priorities on
/// one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FourOneOne {
    pub objective_id: Uuid,
    #[serde(default)]
    pub annual_goals: Vec<String>,
    #[serde(default)]
    pub monthly_goals: Vec<String>,
    #[serde(default)]
    pub weekly_priorities: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// GpsPlan
// ---------------------------------------------------------------------------

/// Goal, Priorities, Strategies: the one goal, up to a handful of
/// priorities that serve it, and the strategies behind each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpsPlan {
    pub objective_id: Uuid,
    pub goal: String,
    #[serde(default)]
    pub priorities: Vec<String>,
    #[serde(default)]
    pub strategies: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// ThievesAssessment
// ---------------------------------------------------------------------------

/// Self-assessment against the four productivity thieves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Thief {
    InabilityToSayNo,
    FearOfChaos,
    PoorHealthHabits,
    UnsupportiveEnvironment,
}

impl Thief {
    pub fn all() -> &'static [Thief] {
        &[
            Thief::InabilityToSayNo,
            Thief::FearOfChaos,
            Thief::PoorHealthHabits,
            Thief::UnsupportiveEnvironment,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Thief::InabilityToSayNo => "inability_to_say_no",
            Thief::FearOfChaos => "fear_of_chaos",
            Thief::PoorHealthHabits => "poor_health_habits",
            Thief::UnsupportiveEnvironment => "unsupportive_environment",
        }
    }
}

impl std::fmt::Display for Thief {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Thief {
    type Err = crate::error::OneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Thief::all()
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| crate::error::OneError::InvalidThief(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThiefScore {
    pub thief: Thief,
    /// 0..=10, clamped on construction.
    pub score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThievesAssessment {
    pub objective_id: Uuid,
    #[serde(default)]
    pub scores: Vec<ThiefScore>,
    pub updated_at: DateTime<Utc>,
}

impl ThievesAssessment {
    pub fn new(objective_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            objective_id,
            scores: Vec::new(),
            updated_at: now,
        }
    }

    /// Record a score (clamped to 0..=10), replacing any prior score for
    /// the same thief.
    pub fn record(&mut self, thief: Thief, score: u8, note: Option<String>, now: DateTime<Utc>) {
        self.scores.retain(|s| s.thief != thief);
        self.scores.push(ThiefScore {
            thief,
            score: score.min(10),
            note,
        });
        self.updated_at = now;
    }
}

// ---------------------------------------------------------------------------
// WeeklyReview
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReview {
    pub objective_id: Uuid,
    pub week_of: DateTime<Utc>,
    #[serde(default)]
    pub wins: Vec<String>,
    #[serde(default)]
    pub lessons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_focus: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
