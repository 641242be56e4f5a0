use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// A distraction the user batted away during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distraction {
    pub noted_at: DateTime<Utc>,
    pub text: String,
}

/// A free-text note captured without leaving the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostIt {
    pub noted_at: DateTime<Utc>,
    pub text: String,
}

// ---------------------------------------------------------------------------
// FocusSession
// ---------------------------------------------------------------------------

/// One timed work interval on the objective. At most one session runs at a
/// time; ending it finalizes the record and appends it to the immutable
/// history list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSession {
    pub id: Uuid,
    pub objective_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub planned_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_minutes: Option<u32>,
    #[serde(default)]
    pub distractions: Vec<Distraction>,
    #[serde(default)]
    pub post_its: Vec<PostIt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
}

impl FocusSession {
    pub fn new(objective_id: Uuid, planned_minutes: u32, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            objective_id,
            started_at: now,
            planned_minutes,
            ended_at: None,
            actual_minutes: None,
            distractions: Vec::new(),
            post_its: Vec::new(),
            reflection: None,
            next_action: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.ended_at.is_none()
    }

    pub fn add_distraction(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.distractions.push(Distraction {
            noted_at: now,
            text: text.into(),
        });
    }

    pub fn add_post_it(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.post_its.push(PostIt {
            noted_at: now,
            text: text.into(),
        });
    }

    /// Finalize the session. Actual minutes are wall-clock, floored at 0 in
    /// case of a skewed clock.
    pub fn end(
        &mut self,
        reflection: Option<String>,
        next_action: Option<String>,
        now: DateTime<Utc>,
    ) {
        self.ended_at = Some(now);
        self.actual_minutes = Some((now - self.started_at).num_minutes().max(0) as u32);
        self.reflection = reflection;
        self.next_action = next_action;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
