use crate::types::{CascadeField, ObjectiveStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DAY_MS: i64 = 86_400_000;

// ---------------------------------------------------------------------------
// Cascade
// ---------------------------------------------------------------------------

/// The goal cascade: one statement per horizon, narrowing from a someday
/// vision down to the action the user takes right now.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cascade {
    pub someday_goal: String,
    pub month_goal: String,
    pub week_goal: String,
    pub today_goal: String,
    pub right_now_action: String,
}

impl Cascade {
    pub fn get(&self, field: CascadeField) -> &str {
        match field {
            CascadeField::Someday => &self.someday_goal,
            CascadeField::Month => &self.month_goal,
            CascadeField::Week => &self.week_goal,
            CascadeField::Today => &self.today_goal,
            CascadeField::RightNow => &self.right_now_action,
        }
    }

    pub fn set(&mut self, field: CascadeField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CascadeField::Someday => self.someday_goal = value,
            CascadeField::Month => self.month_goal = value,
            CascadeField::Week => self.week_goal = value,
            CascadeField::Today => self.today_goal = value,
            CascadeField::RightNow => self.right_now_action = value,
        }
    }
}

// ---------------------------------------------------------------------------
// Objective
// ---------------------------------------------------------------------------

/// The single goal the user has committed to. At most one exists, and only
/// one may ever be active (the lock); terminal states are absorbing until
/// an explicit reset clears the slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    pub id: Uuid,
    pub title: String,
    pub cascade: Cascade,
    pub deadline: DateTime<Utc>,
    pub why: String,
    pub status: ObjectiveStatus,
    /// 0..=100. Session counting caps the derived figure at 99; only an
    /// explicit `complete` sets 100.
    pub progress: u8,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<DateTime<Utc>>,
}

impl Objective {
    pub fn new(
        title: impl Into<String>,
        cascade: Cascade,
        deadline: DateTime<Utc>,
        why: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            cascade,
            deadline,
            why: why.into(),
            status: ObjectiveStatus::Active,
            progress: 0,
            created_at: now,
            completed_at: None,
            failed_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ObjectiveStatus::Active
    }

    // ---------------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------------

    /// Clamp to 0..=100. No-op unless active. Returns whether anything changed.
    pub fn set_progress(&mut self, value: i64) -> bool {
        if !self.is_active() {
            return false;
        }
        self.progress = value.clamp(0, 100) as u8;
        true
    }

    /// Terminal transition to completed. Idempotent no-op from any other
    /// state than active.
    pub fn complete(&mut self, now: DateTime<Utc>) -> bool {
        if !self.is_active() {
            return false;
        }
        self.status = ObjectiveStatus::Completed;
        self.progress = 100;
        self.completed_at = Some(now);
        true
    }

    /// Terminal transition to failed. Idempotent no-op unless active.
    pub fn fail(&mut self, now: DateTime<Utc>) -> bool {
        if !self.is_active() {
            return false;
        }
        self.status = ObjectiveStatus::Failed;
        self.failed_at = Some(now);
        true
    }

    /// The cascade text is editable at any status; only starting a *new*
    /// objective is locked.
    pub fn edit_cascade(&mut self, field: CascadeField, value: impl Into<String>) {
        self.cascade.set(field, value);
    }

    // ---------------------------------------------------------------------------
    // Time helpers
    // ---------------------------------------------------------------------------

    /// Whole days from `now` to the deadline, rounded up and floored at 1.
    /// A past deadline still counts as one day so chain totals never hit
    /// zero.
    pub fn days_until_deadline(&self, now: DateTime<Utc>) -> i64 {
        days_between(now, self.deadline)
    }

    /// Whole days the objective was planned to span, floored at 1.
    pub fn total_planned_days(&self) -> i64 {
        days_between(self.created_at, self.deadline)
    }
}

/// ceil((to − from) / 1 day), floored at 1.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let delta_ms = (to - from).num_milliseconds();
    if delta_ms <= 0 {
        return 1;
    }
    (delta_ms + DAY_MS - 1) / DAY_MS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn objective(deadline_days: i64) -> Objective {
        let now = Utc::now();
        Objective::new(
            "Ship the book",
            Cascade::default(),
            now + Duration::days(deadline_days),
            "because it matters",
            now,
        )
    }

    #[test]
    fn new_objective_is_active_at_zero() {
        let o = objective(10);
        assert_eq!(o.status, ObjectiveStatus::Active);
        assert_eq!(o.progress, 0);
        assert!(o.completed_at.is_none());
    }

    #[test]
    fn progress_clamps() {
        let mut o = objective(10);
        assert!(o.set_progress(250));
        assert_eq!(o.progress, 100);
        assert!(o.set_progress(-5));
        assert_eq!(o.progress, 0);
        assert!(o.set_progress(42));
        assert_eq!(o.progress, 42);
    }

    #[test]
    fn progress_ignored_when_terminal() {
        let mut o = objective(10);
        o.complete(Utc::now());
        assert!(!o.set_progress(10));
        assert_eq!(o.progress, 100);
    }

    #[test]
    fn complete_is_idempotent() {
        let mut o = objective(10);
        let t1 = Utc::now();
        assert!(o.complete(t1));
        let snapshot = o.clone();

        // Second call must not change anything
        assert!(!o.complete(Utc::now()));
        assert_eq!(o.completed_at, snapshot.completed_at);
        assert_eq!(o.progress, 100);
        assert_eq!(o.status, ObjectiveStatus::Completed);
    }

    #[test]
    fn fail_only_from_active() {
        let mut o = objective(10);
        o.complete(Utc::now());
        assert!(!o.fail(Utc::now()));
        assert_eq!(o.status, ObjectiveStatus::Completed);
        assert!(o.failed_at.is_none());
    }

    #[test]
    fn cascade_editable_after_completion() {
        let mut o = objective(10);
        o.complete(Utc::now());
        o.edit_cascade(CascadeField::Week, "write the retrospective");
        assert_eq!(o.cascade.week_goal, "write the retrospective");
    }

    #[test]
    fn days_until_deadline_rounds_up() {
        let now = Utc::now();
        let mut o = objective(0);
        o.deadline = now + Duration::hours(25);
        assert_eq!(o.days_until_deadline(now), 2);
        o.deadline = now + Duration::hours(24);
        assert_eq!(o.days_until_deadline(now), 1);
    }

    #[test]
    fn past_deadline_floors_to_one_day() {
        let now = Utc::now();
        let mut o = objective(0);
        o.deadline = now - Duration::days(3);
        assert_eq!(o.days_until_deadline(now), 1);
        assert_eq!(days_between(now, now), 1);
    }
}
