use crate::objective::days_between;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Planned focus sessions per day, clamped to this range.
pub const MIN_SESSIONS_PER_DAY: u32 = 1;
pub const MAX_SESSIONS_PER_DAY: u32 = 5;

pub fn clamp_sessions_per_day(n: u32) -> u32 {
    n.clamp(MIN_SESSIONS_PER_DAY, MAX_SESSIONS_PER_DAY)
}

// ---------------------------------------------------------------------------
// DominoChain
// ---------------------------------------------------------------------------

/// The chain of expected progress units: one domino per planned focus
/// session between creation and the deadline. `completed_dominos` only
/// ever counts up while the objective lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DominoChain {
    pub total_dominos: u32,
    pub completed_dominos: u32,
    pub sessions_per_day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_session_date: Option<DateTime<Utc>>,
}

impl DominoChain {
    pub fn new(deadline: DateTime<Utc>, sessions_per_day: u32, now: DateTime<Utc>) -> Self {
        let sessions_per_day = clamp_sessions_per_day(sessions_per_day);
        Self {
            total_dominos: total_for(deadline, sessions_per_day, now),
            completed_dominos: 0,
            sessions_per_day,
            last_session_date: None,
        }
    }

    /// Knock over one domino. Each finished focus session (or equivalent
    /// completion event) calls this exactly once.
    pub fn advance(&mut self, now: DateTime<Utc>) {
        self.completed_dominos += 1;
        self.last_session_date = Some(now);
    }

    /// Re-derive the total after a pace or deadline change. Days until the
    /// deadline floor at 1, so the total is always at least
    /// `sessions_per_day`.
    pub fn recompute_total(&mut self, deadline: DateTime<Utc>, now: DateTime<Utc>) {
        self.total_dominos = total_for(deadline, self.sessions_per_day, now);
    }

    pub fn set_sessions_per_day(&mut self, n: u32, deadline: DateTime<Utc>, now: DateTime<Utc>) {
        self.sessions_per_day = clamp_sessions_per_day(n);
        self.recompute_total(deadline, now);
    }

    /// round(completed / max(1, total) × 100)
    pub fn progress_percentage(&self) -> u32 {
        let total = self.total_dominos.max(1);
        ((self.completed_dominos as f64 / total as f64) * 100.0).round() as u32
    }

    /// Display progress, capped at 99: the bar never reaches 100 from
    /// session counting alone. Only an explicit objective `complete` shows
    /// 100. Deliberate product gate.
    pub fn capped_progress(&self) -> u32 {
        self.progress_percentage().min(99)
    }

    /// Fraction of the chain knocked over, in 0.0..=1.0 (may exceed 1.0 if
    /// the user outruns the plan).
    pub fn progress_ratio(&self) -> f64 {
        self.completed_dominos as f64 / self.total_dominos.max(1) as f64
    }
}

fn total_for(deadline: DateTime<Utc>, sessions_per_day: u32, now: DateTime<Utc>) -> u32 {
    let days = days_between(now, deadline);
    days as u32 * sessions_per_day
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn total_is_days_times_pace() {
        let now = Utc::now();
        let chain = DominoChain::new(now + Duration::days(10), 2, now);
        assert_eq!(chain.total_dominos, 20);
        assert_eq!(chain.completed_dominos, 0);
    }

    #[test]
    fn past_deadline_never_yields_zero_total() {
        let now = Utc::now();
        for pace in 1..=5 {
            let chain = DominoChain::new(now - Duration::days(7), pace, now);
            assert_eq!(chain.total_dominos, pace);
        }
    }

    #[test]
    fn advance_is_monotonic() {
        let now = Utc::now();
        let mut chain = DominoChain::new(now + Duration::days(10), 2, now);
        for n in 1..=7 {
            chain.advance(now);
            assert_eq!(chain.completed_dominos, n);
        }
        assert_eq!(chain.last_session_date, Some(now));
    }

    #[test]
    fn pace_clamps_to_range() {
        let now = Utc::now();
        let deadline = now + Duration::days(10);
        let mut chain = DominoChain::new(deadline, 99, now);
        assert_eq!(chain.sessions_per_day, MAX_SESSIONS_PER_DAY);
        assert_eq!(chain.total_dominos, 50);

        chain.set_sessions_per_day(0, deadline, now);
        assert_eq!(chain.sessions_per_day, MIN_SESSIONS_PER_DAY);
        assert_eq!(chain.total_dominos, 10);
    }

    #[test]
    fn pace_change_recomputes_but_keeps_completed() {
        let now = Utc::now();
        let deadline = now + Duration::days(10);
        let mut chain = DominoChain::new(deadline, 2, now);
        chain.advance(now);
        chain.advance(now);

        chain.set_sessions_per_day(3, deadline, now);
        assert_eq!(chain.total_dominos, 30);
        assert_eq!(chain.completed_dominos, 2);
    }

    #[test]
    fn progress_percentage_rounds() {
        let now = Utc::now();
        let mut chain = DominoChain::new(now + Duration::days(10), 2, now);
        for _ in 0..5 {
            chain.advance(now);
        }
        assert_eq!(chain.progress_percentage(), 25);

        // 1/3 → 33, 2/3 → 67
        chain.total_dominos = 3;
        chain.completed_dominos = 1;
        assert_eq!(chain.progress_percentage(), 33);
        chain.completed_dominos = 2;
        assert_eq!(chain.progress_percentage(), 67);
    }

    #[test]
    fn capped_progress_stops_at_99() {
        let now = Utc::now();
        let mut chain = DominoChain::new(now - Duration::days(1), 1, now);
        chain.advance(now);
        assert_eq!(chain.progress_percentage(), 100);
        assert_eq!(chain.capped_progress(), 99);
    }

    #[test]
    fn division_safe_when_total_forced_to_zero() {
        // total_dominos can't normally be zero, but the percentage guards
        // against a hand-edited state file anyway.
        let now = Utc::now();
        let mut chain = DominoChain::new(now + Duration::days(1), 1, now);
        chain.total_dominos = 0;
        chain.completed_dominos = 3;
        assert_eq!(chain.progress_percentage(), 300);
        assert_eq!(chain.capped_progress(), 99);
    }
}
