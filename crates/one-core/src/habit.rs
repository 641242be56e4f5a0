use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Days of consecutive practice before a habit is considered formed.
pub const CHALLENGE_DAYS: u32 = 66;

// ---------------------------------------------------------------------------
// HabitChallenge
// ---------------------------------------------------------------------------

/// 66-day streak tracker bound to the objective. One check-in per calendar
/// day (UTC); skipping a day restarts the current streak without erasing
/// the completed-day count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitChallenge {
    pub id: Uuid,
    pub objective_id: Uuid,
    pub habit: String,
    pub started_at: DateTime<Utc>,
    pub days_completed: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checkin: Option<DateTime<Utc>>,
}

impl HabitChallenge {
    pub fn new(objective_id: Uuid, habit: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            objective_id,
            habit: habit.into(),
            started_at: now,
            days_completed: 0,
            current_streak: 0,
            longest_streak: 0,
            last_checkin: None,
        }
    }

    /// Record today's practice. Returns `false` if today is already
    /// checked in.
    pub fn check_in(&mut self, now: DateTime<Utc>) -> bool {
        if let Some(last) = self.last_checkin {
            if same_day(last, now) {
                return false;
            }
            if days_apart(last, now) == 1 {
                self.current_streak += 1;
            } else {
                // Missed at least one day: streak restarts at today.
                self.current_streak = 1;
            }
        } else {
            self.current_streak = 1;
        }
        self.days_completed += 1;
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_checkin = Some(now);
        true
    }

    pub fn is_complete(&self) -> bool {
        self.days_completed >= CHALLENGE_DAYS
    }

    pub fn days_remaining(&self) -> u32 {
        CHALLENGE_DAYS.saturating_sub(self.days_completed)
    }
}

fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

fn days_apart(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    later.date_naive().num_days_from_ce() as i64 - earlier.date_naive().num_days_from_ce() as i64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn first_checkin_starts_streak() {
        let mut h = HabitChallenge::new(Uuid::new_v4(), "write 500 words", at(1, 9));
        assert!(h.check_in(at(1, 9)));
        assert_eq!(h.current_streak, 1);
        assert_eq!(h.days_completed, 1);
    }

    #[test]
    fn second_checkin_same_day_rejected() {
        let mut h = HabitChallenge::new(Uuid::new_v4(), "write", at(1, 9));
        assert!(h.check_in(at(1, 9)));
        assert!(!h.check_in(at(1, 22)));
        assert_eq!(h.days_completed, 1);
        assert_eq!(h.current_streak, 1);
    }

    #[test]
    fn consecutive_days_grow_streak() {
        let mut h = HabitChallenge::new(Uuid::new_v4(), "write", at(1, 9));
        h.check_in(at(1, 9));
        h.check_in(at(2, 7));
        h.check_in(at(3, 23));
        assert_eq!(h.current_streak, 3);
        assert_eq!(h.longest_streak, 3);
        assert_eq!(h.days_completed, 3);
    }

    #[test]
    fn missed_day_resets_streak_keeps_total() {
        let mut h = HabitChallenge::new(Uuid::new_v4(), "write", at(1, 9));
        h.check_in(at(1, 9));
        h.check_in(at(2, 9));
        h.check_in(at(5, 9)); // skipped the 3rd and 4th
        assert_eq!(h.current_streak, 1);
        assert_eq!(h.longest_streak, 2);
        assert_eq!(h.days_completed, 3);
    }

    #[test]
    fn challenge_completes_at_66_days() {
        let mut h = HabitChallenge::new(Uuid::new_v4(), "write", at(1, 9));
        h.days_completed = CHALLENGE_DAYS - 1;
        assert!(!h.is_complete());
        assert_eq!(h.days_remaining(), 1);
        h.check_in(at(1, 9));
        assert!(h.is_complete());
        assert_eq!(h.days_remaining(), 0);
    }
}
