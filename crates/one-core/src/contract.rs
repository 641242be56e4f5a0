use crate::domino::DominoChain;
use crate::objective::Objective;
use crate::types::{ContractState, ObjectiveStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tuning constants
// ---------------------------------------------------------------------------
// Product-tuning knobs, not derived from any formal model. The values were
// chosen for UI feel; treat them as adjustable.

/// Tension accrued per full day without recorded activity.
pub const TENSION_PER_IDLE_DAY: u32 = 15;
/// Flat penalty when domino progress trails the schedule by more than the
/// grace margin.
pub const BEHIND_SCHEDULE_PENALTY: u32 = 20;
/// Above this tension level the contract reads `tension` instead of
/// `stable`.
pub const TENSION_THRESHOLD: u32 = 40;
/// Tension relieved by each unit of forward progress.
pub const ADVANCE_RELIEF: u32 = 20;
/// Allowed shortfall of progress ratio vs. time ratio before the penalty
/// applies.
pub const SCHEDULE_GRACE: f64 = 0.1;

// ---------------------------------------------------------------------------
// ContractMeter
// ---------------------------------------------------------------------------

/// Heuristic health indicator for the commitment. Purely informational:
/// nothing is gated on it. The stored fields are just the last computed
/// values; `evaluate` rederives them on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractMeter {
    pub state: ContractState,
    /// 0..=100
    pub tension_level: u32,
    pub days_inactive: u32,
    pub last_activity_date: DateTime<Utc>,
}

impl ContractMeter {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            state: ContractState::Stable,
            tension_level: 0,
            days_inactive: 0,
            last_activity_date: now,
        }
    }

    /// Any unit of forward progress both advances the chain and relieves
    /// accumulated tension. Coupling is intentional.
    pub fn record_activity(&mut self, now: DateTime<Utc>) {
        self.state = ContractState::Stable;
        self.tension_level = self.tension_level.saturating_sub(ADVANCE_RELIEF);
        self.days_inactive = 0;
        self.last_activity_date = now;
    }

    /// Called when the objective completes. Terminal for this contract.
    pub fn fulfill(&mut self) {
        self.state = ContractState::Fulfilled;
    }

    /// Called when the objective fails. Terminal for this contract.
    pub fn break_contract(&mut self) {
        self.state = ContractState::Broken;
    }

    /// Rederive tension and state from the current inputs. Last computed
    /// value wins; there is no authoritative truth beyond these fields.
    pub fn evaluate(&mut self, objective: &Objective, chain: &DominoChain, now: DateTime<Utc>) {
        self.days_inactive = ((now - self.last_activity_date).num_days()).max(0) as u32;

        let penalty = if behind_schedule(objective, chain, now) {
            BEHIND_SCHEDULE_PENALTY
        } else {
            0
        };
        self.tension_level = (self.days_inactive * TENSION_PER_IDLE_DAY + penalty).min(100);

        self.state = match objective.status {
            ObjectiveStatus::Completed => ContractState::Fulfilled,
            ObjectiveStatus::Failed => ContractState::Broken,
            ObjectiveStatus::Active if now > objective.deadline => ContractState::Broken,
            ObjectiveStatus::Active if self.tension_level > TENSION_THRESHOLD => {
                ContractState::Tension
            }
            ObjectiveStatus::Active => ContractState::Stable,
        };
    }
}

fn behind_schedule(objective: &Objective, chain: &DominoChain, now: DateTime<Utc>) -> bool {
    let time_ratio =
        objective.days_until_deadline(now) as f64 / objective.total_planned_days() as f64;
    chain.progress_ratio() < time_ratio - SCHEDULE_GRACE
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::Cascade;
    use chrono::Duration;

    fn fixture(deadline_days: i64, pace: u32) -> (Objective, DominoChain, ContractMeter) {
        let now = Utc::now();
        let objective = Objective::new(
            "test",
            Cascade::default(),
            now + Duration::days(deadline_days),
            "why",
            now,
        );
        let chain = DominoChain::new(objective.deadline, pace, now);
        let meter = ContractMeter::new(now);
        (objective, chain, meter)
    }

    #[test]
    fn fresh_meter_is_stable() {
        let (_, _, meter) = fixture(10, 2);
        assert_eq!(meter.state, ContractState::Stable);
        assert_eq!(meter.tension_level, 0);
        assert_eq!(meter.days_inactive, 0);
    }

    #[test]
    fn three_idle_days_reads_tension() {
        // 3 × 15 = 45 > 40 threshold. Keep enough dominos knocked over
        // that no schedule penalty applies.
        let (objective, mut chain, mut meter) = fixture(10, 2);
        let now = Utc::now();
        for _ in 0..18 {
            chain.advance(now);
        }
        meter.last_activity_date = now - Duration::days(3);

        meter.evaluate(&objective, &chain, now);
        assert_eq!(meter.days_inactive, 3);
        assert_eq!(meter.tension_level, 45);
        assert_eq!(meter.state, ContractState::Tension);
    }

    #[test]
    fn two_idle_days_stays_stable() {
        let (objective, mut chain, mut meter) = fixture(10, 2);
        let now = Utc::now();
        for _ in 0..18 {
            chain.advance(now);
        }
        meter.last_activity_date = now - Duration::days(2);

        meter.evaluate(&objective, &chain, now);
        assert_eq!(meter.tension_level, 30);
        assert_eq!(meter.state, ContractState::Stable);
    }

    #[test]
    fn behind_schedule_penalty_applies() {
        // No dominos done, whole plan ahead: time_ratio ≈ 1.0,
        // progress_ratio 0.0 → penalty.
        let (objective, chain, mut meter) = fixture(10, 2);
        let now = Utc::now();

        meter.evaluate(&objective, &chain, now);
        assert_eq!(meter.tension_level, BEHIND_SCHEDULE_PENALTY);
        assert_eq!(meter.state, ContractState::Stable);
    }

    #[test]
    fn tension_caps_at_100() {
        let (objective, chain, mut meter) = fixture(10, 2);
        let now = Utc::now();
        meter.last_activity_date = now - Duration::days(30);

        meter.evaluate(&objective, &chain, now);
        assert_eq!(meter.tension_level, 100);
        assert_eq!(meter.state, ContractState::Tension);
    }

    #[test]
    fn active_past_deadline_is_broken() {
        let (mut objective, chain, mut meter) = fixture(10, 2);
        let now = Utc::now();
        objective.deadline = now - Duration::days(1);

        meter.evaluate(&objective, &chain, now);
        assert_eq!(meter.state, ContractState::Broken);
    }

    #[test]
    fn completed_objective_reads_fulfilled() {
        let (mut objective, chain, mut meter) = fixture(10, 2);
        let now = Utc::now();
        objective.complete(now);

        meter.evaluate(&objective, &chain, now);
        assert_eq!(meter.state, ContractState::Fulfilled);

        // Re-evaluating never leaves fulfilled: the input never reverts.
        meter.evaluate(&objective, &chain, now + Duration::days(5));
        assert_eq!(meter.state, ContractState::Fulfilled);
    }

    #[test]
    fn activity_relieves_tension() {
        let (_, _, mut meter) = fixture(10, 2);
        let now = Utc::now();
        meter.tension_level = 45;
        meter.state = ContractState::Tension;
        meter.days_inactive = 3;

        meter.record_activity(now);
        assert_eq!(meter.state, ContractState::Stable);
        assert_eq!(meter.tension_level, 25);
        assert_eq!(meter.days_inactive, 0);
        assert_eq!(meter.last_activity_date, now);

        meter.record_activity(now);
        assert_eq!(meter.tension_level, 5);
        meter.record_activity(now);
        // Floors at zero
        assert_eq!(meter.tension_level, 0);
    }
}
