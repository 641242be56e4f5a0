use crate::contract::ContractMeter;
use crate::domino::DominoChain;
use crate::error::{OneError, Result};
use crate::habit::HabitChallenge;
use crate::objective::{Cascade, Objective};
use crate::paths;
use crate::planning::{FourOneOne, GpsPlan, Thief, ThievesAssessment, WeeklyReview};
use crate::roadmap::{Roadmap, RoadmapPayload};
use crate::session::FocusSession;
use crate::types::CascadeField;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The whole application state: the objective slot, its derived chain and
/// contract, the session log, and the planning artifacts. Owned by the
/// caller and passed by reference; persistence is an explicit `save`, not
/// a side effect of each mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<Objective>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domino: Option<DominoChain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<ContractMeter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_session: Option<FocusSession>,
    #[serde(default)]
    pub session_history: Vec<FocusSession>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habit: Option<HabitChallenge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub four_one_one: Option<FourOneOne>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gps: Option<GpsPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thieves: Option<ThievesAssessment>,
    #[serde(default)]
    pub weekly_reviews: Vec<WeeklyReview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<Roadmap>,
    pub last_updated: DateTime<Utc>,
}

fn default_version() -> u32 {
    1
}

impl AppState {
    pub fn new() -> Self {
        Self {
            version: 1,
            objective: None,
            domino: None,
            contract: None,
            current_session: None,
            session_history: Vec::new(),
            habit: None,
            four_one_one: None,
            gps: None,
            thieves: None,
            weekly_reviews: Vec::new(),
            roadmap: None,
            last_updated: Utc::now(),
        }
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    /// Rehydrate the whole store from the single JSON blob. All-or-nothing.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::state_path(root);
        if !path.exists() {
            return Err(OneError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let state: AppState = serde_json::from_str(&data)?;
        Ok(state)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::state_path(root);
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now;
    }

    // ---------------------------------------------------------------------------
    // Objective lifecycle
    // ---------------------------------------------------------------------------

    pub fn has_active_objective(&self) -> bool {
        self.objective.as_ref().is_some_and(|o| o.is_active())
    }

    /// Define the one objective. Rejected while another is active (the
    /// lock). A terminal objective still in the slot is swept away exactly
    /// as `reset` would, then replaced.
    pub fn define_objective(
        &mut self,
        title: impl Into<String>,
        cascade: Cascade,
        deadline: DateTime<Utc>,
        why: impl Into<String>,
        sessions_per_day: u32,
        now: DateTime<Utc>,
    ) -> Result<&Objective> {
        if self.has_active_objective() {
            return Err(OneError::ObjectiveLocked);
        }
        if self.objective.is_some() {
            self.clear_objective_artifacts();
        }

        let objective = Objective::new(title, cascade, deadline, why, now);
        self.domino = Some(DominoChain::new(deadline, sessions_per_day, now));
        self.contract = Some(ContractMeter::new(now));
        self.objective = Some(objective);
        self.touch(now);
        Ok(self.objective.as_ref().unwrap())
    }

    /// Clamp to 0..=100; silently ignored unless the objective is active.
    pub fn update_progress(&mut self, value: i64, now: DateTime<Utc>) -> bool {
        let changed = match self.objective.as_mut() {
            Some(o) => o.set_progress(value),
            None => false,
        };
        if changed {
            self.touch(now);
        }
        changed
    }

    /// Terminal transition: completed, progress 100, contract fulfilled.
    /// Idempotent no-op from any non-active state.
    pub fn complete_objective(&mut self, now: DateTime<Utc>) -> bool {
        let changed = match self.objective.as_mut() {
            Some(o) => o.complete(now),
            None => false,
        };
        if changed {
            if let Some(meter) = self.contract.as_mut() {
                meter.fulfill();
            }
            self.touch(now);
        }
        changed
    }

    /// Terminal transition: failed, contract broken. Idempotent no-op from
    /// any non-active state.
    pub fn fail_objective(&mut self, now: DateTime<Utc>) -> bool {
        let changed = match self.objective.as_mut() {
            Some(o) => o.fail(now),
            None => false,
        };
        if changed {
            if let Some(meter) = self.contract.as_mut() {
                meter.break_contract();
            }
            self.touch(now);
        }
        changed
    }

    /// Clear the slot. Only allowed from a terminal state; a live
    /// objective persists unchanged. Session history survives as an
    /// immutable log.
    pub fn reset(&mut self, now: DateTime<Utc>) -> bool {
        match self.objective.as_ref() {
            Some(o) if o.status.is_terminal() => {
                self.objective = None;
                self.clear_objective_artifacts();
                self.touch(now);
                true
            }
            _ => false,
        }
    }

    fn clear_objective_artifacts(&mut self) {
        self.domino = None;
        self.contract = None;
        self.current_session = None;
        self.habit = None;
        self.four_one_one = None;
        self.gps = None;
        self.thieves = None;
        self.weekly_reviews.clear();
        self.roadmap = None;
    }

    pub fn edit_cascade(
        &mut self,
        field: CascadeField,
        value: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let objective = self.objective.as_mut().ok_or(OneError::NoObjective)?;
        objective.edit_cascade(field, value);
        self.touch(now);
        Ok(())
    }

    // ---------------------------------------------------------------------------
    // Domino chain
    // ---------------------------------------------------------------------------

    /// Knock over one domino and relieve contract tension. Requires an
    /// active objective: the chain only counts up while the commitment
    /// lives.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<()> {
        let objective = self.objective.as_ref().ok_or(OneError::NoObjective)?;
        if !objective.is_active() {
            return Err(OneError::NotActive(objective.status.to_string()));
        }
        let chain = self.domino.as_mut().ok_or(OneError::NoObjective)?;
        chain.advance(now);
        if let Some(meter) = self.contract.as_mut() {
            meter.record_activity(now);
        }
        self.touch(now);
        Ok(())
    }

    /// Change the daily pace (clamped to 1..=5) and re-derive the chain
    /// total against the objective deadline.
    pub fn set_sessions_per_day(&mut self, n: u32, now: DateTime<Utc>) -> Result<u32> {
        let deadline = self
            .objective
            .as_ref()
            .ok_or(OneError::NoObjective)?
            .deadline;
        let chain = self.domino.as_mut().ok_or(OneError::NoObjective)?;
        chain.set_sessions_per_day(n, deadline, now);
        let sessions_per_day = chain.sessions_per_day;
        self.touch(now);
        Ok(sessions_per_day)
    }

    // ---------------------------------------------------------------------------
    // Contract
    // ---------------------------------------------------------------------------

    /// Rederive the contract meter from current inputs and return it.
    pub fn evaluate_contract(&mut self, now: DateTime<Utc>) -> Result<&ContractMeter> {
        let objective = self.objective.as_ref().ok_or(OneError::NoObjective)?;
        let chain = self.domino.as_ref().ok_or(OneError::NoObjective)?;
        let meter = self.contract.as_mut().ok_or(OneError::NoObjective)?;
        meter.evaluate(objective, chain, now);
        self.last_updated = now;
        Ok(self.contract.as_ref().unwrap())
    }

    // ---------------------------------------------------------------------------
    // Focus sessions
    // ---------------------------------------------------------------------------

    pub fn start_session(&mut self, planned_minutes: u32, now: DateTime<Utc>) -> Result<&FocusSession> {
        let objective = self.objective.as_ref().ok_or(OneError::NoObjective)?;
        if !objective.is_active() {
            return Err(OneError::NotActive(objective.status.to_string()));
        }
        if self.current_session.is_some() {
            return Err(OneError::SessionInProgress);
        }
        self.current_session = Some(FocusSession::new(objective.id, planned_minutes, now));
        self.touch(now);
        Ok(self.current_session.as_ref().unwrap())
    }

    /// Finalize the running session, append it to history, and advance the
    /// chain (one domino per finished session). If the objective went
    /// terminal while the session ran, the session is still recorded but
    /// the chain stays put.
    pub fn end_session(
        &mut self,
        reflection: Option<String>,
        next_action: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<&FocusSession> {
        let mut session = self
            .current_session
            .take()
            .ok_or(OneError::NoActiveSession)?;
        session.end(reflection, next_action, now);
        self.session_history.push(session);

        if self.has_active_objective() {
            self.advance(now)?;
        }
        self.touch(now);
        Ok(self.session_history.last().unwrap())
    }

    pub fn add_distraction(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> Result<()> {
        let session = self
            .current_session
            .as_mut()
            .ok_or(OneError::NoActiveSession)?;
        session.add_distraction(text, now);
        self.touch(now);
        Ok(())
    }

    pub fn add_post_it(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> Result<()> {
        let session = self
            .current_session
            .as_mut()
            .ok_or(OneError::NoActiveSession)?;
        session.add_post_it(text, now);
        self.touch(now);
        Ok(())
    }

    // ---------------------------------------------------------------------------
    // Habit challenge
    // ---------------------------------------------------------------------------

    pub fn start_habit(&mut self, habit: impl Into<String>, now: DateTime<Utc>) -> Result<&HabitChallenge> {
        let objective = self.objective.as_ref().ok_or(OneError::NoObjective)?;
        self.habit = Some(HabitChallenge::new(objective.id, habit, now));
        self.touch(now);
        Ok(self.habit.as_ref().unwrap())
    }

    /// Returns `false` when today is already checked in.
    pub fn habit_check_in(&mut self, now: DateTime<Utc>) -> Result<bool> {
        let habit = self.habit.as_mut().ok_or(OneError::NoHabit)?;
        let counted = habit.check_in(now);
        if counted {
            self.touch(now);
        }
        Ok(counted)
    }

    // ---------------------------------------------------------------------------
    // Planning artifacts
    // ---------------------------------------------------------------------------

    pub fn set_four_one_one(
        &mut self,
        annual_goals: Vec<String>,
        monthly_goals: Vec<String>,
        weekly_priorities: Vec<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let objective = self.objective.as_ref().ok_or(OneError::NoObjective)?;
        self.four_one_one = Some(FourOneOne {
            objective_id: objective.id,
            annual_goals,
            monthly_goals,
            weekly_priorities,
            updated_at: now,
        });
        self.touch(now);
        Ok(())
    }

    pub fn set_gps(
        &mut self,
        goal: impl Into<String>,
        priorities: Vec<String>,
        strategies: Vec<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let objective = self.objective.as_ref().ok_or(OneError::NoObjective)?;
        self.gps = Some(GpsPlan {
            objective_id: objective.id,
            goal: goal.into(),
            priorities,
            strategies,
            updated_at: now,
        });
        self.touch(now);
        Ok(())
    }

    pub fn record_thief(
        &mut self,
        thief: Thief,
        score: u8,
        note: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let objective_id = self.objective.as_ref().ok_or(OneError::NoObjective)?.id;
        let assessment = self
            .thieves
            .get_or_insert_with(|| ThievesAssessment::new(objective_id, now));
        assessment.record(thief, score, note, now);
        self.touch(now);
        Ok(())
    }

    pub fn add_weekly_review(
        &mut self,
        wins: Vec<String>,
        lessons: Vec<String>,
        next_focus: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let objective = self.objective.as_ref().ok_or(OneError::NoObjective)?;
        self.weekly_reviews.push(WeeklyReview {
            objective_id: objective.id,
            week_of: now,
            wins,
            lessons,
            next_focus,
            created_at: now,
        });
        self.touch(now);
        Ok(())
    }

    /// Store a suggestion-service roadmap verbatim, replacing any prior
    /// one.
    pub fn store_roadmap(&mut self, payload: RoadmapPayload, now: DateTime<Utc>) -> Result<()> {
        let objective = self.objective.as_ref().ok_or(OneError::NoObjective)?;
        self.roadmap = Some(Roadmap {
            objective_id: objective.id,
            summary: payload.summary,
            milestones: payload.milestones,
            risks: payload.risks,
            recommendations: payload.recommendations,
            stored_at: now,
        });
        self.touch(now);
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContractState, ObjectiveStatus};
    use chrono::Duration;
    use tempfile::TempDir;

    fn define(state: &mut AppState, deadline_days: i64, pace: u32) -> DateTime<Utc> {
        let now = Utc::now();
        state
            .define_objective(
                "Ship the book",
                Cascade {
                    someday_goal: "be a published author".to_string(),
                    month_goal: "finish part one".to_string(),
                    week_goal: "draft three chapters".to_string(),
                    today_goal: "draft chapter one".to_string(),
                    right_now_action: "open the manuscript".to_string(),
                },
                now + Duration::days(deadline_days),
                "because it matters",
                pace,
                now,
            )
            .unwrap();
        now
    }

    // -- lifecycle ----------------------------------------------------------

    #[test]
    fn define_initializes_chain_and_contract() {
        let mut state = AppState::new();
        define(&mut state, 10, 2);

        let o = state.objective.as_ref().unwrap();
        assert_eq!(o.status, ObjectiveStatus::Active);
        assert_eq!(o.progress, 0);

        let chain = state.domino.as_ref().unwrap();
        assert_eq!(chain.total_dominos, 20);
        assert_eq!(chain.completed_dominos, 0);

        let meter = state.contract.as_ref().unwrap();
        assert_eq!(meter.state, ContractState::Stable);
        assert_eq!(meter.tension_level, 0);
    }

    #[test]
    fn define_while_active_is_locked() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);

        let err = state
            .define_objective(
                "another",
                Cascade::default(),
                now + Duration::days(5),
                "",
                1,
                now,
            )
            .unwrap_err();
        assert!(matches!(err, OneError::ObjectiveLocked));
        assert_eq!(state.objective.as_ref().unwrap().title, "Ship the book");
    }

    #[test]
    fn define_over_terminal_sweeps_artifacts() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        state.start_habit("write daily", now).unwrap();
        state.fail_objective(now);

        state
            .define_objective(
                "second attempt",
                Cascade::default(),
                now + Duration::days(30),
                "again",
                1,
                now,
            )
            .unwrap();
        assert_eq!(state.objective.as_ref().unwrap().title, "second attempt");
        assert!(state.habit.is_none());
        assert_eq!(state.domino.as_ref().unwrap().total_dominos, 30);
        assert_eq!(state.domino.as_ref().unwrap().completed_dominos, 0);
    }

    #[test]
    fn complete_forces_progress_and_fulfills_contract() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        for _ in 0..5 {
            state.advance(now).unwrap();
        }
        assert_eq!(state.domino.as_ref().unwrap().progress_percentage(), 25);

        assert!(state.complete_objective(now));
        let o = state.objective.as_ref().unwrap();
        assert_eq!(o.progress, 100);
        assert_eq!(
            state.contract.as_ref().unwrap().state,
            ContractState::Fulfilled
        );

        // Idempotent
        assert!(!state.complete_objective(now));
    }

    #[test]
    fn fail_breaks_contract_and_is_idempotent() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        assert!(state.fail_objective(now));
        assert_eq!(
            state.contract.as_ref().unwrap().state,
            ContractState::Broken
        );
        assert!(!state.fail_objective(now));
        assert!(!state.complete_objective(now));
        assert_eq!(
            state.objective.as_ref().unwrap().status,
            ObjectiveStatus::Failed
        );
    }

    #[test]
    fn reset_guarded_while_active() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        assert!(!state.reset(now));
        assert!(state.objective.is_some());
        assert!(state.domino.is_some());
    }

    #[test]
    fn reset_from_terminal_clears_everything_but_history() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        state.start_session(60, now).unwrap();
        state
            .end_session(None, None, now + Duration::minutes(60))
            .unwrap();
        state.start_habit("write daily", now).unwrap();
        state
            .set_gps("ship it", vec!["draft".to_string()], vec![], now)
            .unwrap();
        state.complete_objective(now);

        assert!(state.reset(now));
        assert!(state.objective.is_none());
        assert!(state.domino.is_none());
        assert!(state.contract.is_none());
        assert!(state.habit.is_none());
        assert!(state.gps.is_none());
        assert!(state.current_session.is_none());
        // The session log is immutable and survives the reset.
        assert_eq!(state.session_history.len(), 1);
    }

    #[test]
    fn cascade_editable_at_any_status() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        state.complete_objective(now);
        state
            .edit_cascade(CascadeField::Today, "write the announcement", now)
            .unwrap();
        assert_eq!(
            state.objective.as_ref().unwrap().cascade.today_goal,
            "write the announcement"
        );
    }

    // -- dominos ------------------------------------------------------------

    #[test]
    fn advance_counts_up_and_relieves_tension() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        state.contract.as_mut().unwrap().tension_level = 50;
        state.contract.as_mut().unwrap().state = ContractState::Tension;

        state.advance(now).unwrap();
        let chain = state.domino.as_ref().unwrap();
        assert_eq!(chain.completed_dominos, 1);
        assert_eq!(chain.last_session_date, Some(now));

        let meter = state.contract.as_ref().unwrap();
        assert_eq!(meter.state, ContractState::Stable);
        assert_eq!(meter.tension_level, 30);
        assert_eq!(meter.days_inactive, 0);
    }

    #[test]
    fn advance_rejected_after_terminal() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        state.advance(now).unwrap();
        state.complete_objective(now);

        assert!(matches!(
            state.advance(now),
            Err(OneError::NotActive(_))
        ));
        assert_eq!(state.domino.as_ref().unwrap().completed_dominos, 1);
    }

    #[test]
    fn pace_change_clamps_and_recomputes() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        let pace = state.set_sessions_per_day(9, now).unwrap();
        assert_eq!(pace, 5);
        assert_eq!(state.domino.as_ref().unwrap().total_dominos, 50);
    }

    // -- sessions -----------------------------------------------------------

    #[test]
    fn session_lifecycle_advances_chain() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);

        state.start_session(60, now).unwrap();
        assert!(matches!(
            state.start_session(60, now),
            Err(OneError::SessionInProgress)
        ));

        state.add_distraction("phone", now).unwrap();
        state.add_post_it("call editor", now).unwrap();

        let ended = state
            .end_session(
                Some("good block".to_string()),
                Some("outline ch2".to_string()),
                now + Duration::minutes(55),
            )
            .unwrap();
        assert_eq!(ended.actual_minutes, Some(55));
        assert_eq!(ended.distractions.len(), 1);

        assert!(state.current_session.is_none());
        assert_eq!(state.session_history.len(), 1);
        assert_eq!(state.domino.as_ref().unwrap().completed_dominos, 1);
    }

    #[test]
    fn end_without_session_errors() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        assert!(matches!(
            state.end_session(None, None, now),
            Err(OneError::NoActiveSession)
        ));
    }

    #[test]
    fn session_requires_active_objective() {
        let mut state = AppState::new();
        let now = Utc::now();
        assert!(matches!(
            state.start_session(60, now),
            Err(OneError::NoObjective)
        ));

        define(&mut state, 10, 2);
        state.complete_objective(now);
        assert!(matches!(
            state.start_session(60, now),
            Err(OneError::NotActive(_))
        ));
    }

    // -- contract -----------------------------------------------------------

    #[test]
    fn evaluate_contract_reads_through_store() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        for _ in 0..18 {
            state.advance(now).unwrap();
        }
        state.contract.as_mut().unwrap().last_activity_date = now - Duration::days(3);

        let meter = state.evaluate_contract(now).unwrap();
        assert_eq!(meter.tension_level, 45);
        assert_eq!(meter.state, ContractState::Tension);
    }

    // -- habit & planning ---------------------------------------------------

    #[test]
    fn habit_requires_objective() {
        let mut state = AppState::new();
        let now = Utc::now();
        assert!(matches!(
            state.start_habit("write", now),
            Err(OneError::NoObjective)
        ));
        assert!(matches!(state.habit_check_in(now), Err(OneError::NoHabit)));
    }

    #[test]
    fn habit_check_in_through_store() {
        let mut state = AppState::new();
        let now = define(&mut state, 70, 1);
        state.start_habit("write 500 words", now).unwrap();
        assert!(state.habit_check_in(now).unwrap());
        assert!(!state.habit_check_in(now).unwrap());
        assert_eq!(state.habit.as_ref().unwrap().days_completed, 1);
    }

    #[test]
    fn thieves_recorded_lazily() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        state
            .record_thief(Thief::FearOfChaos, 7, None, now)
            .unwrap();
        state
            .record_thief(Thief::InabilityToSayNo, 9, Some("too many asks".to_string()), now)
            .unwrap();
        assert_eq!(state.thieves.as_ref().unwrap().scores.len(), 2);
    }

    #[test]
    fn roadmap_stored_verbatim() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        let payload: RoadmapPayload = serde_json::from_str(
            r#"{"milestones": [{"title": "first draft"}], "risks": ["scope creep"]}"#,
        )
        .unwrap();
        state.store_roadmap(payload, now).unwrap();

        let r = state.roadmap.as_ref().unwrap();
        assert_eq!(r.milestones.len(), 1);
        assert_eq!(r.risks, vec!["scope creep"]);
        assert!(r.summary.is_none());
    }

    // -- persistence --------------------------------------------------------

    #[test]
    fn state_roundtrip_through_json_blob() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        state.advance(now).unwrap();
        state.start_habit("write", now).unwrap();
        state.save(dir.path()).unwrap();

        let loaded = AppState::load(dir.path()).unwrap();
        assert_eq!(loaded.objective.as_ref().unwrap().title, "Ship the book");
        assert_eq!(loaded.domino.as_ref().unwrap().completed_dominos, 1);
        assert_eq!(loaded.habit.as_ref().unwrap().habit, "write");
    }

    #[test]
    fn load_missing_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            AppState::load(dir.path()),
            Err(OneError::NotInitialized)
        ));
    }

    // -- the worked example from the product brief --------------------------

    #[test]
    fn ten_day_two_pace_scenario() {
        let mut state = AppState::new();
        let now = define(&mut state, 10, 2);
        assert_eq!(state.domino.as_ref().unwrap().total_dominos, 20);

        for _ in 0..5 {
            state.advance(now).unwrap();
        }
        let chain = state.domino.as_ref().unwrap();
        assert_eq!(chain.completed_dominos, 5);
        assert_eq!(chain.progress_percentage(), 25);

        state.complete_objective(now);
        assert_eq!(state.objective.as_ref().unwrap().progress, 100);
    }
}
