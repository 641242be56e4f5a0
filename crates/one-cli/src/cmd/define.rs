use crate::output::print_json;
use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use one_core::{config::Config, objective::Cascade, state::AppState, OneError};
use std::path::Path;

#[derive(Args)]
pub struct DefineArgs {
    /// Short name for the objective
    #[arg(long)]
    pub title: String,

    /// Someday goal (the long-term vision)
    #[arg(long)]
    pub someday: String,

    /// This month's goal
    #[arg(long)]
    pub month: String,

    /// This week's goal
    #[arg(long)]
    pub week: String,

    /// Today's goal
    #[arg(long)]
    pub today: String,

    /// The very next action, right now
    #[arg(long = "now")]
    pub right_now: String,

    /// Deadline: RFC 3339 timestamp or YYYY-MM-DD (end of day, UTC)
    #[arg(long)]
    pub deadline: String,

    /// Why this objective matters
    #[arg(long, default_value = "")]
    pub why: String,

    /// Planned focus sessions per day (1-5; default from config)
    #[arg(long)]
    pub sessions_per_day: Option<u32>,
}

pub fn run(root: &Path, args: DefineArgs, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    let config = Config::load(root).context("failed to load config")?;

    let deadline = parse_deadline(&args.deadline)?;
    let pace = args
        .sessions_per_day
        .unwrap_or(config.default_sessions_per_day);

    let cascade = Cascade {
        someday_goal: args.someday,
        month_goal: args.month,
        week_goal: args.week,
        today_goal: args.today,
        right_now_action: args.right_now,
    };

    let now = Utc::now();
    state
        .define_objective(&args.title, cascade, deadline, &args.why, pace, now)
        .context("failed to define objective")?;
    state.save(root).context("failed to save state")?;

    let objective = state.objective.as_ref().unwrap();
    let chain = state.domino.as_ref().unwrap();

    if json {
        print_json(&serde_json::json!({
            "id": objective.id,
            "title": objective.title,
            "deadline": objective.deadline,
            "total_dominos": chain.total_dominos,
            "sessions_per_day": chain.sessions_per_day,
        }))?;
    } else {
        println!("Objective locked in: {}", objective.title);
        println!(
            "  {} dominos to knock over by {} ({} per day)",
            chain.total_dominos,
            objective.deadline.format("%Y-%m-%d"),
            chain.sessions_per_day
        );
        println!("  Right now: {}", objective.cascade.right_now_action);
    }
    Ok(())
}

/// Accept a full RFC 3339 timestamp or a bare date (interpreted as end of
/// that day, UTC).
pub fn parse_deadline(s: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let dt = date.and_hms_opt(23, 59, 59).unwrap();
        return Ok(DateTime::from_naive_utc_and_offset(dt, Utc));
    }
    Err(OneError::InvalidDeadline(s.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_date_as_end_of_day() {
        let dt = parse_deadline("2026-09-15").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-09-15T23:59:59+00:00");
    }

    #[test]
    fn parses_rfc3339() {
        let dt = parse_deadline("2026-09-15T08:30:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-09-15T08:30:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_deadline("someday").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<OneError>(),
            Some(OneError::InvalidDeadline(_))
        ));
    }
}
