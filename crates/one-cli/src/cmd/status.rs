use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use one_core::state::AppState;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;

    let Some(objective) = state.objective.clone() else {
        if json {
            return print_json(&serde_json::json!({ "objective": null }));
        }
        println!("No objective. Run: one define");
        return Ok(());
    };

    let now = Utc::now();
    // Refresh the contract reading; last computed value wins.
    if state.contract.is_some() && state.domino.is_some() {
        state.evaluate_contract(now)?;
        state.save(root).context("failed to save state")?;
    }

    let chain = state.domino.as_ref();
    let meter = state.contract.as_ref();

    if json {
        return print_json(&serde_json::json!({
            "objective": objective,
            "domino": chain,
            "contract": meter,
            "display_progress": chain.map(|c| c.capped_progress()),
            "current_session": state.current_session,
            "habit": state.habit,
        }));
    }

    println!("Objective: {} [{}]", objective.title, objective.status);
    println!("  Why:      {}", objective.why);
    println!("  Deadline: {}", objective.deadline.format("%Y-%m-%d"));
    println!("  Progress: {}%", objective.progress);
    println!("\nCascade:");
    println!("  someday: {}", objective.cascade.someday_goal);
    println!("  month:   {}", objective.cascade.month_goal);
    println!("  week:    {}", objective.cascade.week_goal);
    println!("  today:   {}", objective.cascade.today_goal);
    println!("  now:     {}", objective.cascade.right_now_action);

    if let Some(chain) = chain {
        println!(
            "\nDominos: {}/{} ({}%, {} per day)",
            chain.completed_dominos,
            chain.total_dominos,
            chain.capped_progress(),
            chain.sessions_per_day
        );
    }

    if let Some(meter) = meter {
        println!(
            "Contract: {} (tension {}, {} days inactive)",
            meter.state, meter.tension_level, meter.days_inactive
        );
    }

    if let Some(session) = &state.current_session {
        println!(
            "\nSession running since {} ({} min planned)",
            session.started_at.format("%H:%M"),
            session.planned_minutes
        );
    }

    if let Some(habit) = &state.habit {
        println!(
            "Habit: {} (day {}/66, streak {})",
            habit.habit, habit.days_completed, habit.current_streak
        );
    }

    Ok(())
}
