use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use clap::Subcommand;
use one_core::state::AppState;
use std::path::Path;

#[derive(Subcommand)]
pub enum HabitSubcommand {
    /// Start the 66-day challenge for a habit tied to the objective
    Start { habit: String },
    /// Record today's practice
    CheckIn,
    /// Show streak and days remaining
    Status,
}

pub fn run(root: &Path, subcmd: HabitSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        HabitSubcommand::Start { habit } => start(root, &habit, json),
        HabitSubcommand::CheckIn => check_in(root, json),
        HabitSubcommand::Status => status(root, json),
    }
}

fn start(root: &Path, habit: &str, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    let challenge = state
        .start_habit(habit, Utc::now())
        .context("failed to start habit challenge")?
        .clone();
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&challenge);
    }
    println!("66-day challenge started: {}", challenge.habit);
    Ok(())
}

fn check_in(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    let counted = state
        .habit_check_in(Utc::now())
        .context("failed to check in")?;
    state.save(root).context("failed to save state")?;

    let habit = state.habit.as_ref().unwrap();
    if json {
        return print_json(&serde_json::json!({
            "counted": counted,
            "days_completed": habit.days_completed,
            "current_streak": habit.current_streak,
        }));
    }
    if counted {
        println!(
            "Day {}/66 done. Streak: {}.",
            habit.days_completed, habit.current_streak
        );
        if habit.is_complete() {
            println!("Challenge complete: the habit is yours.");
        }
    } else {
        println!("Already checked in today.");
    }
    Ok(())
}

fn status(root: &Path, json: bool) -> anyhow::Result<()> {
    let state = AppState::load(root).context("failed to load state")?;

    if json {
        return print_json(&state.habit);
    }
    match &state.habit {
        Some(h) => {
            println!("Habit: {}", h.habit);
            println!(
                "  Day {}/66 ({} remaining), streak {} (best {})",
                h.days_completed,
                h.days_remaining(),
                h.current_streak,
                h.longest_streak
            );
        }
        None => println!("No habit challenge. Run: one habit start <habit>"),
    }
    Ok(())
}
