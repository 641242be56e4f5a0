use crate::output::{print_columns, print_json};
use anyhow::Context;
use chrono::Utc;
use clap::Subcommand;
use one_core::{config::Config, state::AppState};
use std::path::Path;

#[derive(Subcommand)]
pub enum SessionSubcommand {
    /// Start a focus session (at most one at a time)
    Start {
        /// Planned length in minutes (default from config)
        #[arg(long)]
        minutes: Option<u32>,
    },
    /// End the running session and knock over a domino
    End {
        /// How did it go?
        #[arg(long)]
        reflection: Option<String>,
        /// The next action to queue up
        #[arg(long)]
        next: Option<String>,
    },
    /// Log a distraction without leaving the session
    Distract { text: String },
    /// Capture a post-it note for later
    Note { text: String },
    /// Show the running session
    Current,
    /// List finished sessions
    History,
}

pub fn run(root: &Path, subcmd: SessionSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        SessionSubcommand::Start { minutes } => start(root, minutes, json),
        SessionSubcommand::End { reflection, next } => end(root, reflection, next, json),
        SessionSubcommand::Distract { text } => distract(root, &text, json),
        SessionSubcommand::Note { text } => note(root, &text, json),
        SessionSubcommand::Current => current(root, json),
        SessionSubcommand::History => history(root, json),
    }
}

fn start(root: &Path, minutes: Option<u32>, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    let config = Config::load(root).context("failed to load config")?;
    let minutes = minutes.unwrap_or(config.default_session_minutes);

    let session = state
        .start_session(minutes, Utc::now())
        .context("failed to start session")?;
    let started_at = session.started_at;
    let id = session.id;
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&serde_json::json!({
            "id": id,
            "started_at": started_at,
            "planned_minutes": minutes,
        }));
    }
    println!("Session started: {} minutes. Go.", minutes);
    Ok(())
}

fn end(
    root: &Path,
    reflection: Option<String>,
    next: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    let session = state
        .end_session(reflection, next, Utc::now())
        .context("failed to end session")?
        .clone();
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&session);
    }
    println!(
        "Session done: {} min (planned {}).",
        session.actual_minutes.unwrap_or(0),
        session.planned_minutes
    );
    if let Some(chain) = &state.domino {
        println!(
            "Domino down: {}/{} ({}%)",
            chain.completed_dominos,
            chain.total_dominos,
            chain.capped_progress()
        );
    }
    Ok(())
}

fn distract(root: &Path, text: &str, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    state
        .add_distraction(text, Utc::now())
        .context("failed to log distraction")?;
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&serde_json::json!({ "logged": text }));
    }
    println!("Noted. Back to work.");
    Ok(())
}

fn note(root: &Path, text: &str, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    state
        .add_post_it(text, Utc::now())
        .context("failed to add note")?;
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&serde_json::json!({ "noted": text }));
    }
    println!("Post-it saved.");
    Ok(())
}

fn current(root: &Path, json: bool) -> anyhow::Result<()> {
    let state = AppState::load(root).context("failed to load state")?;

    if json {
        return print_json(&state.current_session);
    }
    match &state.current_session {
        Some(s) => {
            let elapsed = (Utc::now() - s.started_at).num_minutes().max(0);
            println!(
                "Running: {} of {} min, {} distractions, {} post-its",
                elapsed,
                s.planned_minutes,
                s.distractions.len(),
                s.post_its.len()
            );
        }
        None => println!("No session running."),
    }
    Ok(())
}

fn history(root: &Path, json: bool) -> anyhow::Result<()> {
    let state = AppState::load(root).context("failed to load state")?;

    if json {
        return print_json(&state.session_history);
    }
    if state.session_history.is_empty() {
        println!("No sessions yet.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = state
        .session_history
        .iter()
        .map(|s| {
            vec![
                s.started_at.format("%Y-%m-%d %H:%M").to_string(),
                format!("{}", s.planned_minutes),
                s.actual_minutes
                    .map(|m| m.to_string())
                    .unwrap_or_default(),
                format!("{}", s.distractions.len()),
                s.next_action.clone().unwrap_or_default(),
            ]
        })
        .collect();
    print_columns(&["STARTED", "PLANNED", "ACTUAL", "DISTRACTIONS", "NEXT"], &rows);
    Ok(())
}
