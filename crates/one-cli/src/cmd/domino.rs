use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use clap::Subcommand;
use one_core::state::AppState;
use std::path::Path;

#[derive(Subcommand)]
pub enum DominoSubcommand {
    /// Show the chain
    Show,
    /// Knock over one domino without a timed session
    Advance,
    /// Set planned sessions per day (clamped to 1-5)
    Pace { n: u32 },
}

pub fn run(root: &Path, subcmd: DominoSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        DominoSubcommand::Show => show(root, json),
        DominoSubcommand::Advance => advance(root, json),
        DominoSubcommand::Pace { n } => pace(root, n, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let state = AppState::load(root).context("failed to load state")?;

    if json {
        return print_json(&state.domino);
    }
    match &state.domino {
        Some(chain) => {
            println!(
                "Dominos: {}/{} ({}%, {} per day)",
                chain.completed_dominos,
                chain.total_dominos,
                chain.capped_progress(),
                chain.sessions_per_day
            );
            if let Some(last) = chain.last_session_date {
                println!("Last knocked over: {}", last.format("%Y-%m-%d %H:%M"));
            }
        }
        None => println!("No domino chain. Run: one define"),
    }
    Ok(())
}

fn advance(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    state
        .advance(Utc::now())
        .context("failed to advance the chain")?;
    state.save(root).context("failed to save state")?;

    let chain = state.domino.as_ref().unwrap();
    if json {
        return print_json(chain);
    }
    println!(
        "Domino down: {}/{} ({}%)",
        chain.completed_dominos,
        chain.total_dominos,
        chain.capped_progress()
    );
    Ok(())
}

fn pace(root: &Path, n: u32, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    let pace = state
        .set_sessions_per_day(n, Utc::now())
        .context("failed to set pace")?;
    state.save(root).context("failed to save state")?;

    let chain = state.domino.as_ref().unwrap();
    if json {
        return print_json(&serde_json::json!({
            "sessions_per_day": pace,
            "total_dominos": chain.total_dominos,
        }));
    }
    if pace != n {
        println!("Pace clamped to {} sessions per day.", pace);
    }
    println!("Chain recomputed: {} dominos total.", chain.total_dominos);
    Ok(())
}
