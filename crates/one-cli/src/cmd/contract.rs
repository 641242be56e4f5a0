use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use one_core::state::AppState;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    let meter = state
        .evaluate_contract(Utc::now())
        .context("failed to evaluate contract")?
        .clone();
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&meter);
    }
    println!("Contract: {}", meter.state);
    println!("  Tension:       {}/100", meter.tension_level);
    println!("  Days inactive: {}", meter.days_inactive);
    println!(
        "  Last activity: {}",
        meter.last_activity_date.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}
