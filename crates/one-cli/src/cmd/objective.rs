use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use one_core::state::AppState;
use std::path::Path;
use std::str::FromStr;

pub fn progress(root: &Path, value: i64, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    let changed = state.update_progress(value, Utc::now());
    state.save(root).context("failed to save state")?;

    if json {
        let progress = state.objective.as_ref().map(|o| o.progress);
        return print_json(&serde_json::json!({ "changed": changed, "progress": progress }));
    }
    if changed {
        println!(
            "Progress: {}%",
            state.objective.as_ref().unwrap().progress
        );
    } else {
        println!("No active objective; progress unchanged.");
    }
    Ok(())
}

pub fn complete(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    let changed = state.complete_objective(Utc::now());
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&serde_json::json!({ "changed": changed }));
    }
    if changed {
        println!("Objective completed. Contract fulfilled.");
    } else {
        println!("Nothing to complete.");
    }
    Ok(())
}

pub fn fail(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    let changed = state.fail_objective(Utc::now());
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&serde_json::json!({ "changed": changed }));
    }
    if changed {
        println!("Objective marked failed. Contract broken.");
    } else {
        println!("Nothing to fail.");
    }
    Ok(())
}

pub fn reset(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    let changed = state.reset(Utc::now());
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&serde_json::json!({ "changed": changed }));
    }
    if changed {
        println!("Objective cleared. Ready for the next one.");
    } else {
        println!("Reset only applies to a completed or failed objective.");
    }
    Ok(())
}

pub fn cascade(root: &Path, field: &str, value: &str, json: bool) -> anyhow::Result<()> {
    let field = one_core::types::CascadeField::from_str(field)?;
    let mut state = AppState::load(root).context("failed to load state")?;
    state
        .edit_cascade(field, value, Utc::now())
        .context("failed to edit cascade")?;
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&serde_json::json!({ "field": field, "value": value }));
    }
    println!("Cascade updated: {} = {}", field, value);
    Ok(())
}
