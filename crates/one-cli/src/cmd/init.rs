use anyhow::Context;
use one_core::{config::Config, io, paths, state::AppState};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing in: {}", root.display());

    let one_dir = paths::one_dir(root);
    io::ensure_dir(&one_dir)
        .with_context(|| format!("failed to create {}", one_dir.display()))?;

    let config_path = paths::config_path(root);
    if !config_path.exists() {
        Config::default()
            .save(root)
            .context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }

    let state_path = paths::state_path(root);
    if !state_path.exists() {
        AppState::new()
            .save(root)
            .context("failed to write state.json")?;
        println!("  created: {}", paths::STATE_FILE);
    } else {
        println!("  exists:  {}", paths::STATE_FILE);
    }

    println!("\nInitialized.");
    println!("Next: one define --title \"...\" --deadline YYYY-MM-DD");

    Ok(())
}
