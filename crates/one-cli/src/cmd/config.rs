use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use one_core::config::Config;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the current configuration and any warnings
    Show,
    /// Update defaults
    Set {
        /// Planned length of a focus session, in minutes
        #[arg(long)]
        session_minutes: Option<u32>,
        /// Planned focus sessions per day (1-5)
        #[arg(long)]
        sessions_per_day: Option<u32>,
    },
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Set {
            session_minutes,
            sessions_per_day,
        } => set(root, session_minutes, sessions_per_day, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let warnings = config.validate();

    if json {
        return print_json(&serde_json::json!({
            "config": config,
            "warnings": warnings,
        }));
    }
    println!("session minutes:  {}", config.default_session_minutes);
    println!("sessions per day: {}", config.default_sessions_per_day);
    for w in &warnings {
        println!("warning: {}", w.message);
    }
    Ok(())
}

fn set(
    root: &Path,
    session_minutes: Option<u32>,
    sessions_per_day: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = Config::load(root).context("failed to load config")?;
    if let Some(m) = session_minutes {
        config.default_session_minutes = m;
    }
    if let Some(n) = sessions_per_day {
        config.default_sessions_per_day = n;
    }
    config.save(root).context("failed to save config")?;

    if json {
        return print_json(&config);
    }
    println!("Config saved.");
    for w in config.validate() {
        println!("warning: {}", w.message);
    }
    Ok(())
}
