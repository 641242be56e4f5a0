use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use clap::Subcommand;
use one_core::{roadmap::RoadmapPayload, state::AppState};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// Set the 4-1-1 (annual goals, monthly goals, weekly priorities)
    FourOneOne {
        /// Annual goal (repeatable)
        #[arg(long = "annual")]
        annual_goals: Vec<String>,
        /// Monthly goal (repeatable)
        #[arg(long = "monthly")]
        monthly_goals: Vec<String>,
        /// This week's priority (repeatable)
        #[arg(long = "weekly")]
        weekly_priorities: Vec<String>,
    },
    /// Set the GPS plan (goal, priorities, strategies)
    Gps {
        goal: String,
        /// Priority serving the goal (repeatable)
        #[arg(long = "priority")]
        priorities: Vec<String>,
        /// Strategy behind a priority (repeatable)
        #[arg(long = "strategy")]
        strategies: Vec<String>,
    },
    /// Score a productivity thief (0-10)
    Thief {
        /// inability_to_say_no | fear_of_chaos | poor_health_habits | unsupportive_environment
        thief: String,
        score: u8,
        #[arg(long)]
        note: Option<String>,
    },
    /// Append a weekly review
    Review {
        /// A win from this week (repeatable)
        #[arg(long = "win")]
        wins: Vec<String>,
        /// A lesson learned (repeatable)
        #[arg(long = "lesson")]
        lessons: Vec<String>,
        /// Focus for next week
        #[arg(long = "next")]
        next_focus: Option<String>,
    },
    /// Store a roadmap JSON payload (from a file, or stdin if omitted)
    Roadmap { file: Option<PathBuf> },
    /// Show all planning artifacts
    Show,
}

pub fn run(root: &Path, subcmd: PlanSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        PlanSubcommand::FourOneOne {
            annual_goals,
            monthly_goals,
            weekly_priorities,
        } => four_one_one(root, annual_goals, monthly_goals, weekly_priorities, json),
        PlanSubcommand::Gps {
            goal,
            priorities,
            strategies,
        } => gps(root, &goal, priorities, strategies, json),
        PlanSubcommand::Thief { thief, score, note } => {
            thief_score(root, &thief, score, note, json)
        }
        PlanSubcommand::Review {
            wins,
            lessons,
            next_focus,
        } => review(root, wins, lessons, next_focus, json),
        PlanSubcommand::Roadmap { file } => roadmap(root, file.as_deref(), json),
        PlanSubcommand::Show => show(root, json),
    }
}

fn four_one_one(
    root: &Path,
    annual: Vec<String>,
    monthly: Vec<String>,
    weekly: Vec<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    state
        .set_four_one_one(annual, monthly, weekly, Utc::now())
        .context("failed to set 4-1-1")?;
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&state.four_one_one);
    }
    println!("4-1-1 saved.");
    Ok(())
}

fn gps(
    root: &Path,
    goal: &str,
    priorities: Vec<String>,
    strategies: Vec<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    state
        .set_gps(goal, priorities, strategies, Utc::now())
        .context("failed to set GPS plan")?;
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&state.gps);
    }
    println!("GPS plan saved.");
    Ok(())
}

fn thief_score(
    root: &Path,
    thief: &str,
    score: u8,
    note: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let thief = one_core::planning::Thief::from_str(thief)?;
    let mut state = AppState::load(root).context("failed to load state")?;
    state
        .record_thief(thief, score, note, Utc::now())
        .context("failed to record thief score")?;
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&state.thieves);
    }
    println!("Scored {}: {}/10.", thief, score.min(10));
    Ok(())
}

fn review(
    root: &Path,
    wins: Vec<String>,
    lessons: Vec<String>,
    next_focus: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut state = AppState::load(root).context("failed to load state")?;
    state
        .add_weekly_review(wins, lessons, next_focus, Utc::now())
        .context("failed to add weekly review")?;
    state.save(root).context("failed to save state")?;

    if json {
        return print_json(&state.weekly_reviews.last());
    }
    println!("Weekly review recorded.");
    Ok(())
}

fn roadmap(root: &Path, file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read roadmap from stdin")?;
            buf
        }
    };
    let payload: RoadmapPayload =
        serde_json::from_str(&raw).context("invalid roadmap payload")?;

    let mut state = AppState::load(root).context("failed to load state")?;
    state
        .store_roadmap(payload, Utc::now())
        .context("failed to store roadmap")?;
    state.save(root).context("failed to save state")?;

    let stored = state.roadmap.as_ref().unwrap();
    if json {
        return print_json(stored);
    }
    println!(
        "Roadmap stored: {} milestones, {} risks, {} recommendations.",
        stored.milestones.len(),
        stored.risks.len(),
        stored.recommendations.len()
    );
    Ok(())
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let state = AppState::load(root).context("failed to load state")?;

    if json {
        return print_json(&serde_json::json!({
            "four_one_one": state.four_one_one,
            "gps": state.gps,
            "thieves": state.thieves,
            "weekly_reviews": state.weekly_reviews,
            "roadmap": state.roadmap,
        }));
    }

    if let Some(f) = &state.four_one_one {
        println!("4-1-1:");
        for g in &f.annual_goals {
            println!("  annual:  {}", g);
        }
        for g in &f.monthly_goals {
            println!("  monthly: {}", g);
        }
        for p in &f.weekly_priorities {
            println!("  weekly:  {}", p);
        }
    }
    if let Some(g) = &state.gps {
        println!("GPS: {}", g.goal);
        for p in &g.priorities {
            println!("  priority: {}", p);
        }
        for s in &g.strategies {
            println!("  strategy: {}", s);
        }
    }
    if let Some(t) = &state.thieves {
        println!("Thieves:");
        for s in &t.scores {
            match &s.note {
                Some(note) => println!("  {}: {}/10 ({})", s.thief, s.score, note),
                None => println!("  {}: {}/10", s.thief, s.score),
            }
        }
    }
    if !state.weekly_reviews.is_empty() {
        println!("Weekly reviews: {}", state.weekly_reviews.len());
    }
    if let Some(r) = &state.roadmap {
        println!("Roadmap ({} milestones):", r.milestones.len());
        for m in &r.milestones {
            println!("  - {}", m.title);
        }
    }
    if state.four_one_one.is_none()
        && state.gps.is_none()
        && state.thieves.is_none()
        && state.weekly_reviews.is_empty()
        && state.roadmap.is_none()
    {
        println!("No planning artifacts yet.");
    }
    Ok(())
}
