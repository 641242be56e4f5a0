mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    config::ConfigSubcommand, domino::DominoSubcommand, habit::HabitSubcommand,
    plan::PlanSubcommand, session::SessionSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "one",
    about = "Single-objective commitment tracker: one goal, one chain of dominos",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .one/ or .git/)
    #[arg(long, global = true, env = "ONE_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the tracker in the current project
    Init,

    /// Define the one objective (rejected while another is active)
    Define(cmd::define::DefineArgs),

    /// Show the objective, domino chain, and contract health
    Status,

    /// Set objective progress (0-100; ignored unless active)
    Progress { value: i64 },

    /// Mark the objective completed (forces progress to 100)
    Complete,

    /// Mark the objective failed
    Fail,

    /// Clear a completed or failed objective and its artifacts
    Reset,

    /// Edit one cascade field: someday, month, week, today, or now
    Cascade { field: String, value: String },

    /// Track focus sessions
    Session {
        #[command(subcommand)]
        subcommand: SessionSubcommand,
    },

    /// Inspect or advance the domino chain
    Domino {
        #[command(subcommand)]
        subcommand: DominoSubcommand,
    },

    /// Evaluate the contract tension meter
    Contract,

    /// Run the 66-day habit challenge
    Habit {
        #[command(subcommand)]
        subcommand: HabitSubcommand,
    },

    /// Manage planning artifacts (4-1-1, GPS, thieves, reviews, roadmap)
    Plan {
        #[command(subcommand)]
        subcommand: PlanSubcommand,
    },

    /// Show or edit configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Define(args) => cmd::define::run(&root, args, cli.json),
        Commands::Status => cmd::status::run(&root, cli.json),
        Commands::Progress { value } => cmd::objective::progress(&root, value, cli.json),
        Commands::Complete => cmd::objective::complete(&root, cli.json),
        Commands::Fail => cmd::objective::fail(&root, cli.json),
        Commands::Reset => cmd::objective::reset(&root, cli.json),
        Commands::Cascade { field, value } => {
            cmd::objective::cascade(&root, &field, &value, cli.json)
        }
        Commands::Session { subcommand } => cmd::session::run(&root, subcommand, cli.json),
        Commands::Domino { subcommand } => cmd::domino::run(&root, subcommand, cli.json),
        Commands::Contract => cmd::contract::run(&root, cli.json),
        Commands::Habit { subcommand } => cmd::habit::run(&root, subcommand, cli.json),
        Commands::Plan { subcommand } => cmd::plan::run(&root, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
