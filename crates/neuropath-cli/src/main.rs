use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use neuropath_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod context;

use context::AppContext;

#[derive(Parser)]
#[command(name = "neuropath", version, about = "NeuroPath CLI")]
struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_parser = commands::parse_date)]
    today: Option<NaiveDate>,
    /// Use an empty in-memory store instead of the database
    #[arg(long, global = true)]
    memory: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parent and child details
    Info {
        #[command(subcommand)]
        action: commands::info::InfoAction,
    },
    /// Guided exercises
    Exercise {
        #[command(subcommand)]
        action: commands::exercise::ExerciseAction,
    },
    /// Calming flower game
    Game {
        #[command(subcommand)]
        action: commands::game::GameAction,
    },
    /// Logs and progress
    Logs {
        #[command(subcommand)]
        action: commands::logs::LogsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing(config: &Config) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "neuropath", &mut std::io::stdout());
        return Ok(());
    }

    let (config, load_error) = match Config::load() {
        Ok(cfg) => (cfg, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_tracing(&config);

    if let Commands::Config { action } = cli.command {
        // A broken file must not be replaced by defaults plus one edit.
        if let Some(e) = load_error {
            if !matches!(action, commands::config::ConfigAction::Reset) {
                return Err(e.into());
            }
        }
        return commands::config::run(action, config);
    }
    if let Some(e) = &load_error {
        tracing::warn!(error = %e, "using default configuration");
    }

    let ctx = AppContext::open(config, cli.memory, cli.today)?;
    tracing::debug!(today = %ctx.today_key(), memory = cli.memory, "context ready");

    match cli.command {
        Commands::Info { action } => commands::info::run(action, &ctx),
        Commands::Exercise { action } => commands::exercise::run(action, &ctx),
        Commands::Game { action } => commands::game::run(action, &ctx),
        Commands::Logs { action } => commands::logs::run(action, &ctx),
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
