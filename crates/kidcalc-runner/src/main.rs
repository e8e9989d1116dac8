//! `kidcalc` - run the arithmetic and error-handling demos in a terminal.

use clap::{Parser, Subcommand};
use kidcalc_runner::{
    build_session, demos, run_demos, select, write_transcript, Overrides, RunnerConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "kidcalc", version, about = "Arithmetic and error-handling lessons on the console")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pacing speed multiplier (2.0 halves every pause).
    #[arg(long, global = true)]
    speed: Option<f64>,

    /// Do not pause at all.
    #[arg(long, global = true)]
    fast: bool,

    /// Disable coloured output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Write the console transcript to this file as JSON.
    #[arg(long, global = true)]
    transcript: Option<PathBuf>,

    /// Increase diagnostic logging on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available demos.
    List,
    /// Run demos by id, in the order given.
    Run {
        /// Demo ids; none means every demo.
        demos: Vec<String>,

        /// Run every demo.
        #[arg(long, conflicts_with = "demos")]
        all: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> kidcalc_runner::Result<RunnerConfig> {
    let mut config = match &cli.config {
        Some(path) => RunnerConfig::from_file(path)?,
        None => RunnerConfig::default(),
    };
    config.apply(&Overrides {
        speed: cli.speed,
        fast: cli.fast,
        no_color: cli.no_color,
    })?;
    Ok(config)
}

fn run(cli: Cli) -> kidcalc_runner::Result<()> {
    let config = load_config(&cli)?;
    let registry = demos(&config);

    match cli.command {
        Command::List => {
            for demo in &registry {
                let info = demo.info();
                println!("{:<16} {:<16} {}", info.id, info.tag, info.title);
            }
        }
        Command::Run { demos: ids, all } => {
            let ids = if all { Vec::new() } else { ids };
            let selected = select(registry, &ids)?;
            let mut session = build_session(&config);
            let summary = run_demos(&selected, &mut session);
            tracing::info!(
                demos = summary.runs.len(),
                warnings = summary.total_warnings(),
                errors = summary.total_errors(),
                "run complete"
            );
            if let Some(path) = &cli.transcript {
                write_transcript(path, session.transcript())?;
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
