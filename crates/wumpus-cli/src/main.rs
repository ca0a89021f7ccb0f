//! `wumpus`: run one logic-agent episode from the command line.
//!
//! The process exit code reports the outcome: 0 on victory, 1 on defeat,
//! 2 when the step limit is reached and 3 when the configuration is
//! rejected.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use wumpus_core::ActionKind;
use wumpus_engine::{Episode, EpisodeConfig, EpisodeReport, Outcome};

#[derive(Parser, Debug)]
#[command(
    name = "wumpus",
    version,
    about = "Run a knowledge-based agent through a generated Wumpus world"
)]
struct Cli {
    /// Side length of the square grid.
    #[arg(long, default_value_t = 4)]
    grid_size: u32,

    /// Seed for the layout generator.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Chance that any free cell holds a pit.
    #[arg(long, default_value_t = 0.2)]
    pit_probability: f64,

    /// Turn budget before the episode is cut off.
    #[arg(long, default_value_t = 1000)]
    max_steps: u64,

    /// Print the revealed board after the episode.
    #[arg(long)]
    show_board: bool,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> EpisodeConfig {
        EpisodeConfig {
            grid_size: self.grid_size,
            seed: self.seed,
            pit_probability: self.pit_probability,
            max_steps: self.max_steps,
            ..EpisodeConfig::default()
        }
    }

    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn exit_code(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Victory => 0,
        Outcome::Defeat => 1,
        Outcome::StepLimit => 2,
    }
}

fn summary(report: &EpisodeReport) -> String {
    let mut line = format!("{} after {} turns", report.outcome, report.turns);
    let counts: Vec<String> = ActionKind::ALL
        .iter()
        .filter(|&&a| report.metrics.count(a) > 0)
        .map(|&a| format!("{a}={}", report.metrics.count(a)))
        .collect();
    if !counts.is_empty() {
        line.push_str(" (");
        line.push_str(&counts.join(" "));
        line.push(')');
    }
    line
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let mut episode = match Episode::new(cli.config()) {
        Ok(episode) => episode,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("wumpus: {e}");
            return ExitCode::from(3);
        }
    };
    let report = episode.run();

    println!("{}", summary(&report));
    if cli.show_board {
        print!("{}", episode.field());
    }
    ExitCode::from(exit_code(report.outcome))
}
