// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point speaking the engine's line protocol
//
// stdout carries the protocol; all logging goes to stderr.
// ═══════════════════════════════════════════════════════════════════════

mod config;
mod session;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use frontier_agents::{AdaptiveAgent, Agent, StallAgent, StrategyConfig};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "frontier", about = "Adaptive bot for the two-sided grid defense contest")]
struct Cli {
    /// Log decision details (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AgentKind {
    Adaptive,
    Stall,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game over stdin/stdout
    Play {
        #[arg(short, long, value_enum, default_value_t = AgentKind::Adaptive)]
        agent: AgentKind,
        /// Seed for agents that use randomness
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// JSON policy file overriding the built-in layout and parameters
        #[arg(short, long)]
        policy: Option<PathBuf>,
    },
    /// Feed recorded engine messages through an agent, commands to stdout
    Replay {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = AgentKind::Adaptive)]
        agent: AgentKind,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long)]
        policy: Option<PathBuf>,
    },
    /// Print the built-in policy as JSON
    DumpPolicy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play { agent, seed, policy } => cmd_play(agent, seed, policy),
        Commands::Replay { files, agent, seed, policy } => cmd_replay(&files, agent, seed, policy),
        Commands::DumpPolicy => cmd_dump_policy(),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn make_agent(kind: AgentKind, seed: u64, policy: Option<PathBuf>) -> Result<Box<dyn Agent>> {
    let agent: Box<dyn Agent> = match kind {
        AgentKind::Adaptive => Box::new(AdaptiveAgent::new(config::load_strategy(policy.as_deref())?)),
        AgentKind::Stall => Box::new(StallAgent::new(seed)),
    };
    Ok(agent)
}

fn cmd_play(kind: AgentKind, seed: u64, policy: Option<PathBuf>) -> Result<()> {
    let mut agent = make_agent(kind, seed, policy)?;
    let stats = session::run_session(&mut *agent, io::stdin().lock(), io::stdout().lock())?;
    tracing::info!(turns = stats.turns, skipped = stats.skipped, finished = stats.finished, "session closed");
    Ok(())
}

fn cmd_replay(files: &[PathBuf], kind: AgentKind, seed: u64, policy: Option<PathBuf>) -> Result<()> {
    for path in files {
        // Fresh agent per recording: rebuild queue and breach log are per game
        let mut agent = make_agent(kind, seed, policy.clone())?;
        let file = File::open(path).with_context(|| format!("opening replay {}", path.display()))?;
        let stats = session::run_session(&mut *agent, BufReader::new(file), io::stdout().lock())?;
        tracing::info!(
            replay = %path.display(),
            turns = stats.turns,
            action_frames = stats.action_frames,
            skipped = stats.skipped,
            "replay finished"
        );
    }
    Ok(())
}

fn cmd_dump_policy() -> Result<()> {
    let text = serde_json::to_string_pretty(&StrategyConfig::default())?;
    println!("{}", text);
    Ok(())
}
