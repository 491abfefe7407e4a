//! Tic-Tac-Toe CLI - perfect play through exhaustive minimax
//!
//! This CLI provides:
//! - The optimal move for any position
//! - Engine self-play from a position
//! - Evaluation against a random opponent
//! - A full solve of every reachable position

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tictactoe::cli::{commands, config::CommonConfig};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Perfect-play Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CommonArgs {
    /// Random seed for reproducibility
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Hide progress bars
    #[arg(long, global = true)]
    no_progress: bool,

    /// Log search decisions (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

impl From<CommonArgs> for CommonConfig {
    fn from(args: CommonArgs) -> Self {
        CommonConfig {
            seed: args.seed,
            progress: !args.no_progress,
            verbose: args.verbose,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the optimal move for a position
    BestMove(commands::best_move::BestMoveArgs),

    /// Play the engine against itself
    SelfPlay(commands::self_play::SelfPlayArgs),

    /// Play the engine against a random opponent
    Evaluate(commands::evaluate::EvaluateArgs),

    /// Solve every reachable position
    Solve(commands::solve::SolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let common = CommonConfig::from(cli.common);

    env_logger::Builder::new()
        .filter_level(common.default_log_level())
        .parse_default_env()
        .init();

    match cli.command {
        Commands::BestMove(args) => commands::best_move::execute(args),
        Commands::SelfPlay(args) => commands::self_play::execute(args),
        Commands::Evaluate(args) => commands::evaluate::execute(args, &common),
        Commands::Solve(args) => commands::solve::execute(args, &common),
    }
}
