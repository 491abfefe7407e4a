//! Evaluate command - measure the engine against a random opponent

use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

use super::{PlayerArg, SearchArgs};
use crate::{
    cli::{
        config::CommonConfig,
        output::{print_kv, print_section},
    },
    pipeline::{MatchSummary, OptimalStrategy, RandomStrategy, run_matchup},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against a uniformly random opponent")]
pub struct EvaluateArgs {
    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 20)]
    pub games: usize,

    /// Which token the engine controls
    #[arg(long, value_enum, default_value = "x")]
    pub engine_player: PlayerArg,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    #[command(flatten)]
    pub search: SearchArgs,
}

pub fn execute(args: EvaluateArgs, common: &CommonConfig) -> Result<()> {
    let config = args.search.resolve()?;
    let engine_player = Player::from(args.engine_player);

    let mut engine = OptimalStrategy::with_tie_break("Optimal".to_string(), config.tie_break);
    let mut opponent = match common.seed {
        Some(seed) => RandomStrategy::with_seed("Random".to_string(), seed),
        None => RandomStrategy::new("Random".to_string()),
    };

    print_section("Evaluation");
    print_kv("Engine plays", &engine_player.to_string());
    print_kv("Games", &args.games.to_string());
    if let Some(seed) = common.seed {
        print_kv("Seed", &seed.to_string());
    }

    let summary = run_matchup(&mut engine, &mut opponent, engine_player, args.games)?;
    print_summary(&summary);

    if let Some(path) = args.export {
        export_summary(&summary, &path)?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}

fn print_summary(summary: &MatchSummary) {
    println!();
    print_kv("Wins", &summary.wins.to_string());
    print_kv("Draws", &summary.draws.to_string());
    print_kv("Losses", &summary.losses.to_string());
    print_kv("Win rate", &format!("{:.1}%", summary.win_rate() * 100.0));
}

/// Write a match summary as pretty-printed JSON
pub fn export_summary(summary: &MatchSummary, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), summary)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = EvaluateArgs::try_parse_from(["evaluate"]).unwrap();
        assert_eq!(args.games, 20);
        assert_eq!(args.engine_player, PlayerArg::X);
        assert!(args.export.is_none());
    }

    #[test]
    fn test_export_summary_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let summary = MatchSummary {
            engine: "Optimal".to_string(),
            opponent: "Random".to_string(),
            engine_player: Some(Player::O),
            games: 3,
            wins: 2,
            draws: 1,
            losses: 0,
        };
        export_summary(&summary, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: MatchSummary = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, summary);
    }
}
