//! Solve command - compute the game value of every reachable position

use std::{collections::BTreeMap, fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use serde::Serialize;

use crate::{
    cli::{
        config::CommonConfig,
        output::{create_position_progress, format_number, print_kv, print_section},
    },
    minimax::Minimax,
    tictactoe::{Board, reachable_boards},
};

#[derive(Parser, Debug)]
#[command(about = "Solve every position reachable from the empty board")]
pub struct SolveArgs {
    /// Export the value of every position to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Game values of a set of positions, from X's point of view
#[derive(Debug, Clone, Default, Serialize)]
pub struct SolveReport {
    pub positions: usize,
    pub terminal: usize,
    pub x_wins: usize,
    pub draws: usize,
    pub o_wins: usize,
    pub values: BTreeMap<String, i32>,
}

/// Solve each board with a fresh minimax search
pub fn solve_positions(boards: &[Board], engine: &Minimax, progress: &ProgressBar) -> SolveReport {
    let mut report = SolveReport::default();

    for board in boards {
        let value = engine.evaluate(board);
        report.positions += 1;
        if board.is_terminal() {
            report.terminal += 1;
        }
        match value {
            1 => report.x_wins += 1,
            -1 => report.o_wins += 1,
            _ => report.draws += 1,
        }
        report.values.insert(board.encode(), value);
        progress.inc(1);
    }

    report
}

pub fn execute(args: SolveArgs, common: &CommonConfig) -> Result<()> {
    let boards = reachable_boards();
    log::info!("enumerated {} reachable positions", boards.len());

    let progress = create_position_progress(boards.len() as u64, common.progress)?;
    progress.set_message("solving");
    let report = solve_positions(&boards, &Minimax::new(), &progress);
    progress.finish_with_message("done");

    print_section("Solved positions");
    print_kv("Positions", &format_number(report.positions));
    print_kv("Terminal", &format_number(report.terminal));
    print_kv("X wins", &format_number(report.x_wins));
    print_kv("Draws", &format_number(report.draws));
    print_kv("O wins", &format_number(report.o_wins));
    let root = report.values.get(&Board::new().encode()).copied().unwrap_or(0);
    print_kv("Empty board value", &root.to_string());

    if let Some(path) = args.export {
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\nSolution exported to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_late_positions() {
        let boards: Vec<Board> = ["XOX/XOO/OX.", "XXX/OO./...", "XO./.X./..."]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let report = solve_positions(&boards, &Minimax::new(), &ProgressBar::hidden());
        assert_eq!(report.positions, 3);
        assert_eq!(report.terminal, 1);
        assert_eq!(report.x_wins, 2);
        assert_eq!(report.draws, 1);
        assert_eq!(report.values["XOXXOOOX."], 0);
        assert_eq!(report.values["XO..X...."], 1);
    }
}
