//! Best-move command - report the engine's choice for a position

use anyhow::Result;
use clap::Parser;

use super::{SearchArgs, parse_board};
use crate::{
    cli::output::{print_board, print_kv, print_section, print_subsection},
    minimax::Minimax,
    tictactoe::{Action, LineAnalyzer, Outcome},
};

#[derive(Parser, Debug)]
#[command(about = "Show the optimal move for a position")]
pub struct BestMoveArgs {
    /// Board as nine cells, row by row (e.g. "XO..X...." or "XO./.X./...")
    #[arg(long)]
    pub board: Option<String>,

    /// List every minimax-equivalent move and the immediate threats
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub search: SearchArgs,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = parse_board(args.board.as_deref())?;
    let config = args.search.resolve()?;
    let engine = Minimax::with_tie_break(config.tie_break);

    print_section("Best move");
    print_board(&board);
    println!();

    if let outcome @ (Outcome::Win(_) | Outcome::Draw) = board.outcome() {
        print_kv("Outcome", &describe_outcome(outcome));
        print_kv("Utility", &board.utility().to_string());
        return Ok(());
    }

    let player = board.current_player();
    print_kv("To move", &player.to_string());
    print_kv("Tie-break", &format!("{:?}", engine.tie_break()));

    if let Some(action) = engine.optimal_move(&board) {
        print_kv("Optimal move", &action.to_string());
    }
    print_kv("Game value", &engine.evaluate(&board).to_string());

    if args.all {
        print_subsection("All optimal moves");
        for action in engine.optimal_moves(&board) {
            println!("  - {action}");
        }

        print_subsection("Immediate lines");
        print_kv(
            "Wins available",
            &format_actions(LineAnalyzer::winning_moves(board.cells(), player)),
        );
        print_kv(
            "Threats to block",
            &format_actions(LineAnalyzer::winning_moves(
                board.cells(),
                player.opponent(),
            )),
        );
    }

    Ok(())
}

/// Human-readable outcome
pub fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(player) => format!("{player} wins"),
        Outcome::Draw => "draw".to_string(),
        Outcome::InProgress => "in progress".to_string(),
    }
}

fn format_actions(actions: impl IntoIterator<Item = Action>) -> String {
    let parts: Vec<String> = actions.into_iter().map(|a| a.to_string()).collect();
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn test_describe_outcome() {
        assert_eq!(describe_outcome(Outcome::Win(Player::O)), "O wins");
        assert_eq!(describe_outcome(Outcome::Draw), "draw");
    }

    #[test]
    fn test_format_actions() {
        assert_eq!(format_actions(Vec::new()), "none");
        assert_eq!(
            format_actions(vec![Action::new(0, 2), Action::new(2, 0)]),
            "(0, 2), (2, 0)"
        );
    }

    #[test]
    fn test_execute_on_finished_board() {
        let args = BestMoveArgs::try_parse_from(["best-move", "--board", "XXX/OO./..."]).unwrap();
        execute(args).unwrap();
    }
}
