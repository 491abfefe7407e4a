//! Self-play command - watch the engine play both sides

use anyhow::Result;
use clap::Parser;

use super::{SearchArgs, best_move::describe_outcome, parse_board};
use crate::{
    cli::output::{print_board, print_kv, print_section},
    pipeline::{OptimalStrategy, play_game},
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against itself")]
pub struct SelfPlayArgs {
    /// Starting board as nine cells (defaults to the empty board)
    #[arg(long)]
    pub board: Option<String>,

    #[command(flatten)]
    pub search: SearchArgs,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let start = parse_board(args.board.as_deref())?;
    let config = args.search.resolve()?;

    let mut x = OptimalStrategy::with_tie_break("Optimal X".to_string(), config.tie_break);
    let mut o = OptimalStrategy::with_tie_break("Optimal O".to_string(), config.tie_break);
    let game = play_game(&mut x, &mut o, start)?;

    print_section("Self-play");
    print_board(&start);

    let boards = game.boards()?;
    for (ply, (action, board)) in game.moves.iter().zip(boards.iter().skip(1)).enumerate() {
        let mover = boards[ply].current_player();
        println!("\nPly {}: {mover} plays {action}", ply + 1);
        print_board(board);
    }

    let last = boards.last().copied().unwrap_or(start);
    println!();
    print_kv("Moves played", &game.moves.len().to_string());
    print_kv("Outcome", &describe_outcome(last.outcome()));
    print_kv("Utility", &last.utility().to_string());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_play_from_late_position() {
        let args =
            SelfPlayArgs::try_parse_from(["self-play", "--board", "XOX/XOO/.X.", "--tie-break", "legacy"])
                .unwrap();
        execute(args).unwrap();
    }
}
