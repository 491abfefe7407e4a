//! Playing strategies against each other

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Board, Game, Outcome, Player, format_board},
};

/// Play one game from `start` until it is over.
///
/// `x` moves whenever the board says X is to move, `o` otherwise.
pub fn play_game(x: &mut dyn Strategy, o: &mut dyn Strategy, start: Board) -> Result<Game> {
    let mut game = Game::from_board(start);
    let mut board = start;

    while !board.is_terminal() {
        let mover: &mut dyn Strategy = match board.current_player() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let action = mover.select_move(&board)?;
        board = game.play(action)?;
        log::trace!("{} plays {action}: {}", mover.name(), format_board(&board));
    }

    Ok(game)
}

/// Tally of a series of games from the engine's side of the board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub engine: String,
    pub opponent: String,
    pub engine_player: Option<Player>,
    pub games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl MatchSummary {
    fn record(&mut self, outcome: Outcome, engine_player: Player) {
        self.games += 1;
        match outcome {
            Outcome::Win(winner) if winner == engine_player => self.wins += 1,
            Outcome::Win(_) => self.losses += 1,
            Outcome::Draw | Outcome::InProgress => self.draws += 1,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Play `games` games of `engine` against `opponent` from the empty board.
pub fn run_matchup(
    engine: &mut dyn Strategy,
    opponent: &mut dyn Strategy,
    engine_player: Player,
    games: usize,
) -> Result<MatchSummary> {
    let mut summary = MatchSummary {
        engine: engine.name().to_string(),
        opponent: opponent.name().to_string(),
        engine_player: Some(engine_player),
        ..MatchSummary::default()
    };

    for index in 0..games {
        let game = match engine_player {
            Player::X => play_game(engine, opponent, Board::new())?,
            Player::O => play_game(opponent, engine, Board::new())?,
        };
        let outcome = game.outcome()?;
        log::debug!("game {} finished in {} moves: {outcome:?}", index + 1, game.moves.len());
        summary.record(outcome, engine_player);
    }

    Ok(summary)
}
