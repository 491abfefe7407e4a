//! Subcommands of the `tictactoe` binary

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::{
    cli::config::SearchConfig,
    minimax::TieBreak,
    tictactoe::{Board, Player},
};

pub mod best_move;
pub mod evaluate;
pub mod self_play;
pub mod solve;

/// Search options shared by commands that run the engine
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// JSON file with search settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tie-break policy between equally valued actions (overrides --config)
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreak>,
}

impl SearchArgs {
    /// Merge the config file (if any) with command-line overrides
    pub fn resolve(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path)
                .with_context(|| format!("loading search config from {}", path.display()))?,
            None => SearchConfig::default(),
        };
        if let Some(tie_break) = self.tie_break {
            config.tie_break = tie_break;
        }
        Ok(config)
    }
}

/// Player token accepted on the command line
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum PlayerArg {
    X,
    O,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}

/// Parse an optional `--board` argument, defaulting to the empty board
pub fn parse_board(board: Option<&str>) -> Result<Board> {
    match board {
        Some(s) => s
            .parse::<Board>()
            .with_context(|| format!("parsing board '{s}'")),
        None => Ok(Board::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_default_is_empty() {
        assert_eq!(parse_board(None).unwrap(), Board::new());
        assert!(parse_board(Some("XX")).is_err());
    }

    #[test]
    fn test_tie_break_override() {
        let args = SearchArgs {
            config: None,
            tie_break: Some(TieBreak::Legacy),
        };
        assert_eq!(args.resolve().unwrap().tie_break, TieBreak::Legacy);
        assert_eq!(
            SearchArgs::default().resolve().unwrap().tie_break,
            TieBreak::FirstWins
        );
    }
}
