//! Game-playing pipeline
//!
//! This module provides:
//! - Strategy implementations (minimax engine, random baseline)
//! - Game and matchup runners built on the [`Strategy`] port

pub mod matchup;
pub mod strategies;

pub use matchup::{MatchSummary, play_game, run_matchup};
pub use strategies::{OptimalStrategy, RandomStrategy};

pub use crate::ports::Strategy;
