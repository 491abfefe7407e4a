//! CLI infrastructure for the tictactoe engine
//!
//! This module provides the command-line interface for querying the engine,
//! watching it play itself, measuring it against a random opponent and
//! solving every reachable position.

pub mod commands;
pub mod config;
pub mod output;
