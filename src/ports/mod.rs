//! Ports (trait boundaries) between the engine and the code that drives it.

pub mod strategy;

pub use strategy::Strategy;
