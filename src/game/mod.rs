//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or scheduling
//! dependencies. The autopilot reads `GameState` snapshots and the engine
//! applies the resulting decisions.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Decision, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepResult};
pub use state::{CollisionType, GameState, Position, Snake};
