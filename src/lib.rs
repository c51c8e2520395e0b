//! Snake Pilot - a self-driving controller for grid Snake
//!
//! This library provides:
//! - Core game logic (game module)
//! - The decision core: A* pathfinding to the food with a flood-fill
//!   survival fallback (autopilot module)
//! - Run statistics (metrics module)
//! - The fixed-interval tick runner (modes module)

pub mod autopilot;
pub mod game;
pub mod metrics;
pub mod modes;
