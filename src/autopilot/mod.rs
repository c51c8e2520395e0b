//! The autopilot decision core
//!
//! Each tick the policy searches for a shortest path from the snake's
//! head to the food (A* over the 4-connected grid) and steers along it.
//! When no path exists it falls back to the legal immediate move that
//! keeps the most reachable space, and when every neighbor is blocked it
//! stalls and leaves the inevitable collision to the hosting loop.
//!
//! Everything in here is a pure function of the current `GameState`; no
//! search state survives a tick.

pub mod grid;
pub mod pathfinder;
pub mod policy;
pub mod space;

pub use grid::OccupancyGrid;
pub use pathfinder::shortest_path;
pub use policy::decide;
pub use space::reachable_area;
