pub mod autopilot;

pub use autopilot::{AutopilotConfig, AutopilotMode};
