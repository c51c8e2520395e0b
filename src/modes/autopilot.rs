//! Autopilot mode: the fixed-interval tick loop
//!
//! Owns the game state between ticks and drives exactly one
//! decide -> step -> (reset) cycle per interval. The decision core runs
//! to completion inside the tick and carries nothing across ticks; when
//! an episode ends in a collision the board is reseeded and the run
//! continues until Ctrl+C or the configured episode limit.

use anyhow::Result;
use std::time::Duration;
use tokio::time::interval;

use crate::autopilot;
use crate::game::{GameConfig, GameEngine, GameState};
use crate::metrics::GameMetrics;

/// Configuration for autopilot mode
#[derive(Debug, Clone)]
pub struct AutopilotConfig {
    /// Stop after this many episodes; run until interrupted when `None`
    pub max_episodes: Option<u32>,

    /// Print a progress line every N finished episodes
    pub log_frequency: u32,

    /// Game configuration (grid size, tick interval)
    pub game_config: GameConfig,
}

impl AutopilotConfig {
    pub fn new(game_config: GameConfig) -> Self {
        Self {
            max_episodes: None,
            log_frequency: 1,
            game_config,
        }
    }
}

/// Autopilot mode hosting the engine and the decision core
pub struct AutopilotMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    config: AutopilotConfig,
    episodes_finished: u32,
    should_quit: bool,
}

impl AutopilotMode {
    pub fn new(config: AutopilotConfig) -> Self {
        let mut engine = GameEngine::new(config.game_config.clone());
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            config,
            episodes_finished: 0,
            should_quit: false,
        }
    }

    /// Run the tick loop until interrupted or the episode limit is hit
    pub async fn run(&mut self) -> Result<()> {
        let tick_interval = Duration::from_millis(self.config.game_config.tick_interval_ms);
        let mut tick_timer = interval(tick_interval);

        loop {
            tokio::select! {
                _ = tick_timer.tick() => {
                    self.advance_tick();
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        self.print_summary();
        Ok(())
    }

    /// One decide -> step -> (reset) cycle
    fn advance_tick(&mut self) {
        let decision = autopilot::decide(&self.state);
        let result = self.engine.step(&mut self.state, decision);
        self.metrics.update();

        if result.collision.is_some() {
            self.finish_episode();
        }
    }

    /// Record the crashed episode and reseed the board
    fn finish_episode(&mut self) {
        self.metrics.on_game_over(self.state.score, self.state.ticks);
        self.episodes_finished += 1;

        if self.episodes_finished % self.config.log_frequency.max(1) == 0 {
            println!(
                "episode {:>4}  score {:>3}  ticks {:>5}  time {}  high {:>3}",
                self.episodes_finished,
                self.state.score,
                self.state.ticks,
                self.metrics.format_time(),
                self.metrics.high_score,
            );
        }

        if let Some(limit) = self.config.max_episodes {
            if self.episodes_finished >= limit {
                self.should_quit = true;
                return;
            }
        }

        self.state = self.engine.reset();
        self.metrics.on_game_start();
    }

    fn print_summary(&self) {
        println!();
        println!("episodes:    {}", self.metrics.games_played);
        println!("high score:  {}", self.metrics.high_score);
        println!("total ticks: {}", self.metrics.total_ticks);
    }
}
