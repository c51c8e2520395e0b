use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake_pilot::game::GameConfig;
use snake_pilot::modes::{AutopilotConfig, AutopilotMode};

#[derive(Parser)]
#[command(name = "snake-pilot")]
#[command(version, about = "Self-driving Snake on a fixed-interval tick")]
struct Cli {
    /// Controller mode (currently only 'auto' is implemented)
    #[arg(long, default_value = "auto")]
    mode: Mode,

    /// Grid width
    #[arg(long, default_value = "25")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "25")]
    height: usize,

    /// Milliseconds between ticks
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Stop after this many episodes instead of running until Ctrl+C
    #[arg(long)]
    episodes: Option<u32>,

    /// Print a progress line every N finished episodes
    #[arg(long, default_value = "1")]
    log_every: u32,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// The snake drives itself
    Auto,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut game_config = GameConfig::new(cli.width, cli.height);
    game_config.tick_interval_ms = cli.tick_ms;

    match cli.mode {
        Mode::Auto => {
            let mut config = AutopilotConfig::new(game_config);
            config.max_episodes = cli.episodes;
            config.log_frequency = cli.log_every;

            let mut autopilot_mode = AutopilotMode::new(config);
            autopilot_mode.run().await?;
        }
    }

    Ok(())
}
