//! Command-line arguments and logger setup for the `pig` binary.

use clap::Parser;
use log::LevelFilter;

use crate::core::{GameConfig, GameMode};

/// Play Pig, the dice game, to 100 points.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pig", author, version, about, long_about = None)]
pub struct Args {
    /// First player: "human" or "computer".
    #[arg(long = "player1", value_name = "TYPE", default_value = "human")]
    pub player1: String,

    /// Second player: "human" or "computer".
    #[arg(long = "player2", value_name = "TYPE", default_value = "human")]
    pub player2: String,

    /// End each round after 60 seconds; the highest score wins.
    #[arg(long)]
    pub timed: bool,

    /// Seed the die for a reproducible game. Run with -v to see the seed
    /// a game without one was given.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log engine decisions to the terminal.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Game configuration for these arguments. Tags are validated later,
    /// when the game is built.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        GameConfig {
            players: [self.player1.clone(), self.player2.clone()],
            mode: if self.timed {
                GameMode::Timed
            } else {
                GameMode::Standard
            },
            seed: self.seed,
        }
    }

    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

/// Initialize terminal logging at `level`.
///
/// Log lines go to stderr so they don't interleave with game narration.
pub fn log(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}
