use std::process::ExitCode;

use clap::Parser;
use pig_dice::cli::{self, Args};
use pig_dice::core::Result;
use pig_dice::events::ConsoleSink;
use pig_dice::prompt::ConsolePrompt;
use pig_dice::rules::Game;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = cli::log(args.log_level()) {
        eprintln!("logger unavailable: {e}");
    }
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("game aborted: {e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut game = Game::from_config(&args.config())?;
    game.play(&mut ConsolePrompt::new(), &mut ConsoleSink)?;
    Ok(())
}
