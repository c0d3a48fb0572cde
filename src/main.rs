mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod util;
mod view;
use crate::app::{App, Outcome, TerminalEvents};
use crate::cli::{Arguments, CliCommand, USAGE};
use crate::config::{Config, LogConfig};
use crate::game::Game;
use crate::view::Palette;
use anyhow::Context;
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cmd = match CliCommand::from_parser(lexopt::Parser::from_env()) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("wrapsnake: {e}");
            eprintln!("Run `wrapsnake --help` for usage.");
            return ExitCode::from(2);
        }
    };
    match cmd {
        CliCommand::Help => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        CliCommand::Version => {
            println!("wrapsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        CliCommand::Run(args) => match run(args) {
            Ok(outcome) => {
                println!("Final score: {}", outcome.score);
                ExitCode::SUCCESS
            }
            Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("wrapsnake: {e:?}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(args: Arguments) -> anyhow::Result<Outcome> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false)?,
        None => Config::load(&Config::default_path()?, true)?,
    };
    let config = args.apply(config);
    init_logging(&config.log)?;
    let game = Game::new(config.game).context("invalid game settings")?;
    let mut terminal = ratatui::init();
    let r = App::new(game, Palette::default()).run(&mut terminal, &mut TerminalEvents);
    ratatui::restore();
    Ok(r?)
}

/// Send log messages to the configured file, if any.  The terminal is owned by
/// the game, so nothing is logged to stderr.
fn init_logging(cfg: &LogConfig) -> anyhow::Result<()> {
    if let Some(ref path) = cfg.file {
        let file = fs_err::File::create(path)?;
        WriteLogger::init(cfg.level, simplelog::Config::default(), file)
            .context("failed to initialize logging")?;
    }
    Ok(())
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
    })
}
