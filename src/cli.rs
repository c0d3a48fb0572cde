use crate::config::Config;
use lexopt::{Arg, Parser, ValueExt};
use log::LevelFilter;
use std::path::PathBuf;

pub(crate) const USAGE: &str = concat!(
    "Usage: wrapsnake [options]\n",
    "\n",
    "Play snake on a grid whose edges wrap around.\n",
    "\n",
    "Controls: arrow keys, wasd, or hjkl to steer; q or Ctrl-C to quit\n",
    "\n",
    "Options:\n",
    "  -c, --config <path>    Read configuration from the given file\n",
    "      --rows <n>         Number of rows in the grid\n",
    "      --cols <n>         Number of columns in the grid\n",
    "      --lives <n>        Number of lives\n",
    "      --flowers <n>      Number of flowers on the grid at once\n",
    "      --snake-length <n> Length of the snake at the start of each life\n",
    "      --log-file <path>  Write log messages to the given file\n",
    "      --log-level <lvl>  Minimum level of messages to log [default: info]\n",
    "  -h, --help             Show this help message and exit\n",
    "  -V, --version          Show the program version and exit\n",
);

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CliCommand {
    Run(Arguments),
    Help,
    Version,
}

impl CliCommand {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<CliCommand, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(CliCommand::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliCommand::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("rows") => args.rows = Some(parser.value()?.parse()?),
                Arg::Long("cols") => args.cols = Some(parser.value()?.parse()?),
                Arg::Long("lives") => args.lives = Some(parser.value()?.parse()?),
                Arg::Long("flowers") => args.flowers = Some(parser.value()?.parse()?),
                Arg::Long("snake-length") => args.snake_length = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("log-level") => args.log_level = Some(parser.value()?.parse()?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliCommand::Run(args))
    }
}

/// Options given on the command line for a game run
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    /// Configuration file given with `--config`
    pub(crate) config: Option<PathBuf>,
    pub(crate) rows: Option<u16>,
    pub(crate) cols: Option<u16>,
    pub(crate) lives: Option<u32>,
    pub(crate) flowers: Option<usize>,
    pub(crate) snake_length: Option<usize>,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) log_level: Option<LevelFilter>,
}

impl Arguments {
    /// Override the values in `config` with those given on the command line
    pub(crate) fn apply(self, mut config: Config) -> Config {
        if let Some(rows) = self.rows {
            config.game.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.game.cols = cols;
        }
        if let Some(lives) = self.lives {
            config.game.lives = lives;
        }
        if let Some(flowers) = self.flowers {
            config.game.flowers = flowers;
        }
        if let Some(length) = self.snake_length {
            config.game.snake_length = length;
        }
        if let Some(path) = self.log_file {
            config.log.file = Some(path);
        }
        if let Some(level) = self.log_level {
            config.log.level = level;
        }
        config
    }
}
