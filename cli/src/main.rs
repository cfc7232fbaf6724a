use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use sweeper_core::*;

use command::Command;

mod command;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => GameConfig::beginner(),
            Preset::Intermediate => GameConfig::intermediate(),
            Preset::Expert => GameConfig::expert(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board settings to start from, explicit sizes override them
    #[arg(short, long, value_enum)]
    preset: Option<Preset>,

    /// Number of columns
    #[arg(long)]
    width: Option<Coord>,

    /// Number of rows
    #[arg(long)]
    height: Option<Coord>,

    /// Number of mines, must leave at least one safe cell
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn game_config(&self) -> sweeper_core::Result<GameConfig> {
        let base = self.preset.map(GameConfig::from).unwrap_or_default();
        GameConfig::new(
            (
                self.width.unwrap_or(base.width()),
                self.height.unwrap_or(base.height()),
            ),
            self.mines.unwrap_or(base.mines),
        )
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = args.game_config()?;
    let mut game = Game::new(config, args.seed.unwrap_or_else(rand::random))?;
    log::debug!("seed: {}", game.seed());

    let mut stdout = io::stdout().lock();
    render::draw(&mut stdout, &Snapshot::from_game(&game))?;
    prompt(&mut stdout)?;

    for line in io::stdin().lock().lines() {
        let command = match Command::parse_line(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => {
                prompt(&mut stdout)?;
                continue;
            }
            Err(err) => {
                write!(stdout, "{err}")?;
                prompt(&mut stdout)?;
                continue;
            }
        };

        match command {
            Command::Reveal { x, y } => match game.reveal((x, y)) {
                Ok(outcome) => {
                    render::draw(&mut stdout, &Snapshot::from_game(&game))?;
                    if let Some(message) = render::announce(outcome) {
                        writeln!(stdout, "{message} Type `new` to play again.")?;
                    }
                }
                Err(err) => writeln!(stdout, "{err}")?,
            },
            Command::Flag { x, y } => match game.toggle_flag((x, y)) {
                Ok(outcome) if outcome.has_update() => {
                    render::draw(&mut stdout, &Snapshot::from_game(&game))?
                }
                Ok(_) => {}
                Err(err) => writeln!(stdout, "{err}")?,
            },
            Command::New => {
                game.restart(rand::random())?;
                log::debug!("seed: {}", game.seed());
                render::draw(&mut stdout, &Snapshot::from_game(&game))?;
            }
            Command::Quit => break,
        }
        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
