use clap::{Parser, Subcommand};
use sweeper_core::Coord;

/// One line typed at the prompt, the first word picks the command.
#[derive(Parser, Debug)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Reveal the cell at column X, row Y
    #[command(visible_alias = "r")]
    Reveal { x: Coord, y: Coord },
    /// Toggle the flag on the cell at column X, row Y
    #[command(visible_alias = "f")]
    Flag { x: Coord, y: Coord },
    /// Start over with the same board settings
    #[command(visible_alias = "n")]
    New,
    #[command(visible_alias = "q", alias = "exit")]
    Quit,
}

impl Command {
    /// Parses a prompt line; blank lines yield `None`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, clap::Error> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(None);
        }
        Line::try_parse_from(words).map(|line| Some(line.command))
    }
}
