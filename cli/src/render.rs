use std::io::{self, Write};

use sweeper_core::*;

pub fn glyph_char(glyph: Glyph) -> char {
    match glyph {
        Glyph::Hidden => '#',
        Glyph::Flagged => 'F',
        Glyph::Mine => '*',
        Glyph::Empty => '.',
        Glyph::Number(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
    }
}

/// End-of-game message for a terminal outcome.
pub fn announce(outcome: RevealOutcome) -> Option<&'static str> {
    match outcome {
        RevealOutcome::HitMine => Some("Game over!"),
        RevealOutcome::Won => Some("You win!"),
        RevealOutcome::NoChange | RevealOutcome::Revealed => None,
    }
}

/// Draws the grid with column and row indices, then the mine counter.
pub fn draw(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    let (width, height) = snapshot.size;
    let pad = width.max(height).saturating_sub(1).to_string().len();

    write!(out, "{:>pad$}", "")?;
    for x in 0..width {
        write!(out, " {x:>pad$}")?;
    }
    writeln!(out)?;

    for y in 0..height {
        write!(out, "{y:>pad$}")?;
        for cell in snapshot.row(y) {
            write!(out, " {:>pad$}", glyph_char(cell.glyph()))?;
        }
        writeln!(out)?;
    }
    writeln!(out, "Mines left: {}", snapshot.mines_left)
}
