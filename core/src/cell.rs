use serde::{Deserialize, Serialize};

use crate::*;

/// One grid position with its mine, reveal, flag and adjacency state.
///
/// Only the board mutates cells: `has_mine` and `adjacent_mines` are fixed at
/// generation, `is_revealed` only goes from `false` to `true`, and
/// `is_flagged` only changes while the cell is hidden.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    has_mine: bool,
    is_revealed: bool,
    is_flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub(crate) const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            has_mine: false,
            is_revealed: false,
            is_flagged: false,
            adjacent_mines: 0,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn x(&self) -> Coord {
        self.coords.0
    }

    pub const fn y(&self) -> Coord {
        self.coords.1
    }

    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Mined neighbors counted at generation; meaningless on a mined cell.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    /// Hidden and unflagged, the only state a reveal acts on.
    pub const fn is_closed(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    pub(crate) fn plant_mine(&mut self) {
        self.has_mine = true;
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    pub(crate) fn reveal(&mut self) {
        self.is_revealed = true;
    }

    /// Flips the flag on a hidden cell, returns whether anything changed.
    pub(crate) fn toggle_flag(&mut self) -> bool {
        if self.is_revealed {
            return false;
        }
        self.is_flagged = !self.is_flagged;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_hidden_and_empty() {
        let cell = Cell::new((3, 1));

        assert_eq!(cell.coords(), (3, 1));
        assert_eq!((cell.x(), cell.y()), (3, 1));
        assert!(!cell.has_mine());
        assert!(!cell.is_revealed());
        assert!(!cell.is_flagged());
        assert_eq!(cell.adjacent_mines(), 0);
        assert!(cell.is_closed());
    }

    #[test]
    fn toggle_flag_twice_restores_hidden() {
        let mut cell = Cell::new((0, 0));

        assert!(cell.toggle_flag());
        assert!(cell.is_flagged());
        assert!(!cell.is_closed());
        assert!(cell.toggle_flag());
        assert!(!cell.is_flagged());
    }

    #[test]
    fn flag_is_frozen_once_revealed() {
        let mut cell = Cell::new((0, 0));
        cell.toggle_flag();
        cell.reveal();

        assert!(!cell.toggle_flag());
        assert!(cell.is_flagged());
        assert!(cell.is_revealed());
    }
}
