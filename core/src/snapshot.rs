use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer may know about one cell. Mine and adjacency data stay
/// masked until the cell is revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub x: Coord,
    pub y: Coord,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub has_mine: bool,
    pub adjacent_mines: Option<u8>,
}

impl CellView {
    pub fn from_cell(cell: &Cell) -> Self {
        let has_mine = cell.is_revealed() && cell.has_mine();
        let adjacent_mines = (cell.is_revealed() && !cell.has_mine()).then(|| cell.adjacent_mines());
        Self {
            x: cell.x(),
            y: cell.y(),
            is_revealed: cell.is_revealed(),
            is_flagged: cell.is_flagged(),
            has_mine,
            adjacent_mines,
        }
    }

    pub fn glyph(&self) -> Glyph {
        if !self.is_revealed {
            return if self.is_flagged {
                Glyph::Flagged
            } else {
                Glyph::Hidden
            };
        }
        if self.has_mine {
            return Glyph::Mine;
        }
        match self.adjacent_mines {
            Some(count) if count > 0 => Glyph::Number(count),
            _ => Glyph::Empty,
        }
    }
}

/// Display category of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Hidden,
    Flagged,
    Mine,
    Empty,
    Number(u8),
}

/// Read-only copy of a session for rendering, indexed `[x, y]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub mines_left: i64,
    pub state: GameState,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_game(game: &Game) -> Self {
        let board = game.board();
        let (width, height) = board.size();
        let cells = Array2::from_shape_fn((usize::from(width), usize::from(height)), |(x, y)| {
            CellView::from_cell(&board[(x as Coord, y as Coord)])
        });

        Self {
            size: board.size(),
            mine_count: board.mine_count(),
            mines_left: game.mines_left(),
            state: game.state(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<&CellView> {
        self.cells.get(coords.to_nd_index())
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: Coord) -> impl Iterator<Item = &CellView> {
        (0..self.size.0).filter_map(move |x| self.cell((x, y)))
    }
}
