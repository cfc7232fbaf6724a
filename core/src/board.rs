use alloc::collections::VecDeque;
use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells together with the number of mines planted in it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Builds a `width × height` grid of hidden, mine-free cells.
    pub fn init_grid((width, height): Coord2) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidSize);
        }
        let cells = Array2::from_shape_fn((usize::from(width), usize::from(height)), |(x, y)| {
            Cell::new((x as Coord, y as Coord))
        });
        Ok(Self {
            cells,
            mine_count: 0,
            triggered_mine: None,
        })
    }

    /// Builds a board with mines at exactly `mine_coords` and adjacency computed.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::init_grid(size)?;
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.plant_mine(coords);
        }
        if board.mine_count >= board.total_cells() {
            return Err(GameError::TooManyMines);
        }
        board.compute_adjacency();
        Ok(board)
    }

    /// Plants `mines` additional mines on distinct random cells.
    ///
    /// Each pick draws a uniform cell and is rejected if it is already mined, so
    /// every accepted pick is uniform over the cells still free at that point.
    /// At least one cell must stay safe, otherwise nothing is planted.
    pub fn place_mines<R: Rng>(&mut self, mines: CellCount, rng: &mut R) -> Result<()> {
        let target = self.mine_count.saturating_add(mines);
        if target >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }

        let (width, height) = self.size();
        let mut attempts: u64 = 0;
        while self.mine_count < target {
            let coords = (rng.random_range(0..width), rng.random_range(0..height));
            attempts += 1;
            if !self[coords].has_mine() {
                self.plant_mine(coords);
            }
        }
        log::debug!("Placed {} mines in {} attempts", mines, attempts);
        Ok(())
    }

    /// Stores the mined-neighbor count on every safe cell.
    pub fn compute_adjacency(&mut self) {
        let (width, height) = self.size();
        for x in 0..width {
            for y in 0..height {
                let coords = (x, y);
                if self[coords].has_mine() {
                    continue;
                }
                // at most 8 neighbors
                let count = self
                    .neighbor_cells(coords)
                    .filter(|cell| cell.has_mine())
                    .count() as u8;
                self.cell_mut(coords).set_adjacent_mines(count);
            }
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    /// Cells in column-major order: `x` outer, `y` inner.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn neighbor_cells(&self, coords: Coord2) -> impl Iterator<Item = &Cell> {
        self.neighbors(coords).map(move |pos| &self[pos])
    }

    /// Cells not revealed yet, flagged ones included.
    pub fn hidden_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| !cell.is_revealed()).count() as CellCount
    }

    /// Every safe cell is revealed, only mines may remain hidden.
    pub fn is_won(&self) -> bool {
        self.hidden_count() == self.mine_count
    }

    /// Mine whose reveal lost the game, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// No safe cell is hidden; unlike [`Board::is_won`] this still holds after the
    /// whole board has been revealed.
    pub fn all_safe_revealed(&self) -> bool {
        self.cells.iter().all(|cell| cell.has_mine() || cell.is_revealed())
    }

    pub fn reveal_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reveal();
        }
    }

    /// Reveals a cell, flooding through zero-adjacency regions.
    ///
    /// Flagged or revealed cells are left alone. A mine reveals the whole board
    /// and loses; revealing the last safe cell reveals the whole board and wins.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = self[coords];
        if !cell.is_closed() {
            return Ok(RevealOutcome::NoChange);
        }

        let outcome = if cell.has_mine() {
            log::debug!("Mine hit at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.reveal_all();
            RevealOutcome::HitMine
        } else if cell.adjacent_mines() == 0 {
            self.flood_reveal(coords);
            RevealOutcome::Revealed
        } else {
            log::debug!("Revealed {:?}, adjacent mines: {}", coords, cell.adjacent_mines());
            self.cell_mut(coords).reveal();
            RevealOutcome::Revealed
        };

        Ok(outcome | self.check_won())
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        Ok(if self.cell_mut(coords).toggle_flag() {
            log::debug!("Flag toggled at {:?}", coords);
            MarkOutcome::Changed
        } else {
            MarkOutcome::NoChange
        })
    }

    fn flood_reveal(&mut self, start: Coord2) {
        self.cell_mut(start).reveal();
        let mut to_visit = VecDeque::from([start]);
        log::trace!("Starting flood-fill from {:?}", start);

        while let Some(center) = to_visit.pop_front() {
            for pos in self.neighbors(center) {
                let cell = self.cell_mut(pos);
                // a mined cell only passes if it claims zero adjacency
                if cell.is_closed() && (cell.adjacent_mines() == 0 || !cell.has_mine()) {
                    cell.reveal();
                    log::trace!("Flood revealed {:?}, adjacent mines: {}", pos, cell.adjacent_mines());
                    if cell.adjacent_mines() == 0 {
                        to_visit.push_back(pos);
                    }
                }
            }
        }
    }

    fn check_won(&mut self) -> RevealOutcome {
        if self.is_won() {
            self.reveal_all();
            RevealOutcome::Won
        } else {
            RevealOutcome::NoChange
        }
    }

    fn plant_mine(&mut self, coords: Coord2) {
        let cell = self.cell_mut(coords);
        if !cell.has_mine() {
            cell.plant_mine();
            self.mine_count += 1;
        }
    }

    fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl GridBounds for Board {
    fn bounds(&self) -> Coord2 {
        self.size()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
