/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`, `x` being the column and `y` the row.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i32, i32), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Anything laid out on a `width × height` grid of [`Coord2`] positions.
pub trait GridBounds {
    /// `(width, height)`
    fn bounds(&self) -> Coord2;

    /// In-bounds neighbor coordinates of `coords`: 3 in a corner, 5 on an edge, 8 inside.
    ///
    /// The order is stable for a given position and grid shape, but callers may
    /// only rely on which positions are yielded, not on their sequence.
    fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.bounds())
    }
}

/// Iterates the in-bounds 8-neighborhood of `center`, skipping positions that fall off the grid.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_edge_and_interior_neighbor_counts() {
        let bounds = (5, 4);

        for corner in [(0, 0), (4, 0), (0, 3), (4, 3)] {
            assert_eq!(NeighborIter::new(corner, bounds).count(), 3, "{corner:?}");
        }
        for edge in [(2, 0), (0, 2), (4, 1), (3, 3)] {
            assert_eq!(NeighborIter::new(edge, bounds).count(), 5, "{edge:?}");
        }
        assert_eq!(NeighborIter::new((2, 2), bounds).count(), 8);
    }

    #[test]
    fn neighbors_stay_in_bounds_and_exclude_center() {
        let bounds = (3, 7);
        for x in 0..bounds.0 {
            for y in 0..bounds.1 {
                for (nx, ny) in NeighborIter::new((x, y), bounds) {
                    assert!(nx < bounds.0 && ny < bounds.1);
                    assert_ne!((nx, ny), (x, y));
                    assert!(nx.abs_diff(x) <= 1 && ny.abs_diff(y) <= 1);
                }
            }
        }
    }

    struct Strip(Coord);

    impl GridBounds for Strip {
        fn bounds(&self) -> Coord2 {
            (self.0, 1)
        }
    }

    #[test]
    fn grid_bounds_neighbors_use_shape() {
        assert_eq!(Strip(1).neighbors((0, 0)).count(), 0);
        assert_eq!(Strip(4).neighbors((0, 0)).count(), 1);
        assert_eq!(Strip(4).neighbors((2, 0)).count(), 2);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn single_row_neighbors() {
        let neighbors: [Option<Coord2>; 3] = {
            let mut iter = NeighborIter::new((1, 0), (3, 1));
            [iter.next(), iter.next(), iter.next()]
        };
        assert_eq!(neighbors, [Some((0, 0)), Some((2, 0)), None]);
    }

    #[test]
    fn mult_widens_to_cell_count() {
        assert_eq!(mult(3, 4), 12);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 4_294_836_225);
    }
}
