/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Position in an `ndarray` grid indexed by `(row, col)`.
pub trait GridIndex {
    fn grid_index(self) -> [usize; 2];
}

impl GridIndex for Coord2 {
    fn grid_index(self) -> [usize; 2] {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a `size` board. Cannot overflow since each side is at most 255.
pub const fn cell_total(size: Coord2) -> CellCount {
    size.0 as CellCount * size.1 as CellCount
}

/// Caller-supplied coordinates, checked against a board size before use.
///
/// Implemented for pairs of every primitive integer type so that negative or
/// oversized input reaches the bounds check instead of failing to type-check.
pub trait IntoCoords {
    fn into_coords(self, size: Coord2) -> Option<Coord2>;
}

macro_rules! impl_into_coords {
    ($($int:ty),* $(,)?) => {
        $(
            impl IntoCoords for ($int, $int) {
                fn into_coords(self, (rows, cols): Coord2) -> Option<Coord2> {
                    let row = Coord::try_from(self.0).ok()?;
                    let col = Coord::try_from(self.1).ok()?;
                    (row < rows && col < cols).then_some((row, col))
                }
            }
        )*
    };
}

impl_into_coords!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Whether `a` and `b` are the same cell or touch, diagonals included.
pub fn is_within_one(a: Coord2, b: Coord2) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

/// The up-to-8 in-bounds neighbors of `center` on a `bounds`-sized board, in row-major order.
///
/// Walks the 3x3 window around `center`, clipped to the board edges.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    let (rows, cols) = bounds;
    let window = |mid: Coord, end: Coord| {
        (mid.saturating_sub(1)..=mid.saturating_add(1)).filter(move |&pos| pos < end)
    };

    window(row, rows)
        .flat_map(move |r| window(col, cols).map(move |c| (r, c)))
        .filter(move |&pos| pos != center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = neighbors((0, 0), (5, 5)).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn interior_cell_has_eight_neighbors_without_itself() {
        let neighbors: Vec<_> = neighbors((2, 2), (5, 5)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(2, 2)));
        assert!(neighbors.iter().all(|&pos| is_within_one(pos, (2, 2))));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn into_coords_rejects_negative_and_oversized() {
        assert_eq!((-1i32, 0i32).into_coords((3, 3)), None);
        assert_eq!((0usize, 3usize).into_coords((3, 3)), None);
        assert_eq!((300i32, 0i32).into_coords((3, 3)), None);
        assert_eq!((2i64, 1i64).into_coords((3, 3)), Some((2, 1)));
        assert_eq!((2u8, 2u8).into_coords((3, 3)), Some((2, 2)));
    }

    #[test]
    fn largest_board_counts_every_cell() {
        assert_eq!(cell_total((255, 255)), 65025);
        assert_eq!(cell_total((3, 0)), 0);
    }
}
