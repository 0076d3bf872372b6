// Grid positions and neighbor offsets.

/// A cell position on the board: row first, column second, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a signed (row, col) offset, returning `None` when the result
    /// falls outside a `rows` x `cols` board.
    pub fn offset(self, dr: isize, dc: isize, rows: usize, cols: usize) -> Option<Pos> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < rows && col < cols).then_some(Pos { row, col })
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The eight offsets surrounding a cell: all (dr, dc) with dr, dc in
/// {-1, 0, 1} except (0, 0).
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_in_bounds() {
        let p = Pos::new(0, 0);
        assert_eq!(p.offset(-1, 0, 3, 3), None);
        assert_eq!(p.offset(0, -1, 3, 3), None);
        assert_eq!(p.offset(1, 1, 3, 3), Some(Pos::new(1, 1)));

        let q = Pos::new(2, 2);
        assert_eq!(q.offset(1, 0, 3, 3), None);
        assert_eq!(q.offset(0, 1, 3, 3), None);
        assert_eq!(q.offset(-1, -1, 3, 3), Some(Pos::new(1, 1)));
    }

    #[test]
    fn eight_distinct_offsets() {
        let mut seen = std::collections::BTreeSet::new();
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            assert!(dr != 0 || dc != 0);
            assert!(seen.insert((dr, dc)));
        }
        assert_eq!(seen.len(), 8);
    }
}
