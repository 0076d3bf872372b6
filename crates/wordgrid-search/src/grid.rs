// Board construction with precomputed adjacency.
//
// Each non-empty cell stores the full neighbor record (position, flat
// index, letter) so the search hot path never performs a lookup or a
// bounds check. Empty cells have no neighbors and are never referenced as
// neighbors, which is what lets irregular "waffle" boards work: a blank is
// a hole, not a wildcard.

use wordgrid_core::alphabet::is_board_letter;
use wordgrid_core::pos::{Pos, NEIGHBOR_OFFSETS};

use crate::GridError;

/// A neighbor of a non-empty cell. Always refers to a non-empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// Position of the neighboring cell.
    pub pos: Pos,
    /// Flat index of the neighboring cell, for visited bookkeeping.
    pub index: usize,
    /// The neighboring cell's letter.
    pub letter: char,
}

#[derive(Debug, Clone)]
struct Cell {
    /// `None` marks an empty (non-traversable) cell.
    letter: Option<char>,
    /// Non-empty 8-neighbors. Empty for empty cells.
    neighbors: Vec<Neighbor>,
}

/// An immutable board with precomputed 8-neighbor adjacency.
///
/// Built once per solve from the board's row strings; rows may be ragged
/// (short rows pad with empty cells) and any character outside the
/// lowercase alphabet is an empty cell.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from board row strings.
    ///
    /// Fails with [`GridError`] when the input has no rows or every row is
    /// empty; anything else builds, possibly with holes.
    pub fn build<S: AsRef<str>>(rows: &[S]) -> Result<Grid, GridError> {
        if rows.is_empty() {
            return Err(GridError::NoRows);
        }
        let height = rows.len();
        let width = rows
            .iter()
            .map(|r| r.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        if width == 0 {
            return Err(GridError::NoColumns);
        }

        // First pass: letters, with short rows padded as empty.
        let mut letters: Vec<Option<char>> = vec![None; height * width];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.as_ref().chars().enumerate() {
                if is_board_letter(ch) {
                    letters[r * width + c] = Some(ch);
                }
            }
        }

        // Second pass: adjacency, restricted to in-bounds non-empty cells.
        let mut cells = Vec::with_capacity(height * width);
        for r in 0..height {
            for c in 0..width {
                let letter = letters[r * width + c];
                let neighbors = if letter.is_some() {
                    let pos = Pos::new(r, c);
                    NEIGHBOR_OFFSETS
                        .iter()
                        .filter_map(|&(dr, dc)| {
                            let n = pos.offset(dr, dc, height, width)?;
                            let index = n.row * width + n.col;
                            letters[index].map(|letter| Neighbor {
                                pos: n,
                                index,
                                letter,
                            })
                        })
                        .collect()
                } else {
                    Vec::new()
                };
                cells.push(Cell { letter, neighbors });
            }
        }

        Ok(Grid {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Board height in rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board width in columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count including empty cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat index of a position.
    pub fn index_of(&self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }

    /// The letter at a position, `None` if the cell is empty.
    pub fn letter(&self, pos: Pos) -> Option<char> {
        self.cells[self.index_of(pos)].letter
    }

    /// Precomputed non-empty neighbors of a position.
    pub fn neighbors(&self, pos: Pos) -> &[Neighbor] {
        &self.cells[self.index_of(pos)].neighbors
    }

    /// Iterate over all non-empty cells in row-major order.
    pub fn letter_cells(&self) -> impl Iterator<Item = (Pos, char)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.letter
                .map(|letter| (Pos::new(i / self.cols, i % self.cols), letter))
        })
    }
}
