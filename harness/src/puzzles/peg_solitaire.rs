//! `PegSolitaire`: peg solitaire on a rectangular grid.
//!
//! A peg jumps over an adjacent peg into an empty cell two away; the
//! jumped peg is removed. The board is solved when exactly one peg
//! remains. Grids are written with the classic markers: `*` peg, `.`
//! empty, `#` unused.
//!
//! Jump enumeration scans empty cells row-major and tries sources from
//! above, below, left, then right of each one, so move order is a fixed
//! function of the grid.

use quarry_solver::contract::{IllegalMove, Puzzle};
use quarry_solver::fingerprint::{digest, Fingerprint};

const DOMAIN_PEG: &[u8] = b"QUARRY::PEG_SOLITAIRE::V1\0";

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A peg (`*`).
    Peg,
    /// An empty cell a peg can land in (`.`).
    Empty,
    /// Off-board filler (`#`).
    Unused,
}

impl Cell {
    fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '*' => Some(Self::Peg),
            '.' => Some(Self::Empty),
            '#' => Some(Self::Unused),
            _ => None,
        }
    }

    fn encode(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Peg => 1,
            Self::Unused => 2,
        }
    }
}

/// A peg jump from a source cell, over its neighbor, into an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    /// `(row, col)` of the jumping peg.
    pub from: (usize, usize),
    /// `(row, col)` of the empty landing cell, two away in a straight
    /// line.
    pub to: (usize, usize),
}

impl Jump {
    /// The cell the jump passes over.
    #[must_use]
    pub fn over(&self) -> (usize, usize) {
        ((self.from.0 + self.to.0) / 2, (self.from.1 + self.to.1) / 2)
    }

    fn is_straight_double(&self) -> bool {
        let row_span = self.from.0.abs_diff(self.to.0);
        let col_span = self.from.1.abs_diff(self.to.1);
        (row_span == 2 && col_span == 0) || (row_span == 0 && col_span == 2)
    }
}

impl std::fmt::Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{})->({},{})",
            self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

/// A peg solitaire board snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegSolitaire {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl PegSolitaire {
    /// Parse a board from marker rows (`*` peg, `.` empty, `#` unused).
    ///
    /// # Panics
    ///
    /// Panics if the grid is empty, the rows are ragged, or a row holds a
    /// marker other than `*`, `.`, `#`.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(!rows.is_empty(), "board must have at least one row");
        let cols = rows[0].chars().count();
        assert!(cols > 0, "board rows must be non-empty");
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            assert_eq!(row.chars().count(), cols, "board rows must be rectangular");
            for marker in row.chars() {
                let cell = Cell::from_marker(marker)
                    .unwrap_or_else(|| panic!("unknown board marker {marker:?}"));
                cells.push(cell);
            }
        }
        Self {
            cells,
            rows: rows.len(),
            cols,
        }
    }

    /// Number of pegs still on the board.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Peg).count()
    }

    fn at(&self, pos: (usize, usize)) -> Option<Cell> {
        if pos.0 >= self.rows || pos.1 >= self.cols {
            return None;
        }
        Some(self.cells[pos.0 * self.cols + pos.1])
    }

    fn set(&mut self, pos: (usize, usize), cell: Cell) {
        self.cells[pos.0 * self.cols + pos.1] = cell;
    }

    /// Sources two cells away from `to`, in enumeration order: above,
    /// below, left, right. Positions that would leave the grid are
    /// skipped.
    fn jump_sources(to: (usize, usize)) -> [Option<(usize, usize)>; 4] {
        let (row, col) = to;
        [
            row.checked_sub(2).map(|r| (r, col)),
            Some((row + 2, col)),
            col.checked_sub(2).map(|c| (row, c)),
            Some((row, col + 2)),
        ]
    }
}

impl Puzzle for PegSolitaire {
    type Move = Jump;

    fn is_goal(&self) -> bool {
        self.peg_count() == 1
    }

    fn legal_moves(&self) -> Vec<Jump> {
        let mut moves = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let to = (row, col);
                if self.at(to) != Some(Cell::Empty) {
                    continue;
                }
                for from in Self::jump_sources(to).into_iter().flatten() {
                    let jump = Jump { from, to };
                    if self.at(from) == Some(Cell::Peg)
                        && self.at(jump.over()) == Some(Cell::Peg)
                    {
                        moves.push(jump);
                    }
                }
            }
        }
        moves
    }

    fn apply(&self, mv: &Jump) -> Result<Self, IllegalMove> {
        if !mv.is_straight_double() {
            return Err(IllegalMove::new(format!(
                "jump {mv} is not a straight two-cell jump"
            )));
        }
        if self.at(mv.from) != Some(Cell::Peg) {
            return Err(IllegalMove::new(format!("jump {mv} has no peg to move")));
        }
        if self.at(mv.over()) != Some(Cell::Peg) {
            return Err(IllegalMove::new(format!(
                "jump {mv} has no peg to jump over"
            )));
        }
        if self.at(mv.to) != Some(Cell::Empty) {
            return Err(IllegalMove::new(format!(
                "jump {mv} does not land on an empty cell"
            )));
        }
        let mut next = self.clone();
        next.set(mv.from, Cell::Empty);
        next.set(mv.over(), Cell::Empty);
        next.set(mv.to, Cell::Peg);
        Ok(next)
    }

    fn fingerprint(&self) -> Fingerprint {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend_from_slice(&u32::try_from(self.rows).unwrap_or(u32::MAX).to_le_bytes());
        bytes.extend_from_slice(&u32::try_from(self.cols).unwrap_or(u32::MAX).to_le_bytes());
        bytes.extend(self.cells.iter().map(|c| c.encode()));
        digest(DOMAIN_PEG, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_row_jump_solves_the_line() {
        let board = PegSolitaire::from_rows(&["**."]);
        let moves = board.legal_moves();
        assert_eq!(
            moves,
            vec![Jump {
                from: (0, 0),
                to: (0, 2)
            }]
        );

        let next = board.apply(&moves[0]).unwrap();
        assert_eq!(next.peg_count(), 1);
        assert!(next.is_goal());
        assert_eq!(board.peg_count(), 2, "receiver must be untouched");
    }

    #[test]
    fn separated_pegs_have_no_moves() {
        // The original's stuck doctest row: no two consecutive pegs.
        let board = PegSolitaire::from_rows(&[".*.*#"]);
        assert!(board.legal_moves().is_empty());
        assert!(!board.is_goal());
    }

    #[test]
    fn four_by_four_enumerates_both_opening_jumps() {
        let board = PegSolitaire::from_rows(&["#**#", "****", "**.*", "#**#"]);
        let moves = board.legal_moves();
        assert_eq!(
            moves,
            vec![
                Jump {
                    from: (0, 2),
                    to: (2, 2)
                },
                Jump {
                    from: (2, 0),
                    to: (2, 2)
                },
            ]
        );
    }

    #[test]
    fn jump_removes_the_jumped_peg() {
        let board = PegSolitaire::from_rows(&["#**#", "****", "**.*", "#**#"]);
        let next = board
            .apply(&Jump {
                from: (0, 2),
                to: (2, 2),
            })
            .unwrap();
        assert_eq!(next.peg_count(), board.peg_count() - 1);
        assert_eq!(next.at((1, 2)), Some(Cell::Empty));
        assert_eq!(next.at((0, 2)), Some(Cell::Empty));
        assert_eq!(next.at((2, 2)), Some(Cell::Peg));
    }

    #[test]
    fn diagonal_jump_is_rejected() {
        let board = PegSolitaire::from_rows(&["**.", "**.", "..."]);
        let err = board
            .apply(&Jump {
                from: (0, 0),
                to: (2, 2),
            })
            .unwrap_err();
        assert!(format!("{err}").contains("straight two-cell jump"));
    }

    #[test]
    fn jump_onto_peg_is_rejected() {
        let board = PegSolitaire::from_rows(&["***"]);
        assert!(board
            .apply(&Jump {
                from: (0, 0),
                to: (0, 2)
            })
            .is_err());
    }

    #[test]
    fn fingerprint_covers_unused_cells() {
        let a = PegSolitaire::from_rows(&["**.", "###"]);
        let b = PegSolitaire::from_rows(&["**.", "..."]);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    #[should_panic(expected = "rectangular")]
    fn ragged_rows_are_rejected() {
        let _ = PegSolitaire::from_rows(&["**.", "**"]);
    }
}
