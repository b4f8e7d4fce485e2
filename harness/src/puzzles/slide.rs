//! `Slide`: the m×n sliding-tile puzzle (15-puzzle family).
//!
//! A rectangular grid of numbered tiles with one blank. A move slides a
//! neighboring tile into the blank; the move is named by the direction the
//! blank travels. Both the current arrangement and the target arrangement
//! are part of the state, so an instance may be solved, unsolved, or
//! unsolvable (half of all arrangements are unreachable by parity).

use quarry_solver::contract::{IllegalMove, Puzzle};
use quarry_solver::fingerprint::{digest, Fingerprint};

const DOMAIN_SLIDE: &[u8] = b"QUARRY::SLIDE::V1\0";

/// The blank cell marker in a grid encoding.
pub const BLANK: u8 = 0;

/// Direction the blank travels for one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideMove {
    /// Blank swaps with the tile above it.
    Up,
    /// Blank swaps with the tile below it.
    Down,
    /// Blank swaps with the tile to its left.
    Left,
    /// Blank swaps with the tile to its right.
    Right,
}

impl SlideMove {
    /// Candidate moves in enumeration order.
    const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    fn offset(self) -> (i64, i64) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

impl std::fmt::Display for SlideMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// A sliding-tile arrangement working toward a target arrangement.
///
/// Cells are row-major; [`BLANK`] marks the blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    cells: Vec<u8>,
    target: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Slide {
    /// Build an instance from row-major `cells` and `target` arrangements.
    ///
    /// # Panics
    ///
    /// Panics if the grid is empty, the arrangements are not the same
    /// `rows * cols` length, or either arrangement lacks exactly one
    /// blank.
    #[must_use]
    pub fn new(rows: usize, cols: usize, cells: Vec<u8>, target: Vec<u8>) -> Self {
        assert!(rows > 0 && cols > 0, "grid must be non-empty");
        assert_eq!(cells.len(), rows * cols, "cells must fill the grid");
        assert_eq!(target.len(), rows * cols, "target must fill the grid");
        assert_eq!(
            cells.iter().filter(|&&c| c == BLANK).count(),
            1,
            "cells must contain exactly one blank"
        );
        assert_eq!(
            target.iter().filter(|&&c| c == BLANK).count(),
            1,
            "target must contain exactly one blank"
        );
        Self {
            cells,
            target,
            rows,
            cols,
        }
    }

    /// Row-major cells of the current arrangement.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn blank_index(&self) -> usize {
        self.cells
            .iter()
            .position(|&c| c == BLANK)
            .expect("constructor guarantees exactly one blank")
    }

    /// Destination cell index for `mv`, or `None` when it leaves the grid.
    fn destination(&self, mv: SlideMove) -> Option<usize> {
        let blank = self.blank_index();
        let (dr, dc) = mv.offset();
        let row = i64::try_from(blank / self.cols).ok()? + dr;
        let col = i64::try_from(blank % self.cols).ok()? + dc;
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (usize::try_from(row).ok()?, usize::try_from(col).ok()?);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }
}

impl Puzzle for Slide {
    type Move = SlideMove;

    fn is_goal(&self) -> bool {
        self.cells == self.target
    }

    fn legal_moves(&self) -> Vec<SlideMove> {
        SlideMove::ALL
            .into_iter()
            .filter(|&mv| self.destination(mv).is_some())
            .collect()
    }

    fn apply(&self, mv: &SlideMove) -> Result<Self, IllegalMove> {
        let Some(dest) = self.destination(*mv) else {
            return Err(IllegalMove::new(format!(
                "slide {mv} moves the blank off the {}x{} grid",
                self.rows, self.cols
            )));
        };
        let mut next = self.clone();
        next.cells.swap(self.blank_index(), dest);
        Ok(next)
    }

    fn fingerprint(&self) -> Fingerprint {
        let mut bytes = Vec::with_capacity(8 + 2 * self.cells.len());
        bytes.extend_from_slice(&u32::try_from(self.rows).unwrap_or(u32::MAX).to_le_bytes());
        bytes.extend_from_slice(&u32::try_from(self.cols).unwrap_or(u32::MAX).to_le_bytes());
        bytes.extend_from_slice(&self.cells);
        bytes.extend_from_slice(&self.target);
        digest(DOMAIN_SLIDE, &bytes)
    }
}
