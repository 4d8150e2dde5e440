//! Word square under construction
//!
//! A grid of width N has 2N lines: indices `0..N` are rows, `N..2N` are columns. Row `i`
//! and column `N + j` share the cell at row `i`, column `j`. Unassigned lines hold the
//! all-wildcard placeholder.

use super::{Pattern, WILDCARD, Word};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Mutable state for one square
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    /// Line-major: line `l` occupies `cells[l * width..(l + 1) * width]`
    cells: Vec<u8>,
    assigned: Vec<bool>,
}

impl Grid {
    /// Create an empty grid with every line unassigned
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            cells: vec![WILDCARD; 2 * width * width],
            assigned: vec![false; 2 * width],
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Total number of lines (rows plus columns)
    #[inline]
    #[must_use]
    pub const fn line_count(&self) -> usize {
        2 * self.width
    }

    #[inline]
    #[must_use]
    pub const fn is_row(&self, line: usize) -> bool {
        line < self.width
    }

    /// Characters currently held by `line` (wildcards if unassigned)
    ///
    /// # Panics
    /// Panics if `line >= line_count()`
    #[inline]
    #[must_use]
    pub fn line(&self, line: usize) -> &[u8] {
        &self.cells[line * self.width..(line + 1) * self.width]
    }

    /// `line` rendered as a string
    #[must_use]
    pub fn line_text(&self, line: usize) -> String {
        self.line(line).iter().map(|&b| char::from(b)).collect()
    }

    #[inline]
    #[must_use]
    pub fn is_assigned(&self, line: usize) -> bool {
        self.assigned[line]
    }

    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.assigned.iter().filter(|&&a| a).count()
    }

    /// Put `word` on `line` and mark it assigned
    ///
    /// No consistency check happens here; call [`Grid::is_consistent`] afterwards when the
    /// word was not drawn from the line's constraint.
    ///
    /// # Panics
    /// Panics if `line` is out of range or the word width differs from the grid width.
    pub fn assign(&mut self, line: usize, word: &Word) {
        assert_eq!(word.len(), self.width, "word width must match grid width");
        let width = self.width;
        self.cells[line * width..(line + 1) * width].copy_from_slice(word.as_bytes());
        self.assigned[line] = true;
    }

    /// Reset `line` to the placeholder and clear its assigned flag
    pub fn unassign(&mut self, line: usize) {
        let width = self.width;
        self.cells[line * width..(line + 1) * width].fill(WILDCARD);
        self.assigned[line] = false;
    }

    /// Assign `word` to `line` for the lifetime of the returned guard
    ///
    /// The line is unassigned when the guard drops, on every exit path. The guard
    /// dereferences to the grid so deeper search levels keep working through it.
    pub fn place(&mut self, line: usize, word: &Word) -> Placement<'_> {
        self.assign(line, word);
        Placement { grid: self, line }
    }

    /// Whether every assigned row agrees with every assigned column on their shared cell
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let n = self.width;
        (0..n).filter(|&row| self.assigned[row]).all(|row| {
            (0..n)
                .filter(|&col| self.assigned[n + col])
                .all(|col| self.line(row)[col] == self.line(n + col)[row])
        })
    }

    /// Lowest-index unassigned line, rows before columns; `None` once every line is set
    #[must_use]
    pub fn next_unassigned(&self) -> Option<usize> {
        self.assigned.iter().position(|&a| !a)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assigned.iter().all(|&a| a)
    }

    /// The pattern `line` must satisfy given the perpendicular lines already assigned
    ///
    /// Position `k` of a row's constraint comes from column `k`; position `k` of a column's
    /// constraint comes from row `k`. Unassigned perpendicular lines contribute a wildcard.
    #[must_use]
    pub fn constraint_at(&self, line: usize) -> Pattern {
        let n = self.width;
        let (offset, cross) = if self.is_row(line) {
            (n, line)
        } else {
            (0, line - n)
        };

        let bytes: Vec<u8> = (0..n)
            .map(|k| {
                let other = offset + k;
                if self.assigned[other] {
                    self.line(other)[cross]
                } else {
                    WILDCARD
                }
            })
            .collect();

        Pattern::from_bytes(&bytes)
    }

    /// Letter at `(row, col)`, read from whichever crossing line is assigned
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        if self.assigned[row] {
            self.line(row)[col]
        } else {
            self.line(self.width + col)[row]
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.width {
            let letters: Vec<String> = (0..self.width)
                .map(|col| char::from(self.cell(row, col)).to_string())
                .collect();
            writeln!(f, "{}", letters.join(" "))?;
        }
        Ok(())
    }
}

/// Scoped assignment of one grid line
///
/// Created by [`Grid::place`]; unassigns its line on drop.
#[derive(Debug)]
pub struct Placement<'g> {
    grid: &'g mut Grid,
    line: usize,
}

impl Deref for Placement<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        self.grid
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Grid {
        self.grid
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.grid.unassign(self.line);
    }
}
