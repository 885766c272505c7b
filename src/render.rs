//! Text rendering of boards.

use core::fmt;

use crate::board::{Board, Cell};

/// Symbol for a cell; ship cells show as water when `hidden`.
pub fn cell_symbol(cell: Cell, hidden: bool) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Ship if hidden => 'O',
        Cell::Ship => '■',
        Cell::Hit => 'X',
        Cell::Miss => 'T',
        Cell::Revealed => '.',
    }
}

/// Decimal digits needed to print `n`.
fn digits(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

impl fmt::Display for Board {
    /// ```text
    ///   | 1 | 2 | 3 |
    /// 1 | O | ■ | O |
    /// ```
    ///
    /// Labels and cells are padded to the widest label so columns line up
    /// on boards of ten or more.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = digits(self.dimension());
        write!(f, "{:w$} |", "", w = w)?;
        for c in 0..self.dimension() {
            write!(f, " {:>w$} |", c + 1, w = w)?;
        }
        for (r, row) in self.rows().enumerate() {
            write!(f, "\n{:>w$} |", r + 1, w = w)?;
            for &cell in row {
                write!(f, " {:>w$} |", cell_symbol(cell, self.is_hidden()), w = w)?;
            }
        }
        Ok(())
    }
}
