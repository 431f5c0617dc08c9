pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of equal tokens in a line needed to win.
pub const RUN_LENGTH: usize = 4;

/// Scan directions as (row step, column step): right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Number of occupied cells in a column
    pub fn column_height(&self, col: usize) -> usize {
        (0..ROWS)
            .filter(|&row| self.cells[row][col] != Cell::Empty)
            .count()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, DropError> {
        if col >= COLS {
            return Err(DropError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(DropError::ColumnFull);
        }

        // Lowest empty row wins; rows are scanned bottom-up
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("column {col} has an empty top cell but no empty row");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check whether `cell` owns a run of at least four anywhere on the board.
    ///
    /// Every cell is tried as the start of a four-cell window extending right,
    /// down, down-right and down-left. Windows that leave the grid are skipped,
    /// so every row, column and diagonal of length four or more is covered.
    pub fn has_run(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        (0..ROWS).any(|row| {
            (0..COLS).any(|col| {
                DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.window_matches(row, col, dr, dc, cell))
            })
        })
    }

    fn window_matches(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> bool {
        (0..RUN_LENGTH as isize).all(|step| {
            let r = row as isize + dr * step;
            let c = col as isize + dc * step;
            (0..ROWS as isize).contains(&r)
                && (0..COLS as isize).contains(&c)
                && self.cells[r as usize][c as usize] == cell
        })
    }

    /// True when every column's occupied cells sit contiguously on the bottom row.
    pub fn respects_gravity(&self) -> bool {
        (0..COLS).all(|col| {
            let height = self.column_height(col);
            (0..ROWS).all(|row| (self.cells[row][col] != Cell::Empty) == (row >= ROWS - height))
        })
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: [[Cell; COLS]; ROWS]) -> Self {
        Board { cells: rows }
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
