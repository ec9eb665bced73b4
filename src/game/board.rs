use super::disk::{Cell, Disk};

pub const STANDARD_WIDTH: usize = 7;
pub const STANDARD_HEIGHT: usize = 6;

/// Upper bound on `width * height` accepted by [`Board::new`].
pub const MAX_CELLS: usize = 1 << 24;

/// Reasons a drop is rejected. Checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (width {width})")]
    ColumnOutOfRange { column: isize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// A gravity board of fixed width and height.
///
/// Cells are stored column by column; row 0 is the bottom of a column.
/// `heights[c]` is the number of disks in column `c`, which is also the row
/// the next disk dropped there lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    heights: Vec<usize>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let cell_count = width
            .checked_mul(height)
            .filter(|&n| width > 0 && height > 0 && n <= MAX_CELLS)
            .ok_or(BoardError::InvalidDimensions { width, height })?;

        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; cell_count],
            heights: vec![0; width],
        })
    }

    /// Create an empty 7x6 board
    pub fn standard() -> Self {
        Board {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            cells: vec![Cell::Empty; STANDARD_WIDTH * STANDARD_HEIGHT],
            heights: vec![0; STANDARD_WIDTH],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position, or `None` outside the board.
    /// Row 0 is the bottom.
    pub fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        if column >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[self.index(column, row)])
    }

    /// Number of disks in a column
    pub fn column_height(&self, column: usize) -> Option<usize> {
        self.heights.get(column).copied()
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.column_height(column)
            .map_or(true, |filled| filled >= self.height)
    }

    /// Row the next disk dropped into `column` would land in
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        self.column_height(column)
            .filter(|&filled| filled < self.height)
    }

    /// Columns that can still accept a disk
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(move |&column| !self.is_column_full(column))
    }

    pub fn disk_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&filled| filled >= self.height)
    }

    /// Drop a disk into a column, returns the row where it landed.
    ///
    /// Every check, including the consistency assertions, runs before anything
    /// is written, so a rejected or faulted move leaves the board untouched.
    pub fn drop_disk(&mut self, disk: Disk, column: isize) -> Result<usize, MoveError> {
        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < self.width)
            .ok_or(MoveError::ColumnOutOfRange {
                column,
                width: self.width,
            })?;

        let row = self.heights[col];
        if row >= self.height {
            return Err(MoveError::ColumnFull { column: col });
        }

        // Nothing after the two writes may panic.
        debug_assert!(self.column_is_consistent(col));
        let idx = self.index(col, row);
        assert!(
            self.cells[idx].is_empty(),
            "landing cell ({col}, {row}) is already occupied"
        );

        self.cells[idx] = Cell::Occupied(disk);
        self.heights[col] = row + 1;
        Ok(row)
    }

    /// Verify the gravity and fill-counter invariants for every column.
    pub fn check_invariants(&self) -> bool {
        self.cells.len() == self.width * self.height
            && self.heights.len() == self.width
            && (0..self.width).all(|col| self.column_is_consistent(col))
    }

    fn column_is_consistent(&self, col: usize) -> bool {
        let filled = self.heights[col];
        filled <= self.height
            && (0..self.height).all(|row| {
                let occupied = !self.cells[self.index(col, row)].is_empty();
                occupied == (row < filled)
            })
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        col * self.height + row
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
