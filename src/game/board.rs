use std::fmt;

use super::player::PlayerId;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

/// Number of same-owner pieces in a straight line needed to win.
pub const RUN_LENGTH: usize = 4;

/// Row-major coordinate; row 0 is the top, `height - 1` the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Four coordinates forming a straight line.
pub type Run = [Position; RUN_LENGTH];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(id) => Some(id),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// (row step, col step): horizontal, vertical, diagonal down-right,
/// diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
}

/// Grid of `height × width` cells. Pieces can only enter through
/// [`Board::drop_piece`], so every column stays bottom-contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board. Callers validate that both dimensions are
    /// non-zero.
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![vec![Cell::Empty; width]; height],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Like [`Board::get`], but `None` off the board.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        !self.cells[0][col].is_empty()
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.height)
            .rev()
            .take_while(|&row| !self.cells[row][col].is_empty())
            .count()
    }

    /// Row the next piece dropped in `col` would land on, or `None` if the
    /// column is full.
    pub fn find_spot(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row][col].is_empty())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, owner: PlayerId) -> Result<usize, DropError> {
        if col >= self.width {
            return Err(DropError::InvalidColumn);
        }
        let row = self.find_spot(col).ok_or(DropError::ColumnFull)?;
        self.cells[row][col] = Cell::Occupied(owner);
        Ok(row)
    }

    /// Board is full iff the top row is. Relies on gravity fill: a piece in
    /// row 0 means everything below it is occupied too.
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Scan every starting cell in every direction for a run owned entirely
    /// by `owner`. Returns the first one found.
    pub fn find_winning_run(&self, owner: PlayerId) -> Option<Run> {
        for row in 0..self.height {
            for col in 0..self.width {
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(run) = self.run_from(Position::new(row, col), dr, dc) {
                        if self.is_owned_run(&run, owner) {
                            return Some(run);
                        }
                    }
                }
            }
        }
        None
    }

    /// Move-centred variant of [`Board::find_winning_run`]: only considers
    /// runs passing through `pos`, using the owner of that cell.
    pub fn winning_run_through(&self, pos: Position) -> Option<Run> {
        let owner = self.cell(pos)?.owner()?;
        for &(dr, dc) in &DIRECTIONS {
            for offset in 0..RUN_LENGTH as isize {
                let start_row = pos.row as isize - dr * offset;
                let start_col = pos.col as isize - dc * offset;
                if start_row < 0 || start_col < 0 {
                    continue;
                }
                let start = Position::new(start_row as usize, start_col as usize);
                if let Some(run) = self.run_from(start, dr, dc) {
                    if self.is_owned_run(&run, owner) {
                        return Some(run);
                    }
                }
            }
        }
        None
    }

    /// The four coordinates starting at `start` stepping `(dr, dc)`, or
    /// `None` if any of them falls off the board.
    fn run_from(&self, start: Position, dr: isize, dc: isize) -> Option<Run> {
        let mut run = [start; RUN_LENGTH];
        for (step, slot) in run.iter_mut().enumerate() {
            let row = start.row as isize + dr * step as isize;
            let col = start.col as isize + dc * step as isize;
            if row < 0 || col < 0 || row >= self.height as isize || col >= self.width as isize {
                return None;
            }
            *slot = Position::new(row as usize, col as usize);
        }
        Some(run)
    }

    fn is_owned_run(&self, run: &Run, owner: PlayerId) -> bool {
        run.iter()
            .all(|pos| self.get(pos.row, pos.col) == Cell::Occupied(owner))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

/// One line per row, top first: `.` for empty, the seat number otherwise.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(id) => id.number().to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
