use std::fmt;

use super::player::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Pieces in a line needed to win.
pub const CONNECT: usize = 4;

/// Line directions as (row step, column step): horizontal, vertical,
/// diagonal up-right and diagonal up-left.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Column ordering: center-first.
const CENTER_FIRST: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::One => 'X',
            Cell::Two => 'O',
        }
    }
}

/// The cells of the `CONNECT`-long line starting at `(row, col)` and
/// stepping in `dir`, or `None` if the line leaves the board.
pub fn line_from(row: usize, col: usize, dir: (isize, isize)) -> Option<[(usize, usize); CONNECT]> {
    let (dr, dc) = dir;
    let mut cells = [(0, 0); CONNECT];
    for (i, slot) in cells.iter_mut().enumerate() {
        let r = row as isize + dr * i as isize;
        let c = col as isize + dc * i as isize;
        if r < 0 || c < 0 || r >= ROWS as isize || c >= COLS as isize {
            return None;
        }
        *slot = (r as usize, c as usize);
    }
    Some(cells)
}

/// Every `CONNECT`-long window on the board, each yielded exactly once.
pub fn windows() -> impl Iterator<Item = [(usize, usize); CONNECT]> {
    (0..ROWS).flat_map(|row| {
        (0..COLS).flat_map(move |col| {
            DIRECTIONS
                .iter()
                .filter_map(move |&dir| line_from(row, col, dir))
        })
    })
}

/// A Connect Four grid plus the side to move.
///
/// Row 0 is the bottom row; pieces stack upward from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    turn: Player,
}

impl Board {
    /// Create a new empty board with `Player::One` to move
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            turn: Player::One,
        }
    }

    /// Build a board by playing `columns` in order from the empty board,
    /// alternating sides.
    pub fn from_moves(columns: &[usize]) -> Result<Self, MoveError> {
        let mut board = Board::new();
        for &col in columns {
            board.place(col)?;
        }
        Ok(board)
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// The raw grid, bottom row first.
    pub fn grid(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// The side whose piece the next `place` drops.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Number of pieces stacked in a column.
    pub fn height(&self, col: usize) -> usize {
        if col >= COLS {
            return 0;
        }
        (0..ROWS)
            .take_while(|&row| self.cells[row][col] != Cell::Empty)
            .count()
    }

    /// Total pieces on the board.
    pub fn move_count(&self) -> usize {
        (0..COLS).map(|col| self.height(col)).sum()
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[ROWS - 1][col] != Cell::Empty
    }

    /// Drop the side-to-move's piece in a column and pass the turn.
    /// Returns the row where it landed.
    pub fn place(&mut self, col: usize) -> Result<usize, MoveError> {
        let row = self.drop_piece(col, self.turn)?;
        self.turn = self.turn.other();
        Ok(row)
    }

    /// Drop a piece for `player` without touching the turn.
    /// Returns the row where it landed.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = (0..ROWS)
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Remove the topmost piece of a column and return its owner.
    ///
    /// The turn is left as is: `place` followed by `undo_top_of` restores
    /// the grid but not the side to move.
    pub fn undo_top_of(&mut self, col: usize) -> Option<Player> {
        if col >= COLS {
            return None;
        }
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] != Cell::Empty)?;
        let owner = self.cells[row][col].owner();
        self.cells[row][col] = Cell::Empty;
        owner
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Playable columns in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Playable columns, center column first and then alternating outward.
    pub fn legal_moves_center_first(&self) -> Vec<usize> {
        CENTER_FIRST
            .iter()
            .copied()
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Scan the whole board for a completed line.
    pub fn winner(&self) -> Option<Player> {
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = self.cells[row][col];
                if cell == Cell::Empty {
                    continue;
                }
                for &dir in &DIRECTIONS {
                    let Some(line) = line_from(row, col, dir) else {
                        continue;
                    };
                    if line.iter().all(|&(r, c)| self.cells[r][c] == cell) {
                        return cell.owner();
                    }
                }
            }
        }
        None
    }

    /// Check if the piece at (row, col) completes a line in any direction.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        DIRECTIONS.iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, dr, dc, cell) + self.run_length(row, col, -dr, -dc, cell)
                >= CONNECT
        })
    }

    /// Count consecutive `cell` pieces stepping away from (row, col),
    /// not counting the starting cell.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && c >= 0
            && r < ROWS as isize
            && c < COLS as isize
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            let line: Vec<String> = self.cells[row]
                .iter()
                .map(|cell| cell.symbol().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}
