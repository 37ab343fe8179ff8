//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// The symbol a side places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The 3x3 grid plus the two role marks.
///
/// Positions are row-major 0-8; (row, col) accessors are provided for the
/// presentation layer. The AI and player marks are assigned together from a
/// single "who moves first" flag, so they can never coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 9],
    ai: Mark,
    player: Mark,
}

impl Board {
    /// Create a new empty board. The player holds X until
    /// [`assign_marks`](Self::assign_marks) says otherwise.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
            ai: Mark::O,
            player: Mark::X,
        }
    }

    /// Parse a board from a 9-character layout ('.', ' ' or '_' for empty,
    /// 'X'/'O' for marks; whitespace between rows is filtered out), with the
    /// given mark playing as the AI.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 9 cell characters are present or any
    /// character is not a valid cell.
    pub fn from_layout(s: &str, ai: Mark) -> crate::Result<Self> {
        let cleaned: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: cleaned.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in cleaned.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board {
            cells,
            ai,
            player: ai.opponent(),
        })
    }

    /// Clear all cells to empty
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Assign the role marks for a round; the first mover gets X.
    pub fn assign_marks(&mut self, ai_first: bool) {
        if ai_first {
            self.ai = Mark::X;
            self.player = Mark::O;
        } else {
            self.ai = Mark::O;
            self.player = Mark::X;
        }
    }

    /// The AI's mark
    pub fn ai_mark(&self) -> Mark {
        self.ai
    }

    /// The player's mark
    pub fn player_mark(&self) -> Mark {
        self.player
    }

    /// Raw cells, row-major
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// A row-indexed snapshot of the grid
    pub fn grid(&self) -> [[Cell; 3]; 3] {
        let mut grid = [[Cell::Empty; 3]; 3];
        for (pos, &cell) in self.cells.iter().enumerate() {
            grid[pos / 3][pos % 3] = cell;
        }
        grid
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Get cell at (row, col)
    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * 3 + col]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check if no empty cells remain
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Number of empty cells
    pub fn moves_left(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Number of cells holding the given mark
    pub fn count(&self, mark: Mark) -> usize {
        let target = mark.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// All empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Commit a mark to an empty cell.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range positions and occupied cells; a mark is never
    /// overwritten.
    pub fn place(&mut self, pos: usize, mark: Mark) -> crate::Result<()> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::OccupiedCell { position: pos });
        }
        self.cells[pos] = mark.to_cell();
        Ok(())
    }

    /// Place a mark, run `f`, and restore the cell to empty.
    ///
    /// This is the scoped mutate-then-undo used throughout search probing:
    /// the restoration happens on every exit path of `f`, so sibling search
    /// branches always see the cell empty again.
    ///
    /// The position must be an empty cell.
    pub fn probe<T>(&mut self, pos: usize, mark: Mark, f: impl FnOnce(&mut Board) -> T) -> T {
        debug_assert!(self.is_empty(pos), "probe on occupied cell {pos}");
        self.cells[pos] = mark.to_cell();
        let out = f(self);
        self.cells[pos] = Cell::Empty;
        out
    }

    /// Overwrite the whole grid; used by the symmetry transforms
    pub(crate) fn replace_cells(&mut self, cells: [Cell; 9]) {
        self.cells = cells;
    }

    /// A view of the same position with the AI and player roles exchanged.
    ///
    /// Running a selector on the swapped board makes it choose for the side
    /// that is normally the human; the cells themselves are untouched.
    #[must_use = "swapped_roles returns a new board; the original is unchanged"]
    pub fn swapped_roles(&self) -> Self {
        Board {
            cells: self.cells,
            ai: self.player,
            player: self.ai,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if i % 3 == 2 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
