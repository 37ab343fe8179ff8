//! D4 symmetry group operations on the 3x3 grid

use crate::board::{Board, Cell};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply a left-right reflection before rotating
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// Get all 8 D4 transforms
    pub fn all() -> Vec<D4Transform> {
        let mut transforms = Vec::with_capacity(8);
        for rotation in [0, 90, 180, 270] {
            transforms.push(D4Transform {
                rotation,
                reflection: false,
            });
            transforms.push(D4Transform {
                rotation,
                reflection: true,
            });
        }
        transforms
    }

    /// Apply transform to a position (0-8): reflect across the vertical
    /// axis first, then rotate clockwise
    pub fn transform_position(&self, pos: usize) -> usize {
        let (mut row, mut col) = (pos / 3, pos % 3);

        if self.reflection {
            col = 2 - col;
        }

        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }

        row * 3 + col
    }
}

impl Board {
    /// Apply a D4 transform to the grid; the role marks are unchanged
    #[must_use = "transformed returns a new board; the original is unchanged"]
    pub fn transformed(&self, t: &D4Transform) -> Self {
        let mut cells = [Cell::Empty; 9];
        for pos in 0..9 {
            cells[t.transform_position(pos)] = self.get(pos);
        }
        let mut out = *self;
        out.replace_cells(cells);
        out
    }
}
