//! Pieces module - tetromino shape matrices and naive rotation
//!
//! Shapes are rectangular 0/1 matrices whose dimensions vary per orientation
//! (the I piece spawns as a 1x4 row). Rotation is transpose-then-row-reverse
//! about the bounding-box origin with no wall kicks - the "floating" rotation
//! of simple classic implementations, kept intentionally.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Maximum shape extent in either dimension (I piece rotated)
pub const MAX_SHAPE_DIM: usize = 4;

/// Rectangular 0/1 shape matrix, top-left aligned in fixed storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        debug_assert!(height <= MAX_SHAPE_DIM && width <= MAX_SHAPE_DIM);
        debug_assert!(rows.iter().all(|r| r.len() == width), "shape must be rectangular");

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        }
    }

    /// Height of the shape in cells
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Width of the shape in cells
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (x, y) within the matrix is occupied
    /// Out-of-matrix coordinates read as empty
    pub fn filled(&self, x: i8, y: i8) -> bool {
        if x < 0 || y < 0 || x >= self.cols as i8 || y >= self.rows as i8 {
            return false;
        }
        self.cells[y as usize][x as usize]
    }

    /// Iterate the (dx, dy) offsets of all occupied cells
    pub fn offsets(self) -> impl Iterator<Item = (i8, i8)> {
        (0..self.rows as i8).flat_map(move |y| {
            (0..self.cols as i8).filter_map(move |x| self.filled(x, y).then_some((x, y)))
        })
    }

    /// The 90-degree clockwise rotation: transpose, then reverse each row
    /// (`new[i][j] = old[rows-1-j][i]`). Dimensions swap.
    pub fn rotated(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for i in 0..self.cols as usize {
            for j in 0..self.rows as usize {
                cells[i][j] = self.cells[self.rows as usize - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Spawn template for a piece kind
///
/// Matrices match the classic layouts: I is a single row, O a 2x2 block,
/// T/S/Z/J/L are 2x3.
pub fn template(kind: PieceKind) -> Shape {
    let rows: &[&[u8]] = match kind {
        PieceKind::I => &[&[1, 1, 1, 1]],
        PieceKind::O => &[&[1, 1], &[1, 1]],
        PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
        PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
        PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
        PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
    };
    Shape::from_rows(rows)
}

/// Horizontally centered spawn column for a shape
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PIECE_KINDS;

    #[test]
    fn test_templates_are_rectangular_with_four_cells() {
        for kind in PIECE_KINDS {
            let shape = template(kind);
            assert_eq!(shape.offsets().count(), 4, "{:?}", kind);
            assert!(shape.rows() >= 1 && shape.rows() <= 4);
            assert!(shape.cols() >= 1 && shape.cols() <= 4);
        }
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let i = template(PieceKind::I);
        assert_eq!((i.rows(), i.cols()), (1, 4));

        let rotated = i.rotated();
        assert_eq!((rotated.rows(), rotated.cols()), (4, 1));
        for y in 0..4 {
            assert!(rotated.filled(0, y));
        }
    }

    #[test]
    fn test_rotation_is_clockwise() {
        // J spawns as:        rotated clockwise:
        //   X . .               X X
        //   X X X               X .
        //                       X .
        let j = template(PieceKind::J).rotated();
        assert_eq!((j.rows(), j.cols()), (3, 2));
        assert!(j.filled(0, 0) && j.filled(1, 0));
        assert!(j.filled(0, 1) && !j.filled(1, 1));
        assert!(j.filled(0, 2) && !j.filled(1, 2));
    }

    #[test]
    fn test_four_rotations_round_trip() {
        for kind in PIECE_KINDS {
            let original = template(kind);
            let back = original.rotated().rotated().rotated().rotated();
            assert_eq!(original, back, "{:?} should round-trip", kind);
        }
    }

    #[test]
    fn test_spawn_x_centers_shape() {
        // 10-wide board: 4-wide I spawns at 3, 2-wide O at 4, 3-wide T at 4
        assert_eq!(spawn_x(&template(PieceKind::I)), 3);
        assert_eq!(spawn_x(&template(PieceKind::O)), 4);
        assert_eq!(spawn_x(&template(PieceKind::T)), 4);
    }
}
