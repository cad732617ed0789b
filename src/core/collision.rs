//! Collision checker - tests a shape against walls, floor, and settled cells
//!
//! Cells above the visible board (negative board row) are tested against the
//! side walls only, never against settled cells. Pieces spawn partly above the
//! board and must not register false collisions there.

use crate::core::board::Board;
use crate::core::pieces::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `shape` placed with its top-left corner at (x, y) overlaps a wall,
/// the floor, or a settled cell.
pub fn collides(shape: &Shape, x: i8, y: i8, board: &Board) -> bool {
    for (dx, dy) in shape.offsets() {
        let bx = x + dx;
        let by = y + dy;

        if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
            return true;
        }

        if by >= 0 && board.occupied(bx, by) {
            return true;
        }
    }
    false
}
