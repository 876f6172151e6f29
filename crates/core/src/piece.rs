//! Piece module - a falling pentomino
//!
//! A piece is a shape reference plus mutable rotation and board-relative
//! position. Mutators are unconditional: rotation and translation always
//! succeed here, and legality is checked by the board afterwards. Every
//! caller uses the same attempt / validate / revert protocol, so the piece
//! never needs to know about the board.

use pentris_types::MinoColor;

use crate::catalog::{Shape, Template};

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    /// The shape this piece is an instance of
    pub shape: &'static Shape,
    /// Column of the template's top-left corner on the board
    pub x: i32,
    /// Row of the template's top-left corner; negative while spawning in
    pub y: i32,
    /// Display color, assigned at creation and opaque to the rules
    pub color: MinoColor,
    rotation: usize,
}

impl Piece {
    /// Create a piece at the given board position, rotation 0
    pub fn new(shape: &'static Shape, color: MinoColor, x: i32, y: i32) -> Self {
        Self {
            shape,
            x,
            y,
            color,
            rotation: 0,
        }
    }

    /// Current rotation index, always in `0..rotation_count`
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Template for the current rotation
    pub fn current_template(&self) -> &'static Template {
        self.shape.template(self.rotation)
    }

    /// Advance rotation by one step, wrapping at the template count
    pub fn rotate_cw(&mut self) {
        self.rotation = (self.rotation + 1) % self.shape.rotation_count();
    }

    /// Retreat rotation by one step, wrapping at the template count
    pub fn rotate_ccw(&mut self) {
        let count = self.shape.rotation_count();
        self.rotation = (self.rotation + count - 1) % count;
    }

    pub fn move_left(&mut self) {
        self.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.x += 1;
    }

    pub fn move_up(&mut self) {
        self.y -= 1;
    }

    pub fn move_down(&mut self) {
        self.y += 1;
    }

    /// Put the piece back at a spawn position with rotation 0
    ///
    /// Used when a piece comes out of the hold slot.
    pub fn reset(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.rotation = 0;
    }

    /// Iterate the board coordinates of all filled cells at the current
    /// rotation and position
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.current_template()
            .filled_cells()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}
