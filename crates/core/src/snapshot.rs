//! Snapshot module - the read-only view a renderer draws from
//!
//! A [`GameSnapshot`] carries everything a frame needs: the locked grid as
//! one byte per cell, the active piece with its ghost row, the next and hold
//! previews, and the scoring counters. Hosts keep one snapshot alive and
//! refresh it each tick with `GameState::snapshot_into`, so the steady state
//! allocates nothing.
//!
//! All types serialize with serde, so a snapshot can cross a process
//! boundary as JSON unchanged.

use serde::{Deserialize, Serialize};

use pentris_types::{MinoColor, ShapeId};

use crate::piece::Piece;

/// The active falling piece, as drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub id: ShapeId,
    /// Rotation index into the shape's template list
    pub rotation: u8,
    pub x: i32,
    pub y: i32,
    pub color: MinoColor,
}

impl From<Piece> for ActiveSnapshot {
    fn from(piece: Piece) -> Self {
        Self {
            id: piece.shape.id(),
            rotation: piece.rotation() as u8,
            x: piece.x,
            y: piece.y,
            color: piece.color,
        }
    }
}

/// A next/hold preview: identity and color only, always drawn at rotation 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreviewSnapshot {
    pub id: ShapeId,
    pub color: MinoColor,
}

impl From<&Piece> for PreviewSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            id: piece.shape.id(),
            color: piece.color,
        }
    }
}

/// Complete drawable state of a session at one instant
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: u32,
    pub height: u32,
    /// Locked cells in row-major order, 0 empty, `1 + color index` occupied
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    /// Row where the active piece would rest if hard-dropped now
    pub ghost_y: Option<i32>,
    pub next: PreviewSnapshot,
    pub hold: Option<PreviewSnapshot>,
    pub can_hold: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
    /// Bag RNG state, usable to restart with the same piece sequence
    pub seed: u32,
}
