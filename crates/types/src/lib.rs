//! Shared data types for the pentris rules engine
//!
//! This crate defines the fundamental types used throughout the engine.
//! All types are pure data with no game logic, making them usable in any
//! context (core rules, rendering frontends, headless drivers).
//!
//! # Pieces
//!
//! Pentris pieces are pentominoes: every piece covers exactly five cells.
//! There are 18 shapes, named after the letters they resemble (primed names
//! are mirror images): F, F', I, L, J, N, N', P, Q, T, U, V, W, X, Y, Y',
//! Z, S.
//!
//! # Board dimensions
//!
//! The default playfield is 12 columns by 20 rows. Pieces spawn at row -1,
//! one row above the visible field; cells on negative rows are exempt from
//! collision checks while the piece settles in.
//!
//! # Configuration
//!
//! All timing and scoring numbers live in [`GameConfig`] so a session can be
//! reproduced exactly from a config value and an RNG seed. Defaults follow
//! the table below (milliseconds):
//!
//! | Option | Default |
//! |--------|---------|
//! | `fall_start_ms` | 1000 |
//! | `fall_decrement_ms` | 80 per level |
//! | `fall_floor_ms` | 100 |
//! | `sideways_start_ms` | 100 |
//! | `soft_drop_start_ms` | 80 |
//! | `lines_per_level` | 10 |

use serde::{Deserialize, Serialize};

/// Default board width in cells (12 columns)
pub const DEFAULT_BOARD_WIDTH: u32 = 12;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u32 = 20;

/// Row where new pieces spawn, one above the visible field
pub const SPAWN_ROW: i32 = -1;

/// Number of filled cells in every pentomino template
pub const CELLS_PER_PIECE: usize = 5;

/// The 18 pentomino shape identities
///
/// Primed variants (`FPrime`, `NPrime`, `YPrime`) are mirror images of their
/// unprimed counterparts. `X` has a single rotation; `I`, `Z` and `S` have
/// two; the rest have four.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeId {
    F,
    FPrime,
    #[default]
    I,
    L,
    J,
    N,
    NPrime,
    P,
    Q,
    T,
    U,
    V,
    W,
    X,
    Y,
    YPrime,
    Z,
    S,
}

impl ShapeId {
    /// All shape identities in catalog order
    pub const ALL: [ShapeId; 18] = [
        ShapeId::F,
        ShapeId::FPrime,
        ShapeId::I,
        ShapeId::L,
        ShapeId::J,
        ShapeId::N,
        ShapeId::NPrime,
        ShapeId::P,
        ShapeId::Q,
        ShapeId::T,
        ShapeId::U,
        ShapeId::V,
        ShapeId::W,
        ShapeId::X,
        ShapeId::Y,
        ShapeId::YPrime,
        ShapeId::Z,
        ShapeId::S,
    ];

    /// Display name of the shape
    ///
    /// # Examples
    ///
    /// ```
    /// use pentris_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::F.as_str(), "F");
    /// assert_eq!(ShapeId::FPrime.as_str(), "F'");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::F => "F",
            ShapeId::FPrime => "F'",
            ShapeId::I => "I",
            ShapeId::L => "L",
            ShapeId::J => "J",
            ShapeId::N => "N",
            ShapeId::NPrime => "N'",
            ShapeId::P => "P",
            ShapeId::Q => "Q",
            ShapeId::T => "T",
            ShapeId::U => "U",
            ShapeId::V => "V",
            ShapeId::W => "W",
            ShapeId::X => "X",
            ShapeId::Y => "Y",
            ShapeId::YPrime => "Y'",
            ShapeId::Z => "Z",
            ShapeId::S => "S",
        }
    }
}

/// Display color of a locked or falling mino
///
/// Colors are opaque to the engine: they are assigned when a piece is
/// created, carried through `commit`, and read back by renderers. The
/// engine never branches on them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinoColor {
    Aqua,
    Blue,
    Fuchsia,
    Green,
    Lime,
    Navy,
    Purple,
    Red,
    #[default]
    Silver,
    Teal,
    White,
    Yellow,
}

impl MinoColor {
    /// The full palette, in stable index order
    pub const ALL: [MinoColor; 12] = [
        MinoColor::Aqua,
        MinoColor::Blue,
        MinoColor::Fuchsia,
        MinoColor::Green,
        MinoColor::Lime,
        MinoColor::Navy,
        MinoColor::Purple,
        MinoColor::Red,
        MinoColor::Silver,
        MinoColor::Teal,
        MinoColor::White,
        MinoColor::Yellow,
    ];

    /// Stable palette index, used for compact board encodings
    pub fn index(&self) -> u8 {
        *self as u8
    }
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(MinoColor)`: cell occupied by a locked mino of that color
pub type Cell = Option<MinoColor>;

/// Input events consumed by the game state, one batch per tick
///
/// Press/release pairs drive the held-direction auto-repeat timers;
/// the remaining events are one-shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeftPressed,
    MoveLeftReleased,
    MoveRightPressed,
    MoveRightReleased,
    SoftDropPressed,
    SoftDropReleased,
    /// Rotate piece clockwise (one template step)
    RotateCw,
    /// Rotate piece counter-clockwise
    RotateCcw,
    /// Drop the piece to its resting position and lock immediately
    HardDrop,
    /// Bank the current piece in the hold slot (once per piece lifetime)
    Hold,
    /// End the session
    Quit,
}

/// Discrete audio-cue signals emitted by the engine
///
/// The engine only signals occurrence; playback is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    HardDropPerformed,
    HoldPerformed,
}

/// Event emitted after a piece locks onto the board
///
/// Consumed by observers via `GameState::take_last_event`. `game_over` is
/// set when the lock itself ended the session (an illegal commit, which
/// under correct sequencing never happens).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub game_over: bool,
}

/// Engine configuration: board geometry, timing curves and score tables
///
/// Every numeric rule of the engine is a field here; there are no hidden
/// constants. All fields have defaults, and partial configs deserialize
/// with the missing fields defaulted.
///
/// # Examples
///
/// ```
/// use pentris_types::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.board_width, 12);
/// assert_eq!(config.spawn_column(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width in cells
    pub board_width: u32,
    /// Playfield height in cells
    pub board_height: u32,
    /// Gravity interval at level 0, in milliseconds
    pub fall_start_ms: u32,
    /// Gravity interval reduction per level
    pub fall_decrement_ms: u32,
    /// Gravity interval floor; the game never falls faster than this
    pub fall_floor_ms: u32,
    /// Held-direction sideways repeat interval at level 0
    pub sideways_start_ms: u32,
    /// Sideways repeat reduction per level
    pub sideways_decrement_ms: u32,
    /// Sideways repeat floor
    pub sideways_floor_ms: u32,
    /// Held soft-drop repeat interval at level 0
    pub soft_drop_start_ms: u32,
    /// Soft-drop repeat reduction per level
    pub soft_drop_decrement_ms: u32,
    /// Soft-drop repeat floor
    pub soft_drop_floor_ms: u32,
    /// Lines cleared per level step
    pub lines_per_level: u32,
    /// Base points by rows cleared in one lock (index 0 unused); clamped at
    /// the last entry and scaled by `(level + 1)`
    pub line_scores: [u32; 6],
    /// Points per cell of soft drop
    pub soft_drop_cell_score: u32,
    /// Points per cell of hard drop
    pub hard_drop_cell_score: u32,
}

impl GameConfig {
    /// Column where new pieces spawn
    ///
    /// Centers the widest templates: `board_width / 2 - 3`.
    pub fn spawn_column(&self) -> i32 {
        self.board_width as i32 / 2 - 3
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            fall_start_ms: 1000,
            fall_decrement_ms: 80,
            fall_floor_ms: 100,
            sideways_start_ms: 100,
            sideways_decrement_ms: 4,
            sideways_floor_ms: 40,
            soft_drop_start_ms: 80,
            soft_drop_decrement_ms: 4,
            soft_drop_floor_ms: 30,
            lines_per_level: 10,
            line_scores: [0, 100, 300, 500, 800, 1200],
            soft_drop_cell_score: 1,
            hard_drop_cell_score: 2,
        }
    }
}
