//! Core rules engine - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: same seed produces identical sessions
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: runs in any host (terminal, GUI, headless)
//! - **Frugal**: the per-tick path allocates nothing in steady state
//!
//! # Module Structure
//!
//! - [`board`]: the grid of locked cells, collision checks, line clearing
//! - [`catalog`]: the 18 pentomino shapes and their rotation templates
//! - [`piece`]: the active falling piece
//! - [`bag`]: fair random shape generation over the full catalog
//! - [`game_state`]: the state machine tying everything together
//! - [`scoring`]: score tables and level-dependent timing curves
//! - [`snapshot`]: the read-only view a renderer draws from
//!
//! # Game Rules
//!
//! - **Pentominoes**: every piece covers exactly five cells; there are 18
//!   shapes, including both chiralities of the asymmetric ones
//! - **Bag randomizer**: shapes are drawn without replacement from a bag of
//!   all 18, so no shape can starve
//! - **Plain rotation**: a rotation that does not fit is rejected outright,
//!   no wall kicks
//! - **Immediate lock**: a piece that fails its gravity step locks on that
//!   tick, no lock delay
//! - **Ghost piece**: shows where the current piece would land
//! - **Hold**: bank one piece, once per piece lifetime
//! - **Scoring**: table-driven line scores scaled by level, plus per-cell
//!   drop points
//!
//! # Example
//!
//! ```
//! use pentris_core::GameState;
//! use pentris_core::types::{GameConfig, InputEvent};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//!
//! // One tick: move right, then slam the piece down.
//! game.update(16, &[InputEvent::MoveRightPressed, InputEvent::MoveRightReleased]);
//! game.update(16, &[InputEvent::HardDrop]);
//!
//! assert!(game.score() > 0); // hard drop awards points per cell
//! ```
//!
//! # Timing
//!
//! Waiting is expressed as durations, not frames: call
//! [`GameState::update`] every frame with the elapsed milliseconds and the
//! tick's input events. Gravity starts at 1000ms per row at level 0 and
//! speeds up per level down to a floor; held directions auto-repeat on
//! their own, faster curves.

pub mod bag;
pub mod board;
pub mod catalog;
pub mod game_state;
pub mod piece;
pub mod scoring;
pub mod snapshot;

pub use pentris_types as types;

// Re-export commonly used types for convenience
pub use bag::{PieceBag, SimpleRng};
pub use board::{Board, BoardError};
pub use catalog::{Shape, ShapeCatalog, Template};
pub use game_state::{AudioCues, GameState};
pub use piece::Piece;
pub use scoring::{drop_score, fall_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot, PreviewSnapshot};
