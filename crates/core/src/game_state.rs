//! Game state module - the falling-piece state machine
//!
//! Ties together the board, the bag, and the active/next/hold pieces, and
//! drives movement, gravity, locking, line clears and scoring from a single
//! per-tick entry point: [`GameState::update`]. The host calls it once per
//! frame with the elapsed time and the tick's batch of input events; every
//! call leaves the state fully consistent.
//!
//! Phases run `Spawning -> Falling -> Locking -> (LineClear) -> Spawning`,
//! with terminal `GameOver`. The gap between Locking and the next Spawning
//! is observable: `current` is absent for exactly one tick after a lock.
//!
//! Waiting is expressed as timer comparisons against accumulated elapsed
//! time; nothing here blocks or sleeps.

use arrayvec::ArrayVec;

use pentris_types::{AudioCue, GameConfig, InputEvent, LockEvent, MinoColor, SPAWN_ROW};

use crate::bag::{PieceBag, SimpleRng};
use crate::board::Board;
use crate::piece::Piece;
use crate::scoring::{
    drop_score, fall_interval_ms, level_for_lines, line_clear_score, sideways_interval_ms,
    soft_drop_interval_ms,
};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, PreviewSnapshot};

/// Audio cues drained per tick
pub type AudioCues = ArrayVec<AudioCue, 8>;

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    bag: PieceBag,
    /// Piece colors come from their own stream so the shape sequence of a
    /// seed is stable regardless of how many colors were drawn.
    color_rng: SimpleRng,
    current: Option<Piece>,
    next: Piece,
    hold: Option<Piece>,
    hold_used: bool,
    score: u32,
    level: u32,
    lines: u32,
    fall_timer_ms: u32,
    sideways_timer_ms: u32,
    soft_drop_timer_ms: u32,
    left_held: bool,
    right_held: bool,
    down_held: bool,
    cues: AudioCues,
    last_event: Option<LockEvent>,
    game_over: bool,
}

impl GameState {
    /// Create a session with the given config and RNG seed
    ///
    /// The first piece is already active; the host can start calling
    /// [`GameState::update`] immediately.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let mut bag = PieceBag::new(seed);
        let mut color_rng = SimpleRng::new(seed ^ 0xA511_E9B3);
        let current = Self::draw_piece(&mut bag, &mut color_rng, &config);
        let next = Self::draw_piece(&mut bag, &mut color_rng, &config);

        Self {
            board: Board::new(config.board_width, config.board_height),
            bag,
            color_rng,
            current: Some(current),
            next,
            hold: None,
            hold_used: false,
            score: 0,
            level: 0,
            lines: 0,
            fall_timer_ms: 0,
            sideways_timer_ms: 0,
            soft_drop_timer_ms: 0,
            left_held: false,
            right_held: false,
            down_held: false,
            cues: AudioCues::new(),
            last_event: None,
            game_over: false,
            config,
        }
    }

    fn draw_piece(bag: &mut PieceBag, color_rng: &mut SimpleRng, config: &GameConfig) -> Piece {
        let shape = bag.next_shape();
        let color = MinoColor::ALL[color_rng.next_range(MinoColor::ALL.len() as u32) as usize];
        Piece::new(shape, color, config.spawn_column(), SPAWN_ROW)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for hosts setting up scenarios
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The active falling piece, absent for one tick after a lock and
    /// permanently once the session is over
    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    /// The piece that spawns next
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    /// The banked piece, if any
    pub fn hold_piece(&self) -> Option<&Piece> {
        self.hold.as_ref()
    }

    /// Whether hold is still available for the active piece
    pub fn can_hold(&self) -> bool {
        !self.hold_used
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current bag RNG state, usable to restart with the same sequence
    pub fn seed(&self) -> u32 {
        self.bag.seed()
    }

    /// Per-frame entry point
    ///
    /// Processes the entire input batch and the internal timers
    /// synchronously: spawning first (if the previous tick locked), then
    /// input-driven movement, then gravity. Once the session is over this
    /// is a no-op.
    pub fn update(&mut self, elapsed_ms: u32, events: &[InputEvent]) {
        if self.game_over {
            return;
        }

        // Spawning: promote the piece drawn at the previous lock.
        if self.current.is_none() {
            self.spawn();
        }

        for &event in events {
            if self.game_over {
                return;
            }
            self.apply_event(event);
        }
        if self.game_over {
            return;
        }

        self.advance_timers(elapsed_ms);
    }

    fn apply_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::MoveLeftPressed => {
                self.left_held = true;
                if self.try_shift_left() {
                    self.sideways_timer_ms = 0;
                }
            }
            InputEvent::MoveLeftReleased => self.left_held = false,
            InputEvent::MoveRightPressed => {
                self.right_held = true;
                if self.try_shift_right() {
                    self.sideways_timer_ms = 0;
                }
            }
            InputEvent::MoveRightReleased => self.right_held = false,
            InputEvent::SoftDropPressed => {
                self.down_held = true;
                if self.try_soft_drop_cell() {
                    self.soft_drop_timer_ms = 0;
                }
            }
            InputEvent::SoftDropReleased => self.down_held = false,
            InputEvent::RotateCw => {
                self.try_rotate(true);
            }
            InputEvent::RotateCcw => {
                self.try_rotate(false);
            }
            InputEvent::HardDrop => self.hard_drop(),
            InputEvent::Hold => self.hold(),
            InputEvent::Quit => self.game_over = true,
        }
    }

    fn advance_timers(&mut self, elapsed_ms: u32) {
        self.sideways_timer_ms = self.sideways_timer_ms.saturating_add(elapsed_ms);
        if (self.left_held || self.right_held)
            && self.sideways_timer_ms >= sideways_interval_ms(self.level, &self.config)
        {
            let mut moved = false;
            if self.left_held {
                moved |= self.try_shift_left();
            }
            if self.right_held {
                moved |= self.try_shift_right();
            }
            if moved {
                self.sideways_timer_ms = 0;
            }
        }

        self.soft_drop_timer_ms = self.soft_drop_timer_ms.saturating_add(elapsed_ms);
        if self.down_held
            && self.soft_drop_timer_ms >= soft_drop_interval_ms(self.level, &self.config)
            && self.try_soft_drop_cell()
        {
            self.soft_drop_timer_ms = 0;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms >= fall_interval_ms(self.level, &self.config) {
            if self.try_fall_cell() {
                self.fall_timer_ms = 0;
            } else {
                // Resting on something: lock now, spawn on the next tick.
                self.lock_current();
            }
        }
    }

    /// Promote next to current; a blocked spawn ends the session
    fn spawn(&mut self) {
        let drawn = Self::draw_piece(&mut self.bag, &mut self.color_rng, &self.config);
        let piece = std::mem::replace(&mut self.next, drawn);
        if self.board.is_placement_valid(&piece) {
            self.current = Some(piece);
            self.hold_used = false;
            self.fall_timer_ms = 0;
        } else {
            self.game_over = true;
        }
    }

    fn try_shift_left(&mut self) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        piece.move_left();
        if self.board.is_placement_valid(piece) {
            true
        } else {
            piece.move_right();
            false
        }
    }

    fn try_shift_right(&mut self) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        piece.move_right();
        if self.board.is_placement_valid(piece) {
            true
        } else {
            piece.move_left();
            false
        }
    }

    fn try_fall_cell(&mut self) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        piece.move_down();
        if self.board.is_placement_valid(piece) {
            true
        } else {
            piece.move_up();
            false
        }
    }

    fn try_soft_drop_cell(&mut self) -> bool {
        if self.try_fall_cell() {
            self.score = self
                .score
                .saturating_add(drop_score(1, self.config.soft_drop_cell_score));
            true
        } else {
            false
        }
    }

    /// Attempt a rotation; rejection is binary, no wall kicks
    fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        if clockwise {
            piece.rotate_cw();
        } else {
            piece.rotate_ccw();
        }
        if self.board.is_placement_valid(piece) {
            true
        } else {
            if clockwise {
                piece.rotate_ccw();
            } else {
                piece.rotate_cw();
            }
            false
        }
    }

    /// Drop to the resting position, award per-cell points, lock immediately
    fn hard_drop(&mut self) {
        if self.current.is_none() {
            return;
        }
        let mut cells = 0u32;
        while self.try_fall_cell() {
            cells += 1;
        }
        self.score = self
            .score
            .saturating_add(drop_score(cells, self.config.hard_drop_cell_score));
        let _ = self.cues.try_push(AudioCue::HardDropPerformed);
        self.lock_current();
    }

    /// Bank the current piece; a no-op after the first use per lifetime
    fn hold(&mut self) {
        if self.hold_used {
            return;
        }
        let Some(mut outgoing) = self.current.take() else {
            return;
        };
        outgoing.reset(self.config.spawn_column(), SPAWN_ROW);

        let incoming = match self.hold.take() {
            Some(mut held) => {
                held.reset(self.config.spawn_column(), SPAWN_ROW);
                held
            }
            None => {
                let drawn = Self::draw_piece(&mut self.bag, &mut self.color_rng, &self.config);
                std::mem::replace(&mut self.next, drawn)
            }
        };
        self.hold = Some(outgoing);

        if self.board.is_placement_valid(&incoming) {
            self.current = Some(incoming);
            self.hold_used = true;
            self.fall_timer_ms = 0;
            let _ = self.cues.try_push(AudioCue::HoldPerformed);
        } else {
            // The swapped-in piece cannot spawn: session over.
            self.game_over = true;
        }
    }

    /// Commit the resting piece and resolve line clears and scoring
    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        if self.board.commit(&piece).is_err() {
            // Locking is only entered from a validated resting position; a
            // failed commit is an invariant violation and ends the session.
            self.game_over = true;
            self.last_event = Some(LockEvent {
                lines_cleared: 0,
                score_delta: 0,
                game_over: true,
            });
            return;
        }

        let cleared = self.board.clear_completed_rows();
        let delta = line_clear_score(cleared, self.level, &self.config);
        self.lines += cleared as u32;
        self.score = self.score.saturating_add(delta);
        self.level = level_for_lines(self.lines, &self.config);
        self.fall_timer_ms = 0;
        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            score_delta: delta,
            game_over: false,
        });
    }

    /// Row where the current piece would land if hard-dropped now
    ///
    /// Pure projection over a copy of the piece; the real piece is not
    /// touched.
    pub fn ghost_y(&self) -> Option<i32> {
        let piece = self.current.as_ref()?;
        let mut ghost = *piece;
        loop {
            ghost.move_down();
            if !self.board.is_placement_valid(&ghost) {
                ghost.move_up();
                return Some(ghost.y);
            }
        }
    }

    /// Drain the audio cues raised since the last call
    pub fn take_audio_cues(&mut self) -> AudioCues {
        std::mem::take(&mut self.cues)
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Write the drawable state into a reusable snapshot buffer
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_u8_grid(&mut out.board);
        out.active = self.current.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = PreviewSnapshot::from(&self.next);
        out.hold = self.hold.as_ref().map(PreviewSnapshot::from);
        out.can_hold = !self.hold_used;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.seed = self.bag.seed();
    }

    /// Allocate a fresh snapshot of the drawable state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}
