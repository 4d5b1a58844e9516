//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, kind source,
//! scoring and the gravity timer. It owns the authoritative session and is the
//! only place that mutates it.
//!
//! Every command and every gravity tick either applies completely or leaves the
//! state untouched; there are no error paths. The only terminal condition is a
//! spawn that does not fit, which moves the session to [`Phase::GameOver`].

use tracing::{debug, info};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{KindSource, SimpleRng};
use crate::scheduler::GravityTimer;
use crate::scoring::{calculate_level, calculate_line_score, get_drop_interval_ms};
use crate::snapshot::{compose_grid, preview_matrix, GameSnapshot};
use crate::types::{Command, Phase, PieceKind};

/// Summary of the most recent lock, drained by the host with [`GameState::take_last_event`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_awarded: u32,
    /// Level after the lock
    pub level: u32,
    /// The following spawn did not fit and ended the game
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = SimpleRng> {
    board: Board,
    /// `None` only after game over
    active: Option<Piece>,
    next: PieceKind,
    source: S,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u32,
    timer: GravityTimer,
    /// Bumped on every applied change
    revision: u32,
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: KindSource> GameState<S> {
    /// Create a new idle game drawing piece kinds from `source`
    pub fn with_source(mut source: S) -> Self {
        let active = Piece::spawn(source.next_kind());
        let next = source.next_kind();

        Self {
            board: Board::new(),
            active: Some(active),
            next,
            source,
            phase: Phase::Idle,
            score: 0,
            lines: 0,
            level: 1,
            timer: GravityTimer::new(),
            revision: 0,
            last_event: None,
        }
    }

    /// Replace the board of an idle game (puzzle setups and tests)
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Started and not over; a paused game is still running
    pub fn running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn paused(&self) -> bool {
        self.phase.is_paused()
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_game_over()
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

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn timer(&self) -> &GravityTimer {
        &self.timer
    }

    /// Current gravity interval derived from the level
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(self.level)
    }

    /// Milliseconds until the next gravity tick, `None` when gravity is stopped
    pub fn time_until_tick(&self) -> Option<u32> {
        self.timer.time_until_fire()
    }

    /// Command behind the HUD's primary button: Start, Resume (start) or Pause
    pub fn primary_command(&self) -> Command {
        match self.phase {
            Phase::Running => Command::Pause,
            Phase::Idle | Phase::Paused | Phase::GameOver => Command::Start,
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a command; returns false when it was rejected and nothing changed
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => self.soft_drop(),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Reset => self.reset(),
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1)
    }

    /// One gravity step on demand
    pub fn soft_drop(&mut self) -> bool {
        self.tick()
    }

    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };
        match active.rotated(&self.board) {
            Some(rotated) => {
                self.active = Some(rotated);
                self.commit();
                true
            }
            None => false,
        }
    }

    /// Drop to the resting row and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };
        self.active = Some(active.dropped(&self.board));
        self.lock_active();
        self.commit();
        true
    }

    /// Begin or resume play; after game over a fresh session starts
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Running => return false,
            Phase::GameOver => self.reset_session(),
            Phase::Idle | Phase::Paused => {}
        }
        self.phase = Phase::Running;
        info!(score = self.score, level = self.level, "game running");
        self.commit();
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        info!("game paused");
        self.commit();
        true
    }

    /// Return to a fresh idle session with new pieces
    pub fn reset(&mut self) -> bool {
        self.reset_session();
        info!("game reset");
        self.commit();
        true
    }

    /// One gravity step: descend a row, or lock when the piece cannot
    pub fn tick(&mut self) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };
        match active.translated(&self.board, 0, 1) {
            Some(lower) => self.active = Some(lower),
            None => self.lock_active(),
        }
        self.commit();
        true
    }

    /// Feed elapsed host time into the gravity timer
    ///
    /// Fires one tick per elapsed interval and returns how many fired. A level
    /// change re-arms the timer, dropping the leftover time of the old interval.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let mut fired = 0;
        let mut pending = elapsed_ms;
        while self.timer.advance(pending) {
            pending = 0;
            if self.tick() {
                fired += 1;
            }
        }
        fired
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        compose_grid(&self.board, self.active.as_ref(), &mut out.grid);
        out.next = self.next;
        out.preview = preview_matrix(self.next);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.phase = self.phase;
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn playable_piece(&self) -> Option<Piece> {
        if !self.phase.is_playable() {
            return None;
        }
        self.active
    }

    fn try_move(&mut self, dx: i8) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };
        match active.translated(&self.board, dx, 0) {
            Some(moved) => {
                self.active = Some(moved);
                self.commit();
                true
            }
            None => false,
        }
    }

    /// Lock the active piece, clear rows, score, and promote the next piece
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board = self.board.merge(&active);
        let cleared = self.board.clear_full_rows().len();

        let awarded = calculate_line_score(cleared, self.level);
        let previous_level = self.level;
        self.score = self.score.saturating_add(awarded);
        self.lines = self.lines.saturating_add(cleared as u32);
        self.level = calculate_level(self.lines);

        debug!(
            kind = %active.kind,
            x = active.x,
            y = active.y,
            lines_cleared = cleared,
            score_awarded = awarded,
            "piece locked"
        );
        if self.level != previous_level {
            info!(level = self.level, lines = self.lines, "level up");
        }

        let incoming = Piece::spawn(self.next);
        self.next = self.source.next_kind();

        let topped_out = !self.board.fits(&incoming);
        if topped_out {
            self.phase = Phase::GameOver;
            info!(
                score = self.score,
                level = self.level,
                lines = self.lines,
                "game over"
            );
        } else {
            self.active = Some(incoming);
        }

        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared: cleared as u32,
            score_awarded: awarded,
            level: self.level,
            topped_out,
        });
    }

    fn reset_session(&mut self) {
        self.board.clear();
        self.active = Some(Piece::spawn(self.source.next_kind()));
        self.next = self.source.next_kind();
        self.phase = Phase::Idle;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.last_event = None;
    }

    /// Record an applied change and re-evaluate the gravity timer
    fn commit(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        let desired = self
            .phase
            .is_playable()
            .then(|| get_drop_interval_ms(self.level));
        self.timer.sync(desired);
    }
}
