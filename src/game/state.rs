use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::game::{Board, Piece, ShapeKind, Turn, random_kind};
use crate::{BOARD_H, BOARD_W, DROP_INTERVAL};

/// Discrete player requests, one per input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateClockwise,
    RotateCounterClockwise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Fell,
    /// The piece was merged into the board and a new one spawned.
    Locked { lines: usize },
}

pub struct Game {
    pub board: Board,
    pub current: Piece,
    pub lines_cleared: u64,
    pub top_outs: u64,
    drop_counter: Duration,
    rng: StdRng,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Same piece sequence for the same seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut game = Self {
            board: Board::new(BOARD_W, BOARD_H),
            current: Piece::spawn(ShapeKind::I, BOARD_W),
            lines_cleared: 0,
            top_outs: 0,
            drop_counter: Duration::ZERO,
            rng,
        };
        game.reset();
        game
    }

    pub fn drop_counter(&self) -> Duration {
        self.drop_counter
    }

    /// Spawns a random piece; see [`Game::reset_to`].
    pub fn reset(&mut self) -> bool {
        let kind = random_kind(&mut self.rng);
        self.reset_to(kind)
    }

    /// Puts a fresh `kind` piece at the spawn point. If it collides right
    /// away the board is wiped and the piece keeps its spawn placement.
    /// Returns true on such a top-out.
    pub fn reset_to(&mut self, kind: ShapeKind) -> bool {
        self.current = Piece::spawn(kind, self.board.width());
        trace!(kind = %kind.name(), x = self.current.x, "spawned piece");
        if self.board.collides(&self.current) {
            self.board.clear();
            self.top_outs += 1;
            info!(top_outs = self.top_outs, "topped out, board cleared");
            return true;
        }
        false
    }

    pub fn move_current(&mut self, dx: i32) -> bool {
        let next = self.current.shifted(dx, 0);
        if self.board.collides(&next) {
            return false;
        }
        self.current = next;
        true
    }

    /// Rotation is vetoed outright on collision; there are no wall kicks.
    pub fn rotate_current(&mut self, turn: Turn) -> bool {
        let next = self.current.rotated(turn);
        if self.board.collides(&next) {
            return false;
        }
        self.current = next;
        true
    }

    /// Moves the piece down one row, locking it when it cannot fall.
    /// Always restarts the fall timer.
    pub fn drop_current(&mut self) -> DropOutcome {
        self.drop_counter = Duration::ZERO;
        let next = self.current.shifted(0, 1);
        if !self.board.collides(&next) {
            self.current = next;
            return DropOutcome::Fell;
        }

        self.board.merge(&self.current);
        let lines = self.board.sweep();
        self.lines_cleared += lines as u64;
        debug!(
            kind = %self.current.kind.name(),
            x = self.current.x,
            y = self.current.y,
            lines,
            "piece locked"
        );
        self.reset();
        DropOutcome::Locked { lines }
    }

    /// Advances the fall timer, dropping once it passes the interval.
    pub fn tick(&mut self, delta: Duration) -> Option<DropOutcome> {
        self.drop_counter += delta;
        if self.drop_counter > DROP_INTERVAL {
            Some(self.drop_current())
        } else {
            None
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveLeft => {
                let _ = self.move_current(-1);
            }
            Action::MoveRight => {
                let _ = self.move_current(1);
            }
            Action::SoftDrop => {
                let _ = self.drop_current();
            }
            Action::RotateClockwise => {
                let _ = self.rotate_current(Turn::Clockwise);
            }
            Action::RotateCounterClockwise => {
                let _ = self.rotate_current(Turn::CounterClockwise);
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
