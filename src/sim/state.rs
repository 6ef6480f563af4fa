//! Simulation state and core types
//!
//! All mutable state lives here, owned by one single-threaded dispatch
//! loop; handlers write it in place between ticks without any locking.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Human paddle state. An immutable value type: every accepted input step
/// produces a new `PaddleState` via [`PaddleState::stepped`], and only
/// in-bounds values replace the current one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleState {
    /// Fixed for the whole session.
    pub x: f32,
    pub y: f32,
}

impl PaddleState {
    pub fn initial() -> Self {
        Self {
            x: HUMAN_PADDLE_X,
            y: HUMAN_PADDLE_START_Y,
        }
    }

    /// Pure reducer: apply one signed step, preserving everything else.
    pub fn stepped(self, step: f32) -> Self {
        Self {
            y: self.y + step,
            ..self
        }
    }

    /// Strictly inside the vertical play bounds. Out-of-bounds states are
    /// produced and then discarded, so the paddle stops at the wall.
    pub fn in_bounds(&self) -> bool {
        self.y > PADDLE_TOP && self.y < PADDLE_BOTTOM
    }
}

/// The ball. Written in place by kinematics, collision and scoring
/// handlers. Velocity magnitudes stay constant for the session; only the
/// signs flip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn initial() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::new(BALL_START_VEL, BALL_START_VEL),
        }
    }

    /// Re-center after a score. Velocity keeps whatever direction and
    /// magnitude it had.
    pub fn recenter(&mut self) {
        self.pos = Vec2::new(BALL_START_X, BALL_START_Y);
    }
}

/// One counter per side. Monotonically non-decreasing, capped at the win
/// threshold by the scoring guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub p1: u32,
    pub p2: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether either side has reached the win threshold.
    pub fn has_winner(&self) -> bool {
        self.p1 >= WIN_THRESHOLD || self.p2 >= WIN_THRESHOLD
    }
}

/// Terminal outcome, derived the moment a score reaches the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Player1Won,
    Player2Won,
}

impl GameOutcome {
    /// User-visible announcement text.
    pub fn label(&self) -> &'static str {
        match self {
            GameOutcome::Player1Won => "Player 1 Won",
            GameOutcome::Player2Won => "Player 2 Won",
        }
    }
}

/// Controller state machine. `Ended` is terminal; a fresh game requires
/// building a new [`crate::Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    Ended,
}

/// Complete simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub paddle: PaddleState,
    pub ball: Ball,
    /// Auto paddle y, driven by ball tracking until game end.
    pub auto_paddle_y: f32,
    pub score: Score,
    pub outcome: Option<GameOutcome>,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            paddle: PaddleState::initial(),
            ball: Ball::initial(),
            auto_paddle_y: AUTO_PADDLE_REST_Y,
            score: Score::new(),
            outcome: None,
            phase: GamePhase::Running,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
