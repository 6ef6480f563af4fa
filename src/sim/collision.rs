//! Ball/paddle collision detection
//!
//! Axis-aligned bounding-box overlap between the ball (a 10-unit
//! half-extent square with extra downward tolerance matching the paddle
//! height) and each paddle's box. An overlap negates the horizontal
//! velocity once per qualifying tick. There is no sub-tick debounce: a
//! ball still overlapping on the next tick flips again. That jitter is
//! observed behavior and is kept as-is.

use crate::consts::*;
use crate::sim::state::{Ball, GameState};

/// AABB overlap test between the ball and a paddle box anchored at
/// `(px, py)` (box `x ∈ [px, px+20]`, `y ∈ [py, py+70]`).
pub fn paddle_overlaps(px: f32, py: f32, ball: &Ball) -> bool {
    px <= ball.pos.x + BALL_HALF_EXTENT
        && px + PADDLE_WIDTH >= ball.pos.x - BALL_HALF_EXTENT
        && py <= ball.pos.y + BALL_HALF_EXTENT
        && py + PADDLE_HEIGHT >= ball.pos.y - BALL_LOWER_TOLERANCE
}

/// One slow tick of collision checking: reverse horizontal velocity if
/// either paddle's box overlaps the ball. Touches nothing but `xVel`.
pub fn check_collisions(state: &mut GameState) {
    let human = paddle_overlaps(state.paddle.x, state.paddle.y, &state.ball);
    let auto = paddle_overlaps(AUTO_PADDLE_X, state.auto_paddle_y, &state.ball);
    if human || auto {
        state.ball.vel.x = -state.ball.vel.x;
    }
}
