//! Ball kinematics and the auto-tracking paddle
//!
//! Reflect first, then move: the vertical velocity is flipped on the same
//! tick the ball leaves the bounce margins, so the reflected step applies
//! immediately and the ball never sinks more than one velocity unit into
//! the boundary.

use crate::consts::*;
use crate::render::RenderSink;
use crate::sim::state::GameState;

/// Whether the ball's vertical position is strictly inside the bounce
/// margins (no reflection needed).
fn inside_margins(y: f32) -> bool {
    y > BOUNCE_MARGIN_TOP && y < BOUNCE_MARGIN_BOTTOM
}

/// One slow tick of ball motion. Also drives the opposing paddle: a plain
/// proportional tracker that pins its center to the ball's y.
pub fn step_ball(state: &mut GameState, sink: &mut impl RenderSink) {
    let ball = &mut state.ball;
    if !inside_margins(ball.pos.y) {
        ball.vel.y = -ball.vel.y;
    }
    ball.pos += ball.vel;
    sink.ball(ball.pos.x, ball.pos.y);

    state.auto_paddle_y = state.ball.pos.y - PADDLE_HEIGHT / 2.0;
    sink.auto_paddle(state.auto_paddle_y);
}
