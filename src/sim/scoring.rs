//! Boundary scoring
//!
//! Two independent slow-tick watchers, one per side, plus a publisher that
//! pushes both scores to the sink every slow tick whether or not they
//! changed. The `< WIN_THRESHOLD` guard caps a side at 7 and doubles as
//! the turn coupon: on the 7th point nothing increments past it. The
//! watchers never halt anything - the controller does that.

use crate::consts::WIN_THRESHOLD;
use crate::render::RenderSink;
use crate::sim::state::{GameOutcome, GameState};

/// Left boundary watcher: the ball leaving past `x < 0` scores for
/// player 1, re-centers the ball (velocity untouched) and, on the winning
/// point, derives the terminal outcome.
pub fn check_left(state: &mut GameState, sink: &mut impl RenderSink) {
    if state.ball.pos.x < 0.0 && state.score.p1 < WIN_THRESHOLD {
        state.score.p1 += 1;
        state.ball.recenter();
        log::info!("player 1 scores: {} - {}", state.score.p1, state.score.p2);
        if state.score.p1 == WIN_THRESHOLD {
            announce(state, GameOutcome::Player1Won, sink);
        }
    }
}

/// Right boundary watcher, symmetric on `x > 600` for player 2.
pub fn check_right(state: &mut GameState, sink: &mut impl RenderSink) {
    if state.ball.pos.x > crate::consts::FIELD_SIZE && state.score.p2 < WIN_THRESHOLD {
        state.score.p2 += 1;
        state.ball.recenter();
        log::info!("player 2 scores: {} - {}", state.score.p1, state.score.p2);
        if state.score.p2 == WIN_THRESHOLD {
            announce(state, GameOutcome::Player2Won, sink);
        }
    }
}

/// Push both scores as text, every slow tick.
pub fn publish_scores(state: &GameState, sink: &mut impl RenderSink) {
    sink.scores(state.score.p1, state.score.p2);
}

fn announce(state: &mut GameState, outcome: GameOutcome, sink: &mut impl RenderSink) {
    state.outcome = Some(outcome);
    sink.winner(outcome.label());
    log::info!("{}", outcome.label());
}
