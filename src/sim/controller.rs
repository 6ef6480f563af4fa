//! Game-over controller
//!
//! Two-state machine: `Running` until either score reaches the win
//! threshold, then `Ended`, forever. The transition fires exactly once;
//! the actual teardown (cancelling the input and ball-motion tasks) is
//! performed by the game loop, which owns the clock handles.

use crate::sim::state::{GamePhase, GameState};

/// Per-tick end check. Returns `true` only on the single tick that
/// transitions `Running -> Ended`; re-evaluation after that is a no-op,
/// so the controller task keeps running harmlessly post-teardown.
pub fn check_end(state: &mut GameState) -> bool {
    if state.phase == GamePhase::Running && state.score.has_winner() {
        state.phase = GamePhase::Ended;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::WIN_THRESHOLD;

    #[test]
    fn test_running_below_threshold() {
        let mut state = GameState::new();
        state.score.p1 = WIN_THRESHOLD - 1;
        assert!(!check_end(&mut state));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_transition_fires_once_for_either_side() {
        let mut state = GameState::new();
        state.score.p2 = WIN_THRESHOLD;
        assert!(check_end(&mut state));
        assert_eq!(state.phase, GamePhase::Ended);
        // Idempotent on every later tick.
        assert!(!check_end(&mut state));
        assert!(!check_end(&mut state));
    }

    #[test]
    fn test_ended_is_terminal() {
        let mut state = GameState::new();
        state.score.p1 = WIN_THRESHOLD;
        assert!(check_end(&mut state));
        state.score.p1 = 0;
        assert!(!check_end(&mut state));
        assert_eq!(state.phase, GamePhase::Ended);
    }
}
