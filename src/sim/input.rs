//! Key input accumulation
//!
//! Converts raw key-down/key-up edges into per-key step timers and folds
//! the resulting step values into the paddle state. Only the two vertical
//! movement keys matter; auto-repeat edges are ignored (a held key makes
//! exactly one pressed transition). While a key is held, its step task
//! fires once per fast clock tick; the matching release cancels exactly
//! that task. Both keys held at once means two live tasks whose emissions
//! interleave in scheduler delivery order, folded sequentially - one
//! logical event queue, no races.

use crate::consts::PADDLE_STEP;
use crate::render::RenderSink;
use crate::sched::TaskHandle;
use crate::sim::state::GameState;

/// The two meaningful movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    /// Map a raw key code to a movement key. Everything else is noise.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }

    /// Signed movement quantum per fast tick while held.
    pub fn step(self) -> f32 {
        match self {
            Key::Up => -PADDLE_STEP,
            Key::Down => PADDLE_STEP,
        }
    }

    fn index(self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
        }
    }
}

/// A raw keyboard edge event, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge<'a> {
    Pressed { code: &'a str, repeat: bool },
    Released { code: &'a str },
}

/// What the game loop must do with the clock in response to an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Spawn a fast-period step task for this key.
    Spawn(Key),
    /// Cancel this key's step task.
    Cancel(TaskHandle),
}

/// Tracks which keys currently drive a step task. Disabled permanently at
/// game end: held tasks are handed back for cancellation and later presses
/// spawn nothing.
#[derive(Debug, Default)]
pub struct InputAccumulator {
    held: [Option<TaskHandle>; 2],
    enabled: bool,
}

impl InputAccumulator {
    pub fn new() -> Self {
        Self {
            held: [None, None],
            enabled: true,
        }
    }

    /// Decide what a raw edge means. Pure bookkeeping; the caller owns the
    /// clock and performs the returned command, then reports a spawned
    /// handle back via [`InputAccumulator::bind`].
    pub fn on_edge(&mut self, edge: KeyEdge<'_>) -> Option<InputCommand> {
        match edge {
            KeyEdge::Pressed { code, repeat } => {
                if !self.enabled || repeat {
                    return None;
                }
                let key = Key::from_code(code)?;
                if self.held[key.index()].is_some() {
                    return None;
                }
                Some(InputCommand::Spawn(key))
            }
            KeyEdge::Released { code } => {
                let key = Key::from_code(code)?;
                self.held[key.index()].take().map(InputCommand::Cancel)
            }
        }
    }

    /// Record the task handle backing a held key.
    pub fn bind(&mut self, key: Key, handle: TaskHandle) {
        self.held[key.index()] = Some(handle);
    }

    /// Tear down: disable further input and hand back any live step tasks
    /// for cancellation. Idempotent - a second call yields nothing.
    pub fn shutdown(&mut self) -> Vec<TaskHandle> {
        self.enabled = false;
        self.held.iter_mut().filter_map(Option::take).collect()
    }
}

/// One accepted step tick: fold the step into the paddle via the pure
/// reducer, forward the result only if strictly in bounds. Dropped states
/// leave the last forwarded one current, so the next legal step resumes
/// from inside the field.
pub fn apply_step(state: &mut GameState, key: Key, sink: &mut impl RenderSink) {
    let candidate = state.paddle.stepped(key.step());
    if candidate.in_bounds() {
        state.paddle = candidate;
        sink.paddle(candidate.x, candidate.y);
    }
}
