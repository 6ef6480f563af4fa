//! Render sink abstraction
//!
//! The simulation never draws; it pushes computed positions, scores and
//! the win announcement into a [`RenderSink`] and forgets about them. The
//! sink is assumed to merely reflect state - no value flows back.
//!
//! Binding a sink to its presentation targets is the one fallible step in
//! the whole system: a missing target aborts initialization (fail fast)
//! instead of silently no-opping during the game loop.

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while acquiring presentation targets.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("missing presentation target: {0}")]
    MissingTarget(&'static str),
}

/// Output sink for computed simulation state.
pub trait RenderSink {
    /// Human paddle position (x is fixed, forwarded anyway for the sink's
    /// convenience).
    fn paddle(&mut self, x: f32, y: f32);
    /// Auto-tracking paddle vertical position.
    fn auto_paddle(&mut self, y: f32);
    /// Ball translation.
    fn ball(&mut self, x: f32, y: f32);
    /// Both scores, every slow tick, changed or not.
    fn scores(&mut self, p1: u32, p2: u32);
    /// Terminal outcome announcement ("Player 1 Won" / "Player 2 Won").
    fn winner(&mut self, text: &str);
}

/// Sink that discards everything (simulation-only runs).
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn paddle(&mut self, _x: f32, _y: f32) {}
    fn auto_paddle(&mut self, _y: f32) {}
    fn ball(&mut self, _x: f32, _y: f32) {}
    fn scores(&mut self, _p1: u32, _p2: u32) {}
    fn winner(&mut self, _text: &str) {}
}

/// Sink that records every call, newest last. Used by tests and debugging
/// to assert on exactly what the simulation pushed out.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub paddle: Vec<(f32, f32)>,
    pub auto_paddle: Vec<f32>,
    pub ball: Vec<(f32, f32)>,
    pub scores: Vec<(u32, u32)>,
    pub winner: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_paddle(&self) -> Option<(f32, f32)> {
        self.paddle.last().copied()
    }

    pub fn last_ball(&self) -> Option<(f32, f32)> {
        self.ball.last().copied()
    }
}

impl RenderSink for MemorySink {
    fn paddle(&mut self, x: f32, y: f32) {
        self.paddle.push((x, y));
    }

    fn auto_paddle(&mut self, y: f32) {
        self.auto_paddle.push(y);
    }

    fn ball(&mut self, x: f32, y: f32) {
        self.ball.push((x, y));
    }

    fn scores(&mut self, p1: u32, p2: u32) {
        self.scores.push((p1, p2));
    }

    fn winner(&mut self, text: &str) {
        self.winner = Some(text.to_owned());
    }
}

/// Named text slots a [`SlotSink`] writes into, one per presentation
/// element of the original page layout.
pub const REQUIRED_SLOTS: [&str; 6] = [
    "ball", "player1", "player2", "p1score", "p2score", "winner",
];

/// Sink backed by a set of labeled text slots, standing in for a host
/// page's elements. All required slots must exist up front; [`SlotSink::bind`]
/// fails otherwise.
#[derive(Debug)]
pub struct SlotSink {
    slots: HashMap<String, String>,
}

impl SlotSink {
    /// Bind to a slot store, verifying every required target is present.
    pub fn bind(slots: HashMap<String, String>) -> Result<Self, RenderError> {
        for name in REQUIRED_SLOTS {
            if !slots.contains_key(name) {
                return Err(RenderError::MissingTarget(name));
            }
        }
        Ok(Self { slots })
    }

    /// Bind to a freshly created store containing all required slots.
    pub fn with_default_slots() -> Self {
        let slots = REQUIRED_SLOTS
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();
        Self { slots }
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }

    fn set(&mut self, name: &str, value: String) {
        // Presence was verified at bind time.
        if let Some(slot) = self.slots.get_mut(name) {
            *slot = value;
        }
    }
}

impl RenderSink for SlotSink {
    fn paddle(&mut self, x: f32, y: f32) {
        self.set("player1", format!("({x}, {y})"));
    }

    fn auto_paddle(&mut self, y: f32) {
        self.set("player2", format!("{y}"));
    }

    fn ball(&mut self, x: f32, y: f32) {
        self.set("ball", format!("translate({x}, {y})"));
    }

    fn scores(&mut self, p1: u32, p2: u32) {
        self.set("p1score", format!("{p1}"));
        self.set("p2score", format!("{p2}"));
    }

    fn winner(&mut self, text: &str) {
        self.set("winner", text.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_fails_fast_on_missing_target() {
        let mut slots: HashMap<String, String> = REQUIRED_SLOTS
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();
        slots.remove("winner");

        let err = SlotSink::bind(slots).unwrap_err();
        assert!(matches!(err, RenderError::MissingTarget("winner")));
    }

    #[test]
    fn test_slot_sink_reflects_pushes() {
        let mut sink = SlotSink::with_default_slots();
        sink.paddle(5.0, 240.0);
        sink.ball(300.0, 300.0);
        sink.scores(3, 1);
        sink.winner("Player 1 Won");

        assert_eq!(sink.slot("player1"), Some("(5, 240)"));
        assert_eq!(sink.slot("ball"), Some("translate(300, 300)"));
        assert_eq!(sink.slot("p1score"), Some("3"));
        assert_eq!(sink.slot("p2score"), Some("1"));
        assert_eq!(sink.slot("winner"), Some("Player 1 Won"));
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        sink.ball(302.0, 302.0);
        sink.ball(304.0, 304.0);
        assert_eq!(sink.ball, vec![(302.0, 302.0), (304.0, 304.0)]);
        assert_eq!(sink.last_ball(), Some((304.0, 304.0)));
    }
}
