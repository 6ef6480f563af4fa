//! Deterministic simulation module
//!
//! All gameplay logic lives here. Every handler is synchronous and
//! non-blocking, driven by the clock in [`crate::sched`]:
//! - Fixed tick periods only (fast for input, slow for physics)
//! - Stable dispatch order (registration order breaks ties)
//! - No rendering or platform dependencies beyond the sink trait

pub mod collision;
pub mod controller;
pub mod input;
pub mod motion;
pub mod scoring;
pub mod state;

pub use input::{InputAccumulator, InputCommand, Key, KeyEdge};
pub use state::{Ball, GameOutcome, GamePhase, GameState, PaddleState, Score};
