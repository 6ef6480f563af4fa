//! Arrow Pong headless demo
//!
//! Drives a full game against the auto-tracking paddle with a short
//! scripted burst of key input, then lets the clock run until one side
//! reaches the win threshold. State snapshots go to the log as JSON; the
//! final presentation slots are printed at the end.

use std::collections::HashMap;

use arrow_pong::render::{REQUIRED_SLOTS, RenderError, SlotSink};
use arrow_pong::{Game, KeyEdge};

/// Hard stop for the demo loop, in clock units. A normal game ends well
/// before this; hitting it means something upstream broke determinism.
const MAX_UNITS: u64 = 200_000;

/// Units to advance between snapshot logs.
const CHUNK_UNITS: u64 = 500;

fn main() -> Result<(), RenderError> {
    env_logger::init();

    // The host page would normally provide these targets; the demo fakes
    // them as empty text slots. Binding still fail-fasts if one is absent.
    let slots: HashMap<String, String> = REQUIRED_SLOTS
        .iter()
        .map(|name| (name.to_string(), String::new()))
        .collect();
    let sink = SlotSink::bind(slots)?;

    let mut game = Game::new(sink);
    log::info!("arrow-pong demo starting");

    // Nudge the paddle down for 10 fast ticks, then let it sit.
    game.key_edge(KeyEdge::Pressed {
        code: "ArrowDown",
        repeat: false,
    });
    game.advance(30);
    game.key_edge(KeyEdge::Released { code: "ArrowDown" });

    let mut elapsed = 30;
    while game.outcome().is_none() && elapsed < MAX_UNITS {
        game.advance(CHUNK_UNITS);
        elapsed += CHUNK_UNITS;
        match serde_json::to_string(game.state()) {
            Ok(snapshot) => log::debug!("t={elapsed} {snapshot}"),
            Err(err) => log::warn!("snapshot serialization failed: {err}"),
        }
    }

    match game.outcome() {
        Some(outcome) => println!("{}", outcome.label()),
        None => println!("no winner after {MAX_UNITS} units"),
    }
    for name in REQUIRED_SLOTS {
        let value = game.sink().slot(name).unwrap_or_default();
        println!("{name:>8}: {value}");
    }

    Ok(())
}
