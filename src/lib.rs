//! Arrow Pong - a deterministic, headless Pong simulation
//!
//! One human paddle (arrow keys) against an auto-tracking paddle.
//!
//! Core modules:
//! - `sched`: Fixed-period tick scheduler (the sole driver of simulation time)
//! - `sim`: Deterministic simulation (input, kinematics, collisions, scoring)
//! - `game`: Wiring of scheduler, simulation state and render sink
//! - `render`: Output sink abstraction (positions/scores out, nothing back)

pub mod game;
pub mod render;
pub mod sched;
pub mod sim;

pub use game::Game;
pub use render::{MemorySink, NullSink, RenderError, RenderSink, SlotSink};
pub use sim::{
    Ball, GameOutcome, GamePhase, GameState, InputAccumulator, Key, KeyEdge, PaddleState, Score,
};

/// Game configuration constants (fixed, not externally configurable)
pub mod consts {
    /// Square play field edge length
    pub const FIELD_SIZE: f32 = 600.0;

    /// Paddle vertical bounds (exclusive - a paddle y must stay strictly inside)
    pub const PADDLE_TOP: f32 = 0.0;
    pub const PADDLE_BOTTOM: f32 = 530.0;
    /// Paddle bounding-box height
    pub const PADDLE_HEIGHT: f32 = 70.0;
    /// Paddle bounding-box width
    pub const PADDLE_WIDTH: f32 = 20.0;
    /// Paddle movement per fast tick while a direction key is held
    pub const PADDLE_STEP: f32 = 4.0;

    /// Human paddle x (fixed for the whole session)
    pub const HUMAN_PADDLE_X: f32 = 5.0;
    /// Human paddle starting y
    pub const HUMAN_PADDLE_START_Y: f32 = 200.0;
    /// Auto paddle x, mirroring the human paddle against the right edge
    pub const AUTO_PADDLE_X: f32 = 575.0;
    /// Auto paddle rest y, forced on game end
    pub const AUTO_PADDLE_REST_Y: f32 = 300.0;

    /// Ball half-extent for collision purposes
    pub const BALL_HALF_EXTENT: f32 = 10.0;
    /// Extra downward tolerance in the ball/paddle overlap test
    pub const BALL_LOWER_TOLERANCE: f32 = 20.0;
    /// Vertical bounce margins: the ball reflects once y leaves (top, bottom)
    pub const BOUNCE_MARGIN_TOP: f32 = 10.0;
    pub const BOUNCE_MARGIN_BOTTOM: f32 = 590.0;
    /// Ball starting position (also the re-center point after a score)
    pub const BALL_START_X: f32 = 300.0;
    pub const BALL_START_Y: f32 = 300.0;
    /// Ball starting velocity, per slow tick, both axes
    pub const BALL_START_VEL: f32 = 2.0;

    /// Input sampling period in clock units (crisp paddle response)
    pub const FAST_PERIOD: u64 = 3;
    /// Physics/collision/score/render period in clock units
    pub const SLOW_PERIOD: u64 = 5;

    /// Score at which a side is declared the winner
    pub const WIN_THRESHOLD: u32 = 7;
}
