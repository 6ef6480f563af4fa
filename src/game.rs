//! Game wiring
//!
//! Owns the clock, the simulation state, the input accumulator and the
//! render sink, and dispatches due tasks in deterministic order. The slow
//! tasks are registered once at startup (ball motion, collision, score
//! publisher, both score watchers, controller); per-key step tasks come
//! and go with key edges. Teardown on game end cancels exactly the input
//! and ball-motion subscriptions; everything else keeps ticking, rejected
//! by its own guards.

use crate::consts::*;
use crate::render::RenderSink;
use crate::sched::{Clock, TaskHandle};
use crate::sim::state::{GameOutcome, GameState};
use crate::sim::{InputAccumulator, InputCommand, Key, KeyEdge};
use crate::sim::{collision, controller, input, motion, scoring};

/// Everything the clock can ask the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskKind {
    /// One held-key movement quantum (fast period).
    PaddleStep(Key),
    BallMotion,
    Collision,
    PublishScores,
    ScoreLeft,
    ScoreRight,
    GameOver,
}

/// A complete game: call [`Game::key_edge`] for raw keyboard edges and
/// [`Game::advance`] to let simulation time elapse.
pub struct Game<S: RenderSink> {
    clock: Clock<TaskKind>,
    state: GameState,
    input: InputAccumulator,
    sink: S,
    ball_task: TaskHandle,
}

impl<S: RenderSink> Game<S> {
    /// Wire a fresh game to a sink. Registration order here is load-bearing:
    /// it fixes the within-tick delivery order of every watcher.
    pub fn new(sink: S) -> Self {
        let mut clock = Clock::new();
        let ball_task = clock.schedule(SLOW_PERIOD, TaskKind::BallMotion);
        clock.schedule(SLOW_PERIOD, TaskKind::Collision);
        clock.schedule(SLOW_PERIOD, TaskKind::PublishScores);
        clock.schedule(SLOW_PERIOD, TaskKind::ScoreLeft);
        clock.schedule(SLOW_PERIOD, TaskKind::ScoreRight);
        clock.schedule(SLOW_PERIOD, TaskKind::GameOver);

        log::debug!("game wired: slow={SLOW_PERIOD} fast={FAST_PERIOD}");
        Self {
            clock,
            state: GameState::new(),
            input: InputAccumulator::new(),
            sink,
            ball_task,
        }
    }

    /// Feed one raw keyboard edge.
    pub fn key_edge(&mut self, edge: KeyEdge<'_>) {
        match self.input.on_edge(edge) {
            Some(InputCommand::Spawn(key)) => {
                let handle = self.clock.schedule(FAST_PERIOD, TaskKind::PaddleStep(key));
                self.input.bind(key, handle);
            }
            Some(InputCommand::Cancel(handle)) => self.clock.cancel(handle),
            None => {}
        }
    }

    /// Let `units` clock units elapse, dispatching every task that falls
    /// due along the way.
    pub fn advance(&mut self, units: u64) {
        let deadline = self.clock.now() + units;
        while let Some((_, kind)) = self.clock.pop_due(deadline) {
            self.dispatch(kind);
        }
        self.clock.advance_to(deadline);
    }

    fn dispatch(&mut self, kind: TaskKind) {
        match kind {
            TaskKind::PaddleStep(key) => input::apply_step(&mut self.state, key, &mut self.sink),
            TaskKind::BallMotion => motion::step_ball(&mut self.state, &mut self.sink),
            TaskKind::Collision => collision::check_collisions(&mut self.state),
            TaskKind::PublishScores => scoring::publish_scores(&self.state, &mut self.sink),
            TaskKind::ScoreLeft => scoring::check_left(&mut self.state, &mut self.sink),
            TaskKind::ScoreRight => scoring::check_right(&mut self.state, &mut self.sink),
            TaskKind::GameOver => {
                if controller::check_end(&mut self.state) {
                    self.teardown();
                }
            }
        }
    }

    /// Centralized shutdown: cancel the motion-producing subscriptions and
    /// park the auto paddle. Idempotent by construction - the controller
    /// only reports the end transition once, and cancellation itself is
    /// a no-op the second time.
    fn teardown(&mut self) {
        self.clock.cancel(self.ball_task);
        for handle in self.input.shutdown() {
            self.clock.cancel(handle);
        }
        self.state.auto_paddle_y = AUTO_PADDLE_REST_Y;
        self.sink.auto_paddle(AUTO_PADDLE_REST_Y);
        log::info!(
            "simulation halted at {} - {}",
            self.state.score.p1,
            self.state.score.p2
        );
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemorySink;
    use crate::sim::state::GamePhase;
    use glam::Vec2;

    fn press(game: &mut Game<MemorySink>, code: &str) {
        game.key_edge(KeyEdge::Pressed {
            code,
            repeat: false,
        });
    }

    fn release(game: &mut Game<MemorySink>, code: &str) {
        game.key_edge(KeyEdge::Released { code });
    }

    /// Scenario A: hold Down for 10 fast ticks from y=200.
    #[test]
    fn test_held_key_accumulates_steps() {
        let mut game = Game::new(MemorySink::new());
        press(&mut game, "ArrowDown");
        game.advance(30);
        release(&mut game, "ArrowDown");

        assert_eq!(game.state().paddle.y, 240.0);
        assert_eq!(game.sink().last_paddle(), Some((5.0, 240.0)));
        assert_eq!(game.sink().paddle.len(), 10);

        // Released: further time moves nothing.
        game.advance(30);
        assert_eq!(game.state().paddle.y, 240.0);
    }

    /// Scenario B: left crossing scores for player 1 and re-centers.
    #[test]
    fn test_left_crossing_scores_player_1() {
        let mut game = Game::new(MemorySink::new());
        game.state.ball.pos = Vec2::new(5.0, 300.0);
        game.state.ball.vel = Vec2::new(-2.0, 2.0);

        // Three slow ticks take the ball to x=-1; the same tick's left
        // watcher scores and resets.
        game.advance(15);
        assert_eq!(game.state().score.p1, 1);
        assert_eq!(game.state().ball.pos, Vec2::new(300.0, 300.0));
        assert_eq!(game.state().ball.vel, Vec2::new(-2.0, 2.0));
        assert_eq!(game.outcome(), None);
    }

    /// Scenario C: the 7th point halts all motion deterministically.
    #[test]
    fn test_winning_point_freezes_simulation() {
        let mut game = Game::new(MemorySink::new());
        game.state.score.p1 = 6;
        game.state.ball.pos = Vec2::new(5.0, 300.0);
        game.state.ball.vel = Vec2::new(-2.0, 2.0);
        press(&mut game, "ArrowDown");

        game.advance(15);
        assert_eq!(game.state().score.p1, 7);
        assert_eq!(game.outcome(), Some(GameOutcome::Player1Won));
        assert_eq!(game.sink().winner.as_deref(), Some("Player 1 Won"));
        assert_eq!(game.state().phase, GamePhase::Ended);
        assert_eq!(game.state().auto_paddle_y, AUTO_PADDLE_REST_Y);

        let paddle_y = game.state().paddle.y;
        let ball = game.state().ball.pos;
        let paddle_pushes = game.sink().paddle.len();
        let ball_pushes = game.sink().ball.len();

        // Ticks keep coming; nothing moves and nothing new is rendered
        // for the cancelled subscriptions.
        game.advance(200);
        press(&mut game, "ArrowUp");
        game.advance(200);

        assert_eq!(game.state().paddle.y, paddle_y);
        assert_eq!(game.state().ball.pos, ball);
        assert_eq!(game.sink().paddle.len(), paddle_pushes);
        assert_eq!(game.sink().ball.len(), ball_pushes);
        // Harmless loops still run: scores keep being published.
        assert_eq!(game.sink().scores.last(), Some(&(7, 0)));
    }

    #[test]
    fn test_opposing_keys_interleave_through_one_queue() {
        let mut game = Game::new(MemorySink::new());
        press(&mut game, "ArrowDown");
        press(&mut game, "ArrowUp");
        game.advance(9);

        // Down was pressed first, so each fast tick folds +4 then -4.
        assert_eq!(game.state().paddle.y, 200.0);
        let ys: Vec<f32> = game.sink().paddle.iter().map(|&(_, y)| y).collect();
        assert_eq!(ys, vec![204.0, 200.0, 204.0, 200.0, 204.0, 200.0]);

        // Releasing one key leaves the other's sub-stream running.
        release(&mut game, "ArrowUp");
        game.advance(3);
        assert_eq!(game.state().paddle.y, 204.0);
    }

    #[test]
    fn test_repeat_press_does_not_stack_streams() {
        let mut game = Game::new(MemorySink::new());
        press(&mut game, "ArrowDown");
        game.key_edge(KeyEdge::Pressed {
            code: "ArrowDown",
            repeat: true,
        });
        game.advance(3);
        assert_eq!(game.state().paddle.y, 204.0);
    }

    #[test]
    fn test_score_publisher_runs_every_slow_tick() {
        let mut game = Game::new(MemorySink::new());
        game.advance(25);
        assert_eq!(game.sink().scores, vec![(0, 0); 5]);
    }

    #[test]
    fn test_auto_paddle_tracks_then_rests() {
        let mut game = Game::new(MemorySink::new());
        game.advance(5);
        assert_eq!(game.state().auto_paddle_y, 302.0 - PADDLE_HEIGHT / 2.0);

        game.state.score.p2 = 7;
        game.advance(5);
        assert_eq!(game.state().phase, GamePhase::Ended);
        assert_eq!(game.state().auto_paddle_y, AUTO_PADDLE_REST_Y);
    }
}
