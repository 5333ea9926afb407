//! Fixed timestep simulation tick
//!
//! One call advances the session by one timer firing. Entities move a fixed
//! distance per tick; `now` is only used for the brick-hit debounce window,
//! which is measured in wall-clock time.

use std::time::Duration;

use super::ball::BallOutcome;
use super::paddle::Steer;
use super::state::{GameEvent, GamePhase, GameSession};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held-key paddle direction
    pub steer: Steer,
    /// Launch the ball (space)
    pub launch: bool,
}

/// Advance the game session by one tick
pub fn tick(session: &mut GameSession, input: &TickInput, now: Duration) {
    match session.phase {
        // Held until the front end acknowledges the announcement
        GamePhase::Won | GamePhase::GameOver => return,
        GamePhase::LifeLost => session.phase = GamePhase::PreLaunch,
        _ => {}
    }

    session.time_ticks += 1;

    // Paddle follows input in every phase
    session.paddle.steer(input.steer);
    session.paddle.tick();

    if session.phase == GamePhase::PreLaunch {
        if !input.launch || !session.ball.launch(&mut session.rng) {
            return;
        }
        log::info!("Ball launched with velocity {:?}", session.ball.vel());
        session.events.push(GameEvent::Launched);
        session.phase = GamePhase::Playing;
    }

    let paddle = session.paddle.rect();
    if session.ball.tick(&paddle) == BallOutcome::LifeLost {
        session.lose_life();
        return;
    }

    let (center, radius) = (session.ball.pos(), session.ball.radius());
    if let Some(hit) = session.bricks.check_collision(center, radius) {
        session.ball.on_brick_hit(now);
        let points = session.brick_points();
        session.score += points;
        log::debug!(
            "Brick ({}, {}) destroyed, +{} -> {}",
            hit.column,
            hit.row,
            points,
            session.score
        );
        session.events.push(GameEvent::BrickDestroyed {
            column: hit.column,
            row: hit.row,
            points,
        });
    }

    // An empty layout (nothing fit the field) never counts as a win
    if session.bricks.alive_count() == 0 && !session.bricks.is_empty() {
        session.win();
    }
}
