//! Fixed-timestep simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - Fixed distance per tick, no delta-time scaling
//! - Seeded RNG only (launch direction)
//! - Stable brick scan order (column-major)

pub mod ball;
pub mod bricks;
pub mod collision;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallOutcome};
pub use bricks::{Brick, BrickField, BrickHit, BrickLayout, BrickShade};
pub use collision::{
    WallHit, ball_brick_collision, ball_floor_collision, ball_paddle_collision,
    ball_wall_collision,
};
pub use paddle::{Paddle, Steer};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameSession};
pub use tick::{TickInput, tick};
