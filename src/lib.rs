//! Brick Breaker - a single-screen ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (ball, paddle, brick field, game session)
//! - `renderer`: Drawing surface abstraction and scene drawing
//! - `platform`: Input mapping and the repeating tick scheduler
//! - `persistence`: High score storage
//! - `settings`: Data-driven game configuration
//! - `terminal`: crossterm `Surface` for the binary

pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod terminal;

pub use persistence::{FileScoreStore, MemoryScoreStore, PersistenceError, ScoreStore};
pub use settings::GameConfig;
pub use sim::{GameEvent, GamePhase, GameSession, TickInput, tick};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Nominal tick period (~60 Hz, not synced to display refresh)
    pub const TICK_INTERVAL: Duration = Duration::from_micros(16_600);
    /// Window after a brick hit in which a second hit also flips vx
    pub const BRICK_HIT_DEBOUNCE: Duration = Duration::from_millis(100);

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_SPEED_X: f32 = 7.5;
    pub const BALL_SPEED_Y: f32 = 9.0;

    /// Brick grid defaults
    pub const BRICK_COLUMNS: u32 = 8;
    pub const BRICK_ROWS: u32 = 7;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING_TOP: f32 = 20.0;
    pub const BRICK_PADDING_LEFT: f32 = 20.0;
    pub const BRICK_OFFSET_TOP: f32 = 20.0;

    /// Lives at the start of every game
    pub const STARTING_LIVES: u32 = 3;
}
