//! Game configuration
//!
//! Every tunable of the simulation, loadable from a JSON file. Missing keys
//! fall back to the defaults in `consts`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::PersistenceError;
use crate::sim::BrickLayout;

/// Paddle size and speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Pixels per tick while a direction key is held
    pub speed: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }
}

/// Ball size and launch speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Horizontal speed magnitude, pixels per tick
    pub speed_x: f32,
    /// Vertical speed magnitude, pixels per tick
    pub speed_y: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            speed_x: BALL_SPEED_X,
            speed_y: BALL_SPEED_Y,
        }
    }
}

impl BallConfig {
    pub fn base_speed(&self) -> Vec2 {
        Vec2::new(self.speed_x.abs(), self.speed_y.abs())
    }
}

/// Full game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub bricks: BrickLayout,
    pub starting_lives: u32,
    /// Nominal timer period in milliseconds
    pub tick_interval_ms: f64,
    /// Brick-hit debounce window in milliseconds (wall-clock)
    pub brick_hit_debounce_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle: PaddleConfig::default(),
            ball: BallConfig::default(),
            bricks: BrickLayout::default(),
            starting_lives: STARTING_LIVES,
            tick_interval_ms: TICK_INTERVAL.as_secs_f64() * 1000.0,
            brick_hit_debounce_ms: BRICK_HIT_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl GameConfig {
    pub fn field(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    /// Timer period, clamped to 1 ms..1 s
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(self.tick_interval_ms.max(1.0).min(1000.0) / 1000.0)
    }

    pub fn brick_hit_debounce(&self) -> Duration {
        Duration::from_millis(self.brick_hit_debounce_ms)
    }

    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GameConfig::default();
        assert_eq!(c.field(), Vec2::new(800.0, 600.0));
        assert_eq!(c.starting_lives, 3);
        assert_eq!(c.brick_hit_debounce(), Duration::from_millis(100));
        assert!((c.tick_interval().as_secs_f64() - 0.0166).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c = GameConfig::from_json(r#"{ "starting_lives": 5, "ball": { "radius": 8.0 } }"#)
            .unwrap();
        assert_eq!(c.starting_lives, 5);
        assert_eq!(c.ball.radius, 8.0);
        assert_eq!(c.ball.speed_x, BALL_SPEED_X);
        assert_eq!(c.bricks, BrickLayout::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut c = GameConfig::default();
        c.bricks.columns = 4;
        let back = GameConfig::from_json(&c.to_json().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(PersistenceError::Parse(_))
        ));
    }

    #[test]
    fn test_tick_interval_floor() {
        let c = GameConfig {
            tick_interval_ms: -3.0,
            ..GameConfig::default()
        };
        assert_eq!(c.tick_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_save_and_load_file() {
        let path =
            std::env::temp_dir().join(format!("brick_breaker_cfg_{}.json", std::process::id()));
        let c = GameConfig {
            starting_lives: 7,
            ..GameConfig::default()
        };
        c.save(&path).unwrap();
        let back = GameConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(back.starting_lives, 7);
    }
}
