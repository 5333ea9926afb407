//! Game session state and phase transitions
//!
//! Everything the tick mutates lives in one `GameSession`, owned by the
//! driver and passed to `tick` by reference.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::BrickField;
use super::paddle::Paddle;
use crate::settings::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting at the center, waiting for launch input
    PreLaunch,
    /// Active gameplay
    Playing,
    /// A ball was lost but lives remain; continues into PreLaunch next tick
    LifeLost,
    /// Every brick cleared; waits for acknowledgement
    Won,
    /// Last life lost; waits for acknowledgement
    GameOver,
}

impl GamePhase {
    /// Phases that hold the simulation until `acknowledge` is called
    pub fn awaits_acknowledgement(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::GameOver)
    }
}

/// Things that happened during a tick, for the front end to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Launched,
    BrickDestroyed { column: u32, row: u32, points: u64 },
    LifeLost { lives_left: u32 },
    /// New best score; the front end should persist it
    HighScore(u64),
    GameOver { score: u64 },
    Won { score: u64 },
}

impl GameEvent {
    /// User-facing message for events that get announced
    pub fn announcement(&self) -> Option<&'static str> {
        match self {
            GameEvent::LifeLost { .. } => Some("Life lost"),
            GameEvent::GameOver { .. } => Some("GAME OVER"),
            GameEvent::Won { .. } => Some("Congratulations!! You have won"),
            _ => None,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(super) config: GameConfig,
    pub(super) seed: u64,
    pub(super) rng: Pcg32,
    pub(super) ball: Ball,
    pub(super) paddle: Paddle,
    pub(super) bricks: BrickField,
    pub(super) score: u64,
    pub(super) lives: u32,
    pub(super) high_score: u64,
    pub(super) phase: GamePhase,
    /// Simulation tick counter
    pub(super) time_ticks: u64,
    pub(super) events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a new session; `seed` drives the launch direction RNG
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let field = config.field();
        let ball = Ball::new(
            field,
            config.ball.radius,
            config.ball.base_speed(),
            config.brick_hit_debounce(),
        );
        let paddle = Paddle::new(
            config.paddle.width,
            config.paddle.height,
            config.paddle.speed,
            field.x,
            field.y,
        );
        let bricks = BrickField::new(config.bricks.clone(), field.x);

        Self {
            lives: config.starting_lives,
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ball,
            paddle,
            bricks,
            score: 0,
            high_score: 0,
            phase: GamePhase::PreLaunch,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn bricks(&self) -> &BrickField {
        &self.bricks
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Seed the best score loaded from storage
    pub fn set_high_score(&mut self, high_score: u64) {
        self.high_score = high_score;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Leave a terminal phase once its announcement was shown
    pub fn acknowledge(&mut self) {
        if matches!(
            self.phase,
            GamePhase::LifeLost | GamePhase::Won | GamePhase::GameOver
        ) {
            self.phase = GamePhase::PreLaunch;
        }
    }

    /// Points for one destroyed brick
    pub(super) fn brick_points(&self) -> u64 {
        u64::from(self.lives.max(1))
    }

    /// Update the best score if beaten. Returns whether it changed.
    pub(super) fn record_high_score(&mut self) -> bool {
        if self.score <= self.high_score {
            return false;
        }
        log::info!("New high score: {} (was {})", self.score, self.high_score);
        self.high_score = self.score;
        self.events.push(GameEvent::HighScore(self.score));
        true
    }

    /// Ball fell past the paddle
    pub(super) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.record_high_score();

        if self.lives > 0 {
            log::info!("Life lost, {} remaining", self.lives);
            self.reset_round();
            self.events.push(GameEvent::LifeLost {
                lives_left: self.lives,
            });
            self.phase = GamePhase::LifeLost;
            return;
        }

        log::info!("Game over with score {}", self.score);
        self.events.push(GameEvent::GameOver { score: self.score });
        self.reset_game();
        self.phase = GamePhase::GameOver;
    }

    /// Every brick cleared
    pub(super) fn win(&mut self) {
        self.record_high_score();
        log::info!("Field cleared with score {}", self.score);
        self.events.push(GameEvent::Won { score: self.score });
        self.reset_game();
        self.phase = GamePhase::Won;
    }

    /// Recenter ball and paddle
    fn reset_round(&mut self) {
        self.ball.reset();
        self.paddle.reset();
    }

    /// Fresh game: entities, field, score and lives
    fn reset_game(&mut self) {
        self.reset_round();
        self.bricks.reset();
        self.score = 0;
        self.lives = self.config.starting_lives;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let s = GameSession::new(GameConfig::default(), 1);
        assert_eq!(s.phase(), GamePhase::PreLaunch);
        assert_eq!(s.lives(), 3);
        assert_eq!(s.score(), 0);
        assert_eq!(s.bricks().alive_count(), 56);
        assert!(s.ball().is_stationary());
    }

    #[test]
    fn test_brick_points_never_below_one() {
        let mut s = GameSession::new(GameConfig::default(), 1);
        assert_eq!(s.brick_points(), 3);
        s.lives = 0;
        assert_eq!(s.brick_points(), 1);
    }

    #[test]
    fn test_record_high_score_only_when_beaten() {
        let mut s = GameSession::new(GameConfig::default(), 1);
        s.set_high_score(10);
        s.score = 10;
        assert!(!s.record_high_score());
        s.score = 11;
        assert!(s.record_high_score());
        assert_eq!(s.high_score(), 11);
        assert_eq!(s.drain_events(), vec![GameEvent::HighScore(11)]);
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_lose_life_with_lives_left() {
        let mut s = GameSession::new(GameConfig::default(), 1);
        s.score = 5;
        s.lose_life();
        assert_eq!(s.phase(), GamePhase::LifeLost);
        assert_eq!(s.lives(), 2);
        // Score survives a lost life
        assert_eq!(s.score(), 5);
        s.acknowledge();
        assert_eq!(s.phase(), GamePhase::PreLaunch);
    }

    #[test]
    fn test_acknowledge_is_noop_while_playing() {
        let mut s = GameSession::new(GameConfig::default(), 1);
        s.phase = GamePhase::Playing;
        s.acknowledge();
        assert_eq!(s.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_announcements() {
        assert_eq!(
            GameEvent::GameOver { score: 0 }.announcement(),
            Some("GAME OVER")
        );
        assert_eq!(GameEvent::Launched.announcement(), None);
        assert!(GamePhase::Won.awaits_acknowledgement());
        assert!(!GamePhase::LifeLost.awaits_acknowledgement());
    }
}
