//! The ball: movement, wall/paddle reflection and the brick-hit debounce

use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use super::collision::{WallHit, ball_floor_collision, ball_paddle_collision, ball_wall_collision};
use super::rect::Rect;

/// Result of advancing the ball by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    None,
    /// The ball went past the bottom of the field
    LifeLost,
}

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    /// Speed magnitudes applied on launch
    base_speed: Vec2,
    field: Vec2,
    /// How long a brick hit stays "recent"
    debounce: Duration,
    /// Deadline of the open brick-hit window, if any
    recent_brick_hit: Option<Duration>,
}

impl Ball {
    /// Create a stationary ball at the center of the field
    pub fn new(field: Vec2, radius: f32, base_speed: Vec2, debounce: Duration) -> Self {
        Self {
            pos: field * 0.5,
            vel: Vec2::ZERO,
            radius,
            base_speed,
            field,
            debounce,
            recent_brick_hit: None,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// True until the ball is launched
    pub fn is_stationary(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// True while a brick hit is still inside the debounce window
    pub fn hit_recently(&self, now: Duration) -> bool {
        self.recent_brick_hit.is_some_and(|deadline| now < deadline)
    }

    /// Launch the ball with randomly signed base speeds.
    ///
    /// Does nothing if the ball is already moving. Returns whether it launched.
    pub fn launch<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.is_stationary() {
            return false;
        }
        let sign_x = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sign_y = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(self.base_speed.x * sign_x, self.base_speed.y * sign_y);
        true
    }

    /// Move the ball and resolve wall and paddle collisions.
    ///
    /// Collisions are tested against the position one step ahead of the
    /// moved ball, so a bounce is decided a frame before it is drawn.
    pub fn tick(&mut self, paddle: &Rect) -> BallOutcome {
        self.pos += self.vel;
        let next = self.pos + self.vel;

        match ball_wall_collision(next, self.radius, self.field) {
            Some(WallHit::Top) => self.vel.y = -self.vel.y,
            Some(WallHit::Side) => self.vel.x = -self.vel.x,
            None => {}
        }

        if ball_floor_collision(next, self.radius, self.field.y) {
            return BallOutcome::LifeLost;
        }

        if ball_paddle_collision(next, self.radius, paddle) {
            self.vel.y = -self.vel.y;
        }

        BallOutcome::None
    }

    /// Reflect off a brick.
    ///
    /// Always flips vy. A second hit inside the debounce window also flips vx
    /// and closes the window; otherwise the window is opened at `now`.
    pub fn on_brick_hit(&mut self, now: Duration) {
        self.vel.y = -self.vel.y;

        if self.hit_recently(now) {
            self.vel.x = -self.vel.x;
            self.recent_brick_hit = None;
            return;
        }

        self.recent_brick_hit = Some(now + self.debounce);
    }

    /// Back to the center, stationary
    pub fn reset(&mut self) {
        self.pos = self.field * 0.5;
        self.vel = Vec2::ZERO;
        self.recent_brick_hit = None;
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, pos: Vec2, vel: Vec2) {
        self.pos = pos;
        self.vel = vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const FIELD: Vec2 = Vec2::new(800.0, 600.0);
    const DEBOUNCE: Duration = Duration::from_millis(100);

    fn ball() -> Ball {
        Ball::new(FIELD, 20.0, Vec2::new(7.5, 9.0), DEBOUNCE)
    }

    fn far_paddle() -> Rect {
        Rect::new(300.0, 560.0, 200.0, 20.0)
    }

    #[test]
    fn test_new_ball_is_centered_and_stationary() {
        let b = ball();
        assert_eq!(b.pos(), Vec2::new(400.0, 300.0));
        assert!(b.is_stationary());
    }

    #[test]
    fn test_launch_uses_base_magnitudes() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..16 {
            let mut b = ball();
            assert!(b.launch(&mut rng));
            assert_eq!(b.vel().x.abs(), 7.5);
            assert_eq!(b.vel().y.abs(), 9.0);
        }
    }

    #[test]
    fn test_launch_is_idempotent_while_moving() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut b = ball();
        b.launch(&mut rng);
        let vel = b.vel();
        assert!(!b.launch(&mut rng));
        assert_eq!(b.vel(), vel);
    }

    #[test]
    fn test_top_wall_flips_vy_only() {
        let mut b = ball();
        b.place(Vec2::new(400.0, 30.0), Vec2::new(7.5, -9.0));
        assert_eq!(b.tick(&far_paddle()), BallOutcome::None);
        // Moved to y=21, predicted y=12 < radius
        assert_eq!(b.vel(), Vec2::new(7.5, 9.0));
        assert_eq!(b.pos(), Vec2::new(407.5, 21.0));
    }

    #[test]
    fn test_side_wall_flips_vx() {
        let mut b = ball();
        b.place(Vec2::new(775.0, 300.0), Vec2::new(7.5, 9.0));
        b.tick(&far_paddle());
        assert_eq!(b.vel(), Vec2::new(-7.5, 9.0));
    }

    #[test]
    fn test_floor_reports_life_lost() {
        let mut b = ball();
        b.place(Vec2::new(100.0, 565.0), Vec2::new(7.5, 9.0));
        assert_eq!(b.tick(&far_paddle()), BallOutcome::LifeLost);
    }

    #[test]
    fn test_paddle_bounce() {
        let mut b = ball();
        // Moves to y=522, predicted y=531: bottom edge 551 short of 560
        b.place(Vec2::new(400.0, 513.0), Vec2::new(7.5, 9.0));
        b.tick(&far_paddle());
        assert_eq!(b.vel().y, 9.0);
        // Next tick: moves to 531, predicted 540, bottom edge reaches 560
        b.tick(&far_paddle());
        assert_eq!(b.vel().y, -9.0);
    }

    #[test]
    fn test_brick_hit_debounce() {
        let mut b = ball();
        b.place(Vec2::new(400.0, 300.0), Vec2::new(7.5, -9.0));

        b.on_brick_hit(Duration::from_millis(1000));
        assert_eq!(b.vel(), Vec2::new(7.5, 9.0));
        assert!(b.hit_recently(Duration::from_millis(1050)));

        // Second hit inside the window flips both and closes it
        b.on_brick_hit(Duration::from_millis(1050));
        assert_eq!(b.vel(), Vec2::new(-7.5, -9.0));
        assert!(!b.hit_recently(Duration::from_millis(1060)));
    }

    #[test]
    fn test_brick_hit_after_window_only_flips_vy() {
        let mut b = ball();
        b.place(Vec2::new(400.0, 300.0), Vec2::new(7.5, -9.0));
        b.on_brick_hit(Duration::from_millis(0));
        b.on_brick_hit(Duration::from_millis(150));
        assert_eq!(b.vel(), Vec2::new(7.5, -9.0));
        // The late hit re-armed the window
        assert!(b.hit_recently(Duration::from_millis(200)));
    }

    #[test]
    fn test_reset() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut b = ball();
        b.launch(&mut rng);
        b.tick(&far_paddle());
        b.on_brick_hit(Duration::ZERO);
        b.reset();
        assert_eq!(b.pos(), Vec2::new(400.0, 300.0));
        assert_eq!(b.vel(), Vec2::ZERO);
        assert!(!b.hit_recently(Duration::ZERO));
    }
}
