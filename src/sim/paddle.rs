//! The player's paddle

use super::rect::Rect;

/// Held-key steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    Left,
    #[default]
    Idle,
    Right,
}

impl Steer {
    /// Velocity multiplier in {-1, 0, 1}
    pub fn multiplier(self) -> i8 {
        match self {
            Steer::Left => -1,
            Steer::Idle => 0,
            Steer::Right => 1,
        }
    }

    pub fn from_multiplier(m: i8) -> Self {
        match m.signum() {
            -1 => Steer::Left,
            1 => Steer::Right,
            _ => Steer::Idle,
        }
    }
}

/// A horizontally movable paddle near the bottom of the field
#[derive(Debug, Clone)]
pub struct Paddle {
    x: f32,
    /// Fixed at two paddle heights above the bottom
    y: f32,
    width: f32,
    height: f32,
    speed: f32,
    field_width: f32,
    multiplier: i8,
}

impl Paddle {
    /// Create a paddle centered horizontally
    pub fn new(width: f32, height: f32, speed: f32, field_width: f32, field_height: f32) -> Self {
        Self {
            x: Self::centered_x(width, field_width),
            y: field_height - height * 2.0,
            width,
            height,
            speed,
            field_width,
            multiplier: 0,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn multiplier(&self) -> i8 {
        self.multiplier
    }

    /// Paddle bounds for collision
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Set the movement direction; values outside -1..=1 are clamped
    pub fn set_velocity_multiplier(&mut self, m: i8) {
        self.multiplier = m.clamp(-1, 1);
    }

    pub fn steer(&mut self, steer: Steer) {
        self.multiplier = steer.multiplier();
    }

    /// Move by one step and clamp to the field
    pub fn tick(&mut self) {
        self.x += self.speed * f32::from(self.multiplier);

        let max_x = (self.field_width - self.width).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }

    /// Recenter horizontally
    pub fn reset(&mut self) {
        self.x = Self::centered_x(self.width, self.field_width);
    }

    /// Centered x, pinned to the left wall when the paddle is wider than the field
    fn centered_x(width: f32, field_width: f32) -> f32 {
        ((field_width - width) * 0.5).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle() -> Paddle {
        Paddle::new(200.0, 20.0, 7.0, 800.0, 600.0)
    }

    #[test]
    fn test_initial_placement() {
        let p = paddle();
        assert_eq!(p.x(), 300.0);
        assert_eq!(p.y(), 560.0);
    }

    #[test]
    fn test_moves_by_speed() {
        let mut p = paddle();
        p.steer(Steer::Right);
        p.tick();
        assert_eq!(p.x(), 307.0);
        p.set_velocity_multiplier(-1);
        p.tick();
        p.tick();
        assert_eq!(p.x(), 293.0);
    }

    #[test]
    fn test_clamped_to_field() {
        let mut p = paddle();
        p.steer(Steer::Left);
        for _ in 0..100 {
            p.tick();
        }
        assert_eq!(p.x(), 0.0);

        p.steer(Steer::Right);
        for _ in 0..200 {
            p.tick();
        }
        assert_eq!(p.x(), 600.0);
    }

    #[test]
    fn test_oversized_paddle_stays_at_left_wall() {
        let mut p = Paddle::new(900.0, 20.0, 7.0, 800.0, 600.0);
        assert_eq!(p.x(), 0.0);

        p.steer(Steer::Right);
        p.tick();
        assert_eq!(p.x(), 0.0);
        p.reset();
        assert_eq!(p.x(), 0.0);
    }

    #[test]
    fn test_multiplier_is_clamped() {
        let mut p = paddle();
        p.set_velocity_multiplier(5);
        assert_eq!(p.multiplier(), 1);
        assert_eq!(Steer::from_multiplier(-3), Steer::Left);
    }

    #[test]
    fn test_reset_recenters() {
        let mut p = paddle();
        p.steer(Steer::Right);
        p.tick();
        p.reset();
        assert_eq!(p.x(), 300.0);
        assert_eq!(p.y(), 560.0);
    }
}
