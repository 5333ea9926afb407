//! Collision tests against static field geometry
//!
//! Everything here is an overlap query on a predicted ball center. No
//! penetration depth or contact normal is computed: the response is always a
//! sign flip on one velocity axis.

use glam::Vec2;

use super::rect::Rect;

/// Which boundary of the field the ball touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    /// Top wall: reflect vertically
    Top,
    /// Left or right wall: reflect horizontally
    Side,
}

/// Check the top and side walls.
///
/// The checks are exclusive: the side walls are only tested when the top
/// wall was not hit.
pub fn ball_wall_collision(center: Vec2, radius: f32, field: Vec2) -> Option<WallHit> {
    if center.y < radius {
        Some(WallHit::Top)
    } else if center.x < radius || center.x + radius > field.x {
        Some(WallHit::Side)
    } else {
        None
    }
}

/// Check if the ball dropped below the bottom of the field
#[inline]
pub fn ball_floor_collision(center: Vec2, radius: f32, field_height: f32) -> bool {
    center.y > field_height - radius
}

/// Check if the ball rests on the paddle.
///
/// The ball center must be strictly inside the paddle's horizontal span and
/// its bottom edge must reach the paddle's top while its center is not below
/// the paddle's bottom.
pub fn ball_paddle_collision(center: Vec2, radius: f32, paddle: &Rect) -> bool {
    paddle.spans_x(center.x) && center.y + radius >= paddle.y() && center.y <= paddle.bottom()
}

/// Check if the ball's vertical extent overlaps a brick it is horizontally
/// over.
pub fn ball_brick_collision(center: Vec2, radius: f32, brick: &Rect) -> bool {
    brick.spans_x(center.x) && center.y + radius > brick.y() && center.y - radius < brick.bottom()
}
