//! Rendering module
//!
//! The simulation never draws. A front end implements `Surface` and calls
//! `draw_scene` once per tick.

pub mod palette;

pub use palette::{Color, colors};

use crate::sim::{BrickShade, GameSession};

/// Host drawing capabilities, in field coordinates
pub trait Surface {
    /// Fill the whole field
    fn clear(&mut self, width: f32, height: f32, color: Color);
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
    /// `y` is the text baseline
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color);
}

/// HUD line positions
const HUD_X: f32 = 8.0;
const HUD_LINE: f32 = 20.0;

/// Draw background, bricks, ball, paddle and the score HUD
pub fn draw_scene<S: Surface + ?Sized>(session: &GameSession, surface: &mut S) {
    let field = session.config().field();
    surface.clear(field.x, field.y, colors::BACKGROUND);

    for brick in session.bricks().iter().filter(|b| b.is_alive()) {
        let color = match brick.shade {
            BrickShade::Primary => colors::BRICK_PRIMARY,
            BrickShade::Secondary => colors::BRICK_SECONDARY,
        };
        let r = brick.rect;
        surface.draw_rect(r.x(), r.y(), r.width(), r.height(), color);
    }

    let ball = session.ball();
    surface.draw_circle(ball.pos().x, ball.pos().y, ball.radius(), colors::BALL);

    let paddle = session.paddle();
    surface.draw_rect(
        paddle.x(),
        paddle.y(),
        paddle.width(),
        paddle.height(),
        colors::PADDLE,
    );

    let hud = [
        format!("SCORE : {}", session.score()),
        format!("HIGHSCORE : {}", session.high_score()),
        format!("LIVES : {}", session.lives()),
    ];
    for (i, line) in hud.iter().enumerate() {
        surface.draw_text(line, HUD_X, HUD_LINE * (i + 1) as f32, colors::TEXT);
    }
}

/// Draw a centered message over the scene
pub fn draw_announcement<S: Surface + ?Sized>(session: &GameSession, surface: &mut S, message: &str) {
    let field = session.config().field();
    // Rough text width: glyphs are assumed ~8px wide
    let x = (field.x - message.len() as f32 * 8.0).max(0.0) * 0.5;
    surface.draw_text(message, x, field.y * 0.5, colors::TEXT);
}
