//! Colors for 2D rendering

/// Linear RGBA
pub type Color = [f32; 4];

/// Opaque color from a `0xRRGGBB` literal
pub const fn rgb(hex: u32) -> Color {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::{Color, rgb};

    pub const BACKGROUND: Color = rgb(0xBFB0B0);
    pub const BALL: Color = rgb(0x542897);
    pub const PADDLE: Color = rgb(0x6043A2);
    pub const BRICK_PRIMARY: Color = rgb(0x654991);
    pub const BRICK_SECONDARY: Color = rgb(0x9887AB);
    pub const TEXT: Color = rgb(0x2E2E2E);
}
