//! Brick grid: layout, centering and single-brick collision
//!
//! Bricks are stored column-major (`index = column * rows + row`) and
//! always scanned in that order, so when the ball overlaps several bricks
//! the same one is destroyed every time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::ball_brick_collision;
use super::rect::Rect;
use crate::consts::*;

/// Alternating brick fill, picked by `(column + row) % 2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickShade {
    Primary,
    Secondary,
}

/// A single brick
#[derive(Debug, Clone)]
pub struct Brick {
    pub rect: Rect,
    pub shade: BrickShade,
    alive: bool,
}

impl Brick {
    pub fn new(rect: Rect, shade: BrickShade) -> Self {
        Self {
            rect,
            shade,
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Requested grid shape and spacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub columns: u32,
    pub rows: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    /// Vertical gap between rows
    pub padding_top: f32,
    /// Horizontal gap between columns
    pub padding_left: f32,
    /// Distance from the top of the field to the first row
    pub offset_top: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            columns: BRICK_COLUMNS,
            rows: BRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            padding_top: BRICK_PADDING_TOP,
            padding_left: BRICK_PADDING_LEFT,
            offset_top: BRICK_OFFSET_TOP,
        }
    }
}

impl BrickLayout {
    /// Largest column count (not above the requested one) that fits the
    /// field, and the left offset that centers it.
    pub fn fit(&self, field_width: f32) -> (u32, f32) {
        let stride = self.brick_width + self.padding_left;

        let mut columns = self.columns;
        let mut occupied = columns as f32 * stride;
        while columns > 0 && occupied + self.brick_width > field_width {
            columns -= 1;
            occupied = columns as f32 * stride;
        }

        let offset_left = (field_width - occupied) * 0.5 + self.padding_left * 0.5;
        (columns, offset_left)
    }
}

/// A brick destroyed by `check_collision`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickHit {
    pub column: u32,
    pub row: u32,
}

/// The grid of bricks
#[derive(Debug, Clone)]
pub struct BrickField {
    layout: BrickLayout,
    field_width: f32,
    columns: u32,
    offset_left: f32,
    bricks: Vec<Brick>,
    alive: usize,
}

impl BrickField {
    /// Lay out a full grid, dropping columns that would overflow the field
    pub fn new(layout: BrickLayout, field_width: f32) -> Self {
        let (columns, offset_left) = layout.fit(field_width);
        if columns < layout.columns {
            log::warn!(
                "Brick grid too wide for field ({}px): {} -> {} columns",
                field_width,
                layout.columns,
                columns
            );
        }

        let mut field = Self {
            layout,
            field_width,
            columns,
            offset_left,
            bricks: Vec::new(),
            alive: 0,
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        let l = &self.layout;
        let count = (self.columns * l.rows) as usize;

        self.bricks.clear();
        self.bricks.reserve(count);
        for col in 0..self.columns {
            for row in 0..l.rows {
                let x = (l.brick_width + l.padding_left) * col as f32 + self.offset_left;
                let y = (l.brick_height + l.padding_top) * row as f32 + l.offset_top;
                let shade = if (col + row) % 2 == 1 {
                    BrickShade::Primary
                } else {
                    BrickShade::Secondary
                };
                self.bricks
                    .push(Brick::new(Rect::new(x, y, l.brick_width, l.brick_height), shade));
            }
        }
        self.alive = self.bricks.len();
    }

    /// Recreate every brick alive
    pub fn reset(&mut self) {
        self.populate();
    }

    /// Columns actually laid out (may be fewer than requested)
    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.layout.rows
    }

    pub fn offset_left(&self) -> f32 {
        self.offset_left
    }

    pub fn field_width(&self) -> f32 {
        self.field_width
    }

    /// Total bricks in a full grid
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.alive
    }

    pub fn brick(&self, column: u32, row: u32) -> Option<&Brick> {
        if column >= self.columns || row >= self.layout.rows {
            return None;
        }
        self.bricks.get((column * self.layout.rows + row) as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    /// Destroy the first alive brick the ball overlaps.
    ///
    /// At most one brick dies per call, regardless of how many overlap.
    pub fn check_collision(&mut self, center: Vec2, radius: f32) -> Option<BrickHit> {
        let rows = self.layout.rows;
        let (index, brick) = self
            .bricks
            .iter_mut()
            .enumerate()
            .find(|(_, b)| b.alive && ball_brick_collision(center, radius, &b.rect))?;

        brick.alive = false;
        self.alive -= 1;

        let index = index as u32;
        Some(BrickHit {
            column: index / rows,
            row: index % rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> BrickLayout {
        BrickLayout::default()
    }

    #[test]
    fn test_default_layout_fits_and_centers() {
        let field = BrickField::new(layout(), 800.0);
        assert_eq!(field.columns(), 8);
        assert_eq!(field.len(), 56);
        assert_eq!(field.alive_count(), 56);
        // occupied 8 * 90 = 720, (800 - 720) / 2 + 10
        assert_eq!(field.offset_left(), 50.0);

        let b = field.brick(3, 2).unwrap();
        assert_eq!(b.rect.x(), 50.0 + 3.0 * 90.0);
        assert_eq!(b.rect.y(), 20.0 + 2.0 * 40.0);
    }

    #[test]
    fn test_columns_reduced_when_too_wide() {
        let wide = BrickLayout {
            brick_width: 200.0,
            ..layout()
        };
        let field = BrickField::new(wide, 800.0);
        assert_eq!(field.columns(), 2);
        assert_eq!(field.len(), 14);
        assert_eq!(field.offset_left(), 190.0);
    }

    #[test]
    fn test_nothing_fits() {
        let huge = BrickLayout {
            brick_width: 900.0,
            ..layout()
        };
        let field = BrickField::new(huge, 800.0);
        assert_eq!(field.columns(), 0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_shades_alternate() {
        let field = BrickField::new(layout(), 800.0);
        assert_eq!(field.brick(0, 0).unwrap().shade, BrickShade::Secondary);
        assert_eq!(field.brick(0, 1).unwrap().shade, BrickShade::Primary);
        assert_eq!(field.brick(1, 0).unwrap().shade, BrickShade::Primary);
    }

    #[test]
    fn test_collision_kills_one_brick() {
        let mut field = BrickField::new(layout(), 800.0);
        // Between rows 1 and 2 of column 3: the box overlaps both
        let x = 50.0 + 3.0 * 90.0 + 35.0;
        let center = Vec2::new(x, 90.0);

        let hit = field.check_collision(center, 20.0);
        assert_eq!(hit, Some(BrickHit { column: 3, row: 1 }));
        assert_eq!(field.alive_count(), 55);
        assert!(field.brick(3, 2).unwrap().is_alive());

        // Same spot again: the row-1 brick is gone, row 2 is next
        let hit = field.check_collision(center, 20.0);
        assert_eq!(hit, Some(BrickHit { column: 3, row: 2 }));
        assert_eq!(field.alive_count(), 54);
    }

    #[test]
    fn test_collision_miss() {
        let mut field = BrickField::new(layout(), 800.0);
        assert_eq!(field.check_collision(Vec2::new(400.0, 400.0), 20.0), None);
        assert_eq!(field.alive_count(), 56);
    }

    #[test]
    fn test_reset_revives_everything() {
        let mut field = BrickField::new(layout(), 800.0);
        field.check_collision(Vec2::new(85.0, 30.0), 20.0);
        assert_eq!(field.alive_count(), 55);
        field.reset();
        assert_eq!(field.alive_count(), 56);
        assert!(field.iter().all(Brick::is_alive));
    }
}
