//! Terminal rendering layer
//!
//! Rasterises `Surface` draw calls into a character-cell grid scaled to the
//! terminal, then writes the grid with crossterm. No game logic here.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Print},
};
use glam::Vec2;

use crate::renderer::{Color, Surface};

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    fn blank(bg: Color) -> Self {
        Self { ch: ' ', fg: bg, bg }
    }
}

fn term_color(c: Color) -> style::Color {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    style::Color::Rgb {
        r: channel(c[0]),
        g: channel(c[1]),
        b: channel(c[2]),
    }
}

pub struct TerminalSurface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    field: Vec2,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, cols: u16, rows: u16, field: Vec2) -> Self {
        let mut surface = Self {
            out,
            cols: 0,
            rows: 0,
            field,
            cells: Vec::new(),
        };
        surface.resize(cols, rows);
        surface
    }

    /// Match a new terminal size; contents are cleared
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        self.cells = vec![Cell::blank([0.0, 0.0, 0.0, 1.0]); self.cols as usize * self.rows as usize];
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells
            .get(row as usize * self.cols as usize + col as usize)
            .copied()
    }

    /// Characters of one row, for tests and debugging
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|c| self.cell(c, row))
            .map(|cell| cell.ch)
            .collect()
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    /// Field units per cell
    fn scale(&self) -> Vec2 {
        Vec2::new(
            self.cols as f32 / self.field.x,
            self.rows as f32 / self.field.y,
        )
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        let cols = self.cols as usize;
        self.cells.get_mut(row as usize * cols + col as usize)
    }

    /// Write the grid to the terminal
    pub fn present(&mut self) -> std::io::Result<()> {
        let mut fg = None;
        let mut bg = None;
        for row in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if bg != Some(cell.bg) {
                    self.out
                        .queue(style::SetBackgroundColor(term_color(cell.bg)))?;
                    bg = Some(cell.bg);
                }
                if fg != Some(cell.fg) {
                    self.out
                        .queue(style::SetForegroundColor(term_color(cell.fg)))?;
                    fg = Some(cell.fg);
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self, width: f32, height: f32, color: Color) {
        self.field = Vec2::new(width, height);
        self.cells.fill(Cell::blank(color));
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let s = self.scale();
        // Any cell the rectangle touches gets painted
        let c0 = (x * s.x).floor() as i32;
        let c1 = ((x + width) * s.x).ceil() as i32;
        let r0 = (y * s.y).floor() as i32;
        let r1 = ((y + height) * s.y).ceil() as i32;
        for row in r0..r1 {
            for col in c0..c1 {
                if let Some(cell) = self.cell_mut(col, row) {
                    *cell = Cell::blank(color);
                }
            }
        }
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let s = self.scale();
        let r0 = ((cy - radius) * s.y).floor() as i32;
        let r1 = ((cy + radius) * s.y).ceil() as i32;
        let c0 = ((cx - radius) * s.x).floor() as i32;
        let c1 = ((cx + radius) * s.x).ceil() as i32;
        let center = Vec2::new(cx, cy);

        for row in r0..r1 {
            for col in c0..c1 {
                let p = Vec2::new((col as f32 + 0.5) / s.x, (row as f32 + 0.5) / s.y);
                if p.distance(center) <= radius {
                    if let Some(cell) = self.cell_mut(col, row) {
                        *cell = Cell::blank(color);
                    }
                }
            }
        }

        // Small balls still show up as one cell
        let (col, row) = ((cx * s.x).floor() as i32, (cy * s.y).floor() as i32);
        if let Some(cell) = self.cell_mut(col, row) {
            *cell = Cell::blank(color);
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        let s = self.scale();
        let row = ((y * s.y).ceil() as i32 - 1).max(0);
        let col0 = (x * s.x).floor() as i32;
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(col0 + i as i32, row) {
                cell.ch = ch;
                cell.fg = color;
            }
        }
    }
}
