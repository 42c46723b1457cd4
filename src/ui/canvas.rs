//! Clipped, display-width aware writes into a ratatui [`Buffer`].
//!
//! Coordinates are absolute buffer coordinates. Anything outside the
//! canvas area is dropped silently.

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::text::{char_width, display_width, truncate_to_width};
use crate::theme::{Background, BorderKind, ComponentStyle};

pub struct Canvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

fn border_type(kind: BorderKind) -> Option<BorderType> {
    match kind {
        BorderKind::None => None,
        BorderKind::Solid => Some(BorderType::Plain),
        BorderKind::Double => Some(BorderType::Double),
        BorderKind::Rounded => Some(BorderType::Rounded),
    }
}

impl<'a> Canvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(buf.area);
        Self { buf, area }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// The cell at `(x, y)`, ready to take a symbol `width` cells wide.
    ///
    /// A wide char already in the buffer never survives as half a char:
    /// writing over its trailing cell blanks its lead, and writing a narrow
    /// symbol over its lead blanks its trailing cell.
    fn cell(&mut self, x: u16, y: u16, width: usize) -> Option<&mut Cell> {
        let a = self.area;
        if x < a.x || y < a.y || x >= a.right() || y >= a.bottom() {
            return None;
        }
        let bounds = self.buf.area;
        if x > bounds.left() && display_width(self.buf.get(x - 1, y).symbol()) > 1 {
            self.buf.get_mut(x - 1, y).set_symbol(" ");
        }
        if width < 2 && x + 1 < bounds.right() && display_width(self.buf.get(x, y).symbol()) > 1 {
            self.buf.get_mut(x + 1, y).set_symbol(" ");
        }
        Some(self.buf.get_mut(x, y))
    }

    /// Write `text` starting at `(x, y)`. Wide chars take two cells, the
    /// second one a blank placeholder; a wide char that would cross the
    /// right edge is not written. Returns the column after the last cell
    /// written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let right = self.area.right();
        let mut col = x;
        for ch in text.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if col.saturating_add(width) > right {
                break;
            }
            // Placeholders first so the lead is written last.
            for extra in (1..width).rev() {
                if let Some(cell) = self.cell(col + extra, y, 1) {
                    cell.set_symbol(" ").set_style(style);
                }
            }
            let mut utf8 = [0u8; 4];
            if let Some(cell) = self.cell(col, y, width as usize) {
                cell.set_symbol(ch.encode_utf8(&mut utf8)).set_style(style);
            }
            col += width;
        }
        col
    }

    /// As [`put_str`](Self::put_str), truncating with an ellipsis to fit
    /// `max_width` cells.
    pub fn put_str_max(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Style) -> u16 {
        let text = truncate_to_width(text, max_width as usize);
        self.put_str(x, y, &text, style)
    }

    /// Blank every cell of `rect` with `style`.
    pub fn fill(&mut self, rect: Rect, style: Style) {
        let rect = rect.intersection(self.area);
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                if let Some(cell) = self.cell(x, y, 1) {
                    cell.reset();
                    cell.set_style(style);
                }
            }
        }
    }

    pub fn hline(&mut self, x: u16, y: u16, width: u16, symbol: &str, style: Style) {
        for col in x..x.saturating_add(width) {
            if let Some(cell) = self.cell(col, y, 1) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }

    pub fn vline(&mut self, x: u16, y: u16, height: u16, symbol: &str, style: Style) {
        for row in y..y.saturating_add(height) {
            if let Some(cell) = self.cell(x, row, 1) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }

    /// Draw a ratatui border around the visible part of `rect`. Callers
    /// fill `rect` first, which clears any wide chars under the edges.
    pub fn border(&mut self, rect: Rect, kind: BorderKind, style: Style) {
        let Some(border_type) = border_type(kind) else {
            return;
        };
        let rect = rect.intersection(self.area);
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(style)
            .render(rect, self.buf);
    }

    /// Vertical two-stop gradient fill.
    pub fn gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        let span = rect.height.saturating_sub(1).max(1) as f32;
        for row in 0..rect.height {
            let t = row as f32 / span;
            let line = Rect::new(rect.x, rect.y + row, rect.width, 1);
            self.fill(line, Style::default().bg(blend(top, bottom, t)));
        }
    }

    /// Draw a boxed component: shadow, background, border. Returns the
    /// content area inside border and padding.
    pub fn card(&mut self, rect: Rect, style: &ComponentStyle, border_style: Style) -> Rect {
        if style.shadow.enabled {
            let shadow = Rect::new(
                rect.x.saturating_add(style.shadow.offset_x),
                rect.y.saturating_add(style.shadow.offset_y),
                rect.width,
                rect.height,
            );
            self.fill(shadow, Style::default().bg(style.shadow.color));
        }

        match style.background {
            Background::Solid(color) => self.fill(rect, Style::default().bg(color)),
            Background::Gradient(top, bottom) => self.gradient(rect, top, bottom),
        }

        let border_style = border_style.fg(style.border.color);
        self.border(rect, style.border.kind, border_style);

        let edge = u16::from(style.border.kind != BorderKind::None);
        let pad = style.padding;
        let x = rect.x + edge + pad.left;
        let y = rect.y + edge + pad.top;
        let width = rect.width.saturating_sub(2 * edge + pad.left + pad.right);
        let height = rect.height.saturating_sub(2 * edge + pad.top + pad.bottom);
        Rect::new(x, y, width, height)
    }
}

/// Linear blend for RGB colors; named colors switch at the midpoint.
pub fn blend(top: Color, bottom: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (top, bottom) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => top,
        _ => bottom,
    }
}
