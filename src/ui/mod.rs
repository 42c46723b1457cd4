//! Frame composition.
//!
//! Every frame is recomputed from a [`Screen`] snapshot: navigation state,
//! the resolved theme and texts, layout settings and the overlay managers.
//! Nothing is retained between frames.

pub mod badge;
pub mod canvas;
mod columns;
mod header;
mod single;
mod toast;

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::keymap::Keymap;
use crate::app::NavState;
use crate::config::{LayoutConfig, LayoutMode};
use crate::i18n::Texts;
use crate::models::{Host, HostId};
use crate::status::ProbeBatch;
use crate::theme::Theme;
use crate::toast::ToastManager;
use badge::{auth_icon, resting_kind, StatusKind, FAVORITE_ICON};
use canvas::Canvas;

/// Everything one frame is drawn from.
pub struct Screen<'a> {
    pub state: &'a NavState,
    pub theme: &'a Theme,
    pub texts: &'static Texts,
    /// Fills key placeholders in hint texts.
    pub keys: &'a Keymap,
    pub layout: &'a LayoutConfig,
    pub toasts: &'a ToastManager,
    /// Eased progress of the content reveal; 1.0 when idle.
    pub reveal: f32,
    pub frame: usize,
    pub probes: Option<&'a ProbeBatch>,
    pub connecting: Option<&'a HostId>,
    pub failed: Option<&'a HostId>,
}

impl Screen<'_> {
    pub fn badge(&self, host: &Host) -> StatusKind {
        let id = host.id();
        if self.connecting == Some(&id) {
            StatusKind::Connecting
        } else if self.probes.is_some_and(|p| p.is_pending(&id)) {
            StatusKind::Loading
        } else {
            resting_kind(host, self.failed == Some(&id))
        }
    }
}

pub fn draw(f: &mut Frame, screen: &Screen) {
    let area = f.size();
    render(area, f.buffer_mut(), screen);
}

pub fn render(area: Rect, buf: &mut Buffer, screen: &Screen) {
    let mut canvas = Canvas::new(buf, area);
    let theme = screen.theme;
    canvas.fill(canvas.area(), theme.on_background(theme.foreground));

    match screen.layout.kind {
        LayoutMode::Single => single::render(&mut canvas, screen),
        LayoutMode::Columns => columns::render(&mut canvas, screen),
    }

    toast::render(&mut canvas, screen);
}

/// Rows of a list to draw so that `selected` stays inside a window of
/// `rows` lines.
pub(crate) fn visible_window(selected: usize, len: usize, rows: usize) -> Range<usize> {
    if rows == 0 || len == 0 {
        return 0..0;
    }
    let start = (selected + 1).saturating_sub(rows).min(len.saturating_sub(1));
    start..(start + rows).min(len)
}

/// How many of `total` rows the reveal animation has uncovered.
pub(crate) fn revealed(total: usize, progress: f32) -> usize {
    if progress >= 1.0 {
        return total;
    }
    ((total as f32 * progress.max(0.0)).ceil() as usize).min(total)
}

/// One host row: cursor marker, status badge, then the label in the row
/// style. `detailed` adds the target and description.
pub(crate) fn host_row(
    canvas: &mut Canvas,
    screen: &Screen,
    (x, y, width): (u16, u16, u16),
    host: &Host,
    marker: &str,
    selected: bool,
    detailed: bool,
) {
    let theme = screen.theme;
    let style = if selected { theme.highlight } else { theme.foreground };
    let right = x.saturating_add(width);

    let col = canvas.put_str_max(x, y, marker, width, style);
    let kind = screen.badge(host);
    let col = canvas.put_str_max(col, y, kind.icon(screen.frame), right.saturating_sub(col), kind.style(theme));

    let favorite = if host.favorite { FAVORITE_ICON } else { "" };
    let mut label = format!("{}{} {}", auth_icon(host), favorite, host.name);
    if detailed {
        label.push_str(&format!(" ({})", host.target()));
        if !host.description.is_empty() {
            label.push_str(" - ");
            label.push_str(&host.description);
        }
    }
    canvas.put_str_max(col, y, &label, right.saturating_sub(col), style);
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::i18n::EN;
    use crate::models::Group;
    use std::sync::OnceLock;

    pub fn sample_groups() -> Vec<Group> {
        let mut web = Host::new("web-01", "10.0.0.1", "deploy");
        web.description = "frontend".into();
        vec![
            Group::new(
                "prod",
                vec![web, Host::new("db-01", "10.0.0.2", "postgres")],
            ),
            Group::new("staging", vec![Host::new("stage", "10.1.0.1", "app")]),
        ]
    }

    pub fn default_keys() -> &'static Keymap {
        static KEYS: OnceLock<Keymap> = OnceLock::new();
        KEYS.get_or_init(Keymap::default)
    }

    pub fn screen<'a>(
        state: &'a NavState,
        theme: &'a Theme,
        layout: &'a LayoutConfig,
        toasts: &'a ToastManager,
    ) -> Screen<'a> {
        Screen {
            state,
            theme,
            texts: &EN,
            keys: default_keys(),
            layout,
            toasts,
            reveal: 1.0,
            frame: 0,
            probes: None,
            connecting: None,
            failed: None,
        }
    }

    /// Buffer rows as strings, with wide-char placeholders removed.
    pub fn lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                let mut line = String::new();
                let mut skip = 0;
                for x in area.left()..area.right() {
                    if skip > 0 {
                        skip -= 1;
                        continue;
                    }
                    let symbol = buf.get(x, y).symbol();
                    skip = crate::text::display_width(symbol).saturating_sub(1);
                    line.push_str(symbol);
                }
                line.trim_end().to_string()
            })
            .collect()
    }

    pub fn draw_lines(screen: &Screen, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        render(area, &mut buf, screen);
        lines(&buf)
    }

    pub fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|l| l.contains(needle))
    }
}
