use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::text::display_width;
use crate::theme::Theme;
use crate::toast::{Severity, MAX_TOASTS};
use crate::ui::canvas::Canvas;
use crate::ui::Screen;

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✅",
        Severity::Error => "❌",
        Severity::Warning => "⚠",
        Severity::Info => "ℹ",
    }
}

fn role(theme: &Theme, severity: Severity) -> Style {
    match severity {
        Severity::Success => theme.success,
        Severity::Error => theme.error,
        Severity::Warning => theme.warning,
        Severity::Info => theme.info,
    }
}

/// Stack toasts in the top-right corner, newest on top.
pub fn render(canvas: &mut Canvas, screen: &Screen) {
    let area = canvas.area();
    let theme = screen.theme;
    let max_width = area.width.saturating_sub(4);
    if max_width == 0 {
        return;
    }

    for (i, toast) in screen.toasts.newest_first().take(MAX_TOASTS).enumerate() {
        let y = area.y + 1 + i as u16;
        if y >= area.bottom().saturating_sub(1) {
            break;
        }

        let text = format!("{} {}", icon(toast.severity), toast.message);
        let width = (display_width(&text) as u16 + 4).min(max_width);
        let x = area.right().saturating_sub(width + 2).max(area.x);

        let mut style = Style::default()
            .bg(Theme::color_of(role(theme, toast.severity)))
            .fg(theme.surface);
        if toast.is_fading() {
            style = style.add_modifier(Modifier::DIM);
        }

        canvas.fill(Rect::new(x, y, width, 1), style);
        canvas.put_str_max(x + 2, y, &text, width.saturating_sub(4), style);
    }
}
