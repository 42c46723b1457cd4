use ratatui::symbols;

use crate::filter::total_hosts;
use crate::i18n::Texts;
use crate::text::{centered_offset, display_width, split_to_fit_width};
use crate::ui::badge::FAVORITE_ICON;
use crate::ui::canvas::Canvas;
use crate::ui::Screen;

pub const TITLE_ICON: &str = "💻";

/// Below this many columns only the short operations hint is shown.
const NARROW_HINT_WIDTH: usize = 50;

/// Banner, title, theme/layout line, operations hint, separator.
/// Returns the first free row.
pub fn header(canvas: &mut Canvas, screen: &Screen, mut y: u16) -> u16 {
    let theme = screen.theme;
    let texts = screen.texts;
    let area = canvas.area();
    let (x, width) = (area.x, area.width);

    canvas.hline(x, y, width, symbols::line::DOUBLE_HORIZONTAL, theme.border);
    y += 1;

    let title = format!("{TITLE_ICON} {}", texts.title);
    let offset = centered_offset(&title, width as usize) as u16;
    canvas.put_str_max(x + offset, y, &title, width, theme.info);
    y += 1;

    canvas.hline(x, y, width, symbols::line::DOUBLE_HORIZONTAL, theme.border);
    y += 1;

    let info = format!(
        "{}: {} | {}: {}",
        texts.theme_label,
        theme.name,
        texts.layout_label,
        screen.layout.kind.as_str()
    );
    canvas.put_str_max(x, y, &info, width, theme.border);
    y += 1;

    let max_hint = (width as usize).saturating_sub(4);
    let hint_lines = if max_hint < NARROW_HINT_WIDTH {
        vec![screen.keys.hint(texts.operations_short)]
    } else {
        split_to_fit_width(&screen.keys.hint(texts.operations), max_hint)
    };
    for line in hint_lines {
        canvas.put_str_max(x, y, &line, width, theme.foreground);
        y += 1;
    }

    canvas.hline(x, y, width, symbols::line::HORIZONTAL, theme.border);
    y + 1
}

/// Search banner, prompt with the query and a block cursor, and the
/// match count.
pub fn search_header(canvas: &mut Canvas, screen: &Screen, mut y: u16) -> u16 {
    let theme = screen.theme;
    let texts = screen.texts;
    let area = canvas.area();
    let (x, width) = (area.x, area.width);

    canvas.hline(x, y, width, symbols::line::DOUBLE_HORIZONTAL, theme.border);
    y += 1;
    let col = canvas.put_str_max(x, y, &format!("🔍 {}", texts.search_mode), width, theme.info);
    let col = col + 2;
    canvas.put_str_max(col, y, texts.search_hint, area.right().saturating_sub(col), theme.foreground);
    y += 1;
    canvas.hline(x, y, width, symbols::line::DOUBLE_HORIZONTAL, theme.border);
    y += 1;

    canvas.put_str_max(x, y, &prompt(texts, &screen.state.query), width, theme.info);
    y += 2;

    let filtered = screen.state.filtered();
    if filtered.is_empty() {
        canvas.put_str_max(x, y, &format!("❌ {}", texts.no_matches), width, theme.error);
    } else {
        let found = texts.found(total_hosts(filtered));
        canvas.put_str_max(x, y, &format!("✅ {found}"), width, theme.success);
    }
    y += 1;

    canvas.hline(x, y, width, symbols::line::HORIZONTAL, theme.border);
    y + 1
}

pub fn prompt(texts: &Texts, query: &str) -> String {
    format!("{}{}█", texts.search_prompt, query)
}

/// Recent connections, numbered for the digit keys. `compact` drops the
/// target and the trailing separator for the narrow left pane.
pub fn quick_connect(
    canvas: &mut Canvas,
    screen: &Screen,
    (x, mut y, width): (u16, u16, u16),
    limit: usize,
    compact: bool,
) -> u16 {
    let theme = screen.theme;
    let history = screen.state.history();
    if history.is_empty() {
        return y;
    }

    canvas.put_str_max(x, y, &format!("⚡ {}", screen.texts.quick_connect), width, theme.success);
    y += 1;

    let right = x.saturating_add(width);
    for (i, host) in history.entries().iter().take(limit).enumerate() {
        let indent = if compact { "  " } else { "   " };
        let col = canvas.put_str_max(x, y, &format!("{indent}{}. ", i + 1), width, theme.accent2);
        let kind = screen.badge(host);
        let col = canvas.put_str_max(col, y, kind.icon(screen.frame), right.saturating_sub(col), kind.style(theme));

        let label = if compact {
            format!(" {}", host.name)
        } else {
            let favorite = if host.favorite { FAVORITE_ICON } else { "" };
            format!("{favorite} {} ({})", host.name, host.target())
        };
        canvas.put_str_max(col, y, &label, right.saturating_sub(col), theme.border);
        y += 1;
    }

    if compact {
        y + 1
    } else {
        canvas.hline(x, y, width, symbols::line::HORIZONTAL, theme.border);
        y + 1
    }
}

/// Width of the widest line, for sizing boxes around text.
pub fn widest(lines: &[&str]) -> usize {
    lines.iter().map(|l| display_width(l)).max().unwrap_or(0)
}
