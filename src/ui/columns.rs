use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::symbols;

use crate::app::View;
use crate::models::Host;
use crate::theme::ComponentStyle;
use crate::ui::canvas::Canvas;
use crate::ui::header::{self, widest, TITLE_ICON};
use crate::ui::{host_row, revealed, visible_window, Screen};

const SELECTED: &str = "▶ ";
const UNSELECTED: &str = "  ";

/// The left pane lists at most this many recent hosts.
const QUICK_CONNECT_LIMIT: usize = 3;

pub fn render(canvas: &mut Canvas, screen: &Screen) {
    let area = canvas.area();
    if area.width < 2 {
        return;
    }

    let [left, divider, right] = Layout::horizontal([
        Constraint::Percentage(50),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    left_pane(canvas, screen, left);
    canvas.vline(divider.x, divider.y, divider.height, symbols::line::VERTICAL, screen.theme.border);

    match screen.state.view() {
        View::Favorites => favorites(canvas, screen, right),
        View::HostList if screen.state.current_group().is_some() => hosts(canvas, screen, right),
        _ => hint_card(canvas, screen, right),
    }
}

fn left_pane(canvas: &mut Canvas, screen: &Screen, area: Rect) {
    let (theme, texts, state) = (screen.theme, screen.texts, screen.state);
    let mut y = area.y;

    if state.search_mode {
        let style = ComponentStyle::panel(theme);
        let boxed = Rect::new(area.x, y, area.width, 3.min(area.height));
        let inner = canvas.card(boxed, &style, theme.border);
        let prompt = header::prompt(texts, &state.query);
        canvas.put_str_max(inner.x, inner.y, &prompt, inner.width, theme.info);
        y += boxed.height + 1;
    } else {
        let title = format!("{TITLE_ICON} {}", texts.title);
        canvas.put_str_max(area.x, y, &title, area.width, theme.info);
        y += 2;

        let limit = QUICK_CONNECT_LIMIT.min(area.bottom().saturating_sub(y + 3) as usize);
        y = header::quick_connect(canvas, screen, (area.x, y, area.width), limit, true);
    }

    if y >= area.bottom() {
        return;
    }
    canvas.put_str_max(area.x, y, &format!("📁 {}", texts.server_groups), area.width, theme.success);
    y += 1;

    let groups = state.filtered();
    if groups.is_empty() {
        let empty = if state.search_mode { texts.no_matches } else { texts.no_groups };
        canvas.put_str_max(area.x, y, &format!("{UNSELECTED}{empty}"), area.width, theme.muted);
        return;
    }

    let rows = area.bottom().saturating_sub(y) as usize;
    for i in visible_window(state.current_group, groups.len(), rows) {
        let group = &groups[i];
        let selected = i == state.current_group;
        let (marker, style) = if selected {
            (SELECTED, theme.highlight)
        } else {
            (UNSELECTED, theme.foreground)
        };
        let line = format!("{marker}{} ({})", group.name, group.hosts.len());
        canvas.put_str_max(area.x, y, &line, area.width, style);
        y += 1;
    }
}

fn favorites(canvas: &mut Canvas, screen: &Screen, area: Rect) {
    let (theme, texts) = (screen.theme, screen.texts);
    canvas.put_str_max(area.x, area.y, &format!("⭐ {}", screen.keys.hint(texts.favorites)), area.width, theme.info);

    let favorites = screen.state.favorites();
    let body = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(1));
    if favorites.is_empty() {
        canvas.put_str_max(body.x, body.y, &screen.keys.hint(texts.no_favorites), body.width, theme.muted);
        return;
    }
    host_rows(canvas, screen, body, &favorites, false);
}

fn hosts(canvas: &mut Canvas, screen: &Screen, area: Rect) {
    let Some(group) = screen.state.current_group() else {
        return;
    };
    canvas.put_str_max(area.x, area.y, &format!("📂 {}", group.name), area.width, screen.theme.info);

    let body = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(1));
    host_rows(canvas, screen, body, &group.hosts, screen.layout.show_details);
}

/// Host names only; with `details` the highlighted row gains its target
/// and description on the lines below.
fn host_rows(canvas: &mut Canvas, screen: &Screen, area: Rect, hosts: &[Host], details: bool) {
    let theme = screen.theme;
    let current = screen.state.current_host;
    let extra = |host: &Host| if host.description.is_empty() { 1 } else { 2 };

    // Reserve room for the detail lines so the cursor row stays visible.
    let reserved = match hosts.get(current) {
        Some(host) if details => extra(host),
        _ => 0,
    };
    let rows = (area.height as usize).saturating_sub(reserved);
    let window = visible_window(current, hosts.len(), rows);
    let shown = revealed(window.len(), screen.reveal);

    let mut y = area.y;
    for i in window.take(shown) {
        if y >= area.bottom() {
            break;
        }
        let host = &hosts[i];
        let selected = i == current;
        let marker = if selected { SELECTED } else { UNSELECTED };
        host_row(canvas, screen, (area.x, y, area.width), host, marker, selected, false);
        y += 1;

        if details && selected {
            let target = format!("    {} · {}", host.target(), screen.texts.status(host.status));
            canvas.put_str_max(area.x, y, &target, area.width, theme.muted);
            y += 1;
            if !host.description.is_empty() {
                let description = format!("    {}", host.description);
                canvas.put_str_max(area.x, y, &description, area.width, theme.muted);
                y += 1;
            }
        }
    }
}

/// Usage hints on a premium card.
fn hint_card(canvas: &mut Canvas, screen: &Screen, area: Rect) {
    let (theme, texts) = (screen.theme, screen.texts);
    let style = ComponentStyle::premium(theme);

    let mut lines = vec![texts.help_title.to_string(), String::new()];
    lines.extend(texts.help_lines.iter().map(|line| screen.keys.hint(line)));
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();

    let pad = style.padding;
    let chrome_w = 2 + pad.left + pad.right;
    let chrome_h = 2 + pad.top + pad.bottom;
    let width = (widest(&lines) as u16 + chrome_w).min(area.width.saturating_sub(2));
    let height = (lines.len() as u16 + chrome_h).min(area.height.saturating_sub(2));
    if width <= chrome_w || height <= chrome_h {
        return;
    }

    let rect = Rect::new(area.x + 1, area.y + 1, width, height);
    let inner = canvas.card(rect, &style, theme.border);
    let shown = revealed(lines.len(), screen.reveal);
    for (row, line) in lines.iter().take(shown).enumerate() {
        let y = inner.y + row as u16;
        if y >= inner.bottom() {
            break;
        }
        let line_style = if row == 0 { theme.info } else { theme.on_surface };
        canvas.put_str_max(inner.x, y, line, inner.width, line_style);
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{Action, NavState};
    use crate::config::{LayoutConfig, LayoutMode};
    use crate::theme::Theme;
    use crate::toast::ToastManager;
    use crate::ui::test_support::*;

    fn columns(show_details: bool) -> LayoutConfig {
        LayoutConfig {
            kind: LayoutMode::Columns,
            show_details,
            ..LayoutConfig::default()
        }
    }

    fn run(actions: impl IntoIterator<Item = Action>) -> NavState {
        actions
            .into_iter()
            .fold(NavState::new(sample_groups()), |state, action| state.reduce(action).0)
    }

    #[test]
    fn test_split_at_half_width_with_hint_card() {
        let state = run([]);
        let (theme, layout, toasts) = (Theme::dark(), columns(false), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 80, 24);

        assert!(lines[0].starts_with("💻 SSH Connection Manager"));
        assert!(contains(&lines, "▶ prod (2)"));
        assert!(contains(&lines, "  staging (1)"));
        assert!(contains(&lines, "╭"));
        assert!(contains(&lines, "How to use"));
        assert!(contains(&lines, "t Switch theme"));
    }

    #[test]
    fn test_divider_column() {
        let state = run([]);
        let (theme, layout, toasts) = (Theme::dark(), columns(false), ToastManager::new());
        let area = ratatui::layout::Rect::new(0, 0, 80, 24);
        let mut buf = ratatui::buffer::Buffer::empty(area);
        crate::ui::render(area, &mut buf, &screen(&state, &theme, &layout, &toasts));
        for y in 0..24 {
            assert_eq!(buf.get(40, y).symbol(), "│");
        }
    }

    #[test]
    fn test_host_details_only_for_selected() {
        let state = run([Action::Enter]);
        let (theme, layout, toasts) = (Theme::dark(), columns(true), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 100, 24);

        assert!(contains(&lines, "📂 prod"));
        assert!(contains(&lines, "▶ ◌🔑 web-01"));
        assert!(contains(&lines, "    deploy@10.0.0.1:22 · Unknown"));
        assert!(contains(&lines, "    frontend"));
        assert!(contains(&lines, "  ◌🔑 db-01"));
        assert!(!contains(&lines, "postgres@10.0.0.2"));
    }

    #[test]
    fn test_no_details_when_disabled() {
        let state = run([Action::Enter]);
        let (theme, layout, toasts) = (Theme::dark(), columns(false), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 100, 24);
        assert!(!contains(&lines, "deploy@10.0.0.1"));
    }

    #[test]
    fn test_quick_connect_limited_to_three() {
        let hosts: Vec<_> = sample_groups().into_iter().flat_map(|g| g.hosts).collect();
        let mut actions: Vec<Action> = hosts.iter().cloned().map(Action::SessionStarted).collect();
        actions.push(Action::SessionStarted(crate::models::Host::new("extra", "10.9.0.1", "app")));
        let state = run(actions);
        assert_eq!(state.history().len(), 4);

        let (theme, layout, toasts) = (Theme::dark(), columns(false), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 100, 24);
        assert!(contains(&lines, "  1. ◌ extra"));
        assert!(contains(&lines, "  3. ◌ db-01"));
        assert!(!contains(&lines, "  4."));
    }

    #[test]
    fn test_search_box_in_left_pane() {
        let state = run([Action::StartSearch, Action::Input('s'), Action::Input('t'), Action::Input('a')]);
        let (theme, layout, toasts) = (Theme::dark(), columns(false), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 100, 24);
        assert!(lines[0].starts_with("┌"));
        assert!(lines[1].contains("Search Keywords: sta█"));
        assert!(contains(&lines, "▶ staging (1)"));
        assert!(!contains(&lines, "prod ("));
    }

    #[test]
    fn test_favorites_in_right_pane() {
        let state = run([Action::ToggleFavorites]);
        let (theme, layout, toasts) = (Theme::dark(), columns(false), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 100, 24);
        assert!(contains(&lines, "⭐ Favorite Hosts"));
        assert!(!contains(&lines, "How to use"));
    }
}
