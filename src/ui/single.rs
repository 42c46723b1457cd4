use ratatui::layout::Rect;
use ratatui::symbols;

use crate::app::View;
use crate::history::HISTORY_CAPACITY;
use crate::i18n::Texts;
use crate::models::Host;
use crate::ui::canvas::Canvas;
use crate::ui::{header, host_row, revealed, visible_window, Screen};

const SELECTED_HOST: &str = "🔹 ";
const SELECTED_GROUP: &str = "🔸 ";
const UNSELECTED: &str = "   ";

pub fn render(canvas: &mut Canvas, screen: &Screen) {
    let area = canvas.area();
    let state = screen.state;

    let mut y = area.y;
    if state.search_mode {
        y = header::search_header(canvas, screen, y);
    } else {
        y = header::header(canvas, screen, y);
        y = header::quick_connect(canvas, screen, (area.x, y, area.width), HISTORY_CAPACITY, false);
    }

    if y >= area.bottom() {
        return;
    }
    let content = Rect::new(area.x, y, area.width, area.bottom() - y);
    match state.view() {
        View::GroupList => groups(canvas, screen, content),
        View::HostList => hosts(canvas, screen, content),
        View::Favorites => favorites(canvas, screen, content),
    }
}

fn groups(canvas: &mut Canvas, screen: &Screen, area: Rect) {
    let (theme, texts, state) = (screen.theme, screen.texts, screen.state);
    let mut y = area.y;

    if !state.search_mode {
        canvas.put_str_max(area.x, y, &format!("📁 {}", texts.server_groups), area.width, theme.success);
        y += 1;
        if state.filtered().is_empty() {
            canvas.put_str_max(area.x, y, &format!("{UNSELECTED}{}", texts.no_groups), area.width, theme.muted);
            return;
        }
    }

    let groups = state.filtered();
    let rows = area.bottom().saturating_sub(y) as usize;
    let window = visible_window(state.current_group, groups.len(), rows);
    let shown = revealed(window.len(), screen.reveal);
    for i in window.take(shown) {
        let group = &groups[i];
        let selected = i == state.current_group;
        let (marker, style) = if selected {
            (SELECTED_GROUP, theme.highlight)
        } else {
            (UNSELECTED, theme.foreground)
        };
        let line = format!("{marker}{} ({} {})", group.name, group.hosts.len(), texts.hosts_suffix);
        canvas.put_str_max(area.x, y, &line, area.width, style);
        y += 1;
    }
}

fn hosts(canvas: &mut Canvas, screen: &Screen, area: Rect) {
    let (theme, texts, state) = (screen.theme, screen.texts, screen.state);
    let Some(group) = state.current_group() else {
        return;
    };
    let mut y = area.y;

    if !state.search_mode {
        let title = format!("📂 {}", Texts::fill(&screen.keys.hint(texts.group_header), &group.name));
        canvas.put_str_max(area.x, y, &title, area.width, theme.info);
        y += 1;
        canvas.hline(area.x, y, area.width, symbols::line::HORIZONTAL, theme.border);
        y += 1;
    }

    host_rows(canvas, screen, Rect::new(area.x, y, area.width, area.bottom().saturating_sub(y)), &group.hosts);
}

fn favorites(canvas: &mut Canvas, screen: &Screen, area: Rect) {
    let (theme, texts) = (screen.theme, screen.texts);
    canvas.put_str_max(area.x, area.y, &format!("⭐ {}", screen.keys.hint(texts.favorites)), area.width, theme.info);

    let favorites = screen.state.favorites();
    let y = area.y + 1;
    if favorites.is_empty() {
        canvas.put_str_max(area.x, y, &format!("{UNSELECTED}{}", screen.keys.hint(texts.no_favorites)), area.width, theme.muted);
        return;
    }
    host_rows(canvas, screen, Rect::new(area.x, y, area.width, area.bottom().saturating_sub(y)), &favorites);
}

fn host_rows(canvas: &mut Canvas, screen: &Screen, area: Rect, hosts: &[Host]) {
    let current = screen.state.current_host;
    let window = visible_window(current, hosts.len(), area.height as usize);
    let shown = revealed(window.len(), screen.reveal);
    for (row, i) in window.take(shown).enumerate() {
        let selected = i == current;
        let marker = if selected { SELECTED_HOST } else { UNSELECTED };
        let y = area.y + row as u16;
        host_row(canvas, screen, (area.x, y, area.width), &hosts[i], marker, selected, true);
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{Action, NavState};
    use crate::config::LayoutConfig;
    use crate::theme::Theme;
    use crate::toast::ToastManager;
    use crate::ui::test_support::*;

    fn run(actions: impl IntoIterator<Item = Action>) -> NavState {
        actions
            .into_iter()
            .fold(NavState::new(sample_groups()), |state, action| state.reduce(action).0)
    }

    #[test]
    fn test_root_shows_header_and_groups() {
        let state = run([]);
        let (theme, layout, toasts) = (Theme::dark(), LayoutConfig::default(), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 140, 30);

        assert!(lines[0].starts_with("═══"));
        assert!(lines[1].contains("SSH Connection Manager"));
        assert!(lines[3].contains("Theme: dark | Layout: single"));
        assert!(contains(&lines, "📁 Server Groups:"));
        assert!(contains(&lines, "🔸 prod (2 hosts)"));
        assert!(contains(&lines, "   staging (1 hosts)"));
        assert!(!contains(&lines, "Quick Connect"));
    }

    #[test]
    fn test_title_is_centered_by_display_width() {
        let state = run([]);
        let (theme, layout, toasts) = (Theme::dark(), LayoutConfig::default(), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 60, 20);
        // "💻 SSH Connection Manager" is 25 cells wide.
        assert_eq!(lines[1].find('💻'), Some((60 - 25) / 2));
    }

    #[test]
    fn test_narrow_terminal_wraps_operations() {
        let state = run([]);
        let (theme, layout, toasts) = (Theme::dark(), LayoutConfig::default(), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 60, 20);
        assert!(lines.iter().all(|l| crate::text::display_width(l) <= 60));
        assert!(lines[4].starts_with("Operations:"));
        assert!(lines[5].contains("|"));
    }

    #[test]
    fn test_host_list_rows() {
        let state = run([Action::Enter]);
        let (theme, layout, toasts) = (Theme::dark(), LayoutConfig::default(), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 140, 30);
        assert!(contains(&lines, "📂 Group: prod (Esc back, Space favorite)"));
        assert!(contains(&lines, "🔹 ◌🔑 web-01 (deploy@10.0.0.1:22) - frontend"));
        assert!(contains(&lines, "   ◌🔑 db-01 (postgres@10.0.0.2:22)"));
    }

    #[test]
    fn test_quick_connect_section() {
        let host = sample_groups()[1].hosts[0].clone();
        let state = run([Action::SessionStarted(host)]);
        let (theme, layout, toasts) = (Theme::dark(), LayoutConfig::default(), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 140, 30);
        assert!(contains(&lines, "⚡ Quick Connect"));
        assert!(contains(&lines, "   1. ◌ stage (app@10.1.0.1:22)"));
    }

    #[test]
    fn test_search_header_and_results() {
        let state = run([Action::StartSearch, Action::Input('d'), Action::Input('b')]);
        let (theme, layout, toasts) = (Theme::dark(), LayoutConfig::default(), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 140, 30);
        assert!(contains(&lines, "🔍 Search Mode"));
        assert!(contains(&lines, "Search Keywords: db█"));
        assert!(contains(&lines, "✅ Found 1 matching hosts"));
        assert!(contains(&lines, "🔸 prod (1 hosts)"));
        assert!(!contains(&lines, "staging"));
        assert!(!contains(&lines, "Server Groups"));
    }

    #[test]
    fn test_search_without_matches() {
        let state = run([Action::StartSearch, Action::Input('z')]);
        let (theme, layout, toasts) = (Theme::dark(), LayoutConfig::default(), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 140, 30);
        assert!(contains(&lines, "❌ No matching hosts found"));
    }

    #[test]
    fn test_favorites_view() {
        let state = run([Action::ToggleFavorites]);
        let (theme, layout, toasts) = (Theme::dark(), LayoutConfig::default(), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 140, 30);
        assert!(contains(&lines, "⭐ Favorite Hosts"));
        assert!(contains(&lines, "No favorite hosts"));

        let state = run([Action::Enter, Action::ToggleFavorite, Action::Back, Action::ToggleFavorites]);
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 140, 30);
        assert!(contains(&lines, "🔹 ◌🔑⭐ web-01"));
    }

    #[test]
    fn test_long_rows_are_truncated_to_width() {
        let state = run([Action::Enter]);
        let (theme, layout, toasts) = (Theme::dark(), LayoutConfig::default(), ToastManager::new());
        let lines = draw_lines(&screen(&state, &theme, &layout, &toasts), 30, 30);
        let row = lines.iter().find(|l| l.contains("web-01")).unwrap();
        assert!(row.ends_with('…'));
        assert!(crate::text::display_width(row) <= 30);
    }

    #[test]
    fn test_reveal_hides_trailing_rows() {
        let state = run([Action::Enter]);
        let (theme, layout, toasts) = (Theme::dark(), LayoutConfig::default(), ToastManager::new());
        let mut screen = screen(&state, &theme, &layout, &toasts);
        screen.reveal = 0.5;
        let lines = draw_lines(&screen, 140, 30);
        assert!(contains(&lines, "web-01"));
        assert!(!contains(&lines, "db-01"));
    }
}
