use crate::app::host;
use crate::app::types::{Action, Effect, NavState, View};
use crate::filter::{favorite_hosts, filter_groups};
use crate::history::ConnectionHistory;
use crate::models::{Group, Host};

/// Digits 1..=5 address the quick-connect list.
pub const QUICK_CONNECT_SLOTS: usize = 5;

impl NavState {
    pub fn new(groups: Vec<Group>) -> Self {
        let filtered = groups.clone();
        Self {
            groups,
            filtered,
            history: ConnectionHistory::new(),
            dirty: true,
            ..Self::default()
        }
    }

    // Read side -------------------------------------------------------------

    pub fn view(&self) -> View {
        if self.show_favorites {
            View::Favorites
        } else if self.in_group {
            View::HostList
        } else {
            View::GroupList
        }
    }

    /// Master hierarchy, unfiltered.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn filtered(&self) -> &[Group] {
        &self.filtered
    }

    pub fn history(&self) -> &ConnectionHistory {
        &self.history
    }

    pub fn favorites(&self) -> Vec<Host> {
        favorite_hosts(&self.groups)
    }

    pub fn current_group(&self) -> Option<&Group> {
        self.filtered.get(self.current_group)
    }

    /// The host under the cursor in the host list or favourites view.
    pub fn selected_host(&self) -> Option<Host> {
        match self.view() {
            View::GroupList => None,
            View::HostList => self
                .current_group()
                .and_then(|g| g.hosts.get(self.current_host))
                .cloned(),
            View::Favorites => self.favorites().into_iter().nth(self.current_host),
        }
    }

    fn list_len(&self) -> usize {
        match self.view() {
            View::GroupList => self.filtered.len(),
            View::HostList => self.current_group().map_or(0, |g| g.hosts.len()),
            View::Favorites => self.favorites().len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.view() {
            View::GroupList => &mut self.current_group,
            View::HostList | View::Favorites => &mut self.current_host,
        }
    }

    // Write side ------------------------------------------------------------

    /// Apply one action, returning the next state and the side effects the
    /// controller must carry out.
    pub fn reduce(self, action: Action) -> (NavState, Vec<Effect>) {
        let mut next = self;
        let mut effects = Vec::new();
        let changed = next.apply(action, &mut effects);
        next.dirty |= changed;
        (next, effects)
    }

    fn apply(&mut self, action: Action, effects: &mut Vec<Effect>) -> bool {
        match action {
            Action::Up => self.move_cursor(-1),
            Action::Down => self.move_cursor(1),
            Action::Enter => self.enter(effects),
            Action::Back => self.back(effects),
            Action::Quit => {
                effects.push(Effect::Quit);
                false
            }
            Action::StartSearch => {
                if self.view() == View::Favorites {
                    return false;
                }
                self.search_mode = true;
                self.query.clear();
                self.refilter();
                true
            }
            Action::Input(ch) => {
                if !self.search_mode {
                    return false;
                }
                self.query.push(ch);
                self.refilter();
                self.reset_cursors();
                true
            }
            Action::Backspace => {
                if !self.search_mode || self.query.pop().is_none() {
                    return false;
                }
                self.refilter();
                self.reset_cursors();
                true
            }
            Action::ToggleFavorites => {
                if self.in_group || self.search_mode {
                    return false;
                }
                self.show_favorites = !self.show_favorites;
                self.current_host = 0;
                effects.push(Effect::Reveal);
                true
            }
            Action::ToggleFavorite => self.toggle_favorite(effects),
            Action::QuickConnect(slot) => {
                if self.search_mode || self.view() != View::GroupList {
                    return false;
                }
                if !(1..=QUICK_CONNECT_SLOTS).contains(&slot) {
                    return false;
                }
                if let Some(host) = self.history.get(slot - 1) {
                    effects.push(Effect::Connect(host.clone()));
                }
                false
            }
            Action::ToggleTheme => {
                effects.push(Effect::ToggleTheme);
                true
            }
            Action::ToggleLayout => {
                effects.push(Effect::ToggleLayout);
                effects.push(Effect::Reveal);
                true
            }
            Action::Reload => {
                effects.push(Effect::Reload);
                false
            }
            Action::CheckStatus => {
                effects.push(Effect::CheckStatus);
                true
            }
            Action::Redraw => true,
            Action::Reloaded(groups) => {
                self.groups = groups;
                self.in_group = false;
                self.show_favorites = false;
                self.refilter();
                self.reset_cursors();
                true
            }
            Action::StatusUpdate(id, status) => {
                host::set_status(&mut self.groups, &id, status);
                host::set_status(&mut self.filtered, &id, status);
                self.history.set_status(&id, status);
                true
            }
            Action::SessionStarted(host) => {
                self.history.record_connect(&host);
                true
            }
            Action::SessionEnded => {
                self.in_group = false;
                self.current_host = 0;
                self.search_mode = false;
                self.query.clear();
                self.refilter();
                true
            }
        }
    }

    fn move_cursor(&mut self, delta: isize) -> bool {
        let len = self.list_len();
        if len == 0 {
            return false;
        }
        let cursor = self.cursor_mut();
        let target = cursor.saturating_add_signed(delta).min(len - 1);
        if target == *cursor {
            return false;
        }
        *cursor = target;
        true
    }

    fn enter(&mut self, effects: &mut Vec<Effect>) -> bool {
        match self.view() {
            View::GroupList if self.search_mode => {
                // Connect straight to the first match of the highlighted group.
                if let Some(host) = self.current_group().and_then(|g| g.hosts.first()) {
                    effects.push(Effect::Connect(host.clone()));
                }
                false
            }
            View::GroupList => {
                if self.current_group().is_none() {
                    return false;
                }
                self.in_group = true;
                self.current_host = 0;
                effects.push(Effect::Reveal);
                true
            }
            View::HostList | View::Favorites => {
                if let Some(host) = self.selected_host() {
                    effects.push(Effect::Connect(host));
                }
                false
            }
        }
    }

    fn back(&mut self, effects: &mut Vec<Effect>) -> bool {
        if self.search_mode {
            self.search_mode = false;
            self.query.clear();
            self.in_group = false;
            self.refilter();
            self.reset_cursors();
            return true;
        }
        match self.view() {
            View::HostList => {
                self.in_group = false;
                self.current_host = 0;
                true
            }
            View::Favorites => {
                self.show_favorites = false;
                self.current_host = 0;
                true
            }
            View::GroupList => {
                effects.push(Effect::Quit);
                false
            }
        }
    }

    fn toggle_favorite(&mut self, effects: &mut Vec<Effect>) -> bool {
        if self.view() != View::HostList {
            return false;
        }
        let Some(selected) = self.selected_host() else {
            return false;
        };
        let Some(favorite) = host::toggle_favorite(&mut self.groups, &selected.id()) else {
            return false;
        };

        // Rebuild the derived list; the cursor stays on the same row.
        self.refilter();
        effects.push(Effect::FavoriteToggled {
            name: selected.name,
            favorite,
        });
        effects.push(Effect::SaveGroups);
        true
    }

    fn refilter(&mut self) {
        self.filtered = filter_groups(&self.groups, &self.query);
    }

    fn reset_cursors(&mut self) {
        self.current_group = 0;
        self.current_host = 0;
    }
}
