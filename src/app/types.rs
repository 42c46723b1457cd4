use crate::history::ConnectionHistory;
use crate::models::{Group, Host, HostId, HostStatus};

/// Which list the cursor is in. Search is an orthogonal overlay flag on
/// [`NavState`], not a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    GroupList,
    HostList,
    Favorites,
}

/// Inputs to the navigation reducer. Key-derived actions come from the
/// keymap; the rest are fed in by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Up,
    Down,
    Enter,
    /// The exit key: leave the current overlay or view, or quit at root.
    Back,
    Quit,
    StartSearch,
    Input(char),
    Backspace,
    ToggleFavorites,
    ToggleFavorite,
    /// History slot, 1-based as typed.
    QuickConnect(usize),
    ToggleTheme,
    ToggleLayout,
    Reload,
    CheckStatus,
    Redraw,

    Reloaded(Vec<Group>),
    StatusUpdate(HostId, HostStatus),
    SessionStarted(Host),
    SessionEnded,
}

/// Side effects requested by the reducer, carried out by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Connect(Host),
    Quit,
    ToggleTheme,
    ToggleLayout,
    Reload,
    CheckStatus,
    SaveGroups,
    FavoriteToggled { name: String, favorite: bool },
    /// Replay the content reveal animation.
    Reveal,
}

/// Navigation state. Replaced wholesale by [`NavState::reduce`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    pub(super) groups: Vec<Group>,
    pub(super) filtered: Vec<Group>,
    pub(super) history: ConnectionHistory,
    pub current_group: usize,
    pub current_host: usize,
    pub in_group: bool,
    pub search_mode: bool,
    pub show_favorites: bool,
    pub query: String,
    pub dirty: bool,
}
