use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::types::Action;
use crate::config::KeyBindings;

/// Parse a binding name from the config file. Returns `None` for names
/// that are neither a known key nor a single character.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    match name {
        "Esc" | "esc" | "Escape" => Some(KeyCode::Esc),
        "Space" | "space" => Some(KeyCode::Char(' ')),
        "Enter" | "enter" => Some(KeyCode::Enter),
        "Tab" | "tab" => Some(KeyCode::Tab),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(KeyCode::Char(ch)),
                _ => None,
            }
        }
    }
}

/// Resolved key bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Keymap {
    exit: KeyCode,
    search: KeyCode,
    favorites: KeyCode,
    status_check: KeyCode,
    reload: KeyCode,
    toggle_fav: KeyCode,
    theme_switch: KeyCode,
    layout_switch: KeyCode,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_bindings(&KeyBindings::default())
    }
}

impl Keymap {
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        let defaults = KeyBindings::default();
        let resolve = |value: &str, fallback: &str| {
            parse_key(value).unwrap_or_else(|| {
                tracing::warn!("Unrecognised key binding {:?}, using {:?}", value, fallback);
                parse_key(fallback).unwrap_or(KeyCode::Null)
            })
        };
        Self {
            exit: resolve(&bindings.exit, &defaults.exit),
            search: resolve(&bindings.search, &defaults.search),
            favorites: resolve(&bindings.favorites, &defaults.favorites),
            status_check: resolve(&bindings.status_check, &defaults.status_check),
            reload: resolve(&bindings.reload, &defaults.reload),
            toggle_fav: resolve(&bindings.toggle_fav, &defaults.toggle_fav),
            theme_switch: resolve(&bindings.theme_switch, &defaults.theme_switch),
            layout_switch: resolve(&bindings.layout_switch, &defaults.layout_switch),
        }
    }

    /// Translate a key press. In search mode printable keys are query
    /// input; everything else goes through the bindings.
    pub fn action(&self, key: KeyEvent, search_mode: bool) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
        }

        match key.code {
            KeyCode::Up => return Some(Action::Up),
            KeyCode::Down => return Some(Action::Down),
            KeyCode::Enter if self.exit != KeyCode::Enter => return Some(Action::Enter),
            _ => {}
        }

        if search_mode {
            // A printable exit binding would be unusable as query input.
            return match key.code {
                KeyCode::Esc => Some(Action::Back),
                KeyCode::Backspace => Some(Action::Backspace),
                KeyCode::Char(ch) => Some(Action::Input(ch)),
                code if code == self.exit => Some(Action::Back),
                _ => None,
            };
        }

        if let Some(action) = self.bound(key.code) {
            return Some(action);
        }
        // Shifted letters reach the bindings of their lowercase form.
        if let KeyCode::Char(ch) = key.code {
            if ch.is_ascii_uppercase() {
                if let Some(action) = self.bound(KeyCode::Char(ch.to_ascii_lowercase())) {
                    return Some(action);
                }
            }
        }

        match key.code {
            KeyCode::Char('q' | 'Q') => Some(Action::Quit),
            KeyCode::Char(ch @ '1'..='5') => Some(Action::QuickConnect(ch as usize - '0' as usize)),
            _ => None,
        }
    }

    fn bound(&self, code: KeyCode) -> Option<Action> {
        let action = if code == self.exit {
            Action::Back
        } else if code == self.search {
            Action::StartSearch
        } else if code == self.favorites {
            Action::ToggleFavorites
        } else if code == self.status_check {
            Action::CheckStatus
        } else if code == self.reload {
            Action::Reload
        } else if code == self.toggle_fav {
            Action::ToggleFavorite
        } else if code == self.theme_switch {
            Action::ToggleTheme
        } else if code == self.layout_switch {
            Action::ToggleLayout
        } else {
            return None;
        };
        Some(action)
    }

    /// Fill the `{exit}`, `{search}`, `{favorites}`, `{status}`,
    /// `{reload}`, `{fav}`, `{theme}` and `{layout}` placeholders of a hint
    /// template with the keys actually bound.
    pub fn hint(&self, template: &str) -> String {
        [
            ("{exit}", self.exit),
            ("{search}", self.search),
            ("{favorites}", self.favorites),
            ("{status}", self.status_check),
            ("{reload}", self.reload),
            ("{fav}", self.toggle_fav),
            ("{theme}", self.theme_switch),
            ("{layout}", self.layout_switch),
        ]
        .into_iter()
        .fold(template.to_string(), |text, (token, code)| {
            text.replace(token, &key_label(code))
        })
    }
}

/// How a key is written in on-screen hints.
pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Esc => "ESC".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Char(ch) => ch.to_string(),
        other => format!("{other:?}"),
    }
}
