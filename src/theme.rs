//! Named color schemes and the component style templates built on them.
//!
//! A [`Theme`] is resolved once from its name and handed to the render
//! engine; nothing reads it through a global.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::animation::{AnimationConfig, Easing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl ThemeName {
    /// Accepts the names used in config files; anything unknown is dark.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeName::Light,
            "high-contrast" | "high_contrast" => ThemeName::HighContrast,
            _ => ThemeName::Dark,
        }
    }

    /// The `t` key flips between light and dark.
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark | ThemeName::HighContrast => ThemeName::Light,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeName::Dark => write!(f, "dark"),
            ThemeName::Light => write!(f, "light"),
            ThemeName::HighContrast => write!(f, "high-contrast"),
        }
    }
}

/// Named color attributes. Styles carry both the color and any
/// emphasis (bold, reverse) the scheme wants for that role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    pub background: Color,
    pub foreground: Style,
    pub highlight: Style,
    pub border: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,
    pub accent1: Style,
    pub accent2: Style,
    pub muted: Style,
    pub surface: Color,
    pub on_surface: Style,
}

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

fn bold(color: Color) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            background: Color::Reset,
            foreground: fg(Color::White),
            highlight: bold(Color::Yellow),
            border: fg(Color::Blue),
            success: bold(Color::Green),
            warning: bold(Color::Yellow),
            error: bold(Color::Red),
            info: bold(Color::Cyan),
            accent1: fg(Color::Magenta),
            accent2: fg(Color::Cyan),
            muted: fg(Color::DarkGray),
            surface: Color::Black,
            on_surface: fg(Color::White),
        }
    }

    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            background: Color::White,
            foreground: fg(Color::Black),
            highlight: bold(Color::Blue),
            border: fg(Color::Cyan),
            success: bold(Color::Green),
            warning: bold(Color::Yellow),
            error: bold(Color::Red),
            info: bold(Color::Magenta),
            accent1: fg(Color::Blue),
            accent2: fg(Color::Cyan),
            muted: fg(Color::DarkGray),
            surface: Color::White,
            on_surface: fg(Color::Black),
        }
    }

    pub fn high_contrast() -> Self {
        let reversed = |color| bold(color).add_modifier(Modifier::REVERSED);
        Self {
            name: ThemeName::HighContrast,
            background: Color::Black,
            foreground: bold(Color::White),
            highlight: reversed(Color::Yellow),
            border: bold(Color::White),
            success: reversed(Color::Green),
            warning: reversed(Color::Yellow),
            error: reversed(Color::Red),
            info: reversed(Color::Cyan),
            accent1: bold(Color::Magenta),
            accent2: bold(Color::Cyan),
            muted: fg(Color::Gray),
            surface: Color::Black,
            on_surface: bold(Color::White),
        }
    }

    /// Foreground color of a role style, used where a role doubles as a
    /// background fill (badges, toasts).
    pub fn color_of(style: Style) -> Color {
        style.fg.unwrap_or(Color::Reset)
    }

    /// Base style for plain text: role style on the theme background.
    pub fn on_background(&self, style: Style) -> Style {
        style.bg(self.background)
    }
}

// ---------------------------------------------------------------------------
// Component style descriptors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    None,
    Solid,
    Double,
    Rounded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub kind: BorderKind,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    Solid(Color),
    /// Two-stop vertical gradient, top color to bottom color.
    Gradient(Color, Color),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub enabled: bool,
    pub offset_x: u16,
    pub offset_y: u16,
    pub color: Color,
}

/// Declarative look of a boxed component, resolved at draw time.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentStyle {
    pub padding: Padding,
    pub border: BorderStyle,
    pub background: Background,
    pub shadow: Shadow,
    pub animation: AnimationConfig,
}

impl ComponentStyle {
    /// Rounded card with a drop shadow, gradient fill and a short fade-in.
    /// The high-contrast theme draws it with a double border instead.
    pub fn premium(theme: &Theme) -> Self {
        let kind = match theme.name {
            ThemeName::HighContrast => BorderKind::Double,
            _ => BorderKind::Rounded,
        };
        Self {
            padding: Padding {
                top: 1,
                right: 2,
                bottom: 1,
                left: 2,
            },
            border: BorderStyle {
                kind,
                color: Theme::color_of(theme.border),
            },
            background: Background::Gradient(theme.surface, Theme::color_of(theme.info)),
            shadow: Shadow {
                enabled: true,
                offset_x: 1,
                offset_y: 1,
                color: Color::DarkGray,
            },
            animation: AnimationConfig {
                duration: Duration::from_millis(200),
                easing: Easing::EaseOut,
            },
        }
    }

    /// Flat panel: solid border, solid fill, no shadow.
    pub fn panel(theme: &Theme) -> Self {
        Self {
            padding: Padding {
                top: 0,
                right: 1,
                bottom: 0,
                left: 1,
            },
            border: BorderStyle {
                kind: BorderKind::Solid,
                color: Theme::color_of(theme.border),
            },
            background: Background::Solid(theme.background),
            shadow: Shadow {
                enabled: false,
                offset_x: 0,
                offset_y: 0,
                color: Color::DarkGray,
            },
            animation: AnimationConfig {
                duration: Duration::from_millis(150),
                easing: Easing::Linear,
            },
        }
    }
}
