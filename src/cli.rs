use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{LayoutMode, UiConfig};
use crate::theme::ThemeName;

/// Keyboard-driven menu for picking a host and opening an SSH session
#[derive(Parser, Debug)]
#[command(name = "hostmenu", version, about)]
pub struct Cli {
    /// Path to the config file.
    /// Default: <config dir>/hostmenu/config.toml, created when missing.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Color theme for this session
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// UI language (zh or en)
    #[arg(long = "lang")]
    pub language: Option<String>,

    /// Layout for this session
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Directory for log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every configured host sorted by name and exit
    List,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
    HighContrast,
}

impl From<ThemeArg> for ThemeName {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeName::Dark,
            ThemeArg::Light => ThemeName::Light,
            ThemeArg::HighContrast => ThemeName::HighContrast,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum LayoutArg {
    Single,
    Columns,
}

impl From<LayoutArg> for LayoutMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Single => LayoutMode::Single,
            LayoutArg::Columns => LayoutMode::Columns,
        }
    }
}

impl Cli {
    /// Session-only overrides on top of the file's `[ui]` block.
    pub fn apply_overrides(&self, ui: &mut UiConfig) {
        if let Some(theme) = self.theme {
            ui.theme = ThemeName::from(theme).to_string();
        }
        if let Some(language) = &self.language {
            ui.language = language.clone();
        }
        if let Some(layout) = self.layout {
            ui.layout.kind = layout.into();
        }
    }
}
