use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::animation::Easing;
use crate::error::{Error, Result};
use crate::models::{AuthKind, Group};
use crate::theme::ThemeName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Single,
    Columns,
}

impl LayoutMode {
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Single => LayoutMode::Columns,
            LayoutMode::Columns => LayoutMode::Single,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Single => "single",
            LayoutMode::Columns => "columns",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    #[serde(rename = "type")]
    pub kind: LayoutMode,
    pub show_details: bool,
    pub column_width: u16,
    /// Easing of the content reveal.
    pub easing: Easing,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            kind: LayoutMode::Single,
            show_details: false,
            column_width: 80,
            easing: Easing::EaseOut,
        }
    }
}

/// Key names as written in the config file: `Esc`, `Space`, `Enter`,
/// `Tab`, or a single character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub exit: String,
    pub search: String,
    pub favorites: String,
    pub status_check: String,
    pub reload: String,
    pub toggle_fav: String,
    pub theme_switch: String,
    pub layout_switch: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            exit: "Esc".to_string(),
            search: "/".to_string(),
            favorites: "f".to_string(),
            status_check: "s".to_string(),
            reload: "r".to_string(),
            toggle_fav: "Space".to_string(),
            theme_switch: "t".to_string(),
            layout_switch: "l".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub language: String,
    pub key_bindings: KeyBindings,
    pub layout: LayoutConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark.to_string(),
            language: "zh".to_string(),
            key_bindings: KeyBindings::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl UiConfig {
    pub fn theme_name(&self) -> ThemeName {
        ThemeName::parse(&self.theme)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Config {
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        config.apply_defaults();
        Ok(config)
    }

    /// Fill values the file leaves blank. Serde covers absent keys; this
    /// covers keys present but empty.
    pub fn apply_defaults(&mut self) {
        let default_key = default_key_path();
        for host in self.groups.iter_mut().flat_map(|g| g.hosts.iter_mut()) {
            if host.port == 0 {
                host.port = 22;
            }
            if host.username.is_empty() {
                host.username = "app".to_string();
            }
            if host.auth_type == AuthKind::Key
                && host.key_path.as_deref().map_or(true, str::is_empty)
                && host.password.as_deref().map_or(true, str::is_empty)
            {
                host.key_path = default_key.clone();
            }
        }

        let defaults = UiConfig::default();
        if self.ui.theme.is_empty() {
            self.ui.theme = defaults.theme;
        }
        if self.ui.language.is_empty() {
            self.ui.language = defaults.language;
        }
        if self.ui.layout.column_width == 0 {
            self.ui.layout.column_width = defaults.layout.column_width;
        }

        let kb = &mut self.ui.key_bindings;
        let dkb = defaults.key_bindings;
        for (value, default) in [
            (&mut kb.exit, dkb.exit),
            (&mut kb.search, dkb.search),
            (&mut kb.favorites, dkb.favorites),
            (&mut kb.status_check, dkb.status_check),
            (&mut kb.reload, dkb.reload),
            (&mut kb.toggle_fav, dkb.toggle_fav),
            (&mut kb.theme_switch, dkb.theme_switch),
            (&mut kb.layout_switch, dkb.layout_switch),
        ] {
            if value.is_empty() {
                *value = default;
            }
        }
    }
}

fn default_key_path() -> Option<String> {
    dirs::home_dir().map(|home| home.join(".ssh").join("id_rsa").to_string_lossy().into_owned())
}

/// Where the menu reads and writes its document.
pub trait ConfigStore {
    fn load(&self) -> Result<Config>;
    fn save(&self, config: &Config) -> Result<()>;

    /// Re-read after an explicit reload request.
    fn reload(&self) -> Result<Config> {
        self.load()
    }
}

#[derive(Debug)]
pub struct ConfigManager {
    config_file: PathBuf,
}

impl ConfigManager {
    /// Use `path` if given, otherwise `<config dir>/hostmenu/config.toml`.
    pub fn new(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_file = match path {
            Some(path) => path,
            None => dirs::config_dir()
                .context("Could not find config directory")?
                .join("hostmenu")
                .join("config.toml"),
        };

        if let Some(dir) = config_file.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).context("Failed to create config directory")?;
            }
        }

        Ok(Self { config_file })
    }

    pub fn path(&self) -> &Path {
        &self.config_file
    }

    fn load_error(&self, reason: impl ToString) -> Error {
        Error::ConfigLoad {
            path: self.config_file.clone(),
            reason: reason.to_string(),
        }
    }

    fn save_error(&self, reason: impl ToString) -> Error {
        Error::ConfigSave {
            path: self.config_file.clone(),
            reason: reason.to_string(),
        }
    }
}

impl ConfigStore for ConfigManager {
    fn load(&self) -> Result<Config> {
        // If config file doesn't exist, create it with default values
        if !self.config_file.exists() {
            tracing::info!("Creating default config at {:?}", self.config_file);
            self.save(&Config::default())?;
        }

        let content = fs::read_to_string(&self.config_file).map_err(|e| self.load_error(e))?;
        let config = Config::from_toml(&content).map_err(|e| self.load_error(e))?;

        tracing::info!(
            "Loaded {} groups from {:?}",
            config.groups.len(),
            self.config_file
        );
        Ok(config)
    }

    fn save(&self, config: &Config) -> Result<()> {
        let toml = toml::to_string_pretty(config).map_err(|e| self.save_error(e))?;
        fs::write(&self.config_file, toml).map_err(|e| self.save_error(e))?;
        tracing::debug!("Saved config to {:?}", self.config_file);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory store for controller tests.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub config: RefCell<Config>,
        pub saves: Cell<usize>,
        pub fail_reload: Cell<bool>,
    }

    impl MemoryStore {
        pub fn with(config: Config) -> Self {
            Self {
                config: RefCell::new(config),
                ..Self::default()
            }
        }
    }

    impl ConfigStore for MemoryStore {
        fn load(&self) -> Result<Config> {
            Ok(self.config.borrow().clone())
        }

        fn save(&self, config: &Config) -> Result<()> {
            *self.config.borrow_mut() = config.clone();
            self.saves.set(self.saves.get() + 1);
            Ok(())
        }

        fn reload(&self) -> Result<Config> {
            if self.fail_reload.get() {
                return Err(Error::ConfigLoad {
                    path: PathBuf::from("memory"),
                    reason: "unreadable".into(),
                });
            }
            self.load()
        }
    }

    /// Lets a test keep a handle on the store it gave the controller.
    impl<T: ConfigStore + ?Sized> ConfigStore for std::rc::Rc<T> {
        fn load(&self) -> Result<Config> {
            (**self).load()
        }

        fn save(&self, config: &Config) -> Result<()> {
            (**self).save(config)
        }

        fn reload(&self) -> Result<Config> {
            (**self).reload()
        }
    }
}
