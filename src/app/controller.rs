use std::time::{Duration, Instant};

use ratatui::{backend::Backend, Terminal};

use crate::animation::{SharedAnimations, FRAME_INTERVAL};
use crate::app::host::identities;
use crate::app::keymap::Keymap;
use crate::app::types::{Action, Effect, NavState};
use crate::config::{Config, ConfigStore};
use crate::error::{Error, Result};
use crate::event::{AppEvent, Console, TICK_RATE};
use crate::i18n::Texts;
use crate::models::{Host, HostId};
use crate::ssh_service::SessionLauncher;
use crate::status::{spawn_probes, ProbeBatch, PROBE_TIMEOUT};
use crate::theme::{ComponentStyle, Theme};
use crate::toast::{Severity, ToastManager};
use crate::ui::{self, Screen};

pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Animation id for the list reveal.
const REVEAL: &str = "content";

pub struct App {
    pub state: NavState,
    pub config: Config,
    pub theme: Theme,
    pub texts: &'static Texts,
    keymap: Keymap,
    store: Box<dyn ConfigStore>,
    launcher: Box<dyn SessionLauncher>,
    pub toasts: ToastManager,
    animations: SharedAnimations,
    probes: Option<ProbeBatch>,
    connecting: Option<HostId>,
    failed: Option<HostId>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: Config,
        store: Box<dyn ConfigStore>,
        launcher: Box<dyn SessionLauncher>,
        animations: SharedAnimations,
    ) -> Self {
        let theme = Theme::from_name(config.ui.theme_name());
        let texts = Texts::for_language(&config.ui.language);
        let keymap = Keymap::from_bindings(&config.ui.key_bindings);
        let state = NavState::new(config.groups.clone());
        Self {
            state,
            config,
            theme,
            texts,
            keymap,
            store,
            launcher,
            toasts: ToastManager::new(),
            animations,
            probes: None,
            connecting: None,
            failed: None,
            should_quit: false,
        }
    }

    /// Drive the menu until quit. Only display failures are returned.
    pub fn run<B: Backend, C: Console>(&mut self, terminal: &mut Terminal<B>, console: &mut C) -> Result<()> {
        tracing::info!("Menu started with {} groups", self.state.groups().len());

        while !self.should_quit {
            if self.toasts.tick(Instant::now()) {
                self.state.dirty = true;
            }
            self.drain_probes();

            let animating = self.animations.lock().has_active();
            if self.state.dirty || animating || !self.toasts.is_empty() || self.probes.is_some() {
                self.render(terminal)?;
            }

            let timeout = if animating { FRAME_INTERVAL } else { TICK_RATE };
            match console.next_event(timeout).map_err(Error::Display)? {
                AppEvent::Key(key) => {
                    let Some(action) = self.keymap.action(key, self.state.search_mode) else {
                        continue;
                    };
                    if let Some(host) = self.dispatch(action) {
                        self.run_session(terminal, console, host)?;
                    }
                }
                AppEvent::Resize(width, height) => {
                    tracing::debug!("Terminal resized to {}x{}", width, height);
                    terminal.autoresize().map_err(Error::Display)?;
                    self.dispatch(Action::Redraw);
                }
                AppEvent::Tick => {}
            }
        }

        tracing::info!("Menu closed");
        Ok(())
    }

    /// Feed one action through the reducer and carry out its effects.
    /// Returns the host to open a session on, if the action asked for one.
    pub fn dispatch(&mut self, action: Action) -> Option<Host> {
        tracing::debug!("Dispatch {:?}", action);
        let (next, effects) = std::mem::take(&mut self.state).reduce(action);
        self.state = next;

        let mut connect = None;
        for effect in effects {
            if let Some(host) = self.apply(effect) {
                connect = Some(host);
            }
        }
        connect
    }

    fn apply(&mut self, effect: Effect) -> Option<Host> {
        match effect {
            Effect::Connect(host) => return Some(host),
            Effect::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            Effect::ToggleTheme => {
                let name = self.theme.name.toggled();
                tracing::info!("Theme switched to {}", name);
                self.theme = Theme::from_name(name);
                self.config.ui.theme = name.to_string();
                self.persist();
                self.toast(self.texts.toast_theme, Severity::Info);
            }
            Effect::ToggleLayout => {
                let layout = &mut self.config.ui.layout;
                layout.kind = layout.kind.toggled();
                tracing::info!("Layout switched to {}", layout.kind.as_str());
                self.persist();
                self.toast(self.texts.toast_layout, Severity::Info);
            }
            Effect::SaveGroups => {
                self.config.groups = self.state.groups().to_vec();
                self.persist();
            }
            Effect::Reload => self.reload(),
            Effect::CheckStatus => self.check_status(),
            Effect::FavoriteToggled { name, favorite } => {
                tracing::info!("Favorite {} for {}", favorite, name);
                let template = if favorite {
                    self.texts.toast_favorite_added
                } else {
                    self.texts.toast_favorite_removed
                };
                self.toast(Texts::fill(template, &name), Severity::Success);
            }
            Effect::Reveal => {
                let mut config = ComponentStyle::premium(&self.theme).animation;
                config.easing = self.config.ui.layout.easing;
                self.animations.lock().start(REVEAL, config, Instant::now());
            }
        }
        None
    }

    fn toast(&mut self, message: impl Into<String>, severity: Severity) {
        self.toasts.push(message, severity, TOAST_DURATION);
        self.state.dirty = true;
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.config) {
            tracing::error!("Failed to save config: {}", e);
            self.toast(self.texts.toast_save_failed, Severity::Error);
        }
    }

    fn reload(&mut self) {
        match self.store.reload() {
            Ok(config) => {
                tracing::info!("Config reloaded: {} groups", config.groups.len());
                self.theme = Theme::from_name(config.ui.theme_name());
                self.texts = Texts::for_language(&config.ui.language);
                self.keymap = Keymap::from_bindings(&config.ui.key_bindings);
                self.probes = None;
                self.failed = None;
                let groups = config.groups.clone();
                self.config = config;
                self.dispatch(Action::Reloaded(groups));
                self.toast(self.texts.toast_reloaded, Severity::Success);
            }
            Err(e) => {
                // Keep the previous in-memory state.
                tracing::warn!("Reload failed: {}", e);
                self.toast(self.texts.toast_reload_failed, Severity::Error);
            }
        }
    }

    fn check_status(&mut self) {
        let history = self.state.history().entries().iter().map(Host::id);
        let ids: Vec<HostId> = identities(self.state.groups()).into_iter().chain(history).collect();
        self.probes = Some(spawn_probes(ids, PROBE_TIMEOUT));
        self.toast(self.texts.toast_checking, Severity::Info);
    }

    /// Apply probe results that have arrived since the last call.
    pub fn drain_probes(&mut self) {
        let Some(batch) = self.probes.as_mut() else {
            return;
        };
        let results = batch.drain();
        let done = batch.is_done();
        let (online, offline) = batch.tally();

        for (id, status) in results {
            self.dispatch(Action::StatusUpdate(id, status));
        }
        if done {
            tracing::info!("Status check finished: {} online, {} offline", online, offline);
            self.probes = None;
            let texts = self.texts;
            let summary = format!("{}: {}  {}: {}", texts.online, online, texts.offline, offline);
            let severity = if offline > 0 { Severity::Warning } else { Severity::Success };
            self.toast(summary, severity);
        }
    }

    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let (reveal, frame) = {
            let animations = self.animations.lock();
            (animations.progress(REVEAL).unwrap_or(1.0), animations.spinner_frame())
        };
        let screen = Screen {
            state: &self.state,
            theme: &self.theme,
            texts: self.texts,
            keys: &self.keymap,
            layout: &self.config.ui.layout,
            toasts: &self.toasts,
            reveal,
            frame,
            probes: self.probes.as_ref(),
            connecting: self.connecting.as_ref(),
            failed: self.failed.as_ref(),
        };
        terminal.draw(|f| ui::draw(f, &screen)).map_err(Error::Display)?;
        self.state.dirty = false;
        Ok(())
    }

    // Sessions --------------------------------------------------------------

    /// Hand the terminal to an external session and take it back once the
    /// session ends. Only display failures are returned.
    fn run_session<B: Backend, C: Console>(
        &mut self,
        terminal: &mut Terminal<B>,
        console: &mut C,
        host: Host,
    ) -> Result<()> {
        self.begin_session(&host);
        self.render(terminal)?;

        console.release().map_err(Error::Display)?;
        terminal.show_cursor().map_err(Error::Display)?;
        tracing::info!("Display released for session");

        let outcome = self.launcher.launch(&host, self.texts);

        console.reacquire().map_err(Error::Display)?;
        terminal.clear().map_err(Error::Display)?;
        tracing::info!("Display restored after session");

        self.finish_session(&host, outcome);
        Ok(())
    }

    fn begin_session(&mut self, host: &Host) {
        tracing::info!("Connecting to {} ({})", host.name, host.id());
        self.dispatch(Action::SessionStarted(host.clone()));
        self.connecting = Some(host.id());
    }

    fn finish_session(&mut self, host: &Host, outcome: Result<()>) {
        self.connecting = None;
        match outcome {
            Ok(()) => {
                self.failed = None;
                self.toast(self.texts.toast_returned, Severity::Success);
            }
            Err(e) => {
                tracing::error!("Session failed: {}", e);
                self.failed = Some(host.id());
                self.toast(Texts::fill(self.texts.toast_launch_failed, &host.name), Severity::Error);
            }
        }
        self.dispatch(Action::SessionEnded);
    }
}
