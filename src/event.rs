//! Terminal input and screen handoff for the controller loop.

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io;
use std::time::Duration;

/// How long to wait for input before a tick.
pub const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

impl AppEvent {
    /// Key releases and repeats are dropped; everything else maps 1:1.
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            CrosstermEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Block for up to `timeout` waiting for input. A timeout or an event we
/// don't care about becomes [`AppEvent::Tick`].
pub fn poll(timeout: Duration) -> io::Result<AppEvent> {
    if event::poll(timeout)? {
        Ok(AppEvent::from_crossterm(event::read()?).unwrap_or(AppEvent::Tick))
    } else {
        Ok(AppEvent::Tick)
    }
}

/// The controller's side of the terminal that ratatui does not own:
/// input, and the raw-mode screen handed over to an external session.
pub trait Console {
    fn next_event(&mut self, timeout: Duration) -> io::Result<AppEvent>;

    /// Leave raw mode and the alternate screen.
    fn release(&mut self) -> io::Result<()>;

    /// Re-enter raw mode and the alternate screen.
    fn reacquire(&mut self) -> io::Result<()>;
}

/// The process's own controlling terminal.
#[derive(Debug, Default)]
pub struct Tty;

impl Console for Tty {
    fn next_event(&mut self, timeout: Duration) -> io::Result<AppEvent> {
        poll(timeout)
    }

    fn release(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
    }

    fn reacquire(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_press_and_resize_pass_through() {
        let key = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE);
        assert_eq!(
            AppEvent::from_crossterm(CrosstermEvent::Key(key)),
            Some(AppEvent::Key(key))
        );
        assert_eq!(
            AppEvent::from_crossterm(CrosstermEvent::Resize(120, 40)),
            Some(AppEvent::Resize(120, 40))
        );
    }

    #[test]
    fn test_release_and_focus_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(AppEvent::from_crossterm(CrosstermEvent::Key(release)), None);
        assert_eq!(AppEvent::from_crossterm(CrosstermEvent::FocusGained), None);
    }
}
