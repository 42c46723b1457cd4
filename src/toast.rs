//! Transient notifications shown over the menu.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const MAX_TOASTS: usize = 3;

/// Fraction of the lifetime after which a toast is drawn dimmed.
pub const FADE_AFTER: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created: Instant,
    pub duration: Duration,
    pub progress: f32,
}

impl Toast {
    pub fn is_fading(&self) -> bool {
        self.progress >= FADE_AFTER
    }
}

/// Bounded queue, oldest at the front.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity, duration: Duration) {
        self.push_at(message, severity, duration, Instant::now());
    }

    pub fn push_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
        now: Instant,
    ) {
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.next_id += 1;
        let message = message.into();
        tracing::debug!("toast #{} ({:?}): {}", self.next_id, severity, message);
        self.toasts.push_back(Toast {
            id: self.next_id,
            message,
            severity,
            created: now,
            duration,
            progress: 0.0,
        });
    }

    /// Recompute progress and drop expired toasts. Returns whether the
    /// visible set changed, meaning a redraw is owed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain_mut(|toast| {
            let elapsed = now.saturating_duration_since(toast.created);
            if elapsed >= toast.duration {
                return false;
            }
            toast.progress = elapsed.as_secs_f32() / toast.duration.as_secs_f32();
            true
        });
        self.toasts.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Newest first, as drawn.
    pub fn newest_first(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_fourth_push_evicts_oldest() {
        let now = Instant::now();
        let mut toasts = ToastManager::new();
        for msg in ["one", "two", "three"] {
            toasts.push_at(msg, Severity::Info, SECOND, now);
        }
        assert_eq!(toasts.len(), 3);

        toasts.push_at("four", Severity::Success, SECOND, now);
        assert_eq!(toasts.len(), MAX_TOASTS);
        let messages: Vec<_> = toasts.newest_first().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["four", "three", "two"]);
    }

    #[test]
    fn test_tick_removes_expired() {
        let now = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.push_at("short", Severity::Info, SECOND, now);
        toasts.push_at("long", Severity::Warning, 3 * SECOND, now);

        assert!(!toasts.tick(now + Duration::from_millis(500)));
        assert_eq!(toasts.len(), 2);

        // Exactly at the duration counts as expired.
        assert!(toasts.tick(now + SECOND));
        let left: Vec<_> = toasts.newest_first().map(|t| t.message.as_str()).collect();
        assert_eq!(left, vec!["long"]);
    }

    #[test]
    fn test_progress_and_fade() {
        let now = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.push_at("saved", Severity::Success, 2 * SECOND, now);

        toasts.tick(now + SECOND);
        let toast = toasts.newest_first().next().unwrap();
        assert!((toast.progress - 0.5).abs() < 0.01);
        assert!(!toast.is_fading());

        toasts.tick(now + Duration::from_millis(1700));
        let toast = toasts.newest_first().next().unwrap();
        assert!(toast.progress < 1.0);
        assert!(toast.is_fading());
    }

    #[test]
    fn test_ids_are_unique() {
        let now = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.push_at("a", Severity::Info, SECOND, now);
        toasts.push_at("b", Severity::Info, SECOND, now);
        let ids: Vec<_> = toasts.newest_first().map(|t| t.id).collect();
        assert_ne!(ids[0], ids[1]);
    }
}
