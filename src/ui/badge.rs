use ratatui::style::Style;

use crate::models::{Host, HostStatus};
use crate::theme::Theme;

pub const LOADING_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
pub const CONNECTING_FRAMES: [&str; 4] = ["◔", "◑", "◕", "●"];

pub const KEY_ICON: &str = "🔑";
pub const PASSWORD_ICON: &str = "🔐";
pub const FAVORITE_ICON: &str = "⭐";

/// Tags that switch a host's badge.
const MAINTENANCE_TAG: &str = "maintenance";
const WARNING_TAGS: [&str; 2] = ["warning", "deprecated"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Unknown,
    Online,
    Offline,
    Loading,
    Error,
    Warning,
    Connecting,
    Maintenance,
}

impl From<HostStatus> for StatusKind {
    fn from(status: HostStatus) -> Self {
        match status {
            HostStatus::Unknown => StatusKind::Unknown,
            HostStatus::Online => StatusKind::Online,
            HostStatus::Offline => StatusKind::Offline,
        }
    }
}

impl StatusKind {
    /// Glyph for this badge; animated kinds step through their frames.
    pub fn icon(self, frame: usize) -> &'static str {
        match self {
            StatusKind::Unknown => "◌",
            StatusKind::Online => "●",
            StatusKind::Offline => "○",
            StatusKind::Loading => LOADING_FRAMES[frame % LOADING_FRAMES.len()],
            StatusKind::Error => "✗",
            StatusKind::Warning => "⚠",
            StatusKind::Connecting => CONNECTING_FRAMES[frame % CONNECTING_FRAMES.len()],
            StatusKind::Maintenance => "🔧",
        }
    }

    pub fn style(self, theme: &Theme) -> Style {
        match self {
            StatusKind::Unknown => theme.muted,
            StatusKind::Online => theme.success,
            StatusKind::Offline | StatusKind::Error => theme.error,
            StatusKind::Loading | StatusKind::Connecting => theme.info,
            StatusKind::Warning => theme.warning,
            StatusKind::Maintenance => theme.accent1,
        }
    }
}

/// Badge for a host at rest: session failures and tags outrank the
/// probed status.
pub fn resting_kind(host: &Host, failed: bool) -> StatusKind {
    if failed {
        StatusKind::Error
    } else if host.tags.contains(MAINTENANCE_TAG) {
        StatusKind::Maintenance
    } else if WARNING_TAGS.iter().any(|t| host.tags.contains(*t)) {
        StatusKind::Warning
    } else {
        host.status.into()
    }
}

pub fn auth_icon(host: &Host) -> &'static str {
    if host.uses_password() {
        PASSWORD_ICON
    } else {
        KEY_ICON
    }
}
