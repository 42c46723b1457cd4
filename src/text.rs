//! Display-width aware string helpers.
//!
//! Every drawing routine measures text in terminal cells, not chars:
//! ASCII takes one cell, CJK ideographs and most emoji take two.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ELLIPSIS: &str = "…";

/// Cells occupied by a single char. Control chars count as zero.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` so it fits in `max_width` cells, appending [`ELLIPSIS`]
/// inside the budget when anything was dropped. A wide char that would
/// straddle the cut is dropped whole.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let ellipsis_width = display_width(ELLIPSIS);
    if max_width <= ellipsis_width {
        return ELLIPSIS.to_string();
    }

    let budget = max_width - ellipsis_width;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = char_width(ch);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

/// Break a `a | b | c` style hint line into lines no wider than
/// `max_width`, splitting only at the ` | ` separators. A single segment
/// that is still too wide gets truncated.
pub fn split_to_fit_width(text: &str, max_width: usize) -> Vec<String> {
    const SEP: &str = " | ";

    if display_width(text) <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for part in text.split(SEP) {
        let candidate = if current.is_empty() {
            part.to_string()
        } else {
            format!("{current}{SEP}{part}")
        };

        if display_width(&candidate) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if display_width(part) > max_width {
            lines.push(truncate_to_width(part, max_width));
        } else {
            current = part.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// X offset that centres `text` inside `width` cells.
pub fn centered_offset(text: &str, width: usize) -> usize {
    width.saturating_sub(display_width(text)) / 2
}
