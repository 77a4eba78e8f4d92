//! Duration math and display formatting for time sessions.

use crate::types::Timestamp;

/// Seconds per hour.
pub const SECS_PER_HOUR: i64 = 3600;

/// Seconds per minute.
pub const SECS_PER_MINUTE: i64 = 60;

/// Authoritative session duration: `end - start` rounded to whole seconds.
///
/// Sub-second remainders round half away from zero. A clock that moved
/// backwards yields 0, never a negative duration.
pub fn duration_seconds(start: Timestamp, end: Timestamp) -> i64 {
    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis + 500) / 1000
}

/// Format a second count as `HH:MM:SS` (hours are not capped at 24).
pub fn format_clock(total_seconds: i64) -> String {
    let total = total_seconds.max(0);
    let hours = total / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Compact label used by the session history: `1h 2m 3s`.
///
/// Zero-valued units are dropped, except that seconds are always shown when
/// nothing else would be. A missing duration renders as `N/A`.
pub fn format_compact(total_seconds: Option<i64>) -> String {
    let Some(total) = total_seconds else {
        return "N/A".to_string();
    };
    let total = total.max(0);
    let hours = total / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }
    parts.join(" ")
}

/// `Xh Ym` label used in the time chart legend.
pub fn format_hours_minutes(total_seconds: i64) -> String {
    let total = total_seconds.max(0);
    let hours = total / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    format!("{hours}h {minutes}m")
}
