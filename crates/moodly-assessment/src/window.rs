use jiff::{SignedDuration, Timestamp};

use moodly_core::models::window::AttemptWindow;

/// Minimum time between two submissions.
pub const ATTEMPT_COOLDOWN: SignedDuration = SignedDuration::from_hours(24);

/// Decide whether a new attempt is allowed.
///
/// `last_submitted_at` must be the store-recorded timestamp. A timestamp
/// ahead of `now` counts as just submitted. Remaining time is rounded up
/// to whole seconds so a blocked window never reports zero.
pub fn check_window(last_submitted_at: Option<Timestamp>, now: Timestamp) -> AttemptWindow {
    let Some(last) = last_submitted_at else {
        return AttemptWindow::open();
    };

    let elapsed = now.duration_since(last).max(SignedDuration::ZERO);
    if elapsed >= ATTEMPT_COOLDOWN {
        return AttemptWindow::open();
    }

    let remaining = ATTEMPT_COOLDOWN - elapsed;
    let mut seconds = remaining.as_secs();
    if remaining.subsec_nanos() > 0 {
        seconds += 1;
    }
    AttemptWindow::blocked(seconds.max(0) as u64)
}

/// "Hh Mm", as shown on the cooldown screen.
pub fn format_remaining(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{hours}h {minutes}m")
}
