use serde::Serialize;
use ts_rs::TS;

/// Whether a new attempt is allowed right now, and if not, for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AttemptWindow {
    pub can_attempt: bool,
    pub time_remaining_seconds: u64,
}

impl AttemptWindow {
    pub fn open() -> Self {
        Self {
            can_attempt: true,
            time_remaining_seconds: 0,
        }
    }

    pub fn blocked(time_remaining_seconds: u64) -> Self {
        Self {
            can_attempt: false,
            time_remaining_seconds,
        }
    }

    /// Combine two views of the same window; blocked wins, longest wait wins.
    pub fn most_restrictive(self, other: AttemptWindow) -> AttemptWindow {
        match (self.can_attempt, other.can_attempt) {
            (true, true) => AttemptWindow::open(),
            (false, true) => self,
            (true, false) => other,
            (false, false) => AttemptWindow::blocked(
                self.time_remaining_seconds
                    .max(other.time_remaining_seconds),
            ),
        }
    }
}
