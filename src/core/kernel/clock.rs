use std::fmt;

/// Source of local wall-clock time in epoch milliseconds
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Clock backed by the operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Correction added to local time so signed timestamps match the server clock.
///
/// Computed once when a client is built and never updated afterwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockOffset(i64);

impl ClockOffset {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// `server - local`, saturating at the `i64` bounds
    pub const fn between(server_millis: i64, local_millis: i64) -> Self {
        Self(server_millis.saturating_sub(local_millis))
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Shift a local timestamp onto the server clock
    pub const fn apply(self, local_millis: i64) -> i64 {
        local_millis.saturating_add(self.0)
    }
}

impl fmt::Display for ClockOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}ms", self.0)
    }
}
