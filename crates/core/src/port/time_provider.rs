// Time Provider Port (for testability)

use chrono::{DateTime, SecondsFormat, Utc};

/// Time provider interface (allows mocking in tests)
pub trait TimeProvider: Send + Sync {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;

    /// Current time as an ISO-8601 UTC string with millisecond precision
    fn now_iso8601(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// System time provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed time provider (deterministic tests)
pub struct FixedTimeProvider(pub DateTime<Utc>);

impl TimeProvider for FixedTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
