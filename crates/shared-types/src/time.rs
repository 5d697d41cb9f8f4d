//! Time source abstraction shared by subsystems that stamp records.

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// Clock abstraction so services can be tested against a fixed time.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Default time source using system time.
#[derive(Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Fixed time source for deterministic tests.
pub struct FixedTimeSource(pub Timestamp);

impl FixedTimeSource {
    pub fn new(now: Timestamp) -> Self {
        Self(now)
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.0
    }
}
