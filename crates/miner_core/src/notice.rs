use std::time::{Duration, Instant};

pub const RESTORED_NOTICE_MESSAGE: &str =
    "Restored the search from history and reloaded the results.";

/// How long a transient notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// A message that disappears on its own after a fixed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientNotice {
    message: String,
    expires_at: Instant,
}

impl TransientNotice {
    pub fn new(message: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: now + ttl,
        }
    }

    pub fn restored(now: Instant) -> Self {
        Self::new(RESTORED_NOTICE_MESSAGE, now, NOTICE_TTL)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    pub fn is_active(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_expires_exactly_at_deadline() {
        let now = Instant::now();
        let notice = TransientNotice::new("hi", now, Duration::from_secs(2));
        assert!(notice.is_active(now));
        assert!(notice.is_active(now + Duration::from_millis(1999)));
        assert!(!notice.is_active(now + Duration::from_secs(2)));
    }
}
