#[cfg(test)]
#[path = "notice_test.rs"]
mod tests;

use std::time::Duration;
use std::time::Instant;

/// A transient error shown under the conversation until it expires.
#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    expires_at: Instant,
}

impl Notice {
    pub fn new(text: &str, now: Instant, duration: Duration) -> Notice {
        return Notice {
            text: text.to_string(),
            expires_at: now + duration,
        };
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        return now >= self.expires_at;
    }
}
