use std::time::Duration;
use std::time::Instant;

use super::Notice;

#[test]
fn it_expires_after_duration() {
    let now = Instant::now();
    let notice = Notice::new("The agent is unavailable", now, Duration::from_millis(500));

    assert_eq!(notice.text, "The agent is unavailable");
    assert!(!notice.is_expired(now));
    assert!(!notice.is_expired(now + Duration::from_millis(499)));
    assert!(notice.is_expired(now + Duration::from_millis(500)));
}
