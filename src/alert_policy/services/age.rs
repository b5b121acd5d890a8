use chrono::{DateTime, Utc};
use thiserror::Error;

/// Raised when an alert's open timestamp lies after the evaluation instant.
///
/// Clock skew or malformed platform data can produce such timestamps; the
/// caller records the alert as a data-quality anomaly instead of silently
/// treating it as zero days old.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("opened_at {opened_at} is later than the evaluation instant {now}")]
pub struct FutureTimestamp {
    pub opened_at: DateTime<Utc>,
    pub now: DateTime<Utc>,
}

/// Whole days elapsed between `opened_at` and `now`, truncated.
///
/// An alert opened 23 hours ago has age 0; one opened 25 hours ago has age 1.
/// Truncation is a fixed contract, not an implementation detail: it decides
/// pass/fail near threshold boundaries. `now` is always supplied explicitly
/// so evaluation is deterministic and testable.
pub fn age_in_days(
    opened_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<i64, FutureTimestamp> {
    if opened_at > now {
        return Err(FutureTimestamp { opened_at, now });
    }
    Ok((now - opened_at).num_days())
}
