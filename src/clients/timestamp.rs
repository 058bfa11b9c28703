//! Request timestamps.
//!
//! Every attempt carries a `timestamp` field in Unix seconds. The platform
//! rejects replays, so the process never hands out the same value twice,
//! whichever client asks for it.
//!
//! Under a burst of more than one request per second the issued values run
//! ahead of the wall clock. Once the lead exceeds [`MAX_CLOCK_LEAD_SECS`] a
//! warning is logged on every issue; the platform rejects timestamps too far
//! in the future, so sustained bursts at that rate should be throttled by the
//! caller.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Lead over the wall clock, in seconds, above which issued timestamps are
/// reported with a warning.
pub const MAX_CLOCK_LEAD_SECS: i64 = 60;

/// Last timestamp issued anywhere in the process.
static LAST_ISSUED: AtomicI64 = AtomicI64::new(i64::MIN);

/// Handle to the process-wide source of strictly increasing Unix timestamps.
///
/// Each call to [`TimestampClock::next`] returns the current time in seconds,
/// or one more than the previous value issued in the process when the wall
/// clock has not advanced (or has gone backwards). All handles share the
/// same counter, so two clients built from the same configuration never sign
/// identical payloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimestampClock;

impl TimestampClock {
    /// Creates a handle to the shared clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the next timestamp.
    #[must_use]
    pub fn next(self) -> i64 {
        let now = Utc::now().timestamp();
        let issued = advance(&LAST_ISSUED, now);
        if exceeds_lead(issued, now) {
            tracing::warn!(
                "Request timestamp {issued} is {}s ahead of the wall clock",
                issued - now
            );
        }
        issued
    }
}

/// Stores and returns `max(now, last + 1)`.
fn advance(last: &AtomicI64, now: i64) -> i64 {
    let mut previous = last.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(previous.saturating_add(1));
        match last.compare_exchange_weak(previous, candidate, Ordering::AcqRel, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(actual) => previous = actual,
        }
    }
}

const fn exceeds_lead(issued: i64, now: i64) -> bool {
    issued.saturating_sub(now) > MAX_CLOCK_LEAD_SECS
}
