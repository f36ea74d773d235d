//! Date values for the `Date` header and the `<cs371date>` tag.
//!
//! Both use the same fixed, locale-independent format (RFC 7231 IMF-fixdate,
//! always in GMT), e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.

use chrono::{DateTime, Utc};

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Source of "now".
///
/// Each call is an independent read; callers that need the time twice ask twice.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn format_date(when: DateTime<Utc>) -> String {
    when.format(HTTP_DATE_FORMAT).to_string()
}

/// Reads the clock and formats the result.
pub fn current_date(clock: &dyn Clock) -> String {
    format_date(clock.now())
}
