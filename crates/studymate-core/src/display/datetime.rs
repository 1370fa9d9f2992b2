//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A `Timestamp` shown in a given timezone.
///
/// The display format follows the pattern `YYYY-MM-DD HH:MM:SS TZ` with a
/// 24-hour clock and the zone abbreviation (e.g. `CET`, `EDT`).
pub struct LocalDateTime<'a>(pub &'a Timestamp, pub &'a TimeZone);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(self.1.clone())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_date_time_uses_zone() {
        let at: Timestamp = "2024-07-01T12:30:00Z".parse().unwrap();
        let paris = TimeZone::get("Europe/Paris").unwrap();

        assert_eq!(
            LocalDateTime(&at, &TimeZone::UTC).to_string(),
            "2024-07-01 12:30:00 UTC"
        );
        assert_eq!(
            LocalDateTime(&at, &paris).to_string(),
            "2024-07-01 14:30:00 CEST"
        );
    }
}
