//! # Time Utilities
//!
//! Clock access and calendar-day arithmetic using chrono.
//!
//! Calendar days are always evaluated in an explicit [`FixedOffset`] so the
//! "same day" rules never depend on the host machine's timezone.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Build a [`FixedOffset`] east of UTC from a number of minutes.
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, Error> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(Error::InvalidOffset(minutes))
}

/// Calendar date of `instant` as seen in `offset`.
pub fn local_day(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}

/// Half-open UTC range `[start, end)` covering the calendar day of `date`
/// in `date`'s own offset.
pub fn day_bounds(date: DateTime<FixedOffset>) -> (DateTime<Utc>, DateTime<Utc>) {
    let local_midnight = date.date_naive().and_time(NaiveTime::MIN);
    let offset = Duration::seconds(i64::from(date.offset().local_minus_utc()));
    let start = (local_midnight - offset).and_utc();
    (start, start + Duration::days(1))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    InvalidOffset(i32),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_local_day_respects_offset() {
        // 02:00 UTC is still the previous evening at UTC-3.
        let instant = Utc.with_ymd_and_hms(2022, 1, 21, 2, 0, 0).unwrap();
        let brt = offset_from_minutes(-180).unwrap();

        assert_eq!(local_day(instant, brt), NaiveDate::from_ymd_opt(2022, 1, 20).unwrap());
        assert_eq!(
            local_day(instant, offset_from_minutes(0).unwrap()),
            NaiveDate::from_ymd_opt(2022, 1, 21).unwrap()
        );
    }

    #[test]
    fn test_day_bounds_in_offset() {
        let brt = offset_from_minutes(-180).unwrap();
        let date = brt.with_ymd_and_hms(2022, 1, 20, 8, 0, 0).unwrap();

        let (start, end) = day_bounds(date);

        assert_eq!(start, Utc.with_ymd_and_hms(2022, 1, 20, 3, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2022, 1, 21, 3, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_offset() {
        assert!(offset_from_minutes(24 * 60).is_err());
        assert!(offset_from_minutes(i32::MAX).is_err());
    }
}
