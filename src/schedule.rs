//! Calendar arithmetic for the population job and its weekly trigger.

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveTime, Utc};

use crate::config::{WEEKLY_RUN_TIME, WEEKLY_RUN_WEEKDAY};
use crate::error::AppError;

/// The calendar days one run populates: `count` consecutive days starting
/// the day after `today`. Month and year boundaries roll over per the civil
/// calendar.
pub fn population_dates(today: NaiveDate, count: usize) -> Result<Vec<NaiveDate>, AppError> {
    let base = today
        .checked_add_days(Days::new(1))
        .ok_or(AppError::DateOverflow)?;

    (0..count as u64)
        .map(|offset| {
            base.checked_add_days(Days::new(offset))
                .ok_or(AppError::DateOverflow)
        })
        .collect()
}

/// Midnight UTC of a calendar day, the timestamp stored on a record.
pub fn day_timestamp(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// The first weekly fire instant strictly after `after`.
///
/// The cadence is fixed at Sunday 00:00 UTC ([`WEEKLY_RUN_WEEKDAY`] /
/// [`WEEKLY_RUN_TIME`]). An `after` that lands exactly on a fire instant
/// resolves to the following week.
pub fn next_weekly_run(after: DateTime<Utc>) -> DateTime<Utc> {
    let days_ahead = (WEEKLY_RUN_WEEKDAY.num_days_from_monday() + 7
        - after.weekday().num_days_from_monday())
        % 7;

    let candidate = (after.date_naive() + Days::new(u64::from(days_ahead)))
        .and_time(WEEKLY_RUN_TIME)
        .and_utc();

    if candidate > after {
        candidate
    } else {
        candidate + Duration::days(7)
    }
}
