//! Month arithmetic relative to a single reference date.
//!
//! Every function looks only at the year and month of its argument; the day is irrelevant.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use fintrack_domain::Frequency;

/// Number of days in the month containing `date` (28 to 31).
pub fn days_in_month(date: NaiveDate) -> u32 {
    match date.month() {
        2 if is_leap_year(date.year()) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// First and last calendar day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date - Duration::days(i64::from(date.day0()));
    let last = first + Duration::days(i64::from(days_in_month(date)) - 1);
    (first, last)
}

/// Monday-through-Friday days in the month, counted by walking every date.
pub fn count_weekdays(date: NaiveDate) -> u32 {
    let (first, last) = month_bounds(date);
    first
        .iter_days()
        .take_while(|day| *day <= last)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32
}

/// Saturdays in the month.
///
/// Walks the Sunday-started weeks that overlap the month and counts the ones whose closing
/// Saturday lies inside it, so a week straddling a boundary belongs to exactly one month.
pub fn count_saturdays(date: NaiveDate) -> u32 {
    let (first, last) = month_bounds(date);
    let mut week_start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));
    let mut count = 0;
    while week_start <= last {
        let saturday = week_start + Duration::days(6);
        if saturday >= first && saturday <= last {
            count += 1;
        }
        week_start = week_start + Duration::days(7);
    }
    count
}

/// The per-month counts the projector needs, computed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCalendar {
    pub days: u32,
    pub weekdays: u32,
    pub saturdays: u32,
}

impl MonthCalendar {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            days: days_in_month(date),
            weekdays: count_weekdays(date),
            saturdays: count_saturdays(date),
        }
    }

    /// Biweekly charges land on every other Saturday, rounding up.
    pub fn biweekly_periods(&self) -> u32 {
        (self.saturdays + 1) / 2
    }

    /// How many times an expense of `frequency` is charged this month.
    /// Unrecognised frequencies are charged once, like monthly ones.
    pub fn occurrences(&self, frequency: &Frequency) -> u32 {
        match frequency {
            Frequency::Daily => self.days,
            Frequency::Weekdays => self.weekdays,
            Frequency::Weekly => self.saturdays,
            Frequency::Biweekly => self.biweekly_periods(),
            Frequency::Monthly | Frequency::Unknown(_) => 1,
        }
    }
}
