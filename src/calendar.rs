//! Bookings calendar
//!
//! Month grids for the admin calendar and grouping of bookings by day.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::models::Booking;

/// Weeks shown per month; six rows fit every month whatever weekday it starts on.
pub const WEEKS_PER_GRID: usize = 6;

/// Bookings listed inside a day cell before collapsing into "+N more".
pub const BOOKINGS_PER_CELL: usize = 2;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// First day of a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(value: &str) -> Option<Self> {
        let (year, month) = value.trim().split_once('-')?;
        if year.len() != 4 || month.len() != 2 {
            return None;
        }
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first.pred_opt().unwrap_or(self.first)
    }

    pub fn previous(&self) -> Self {
        Self {
            first: self.first.checked_sub_months(Months::new(1)).unwrap_or(self.first),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first: self.first.checked_add_months(Months::new(1)).unwrap_or(self.first),
        }
    }

    /// `YYYY-MM`, as used in the calendar's query string.
    pub fn key(&self) -> String {
        self.first.format("%Y-%m").to_string()
    }

    /// e.g. `October 2026`.
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

/// One day in the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
}

/// Six Sunday-first weeks covering `cursor`'s month, padded with the
/// neighbouring months' days.
pub fn month_grid(cursor: MonthCursor) -> Vec<Vec<DayCell>> {
    let first = cursor.first_day();
    let lead = u64::from(first.weekday().num_days_from_sunday());
    let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);

    start
        .iter_days()
        .take(WEEKS_PER_GRID * 7)
        .map(|date| DayCell {
            date,
            in_month: date.month() == first.month() && date.year() == first.year(),
        })
        .collect::<Vec<_>>()
        .chunks(7)
        .map(<[DayCell]>::to_vec)
        .collect()
}

/// Bookings keyed by date; each day keeps the input order.
pub fn group_by_date(bookings: Vec<Booking>) -> BTreeMap<NaiveDate, Vec<Booking>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Booking>> = BTreeMap::new();
    for booking in bookings {
        by_date.entry(booking.date).or_default().push(booking);
    }
    by_date
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Utc, Weekday};
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(name: &str, on: NaiveDate) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: "9876543210".to_string(),
            email: None,
            date: on,
            address: "Madhapur".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_month_grid_is_six_sunday_first_weeks() {
        let grid = month_grid(MonthCursor::new(2026, 10).unwrap());
        assert_eq!(grid.len(), WEEKS_PER_GRID);
        for week in &grid {
            assert_eq!(week.len(), 7);
            assert_eq!(week[0].date.weekday(), Weekday::Sun);
        }
        // 1 October 2026 is a Thursday
        assert_eq!(grid[0][0].date, date(2026, 9, 27));
        assert!(!grid[0][0].in_month);
        assert_eq!(grid[0][4].date, date(2026, 10, 1));
        assert!(grid[0][4].in_month);
    }

    #[test]
    fn test_month_grid_starting_on_sunday() {
        // 1 February 2026 is a Sunday
        let grid = month_grid(MonthCursor::new(2026, 2).unwrap());
        assert_eq!(grid[0][0].date, date(2026, 2, 1));
        let in_month = grid.iter().flatten().filter(|c| c.in_month).count();
        assert_eq!(in_month, 28);
        assert_eq!(grid[5][6].date, date(2026, 3, 14));
    }

    #[test]
    fn test_month_bounds_and_leap_year() {
        let feb = MonthCursor::new(2028, 2).unwrap();
        assert_eq!(feb.first_day(), date(2028, 2, 1));
        assert_eq!(feb.last_day(), date(2028, 2, 29));

        let dec = MonthCursor::new(2026, 12).unwrap();
        assert_eq!(dec.last_day(), date(2026, 12, 31));
    }

    #[test]
    fn test_navigation_wraps_years() {
        let jan = MonthCursor::new(2027, 1).unwrap();
        assert_eq!(jan.previous(), MonthCursor::new(2026, 12).unwrap());
        assert_eq!(jan.previous().next(), jan);
        assert_eq!(MonthCursor::new(2026, 12).unwrap().next(), jan);
    }

    #[test]
    fn test_parse_and_format() {
        let cursor = MonthCursor::parse("2026-10").unwrap();
        assert_eq!(cursor.key(), "2026-10");
        assert_eq!(cursor.title(), "October 2026");
        assert!(MonthCursor::parse("2026-13").is_none());
        assert!(MonthCursor::parse("2026-1").is_none());
        assert!(MonthCursor::parse("october").is_none());
        assert_eq!(MonthCursor::containing(date(2026, 10, 16)), cursor);
    }

    #[test]
    fn test_group_by_date_keeps_order_within_day() {
        let day = date(2026, 10, 20);
        let grouped = group_by_date(vec![
            booking("Asha", day),
            booking("Vikram", date(2026, 10, 3)),
            booking("Meera", day),
        ]);
        assert_eq!(grouped.len(), 2);
        let names: Vec<_> = grouped[&day].iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Meera"]);
        assert_eq!(grouped.keys().next(), Some(&date(2026, 10, 3)));
    }
}
