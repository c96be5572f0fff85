//! Birth date parsing for seniority comparisons.
//!
//! Family records carry dates as free text. Three shapes are recognised:
//!
//! | Input          | Meaning                     |
//! |----------------|-----------------------------|
//! | `1950`         | 1 January of that year      |
//! | `05/03/1950`   | day / month / year          |
//! | `1950-03-05`   | ISO date, optional `T...`   |
//!
//! Anything else is treated as unknown rather than an error.

use time::{Date, Month, macros::format_description};

/// A parsed calendar date, ordered chronologically.
///
/// An earlier `BirthDate` compares as smaller, so the elder of two people has
/// the smaller birth date.
///
/// # Examples
///
/// ```
/// # use kinfolk_core::date::BirthDate;
/// let elder = BirthDate::parse("1950").unwrap();
/// let younger = BirthDate::parse("02/01/1950").unwrap();
/// assert!(elder < younger);
/// assert!(BirthDate::parse("mùa xuân").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(Date);

impl BirthDate {
    /// Parses a date string, returning `None` when the shape is not recognised
    /// or the date does not exist.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();

        if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
            let year: i32 = raw.parse().ok()?;
            return Date::from_calendar_date(year, Month::January, 1)
                .ok()
                .map(Self);
        }

        if raw.contains('/') {
            return Self::parse_day_month_year(raw);
        }

        let date_part = raw.split_once('T').map_or(raw, |(date, _)| date);
        Date::parse(date_part, format_description!("[year]-[month]-[day]"))
            .ok()
            .map(Self)
    }

    fn parse_day_month_year(raw: &str) -> Option<Self> {
        let mut parts = raw.split('/');
        let day: u8 = parts.next()?.trim().parse().ok()?;
        let month: u8 = parts.next()?.trim().parse().ok()?;
        let year: i32 = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() {
            return None;
        }

        let month = Month::try_from(month).ok()?;
        Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// Returns the calendar year.
    pub fn year(self) -> i32 {
        self.0.year()
    }
}
