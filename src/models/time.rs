use serde::*;

/// Julian day representation.
/// JD 2451545.0 = 2000-01-01 12:00:00 UT (the J2000.0 epoch)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(f64);

/// Julian day of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;

impl JulianDay {
    /// Create a new JD value.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Days elapsed since the J2000.0 epoch (negative before it).
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000
    }

    /// Convert a Gregorian calendar date with fractional hours into a Julian
    /// day. `hours` carries the time of day, e.g. 12:30 is `12.5`.
    ///
    /// Valid for dates after the Gregorian reform; proleptic use is the
    /// caller's problem.
    pub fn from_gregorian(year: i32, month: u32, day: u32, hours: f64) -> Self {
        let (y, m) = if month <= 2 {
            (year - 1, month + 12)
        } else {
            (year, month)
        };

        let a = (y as f64 / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        let jd = (365.25 * (y as f64 + 4716.0)).floor()
            + (30.6001 * (m as f64 + 1.0)).floor()
            + day as f64
            + b
            - 1524.5
            + hours / 24.0;

        Self(jd)
    }

    /// Convert a validated calendar date and wall-clock time into a Julian
    /// day. Seconds are ignored; the fractional day is `hour + minute/60`.
    pub fn from_date_time(date: chrono::NaiveDate, time: chrono::NaiveTime) -> Self {
        use chrono::{Datelike, Timelike};
        let hours = time.hour() as f64 + time.minute() as f64 / 60.0;
        Self::from_gregorian(date.year(), date.month(), date.day(), hours)
    }
}

impl From<f64> for JulianDay {
    fn from(v: f64) -> Self {
        JulianDay::new(v)
    }
}
