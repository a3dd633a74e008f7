//! Calendar filters for the `ym` and `ymd` parameters.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

/// A month or a single day on which events are held.
///
/// A `Time` without a day (or with day 0) selects the whole month. Values
/// whose year or month is 0 select nothing and are dropped from the query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Time {
    pub year: u32,
    pub month: u32,
    pub day: Option<u32>,
}

impl Time {
    /// The whole of `month` in `year`.
    pub fn month(year: u32, month: u32) -> Self {
        Self {
            year,
            month,
            day: None,
        }
    }

    /// A single day.
    pub fn day(year: u32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day: Some(day),
        }
    }

    /// Whether this value contributes to a query at all.
    pub fn is_set(&self) -> bool {
        self.year > 0 && self.month > 0
    }

    pub fn is_day_precision(&self) -> bool {
        matches!(self.day, Some(day) if day > 0)
    }

    /// Formats as `YYYYMMDD` or `YYYYMM`, or `None` when unset.
    pub fn to_param(&self) -> Option<String> {
        if !self.is_set() {
            return None;
        }
        Some(match self.day {
            Some(day) if day > 0 => format!("{:04}{:02}{:02}", self.year, self.month, day),
            _ => format!("{:04}{:02}", self.year, self.month),
        })
    }
}

impl From<NaiveDate> for Time {
    fn from(date: NaiveDate) -> Self {
        // Dates before year 1 have no wire form; year 0 drops the filter.
        Time::day(u32::try_from(date.year()).unwrap_or(0), date.month(), date.day())
    }
}

impl FromStr for Time {
    type Err = String;

    /// Accepts `YYYY-MM`, `YYYY-MM-DD`, `YYYYMM` and `YYYYMMDD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = if s.contains('-') {
            s.split('-').collect()
        } else if s.len() == 6 || s.len() == 8 {
            if !s.is_char_boundary(4) || !s.is_char_boundary(6) {
                return Err(format!("invalid date '{}'", s));
            }
            let mut parts = vec![&s[..4], &s[4..6]];
            if s.len() == 8 {
                parts.push(&s[6..]);
            }
            parts
        } else {
            return Err(format!(
                "invalid date '{}', expected YYYY-MM or YYYY-MM-DD",
                s
            ));
        };

        let number = |part: &str| -> Result<u32, String> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("invalid date '{}'", s));
            }
            part.parse::<u32>()
                .map_err(|e| format!("invalid date '{}': {}", s, e))
        };

        match parts.as_slice() {
            &[year, month] => {
                let (year, month) = (number(year)?, number(month)?);
                if year == 0 || !(1..=12).contains(&month) {
                    return Err(format!("invalid month '{}'", s));
                }
                Ok(Time::month(year, month))
            }
            &[year, month, day] => {
                let (year, month, day) = (number(year)?, number(month)?, number(day)?);
                let valid = i32::try_from(year)
                    .ok()
                    .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
                    .is_some();
                if year == 0 || !valid {
                    return Err(format!("invalid day '{}'", s));
                }
                Ok(Time::day(year, month, day))
            }
            _ => Err(format!(
                "invalid date '{}', expected YYYY-MM or YYYY-MM-DD",
                s
            )),
        }
    }
}

/// Splits `times` into the joined `ymd` (day) and `ym` (month) values,
/// preserving input order. Unset times are skipped.
pub(crate) fn encode_times(times: &[Time]) -> (Option<String>, Option<String>) {
    let mut ymd = Vec::new();
    let mut ym = Vec::new();
    for time in times {
        if let Some(param) = time.to_param() {
            if time.is_day_precision() {
                ymd.push(param);
            } else {
                ym.push(param);
            }
        }
    }
    let join = |values: Vec<String>| (!values.is_empty()).then(|| values.join(","));
    (join(ymd), join(ym))
}
