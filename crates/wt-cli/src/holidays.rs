//! Built-in public-holiday lookup.
//!
//! Only German holidays are built in; any other country code yields an empty
//! predicate so the rest of the accounting keeps working.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Public-holiday predicate for a configured country/subdivision.
#[derive(Debug, Clone)]
pub struct RegionalHolidays {
    country: Country,
    subdivision: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Country {
    Germany,
    Unknown,
}

impl RegionalHolidays {
    /// Builds the predicate for an ISO country code and optional subdivision.
    #[must_use]
    pub fn new(country: &str, subdivision: Option<&str>) -> Self {
        let country = match country.to_uppercase().as_str() {
            "DE" => Country::Germany,
            other => {
                tracing::warn!(country = other, "no built-in holidays for this country");
                Country::Unknown
            }
        };
        Self {
            country,
            subdivision: subdivision.map(str::to_uppercase),
        }
    }

    /// Whether `date` is a public holiday in the configured region.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.country {
            Country::Germany => self.is_german_holiday(date),
            Country::Unknown => false,
        }
    }

    fn is_german_holiday(&self, date: NaiveDate) -> bool {
        let month_day = (date.month(), date.day());

        // Nationwide fixed-date holidays.
        if [(1, 1), (5, 1), (10, 3), (12, 25), (12, 26)].contains(&month_day) {
            return true;
        }

        // Fixed-date holidays of individual states.
        if month_day == (1, 6) && self.in_states(&["BW", "BY", "ST"]) {
            return true;
        }
        if month_day == (8, 15) && self.in_states(&["BY", "SL"]) {
            return true;
        }
        if month_day == (10, 31)
            && self.in_states(&["BB", "HB", "HH", "MV", "NI", "SH", "SN", "ST", "TH"])
        {
            return true;
        }
        if month_day == (11, 1) && self.in_states(&["BW", "BY", "NW", "RP", "SL"]) {
            return true;
        }

        // Easter-relative holidays: Good Friday, Easter Monday, Ascension,
        // Whit Monday nationwide; Corpus Christi in some states.
        let Some(easter) = easter_sunday(date.year()) else {
            return false;
        };
        let mut offsets = vec![-2, 1, 39, 50];
        if self.in_states(&["BW", "BY", "HE", "NW", "RP", "SL"]) {
            offsets.push(60);
        }
        if offsets
            .into_iter()
            .any(|offset| easter + Duration::days(offset) == date)
        {
            return true;
        }

        self.in_states(&["SN"]) && repentance_day(date.year()) == Some(date)
    }

    fn in_states(&self, codes: &[&str]) -> bool {
        self.subdivision
            .as_deref()
            .is_some_and(|state| codes.contains(&state))
    }
}

/// Easter Sunday by the anonymous Gregorian computus.
fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = u32::try_from((h + l - 7 * m + 114) / 31).ok()?;
    let day = u32::try_from((h + l - 7 * m + 114) % 31 + 1).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Repentance Day: the Wednesday before November 23rd.
fn repentance_day(year: i32) -> Option<NaiveDate> {
    let mut day = NaiveDate::from_ymd_opt(year, 11, 22)?;
    while day.weekday() != Weekday::Wed {
        day = day.pred_opt()?;
    }
    Some(day)
}
