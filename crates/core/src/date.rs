//! Full calendar dates with the year expressed in era form.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::era_year::EraYear;
use crate::error::WarekiError;

/// A calendar date whose year slot holds an [`EraYear`] instead of a plain
/// integer, e.g. 平成32年3月15日.
///
/// A dedicated record, not a wrapper around a native date type; month and
/// day are ordinary 1-based components validated against the real Gregorian
/// calendar at construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WarekiDate {
    era_year: EraYear,
    month: u8,
    day: u8,
}

impl WarekiDate {
    /// Composes an era-year with month and day.
    ///
    /// Month and day are validated against the Gregorian calendar for the
    /// resolved year (leap rules included). No era-boundary validation is
    /// applied: a date may name an era-year even if the concrete day falls
    /// before the era's literal start within that year, matching the
    /// December-31 resolution policy of [`EraYear::from_ad`].
    ///
    /// # Errors
    ///
    /// Returns [`WarekiError::InvalidDate`] if `month`/`day` is not a real
    /// calendar day in the resolved year.
    pub fn new(era_year: EraYear, month: u8, day: u8) -> Result<Self, WarekiError> {
        let year = era_year.to_ad();
        if NaiveDate::from_ymd_opt(year, month as u32, day as u32).is_none() {
            return Err(WarekiError::InvalidDate { year, month, day });
        }
        Ok(Self {
            era_year,
            month,
            day,
        })
    }

    /// Converts a plain Gregorian date to era form.
    ///
    /// The year component goes through [`EraYear::from_ad`]; month and day
    /// pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`WarekiError::NoEraForYear`] for dates before the earliest
    /// tabulated era.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, WarekiError> {
        Ok(Self {
            era_year: EraYear::from_ad(date.year())?,
            month: date.month() as u8,
            day: date.day() as u8,
        })
    }

    /// Converts back to a plain Gregorian date.
    pub fn to_gregorian(self) -> NaiveDate {
        // Safety: month/day were validated against the resolved year by
        // the constructors.
        NaiveDate::from_ymd_opt(self.era_year.to_ad(), self.month as u32, self.day as u32)
            .expect("WarekiDate always holds a valid calendar day")
    }

    /// Returns the year component in era form.
    pub fn era_year(self) -> EraYear {
        self.era_year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for WarekiDate {
    /// Renders as `平成32年3月15日`. The alternate form (`{:#}`) renders
    /// year 1 as `元年`, like [`EraYear`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:#}{}月{}日", self.era_year, self.month, self.day)
        } else {
            write!(f, "{}{}月{}日", self.era_year, self.month, self.day)
        }
    }
}

impl fmt::Debug for WarekiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WarekiDate({:?}, {}, {})",
            self.era_year, self.month, self.day
        )
    }
}
