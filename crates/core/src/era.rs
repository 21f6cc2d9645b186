//! The era table and the [`Era`] value type.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::WarekiError;

/// A calendar day as a plain `(year, month, day)` triple.
///
/// Era boundaries are const data, and `chrono::NaiveDate` cannot be built in
/// const context, so the table stores boundaries in this form. Ordering is
/// chronological (derived field order is year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ymd {
    year: i32,
    month: u8,
    day: u8,
}

impl Ymd {
    /// Creates a `Ymd` without validation. Only used for table constants,
    /// which are checked by the table-integrity tests.
    pub(crate) const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Converts to a [`NaiveDate`].
    pub fn to_date(self) -> NaiveDate {
        // Safety: every Ymd in the era table is a real calendar day,
        // pinned by the table-integrity tests.
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
            .expect("era table holds valid calendar days")
    }
}

impl From<NaiveDate> for Ymd {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

/// A Japanese era (gengo), identified by name.
///
/// Carries its start date (inclusive) and end date (inclusive, or `None`
/// for the open-ended current era) copied from the era table. Equality is
/// by name only.
#[derive(Clone, Copy)]
pub struct Era {
    name: &'static str,
    kanji: &'static str,
    started: Ymd,
    ended: Option<Ymd>,
}

/// Meiji era, 1868-01-01 to 1912-07-29.
pub const MEIJI: Era = Era {
    name: "Meiji",
    kanji: "明治",
    started: Ymd::new(1868, 1, 1),
    ended: Some(Ymd::new(1912, 7, 29)),
};

/// Taisho era, 1912-07-30 to 1926-12-24.
pub const TAISHO: Era = Era {
    name: "Taisho",
    kanji: "大正",
    started: Ymd::new(1912, 7, 30),
    ended: Some(Ymd::new(1926, 12, 24)),
};

/// Showa era, 1926-12-25 to 1989-01-07.
pub const SHOWA: Era = Era {
    name: "Showa",
    kanji: "昭和",
    started: Ymd::new(1926, 12, 25),
    ended: Some(Ymd::new(1989, 1, 7)),
};

/// Heisei era, started 1989-01-08, open-ended.
pub const HEISEI: Era = Era {
    name: "Heisei",
    kanji: "平成",
    started: Ymd::new(1989, 1, 8),
    ended: None,
};

/// All tabulated eras, oldest first. Eras before Meiji are not tabulated.
static ERA_TABLE: [Era; 4] = [MEIJI, TAISHO, SHOWA, HEISEI];

/// The table entry designated as the current era.
///
/// This is an explicit designation rather than "last row of the table", so
/// that appending future eras cannot silently change what `Era::current()`
/// returns. The table-integrity tests assert the designated era is the
/// single open-ended entry.
const CURRENT: Era = HEISEI;

impl Era {
    /// Looks up an era by name.
    ///
    /// Both the romanized name (`"Heisei"`, case-insensitive) and the kanji
    /// spelling (`"平成"`) match.
    ///
    /// # Errors
    ///
    /// Returns [`WarekiError::UnknownEra`] if no table entry matches.
    pub fn new(name: &str) -> Result<Self, WarekiError> {
        ERA_TABLE
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name) || e.kanji == name)
            .copied()
            .ok_or_else(|| WarekiError::UnknownEra {
                name: name.to_string(),
            })
    }

    /// Returns the era in force on the given date.
    ///
    /// The start date is inclusive: an era's literal first day resolves to
    /// that era, not its predecessor.
    ///
    /// # Errors
    ///
    /// Returns [`WarekiError::NoEraForDate`] for dates before the earliest
    /// tabulated era (1868-01-01).
    pub fn from_date(date: NaiveDate) -> Result<Self, WarekiError> {
        Self::from_ymd(Ymd::from(date)).ok_or(WarekiError::NoEraForDate { date })
    }

    /// Resolves the era containing `ymd`, scanning most-recent-first.
    pub(crate) fn from_ymd(ymd: Ymd) -> Option<Self> {
        let era = ERA_TABLE.iter().rev().find(|e| e.started <= ymd).copied();
        if let Some(e) = era {
            tracing::debug!(era = e.name, year = ymd.year(), "resolved era");
        }
        era
    }

    /// Returns the designated current era.
    ///
    /// "Current" is a static table designation, not a wall-clock lookup.
    pub fn current() -> Self {
        CURRENT
    }

    /// Returns all tabulated eras, oldest first.
    pub fn all() -> &'static [Era] {
        &ERA_TABLE
    }

    /// Returns true iff `date` falls inside this era.
    ///
    /// The lower bound is inclusive. For the open-ended era the upper bound
    /// is unconditionally satisfied.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let ymd = Ymd::from(date);
        self.started <= ymd && self.ended.is_none_or(|ended| ymd <= ended)
    }

    /// Returns the romanized name, e.g. `"Heisei"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the kanji spelling, e.g. `"平成"`.
    pub fn kanji(&self) -> &'static str {
        self.kanji
    }

    /// Returns the first day of the era.
    pub fn started(&self) -> NaiveDate {
        self.started.to_date()
    }

    /// Start of the era in table form, for year arithmetic.
    pub(crate) fn started_ymd(&self) -> Ymd {
        self.started
    }

    /// Returns the last day of the era, or `None` if open-ended.
    pub fn ended(&self) -> Option<NaiveDate> {
        self.ended.map(Ymd::to_date)
    }

    /// Pairs this era with a 1-based year-within-era, giving an
    /// [`EraYear`](crate::EraYear).
    ///
    /// ```
    /// use wareki_core::HEISEI;
    ///
    /// assert_eq!(HEISEI.year(32).to_ad(), 2020);
    /// ```
    pub fn year(&self, year: i32) -> crate::EraYear {
        crate::EraYear::new(*self, year)
    }
}

/// Name-only equality: bounds are derived from the table and never compared.
impl PartialEq for Era {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Era {}

impl std::hash::Hash for Era {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kanji)
    }
}

impl fmt::Debug for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Era({:?})", self.name)
    }
}
