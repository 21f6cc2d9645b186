//! The [`EraYear`] value type: an era paired with a year-within-era.

use std::fmt;

use crate::era::{Era, Ymd};
use crate::error::WarekiError;

/// A year expressed as "the Nth year of era E", e.g. Heisei 32.
///
/// `year` is 1-based: year 1 is the era's inception year regardless of
/// which month the era started in. No upper bound is enforced; a year past
/// the era's end still converts arithmetically.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EraYear {
    era: Era,
    year: i32,
}

impl EraYear {
    /// Pairs an era with a 1-based year-within-era. No validation beyond
    /// the types themselves.
    pub fn new(era: Era, year: i32) -> Self {
        Self { era, year }
    }

    /// Converts a Gregorian year to its era form.
    ///
    /// The era is resolved as of December 31 of `ad_year`. For a year that
    /// straddles an era transition this picks the era in force at year end;
    /// a deliberate simplification, not calendar-accurate for dates earlier
    /// in the transition year.
    ///
    /// # Errors
    ///
    /// Returns [`WarekiError::NoEraForYear`] for years before the earliest
    /// tabulated era.
    pub fn from_ad(ad_year: i32) -> Result<Self, WarekiError> {
        let year_end = Ymd::new(ad_year, 12, 31);
        let era = Era::from_ymd(year_end).ok_or(WarekiError::NoEraForYear { year: ad_year })?;
        Ok(Self {
            era,
            year: ad_year - era.started_ymd().year() + 1,
        })
    }

    /// Converts back to the plain Gregorian year.
    pub fn to_ad(self) -> i32 {
        self.era.started_ymd().year() + self.year - 1
    }

    /// Returns the era.
    pub fn era(self) -> Era {
        self.era
    }

    /// Returns the 1-based year within the era.
    pub fn year(self) -> i32 {
        self.year
    }
}

impl From<EraYear> for i32 {
    /// Same as [`EraYear::to_ad`].
    fn from(value: EraYear) -> Self {
        value.to_ad()
    }
}

impl fmt::Display for EraYear {
    /// Renders as `平成32年`. The alternate form (`{:#}`) uses the
    /// traditional `元` notation for year 1: `平成元年` instead of `平成1年`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() && self.year == 1 {
            write!(f, "{}元年", self.era)
        } else {
            write!(f, "{}{}年", self.era, self.year)
        }
    }
}

impl fmt::Debug for EraYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EraYear({:?}, {})", self.era, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::era::{HEISEI, MEIJI, SHOWA, TAISHO};

    #[test]
    fn from_ad_mid_era() {
        assert_eq!(EraYear::from_ad(2020).unwrap(), EraYear::new(HEISEI, 32));
        assert_eq!(EraYear::from_ad(1964).unwrap(), EraYear::new(SHOWA, 39));
        assert_eq!(EraYear::from_ad(1900).unwrap(), EraYear::new(MEIJI, 33));
    }

    #[test]
    fn from_ad_transition_years_resolve_to_year_end_era() {
        // Heisei started 1989-01-08, so Dec 31 1989 is Heisei.
        assert_eq!(EraYear::from_ad(1989).unwrap(), EraYear::new(HEISEI, 1));
        assert_eq!(EraYear::from_ad(1988).unwrap(), EraYear::new(SHOWA, 63));
        // Taisho started mid-1912.
        assert_eq!(EraYear::from_ad(1912).unwrap(), EraYear::new(TAISHO, 1));
        assert_eq!(EraYear::from_ad(1926).unwrap(), EraYear::new(SHOWA, 1));
    }

    #[test]
    fn from_ad_first_tabulated_year() {
        assert_eq!(EraYear::from_ad(1868).unwrap(), EraYear::new(MEIJI, 1));
    }

    #[test]
    fn from_ad_before_first_era() {
        assert_eq!(
            EraYear::from_ad(1867).unwrap_err(),
            WarekiError::NoEraForYear { year: 1867 }
        );
    }

    #[test]
    fn to_ad() {
        assert_eq!(EraYear::new(HEISEI, 32).to_ad(), 2020);
        assert_eq!(EraYear::new(SHOWA, 39).to_ad(), 1964);
        assert_eq!(EraYear::new(MEIJI, 1).to_ad(), 1868);
    }

    #[test]
    fn into_i32_matches_to_ad() {
        assert_eq!(i32::from(EraYear::new(HEISEI, 32)), 2020);
    }

    #[test]
    fn roundtrip_all_tabulated_years() {
        for y in 1868..=2030 {
            let era_year = EraYear::from_ad(y).unwrap();
            assert_eq!(era_year.to_ad(), y, "roundtrip failed for {y}");
        }
    }

    #[test]
    fn era_call_convenience() {
        assert_eq!(SHOWA.year(39), EraYear::new(SHOWA, 39));
    }

    #[test]
    fn display_plain() {
        assert_eq!(EraYear::new(HEISEI, 32).to_string(), "平成32年");
        assert_eq!(EraYear::new(SHOWA, 1).to_string(), "昭和1年");
    }

    #[test]
    fn display_alternate_gannen() {
        assert_eq!(format!("{:#}", EraYear::new(HEISEI, 1)), "平成元年");
        // Only year 1 gets the notation.
        assert_eq!(format!("{:#}", EraYear::new(HEISEI, 32)), "平成32年");
    }

    #[test]
    fn debug_is_reconstructible() {
        assert_eq!(
            format!("{:?}", EraYear::new(HEISEI, 32)),
            "EraYear(Era(\"Heisei\"), 32)"
        );
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<EraYear>();
    }
}
