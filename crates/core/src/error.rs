//! Error types for the wareki-core crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the wareki-core crate.
///
/// Lookup failures abort the calling operation; there is no clamping to
/// the earliest or latest era and no default fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WarekiError {
    /// Returned when an era name matches no entry in the era table.
    #[error("unknown era name: {name:?}")]
    UnknownEra {
        /// The name that was looked up.
        name: String,
    },

    /// Returned when a date precedes the start of every tabulated era.
    #[error("no era contains date {date} (earliest tabulated era starts 1868-01-01)")]
    NoEraForDate {
        /// The date for which no era was found.
        date: NaiveDate,
    },

    /// Returned when a Gregorian year ends before the start of every
    /// tabulated era.
    #[error("no era contains year {year} (earliest tabulated era starts in 1868)")]
    NoEraForYear {
        /// The year for which no era was found.
        year: i32,
    },

    /// Returned when a month/day pair is not a valid Gregorian date in the
    /// resolved year.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The Gregorian year the era-year resolved to.
        year: i32,
        /// The invalid or out-of-range month.
        month: u8,
        /// The invalid or out-of-range day.
        day: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_era() {
        let err = WarekiError::UnknownEra {
            name: "Keio".to_string(),
        };
        assert_eq!(err.to_string(), "unknown era name: \"Keio\"");
    }

    #[test]
    fn error_no_era_for_date() {
        let date = NaiveDate::from_ymd_opt(1867, 12, 31).unwrap();
        let err = WarekiError::NoEraForDate { date };
        assert_eq!(
            err.to_string(),
            "no era contains date 1867-12-31 (earliest tabulated era starts 1868-01-01)"
        );
    }

    #[test]
    fn error_no_era_for_year() {
        let err = WarekiError::NoEraForYear { year: 1867 };
        assert_eq!(
            err.to_string(),
            "no era contains year 1867 (earliest tabulated era starts in 1868)"
        );
    }

    #[test]
    fn error_invalid_date() {
        let err = WarekiError::InvalidDate {
            year: 2019,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "invalid date: 2019-02-29");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<WarekiError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<WarekiError>();
    }

    #[test]
    fn error_is_clone_and_eq() {
        let err = WarekiError::NoEraForDate {
            date: NaiveDate::from_ymd_opt(1000, 1, 1).unwrap(),
        };
        assert_eq!(err.clone(), err);
    }
}
