//! # wareki-core
//!
//! Conversion between the Gregorian calendar and the Japanese era-name
//! (gengo) representation, where a year is expressed as an era plus a
//! 1-based year-within-era count ("Heisei 32").
//!
//! ## Architecture
//!
//! ```text
//! era table (static)
//!   └─ Era            membership window, lookup by name or by date
//!        └─ EraYear   (era, year-within-era) <-> plain Gregorian year
//!             └─ WarekiDate   adds month/day, <-> chrono::NaiveDate
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use wareki_core::{Era, EraYear, WarekiDate, HEISEI};
//!
//! // Year conversions
//! assert_eq!(EraYear::from_ad(2020).unwrap(), HEISEI.year(32));
//! assert_eq!(HEISEI.year(32).to_ad(), 2020);
//! assert_eq!(HEISEI.year(32).to_string(), "平成32年");
//!
//! // Full dates
//! let date = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
//! let wareki = WarekiDate::from_gregorian(date).unwrap();
//! assert_eq!(wareki.to_string(), "平成32年3月15日");
//! assert_eq!(wareki.to_gregorian(), date);
//!
//! // Era lookup
//! assert_eq!(Era::from_date(date).unwrap(), HEISEI);
//! assert!(HEISEI.contains(date));
//! ```
//!
//! Years in a transition year resolve to the era in force on December 31
//! of that year (see [`EraYear::from_ad`]). Eras before Meiji (1868) are
//! not tabulated.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `era` | Static era table and the `Era` value type |
//! | `era_year` | The (era, year-within-era) pair |
//! | `date` | Full dates with the year in era form |
//! | `error` | Error types |

mod date;
mod era;
mod era_year;
mod error;

pub use date::WarekiDate;
pub use era::{Era, HEISEI, MEIJI, SHOWA, TAISHO};
pub use era_year::EraYear;
pub use error::WarekiError;
