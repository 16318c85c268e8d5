// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-data — static country, currency, and language reference data.
//!
//! Three keyed collections, built once from compiled-in tables and shared
//! read-only for the life of the process:
//!
//! 1. **Countries**: ISO 3166-1 records keyed by alpha-2 and alpha-3, with
//!    English and Korean names, currencies, languages, calling codes and a
//!    flag emoji.
//! 2. **Currencies**: ISO 4217 records keyed by currency code.
//! 3. **Languages**: ISO 639-2 records keyed by terminologic code.
//!
//! ```
//! use country_data::{countries, currencies, languages};
//!
//! let france = &countries()["FRA"];
//! assert_eq!(france.name, "France");
//! assert_eq!(france.currencies, &["EUR"]);
//! assert_eq!(currencies()["EUR"].name, "Euro");
//! assert_eq!(languages()["fra"].alpha2, "fr");
//! assert!(countries().get("ZZ").is_none());
//! ```

mod data;

pub mod calling;
pub mod emoji;
pub mod export;
pub mod lookup;
pub mod registry;
pub mod types;
pub mod validate;

pub use registry::{countries, currencies, languages, Countries, Currencies, Languages};
pub use types::{Country, Currency, Language, Status};
