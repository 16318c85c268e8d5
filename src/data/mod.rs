// SPDX-License-Identifier: PMPL-1.0-or-later

//! Compiled-in reference tables.
//!
//! Rows are embedded as static data: no file I/O, no parsing at startup.
//! The registry indexes them once; nothing else reads these tables directly.
//!
//! ## Curation rules
//!
//! - Country rows follow ISO 3166-1, including the reserved and deleted codes
//!   that still show up in older datasets. A code may appear on more than one
//!   row (`BY` was the Byelorussian SSR before it was Belarus); the registry
//!   resolves such collisions in favour of the `assigned` row.
//! - Currency and language codes referenced by a country row must exist in
//!   the currency and language tables. `validate` enforces this.
//! - Korean names use Hangul, spaces, hyphens and parentheses only.

mod countries;
mod currencies;
mod languages;

use crate::types::Status;

pub(crate) use countries::COUNTRIES;
pub(crate) use currencies::CURRENCIES;
pub(crate) use languages::LANGUAGES;

/// One row of the country table, before the flag glyph is derived.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CountryRow {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    pub kor_name: &'static str,
    pub status: Status,
    pub currencies: &'static [&'static str],
    pub languages: &'static [&'static str],
    pub calling_codes: &'static [&'static str],
    pub ioc: &'static str,
}
