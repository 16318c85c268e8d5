// SPDX-License-Identifier: PMPL-1.0-or-later

//! Keyed collections over the reference tables.
//!
//! Each collection owns its records in table order plus a code index. The
//! process-wide instances behind [`countries`], [`currencies`] and
//! [`languages`] are built on first use and never mutated afterwards, so
//! they can be shared freely between threads.

use crate::data::{self, CountryRow};
use crate::emoji;
use crate::types::{Country, Currency, Language};
use std::collections::HashMap;
use std::ops::Index;
use std::sync::OnceLock;
use tracing::debug;

static COUNTRIES: OnceLock<Countries> = OnceLock::new();
static CURRENCIES: OnceLock<Currencies> = OnceLock::new();
static LANGUAGES: OnceLock<Languages> = OnceLock::new();

/// All countries, keyed by alpha-2 and alpha-3.
pub fn countries() -> &'static Countries {
    COUNTRIES.get_or_init(|| Countries::from_rows(data::COUNTRIES))
}

/// All currencies, keyed by ISO 4217 code.
pub fn currencies() -> &'static Currencies {
    CURRENCIES.get_or_init(|| Currencies::new(data::CURRENCIES.to_vec()))
}

/// All languages, keyed by ISO 639-2/T code.
pub fn languages() -> &'static Languages {
    LANGUAGES.get_or_init(|| Languages::new(data::LANGUAGES.to_vec()))
}

// ─── Countries ──────────────────────────────────────────────────────

/// Countries indexed by both alpha-2 and alpha-3 code.
///
/// When several records share a code, the index points at the one whose
/// status is `assigned`. Between two non-assigned records the earlier one
/// wins. [`Countries::all`] still lists every record.
#[derive(Debug, Clone, Default)]
pub struct Countries {
    records: Vec<Country>,
    index: HashMap<&'static str, usize>,
}

impl Countries {
    pub fn new(records: Vec<Country>) -> Self {
        let mut index = HashMap::with_capacity(records.len() * 2);
        for (position, country) in records.iter().enumerate() {
            index_code(&mut index, &records, country.alpha2, position);
            if !country.alpha3.is_empty() {
                index_code(&mut index, &records, country.alpha3, position);
            }
        }
        debug!(
            records = records.len(),
            keys = index.len(),
            "country index built"
        );
        Self { records, index }
    }

    pub(crate) fn from_rows(rows: &[CountryRow]) -> Self {
        Self::new(rows.iter().map(country_from_row).collect())
    }

    /// Look up a country by alpha-2 or alpha-3 code. Codes are case-sensitive.
    pub fn get(&self, code: &str) -> Option<&Country> {
        self.index.get(code).map(|&position| &self.records[position])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Every record in table order, including reserved and deleted codes.
    pub fn all(&self) -> &[Country] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every code the index answers to, sorted.
    pub fn codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<&'static str> = self.index.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}

fn index_code(
    index: &mut HashMap<&'static str, usize>,
    records: &[Country],
    code: &'static str,
    position: usize,
) {
    match index.get(code).copied() {
        None => {
            index.insert(code, position);
        }
        Some(existing) => {
            let current = &records[existing];
            let candidate = &records[position];
            if candidate.status.is_assigned() && !current.status.is_assigned() {
                debug!(
                    code,
                    kept = candidate.name,
                    shadowed = current.name,
                    "assigned record takes the code"
                );
                index.insert(code, position);
            } else {
                debug!(
                    code,
                    kept = current.name,
                    shadowed = candidate.name,
                    "code already taken"
                );
            }
        }
    }
}

fn country_from_row(row: &CountryRow) -> Country {
    Country {
        alpha2: row.alpha2,
        alpha3: row.alpha3,
        name: row.name,
        kor_name: row.kor_name,
        status: row.status,
        currencies: row.currencies,
        languages: row.languages,
        calling_codes: row.calling_codes,
        ioc: row.ioc,
        emoji: emoji::flag(row.alpha2).unwrap_or_default(),
    }
}

impl Index<&str> for Countries {
    type Output = Country;

    /// # Panics
    ///
    /// Panics if no country answers to `code`.
    fn index(&self, code: &str) -> &Country {
        match self.get(code) {
            Some(country) => country,
            None => panic!("no country with code {code:?}"),
        }
    }
}

impl<'a> IntoIterator for &'a Countries {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ─── Currencies ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Currencies {
    records: Vec<Currency>,
    index: HashMap<&'static str, usize>,
}

impl Currencies {
    pub fn new(records: Vec<Currency>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (position, currency) in records.iter().enumerate() {
            index.entry(currency.code).or_insert(position);
        }
        debug!(records = records.len(), "currency index built");
        Self { records, index }
    }

    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.index.get(code).map(|&position| &self.records[position])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn all(&self) -> &[Currency] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Currency> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Index<&str> for Currencies {
    type Output = Currency;

    fn index(&self, code: &str) -> &Currency {
        match self.get(code) {
            Some(currency) => currency,
            None => panic!("no currency with code {code:?}"),
        }
    }
}

impl<'a> IntoIterator for &'a Currencies {
    type Item = &'a Currency;
    type IntoIter = std::slice::Iter<'a, Currency>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ─── Languages ──────────────────────────────────────────────────────

/// Languages keyed by ISO 639-2/T code, with fallback indexes for
/// ISO 639-1 and ISO 639-2/B codes.
#[derive(Debug, Clone, Default)]
pub struct Languages {
    records: Vec<Language>,
    by_alpha3: HashMap<&'static str, usize>,
    by_alias: HashMap<&'static str, usize>,
}

impl Languages {
    pub fn new(records: Vec<Language>) -> Self {
        let mut by_alpha3 = HashMap::with_capacity(records.len());
        let mut by_alias = HashMap::new();
        for (position, language) in records.iter().enumerate() {
            by_alpha3.entry(language.alpha3).or_insert(position);
            for alias in [language.alpha2, language.bibliographic] {
                if !alias.is_empty() {
                    by_alias.entry(alias).or_insert(position);
                }
            }
        }
        debug!(records = records.len(), "language index built");
        Self {
            records,
            by_alpha3,
            by_alias,
        }
    }

    /// Resolve a terminologic code, falling back to ISO 639-1 and
    /// bibliographic codes (`"fr"` and `"fre"` both find French).
    pub fn get(&self, code: &str) -> Option<&Language> {
        self.by_alpha3
            .get(code)
            .or_else(|| self.by_alias.get(code))
            .map(|&position| &self.records[position])
    }

    /// Resolve strictly by terminologic code, the key countries reference.
    pub fn get_alpha3(&self, code: &str) -> Option<&Language> {
        self.by_alpha3
            .get(code)
            .map(|&position| &self.records[position])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn all(&self) -> &[Language] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Language> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Index<&str> for Languages {
    type Output = Language;

    fn index(&self, code: &str) -> &Language {
        match self.get(code) {
            Some(language) => language,
            None => panic!("no language with code {code:?}"),
        }
    }
}

impl<'a> IntoIterator for &'a Languages {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn row(
        alpha2: &'static str,
        alpha3: &'static str,
        name: &'static str,
        status: Status,
    ) -> CountryRow {
        CountryRow {
            alpha2,
            alpha3,
            name,
            kor_name: "",
            status,
            currencies: &[],
            languages: &[],
            calling_codes: &[],
            ioc: "",
        }
    }

    #[test]
    fn assigned_row_wins_when_listed_after_deleted_one() {
        let rows = [
            row("SK", "SKM", "Sikkim", Status::Deleted),
            row("SK", "SVK", "Slovakia", Status::Assigned),
        ];
        let countries = Countries::from_rows(&rows);
        assert_eq!(countries["SK"].name, "Slovakia");
        assert_eq!(countries["SKM"].name, "Sikkim");
        assert_eq!(countries.len(), 2);
    }

    #[test]
    fn assigned_row_keeps_code_when_listed_first() {
        let rows = [
            row("BY", "BLR", "Belarus", Status::Assigned),
            row("BY", "BYS", "Byelorussian SSR", Status::Deleted),
        ];
        let countries = Countries::from_rows(&rows);
        assert_eq!(countries["BY"].name, "Belarus");
    }

    #[test]
    fn first_non_assigned_row_wins_between_equals() {
        let rows = [
            row("TP", "TMP", "East Timor", Status::TransitionallyReserved),
            row("TP", "", "Later Alias", Status::Deleted),
        ];
        let countries = Countries::from_rows(&rows);
        assert_eq!(countries["TP"].name, "East Timor");
    }

    #[test]
    fn empty_alpha3_is_not_a_key() {
        let countries = Countries::from_rows(&[row("UK", "", "United Kingdom", Status::Reserved)]);
        assert!(countries.get("").is_none());
        assert_eq!(countries.codes(), vec!["UK"]);
    }

    #[test]
    fn rows_get_flag_glyphs() {
        let countries = Countries::from_rows(&[row("FI", "FIN", "Finland", Status::Assigned)]);
        assert_eq!(countries["FIN"].emoji, "\u{1F1EB}\u{1F1EE}");
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert!(countries().get("fr").is_none());
        assert!(currencies().get("eur").is_none());
        assert!(countries().get("FR").is_some());
    }

    #[test]
    fn languages_resolve_aliases() {
        let languages = languages();
        assert_eq!(languages["fra"].name, "French");
        assert_eq!(languages["fr"].alpha3, "fra");
        assert_eq!(languages["fre"].alpha3, "fra");
        assert!(languages.get_alpha3("fre").is_none());
    }

    #[test]
    #[should_panic(expected = "no country with code")]
    fn index_panics_on_unknown_code() {
        let _ = &countries()["ZZ"];
    }

    #[test]
    fn global_tables_are_built_once() {
        assert!(std::ptr::eq(countries(), countries()));
        assert!(std::ptr::eq(currencies(), currencies()));
        assert!(std::ptr::eq(languages(), languages()));
    }
}
