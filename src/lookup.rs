// SPDX-License-Identifier: PMPL-1.0-or-later

//! Field search over the reference tables.
//!
//! A query is a set of optional field constraints; a record matches when
//! every constraint that is set holds. An empty query matches everything.
//! Results keep table order.

use crate::registry::{self, Countries, Currencies, Languages};
use crate::types::{Country, Currency, Language, Status};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryQuery<'q> {
    pub name: Option<&'q str>,
    pub alpha2: Option<&'q str>,
    pub alpha3: Option<&'q str>,
    pub status: Option<Status>,
    /// Country lists this currency among its currencies
    pub currency: Option<&'q str>,
    /// Country lists this language among its languages
    pub language: Option<&'q str>,
    pub calling_code: Option<&'q str>,
    pub ioc: Option<&'q str>,
}

impl<'q> CountryQuery<'q> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &'q str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn alpha2(mut self, alpha2: &'q str) -> Self {
        self.alpha2 = Some(alpha2);
        self
    }

    pub fn alpha3(mut self, alpha3: &'q str) -> Self {
        self.alpha3 = Some(alpha3);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn currency(mut self, currency: &'q str) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn language(mut self, language: &'q str) -> Self {
        self.language = Some(language);
        self
    }

    pub fn calling_code(mut self, calling_code: &'q str) -> Self {
        self.calling_code = Some(calling_code);
        self
    }

    pub fn ioc(mut self, ioc: &'q str) -> Self {
        self.ioc = Some(ioc);
        self
    }

    pub fn matches(&self, country: &Country) -> bool {
        field_eq(self.name, country.name)
            && field_eq(self.alpha2, country.alpha2)
            && field_eq(self.alpha3, country.alpha3)
            && self.status.is_none_or(|status| status == country.status)
            && list_contains(self.currency, country.currencies)
            && list_contains(self.language, country.languages)
            && list_contains(self.calling_code, country.calling_codes)
            && field_eq(self.ioc, country.ioc)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyQuery<'q> {
    pub code: Option<&'q str>,
    pub name: Option<&'q str>,
    pub number: Option<&'q str>,
}

impl CurrencyQuery<'_> {
    pub fn matches(&self, currency: &Currency) -> bool {
        field_eq(self.code, currency.code)
            && field_eq(self.name, currency.name)
            && field_eq(self.number, currency.number)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageQuery<'q> {
    pub name: Option<&'q str>,
    pub alpha2: Option<&'q str>,
    pub alpha3: Option<&'q str>,
    pub bibliographic: Option<&'q str>,
}

impl LanguageQuery<'_> {
    pub fn matches(&self, language: &Language) -> bool {
        field_eq(self.name, language.name)
            && field_eq(self.alpha2, language.alpha2)
            && field_eq(self.alpha3, language.alpha3)
            && field_eq(self.bibliographic, language.bibliographic)
    }
}

fn field_eq(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|wanted| wanted == actual)
}

fn list_contains(wanted: Option<&str>, actual: &[&str]) -> bool {
    wanted.is_none_or(|wanted| actual.iter().any(|item| *item == wanted))
}

/// Search the global country table.
///
/// # Examples
/// ```
/// use country_data::lookup::{self, CountryQuery};
/// let found = lookup::countries(&CountryQuery::new().name("France"));
/// assert_eq!(found[0].alpha3, "FRA");
/// ```
pub fn countries(query: &CountryQuery<'_>) -> Vec<&'static Country> {
    countries_in(registry::countries(), query)
}

pub fn countries_in<'a>(table: &'a Countries, query: &CountryQuery<'_>) -> Vec<&'a Country> {
    table.iter().filter(|country| query.matches(country)).collect()
}

pub fn currencies(query: &CurrencyQuery<'_>) -> Vec<&'static Currency> {
    currencies_in(registry::currencies(), query)
}

pub fn currencies_in<'a>(table: &'a Currencies, query: &CurrencyQuery<'_>) -> Vec<&'a Currency> {
    table.iter().filter(|currency| query.matches(currency)).collect()
}

pub fn languages(query: &LanguageQuery<'_>) -> Vec<&'static Language> {
    languages_in(registry::languages(), query)
}

pub fn languages_in<'a>(table: &'a Languages, query: &LanguageQuery<'_>) -> Vec<&'a Language> {
    table.iter().filter(|language| query.matches(language)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(
            countries(&CountryQuery::new()).len(),
            registry::countries().len()
        );
        assert_eq!(
            currencies(&CurrencyQuery::default()).len(),
            registry::currencies().len()
        );
    }

    #[test]
    fn name_lookup_finds_every_row_with_that_name() {
        let found = countries(&CountryQuery::new().name("United Kingdom"));
        let codes: Vec<&str> = found.iter().map(|c| c.alpha2).collect();
        assert_eq!(codes, vec!["GB", "UK"]);
    }

    #[test]
    fn constraints_combine() {
        let found = countries(
            &CountryQuery::new()
                .name("United Kingdom")
                .status(Status::Assigned),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].alpha3, "GBR");
    }

    #[test]
    fn currency_membership() {
        let found = countries(&CountryQuery::new().currency("CHF"));
        let codes: Vec<&str> = found.iter().map(|c| c.alpha2).collect();
        assert_eq!(codes, vec!["CH", "LI"]);
    }

    #[test]
    fn language_membership_respects_status() {
        let found = countries(
            &CountryQuery::new()
                .language("kor")
                .status(Status::Assigned),
        );
        let codes: Vec<&str> = found.iter().map(|c| c.alpha2).collect();
        assert_eq!(codes, vec!["KP", "KR"]);
    }

    #[test]
    fn currency_number_lookup() {
        let query = CurrencyQuery {
            number: Some("978"),
            ..Default::default()
        };
        let found = currencies(&query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "EUR");
    }

    #[test]
    fn language_bibliographic_lookup() {
        let query = LanguageQuery {
            bibliographic: Some("ger"),
            ..Default::default()
        };
        let found = languages(&query);
        assert_eq!(found[0].alpha3, "deu");
    }

    #[test]
    fn unknown_value_matches_nothing() {
        assert!(countries(&CountryQuery::new().ioc("ZZZ")).is_empty());
    }
}
