// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the dataset integrity pass

use country_data::types::{Country, Currency, Language, Status};
use country_data::validate::{self, Violation};
use country_data::{countries, Countries, Currencies, Languages};

fn fixture_country(alpha2: &'static str, kor_name: &'static str) -> Country {
    Country {
        alpha2,
        alpha3: "",
        name: "Fixture",
        kor_name,
        status: Status::Assigned,
        currencies: &["EUR"],
        languages: &["fra"],
        calling_codes: &["+33"],
        ioc: "",
        emoji: String::new(),
    }
}

fn fixture_tables() -> (Currencies, Languages) {
    (
        Currencies::new(vec![Currency {
            code: "EUR",
            name: "Euro",
            number: "978",
            decimals: Some(2),
            symbol: "€",
        }]),
        Languages::new(vec![Language {
            name: "French",
            alpha2: "fr",
            alpha3: "fra",
            bibliographic: "fre",
        }]),
    )
}

#[test]
fn test_shipped_dataset_is_clean() {
    let report = validate::dataset();
    assert!(
        report.is_ok(),
        "unexpected violations: {:#?}",
        report.violations()
    );
    assert_eq!(report.checked(), countries().len());
    assert!(validate::dataset().into_result().is_ok());
}

#[test]
fn test_broken_korean_name_is_reported() {
    let (currencies, languages) = fixture_tables();
    let table = Countries::new(vec![
        fixture_country("AA", "가나다"),
        fixture_country("BB", "Côte"),
    ]);
    let report = validate::run(&table, &currencies, &languages);
    assert_eq!(
        report.violations(),
        &[Violation::MalformedKorName {
            alpha2: "BB",
            value: "Côte"
        }]
    );
}

#[test]
fn test_empty_korean_name_is_allowed() {
    let (currencies, languages) = fixture_tables();
    let table = Countries::new(vec![fixture_country("AA", "")]);
    assert!(validate::run(&table, &currencies, &languages).is_ok());
}

#[test]
fn test_malformed_calling_code_is_reported() {
    let (currencies, languages) = fixture_tables();
    let mut country = fixture_country("AA", "");
    country.calling_codes = &["33"];
    let report = validate::run(&Countries::new(vec![country]), &currencies, &languages);
    assert_eq!(report.counts_by_kind(), vec![("callingCode", 1)]);
}

#[test]
fn test_every_failure_is_collected() {
    let (currencies, languages) = fixture_tables();
    let mut country = fixture_country("a", "x");
    country.currencies = &["GBP"];
    country.languages = &["eng"];
    country.ioc = "fr";
    let report = validate::run(&Countries::new(vec![country]), &currencies, &languages);
    let kinds: Vec<&str> = report.violations().iter().map(|v| v.kind()).collect();
    assert_eq!(kinds, vec!["alpha2", "currency", "language", "korName", "ioc"]);

    let message = report.into_result().unwrap_err().to_string();
    assert!(message.starts_with("5 integrity violation(s) across 1 countries"));
}
