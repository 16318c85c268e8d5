// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dataset integrity checks.
//!
//! One pass over every country record, checking code shapes, status,
//! referential integrity against the currency and language tables, Korean
//! name characters, calling code and IOC shapes, uniqueness of alpha-2
//! codes among `assigned` records, and uniqueness of every alpha-3 code. Every failed check becomes a [`Violation`];
//! nothing short-circuits.

use crate::registry::{self, Countries, Currencies, Languages};
use crate::types::Country;
use anyhow::{anyhow, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

struct Patterns {
    alpha2: Regex,
    alpha3: Regex,
    kor_name: Regex,
    calling_code: Regex,
    ioc: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        alpha2: compile(r"^[A-Z]{2}$"),
        alpha3: compile(r"^[A-Z]{3}$"),
        kor_name: compile(r"^[가-힣\s\-()]*$"),
        calling_code: compile(r"^\+\d{1,3}( \d{1,4})*$"),
        ioc: compile(r"^[A-Z]{3}$"),
    })
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// A single failed check against one country record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{name}: alpha2 {value:?} is not two uppercase letters")]
    MalformedAlpha2 { name: &'static str, value: &'static str },

    #[error("{alpha2}: alpha3 {value:?} is not three uppercase letters")]
    MalformedAlpha3 { alpha2: &'static str, value: &'static str },

    #[error("{alpha2}: status is empty")]
    MissingStatus { alpha2: &'static str },

    #[error("{alpha2}: currency {code:?} is not in the currency table")]
    UnknownCurrency { alpha2: &'static str, code: &'static str },

    #[error("{alpha2}: language {code:?} is not in the language table")]
    UnknownLanguage { alpha2: &'static str, code: &'static str },

    #[error("{alpha2}: Korean name {value:?} contains characters outside Hangul, spaces, hyphens and parentheses")]
    MalformedKorName { alpha2: &'static str, value: &'static str },

    #[error("{alpha2}: calling code {value:?} is malformed")]
    MalformedCallingCode { alpha2: &'static str, value: &'static str },

    #[error("{alpha2}: IOC code {value:?} is not three uppercase letters")]
    MalformedIoc { alpha2: &'static str, value: &'static str },

    #[error("code {code} is assigned to both {first} and {second}")]
    DuplicateAssignedCode {
        code: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("alpha3 {code} is used by both {first} and {second}")]
    DuplicateAlpha3 {
        code: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

impl Violation {
    /// Short machine-readable tag for summaries and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::MalformedAlpha2 { .. } => "alpha2",
            Violation::MalformedAlpha3 { .. } => "alpha3",
            Violation::MissingStatus { .. } => "status",
            Violation::UnknownCurrency { .. } => "currency",
            Violation::UnknownLanguage { .. } => "language",
            Violation::MalformedKorName { .. } => "korName",
            Violation::MalformedCallingCode { .. } => "callingCode",
            Violation::MalformedIoc { .. } => "ioc",
            Violation::DuplicateAssignedCode { .. } => "duplicate",
            Violation::DuplicateAlpha3 { .. } => "duplicateAlpha3",
        }
    }
}

/// Outcome of a validation pass
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    checked: usize,
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of country records examined
    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violation counts per [`Violation::kind`], sorted by kind
    pub fn counts_by_kind(&self) -> Vec<(&'static str, usize)> {
        let mut counts: HashMap<&'static str, usize> = HashMap::new();
        for violation in &self.violations {
            *counts.entry(violation.kind()).or_insert(0) += 1;
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_unstable();
        counts
    }

    /// Fold the report into a single error listing every violation.
    pub fn into_result(self) -> Result<()> {
        if self.violations.is_empty() {
            return Ok(());
        }
        let listing = self
            .violations
            .iter()
            .map(|violation| format!("  - {}", violation))
            .collect::<Vec<_>>()
            .join("\n");
        Err(anyhow!(
            "{} integrity violation(s) across {} countries:\n{}",
            self.violations.len(),
            self.checked,
            listing
        ))
    }
}

/// Validate the compiled-in dataset.
pub fn dataset() -> ValidationReport {
    run(
        registry::countries(),
        registry::currencies(),
        registry::languages(),
    )
}

/// Validate `countries` against the given currency and language tables.
pub fn run(countries: &Countries, currencies: &Currencies, languages: &Languages) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut assigned_codes: HashMap<&'static str, &'static str> = HashMap::new();
    let mut alpha3_codes: HashMap<&'static str, &'static str> = HashMap::new();

    for country in countries {
        report.checked += 1;
        check_country(country, currencies, languages, &mut report.violations);

        // Alpha-2 may be shared with historical rows; alpha-3 never.
        if country.status.is_assigned() {
            if let Some(first) = assigned_codes.insert(country.alpha2, country.name) {
                report.violations.push(Violation::DuplicateAssignedCode {
                    code: country.alpha2,
                    first,
                    second: country.name,
                });
            }
        }
        if !country.alpha3.is_empty() {
            if let Some(first) = alpha3_codes.insert(country.alpha3, country.name) {
                report.violations.push(Violation::DuplicateAlpha3 {
                    code: country.alpha3,
                    first,
                    second: country.name,
                });
            }
        }
    }

    if report.is_ok() {
        debug!(checked = report.checked, "dataset validated");
    } else {
        warn!(
            checked = report.checked,
            violations = report.violations.len(),
            "dataset has integrity violations"
        );
    }
    report
}

fn check_country(
    country: &Country,
    currencies: &Currencies,
    languages: &Languages,
    violations: &mut Vec<Violation>,
) {
    let patterns = patterns();
    let alpha2 = country.alpha2;

    if !patterns.alpha2.is_match(alpha2) {
        violations.push(Violation::MalformedAlpha2 {
            name: country.name,
            value: alpha2,
        });
    }
    if !country.alpha3.is_empty() && !patterns.alpha3.is_match(country.alpha3) {
        violations.push(Violation::MalformedAlpha3 {
            alpha2,
            value: country.alpha3,
        });
    }
    // Status is an enum, so this only trips if a label is ever blanked.
    if country.status.as_str().is_empty() {
        violations.push(Violation::MissingStatus { alpha2 });
    }
    for &code in country.currencies {
        if !currencies.contains(code) {
            violations.push(Violation::UnknownCurrency { alpha2, code });
        }
    }
    for &code in country.languages {
        if languages.get_alpha3(code).is_none() {
            violations.push(Violation::UnknownLanguage { alpha2, code });
        }
    }
    if !patterns.kor_name.is_match(country.kor_name) {
        violations.push(Violation::MalformedKorName {
            alpha2,
            value: country.kor_name,
        });
    }
    for &value in country.calling_codes {
        if !patterns.calling_code.is_match(value) {
            violations.push(Violation::MalformedCallingCode { alpha2, value });
        }
    }
    if !country.ioc.is_empty() && !patterns.ioc.is_match(country.ioc) {
        violations.push(Violation::MalformedIoc {
            alpha2,
            value: country.ioc,
        });
    }
}

/// Whether a Korean name uses only Hangul syllables, whitespace, hyphens
/// and parentheses. The empty string passes.
pub fn is_valid_kor_name(value: &str) -> bool {
    patterns().kor_name.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Currency, Language, Status};

    fn country(alpha2: &'static str, alpha3: &'static str) -> Country {
        Country {
            alpha2,
            alpha3,
            name: "Testland",
            kor_name: "테스트랜드",
            status: Status::Assigned,
            currencies: &["TST"],
            languages: &["tst"],
            calling_codes: &["+999"],
            ioc: "TST",
            emoji: String::new(),
        }
    }

    fn tables() -> (Currencies, Languages) {
        let currencies = Currencies::new(vec![Currency {
            code: "TST",
            name: "Test Dollar",
            number: "999",
            decimals: Some(2),
            symbol: "$",
        }]);
        let languages = Languages::new(vec![Language {
            name: "Testish",
            alpha2: "ts",
            alpha3: "tst",
            bibliographic: "",
        }]);
        (currencies, languages)
    }

    #[test]
    fn patterns_compile() {
        let _ = patterns();
    }

    #[test]
    fn clean_fixture_passes() {
        let (currencies, languages) = tables();
        let countries = Countries::new(vec![country("TL", "TLD")]);
        let report = run(&countries, &currencies, &languages);
        assert!(report.is_ok(), "{:?}", report.violations());
        assert_eq!(report.checked(), 1);
    }

    #[test]
    fn malformed_codes_are_reported() {
        let (currencies, languages) = tables();
        let countries = Countries::new(vec![country("t1", "TOOLONG")]);
        let report = run(&countries, &currencies, &languages);
        let kinds: Vec<&str> = report.violations().iter().map(Violation::kind).collect();
        assert_eq!(kinds, vec!["alpha2", "alpha3"]);
    }

    #[test]
    fn dangling_references_are_reported() {
        let (currencies, languages) = tables();
        let mut broken = country("TL", "TLD");
        broken.currencies = &["TST", "XXX"];
        broken.languages = &["xxx"];
        let report = run(&Countries::new(vec![broken]), &currencies, &languages);
        assert_eq!(
            report.violations(),
            &[
                Violation::UnknownCurrency { alpha2: "TL", code: "XXX" },
                Violation::UnknownLanguage { alpha2: "TL", code: "xxx" },
            ]
        );
    }

    #[test]
    fn language_references_must_use_terminologic_code() {
        let (currencies, languages) = tables();
        let mut broken = country("TL", "TLD");
        broken.languages = &["ts"];
        let report = run(&Countries::new(vec![broken]), &currencies, &languages);
        assert_eq!(report.counts_by_kind(), vec![("language", 1)]);
    }

    #[test]
    fn duplicate_assigned_codes_are_reported() {
        let (currencies, languages) = tables();
        let countries = Countries::new(vec![country("TL", "TLD"), country("TL", "TLE")]);
        let report = run(&countries, &currencies, &languages);
        assert_eq!(report.counts_by_kind(), vec![("duplicate", 1)]);
    }

    #[test]
    fn deleted_rows_may_reuse_codes() {
        let (currencies, languages) = tables();
        let mut old = country("TL", "TLO");
        old.status = Status::Deleted;
        let countries = Countries::new(vec![old, country("TL", "TLD")]);
        assert!(run(&countries, &currencies, &languages).is_ok());
    }

    #[test]
    fn deleted_rows_may_not_reuse_alpha3() {
        let (currencies, languages) = tables();
        let current = Country {
            name: "Current",
            ..country("TL", "TLD")
        };
        let old = Country {
            name: "Former",
            status: Status::Deleted,
            ..country("TO", "TLD")
        };
        let report = run(&Countries::new(vec![current, old]), &currencies, &languages);
        assert_eq!(
            report.violations(),
            &[Violation::DuplicateAlpha3 {
                code: "TLD",
                first: "Current",
                second: "Former",
            }]
        );
    }

    #[test]
    fn duplicate_alpha3_between_assigned_rows_is_reported_once() {
        let (currencies, languages) = tables();
        let countries = Countries::new(vec![country("TL", "TLD"), country("TM", "TLD")]);
        let report = run(&countries, &currencies, &languages);
        assert_eq!(report.counts_by_kind(), vec![("duplicateAlpha3", 1)]);
    }

    #[test]
    fn calling_code_shape() {
        let pattern = &patterns().calling_code;
        for good in ["+1", "+44", "+1 684", "+7 840", "+599 9"] {
            assert!(pattern.is_match(good), "{good}");
        }
        for bad in ["33", "+", "+1234", "+1 12345", "+1-684", "+44 "] {
            assert!(!pattern.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn kor_name_character_class() {
        assert!(is_valid_kor_name(""));
        assert!(is_valid_kor_name("콩고 민주 공화국"));
        assert!(is_valid_kor_name("기니-비사우 (구)"));
        assert!(!is_valid_kor_name("Korea"));
        assert!(!is_valid_kor_name("세인트헬레나, 어센션"));
        assert!(!is_valid_kor_name("ㄱㄴ"));
    }

    #[test]
    fn into_result_lists_violations() {
        let (currencies, languages) = tables();
        let mut broken = country("TL", "TLD");
        broken.kor_name = "Test";
        let err = run(&Countries::new(vec![broken]), &currencies, &languages)
            .into_result()
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("1 integrity violation(s)"));
        assert!(message.contains("Korean name \"Test\""));
    }
}
