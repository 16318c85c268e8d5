// SPDX-License-Identifier: PMPL-1.0-or-later

//! Integration tests for the country, currency and language tables

use country_data::{countries, currencies, languages, Status};
use regex::Regex;

#[test]
fn test_all_is_an_ordered_sequence() {
    let all = countries().all();
    assert!(!all.is_empty());
    assert_eq!(all.len(), countries().len());
    assert_eq!(all[0].alpha2, "AC");
    assert_eq!(countries().iter().count(), all.len());
}

#[test]
fn test_alpha2_lookup() {
    assert_eq!(countries()["BE"].name, "Belgium");
    assert_eq!(countries()["US"].name, "United States");
}

#[test]
fn test_prefers_assigned_alpha2_codes() {
    assert_eq!(countries()["SK"].name, "Slovakia");
    assert_eq!(countries()["BY"].name, "Belarus");

    // The historical rows are still enumerable and reachable by alpha-3
    assert_eq!(countries()["SKM"].name, "Sikkim");
    assert_eq!(countries()["BYS"].status, Status::Deleted);
    assert!(countries().all().iter().any(|c| c.name == "Sikkim"));
}

#[test]
fn test_alpha3_lookup() {
    let france = &countries()["FRA"];
    assert_eq!(france.name, "France");
    assert_eq!(france.currencies, &["EUR"]);
    assert!(std::ptr::eq(france, &countries()["FR"]));
}

#[test]
fn test_unknown_codes_are_absent() {
    assert!(countries().get("ZZ").is_none());
    assert!(countries().get("").is_none());
    assert!(currencies().get("ZZZ").is_none());
    assert!(languages().get("zzz").is_none());
}

#[test]
fn test_latvian_currency_is_euro() {
    assert_eq!(countries()["LV"].currencies, &["EUR"]);
}

#[test]
fn test_finland_emoji_is_the_flag() {
    let expected = String::from_utf16(&[55356, 56811, 55356, 56814]).unwrap();
    assert_eq!(countries()["FI"].emoji, expected);
}

#[test]
fn test_every_country_has_a_status() {
    for country in countries().all() {
        assert!(
            !country.status.as_str().is_empty(),
            "{} has no status",
            country.name
        );
    }
}

#[test]
fn test_alpha2_and_alpha3_are_well_formed() {
    let alpha2 = Regex::new(r"^[A-Z]{2}$").unwrap();
    let alpha3 = Regex::new(r"^[A-Z]{3}$").unwrap();
    for country in countries().all() {
        assert!(
            alpha2.is_match(country.alpha2),
            "alpha2 correctly formed - {}",
            country.alpha2
        );
        if !country.alpha3.is_empty() {
            assert!(
                alpha3.is_match(country.alpha3),
                "alpha3 correctly formed - {}",
                country.alpha3
            );
        }
    }
}

#[test]
fn test_every_currency_reference_resolves() {
    for country in countries().all() {
        for code in country.currencies {
            assert!(
                currencies().get(code).is_some(),
                "{} references unknown currency {}",
                country.alpha2,
                code
            );
        }
    }
}

#[test]
fn test_every_language_reference_resolves() {
    for country in countries().all() {
        for code in country.languages {
            assert!(
                languages().get_alpha3(code).is_some(),
                "{} references unknown language {}",
                country.alpha2,
                code
            );
        }
    }
}

#[test]
fn test_kor_names_are_hangul_spaces_hyphens_or_parentheses() {
    let korean_or_empty = Regex::new(r"^[가-힣\s\-\(\)]*$").unwrap();
    for country in countries().all() {
        assert!(
            korean_or_empty.is_match(country.kor_name),
            "{}: {:?}",
            country.alpha2,
            country.kor_name
        );
    }
}

#[test]
fn test_every_assigned_country_has_a_korean_name() {
    for country in countries().all() {
        if country.status.is_assigned() {
            assert!(!country.kor_name.is_empty(), "{} has no Korean name", country.alpha2);
        }
    }
}

#[test]
fn test_assigned_country_count() {
    let assigned = countries()
        .all()
        .iter()
        .filter(|c| c.status.is_assigned())
        .count();
    assert_eq!(assigned, 249);
}

#[test]
fn test_korean_names_for_known_countries() {
    assert_eq!(countries()["KR"].kor_name, "대한민국");
    assert_eq!(countries()["US"].kor_name, "미국");
    assert_eq!(countries()["FRA"].kor_name, "프랑스");
}

#[test]
fn test_currency_details() {
    let yen = &currencies()["JPY"];
    assert_eq!(yen.number, "392");
    assert_eq!(yen.decimals, Some(0));
    assert_eq!(currencies()["XAU"].decimals, None);
    assert_eq!(currencies()["KWD"].decimals, Some(3));
}

#[test]
fn test_language_details() {
    let german = &languages()["deu"];
    assert_eq!(german.name, "German");
    assert_eq!(german.alpha2, "de");
    assert_eq!(german.bibliographic, "ger");
    assert_eq!(languages()["fil"].alpha2, "");
}

#[test]
fn test_tables_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| countries()["DE"].name))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "Germany");
    }
}
