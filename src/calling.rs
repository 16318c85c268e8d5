// SPDX-License-Identifier: PMPL-1.0-or-later

//! International calling codes.
//!
//! Codes are stored as written in ITU-T E.164 listings: a country code,
//! optionally followed by an area prefix for NANP members (`"+1 684"`).
//! Only `assigned` countries contribute; reserved codes such as `UK` would
//! otherwise duplicate their successor's prefix.

use crate::registry::{self, Countries};
use crate::types::Country;
use std::collections::BTreeSet;

/// Numeric sort key: `"+1 684"` becomes `[1, 684]`. Unparseable groups sort last.
fn sort_key(code: &str) -> Vec<u32> {
    code.trim_start_matches('+')
        .split_whitespace()
        .map(|group| group.parse().unwrap_or(u32::MAX))
        .collect()
}

/// Every distinct calling code, ordered numerically (`+1` before `+1 242`
/// before `+7` before `+20`).
pub fn calling_codes() -> Vec<&'static str> {
    calling_codes_in(registry::countries())
}

pub fn calling_codes_in(table: &Countries) -> Vec<&'static str> {
    let distinct: BTreeSet<&'static str> = table
        .iter()
        .filter(|country| country.status.is_assigned())
        .flat_map(|country| country.calling_codes.iter().copied())
        .collect();
    let mut codes: Vec<&'static str> = distinct.into_iter().collect();
    codes.sort_by_cached_key(|code| (sort_key(code), *code));
    codes
}

/// Assigned countries that can be dialled, in table order.
pub fn calling_countries() -> Vec<&'static Country> {
    registry::countries()
        .iter()
        .filter(|country| country.status.is_assigned() && !country.calling_codes.is_empty())
        .collect()
}

/// Assigned countries reachable through `code`.
pub fn countries_for_calling_code(code: &str) -> Vec<&'static Country> {
    registry::countries()
        .iter()
        .filter(|country| {
            country.status.is_assigned() && country.calling_codes.iter().any(|c| *c == code)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_sort_numerically() {
        let codes = calling_codes();
        let position = |code: &str| codes.iter().position(|c| *c == code).unwrap();
        assert_eq!(codes[0], "+1");
        assert!(position("+1") < position("+1 242"));
        assert!(position("+1 876") < position("+7"));
        assert!(position("+7") < position("+20"));
        assert!(position("+98") < position("+211"));
    }

    #[test]
    fn codes_are_distinct() {
        let codes = calling_codes();
        let distinct: BTreeSet<_> = codes.iter().collect();
        assert_eq!(distinct.len(), codes.len());
    }

    #[test]
    fn reserved_rows_do_not_contribute() {
        // +388 only appears on the reserved EU row
        assert!(!calling_codes().contains(&"+388"));
    }

    #[test]
    fn shared_prefixes_list_every_country() {
        let found: Vec<&str> = countries_for_calling_code("+7")
            .iter()
            .map(|c| c.alpha2)
            .collect();
        assert_eq!(found, vec!["KZ", "RU"]);
    }

    #[test]
    fn calling_countries_skip_undialable_territories() {
        let countries = calling_countries();
        assert!(countries.iter().all(|c| !c.calling_codes.is_empty()));
        assert!(!countries.iter().any(|c| c.alpha2 == "BV"));
        assert!(countries.iter().any(|c| c.alpha2 == "FI"));
    }

    #[test]
    fn sort_key_handles_area_prefixes() {
        assert_eq!(sort_key("+1 684"), vec![1, 684]);
        assert_eq!(sort_key("+44"), vec![44]);
        assert_eq!(sort_key("+x"), vec![u32::MAX]);
    }
}
