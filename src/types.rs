// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core record types for country-data
//!
//! Every record borrows from the compiled-in tables, so all string fields
//! are `&'static str`. Only the derived flag glyph is owned.

use serde::Serialize;
use std::fmt;

/// Recognition state of a code in ISO 3166-1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Assigned,
    #[serde(rename = "user assigned")]
    UserAssigned,
    #[serde(rename = "exceptionally reserved")]
    ExceptionallyReserved,
    #[serde(rename = "transitionally reserved")]
    TransitionallyReserved,
    #[serde(rename = "indeterminately reserved")]
    IndeterminatelyReserved,
    Reserved,
    Deleted,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Assigned => "assigned",
            Status::UserAssigned => "user assigned",
            Status::ExceptionallyReserved => "exceptionally reserved",
            Status::TransitionallyReserved => "transitionally reserved",
            Status::IndeterminatelyReserved => "indeterminately reserved",
            Status::Reserved => "reserved",
            Status::Deleted => "deleted",
        }
    }

    /// Parse a status label. Accepts the ISO wording, hyphenated and
    /// underscored variants, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "assigned" => Some(Status::Assigned),
            "user assigned" => Some(Status::UserAssigned),
            "exceptionally reserved" => Some(Status::ExceptionallyReserved),
            "transitionally reserved" => Some(Status::TransitionallyReserved),
            "indeterminately reserved" => Some(Status::IndeterminatelyReserved),
            "reserved" => Some(Status::Reserved),
            "deleted" => Some(Status::Deleted),
            _ => None,
        }
    }

    pub fn is_assigned(self) -> bool {
        self == Status::Assigned
    }

    pub fn all() -> &'static [Status] {
        &[
            Status::Assigned,
            Status::UserAssigned,
            Status::ExceptionallyReserved,
            Status::TransitionallyReserved,
            Status::IndeterminatelyReserved,
            Status::Reserved,
            Status::Deleted,
        ]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A country, territory, or reserved code from ISO 3166-1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub alpha2: &'static str,
    /// Empty for codes that were never given an alpha-3 (e.g. the reserved `UK`)
    pub alpha3: &'static str,
    pub name: &'static str,
    /// Korean name; empty when no established rendering exists
    pub kor_name: &'static str,
    pub status: Status,
    pub currencies: &'static [&'static str],
    /// ISO 639-2/T codes, most widely used first
    pub languages: &'static [&'static str],
    #[serde(rename = "countryCallingCodes")]
    pub calling_codes: &'static [&'static str],
    pub ioc: &'static str,
    pub emoji: String,
}

/// An ISO 4217 currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub number: &'static str,
    /// Minor units; `None` for funds and metals with no defined subdivision
    pub decimals: Option<u8>,
    pub symbol: &'static str,
}

/// An ISO 639-2 language, cross-referenced to ISO 639-1 where one exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    /// ISO 639-2/B code, empty when identical to `alpha3`
    pub bibliographic: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for status in Status::all() {
            assert_eq!(Status::parse(status.as_str()), Some(*status));
            assert!(!status.as_str().is_empty());
        }
    }

    #[test]
    fn status_parse_is_lenient_about_separators() {
        assert_eq!(Status::parse("User-Assigned"), Some(Status::UserAssigned));
        assert_eq!(
            Status::parse("exceptionally_reserved"),
            Some(Status::ExceptionallyReserved)
        );
        assert_eq!(Status::parse("retired"), None);
    }

    #[test]
    fn status_serializes_as_iso_wording() {
        let json = serde_json::to_string(&Status::TransitionallyReserved).unwrap();
        assert_eq!(json, "\"transitionally reserved\"");
    }
}
