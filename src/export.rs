// SPDX-License-Identifier: PMPL-1.0-or-later

//! JSON snapshot of the full dataset

use crate::registry;
use crate::types::{Country, Currency, Language};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct Dataset<'a> {
    pub countries: &'a [Country],
    pub currencies: &'a [Currency],
    pub languages: &'a [Language],
}

impl Dataset<'static> {
    /// Snapshot of the compiled-in tables.
    pub fn global() -> Self {
        Self {
            countries: registry::countries().all(),
            currencies: registry::currencies().all(),
            languages: registry::languages().all(),
        }
    }
}

impl Dataset<'_> {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

pub fn to_json(pretty: bool) -> Result<String> {
    Dataset::global().to_json(pretty)
}

/// Write the dataset to `path`, creating parent directories as needed.
pub fn write_json(path: &Path, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = to_json(pretty)?;
    fs::write(path, &json).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = json.len(), "dataset exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_uses_camel_case_country_fields() {
        let value: serde_json::Value = serde_json::from_str(&to_json(false).unwrap()).unwrap();
        let finland = value["countries"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["alpha2"] == "FI")
            .unwrap();
        assert_eq!(finland["korName"], "핀란드");
        assert_eq!(finland["status"], "assigned");
        assert_eq!(finland["countryCallingCodes"][0], "+358");
        assert_eq!(finland["emoji"], "\u{1F1EB}\u{1F1EE}");
    }

    #[test]
    fn pretty_output_is_multiline() {
        let pretty = to_json(true).unwrap();
        let compact = to_json(false).unwrap();
        assert!(pretty.lines().count() > 1);
        assert_eq!(compact.lines().count(), 1);
    }

    #[test]
    fn currencies_without_minor_units_serialize_null() {
        let value: serde_json::Value = serde_json::from_str(&to_json(false).unwrap()).unwrap();
        let gold = value["currencies"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["code"] == "XAU")
            .unwrap();
        assert!(gold["decimals"].is_null());
    }
}
