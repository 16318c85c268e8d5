// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the JSON export

use country_data::export::{self, Dataset};
use country_data::{countries, currencies, languages};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_json_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/out/dataset.json");

    export::write_json(&path, true).expect("export should succeed");

    let content = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        value["countries"].as_array().unwrap().len(),
        countries().len()
    );
    assert_eq!(
        value["currencies"].as_array().unwrap().len(),
        currencies().len()
    );
    assert_eq!(
        value["languages"].as_array().unwrap().len(),
        languages().len()
    );
}

#[test]
fn test_export_keeps_table_order() {
    let value: serde_json::Value =
        serde_json::from_str(&export::to_json(false).unwrap()).unwrap();
    let exported: Vec<&str> = value["countries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["alpha2"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = countries().iter().map(|c| c.alpha2).collect();
    assert_eq!(exported, expected);
}

#[test]
fn test_subset_dataset_serializes() {
    let france = countries()["FR"].clone();
    let dataset = Dataset {
        countries: std::slice::from_ref(&france),
        currencies: &[],
        languages: &[],
    };
    let value: serde_json::Value =
        serde_json::from_str(&dataset.to_json(false).unwrap()).unwrap();
    assert_eq!(value["countries"][0]["name"], "France");
    assert_eq!(value["countries"][0]["currencies"][0], "EUR");
    assert!(value["currencies"].as_array().unwrap().is_empty());
}

#[test]
fn test_write_json_to_unwritable_path_fails() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let err = export::write_json(&blocker.join("dataset.json"), false).unwrap_err();
    assert!(err.to_string().contains("creating"));
}
