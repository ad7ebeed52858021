use std::{fs, path::PathBuf};
use super::{config::Config, error::PostError};

#[test]
fn config_test_defaults() {
  let config = Config::default();
  assert_eq!(config.platform, "twitter");
  assert_eq!(config.iffy.sheet_name, "Iffy-news");
  assert_eq!(config.iffy.url_column, "URL");
  assert_eq!(config.iffy.file, None);
}

#[test]
fn config_test_partial_file() {
  let config = Config::parse("[iffy]\nfile = \"data/iffy_list.txt\"\n").unwrap();
  assert_eq!(config.platform, "twitter");
  assert_eq!(config.iffy.url_column, "URL");
  assert_eq!(config.iffy.file, Some(PathBuf::from("data/iffy_list.txt")));
}

#[test]
fn config_test_full_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("top-fibers.toml");
  fs::write(&path, "platform = \"twitter_v1\"\n\n[iffy]\nsheet_name = \"Sheet1\"\nurl_column = \"Domain\"\n").unwrap();
  let config = Config::load(&path).unwrap();
  assert_eq!(config.platform, "twitter_v1");
  assert_eq!(config.iffy.sheet_name, "Sheet1");
  assert_eq!(config.iffy.url_column, "Domain");
}

#[test]
fn config_test_errors() {
  assert!(matches!(Config::parse("platform = 3"), Err(PostError::Config(_))));
  let dir = tempfile::tempdir().unwrap();
  assert!(matches!(Config::load(&dir.path().join("missing.toml")), Err(PostError::Io(_))));
}

#[test]
fn config_test_csv_url_uses_sheet_name() {
  let config = Config::parse("[iffy]\nsheet_name = \"Sheet1\"\n").unwrap();
  assert_eq!(config.iffy.csv_url("abc123"),
    "https://docs.google.com/spreadsheets/d/abc123/gviz/tq?tqx=out:csv&sheet=Sheet1");
  assert!(Config::default().iffy.csv_url("abc123").ends_with("&sheet=Iffy-news"));
}
