//! settings for the `top-fibers` binary, read from a TOML file

use std::{fs, path::{Path, PathBuf}};
use serde::{Deserialize, Serialize};
use crate::{
  error::{PostError, Result},
  iffy::sheet_csv_url,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// platform name written into stored posts
  #[serde(default = "default_platform")]
  pub platform: String,
  #[serde(default)]
  pub iffy: IffyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IffyConfig {
  #[serde(default = "default_sheet_name")]
  pub sheet_name: String,
  /// header of the column holding the domains
  #[serde(default = "default_url_column")]
  pub url_column: String,
  /// where the domain list is written when `--file` isn't given
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file: Option<PathBuf>,
}

fn default_platform() -> String {
  "twitter".to_string()
}

fn default_sheet_name() -> String {
  "Iffy-news".to_string()
}

fn default_url_column() -> String {
  "URL".to_string()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      platform: default_platform(),
      iffy: IffyConfig::default(),
    }
  }
}

impl Default for IffyConfig {
  fn default() -> Self {
    Self {
      sheet_name: default_sheet_name(),
      url_column: default_url_column(),
      file: None,
    }
  }
}

impl IffyConfig {
  /// where to download the configured sheet of spreadsheet `sheet_id` as CSV
  pub fn csv_url(&self, sheet_id: &str) -> String {
    sheet_csv_url(sheet_id, &self.sheet_name)
  }
}

impl Config {
  pub fn load(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)?;
    Self::parse(&content)
  }

  pub fn parse(content: &str) -> Result<Self> {
    toml::from_str(content).map_err(|e| PostError::Config(e.to_string()))
  }
}
