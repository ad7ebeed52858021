//! the Iffy News list of low-credibility domains (https://iffy.news/).
//!
//! downloading the sheet is left to the caller; this module turns the sheet's
//! CSV export into the local domain list and replaces the old list on disk
//! without ever leaving a partial file behind

use std::{io::Write, path::Path};
use log::{error, info};
use tempfile::NamedTempFile;
use crate::error::{PostError, Result};

/// CSV export url of one sheet of a google spreadsheet
pub fn sheet_csv_url(sheet_id: &str, sheet_name: &str) -> String {
  format!("https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:csv&sheet={}",
    sheet_id, sheet_name)
}

/// values of `column` (matched against the header row) in row order, skipping
/// empty cells. quoted cells may span lines
pub fn parse_domains(text: &str, column: &str) -> Result<Vec<String>> {
  let mut reader = csv::ReaderBuilder::new()
    .flexible(true)
    .from_reader(text.as_bytes());
  let index = reader.headers()?.iter().position(|name| name.trim() == column)
    .ok_or_else(|| PostError::InvalidArgument(format!("the sheet has no `{}` column", column)))?;

  let mut domains = Vec::new();
  for record in reader.records() {
    let record = record?;
    match record.get(index).map(str::trim) {
      Some(cell) if !cell.is_empty() => domains.push(cell.to_string()),
      _ => {}
    }
  }
  Ok(domains)
}

/// replace the list at `path` with `domains`, one `{domain}*` per line.
///
/// the new list goes to a uniquely named temp file in the same directory which
/// is then renamed over `path`, so if anything fails the previous list is left
/// as it was. an empty list is refused
pub fn write_domain_list(path: &Path, domains: &[String]) -> Result<()> {
  if domains.is_empty() {
    error!("refusing to replace {} with an empty domain list", path.display());
    return Err(PostError::InvalidArgument("no domains to write".to_string()));
  }

  let dir = match path.parent() {
    Some(dir) if !dir.as_os_str().is_empty() => dir,
    _ => Path::new("."),
  };
  // the temp file deletes itself if we bail out before `persist`
  let written = (|| -> Result<()> {
    let mut file = NamedTempFile::new_in(dir)?;
    for domain in domains {
      writeln!(file, "{}*", domain)?;
    }
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
  })();

  if let Err(e) = written {
    error!("problem writing the new domain list to {}: {}", path.display(), e);
    return Err(e);
  }
  info!("wrote {} domains to {}", domains.len(), path.display());
  Ok(())
}

/// `parse_domains` then `write_domain_list`
pub fn update_domain_list(csv: &str, column: &str, path: &Path) -> Result<usize> {
  let domains = parse_domains(csv, column).map_err(|e| {
    error!("problem reading the new iffy list: {}", e);
    e
  })?;
  write_domain_list(path, &domains)?;
  Ok(domains.len())
}
