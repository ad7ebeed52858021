use serde_json::Value;
use crate::error::Result;

/// decode a dump of tweet objects, either one JSON array or one object per
/// line (blank lines are skipped)
pub fn parse_objects(text: &str) -> Result<Vec<Value>> {
  let trimmed = text.trim_start();
  if trimmed.starts_with('[') {
    let objects: Vec<Value> = serde_json::from_str(trimmed)?;
    return Ok(objects);
  }

  let mut objects = Vec::new();
  for line in text.lines().filter(|l| !l.trim().is_empty()) {
    objects.push(serde_json::from_str(line)?);
  }
  Ok(objects)
}
