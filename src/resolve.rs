use serde_json::Value;

/// walk `object` one key at a time and return the value at the end of the path.
///
/// `None` as soon as a level is not an object or lacks the next key. an empty
/// path returns `object` itself. a JSON `null` at the end of the path is
/// returned as-is, the typed accessors (`as_str` etc.) turn it into `None`
pub fn get_value<'a>(object: &'a Value, key_path: &[&str]) -> Option<&'a Value> {
  let mut current = object;
  for key in key_path {
    // `Value::get` on an array would index it with a string key and give
    // `None` anyway, but only objects count as a level of the path
    current = current.as_object()?.get(*key)?;
  }
  Some(current)
}

/// same as `get_value`, but only a string terminal counts
pub fn get_str<'a>(object: &'a Value, key_path: &[&str]) -> Option<&'a str> {
  get_value(object, key_path).and_then(|v| v.as_str())
}

/// same as `get_value`, but only a non-negative integer terminal counts
pub fn get_u64(object: &Value, key_path: &[&str]) -> Option<u64> {
  get_value(object, key_path).and_then(|v| v.as_u64())
}
