//! the accessor surface every platform variant of a post implements

use chrono::{DateTime, Utc};
use serde_json::Value;
use crate::{
  error::{PostError, Result},
  resolve,
};

/// a social media post wrapped around the raw JSON returned by a platform api.
///
/// `platform` and `raw` are the only required methods. every accessor has a
/// default that returns `PostError::NotImplemented`, so a new variant (e.g.
/// the v2 api, or another platform) has to override each one it supports
/// rather than silently handing back an empty value.
///
/// a field that is simply absent from the raw object is `Ok(None)`, never an
/// `Err`
pub trait Post {
  /// short platform/api name, e.g. "twitter_v1"
  fn platform(&self) -> &'static str;

  /// the raw object this post wraps
  fn raw(&self) -> &Value;

  /// value at the end of `key_path` in the raw object, `None` if any key is missing
  fn get_value(&self, key_path: &[&str]) -> Option<&Value> {
    resolve::get_value(self.raw(), key_path)
  }

  /// true if every field the platform requires is present
  fn is_valid(&self) -> Result<bool> {
    Err(self.not_implemented("is_valid"))
  }

  /// id of this post (never the id of an embedded post)
  fn post_id(&self) -> Result<Option<&str>> {
    Err(self.not_implemented("post_id"))
  }

  /// link to view the post in a browser
  fn link(&self) -> Result<Option<String>> {
    Err(self.not_implemented("link"))
  }

  fn user_id(&self) -> Result<Option<&str>> {
    Err(self.not_implemented("user_id"))
  }

  fn user_screen_name(&self) -> Result<Option<&str>> {
    Err(self.not_implemented("user_screen_name"))
  }

  /// number of times the post was shared. `None` means unknown, not zero
  fn rt_count(&self) -> Result<Option<u64>> {
    Err(self.not_implemented("rt_count"))
  }

  fn text(&self) -> Result<Option<&str>> {
    Err(self.not_implemented("text"))
  }

  /// creation time exactly as the platform formats it
  fn created_at(&self) -> Result<Option<&str>> {
    Err(self.not_implemented("created_at"))
  }

  /// `created_at`, parsed. `None` if absent or not in the platform's format
  fn timestamp(&self) -> Result<Option<DateTime<Utc>>> {
    Err(self.not_implemented("timestamp"))
  }

  /* -------------------------------- retweet -------------------------------- */

  fn retweeted_post_id(&self) -> Result<Option<&str>> {
    Err(self.not_implemented("retweeted_post_id"))
  }

  fn retweeted_user_id(&self) -> Result<Option<&str>> {
    Err(self.not_implemented("retweeted_user_id"))
  }

  fn retweeted_user_screen_name(&self) -> Result<Option<&str>> {
    Err(self.not_implemented("retweeted_user_screen_name"))
  }

  /* --------------------------------- quote --------------------------------- */

  fn quoted_post_id(&self) -> Result<Option<&str>> {
    Err(self.not_implemented("quoted_post_id"))
  }

  fn quoted_user_id(&self) -> Result<Option<&str>> {
    Err(self.not_implemented("quoted_user_id"))
  }

  fn quoted_user_screen_name(&self) -> Result<Option<&str>> {
    Err(self.not_implemented("quoted_user_screen_name"))
  }

  #[doc(hidden)]
  fn not_implemented(&self, accessor: &'static str) -> PostError {
    PostError::NotImplemented { platform: self.platform(), accessor }
  }
}
