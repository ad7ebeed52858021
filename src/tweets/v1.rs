use std::fmt;
use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;
use crate::{
  error::{PostError, Result},
  post::Post,
  resolve::{get_str, get_u64},
};

const PLATFORM: &str = "twitter_v1";

/// fields every v1 tweet object has at its top level
const REQUIRED_FIELDS: [&str; 4] = ["id_str", "user", "text", "created_at"];

const RETWEET_KEY: &str = "retweeted_status";
const QUOTE_KEY: &str = "quoted_status";

/// e.g. "Wed Oct 10 20:19:24 +0000 2018"
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// a tweet object from the v1.1 api.
///
/// the retweeted and quoted tweets (if any) are wrapped once, here, and owned
/// by this tweet. the v1 api never nests a retweet inside a retweeted/quoted
/// tweet, so in practice there is at most one level below the outer tweet;
/// nothing checks for that
#[derive(Debug, Clone)]
pub struct TweetV1<'a> {
  raw: &'a Value,
  retweet: Option<Box<TweetV1<'a>>>,
  quote: Option<Box<TweetV1<'a>>>,
}

impl<'a> TweetV1<'a> {
  /// wrap a tweet object. fails only if `raw` (or an embedded retweet/quote
  /// object) is `null`
  pub fn new(raw: &'a Value) -> Result<Self> {
    if raw.is_null() {
      return Err(PostError::InvalidArgument("the tweet object cannot be null".to_string()));
    }

    // embedded tweets sit directly under a fixed key, no key-path lookup
    let retweet = match raw.get(RETWEET_KEY) {
      Some(sub) => Some(Box::new(TweetV1::new(sub)?)),
      None => None,
    };
    let quote = match raw.get(QUOTE_KEY) {
      Some(sub) => Some(Box::new(TweetV1::new(sub)?)),
      None => None,
    };

    debug!("wrapped tweet {:?} (retweet: {}, quote: {})",
      get_str(raw, &["id_str"]), retweet.is_some(), quote.is_some());

    Ok(TweetV1 { raw, retweet, quote })
  }

  pub fn is_retweet(&self) -> bool {
    self.retweet.is_some()
  }

  pub fn is_quote(&self) -> bool {
    self.quote.is_some()
  }

  /// the wrapped retweeted tweet, if this is a retweet
  pub fn retweet(&self) -> Option<&TweetV1<'a>> {
    self.retweet.as_deref()
  }

  /// the wrapped quoted tweet, if this is a quote tweet
  pub fn quote(&self) -> Option<&TweetV1<'a>> {
    self.quote.as_deref()
  }

  fn str_field(&self, key_path: &[&str]) -> Option<&'a str> {
    get_str(self.raw, key_path)
  }
}

impl<'a> TryFrom<&'a Value> for TweetV1<'a> {
  type Error = PostError;

  fn try_from(raw: &'a Value) -> Result<Self> {
    TweetV1::new(raw)
  }
}

impl<'a> Post for TweetV1<'a> {
  fn platform(&self) -> &'static str {
    PLATFORM
  }

  fn raw(&self) -> &Value {
    self.raw
  }

  fn is_valid(&self) -> Result<bool> {
    // direct top-level lookup, an object without these keys (or a non-object)
    // is not a tweet we can use
    let valid = REQUIRED_FIELDS.iter().all(|field| self.raw.get(*field).is_some());
    Ok(valid)
  }

  fn post_id(&self) -> Result<Option<&str>> {
    Ok(self.raw.get("id_str").and_then(|v| v.as_str()))
  }

  fn link(&self) -> Result<Option<String>> {
    let link = match (self.user_screen_name()?, self.post_id()?) {
      (Some(screen_name), Some(id)) => Some(format!("https://twitter.com/{}/status/{}", screen_name, id)),
      _ => None,
    };
    Ok(link)
  }

  fn user_id(&self) -> Result<Option<&str>> {
    Ok(self.str_field(&["user", "id_str"]))
  }

  fn user_screen_name(&self) -> Result<Option<&str>> {
    Ok(self.str_field(&["user", "screen_name"]))
  }

  fn rt_count(&self) -> Result<Option<u64>> {
    Ok(get_u64(self.raw, &["retweet_count"]))
  }

  fn text(&self) -> Result<Option<&str>> {
    // extended mode (`tweet_mode=extended`) puts the text in `full_text`
    Ok(self.str_field(&["full_text"]).or_else(|| self.str_field(&["text"])))
  }

  fn created_at(&self) -> Result<Option<&str>> {
    Ok(self.str_field(&["created_at"]))
  }

  fn timestamp(&self) -> Result<Option<DateTime<Utc>>> {
    let timestamp = self.created_at()?
      .and_then(|s| DateTime::parse_from_str(s, CREATED_AT_FORMAT).ok())
      .map(|dt| dt.with_timezone(&Utc));
    Ok(timestamp)
  }

  /* -------------------------------- retweet -------------------------------- */

  fn retweeted_post_id(&self) -> Result<Option<&str>> {
    match &self.retweet {
      Some(retweet) => retweet.post_id(),
      None => Ok(None),
    }
  }

  fn retweeted_user_id(&self) -> Result<Option<&str>> {
    match &self.retweet {
      Some(retweet) => retweet.user_id(),
      None => Ok(None),
    }
  }

  fn retweeted_user_screen_name(&self) -> Result<Option<&str>> {
    match &self.retweet {
      Some(retweet) => retweet.user_screen_name(),
      None => Ok(None),
    }
  }

  /* --------------------------------- quote --------------------------------- */

  fn quoted_post_id(&self) -> Result<Option<&str>> {
    match &self.quote {
      Some(quote) => quote.post_id(),
      None => Ok(None),
    }
  }

  fn quoted_user_id(&self) -> Result<Option<&str>> {
    match &self.quote {
      Some(quote) => quote.user_id(),
      None => Ok(None),
    }
  }

  fn quoted_user_screen_name(&self) -> Result<Option<&str>> {
    match &self.quote {
      Some(quote) => quote.user_screen_name(),
      None => Ok(None),
    }
  }
}

impl fmt::Display for TweetV1<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let screen_name = self.str_field(&["user", "screen_name"]).unwrap_or("-");
    let link = self.link().ok().flatten().unwrap_or_else(|| "-".to_string());
    write!(f, "TweetV1 object from @{}\nLink: {}", screen_name, link)
  }
}
