//! shape of a post as it is persisted, and the storage interface for it.
//!
//! only an in-memory store lives here, relational backends implement
//! `PostStore` elsewhere

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use crate::{
  error::{PostError, Result},
  post::Post,
};

/// a post ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
  pub post_id: String,
  pub user_id: String,
  pub platform: String,
  pub timestamp: Option<DateTime<Utc>>,
  pub url: String,
}

impl NewPost {
  /// build the row from a post's accessors. fails rather than returning a
  /// row with holes if the post id, user id or link is missing
  pub fn from_post(post: &dyn Post, platform: &str) -> Result<Self> {
    let missing = |field: &str| {
      PostError::InvalidArgument(format!("cannot store a post without `{}`", field))
    };
    let post_id = post.post_id()?.ok_or_else(|| missing("post_id"))?.to_string();
    let user_id = post.user_id()?.ok_or_else(|| missing("user_id"))?.to_string();
    let url = post.link()?.ok_or_else(|| missing("link"))?;
    let timestamp = post.timestamp()?;

    Ok(NewPost {
      post_id,
      user_id,
      platform: platform.to_string(),
      timestamp,
      url,
    })
  }
}

/// a stored post, `id` is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRow {
  pub id: i64,
  pub post_id: String,
  pub user_id: String,
  pub platform: String,
  pub timestamp: Option<DateTime<Utc>>,
  pub url: String,
}

pub trait PostStore {
  /// insert a post, returning its `post_id`. a failed insert stores nothing
  fn add_post(&mut self, post: NewPost) -> Result<String>;

  /// every stored post, in insertion order
  fn get_all_posts(&self) -> Result<Vec<PostRow>>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
  rows: Vec<PostRow>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }
}

impl PostStore for MemoryStore {
  fn add_post(&mut self, post: NewPost) -> Result<String> {
    if self.rows.iter().any(|row| row.post_id == post.post_id && row.platform == post.platform) {
      warn!("post {} ({}) is already stored", post.post_id, post.platform);
      return Err(PostError::Store(format!("duplicate post {}", post.post_id)));
    }

    let id = self.rows.len() as i64 + 1;
    let post_id = post.post_id.clone();
    self.rows.push(PostRow {
      id,
      post_id: post.post_id,
      user_id: post.user_id,
      platform: post.platform,
      timestamp: post.timestamp,
      url: post.url,
    });
    debug!("stored post {} as row {}", post_id, id);

    Ok(post_id)
  }

  fn get_all_posts(&self) -> Result<Vec<PostRow>> {
    if self.rows.is_empty() {
      info!("no posts to fetch");
    }
    Ok(self.rows.clone())
  }
}
