use thiserror::Error;

/// errors produced while wrapping, storing or exporting posts.
///
/// a missing field is never an error: accessors return `Ok(None)` for that
#[derive(Debug, Error)]
pub enum PostError {
  /// the raw post object was null, or a value handed to a constructor was unusable
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  /// the platform variant left this accessor to the trait default
  #[error("{platform} does not implement `{accessor}`")]
  NotImplemented {
    platform: &'static str,
    accessor: &'static str,
  },

  #[error("store error: {0}")]
  Store(String),

  #[error("config error: {0}")]
  Config(String),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PostError>;
