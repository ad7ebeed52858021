//! a uniform view over social media post objects.
//!
//! raw api objects are wrapped in a platform variant (currently only
//! `tweets::v1::TweetV1`) that implements the `post::Post` accessors. missing
//! fields come back as `None` instead of panicking, see `resolve::get_value`

pub mod config;
pub mod error;
pub mod iffy;
pub mod post;
pub mod resolve;
pub mod store;
pub mod tweets;

pub use error::{PostError, Result};
pub use post::Post;
pub use tweets::v1::TweetV1;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod iffy_test;
