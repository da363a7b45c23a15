//! Error types for `pawfeed-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown fact type: {0:?}")]
  UnknownFactType(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
