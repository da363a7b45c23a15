//! The `FactSource` trait — the fetch-service seam.
//!
//! Implemented by transport backends (the reqwest client in
//! `pawfeed-cli`, scripted mocks in tests). The controller depends on
//! this abstraction, not on any concrete transport.

use std::future::Future;

use crate::fact::{Fact, FactType};

/// An endpoint that serves batches of facts.
///
/// One invocation issues one request. The source may return fewer than
/// `amount` items when its pool is exhausted; callers must not assume a
/// fixed page size. An error never carries partial data.
///
/// Returned futures are `Send` so the trait can be used on
/// multi-threaded async runtimes.
pub trait FactSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn fetch(
    &self,
    kind: FactType,
    amount: usize,
  ) -> impl Future<Output = Result<Vec<Fact>, Self::Error>> + Send + '_;
}
