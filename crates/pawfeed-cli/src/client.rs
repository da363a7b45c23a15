//! Async HTTP client for a fact endpoint — the [`FactSource`] used in
//! production.

use std::time::Duration;

use pawfeed_core::{
  fact::{Fact, FactType},
  source::FactSource,
};
use reqwest::Client;
use thiserror::Error;

/// Connection settings for the fact endpoint.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Transport failure, timeout, and non-2xx status all collapse into this
/// one kind; the endpoint has no structured error body worth preserving.
#[derive(Debug, Error)]
#[error("network error: {0}")]
pub struct NetworkError(String);

impl From<reqwest::Error> for NetworkError {
  fn from(e: reqwest::Error) -> Self {
    Self(e.to_string())
  }
}

/// HTTP [`FactSource`] backed by reqwest.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self, NetworkError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self) -> String {
    format!(
      "{}/facts/random",
      self.config.base_url.trim_end_matches('/')
    )
  }
}

impl FactSource for ApiClient {
  type Error = NetworkError;

  /// `GET {base}/facts/random?animal_type=<filter>&amount=<n>`
  async fn fetch(
    &self,
    kind: FactType,
    amount: usize,
  ) -> Result<Vec<Fact>, NetworkError> {
    let resp = self
      .client
      .get(self.url())
      .query(&[
        ("animal_type", kind.wire_param().to_string()),
        ("amount", amount.to_string()),
      ])
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(NetworkError(format!(
        "GET /facts/random → {}",
        resp.status()
      )));
    }
    resp.json().await.map_err(NetworkError::from)
  }
}
