//! The bundled mock fact source.
//!
//! Serves `GET /facts/random` over an in-memory pool of generated facts,
//! reproducing the upstream cat-fact endpoint's wire contract. No
//! persistence, no authentication, no pagination cursor: repeated calls
//! return independent random samples, so overlap across calls is normal.

pub mod pool;

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::{Query, State},
  routing::get,
};
use pawfeed_core::fact::Fact;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use pool::FactPool;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `PAWFEED_*` environment variables. Every field has a default so the
/// server runs with no config file at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:      String,
  pub port:      u16,
  /// Number of facts generated into the pool at startup.
  pub pool_size: usize,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:      "127.0.0.1".to_string(),
      port:      3001,
      pool_size: 1000,
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
  pub pool: Arc<FactPool>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the mock server.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/facts/random", get(random_facts))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Handler ──────────────────────────────────────────────────────────────────

fn default_amount() -> usize {
  10
}

#[derive(Debug, Deserialize)]
pub struct RandomParams {
  /// Filter value compared verbatim against each fact's `source` field.
  /// Absent means `"cat"`, matching the upstream default.
  pub animal_type: Option<String>,
  #[serde(default = "default_amount")]
  pub amount:      usize,
}

/// `GET /facts/random?animal_type=<filter>&amount=<n>`
async fn random_facts(
  State(state): State<AppState>,
  Query(params): Query<RandomParams>,
) -> Json<Vec<Fact>> {
  let animal_type = params.animal_type.as_deref().unwrap_or("cat");
  let facts = state.pool.sample(animal_type, params.amount);
  tracing::debug!(
    animal_type,
    amount = params.amount,
    returned = facts.len(),
    "sampled facts"
  );
  Json(facts)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use pawfeed_core::fact::Animal;
  use tower::ServiceExt as _;

  fn test_state(pool_size: usize) -> AppState {
    AppState {
      pool: Arc::new(FactPool::generate(pool_size)),
    }
  }

  async fn get_raw(state: AppState, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = router(state)
      .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
      .await
      .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    (status, bytes.to_vec())
  }

  async fn get_facts(state: AppState, uri: &str) -> Vec<Fact> {
    let (status, body) = get_raw(state, uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).expect("response is a JSON fact array")
  }

  #[tokio::test]
  async fn default_request_returns_ten_cat_facts() {
    let facts = get_facts(test_state(100), "/facts/random").await;

    assert_eq!(facts.len(), 10);
    assert!(facts.iter().all(|f| f.animal == Animal::Cat));
  }

  #[tokio::test]
  async fn amount_parameter_bounds_the_page() {
    let facts =
      get_facts(test_state(100), "/facts/random?animal_type=dog&amount=5")
        .await;

    assert_eq!(facts.len(), 5);
    assert!(facts.iter().all(|f| f.animal == Animal::Dog));
  }

  #[tokio::test]
  async fn combined_literal_draws_from_both_animals() {
    let facts = get_facts(
      test_state(20),
      "/facts/random?animal_type=cat,dog&amount=20",
    )
    .await;

    assert_eq!(facts.len(), 20);
    let cats = facts.iter().filter(|f| f.animal == Animal::Cat).count();
    assert_eq!(cats, 10);
  }

  #[tokio::test]
  async fn unknown_animal_type_returns_empty_array() {
    let facts =
      get_facts(test_state(100), "/facts/random?animal_type=bird").await;
    assert!(facts.is_empty());
  }

  #[tokio::test]
  async fn exhausted_pool_returns_partial_page() {
    let facts = get_facts(
      test_state(6),
      "/facts/random?animal_type=cat,dog&amount=50",
    )
    .await;
    assert_eq!(facts.len(), 6);
  }

  #[tokio::test]
  async fn response_uses_upstream_field_names() {
    let (status, body) =
      get_raw(test_state(4), "/facts/random?animal_type=cat,dog&amount=1")
        .await;
    assert_eq!(status, StatusCode::OK);

    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let first = parsed
      .as_array()
      .and_then(|a| a.first())
      .and_then(|v| v.as_object())
      .expect("array of objects");

    for key in ["_id", "__v", "text", "source", "updatedAt", "deleted", "sentCount"] {
      assert!(first.contains_key(key), "missing wire field {key:?}");
    }
  }

  #[tokio::test]
  async fn non_numeric_amount_is_rejected() {
    let (status, _) =
      get_raw(test_state(10), "/facts/random?amount=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }
}
