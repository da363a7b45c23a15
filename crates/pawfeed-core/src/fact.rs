//! Fact types — the unit of content served by a fact source.
//!
//! The wire shape mirrors the upstream cat-fact JSON documents (`_id`,
//! `__v`, `updatedAt`, ...). Serde renames keep the Rust field names
//! conventional without a separate translation layer.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Animal ──────────────────────────────────────────────────────────────────

/// The animal a fact concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animal {
  Cat,
  Dog,
}

impl Animal {
  /// The wire spelling, as it appears in the `source` field and in the
  /// `animal_type` query parameter.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Cat => "cat",
      Self::Dog => "dog",
    }
  }
}

impl fmt::Display for Animal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── FactType ────────────────────────────────────────────────────────────────

/// The filter a feed session is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactType {
  Cat,
  Dog,
  #[default]
  Both,
}

impl FactType {
  /// The `animal_type` query-parameter value for this filter.
  ///
  /// `Both` maps to the literal `"cat,dog"`. The upstream endpoint
  /// compares this value for exact string equality rather than treating
  /// it as a union, so the spelling must not change.
  pub fn wire_param(&self) -> &'static str {
    match self {
      Self::Cat => "cat",
      Self::Dog => "dog",
      Self::Both => "cat,dog",
    }
  }
}

impl fmt::Display for FactType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Cat => "cat",
      Self::Dog => "dog",
      Self::Both => "both",
    })
  }
}

impl FromStr for FactType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "cat" => Ok(Self::Cat),
      "dog" => Ok(Self::Dog),
      "both" => Ok(Self::Both),
      other => Err(Error::UnknownFactType(other.to_string())),
    }
  }
}

// ─── Fact ────────────────────────────────────────────────────────────────────

/// A single cat or dog fact. Immutable once fetched; the feed only ever
/// appends to or replaces its collection, never edits a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
  /// Opaque upstream identifier. Repeated requests may return the same
  /// fact again; callers must tolerate duplicates.
  #[serde(rename = "_id")]
  pub id:         String,
  /// Document revision counter from the upstream store.
  #[serde(rename = "__v", default)]
  pub version:    u32,
  pub text:       String,
  /// Which animal the fact concerns. The wire calls this `source`.
  #[serde(rename = "source")]
  pub animal:     Animal,
  pub updated_at: DateTime<Utc>,
  /// Soft-delete marker; deleted facts may still appear in responses.
  #[serde(default)]
  pub deleted:    bool,
  /// How many times the upstream service has served this fact.
  #[serde(default)]
  pub sent_count: u32,
}
