//! Feed state and its reducer.
//!
//! [`FeedState`] is the single source of truth for the presentation
//! layer. All mutation flows through [`FeedState::apply`]; there is no
//! other write path.

use crate::fact::{Fact, FactType};

// ─── State ───────────────────────────────────────────────────────────────────

/// The accumulated state of one fact feed.
///
/// A fresh feed starts scoped to [`FactType::Both`] with no facts, not
/// loading, and no error. Nothing persists beyond the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
  /// The filter the current session is scoped to.
  pub selected: FactType,
  /// Facts in arrival order. Append-only within a filter session;
  /// duplicates from the source are kept as-is, never deduplicated.
  pub facts:    Vec<Fact>,
  /// True for the duration of exactly one in-flight request.
  pub loading:  bool,
  /// Message from the most recent failed load. Coexists with `facts`:
  /// a failed later page keeps earlier pages on screen.
  pub error:    Option<String>,
}

// ─── Actions ─────────────────────────────────────────────────────────────────

/// State transitions accepted by [`FeedState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
  /// Switch the session filter. Clears facts and error. Does not start a
  /// load — that is the controller's job.
  SelectType(FactType),
  FetchStarted,
  /// Append a page of facts in received order.
  FetchSucceeded(Vec<Fact>),
  FetchFailed(String),
  /// Replace the whole list. Manual-override path, used by tests.
  SetFacts(Vec<Fact>),
}

impl FeedState {
  /// Apply one action. Pure state transition; no I/O.
  pub fn apply(&mut self, action: FeedAction) {
    match action {
      FeedAction::SelectType(kind) => {
        self.selected = kind;
        self.facts.clear();
        self.error = None;
      }
      FeedAction::FetchStarted => {
        self.loading = true;
        self.error = None;
      }
      FeedAction::FetchSucceeded(mut new_facts) => {
        self.facts.append(&mut new_facts);
        self.loading = false;
      }
      FeedAction::FetchFailed(message) => {
        self.loading = false;
        self.error = Some(message);
      }
      FeedAction::SetFacts(facts) => {
        self.facts = facts;
      }
    }
  }
}
