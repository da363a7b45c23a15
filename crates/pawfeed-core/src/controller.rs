//! The pagination controller — decides *when* to request more facts and
//! keeps requests serialised.
//!
//! One [`FeedController`] drives one [`FeedState`]. Requests are issued
//! as [`LoadTicket`]s tagged with a session counter; switching filters
//! bumps the session, so a response that arrives for an abandoned
//! session is dropped instead of being spliced into the new one.

use std::fmt;

use crate::{
  fact::{Fact, FactType},
  feed::{FeedAction, FeedState},
  source::FactSource,
};

/// Facts requested per load. Fixed; not configurable at runtime.
pub const PAGE_SIZE: usize = 10;

// ─── LoadTicket ──────────────────────────────────────────────────────────────

/// A claim on the single in-flight request slot.
///
/// Carries what the transport needs (`fact_type`, `amount`) plus the
/// session it was issued under. Tickets are not `Clone`: each one is
/// consumed by exactly one [`FeedController::complete`] call.
#[derive(Debug)]
pub struct LoadTicket {
  session:   u64,
  fact_type: FactType,
  amount:    usize,
}

impl LoadTicket {
  pub fn fact_type(&self) -> FactType {
    self.fact_type
  }

  pub fn amount(&self) -> usize {
    self.amount
  }
}

// ─── FeedController ──────────────────────────────────────────────────────────

/// Serialises loads for one feed.
///
/// State machine per filter session: idle → loading (ticket issued) →
/// idle on success, or idle-with-error on failure. In the error state
/// the boundary trigger is inert; only [`retry`](Self::retry) or a
/// filter switch loads again.
pub struct FeedController {
  state:   FeedState,
  session: u64,
}

impl FeedController {
  pub fn new() -> Self {
    Self {
      state:   FeedState::default(),
      session: 0,
    }
  }

  pub fn state(&self) -> &FeedState {
    &self.state
  }

  /// The boundary-crossing trigger: the presentation layer reports that
  /// the end of the rendered list has come into view. The trigger
  /// carries no payload; the controller decides what, if anything, to
  /// load.
  ///
  /// Returns `None` while a request is in flight (rapid-fire triggers
  /// collapse into a single load) and while the feed is in the error
  /// state (a failed load must not be retried automatically).
  pub fn load_more(&mut self) -> Option<LoadTicket> {
    if self.state.loading || self.state.error.is_some() {
      return None;
    }
    Some(self.issue())
  }

  /// Explicit user retry. Re-requests with the same filter and page
  /// size; gated only by an in-flight request.
  pub fn retry(&mut self) -> Option<LoadTicket> {
    if self.state.loading {
      return None;
    }
    Some(self.issue())
  }

  /// Hard reset to a new filter session. Permitted from any state:
  /// clears the accumulated list and error, invalidates any in-flight
  /// request, and issues exactly one fresh load.
  pub fn select_type(&mut self, kind: FactType) -> LoadTicket {
    self.session += 1;
    self.state.apply(FeedAction::SelectType(kind));
    self.issue()
  }

  fn issue(&mut self) -> LoadTicket {
    self.state.apply(FeedAction::FetchStarted);
    LoadTicket {
      session:   self.session,
      fact_type: self.state.selected,
      amount:    PAGE_SIZE,
    }
  }

  /// Apply the outcome of a load.
  ///
  /// Returns `false` when the ticket's session has been superseded by a
  /// filter switch. The result is then discarded without touching the
  /// state at all — including `loading`, which tracks the *current*
  /// session's request.
  pub fn complete<E: fmt::Display>(
    &mut self,
    ticket: LoadTicket,
    result: Result<Vec<Fact>, E>,
  ) -> bool {
    if ticket.session != self.session {
      return false;
    }
    match result {
      Ok(facts) => self.state.apply(FeedAction::FetchSucceeded(facts)),
      Err(e) => self.state.apply(FeedAction::FetchFailed(e.to_string())),
    }
    true
  }

  /// Drive one ticket to completion against `source`. Returns whether
  /// the result was applied (`false` for a stale ticket).
  pub async fn run_load<S: FactSource>(
    &mut self,
    source: &S,
    ticket: LoadTicket,
  ) -> bool {
    let result = source.fetch(ticket.fact_type(), ticket.amount()).await;
    self.complete(ticket, result)
  }
}

impl Default for FeedController {
  fn default() -> Self {
    Self::new()
  }
}
