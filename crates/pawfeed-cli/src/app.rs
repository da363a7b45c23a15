//! Application state machine and event dispatcher.
//!
//! The app owns the [`FeedController`] and translates terminal input into
//! the three feed intents: select a filter, report the end-of-list
//! boundary, and retry after a failure. Fetches are awaited inline in
//! the event loop; the controller's session mechanism still drops any
//! result that outlives its filter session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pawfeed_core::{
  controller::{FeedController, LoadTicket},
  fact::FactType,
};

use crate::client::ApiClient;

/// Top-level application state.
pub struct App {
  /// Pagination controller; owns the feed state.
  pub controller: FeedController,

  /// Cursor position within the fact list.
  pub cursor: usize,

  /// Shared HTTP client.
  pub client: ApiClient,
}

impl App {
  /// Create an [`App`] with an empty feed.
  pub fn new(client: ApiClient) -> Self {
    Self {
      controller: FeedController::new(),
      cursor: 0,
      client,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Start the first filter session and load its first page.
  pub async fn start(&mut self, kind: FactType) {
    let ticket = self.controller.select_type(kind);
    self.run(ticket).await;
  }

  /// Drive one issued ticket against the HTTP client. Loads are awaited
  /// inline, so the ticket is never stale here; failures land in the
  /// feed's error state and the status bar picks them up.
  async fn run(&mut self, ticket: LoadTicket) {
    self.controller.run_load(&self.client, ticket).await;
  }

  /// The "near end of list" boundary signal from the rendered view.
  async fn boundary_reached(&mut self) {
    if let Some(ticket) = self.controller.load_more() {
      self.run(ticket).await;
    }
  }

  async fn select(&mut self, kind: FactType) {
    if self.controller.state().selected == kind {
      return;
    }
    self.cursor = 0;
    let ticket = self.controller.select_type(kind);
    self.run(ticket).await;
  }

  async fn retry(&mut self) {
    if let Some(ticket) = self.controller.retry() {
      self.run(ticket).await;
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    match key.code {
      // Quit
      KeyCode::Char('q') => return Ok(false),

      // Filter selection
      KeyCode::Char('c') => self.select(FactType::Cat).await,
      KeyCode::Char('d') => self.select(FactType::Dog).await,
      KeyCode::Char('b') => self.select(FactType::Both).await,

      // Retry after a failed load
      KeyCode::Char('r') => self.retry().await,

      // Navigation; reaching the last loaded fact is the boundary signal.
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.controller.state().facts.len();
        if len > 0 && self.cursor + 1 < len {
          self.cursor += 1;
        }
        if len > 0 && self.cursor + 1 == len {
          self.boundary_reached().await;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.cursor > 0 {
          self.cursor -= 1;
        }
      }

      _ => {}
    }
    Ok(true)
  }
}
