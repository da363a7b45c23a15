//! TUI rendering — header, feed pane, status bar.

pub mod feed;

use chrono::Local;
use pawfeed_core::fact::FactType;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::App;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, feed, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // feed
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  feed::draw(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn filter_tab(label: &str, kind: FactType, selected: FactType) -> Span<'_> {
  let style = if kind == selected {
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::White)
  };
  Span::styled(format!(" {label} "), style)
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let selected = app.controller.state().selected;
  let date = Local::now().format("%Y-%m-%d").to_string();

  let tabs = vec![
    Span::styled(
      " pawfeed ",
      Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    filter_tab("[c] cat", FactType::Cat, selected),
    filter_tab("[d] dog", FactType::Dog, selected),
    filter_tab("[b] both", FactType::Both, selected),
  ];
  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::DarkGray),
  );

  // Simple left-right header: pad the middle.
  let left_width: u16 = tabs
    .iter()
    .map(|s| s.content.len() as u16)
    .sum();
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let mut spans = tabs;
  spans.push(Span::raw(" ".repeat(pad as usize)));
  spans.push(right);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let state = app.controller.state();

  let (mode_label, mode_bg) = if state.loading {
    ("LOADING", Color::Yellow)
  } else if state.error.is_some() {
    ("ERROR", Color::Red)
  } else {
    ("FEED", Color::Cyan)
  };

  let status = if let Some(error) = &state.error {
    format!("{error}  [r] retry")
  } else {
    "↑↓/jk scroll  c/d/b filter  q quit".to_string()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(mode_bg)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
