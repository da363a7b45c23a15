//! Feed pane — the scrollable fact list.

use pawfeed_core::fact::Animal;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

/// Render the fact list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let state = app.controller.state();

  let title = if state.loading {
    format!(" Facts ({}) — loading… ", state.facts.len())
  } else {
    format!(" Facts ({}) ", state.facts.len())
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let inner = block.inner(area);
  f.render_widget(block, area);

  if state.facts.is_empty() {
    let hint = if state.loading {
      "Loading facts…"
    } else if state.error.is_some() {
      "Load failed. Press r to retry."
    } else {
      "No facts yet."
    };
    f.render_widget(
      Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let items: Vec<ListItem> = state
    .facts
    .iter()
    .map(|fact| {
      let tag_color = match fact.animal {
        Animal::Cat => Color::Magenta,
        Animal::Dog => Color::Green,
      };

      let text_style = if fact.deleted {
        Style::default().fg(Color::DarkGray)
      } else {
        Style::default()
      };

      ListItem::new(Line::from(vec![
        Span::styled(
          format!("{:<4}", fact.animal.as_str()),
          Style::default().fg(tag_color),
        ),
        Span::styled(fact.text.clone(), text_style),
        Span::styled(
          format!("  · sent {}", fact.sent_count),
          Style::default().fg(Color::DarkGray),
        ),
      ]))
    })
    .collect();

  let mut list_state = ListState::default();
  list_state.select(Some(app.cursor));

  f.render_stateful_widget(
    List::new(items).highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    inner,
    &mut list_state,
  );
}
