//! Footer widget with keyboard hints

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme;

/// Render the footer with keyboard hints
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let mut result = vec![
                Span::styled(format!("[{}]", key), Style::default().fg(theme::accent())),
                Span::styled(format!(" {}", action), Style::default().fg(theme::text())),
            ];
            if i < hints.len() - 1 {
                result.push(Span::styled(" \u{00B7} ", Style::default().fg(theme::subtle())));
            }
            result
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::border())),
        );

    frame.render_widget(footer, area);
}
