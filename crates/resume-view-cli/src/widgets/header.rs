//! Header widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme;

/// Render the application header
pub fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled("\u{270E} ", Style::default().fg(theme::accent())),
        Span::styled("resume", Style::default().fg(theme::text()).bold()),
        Span::styled("-view ", Style::default().fg(theme::accent()).bold()),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION"), " "),
            Style::default().fg(theme::subtle()),
        ),
        Span::styled("\u{2502} ", Style::default().fg(theme::subtle())),
        Span::styled(
            "Random Resume Viewer",
            Style::default().fg(theme::subtle()).italic(),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::accent()))
            .border_type(ratatui::widgets::BorderType::Rounded),
    );

    frame.render_widget(title, area);
}
