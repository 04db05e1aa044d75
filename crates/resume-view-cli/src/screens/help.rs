//! Help overlay showing keyboard shortcuts

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let width = 44;
    let height = 16;
    let modal_area = centered_rect(width, height, area);

    // Clear the background
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(Span::styled(
            " Keyboard Shortcuts ",
            Style::default().fg(theme::accent()).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::accent()));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let lines = vec![
        Line::from(Span::styled(
            "Resume",
            Style::default().fg(theme::accent()).bold(),
        )),
        shortcut_line("e", "Edit the name"),
        shortcut_line("Enter", "Generate (while editing)"),
        shortcut_line("r", "Regenerate for current name"),
        shortcut_line("PgUp/PgDn", "Scroll the resume"),
        Line::from(""),
        Line::from(Span::styled(
            "Preferences",
            Style::default().fg(theme::accent()).bold(),
        )),
        shortcut_line("\u{2191}/\u{2193} or j/k", "Select a row"),
        shortcut_line("\u{2190}/\u{2192} or h/l", "Adjust the value"),
        Line::from(""),
        Line::from(Span::styled(
            "General",
            Style::default().fg(theme::accent()).bold(),
        )),
        shortcut_line("?", "This help screen"),
        shortcut_line("q", "Quit application"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Create a formatted shortcut line with key and description
fn shortcut_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<14}", key), Style::default().fg(theme::text())),
        Span::styled(description.to_string(), Style::default().fg(theme::subtle())),
    ])
}

fn centered_rect(width: u16, height: u16, parent: Rect) -> Rect {
    let x = parent.x + (parent.width.saturating_sub(width)) / 2;
    let y = parent.y + (parent.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(parent.width), height.min(parent.height))
}
