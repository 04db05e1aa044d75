//! Animated spinner widget for loading states

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme;

/// Spinner animation frames
const SPINNER_FRAMES: &[&str] = &[
    "\u{280B}", // Braille dots for smooth animation
    "\u{2819}",
    "\u{2839}",
    "\u{2838}",
    "\u{283C}",
    "\u{2834}",
    "\u{2826}",
    "\u{2827}",
    "\u{2807}",
    "\u{280F}",
];

/// Get the current spinner frame based on time
pub fn get_spinner_frame() -> &'static str {
    let frame_idx = (std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        / 80) as usize
        % SPINNER_FRAMES.len();
    SPINNER_FRAMES[frame_idx]
}

/// Render a vertically centered busy indicator with a label
pub fn render_busy(frame: &mut Frame, area: Rect, label: &str) {
    let content = Line::from(vec![
        Span::styled(get_spinner_frame(), Style::default().fg(theme::accent())),
        Span::styled(format!(" {}", label), Style::default().fg(theme::subtle())),
    ]);

    let middle = Rect::new(
        area.x,
        area.y + area.height / 2,
        area.width,
        1.min(area.height),
    );
    let spinner = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(spinner, middle);
}
