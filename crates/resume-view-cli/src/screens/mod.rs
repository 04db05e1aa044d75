//! Screen rendering and routing

mod help;
mod resume;

use ratatui::prelude::*;

use crate::app::App;
use crate::widgets;

/// Render the current frame from app state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Create main layout with header and footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    widgets::render_header(frame, chunks[0]);
    widgets::render_footer(frame, chunks[2], &hints(app));

    resume::render(frame, chunks[1], app);

    // Help overlays everything else
    if app.help_open {
        help::render(frame, area);
    }
}

fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.help_open {
        vec![("any key", "Close help")]
    } else if app.editing.is_some() {
        vec![
            ("Enter", "Generate"),
            ("Esc", "Cancel"),
            ("Backspace", "Delete"),
        ]
    } else {
        vec![
            ("e", "Edit name"),
            ("r", "Regenerate"),
            ("\u{2191}/\u{2193}", "Select"),
            ("\u{2190}/\u{2192}", "Adjust"),
            ("?", "Help"),
            ("q", "Quit"),
        ]
    }
}
