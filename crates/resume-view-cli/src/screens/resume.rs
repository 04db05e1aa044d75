//! Main screen: preference sidebar and resume panel

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use resume_view_core::prefs::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use resume_view_core::{DisplayBlock, DisplayPreferences, TextStyle};

use crate::app::App;
use crate::theme;
use crate::widgets;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(area);

    render_sidebar(frame, columns[0], app);
    render_resume_panel(frame, columns[1], app);
}

fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " Preferences ",
            Style::default().fg(theme::accent()),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::border()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name row / input
            Constraint::Min(0),    // Preference rows
        ])
        .split(inner);

    render_name_row(frame, chunks[0], app);
    render_pref_rows(frame, chunks[1], app);
}

fn render_name_row(frame: &mut Frame, area: Rect, app: &App) {
    let (line, border_color) = match &app.editing {
        Some(buffer) => (
            Line::from(vec![
                Span::styled(buffer.clone(), Style::default().fg(theme::text())),
                Span::styled("\u{258C}", Style::default().fg(theme::accent())),
            ]),
            theme::accent(),
        ),
        None => (
            Line::from(Span::styled(
                app.name.clone(),
                Style::default().fg(theme::text()).bold(),
            )),
            theme::border(),
        ),
    };

    let row = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(" Name ", Style::default().fg(theme::accent())))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(row, area);
}

fn render_pref_rows(frame: &mut Frame, area: Rect, app: &App) {
    let rows = [
        ("Font Size", font_size_value(&app.prefs)),
        ("Font Family", app.prefs.font_family.to_string()),
        ("Background", app.prefs.background.to_string()),
        ("Text Color", app.prefs.text_color.to_string()),
    ];

    let mut lines = vec![Line::from("")];
    for (i, (label, value)) in rows.iter().enumerate() {
        let row_style = if i == app.selected {
            Style::default().bg(theme::selection_bg())
        } else {
            Style::default()
        };
        let marker = if i == app.selected { "\u{203A} " } else { "  " };

        lines.push(Line::from(vec![
            Span::styled(marker, row_style.fg(theme::accent())),
            Span::styled(format!("{:<12}", label), row_style.fg(theme::subtle())),
            Span::styled(value.clone(), row_style.fg(theme::text())),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Font size with a small gauge over the 12..=24 range
fn font_size_value(prefs: &DisplayPreferences) -> String {
    let filled = (prefs.font_size() - MIN_FONT_SIZE) as usize;
    let total = (MAX_FONT_SIZE - MIN_FONT_SIZE) as usize;
    format!(
        "{:2} {}{}",
        prefs.font_size(),
        "\u{25B0}".repeat(filled),
        "\u{25B1}".repeat(total - filled)
    )
}

fn render_resume_panel(frame: &mut Frame, area: Rect, app: &App) {
    let tree = app.view();
    let (r, g, b) = tree.background.rgb();
    let panel_bg = Color::Rgb(r, g, b);

    let block = Block::default()
        .title(Span::styled(" Resume ", Style::default().fg(theme::accent())))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::border()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The chosen background applies in every state, including the empty ones
    frame.render_widget(
        Block::default().style(Style::default().bg(panel_bg)),
        inner,
    );

    let content = inner.inner(Margin::new(2, 1));

    if app.fetch.is_loading() {
        widgets::render_busy(frame, content, "Generating resume...");
        return;
    }

    let paragraph = Paragraph::new(blocks_to_lines(&tree.blocks))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, content);
}

fn blocks_to_lines(blocks: &[DisplayBlock]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    push_blocks(&mut lines, blocks, "");
    lines
}

fn push_blocks(lines: &mut Vec<Line<'static>>, blocks: &[DisplayBlock], indent: &str) {
    for block in blocks {
        match block {
            // Drawn by the caller as an animated spinner
            DisplayBlock::Indicator => {}
            DisplayBlock::Heading { text, style } => {
                lines.push(styled_line(format!("{}{}", indent, text), style));
            }
            DisplayBlock::Labeled { label, value, style } => {
                lines.push(styled_line(format!("{}{}: {}", indent, label, value), style));
            }
            DisplayBlock::Paragraph { text, style } => {
                lines.push(styled_line(format!("{}{}", indent, text), style));
            }
            DisplayBlock::Bullet { text, style } => {
                lines.push(styled_line(format!("{}\u{2022} {}", indent, text), style));
            }
            DisplayBlock::Group(inner) => {
                push_blocks(lines, inner, "  ");
                lines.push(Line::from(""));
            }
            DisplayBlock::Spacer => lines.push(Line::from("")),
        }
    }
}

fn styled_line(text: String, style: &TextStyle) -> Line<'static> {
    Line::from(Span::styled(text, text_style(style)))
}

/// Map an instruction style onto what a terminal cell can express. Cells
/// have one size and one font; size and family still travel with the
/// instruction for surfaces that can apply them.
fn text_style(style: &TextStyle) -> Style {
    let (r, g, b) = style.color.rgb();
    let mut mapped = Style::default().fg(Color::Rgb(r, g, b));
    if style.bold {
        mapped = mapped.bold();
    }
    mapped
}
