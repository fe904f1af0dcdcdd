use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything shown in the bottom bar
pub struct StatusInfo<'a> {
    pub admin_name: Option<&'a str>,
    pub scope: Option<String>,
    pub pdf_count: usize,
    pub selected: Option<&'a str>,
    pub last_refreshed: Option<DateTime<Local>>,
    pub last_error: Option<&'a str>,
}

/// Build the " | "-separated status line (extracted for testability)
pub fn build_status_line(info: &StatusInfo) -> String {
    let mut parts = Vec::new();

    parts.push(format!("Admin: {}", info.admin_name.unwrap_or("not signed in")));

    match &info.scope {
        Some(scope) => {
            parts.push(format!("Scope: {}", scope));
            parts.push(format!("{} PDFs", info.pdf_count));
        }
        None => parts.push("Scope: incomplete".to_string()),
    }

    if let Some(name) = info.selected {
        parts.push(format!("Selected: {}", name));
    }

    if let Some(time) = info.last_refreshed {
        parts.push(format!("Refreshed: {}", time.format("%H:%M:%S")));
    }

    if let Some(error) = info.last_error {
        parts.push(format!("Error: {}", error));
    }

    parts.join(" | ")
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, info: &StatusInfo) {
    let status_line = build_status_line(info);

    // Color the labels (before colons); errors in red
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }

        if part.starts_with("Error:") {
            spans.push(Span::styled(part.to_string(), Style::default().fg(Color::Red)));
        } else if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(label.to_string(), Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value.to_string()));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
