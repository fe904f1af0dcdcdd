use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use resadmin::model::{PreviewState, PreviewStatus};
use resadmin::utils;

use super::layout::centered;

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, pdf_name: &str, scope: Option<String>) {
    let prompt_text = format!(
        "Delete this PDF from the server?\n\n\
        File: {}\n\
        Scope: {}\n\n\
        WARNING: This action cannot be undone!\n\n\
        Continue? (y/n)",
        pdf_name,
        scope.unwrap_or_else(|| "-".to_string()),
    );

    let prompt_area = centered(f.area(), 56, 12);
    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render a blocking alert; Enter or Esc dismisses it
pub fn render_alert(f: &mut Frame, message: &str) {
    let is_error = message.starts_with("Error");
    let (title, color) = if is_error {
        ("Error", Color::Red)
    } else {
        ("Notice", Color::Yellow)
    };

    let width = 60u16;
    // Rough wrapped height: text lines + blank + hint + borders
    let text_lines = (message.chars().count() as u16 / (width - 4)) + 1;
    let area = centered(f.area(), width, text_lines + 5);

    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let alert = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(alert, area);
}

/// At most `page_rows` page rows are built
fn preview_lines(state: &PreviewState, has_open_command: bool, page_rows: usize) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Yellow);
    let mut lines = vec![Line::from(vec![
        Span::styled("URL: ", label),
        Span::raw(state.url.clone()),
    ])];

    match &state.status {
        PreviewStatus::Loading => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Downloading…",
                Style::default().fg(Color::DarkGray),
            )));
        }
        PreviewStatus::Failed(message) => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Preview unavailable: {}", message),
                Style::default().fg(Color::Red),
            )));
        }
        PreviewStatus::Ready(document) => {
            let summary = &document.summary;
            lines.push(Line::from(vec![
                Span::styled("Version: ", label),
                Span::raw(format!("PDF {}", summary.version)),
                Span::raw("  "),
                Span::styled("Size: ", label),
                Span::raw(utils::format_bytes(summary.size_bytes)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Saved to: ", label),
                Span::raw(document.local_path.display().to_string()),
            ]));
            lines.push(Line::from(""));

            let count = summary.page_count;
            lines.push(Line::from(vec![
                Span::styled("Pages: ", label),
                Span::raw(count.to_string()),
            ]));
            let first = state.scroll_offset.saturating_add(1);
            for page in (first..=count).take(page_rows) {
                lines.push(Line::from(format!("  ▭ Page {}", page)));
            }

            if has_open_command {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "o: open in viewer",
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    lines
}

/// Render the preview modal
pub fn render_preview(f: &mut Frame, state: &PreviewState, has_open_command: bool) {
    let area = f.area();
    let popup_area = centered(
        area,
        (area.width * 7 / 10).max(40),
        (area.height * 7 / 10).max(10),
    );

    let page_rows = popup_area.height as usize;
    let paragraph = Paragraph::new(preview_lines(state, has_open_command, page_rows))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Preview: {} (Esc to close)", state.name))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}
