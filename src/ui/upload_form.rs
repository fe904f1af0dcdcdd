use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use resadmin::model::UploadDraft;
use resadmin::Focus;

fn field(title: &str, value: &str, placeholder: &str, focused: bool) -> Paragraph<'static> {
    let mut spans = if value.is_empty() && !focused {
        vec![Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::raw(value.to_string())]
    };
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(border_style),
    )
}

/// Render the upload form (name on the left, file path on the right)
pub fn render_upload_form(f: &mut Frame, area: Rect, draft: &UploadDraft, focus: Focus) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let name_title = if draft.in_flight {
        "PDF name (uploading…)"
    } else {
        "PDF name"
    };

    f.render_widget(
        field(name_title, &draft.pdf_name, "e.g. DA Unit 1", focus == Focus::PdfName),
        chunks[0],
    );
    f.render_widget(
        field(
            "File to upload",
            &draft.file_path,
            "path to a .pdf on this machine",
            focus == Focus::FilePath,
        ),
        chunks[1],
    );
}
