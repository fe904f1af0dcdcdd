use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use resadmin::model::{DraftsModel, ResourcesModel};

/// Cut `text` to at most `max_width` terminal columns, marking the cut with "…"
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Render the PDF list for the current scope
pub fn render_resource_list(
    f: &mut Frame,
    area: Rect,
    resources: &ResourcesModel,
    drafts: &DraftsModel,
    scope_label: Option<String>,
    is_focused: bool,
) {
    let loading = if resources.is_loading() { " (loading…)" } else { "" };
    let title = match &scope_label {
        Some(scope) => format!("PDFs: {}{}", scope, loading),
        None => "PDFs".to_string(),
    };
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    if resources.pdfs.is_empty() {
        let message = if scope_label.is_none() {
            "Select branch, semester, category and subject to list PDFs"
        } else if resources.is_loading() {
            "Loading…"
        } else {
            "No PDFs found"
        };
        let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    // borders(2) + highlight symbol(2)
    let available_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = resources
        .pdfs
        .iter()
        .map(|pdf| match &drafts.rename {
            Some(draft) if draft.target == pdf.name => {
                let prefix = "✎ ";
                let text = truncate_to_width(
                    &draft.new_name,
                    available_width.saturating_sub(prefix.width() + 1),
                );
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, Style::default().fg(Color::Yellow)),
                    Span::styled(text, Style::default().fg(Color::Yellow)),
                    Span::styled("▏", Style::default().fg(Color::Cyan)),
                ]))
            }
            _ => ListItem::new(Span::raw(truncate_to_width(&pdf.name, available_width))),
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(resources.selected_index);
    f.render_stateful_widget(list, area, &mut state);
}
