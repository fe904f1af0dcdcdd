use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use resadmin::model::FilterModel;
use resadmin::FilterField;

use super::layout;

const UNSELECTED: &str = "Select…";

fn value_line(filters: &FilterModel, field: FilterField) -> Line<'static> {
    let label = filters.label(field);
    if label.is_empty() {
        return Line::from(Span::styled(UNSELECTED, Style::default().fg(Color::DarkGray)));
    }

    if field == FilterField::Subject && filters.subject_is_stale() {
        return Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(Color::Red)),
            Span::styled(label, Style::default().fg(Color::Red)),
            Span::styled(" (not offered)", Style::default().fg(Color::DarkGray)),
        ]);
    }

    Line::from(Span::raw(label))
}

/// Render the four filter dropdowns side by side
pub fn render_filters(f: &mut Frame, area: Rect, filters: &FilterModel, focused: Option<FilterField>) {
    let cols = layout::columns(area, FilterField::ALL.len());

    for (field, col) in FilterField::ALL.into_iter().zip(cols) {
        let is_focused = focused == Some(field);
        let border_style = if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let paragraph = Paragraph::new(value_line(filters, field)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.as_str())
                .border_style(border_style),
        );
        f.render_widget(paragraph, col);
    }
}

/// Render the open dropdown list below its filter box
pub fn render_dropdown(
    f: &mut Frame,
    filters_area: Rect,
    filters: &FilterModel,
    field: FilterField,
    highlighted: usize,
) {
    let cols = layout::columns(filters_area, FilterField::ALL.len());
    let Some(index) = FilterField::ALL.iter().position(|f| *f == field) else {
        return;
    };
    let anchor = cols[index];

    let options = filters.options(field);
    let mut items = vec![ListItem::new(Span::styled(
        "(none)",
        Style::default().fg(Color::DarkGray),
    ))];
    items.extend(
        options
            .iter()
            .map(|option| ListItem::new(Span::raw(option.label.clone()))),
    );

    if options.is_empty() {
        // Subject has nothing to offer until branch and semester are set
        items.push(ListItem::new(Span::styled(
            "no options for current selection",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let frame_area = f.area();
    let height = (items.len() as u16 + 2).min(frame_area.height.saturating_sub(anchor.y + 3));
    let dropdown_area = Rect {
        x: anchor.x,
        y: anchor.y + anchor.height,
        width: anchor.width.max(20).min(frame_area.width.saturating_sub(anchor.x)),
        height,
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} (↑↓ Enter Esc)", field.as_str()))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(Some(highlighted));

    f.render_widget(Clear, dropdown_area);
    f.render_stateful_widget(list, dropdown_area, &mut state);
}
