use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use resadmin::Focus;

/// What the legend needs to know to pick hotkeys
#[derive(Debug, Clone, Copy)]
pub struct LegendContext {
    pub vim_mode: bool,
    pub focus: Focus,
    pub renaming: bool,
    pub has_open_command: bool,
}

fn key(k: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(k, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(ctx: LegendContext) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if ctx.renaming {
        hotkey_spans.extend(key("Enter", ":Save  "));
        hotkey_spans.extend(key("Esc", ":Cancel rename"));
        return hotkey_spans;
    }

    if ctx.focus.is_text_input() {
        hotkey_spans.extend(key("Enter", ":Upload  "));
        hotkey_spans.extend(key("Tab", ":Next field  "));
        hotkey_spans.extend(key("Esc", ":Leave field"));
        return hotkey_spans;
    }

    hotkey_spans.extend(key("Tab/⇧Tab", ":Focus  "));

    match ctx.focus {
        Focus::Filter(_) => {
            let cycle = if ctx.vim_mode { "h/l" } else { "←/→" };
            hotkey_spans.extend(key(cycle, ":Change  "));
            hotkey_spans.extend(key("Enter", ":Choose  "));
            hotkey_spans.extend(key("Bksp", ":Clear  "));
        }
        Focus::Resources => {
            let nav = if ctx.vim_mode { "j/k" } else { "↑/↓" };
            hotkey_spans.extend(key(nav, ":Nav  "));
            hotkey_spans.extend(key("Enter", ":Preview  "));
            hotkey_spans.extend(key("e", ":Rename  "));
            hotkey_spans.extend(key("d", ":Delete  "));
        }
        Focus::PdfName | Focus::FilePath => {}
    }

    hotkey_spans.extend(key("u", ":Upload  "));
    hotkey_spans.extend(key("r", ":Refresh  "));
    if ctx.has_open_command {
        hotkey_spans.extend(key("o", ":Open (in preview)  "));
    }
    hotkey_spans.extend(key("L", ":Logout  "));
    hotkey_spans.extend(key("q", ":Quit"));

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(ctx: LegendContext) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, ctx: LegendContext) {
    f.render_widget(build_legend_paragraph(ctx), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, ctx: LegendContext) -> u16 {
    // Count lines WITHOUT block borders; line_count() miscounts with a block attached
    let paragraph_for_counting = Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))])
        .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
