//! Keyboard Input Handler
//!
//! Modal layers are handled first (alert, delete confirmation, preview,
//! open dropdown, rename editor, upload text fields), then the keys of the
//! focused pane.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use resadmin::{FilterField, Focus};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    // Blocking alert: nothing else until dismissed
    if app.model.ui.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.model.ui.dismiss_alert();
        }
        return;
    }

    // Handle delete confirmation prompt
    if app.model.ui.confirm_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let request = app.model.confirm_delete();
                app.dispatch(request);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.model.cancel_delete();
            }
            _ => {
                // Ignore other keys while prompt is showing
            }
        }
        return;
    }

    if app.model.ui.preview.is_some() {
        handle_preview_key(app, key);
        return;
    }

    if app.model.ui.open_dropdown.is_some() {
        handle_dropdown_key(app, key);
        return;
    }

    if app.model.drafts.rename.is_some() {
        handle_rename_key(app, key);
        return;
    }

    if app.model.ui.focus.is_text_input() {
        handle_text_field_key(app, key);
        return;
    }

    let vim_mode = app.model.ui.vim_mode;
    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Tab => app.model.ui.cycle_focus(true),
        KeyCode::BackTab => app.model.ui.cycle_focus(false),
        KeyCode::Char('r') => {
            let request = app.model.refresh();
            app.dispatch(request);
        }
        KeyCode::Char('u') => {
            let request = app.model.submit_upload();
            app.dispatch(request);
        }
        KeyCode::Char('L') => app.logout(),
        _ => match app.model.ui.focus {
            Focus::Filter(field) => handle_filter_key(app, field, key, vim_mode),
            Focus::Resources => handle_resources_key(app, key, vim_mode),
            Focus::PdfName | Focus::FilePath => {}
        },
    }
}

fn is_down(code: KeyCode, vim_mode: bool) -> bool {
    code == KeyCode::Down || (vim_mode && code == KeyCode::Char('j'))
}

fn is_up(code: KeyCode, vim_mode: bool) -> bool {
    code == KeyCode::Up || (vim_mode && code == KeyCode::Char('k'))
}

fn handle_filter_key(app: &mut App, field: FilterField, key: KeyEvent, vim_mode: bool) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.model.open_dropdown(field),
        KeyCode::Right | KeyCode::Char('l') if key.code == KeyCode::Right || vim_mode => {
            let request = app.model.cycle_filter(field, true);
            app.dispatch(request);
        }
        KeyCode::Left | KeyCode::Char('h') if key.code == KeyCode::Left || vim_mode => {
            let request = app.model.cycle_filter(field, false);
            app.dispatch(request);
        }
        KeyCode::Backspace | KeyCode::Delete => {
            let request = app.model.set_filter(field, "");
            app.dispatch(request);
        }
        code if is_down(code, vim_mode) => {
            app.model.ui.focus = Focus::Resources;
        }
        _ => {}
    }
}

fn handle_dropdown_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    match key.code {
        KeyCode::Enter => {
            let request = app.model.choose_dropdown();
            app.dispatch(request);
        }
        KeyCode::Esc => {
            app.model.ui.open_dropdown = None;
        }
        code if is_down(code, vim_mode) => app.model.move_dropdown(true),
        code if is_up(code, vim_mode) => app.model.move_dropdown(false),
        _ => {}
    }
}

fn handle_resources_key(app: &mut App, key: KeyEvent, vim_mode: bool) {
    match key.code {
        code if is_down(code, vim_mode) => app.model.resources.select_next(),
        code if is_up(code, vim_mode) => app.model.resources.select_prev(),
        KeyCode::Home => {
            if !app.model.resources.pdfs.is_empty() {
                app.model.resources.selected_index = Some(0);
            }
        }
        KeyCode::End => {
            let len = app.model.resources.pdfs.len();
            if len > 0 {
                app.model.resources.selected_index = Some(len - 1);
            }
        }
        KeyCode::Enter | KeyCode::Char('p') => app.preview_selected(),
        KeyCode::Char('e') => app.model.begin_rename_selected(),
        KeyCode::Char('d') => app.model.request_delete_selected(),
        _ => {}
    }
}

fn handle_rename_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let request = app.model.save_rename();
            app.dispatch(request);
        }
        KeyCode::Esc => app.model.cancel_rename(),
        KeyCode::Backspace => app.model.input_backspace(),
        KeyCode::Char(c) => app.model.input_char(c),
        _ => {}
    }
}

fn handle_text_field_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let request = app.model.submit_upload();
            app.dispatch(request);
        }
        KeyCode::Esc => app.model.ui.focus = Focus::Resources,
        KeyCode::Tab => app.model.ui.cycle_focus(true),
        KeyCode::BackTab => app.model.ui.cycle_focus(false),
        KeyCode::Backspace => app.model.input_backspace(),
        KeyCode::Char(c) => app.model.input_char(c),
        _ => {}
    }
}

fn handle_preview_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.model.close_preview(),
        KeyCode::Char('o') => app.open_preview_externally(),
        code => {
            let Some(preview) = app.model.ui.preview.as_mut() else {
                return;
            };
            if is_down(code, vim_mode) {
                preview.scroll_down(1);
            } else if is_up(code, vim_mode) {
                preview.scroll_up(1);
            } else if code == KeyCode::PageDown {
                preview.scroll_down(10);
            } else if code == KeyCode::PageUp {
                preview.scroll_up(10);
            }
        }
    }
}
