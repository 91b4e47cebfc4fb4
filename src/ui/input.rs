use crate::transform::Style;
use crate::ui::app::App;
use crate::ui::form::Field;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 's') {
        app.on_submit();
        return;
    }

    match key.code {
        KeyCode::PageUp => {
            app.scroll_result_pages(-1);
            return;
        }
        KeyCode::PageDown => {
            app.scroll_result_pages(1);
            return;
        }
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    // Inputs and submit are disabled while a request is in flight.
    if app.is_loading() {
        return;
    }

    match app.form().focus {
        Field::Quote => handle_quote_key(app, key),
        Field::Style => handle_style_key(app, key),
        Field::Submit => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                app.on_submit();
            }
        }
    }
}

fn handle_quote_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.on_quote_change(String::new());
        return;
    }

    let mut quote = app.form().quote.clone();
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => quote.push(ch),
        KeyCode::Enter => quote.push('\n'),
        KeyCode::Backspace => {
            if quote.pop().is_none() {
                return;
            }
        }
        _ => return,
    }
    app.on_quote_change(quote);
}

fn handle_style_key(app: &mut App, key: KeyEvent) {
    let current = app.form().style;
    match key.code {
        KeyCode::Left | KeyCode::Up => app.on_style_change(current.prev()),
        KeyCode::Right | KeyCode::Down => app.on_style_change(current.next()),
        KeyCode::Enter => {
            app.on_submit();
        }
        KeyCode::Char(ch) => {
            let picked = ch
                .to_digit(10)
                .and_then(|digit| (digit as usize).checked_sub(1))
                .and_then(Style::from_index);
            if let Some(style) = picked {
                app.on_style_change(style);
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
