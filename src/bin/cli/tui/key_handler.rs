use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

use super::app_state::{Mode, TuiState};
use ratib_lib::schedule::Slot;

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    match state.mode {
        Mode::Day => handle_day_key(state, key),
        Mode::Reader => handle_reader_key(state, key),
        Mode::EditHizb => handle_input_key(state, key),
    }
}

fn handle_day_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Char('h') | KeyCode::Left => state.previous_day(),
        KeyCode::Char('l') | KeyCode::Right => state.next_day(),
        KeyCode::Char('t') => state.go_today(),
        KeyCode::Char('m') => state.open_reader(Slot::Morning),
        KeyCode::Char('e') => state.open_reader(Slot::Evening),
        KeyCode::Char('r') => state.request_reflection(),
        KeyCode::Char('s') => state.start_edit_hizb(),
        _ => {}
    }
}

fn handle_input_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.input_text.clear();
            state.mode = Mode::Day;
        }
        KeyCode::Enter => {
            state.apply_hizb_input();
        }
        KeyCode::Backspace => {
            state.input_text.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
            state.input_text.push(c);
        }
        _ => {}
    }
}

fn handle_reader_key(state: &mut TuiState, key: KeyEvent) {
    // Handle pending 'g' key
    if state.pending_key == Some('g') {
        state.pending_key = None;
        if key.code == KeyCode::Char('g') {
            state.content_scroll = 0;
            return;
        }
    }

    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Esc | KeyCode::Backspace => state.close_reader(),
        KeyCode::Char('j') | KeyCode::Down => state.content_scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => state.content_scroll_up(1),
        KeyCode::Char('d') | KeyCode::PageDown => state.content_scroll_down(15),
        KeyCode::Char('u') | KeyCode::PageUp => state.content_scroll_up(15),
        KeyCode::Char('g') => {
            state.pending_key = Some('g');
        }
        KeyCode::Char('G') => {
            state.content_scroll = state.rendered_lines.len().saturating_sub(1);
        }
        _ => {}
    }
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    let Some(area) = state.content_area else {
        return;
    };
    let inside = mouse.column >= area.x && mouse.column < area.x + area.width
        && mouse.row >= area.y && mouse.row < area.y + area.height;
    if !inside {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollDown => state.content_scroll_down(3),
        MouseEventKind::ScrollUp => state.content_scroll_up(3),
        _ => {}
    }
}
