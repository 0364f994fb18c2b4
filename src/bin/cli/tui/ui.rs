use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;

use super::app_state::{Mode, TuiState};
use super::{content_widget, day_widget, status_bar};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();

    // Main layout: content area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    let main_area = outer[0];
    let status_area = outer[1];

    if state.mode == Mode::Reader {
        // Save area for mouse hit-testing
        state.content_area = Some(main_area);
        content_widget::draw(f, main_area, state);
    } else {
        state.content_area = None;
        day_widget::draw(f, main_area, state);
    }

    status_bar::draw(f, status_area, state);
}
