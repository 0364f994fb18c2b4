use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    let (text, style) = match state.mode {
        Mode::EditHizb => (
            format!(" Start hizb (1-60): {}█", state.input_text),
            Style::default().bg(Color::Blue).fg(Color::White),
        ),
        Mode::Day => (
            " h/l: previous/next day  t: today  m/e: read morning/evening  r: reflection  s: start hizb  q: quit "
                .to_string(),
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        Mode::Reader => (
            " Esc: back  j/k: scroll  d/u: half-page  gg/G: top/bottom  q: quit ".to_string(),
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}
