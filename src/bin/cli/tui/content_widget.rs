use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let block = Block::default()
        .title(format!(" {} ", state.reader_title))
        .title_bottom(" رواية ورش عن نافع ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.reader_loading {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  جاري فتح المصحف...",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(block);
        f.render_widget(paragraph, area);
    } else if let Some(ref error) = state.reader_error {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Could not load the reading.",
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block)
        .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    } else {
        let text: Vec<Line> = state.rendered_lines.iter()
            .skip(state.content_scroll)
            .map(|line| {
                // Surah headings
                if let Some(name) = line.strip_prefix("# ") {
                    Line::from(Span::styled(name.to_string(), Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)))
                } else {
                    Line::from(line.clone())
                }
            })
            .collect();

        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }
}
