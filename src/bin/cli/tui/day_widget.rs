use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::TuiState;
use ratib_lib::schedule::{calendar, DailyAssignment, Reading, Slot};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(6),
        ])
        .split(area);

    draw_header(f, rows[0], state);

    match state.assignment {
        Some(ref assignment) => draw_cards(f, rows[1], assignment),
        None => {
            let message = state.day_error.clone().unwrap_or_default();
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(message, Style::default().fg(Color::Red))),
                Line::from(""),
                Line::from(Span::styled(
                    "  Step forward with l, or change the start with s.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false });
            f.render_widget(paragraph, rows[1]);
        }
    }

    draw_reflection(f, rows[2], state);
}

fn draw_header(f: &mut Frame, area: Rect, state: &TuiState) {
    let date = state.selected_date();
    let today = if state.navigator.is_today() { "  (today)" } else { "" };
    let baseline = state.app.baseline;

    let lines = vec![
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                calendar::format_date(date),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {}", date)),
            Span::styled(today, Style::default().fg(Color::Green)),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            format!("Start: {} / hizb {}", baseline.start_date, baseline.start_hizb),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];

    let block = Block::default()
        .title(" الحزب الراتب ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_cards(f: &mut Frame, area: Rect, assignment: &DailyAssignment) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    for (slot, card) in Slot::ALL.into_iter().zip(cards.iter()) {
        draw_card(f, *card, slot, assignment.reading(slot));
    }
}

fn draw_card(f: &mut Frame, area: Rect, slot: Slot, reading: &Reading) {
    let (color, key) = match slot {
        Slot::Morning => (Color::Yellow, "m"),
        Slot::Evening => (Color::Blue, "e"),
    };

    let label_style = match reading {
        Reading::Special(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Reading::Hizb { .. } => Style::default().add_modifier(Modifier::BOLD),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(reading.label(), label_style)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}: اقرأ الورد", key),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(format!(" {} ", slot.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_reflection(f: &mut Frame, area: Rect, state: &TuiState) {
    let text = if state.reflection_loading {
        Span::styled("جاري التدبر...", Style::default().fg(Color::DarkGray))
    } else if let Some(ref reflection) = state.reflection {
        Span::styled(reflection.clone(), Style::default().add_modifier(Modifier::ITALIC))
    } else {
        Span::styled(
            "اضغط r للحصول على لمحة إيمانية.",
            Style::default().fg(Color::DarkGray),
        )
    };

    let block = Block::default()
        .title(" تدبر اليوم ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let paragraph = Paragraph::new(Line::from(text))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
