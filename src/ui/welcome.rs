use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Difficulty;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Test de Países y Capitales de Asia",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Seleccione el nivel de dificultad".fg(Color::DarkGray)),
        Line::from(""),
    ];

    let selected = app.selected_difficulty();
    for (index, difficulty) in Difficulty::ALL.iter().enumerate() {
        content.push(difficulty_line(index, *difficulty, *difficulty == selected));
    }

    content.push(Line::from(""));
    if let Some(notice) = app.notice() {
        content.push(Line::from(Span::styled(
            notice,
            Style::default().fg(Color::Red),
        )));
    } else {
        content.push(Line::from(""));
    }
    content.push(Line::from(
        "j/k navigate  ·  enter start  ·  q quit".fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );

    frame.render_widget(widget, chunks[1]);
}

fn difficulty_line(index: usize, difficulty: Difficulty, is_selected: bool) -> Line<'static> {
    let style = if is_selected {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if is_selected { ">" } else { " " };

    Line::from(vec![
        Span::styled(format!("{} {}. ", marker, index + 1), style),
        Span::styled(difficulty.label(), style),
    ])
}
