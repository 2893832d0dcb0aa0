use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::NUM_OPTIONS;

const OPTION_LABELS: [char; NUM_OPTIONS] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_counter(frame, chunks[0], session.current_index() + 1, session.total_questions());
    render_prompt(frame, chunks[1], &question.prompt);
    render_options(frame, chunks[2], &question.options, app.selected_option());
    render_timer(
        frame,
        chunks[3],
        session.time_ratio(),
        session.time_remaining_ms(),
    );
    render_progress(frame, chunks[5], session.progress_ratio());
    render_controls(frame, chunks[6]);
}

fn render_counter(frame: &mut Frame, area: Rect, number: usize, total: usize) {
    let widget = Paragraph::new(format!("{}/{}", number, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String; NUM_OPTIONS], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_timer(frame: &mut Frame, area: Rect, ratio: f64, remaining_ms: i64) {
    let seconds = remaining_ms.max(0) as f64 / 1000.0;
    let widget = Gauge::default()
        .ratio(ratio)
        .label(format!("{:.1} s", seconds))
        .gauge_style(Style::default().fg(Color::Red).bg(Color::DarkGray));
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, ratio: f64) {
    let widget = Gauge::default()
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0))
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter or a-d answer  ·  esc menu  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
