use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::AnswerRecord;
use crate::quiz::Grade;

const NO_ANSWER: &str = "Sin respuesta";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let score = session.score();
    let total = session.total_questions();
    let percentage = session.percentage().unwrap_or(0.0);
    let grade = session.grade().ok();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], score, total, percentage, grade);

    let missed: Vec<&AnswerRecord> = session.missed_answers().collect();
    render_missed(frame, chunks[2], &missed, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn grade_color(grade: Option<Grade>) -> Color {
    match grade {
        Some(Grade::Excellent) => Color::Green,
        Some(Grade::Good) => Color::Cyan,
        Some(Grade::NeedsImprovement) => Color::Yellow,
        None => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: usize,
    total: usize,
    percentage: f64,
    grade: Option<Grade>,
) {
    let color = grade_color(grade);
    let label = grade.map(Grade::label).unwrap_or("-");

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Resultados",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Puntuación: {} de {}  ({:.0}%)", score, total, percentage),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Calificación: {}", label),
            Style::default().fg(color),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

/// `scroll` counts records, so every missed question can reach the top row
/// however many rows its wrapped line takes.
fn render_missed(frame: &mut Frame, area: Rect, missed: &[&AnswerRecord], scroll: usize) {
    let lines: Vec<Line> = if missed.is_empty() {
        vec![Line::from(Span::styled(
            "No cometiste errores, ¡excelente desempeño!",
            Style::default().fg(Color::Green),
        ))]
    } else {
        missed
            .iter()
            .enumerate()
            .skip(scroll)
            .map(|(index, record)| missed_line(index, record))
            .collect()
    };

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Errores ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn missed_line<'a>(index: usize, record: &'a AnswerRecord) -> Line<'a> {
    let selected = record.selected.as_deref().unwrap_or(NO_ANSWER);

    Line::from(vec![
        Span::styled(
            format!("{:2}. ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(record.question.prompt.as_str(), Style::default().fg(Color::Gray)),
        Span::styled(" - Tu respuesta: ", Style::default().fg(Color::DarkGray)),
        Span::styled(selected, Style::default().fg(Color::Red)),
        Span::styled(" | Correcta: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            record.question.correct_answer.as_str(),
            Style::default().fg(Color::Green),
        ),
    ])
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use crate::app::App;
    use crate::data::asia_dataset;
    use crate::models::{Difficulty, Phase};
    use crate::quiz::Session;

    fn screen_rows(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| crate::ui::render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn all_timed_out() -> App {
        let mut app = App::with_session(Session::with_seed(asia_dataset().unwrap(), 19));
        app.start(Difficulty::Advanced);
        while app.phase() == Phase::Running {
            app.on_tick(7_000);
        }
        app
    }

    #[test]
    fn test_first_missed_question_shown() {
        let app = all_timed_out();
        let rows = screen_rows(&app);

        assert!(rows.iter().any(|row| row.contains(" 1. ")));
        assert!(!rows.iter().any(|row| row.contains("46. ")));
    }

    #[test]
    fn test_last_missed_question_reachable() {
        let mut app = all_timed_out();
        let missed = app.session().missed_answers().count();
        assert_eq!(missed, 46);

        for _ in 0..100 {
            app.scroll_results_down();
        }
        let rows = screen_rows(&app);

        assert_eq!(app.result_scroll(), missed - 1);
        assert!(
            rows.iter().any(|row| row.contains("46. ")),
            "last missed question not on screen: {:#?}",
            rows
        );
        assert!(!rows.iter().any(|row| row.contains("45. ")));
    }
}
