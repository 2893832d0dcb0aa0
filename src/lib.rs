//! # capitals-quiz
//!
//! A timed multiple-choice quiz on the countries and capitals of Asia.
//!
//! The quiz logic lives in [`Session`], a state machine that owns no clock
//! and can be driven directly:
//!
//! ```rust
//! use capitals_quiz::{asia_dataset, Difficulty, Phase, Session};
//!
//! let mut session = Session::with_seed(asia_dataset().unwrap(), 7);
//! session.start_session(Difficulty::Advanced).unwrap();
//!
//! let answer = session.current_question().unwrap().correct_answer.clone();
//! session.record_answer(Some(answer.as_str())).unwrap();
//! session.tick(7_000).unwrap(); // the second question times out
//!
//! assert_eq!(session.score(), 1);
//! assert_eq!(session.answer_log().len(), 2);
//! assert_eq!(session.phase(), Phase::Running);
//! ```
//!
//! [`Quiz`] wraps a session in a terminal UI.

mod app;
mod data;
mod error;
mod models;
mod quiz;
pub mod terminal;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;

pub use app::App;
pub use data::{asia_dataset, load_dataset_from_str, LoadError};
pub use error::{DivisionByZero, GenerateError, InvalidTransition, QuizError, SessionError};
pub use models::{
    AnswerRecord, CountryCapitalPair, Difficulty, Phase, Question, QuestionKind, NUM_OPTIONS,
};
pub use quiz::{
    generate, grade, percentage, shuffle, Advance, Grade, Session, SessionState, MIN_DATASET_SIZE,
};

/// Default interval between timer ticks.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
    tick_rate: Duration,
}

impl Quiz {
    /// Create a quiz over the bundled Asia dataset.
    pub fn new() -> Result<Self, QuizError> {
        Ok(Self::with_session(Session::new(asia_dataset()?)))
    }

    /// Create a quiz whose questions are shuffled from `seed`.
    pub fn with_seed(seed: u64) -> Result<Self, QuizError> {
        Ok(Self::with_session(Session::with_seed(asia_dataset()?, seed)))
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            app: App::with_session(session),
            tick_rate: DEFAULT_TICK_RATE,
        }
    }

    pub fn tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Skip the selection screen and start right away.
    pub fn start(mut self, difficulty: Difficulty) -> Result<Self, QuizError> {
        self.app.try_start(difficulty)?;
        Ok(self)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, self.tick_rate);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    app: &mut App,
    tick_rate: Duration,
) -> Result<(), QuizError> {
    let mut ticker = Ticker::new(tick_rate);

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(ticker.timeout())? {
            if let Event::Key(key) = event::read()? {
                let before = question_position(app);
                if key.kind == KeyEventKind::Press && handle_input(app, key.code) {
                    break;
                }
                // A new question gets its full time, not the rest of this tick.
                if question_position(app) != before {
                    ticker.restart();
                }
            }
        }

        if let Some(elapsed_ms) = ticker.take_elapsed() {
            app.on_tick(elapsed_ms);
        }
    }

    info!("Quitting");
    Ok(())
}

fn question_position(app: &App) -> (Phase, usize) {
    (app.phase(), app.session().answer_log().len())
}

/// Measures wall-clock time between ticks.
struct Ticker {
    tick_rate: Duration,
    last_tick: Instant,
}

impl Ticker {
    fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    fn timeout(&self) -> Duration {
        self.tick_rate.saturating_sub(self.last_tick.elapsed())
    }

    fn restart(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Milliseconds since the last tick, once at least one tick interval passed.
    fn take_elapsed(&mut self) -> Option<u64> {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.tick_rate {
            return None;
        }
        self.last_tick = Instant::now();
        Some(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.phase() {
        Phase::Select => handle_select_input(app, key),
        Phase::Running => handle_quiz_input(app, key),
        Phase::Result => handle_result_input(app, key),
    }
}

fn handle_select_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_difficulty(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_difficulty(),
        KeyCode::Enter | KeyCode::Char(' ') => app.start_selected(),
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            app.start(Difficulty::ALL[index]);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Char(c @ 'a'..='d') => app.answer_option(c as usize - 'a' as usize),
        KeyCode::Char(c @ '1'..='4') => app.answer_option(c as usize - '1' as usize),
        KeyCode::Esc => app.restart(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Esc => app.restart(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}
