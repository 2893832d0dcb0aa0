use log::{error, warn};

use crate::error::{InvalidTransition, SessionError};
use crate::models::{Difficulty, Phase, NUM_OPTIONS};
use crate::quiz::{Advance, Session};

pub struct App {
    session: Session,
    selected_difficulty: usize,
    selected_option: usize,
    result_scroll: usize,
    notice: Option<String>,
}

impl App {
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            selected_difficulty: 0,
            selected_option: 0,
            result_scroll: 0,
            notice: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn selected_difficulty(&self) -> Difficulty {
        Difficulty::ALL[self.selected_difficulty]
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Message shown on the selection screen when a session failed to start.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn select_next_difficulty(&mut self) {
        self.selected_difficulty = (self.selected_difficulty + 1) % Difficulty::ALL.len();
    }

    pub fn select_previous_difficulty(&mut self) {
        let count = Difficulty::ALL.len();
        self.selected_difficulty = (self.selected_difficulty + count - 1) % count;
    }

    pub fn start_selected(&mut self) {
        self.start(self.selected_difficulty());
    }

    /// Start a session, keeping the error on the selection screen if it fails.
    pub fn start(&mut self, difficulty: Difficulty) {
        if let Err(err) = self.try_start(difficulty) {
            error!("Could not start session: {}", err);
            self.notice = Some(err.to_string());
        }
    }

    pub fn try_start(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        if let Some(index) = Difficulty::ALL.iter().position(|d| *d == difficulty) {
            self.selected_difficulty = index;
        }

        self.session.start_session(difficulty)?;
        self.notice = None;
        self.selected_option = 0;
        self.result_scroll = 0;
        Ok(())
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    pub fn submit_answer(&mut self) {
        self.answer_option(self.selected_option);
    }

    /// Answer the current question with the option at `index`.
    pub fn answer_option(&mut self, index: usize) {
        let selected = self
            .session
            .current_question()
            .and_then(|question| question.option(index))
            .map(str::to_string);

        let Some(selected) = selected else {
            warn!("Ignoring answer for option {} outside a running question", index);
            return;
        };

        let result = self.session.record_answer(Some(selected.as_str()));
        self.after_advance(result);
    }

    pub fn on_tick(&mut self, elapsed_ms: u64) {
        if self.session.phase() != Phase::Running {
            return;
        }
        if let Some(result) = self.session.tick(elapsed_ms).transpose() {
            self.after_advance(result);
        }
    }

    fn after_advance(&mut self, result: Result<Advance, InvalidTransition>) {
        match result {
            Ok(Advance::NextQuestion) => self.selected_option = 0,
            Ok(Advance::Finished) => {
                self.selected_option = 0;
                self.result_scroll = 0;
            }
            Err(err) => warn!("Ignoring invalid transition: {}", err),
        }
    }

    pub fn scroll_results_down(&mut self) {
        let missed = self.session.missed_answers().count();
        if self.result_scroll + 1 < missed {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Back to the difficulty selection, dropping the current session.
    pub fn restart(&mut self) {
        self.session.reset();
        self.selected_option = 0;
        self.result_scroll = 0;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountryCapitalPair;

    fn dataset() -> Vec<CountryCapitalPair> {
        vec![
            CountryCapitalPair::new("A", "a"),
            CountryCapitalPair::new("B", "b"),
            CountryCapitalPair::new("C", "c"),
            CountryCapitalPair::new("D", "d"),
        ]
    }

    fn app() -> App {
        App::with_session(Session::with_seed(dataset(), 31))
    }

    fn correct_index(app: &App) -> usize {
        let question = app.session().current_question().unwrap();
        question
            .options
            .iter()
            .position(|o| *o == question.correct_answer)
            .unwrap()
    }

    #[test]
    fn test_difficulty_cursor_wraps() {
        let mut app = app();
        assert_eq!(app.selected_difficulty(), Difficulty::Beginner);

        app.select_previous_difficulty();
        assert_eq!(app.selected_difficulty(), Difficulty::Advanced);

        app.select_next_difficulty();
        app.select_next_difficulty();
        assert_eq!(app.selected_difficulty(), Difficulty::Intermediate);
    }

    #[test]
    fn test_start_selected() {
        let mut app = app();
        app.select_next_difficulty();
        app.start_selected();

        assert_eq!(app.phase(), Phase::Running);
        assert_eq!(app.session().time_limit_ms(), 10_000);
    }

    #[test]
    fn test_submit_selected_option() {
        let mut app = app();
        app.start(Difficulty::Advanced);

        let target = correct_index(&app);
        for _ in 0..target {
            app.select_next_option();
        }
        app.submit_answer();

        assert_eq!(app.session().score(), 1);
        assert_eq!(app.selected_option(), 0);
        assert_eq!(app.session().current_index(), 1);
    }

    #[test]
    fn test_full_run_through_app() {
        let mut app = app();
        app.start(Difficulty::Advanced);

        let first = correct_index(&app);
        app.answer_option(first);
        app.on_tick(7_000);
        let third = correct_index(&app);
        app.answer_option((third + 1) % NUM_OPTIONS);
        let fourth = correct_index(&app);
        app.answer_option(fourth);

        assert_eq!(app.phase(), Phase::Result);
        assert_eq!(app.session().score(), 2);
        assert_eq!(app.session().missed_answers().count(), 2);
    }

    #[test]
    fn test_result_scroll_is_bounded() {
        let mut app = app();
        app.start(Difficulty::Advanced);
        for _ in 0..4 {
            app.on_tick(7_000);
        }
        assert_eq!(app.phase(), Phase::Result);

        for _ in 0..10 {
            app.scroll_results_down();
        }
        assert_eq!(app.result_scroll(), 3);

        for _ in 0..10 {
            app.scroll_results_up();
        }
        assert_eq!(app.result_scroll(), 0);
    }

    #[test]
    fn test_answer_outside_running_is_ignored() {
        let mut app = app();
        app.answer_option(0);
        app.on_tick(100);

        assert_eq!(app.phase(), Phase::Select);
        assert!(app.session().answer_log().is_empty());
    }

    #[test]
    fn test_start_failure_sets_notice() {
        let mut app = App::with_session(Session::with_seed(dataset()[..2].to_vec(), 1));
        app.start(Difficulty::Beginner);

        assert_eq!(app.phase(), Phase::Select);
        assert!(app.notice().unwrap().contains("at least 4"));
    }

    #[test]
    fn test_restart_returns_to_select() {
        let mut app = app();
        app.start(Difficulty::Intermediate);
        app.on_tick(500);

        app.restart();

        assert_eq!(app.phase(), Phase::Select);
        assert!(app.session().questions().is_empty());
        assert_eq!(app.session().score(), 0);
    }
}
