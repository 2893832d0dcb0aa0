//! The quiz session state machine.
//!
//! A [`Session`] moves through `Select -> Running -> Result` and back to
//! `Select` on [`Session::reset`]. It owns no clock: the driver calls
//! [`Session::tick`] with the elapsed time and [`Session::record_answer`]
//! when the player picks an option, one call at a time.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{DivisionByZero, InvalidTransition, SessionError};
use crate::models::{AnswerRecord, CountryCapitalPair, Difficulty, Phase, Question};

use super::{generate, grade, percentage, Grade};

/// Everything that changes during a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub phase: Phase,
    pub difficulty: Option<Difficulty>,
    pub time_limit_ms: u64,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: usize,
    pub answer_log: Vec<AnswerRecord>,
    /// Goes to zero or below when the current question times out.
    pub time_remaining_ms: i64,
}

/// What happened after an answer was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The next question is now current and its timer is full.
    NextQuestion,
    /// That was the last question; the session is in the result phase.
    Finished,
}

pub struct Session {
    dataset: Vec<CountryCapitalPair>,
    rng: StdRng,
    state: SessionState,
}

impl Session {
    pub fn new(dataset: Vec<CountryCapitalPair>) -> Self {
        Self::with_rng(dataset, StdRng::from_entropy())
    }

    /// Create a session whose question order is reproducible.
    pub fn with_seed(dataset: Vec<CountryCapitalPair>, seed: u64) -> Self {
        Self::with_rng(dataset, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dataset: Vec<CountryCapitalPair>, rng: StdRng) -> Self {
        Self {
            dataset,
            rng,
            state: SessionState::default(),
        }
    }

    pub fn start_session(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        if self.state.phase == Phase::Running {
            return Err(self.invalid("start a session").into());
        }

        let questions = generate(&self.dataset, &mut self.rng)?;
        let time_limit_ms = difficulty.time_limit_ms();

        info!(
            "Starting {} session with {} questions, {} ms per question",
            difficulty.name(),
            questions.len(),
            time_limit_ms
        );

        self.state = SessionState {
            phase: Phase::Running,
            difficulty: Some(difficulty),
            time_limit_ms,
            answer_log: Vec::with_capacity(questions.len()),
            questions,
            current_index: 0,
            score: 0,
            time_remaining_ms: to_signed(time_limit_ms),
        };

        Ok(())
    }

    /// Start a session from a difficulty name; unknown names mean beginner.
    pub fn start_session_named(&mut self, name: &str) -> Result<(), SessionError> {
        self.start_session(Difficulty::resolve(name))
    }

    /// Count down the current question. Running out of time records no answer.
    pub fn tick(&mut self, elapsed_ms: u64) -> Result<Option<Advance>, InvalidTransition> {
        self.ensure_running("tick")?;

        self.state.time_remaining_ms = self
            .state
            .time_remaining_ms
            .saturating_sub(to_signed(elapsed_ms));

        if self.state.time_remaining_ms > 0 {
            return Ok(None);
        }

        debug!("Question {} timed out", self.state.current_index + 1);
        self.record_answer(None).map(Some)
    }

    /// Record the player's choice for the current question. `None` means no answer.
    pub fn record_answer(&mut self, selected: Option<&str>) -> Result<Advance, InvalidTransition> {
        self.ensure_running("record an answer")?;

        let Some(question) = self.state.questions.get(self.state.current_index).cloned() else {
            return Err(self.invalid("record an answer"));
        };

        let record = AnswerRecord::new(question, selected.map(str::to_string));
        debug!(
            "Question {}: selected {:?}, correct: {}",
            self.state.current_index + 1,
            record.selected,
            record.is_correct
        );

        if record.is_correct {
            self.state.score += 1;
        }
        self.state.answer_log.push(record);

        if self.state.current_index + 1 == self.state.questions.len() {
            self.state.phase = Phase::Result;
            info!(
                "Session finished: {}/{}",
                self.state.score,
                self.state.questions.len()
            );
            Ok(Advance::Finished)
        } else {
            self.state.current_index += 1;
            self.state.time_remaining_ms = to_signed(self.state.time_limit_ms);
            Ok(Advance::NextQuestion)
        }
    }

    /// Abandon whatever is in progress and go back to difficulty selection.
    pub fn reset(&mut self) {
        debug!("Resetting session from {} phase", self.state.phase);
        self.state = SessionState::default();
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.state.difficulty
    }

    pub fn time_limit_ms(&self) -> u64 {
        self.state.time_limit_ms
    }

    pub fn time_remaining_ms(&self) -> i64 {
        self.state.time_remaining_ms
    }

    pub fn questions(&self) -> &[Question] {
        &self.state.questions
    }

    pub fn total_questions(&self) -> usize {
        self.state.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// The question being asked, only while running.
    pub fn current_question(&self) -> Option<&Question> {
        if self.state.phase != Phase::Running {
            return None;
        }
        self.state.questions.get(self.state.current_index)
    }

    pub fn score(&self) -> usize {
        self.state.score
    }

    pub fn answer_log(&self) -> &[AnswerRecord] {
        &self.state.answer_log
    }

    pub fn missed_answers(&self) -> impl Iterator<Item = &AnswerRecord> {
        self.state.answer_log.iter().filter(|record| !record.is_correct)
    }

    /// Fraction of the current question's time still left, in `0.0..=1.0`.
    pub fn time_ratio(&self) -> f64 {
        if self.state.time_limit_ms == 0 {
            return 0.0;
        }
        let ratio = self.state.time_remaining_ms as f64 / self.state.time_limit_ms as f64;
        ratio.clamp(0.0, 1.0)
    }

    /// Fraction of questions already answered, in `0.0..=1.0`.
    pub fn progress_ratio(&self) -> f64 {
        if self.state.questions.is_empty() {
            return 0.0;
        }
        self.state.answer_log.len() as f64 / self.state.questions.len() as f64
    }

    pub fn percentage(&self) -> Result<f64, DivisionByZero> {
        percentage(self.state.score, self.state.questions.len())
    }

    pub fn grade(&self) -> Result<Grade, DivisionByZero> {
        grade(self.state.score, self.state.questions.len())
    }

    fn ensure_running(&self, operation: &'static str) -> Result<(), InvalidTransition> {
        if self.state.phase == Phase::Running {
            Ok(())
        } else {
            Err(self.invalid(operation))
        }
    }

    fn invalid(&self, operation: &'static str) -> InvalidTransition {
        InvalidTransition {
            operation,
            phase: self.state.phase,
        }
    }
}

fn to_signed(ms: u64) -> i64 {
    i64::try_from(ms).unwrap_or(i64::MAX)
}
