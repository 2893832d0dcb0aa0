mod answer;
mod difficulty;
mod pair;
mod question;

pub use answer::AnswerRecord;
pub use difficulty::Difficulty;
pub use pair::CountryCapitalPair;
pub use question::{Question, QuestionKind, NUM_OPTIONS};

/// Stage of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the player to pick a difficulty.
    #[default]
    Select,
    /// Questions are being asked.
    Running,
    /// All questions answered, results available.
    Result,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Select => "select",
            Phase::Running => "running",
            Phase::Result => "result",
        };
        f.write_str(name)
    }
}
