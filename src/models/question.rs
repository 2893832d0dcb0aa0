/// Number of options offered for every question.
pub const NUM_OPTIONS: usize = 4;

/// Which field of a pair the question asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// "What is the capital of <country>?"
    CapitalOf,
    /// "Which country has <capital> as its capital?"
    CountryOf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub kind: QuestionKind,
    pub prompt: String,
    pub correct_answer: String,
    pub options: [String; NUM_OPTIONS],
    /// The country (for `CapitalOf`) or capital (for `CountryOf`) being asked about.
    pub subject: String,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}
