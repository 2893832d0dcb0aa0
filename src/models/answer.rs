use super::Question;

/// The outcome of one question. `selected` is `None` when time ran out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question: Question,
    pub selected: Option<String>,
    pub is_correct: bool,
}

impl AnswerRecord {
    pub fn new(question: Question, selected: Option<String>) -> Self {
        let is_correct = selected
            .as_deref()
            .is_some_and(|option| question.is_correct(option));

        Self {
            question,
            selected,
            is_correct,
        }
    }

    pub fn timed_out(&self) -> bool {
        self.selected.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;

    fn question() -> Question {
        Question {
            kind: QuestionKind::CapitalOf,
            prompt: "¿Cuál es la capital de Japón?".to_string(),
            correct_answer: "Tokio".to_string(),
            options: [
                "Seúl".to_string(),
                "Tokio".to_string(),
                "Pekín".to_string(),
                "Manila".to_string(),
            ],
            subject: "Japón".to_string(),
        }
    }

    #[test]
    fn test_correct_selection() {
        let record = AnswerRecord::new(question(), Some("Tokio".to_string()));
        assert!(record.is_correct);
        assert!(!record.timed_out());
    }

    #[test]
    fn test_wrong_selection() {
        let record = AnswerRecord::new(question(), Some("Seúl".to_string()));
        assert!(!record.is_correct);
    }

    #[test]
    fn test_no_selection_is_never_correct() {
        let record = AnswerRecord::new(question(), None);
        assert!(!record.is_correct);
        assert!(record.timed_out());
    }
}
