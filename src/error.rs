//! Error types for dataset loading, question generation and session control.

use std::io;

use thiserror::Error;

use crate::data::LoadError;
use crate::models::Phase;

/// Question generation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("dataset has {found} entries but at least {required} are needed")]
    InsufficientData { found: usize, required: usize },
}

/// A session operation was called in a phase that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {operation} while the session is in the {phase} phase")]
pub struct InvalidTransition {
    pub operation: &'static str,
    pub phase: Phase,
}

/// Grading was asked for a session without questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot grade a session with no questions")]
pub struct DivisionByZero;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    InsufficientData(#[from] GenerateError),
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
}

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading the dataset.
    #[error("failed to load dataset: {0}")]
    Load(#[from] LoadError),
    /// A session could not be started.
    #[error("session error: {0}")]
    Session(#[from] SessionError),
    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
