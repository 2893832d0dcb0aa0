//! Question generation, session control and grading.

mod generator;
mod grading;
mod session;
mod shuffle;

pub use generator::{generate, MIN_DATASET_SIZE};
pub use grading::{grade, percentage, Grade};
pub use session::{Advance, Session, SessionState};
pub use shuffle::shuffle;
