mod options;
mod question;

pub use options::{OptionSet, SHOWN_DISTRACTORS};
pub use question::{MAX_DISTRACTORS, QuestionRecord};

/// Where the quiz runner is within the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// A fresh option set is ready to be shown.
    Presenting,
    /// Waiting for a selection or quit.
    AwaitingInput,
    /// A selection was made; the verdict is ready.
    Feedback,
    /// No more questions, or the player quit.
    Finished,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every question was answered.
    Completed,
    /// The player quit, explicitly or by closing input.
    Quit,
}
