use std::num::IntErrorKind;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::models::{AppState, OptionSet, QuestionRecord};

/// A line that neither quits nor picks an option. The message is shown to the
/// player before re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a number.")]
    NotANumber,
    #[error("Invalid selection. Please try again.")]
    OutOfRange,
}

/// Result of handling one line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// An option was picked, by its 1-based label.
    Continue(usize),
    /// The player asked to stop the whole session.
    Quit,
    /// Ask again for the same question.
    Retry(InputError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Interpret a line typed at the selection prompt for a question with
/// `option_count` options.
pub fn parse_selection(input: &str, option_count: usize) -> InputOutcome {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return InputOutcome::Quit;
    }

    match input.parse::<i64>() {
        Ok(n) => match usize::try_from(n) {
            Ok(label) if (1..=option_count).contains(&label) => InputOutcome::Continue(label),
            _ => InputOutcome::Retry(InputError::OutOfRange),
        },
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            InputOutcome::Retry(InputError::OutOfRange)
        }
        Err(_) => InputOutcome::Retry(InputError::NotANumber),
    }
}

/// The quiz runner: walks a shuffled question list one question at a time.
pub struct App<G> {
    pub state: AppState,
    questions: Vec<QuestionRecord>,
    current_question_index: usize,
    options: Option<OptionSet>,
    selection: Option<usize>,
    rng: G,
}

impl<G: Rng> App<G> {
    /// Shuffle `questions` and prepare the first one. With no questions the
    /// app starts out [`AppState::Finished`].
    pub fn with_questions(mut questions: Vec<QuestionRecord>, mut rng: G) -> Self {
        questions.shuffle(&mut rng);
        log::debug!(
            "question order: {:?}",
            questions.iter().map(|q| q.question.as_str()).collect::<Vec<_>>()
        );

        let mut app = Self {
            state: AppState::Presenting,
            questions,
            current_question_index: 0,
            options: None,
            selection: None,
            rng,
        };
        app.prepare_current();
        app
    }

    fn prepare_current(&mut self) {
        self.selection = None;
        match self.questions.get(self.current_question_index) {
            Some(record) => {
                let options = OptionSet::build(record, &mut self.rng);
                log::debug!("options for {:?}: {:?}", record.question, options);
                self.options = Some(options);
                self.state = AppState::Presenting;
            }
            None => {
                self.options = None;
                self.state = AppState::Finished;
            }
        }
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        match self.state {
            AppState::Finished => None,
            _ => self.questions.get(self.current_question_index),
        }
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn options(&self) -> Option<&OptionSet> {
        self.options.as_ref()
    }

    /// The option picked for the current question, once in feedback.
    pub fn selected_option(&self) -> Option<&str> {
        let label = self.selection?;
        self.options.as_ref()?.get(label)
    }

    /// The question has been shown; start waiting for a selection.
    pub fn await_input(&mut self) {
        if self.state == AppState::Presenting {
            self.state = AppState::AwaitingInput;
        }
    }

    pub fn handle_input(&mut self, input: &str) -> InputOutcome {
        log::trace!("input {:?}", input);
        let option_count = match (&self.state, &self.options) {
            (AppState::AwaitingInput, Some(options)) => options.len(),
            _ => return InputOutcome::Retry(InputError::OutOfRange),
        };

        let outcome = parse_selection(input, option_count);
        match outcome {
            InputOutcome::Continue(label) => {
                self.selection = Some(label);
                self.state = AppState::Feedback;
            }
            InputOutcome::Quit => self.quit(),
            InputOutcome::Retry(_) => {}
        }
        outcome
    }

    pub fn verdict(&self) -> Option<Verdict> {
        let selected = self.selected_option()?;
        let record = self.current_question()?;
        if selected == record.answer {
            Some(Verdict::Correct)
        } else {
            Some(Verdict::Incorrect)
        }
    }

    /// Move on from feedback to the next question, or finish.
    pub fn advance(&mut self) {
        if self.state == AppState::Finished {
            return;
        }
        self.current_question_index += 1;
        self.prepare_current();
    }

    pub fn quit(&mut self) {
        self.state = AppState::Finished;
        self.options = None;
        self.selection = None;
    }
}
