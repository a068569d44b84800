//! # trivia
//!
//! A command-line trivia game. Questions are read from a SQLite database (or
//! a JSON file), shown one at a time with shuffled multiple-choice options,
//! and each answer is followed by the verdict and an explanation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // A store that fails to load yields an empty quiz, not an error
//!     let quiz = Quiz::from_store("trivia_questions.db");
//!
//!     // Play on stdin/stdout with an unseeded random source
//!     quiz.run(None)?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod terminal;
mod ui;

use std::io::{self, BufRead, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

pub use app::{App, InputError, InputOutcome, Verdict, parse_selection};
pub use data::{LoadError, load_questions, load_questions_from_json, load_questions_from_sqlite};
pub use models::{
    AppState, MAX_DISTRACTORS, OptionSet, QuestionRecord, SHOWN_DISTRACTORS, SessionOutcome,
};

use terminal::Console;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The terminal could not be read from or written to.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz session ready to be played.
pub struct Quiz {
    questions: Vec<QuestionRecord>,
    load_error: Option<LoadError>,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self {
            questions,
            load_error: None,
        }
    }

    /// Load a quiz from a question store.
    ///
    /// A store that cannot be read produces a quiz with no questions; the
    /// failure is reported to the player when the session starts.
    pub fn from_store<P: AsRef<Path>>(path: P) -> Self {
        match load_questions(&path) {
            Ok(questions) => Self::new(questions),
            Err(err) => {
                log::warn!(
                    "could not load questions from {}: {}",
                    path.as_ref().display(),
                    err
                );
                Self {
                    questions: Vec::new(),
                    load_error: Some(err),
                }
            }
        }
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    /// The reason the store could not be read, if it could not.
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    /// Play on stdin/stdout. `seed` makes question order and options
    /// reproducible.
    pub fn run(self, seed: Option<u64>) -> Result<SessionOutcome, QuizError> {
        let rng = match seed {
            Some(seed) => {
                log::debug!("using seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let console = terminal::init();
        self.play(console, rng)
    }

    /// Play against arbitrary input, output and random source.
    pub fn run_with<R, W, G>(
        self,
        input: R,
        output: W,
        rng: G,
    ) -> Result<SessionOutcome, QuizError>
    where
        R: BufRead,
        W: Write,
        G: Rng,
    {
        self.play(Console::new(input, output), rng)
    }

    fn play<R, W, G>(
        self,
        mut console: Console<R, W>,
        rng: G,
    ) -> Result<SessionOutcome, QuizError>
    where
        R: BufRead,
        W: Write,
        G: Rng,
    {
        if let Some(err) = &self.load_error {
            ui::render_load_error(console.output(), err)?;
        }

        let mut app = App::with_questions(self.questions, rng);
        let outcome = run_session(&mut console, &mut app)?;
        console.output().flush()?;
        Ok(outcome)
    }
}

fn run_session<R, W, G>(
    console: &mut Console<R, W>,
    app: &mut App<G>,
) -> Result<SessionOutcome, QuizError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    loop {
        match app.state {
            AppState::Presenting => present(console, app)?,
            AppState::AwaitingInput => {
                if !handle_selection(console, app)? {
                    ui::render_farewell(console.output())?;
                    return Ok(SessionOutcome::Quit);
                }
            }
            AppState::Feedback => {
                if !handle_feedback(console, app)? {
                    ui::render_farewell(console.output())?;
                    return Ok(SessionOutcome::Quit);
                }
            }
            AppState::Finished => {
                ui::render_completion(console.output())?;
                return Ok(SessionOutcome::Completed);
            }
        }
    }
}

fn present<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    app: &mut App<G>,
) -> Result<(), QuizError> {
    if let (Some(question), Some(options)) = (app.current_question(), app.options()) {
        ui::render_question(
            console.output(),
            app.current_question_number(),
            app.total_questions(),
            question,
            options,
        )?;
    }
    app.await_input();
    Ok(())
}

/// Returns false if the session should end.
fn handle_selection<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    app: &mut App<G>,
) -> Result<bool, QuizError> {
    let option_count = app.options().map_or(0, OptionSet::len);
    let Some(line) = console.prompt(ui::selection_prompt(option_count))? else {
        log::debug!("input closed, quitting");
        app.quit();
        return Ok(false);
    };

    match app.handle_input(&line) {
        InputOutcome::Continue(_) => Ok(true),
        InputOutcome::Quit => Ok(false),
        InputOutcome::Retry(err) => {
            ui::render_input_error(console.output(), &err)?;
            Ok(true)
        }
    }
}

/// Returns false if the session should end.
fn handle_feedback<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    app: &mut App<G>,
) -> Result<bool, QuizError> {
    if let (Some(verdict), Some(question)) = (app.verdict(), app.current_question()) {
        ui::render_feedback(console.output(), verdict, question)?;
    }

    if console.prompt(ui::acknowledge_prompt())?.is_none() {
        log::debug!("input closed, quitting");
        app.quit();
        return Ok(false);
    }

    app.advance();
    Ok(true)
}
