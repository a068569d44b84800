use std::io::{self, Write};

use crossterm::style::{StyledContent, Stylize};

use crate::app::InputError;
use crate::models::{OptionSet, QuestionRecord};

pub fn render_question<W: Write>(
    out: &mut W,
    number: usize,
    total: usize,
    question: &QuestionRecord,
    options: &OptionSet,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("Question {}/{}", number, total).dark_grey())?;
    writeln!(out, "{}", question.question.as_str().bold())?;

    for (index, option) in options.iter().enumerate() {
        writeln!(out, "{} {}", format!("{}.", index + 1).yellow(), option)?;
    }

    Ok(())
}

pub fn selection_prompt(option_count: usize) -> StyledContent<String> {
    format!("Select an option (1-{}) or press 'q' to quit: ", option_count).yellow()
}

pub fn render_input_error<W: Write>(out: &mut W, error: &InputError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())
}
