use std::io::{self, Write};

use crossterm::style::{StyledContent, Stylize};

use crate::app::Verdict;
use crate::data::LoadError;
use crate::models::QuestionRecord;

pub fn render_feedback<W: Write>(
    out: &mut W,
    verdict: Verdict,
    question: &QuestionRecord,
) -> io::Result<()> {
    match verdict {
        Verdict::Correct => writeln!(out, "{}", "Correct!".green())?,
        Verdict::Incorrect => writeln!(
            out,
            "{}",
            format!("Incorrect. The correct answer is: {}", question.answer).red()
        )?,
    }
    writeln!(
        out,
        "{}",
        format!("Explanation: {}", question.explanation).blue()
    )
}

pub fn acknowledge_prompt() -> StyledContent<&'static str> {
    "Press Enter to continue...".yellow()
}

pub fn render_load_error<W: Write>(out: &mut W, error: &LoadError) -> io::Result<()> {
    writeln!(out, "{}", format!("Database error: {}", error).red())
}

pub fn render_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Thank you for playing! Goodbye!")
}

pub fn render_completion<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Thank you for playing!")
}
