//! Plain-text rendering of the quiz. Styling is cosmetic: every line still
//! reads correctly with colors disabled.

mod quiz;
mod result;

pub use quiz::{render_input_error, render_question, selection_prompt};
pub use result::{
    acknowledge_prompt, render_completion, render_farewell, render_feedback, render_load_error,
};
