use serde::Deserialize;

/// Upper bound on the distractor pool of a single question.
pub const MAX_DISTRACTORS: usize = 5;

/// One trivia item: the question, its correct answer, an explanation and a
/// pool of wrong answers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawQuestionRecord")]
pub struct QuestionRecord {
    pub question: String,
    pub answer: String,
    pub explanation: String,
    distractors: Vec<String>,
}

impl QuestionRecord {
    /// Build a record, dropping absent or blank distractors and keeping at
    /// most [`MAX_DISTRACTORS`] of the rest.
    pub fn new<S, I>(
        question: impl Into<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
        distractors: I,
    ) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let mut pool: Vec<String> = distractors
            .into_iter()
            .map(Into::into)
            .filter(|d| !d.trim().is_empty())
            .collect();

        if pool.len() > MAX_DISTRACTORS {
            log::warn!(
                "dropping {} distractor(s) beyond the limit of {}",
                pool.len() - MAX_DISTRACTORS,
                MAX_DISTRACTORS
            );
            pool.truncate(MAX_DISTRACTORS);
        }

        Self {
            question: question.into(),
            answer: answer.into(),
            explanation: explanation.into(),
            distractors: pool,
        }
    }

    pub fn distractors(&self) -> &[String] {
        &self.distractors
    }
}

/// Shape of a question in a JSON store. Distractors may be `null`.
#[derive(Deserialize)]
struct RawQuestionRecord {
    question: String,
    answer: String,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    distractors: Vec<Option<String>>,
}

impl From<RawQuestionRecord> for QuestionRecord {
    fn from(raw: RawQuestionRecord) -> Self {
        QuestionRecord::new(
            raw.question,
            raw.answer,
            raw.explanation,
            raw.distractors.into_iter().flatten(),
        )
    }
}
