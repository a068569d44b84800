use rand::Rng;
use rand::seq::SliceRandom;

use super::QuestionRecord;

/// How many distractors are shown alongside the answer.
pub const SHOWN_DISTRACTORS: usize = 3;

/// The shuffled choices presented for a single question.
///
/// Always holds the correct answer exactly once, plus up to
/// [`SHOWN_DISTRACTORS`] distractors sampled from the record's pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    options: Vec<String>,
}

impl OptionSet {
    pub fn build<G: Rng + ?Sized>(record: &QuestionRecord, rng: &mut G) -> Self {
        let pool = record.distractors();
        let take = SHOWN_DISTRACTORS.min(pool.len());

        let mut options: Vec<String> = pool.choose_multiple(rng, take).cloned().collect();
        options.push(record.answer.clone());
        options.shuffle(rng);

        Self { options }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option at a 1-based label, as shown to the player.
    pub fn get(&self, label: usize) -> Option<&str> {
        label
            .checked_sub(1)
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }

    /// 1-based label of `text`, if present.
    pub fn label_of(&self, text: &str) -> Option<usize> {
        self.options.iter().position(|o| o == text).map(|i| i + 1)
    }
}
