//! Quiz question generation
//!
//! Builds multiple-choice questions from a corpus: each question asks for
//! the English meaning of a word and offers four options, one correct and
//! three distractors drawn from the rest of the corpus.

use crate::corpus::Corpus;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of options per question, including the correct answer
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Quiz generation error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The corpus has too few distinct meanings to fill a question's options
    #[error("corpus has only {distinct} distinct meanings, need at least 4")]
    InsufficientCorpus {
        /// Number of distinct meanings found
        distinct: usize,
    },
}

/// A multiple-choice quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// 1-based position of the question in its quiz
    pub id: u32,
    /// Question text shown to the user
    pub question: String,
    /// The word being tested
    pub word: String,
    /// Answer options in display order
    pub options: Vec<String>,
    /// The correct option
    pub correct_answer: String,
    /// Id of the category the word came from
    pub category: String,
}

/// Generate `count` quiz questions from the corpus
///
/// Words are selected without repetition by a uniform shuffle of the whole
/// corpus; if `count` exceeds the corpus size, every word is used once. The
/// three distractors for each question come from the deduplicated meaning
/// set with the correct answer excluded, so options are always distinct
/// even when different words share a meaning.
///
/// The caller supplies the random source, which keeps generation
/// reproducible under a seeded generator.
pub fn generate_questions<R: Rng + ?Sized>(
    corpus: &Corpus,
    count: usize,
    rng: &mut R,
) -> Result<Vec<QuizQuestion>, QuizError> {
    let meanings: Vec<&str> = {
        let mut m: Vec<&str> = corpus.distinct_meanings().into_iter().collect();
        // HashSet iteration order is arbitrary; sort so the only
        // randomness comes from the injected generator.
        m.sort_unstable();
        m
    };
    if meanings.len() < OPTIONS_PER_QUESTION {
        return Err(QuizError::InsufficientCorpus { distinct: meanings.len() });
    }

    let mut pool = corpus.flatten();
    pool.shuffle(rng);
    pool.truncate(count.min(pool.len()));

    let questions = pool
        .iter()
        .enumerate()
        .map(|(index, (word, category))| {
            let mut options: Vec<String> = meanings
                .iter()
                .filter(|m| **m != word.meaning)
                .collect::<Vec<_>>()
                .choose_multiple(rng, OPTIONS_PER_QUESTION - 1)
                .map(|m| m.to_string())
                .collect();
            options.push(word.meaning.clone());
            options.shuffle(rng);

            QuizQuestion {
                id: (index + 1) as u32,
                question: format!("What does \"{}\" mean in English?", word.word),
                word: word.word.clone(),
                options,
                correct_answer: word.meaning.clone(),
                category: (*category).to_string(),
            }
        })
        .collect();

    Ok(questions)
}
