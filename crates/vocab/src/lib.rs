//! Vocabulary corpus and quiz generation for Belajar
//!
//! This crate holds the bundled Indonesian-English vocabulary, the corpus
//! types it is organized into, and the generator that turns a corpus into
//! multiple-choice quiz questions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corpus;
pub mod data;
pub mod quiz;

pub use corpus::{Category, Corpus, Word};
pub use quiz::{generate_questions, QuizError, QuizQuestion};
