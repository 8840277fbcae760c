//! Corpus types
//!
//! A [`Corpus`] is a set of categories, each holding vocabulary words with
//! their English meanings and example sentences.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A vocabulary word with its translation and example usage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The word in the target language
    pub word: String,
    /// English meaning
    pub meaning: String,
    /// Example sentence in English
    pub example: String,
    /// Example sentence in the target language
    #[serde(rename = "example_id")]
    pub example_target: String,
}

/// A themed group of vocabulary words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable category identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description of the category's contents
    pub description: String,
    /// The words in this category
    pub words: Vec<Word>,
}

/// A complete vocabulary corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    categories: Vec<Category>,
}

impl Corpus {
    /// Create a corpus from a set of categories
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The categories in this corpus
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by its identifier
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Total number of words across all categories
    pub fn total_words(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }

    /// All words paired with the id of the category they belong to
    pub fn flatten(&self) -> Vec<(&Word, &str)> {
        self.categories
            .iter()
            .flat_map(|c| c.words.iter().map(move |w| (w, c.id.as_str())))
            .collect()
    }

    /// The set of distinct English meanings in the corpus
    ///
    /// Different words may share a meaning; the quiz generator draws
    /// distractors from this deduplicated set so a shared meaning can
    /// never appear twice among the options.
    pub fn distinct_meanings(&self) -> HashSet<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.words.iter().map(|w| w.meaning.as_str()))
            .collect()
    }
}
