//! Tokenization into sentences, words, and characters.
//!
//! The rules here are deliberately blunt. Every `.`, `!`, and `?` ends a
//! sentence, every whitespace run ends a word, and every non-whitespace
//! character (punctuation included) counts as a character. The score
//! constants in [`crate::scores`] are calibrated against exactly these
//! definitions.

/// Characters that terminate a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// The trimmed text under analysis.
///
/// Owns the content so the token slices it hands out can borrow from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    /// Build a document from raw input, trimming surrounding whitespace.
    pub fn new(text: &str) -> Self {
        Self {
            content: text.trim().to_string(),
        }
    }

    /// The trimmed content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the trimmed content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Sentences of this document. See [`split_sentences`].
    pub fn sentences(&self) -> Vec<&str> {
        split_sentences(&self.content)
    }

    /// Words of this document. See [`split_words`].
    pub fn words(&self) -> Vec<&str> {
        split_words(&self.content)
    }

    /// Non-whitespace character count. See [`count_characters`].
    pub fn character_count(&self) -> usize {
        count_characters(&self.content)
    }
}

/// Split text into sentences on every terminator character.
///
/// Each segment between terminators is a sentence, including an empty
/// leading segment. Empty segments at the end are dropped, so a trailing
/// terminator does not create an extra sentence. Text with no terminator is
/// one sentence; text made only of terminators has none.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences: Vec<&str> = text.split(SENTENCE_TERMINATORS).collect();
    while sentences.last().is_some_and(|s| s.is_empty()) {
        sentences.pop();
    }
    sentences
}

/// Split text into words on whitespace runs.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Count every character that is not whitespace.
pub fn count_characters(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}
