//! Client-side list state: fetched words, search text, official filter, and the
//! derived visible subset, recomputed on every change.

use super::filter::{filter_indices, OfficialFilter};
use crate::model::Word;

#[derive(Clone, Debug, Default)]
pub struct DictionaryView {
    words: Vec<Word>,
    query: String,
    filter: OfficialFilter,
    visible: Vec<usize>,
}

impl DictionaryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the source list (after a reload).
    pub fn set_words(&mut self, words: Vec<Word>) {
        self.words = words;
        self.refilter();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    pub fn set_filter(&mut self, filter: OfficialFilter) {
        self.filter = filter;
        self.refilter();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> OfficialFilter {
        self.filter
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn find(&self, id: i32) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    /// First entry with this exact headword.
    pub fn find_by_word(&self, word: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.word == word)
    }

    /// Words passing the current search and filter, in list order.
    pub fn visible(&self) -> impl Iterator<Item = &Word> + '_ {
        self.visible.iter().map(move |&i| &self.words[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total(&self) -> usize {
        self.words.len()
    }

    pub fn official_count(&self) -> usize {
        self.words.iter().filter(|w| w.is_official).count()
    }

    fn refilter(&mut self) {
        self.visible = filter_indices(&self.words, &self.query, self.filter);
    }
}
