//! Search and official-flag filtering over an in-memory word list.

use crate::model::Word;
use std::fmt;
use std::str::FromStr;

/// Tri-state official filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OfficialFilter {
    #[default]
    All,
    Official,
    Unofficial,
}

impl OfficialFilter {
    pub fn accepts(self, is_official: bool) -> bool {
        match self {
            OfficialFilter::All => true,
            OfficialFilter::Official => is_official,
            OfficialFilter::Unofficial => !is_official,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OfficialFilter::All => "all",
            OfficialFilter::Official => "official",
            OfficialFilter::Unofficial => "unofficial",
        }
    }
}

impl fmt::Display for OfficialFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfficialFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(OfficialFilter::All),
            "official" => Ok(OfficialFilter::Official),
            "unofficial" => Ok(OfficialFilter::Unofficial),
            _ => Err(format!(
                "invalid filter: {} (expected all, official or unofficial)",
                s
            )),
        }
    }
}

/// Case-insensitive substring match against headword, meaning and English gloss.
/// An empty query matches everything.
pub fn matches_query(word: &Word, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    word.word.to_lowercase().contains(&needle)
        || word.meaning.to_lowercase().contains(&needle)
        || word
            .english
            .as_deref()
            .map(|e| e.to_lowercase().contains(&needle))
            .unwrap_or(false)
}

/// Indices of `words` kept by `query` and `flag`, in list order.
pub fn filter_indices(words: &[Word], query: &str, flag: OfficialFilter) -> Vec<usize> {
    words
        .iter()
        .enumerate()
        .filter(|(_, w)| matches_query(w, query) && flag.accepts(w.is_official))
        .map(|(i, _)| i)
        .collect()
}

/// Words kept by `query` and `flag`, in list order.
pub fn filter_words<'a>(words: &'a [Word], query: &str, flag: OfficialFilter) -> Vec<&'a Word> {
    filter_indices(words, query, flag)
        .into_iter()
        .map(|i| &words[i])
        .collect()
}
