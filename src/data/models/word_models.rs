use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A vocabulary entry as displayed by the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub id: String,              // Upstream row number, upstream id or list index
    pub german: String,          // The vocabulary term
    pub english: String,         // English translation (may be empty)
    pub arabic: String,          // Arabic translation, shown right-to-left
    pub part_of_speech: String,  // Free-text tag such as "Noun"
    pub example: String,         // Usage sentence
    pub added_at: String,        // ISO timestamp
}

impl WordEntry {
    /// Entry holding only the German term, used for plain string payloads.
    pub fn bare(id: impl Into<String>, german: impl Into<String>, added_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            german: german.into(),
            english: String::new(),
            arabic: String::new(),
            part_of_speech: String::new(),
            example: String::new(),
            added_at: added_at.into(),
        }
    }

    /// Calendar date of `added_at`, or the raw value when it is not a timestamp.
    pub fn added_on(&self) -> String {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.added_at) {
            return ts.date_naive().format("%Y-%m-%d").to_string();
        }
        if let Ok(date) = NaiveDate::parse_from_str(&self.added_at, "%Y-%m-%d") {
            return date.format("%Y-%m-%d").to_string();
        }
        self.added_at.clone()
    }
}

/// Word list as handed to the template. Every entry gets a card; the ones
/// not matching `query` are rendered hidden so the browser can bring them back.
#[derive(Debug, Serialize)]
pub struct WordListView<'a> {
    pub total: usize,
    pub shown: usize,
    pub query: &'a str,
    pub words: Vec<WordCard<'a>>,
}

#[derive(Debug, Serialize)]
pub struct WordCard<'a> {
    #[serde(flatten)]
    pub entry: &'a WordEntry,
    pub added_on: String,
    pub hidden: bool,
}

impl<'a> WordCard<'a> {
    pub fn new(entry: &'a WordEntry, visible: bool) -> Self {
        WordCard {
            entry,
            added_on: entry.added_on(),
            hidden: !visible,
        }
    }
}
