use crate::data::models::WordEntry;

/// Case-insensitive substring match on the German, English and Arabic fields.
/// An empty term keeps every entry.
pub fn filter_words<'a>(words: &'a [WordEntry], term: &str) -> Vec<&'a WordEntry> {
    words.iter().filter(|word| word_matches(word, term)).collect()
}

pub fn word_matches(word: &WordEntry, term: &str) -> bool {
    let needle = term.to_lowercase();

    [&word.german, &word.english, &word.arabic]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
