pub mod filter;
pub mod normalize;
pub mod replies;
pub mod values;

pub use filter::{filter_words, word_matches};
pub use normalize::normalize_words;
pub use replies::{explanation, generated_text};
