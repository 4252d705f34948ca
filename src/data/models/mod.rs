pub mod form_models;
pub mod proxy_models;
pub mod word_models;

pub use form_models::{ExplainForm, FormMessage, GenerateForm, WordForm, DEFAULT_WORD_COUNT};
pub use proxy_models::{
    ProxyError, ADD_WORD_FAILURE, EXPLAIN_FAILURE, FETCH_WORDS_FAILURE, GENERATE_TEXT_FAILURE,
};
pub use word_models::{WordCard, WordEntry, WordListView};
