pub mod webhook;
pub mod words;
