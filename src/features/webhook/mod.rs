pub mod client;
pub mod error_responses;

pub use client::{get_json, post_json, require};
