//! Complete HTML documents for each presentation mode
//!
//! `document` wraps rendered Markdown in a readable article page,
//! `presentation` hosts a reveal.js deck.

pub mod document;
pub mod presentation;
