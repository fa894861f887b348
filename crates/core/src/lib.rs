//! Grammar scoring for spoken-English samples.
//!
//! The engine ([`scoring::grammar_scorer::GrammarScorer`]) turns a transcript,
//! its audio duration, pause count and part-of-speech tags into a weighted
//! score with a per-component breakdown. Audio and text collaborators sit
//! behind traits in `audio::domain` and `text::domain`.

pub mod audio;
pub mod pipeline;
pub mod scoring;
pub mod shared;
pub mod text;
