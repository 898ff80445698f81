//! Heuristic job matching: a pure, stateless, single-pass pipeline
//! (fetch → extract → score → rank → truncate). No cache, no retries;
//! every request recomputes from a fresh bounded fetch.

pub mod features;
pub mod handlers;
pub mod ranker;
pub mod tokenize;
pub mod weights;
