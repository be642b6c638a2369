//! Course recommendation engine and API.
//!
//! Ranks a fixed course catalog against a free-text learner profile using
//! TF-IDF cosine similarity blended with rule-based level, prerequisite,
//! and domain scores, then splits the ranked list into a short-term /
//! long-term learning timeline and explains each recommendation.

pub mod api;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod middleware;
pub mod models;
