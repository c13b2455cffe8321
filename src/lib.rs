//! Phrase-Memory Library
//!
//! Attribute memoization core for a conversational color assistant. The
//! surrounding pipeline infers structured color/sentiment attributes from
//! free-text phrases via an LLM; this crate caches those expensive results
//! and analyzes phrase corpora for tone/modifier structure.
//!
//! # Key Features
//! - Phrase-keyed memo tables for RGB values and simplified token forms
//! - Durable JSON persistence with merge-on-load semantics
//! - Batch tone/modifier co-occurrence categorization with deterministic
//!   output ordering
//!
//! The LLM client, tokenizer, and WordNet lookups are external collaborators;
//! on a cache miss the caller computes the value elsewhere and stores it back.

pub mod cache;
pub mod categorize;
pub mod config;
pub mod constants;
pub mod errors;
pub mod normalize;

pub use cache::{AttributeCache, CacheSnapshot, CacheStats, Rgb};
pub use categorize::{categorize, Categorization};
pub use config::CacheConfig;
pub use errors::{CacheError, LoadOutcome};
