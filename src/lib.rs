//! Insult Engine: chat-bot insults built from word lists and steered by
//! crowd-sourced ratings.
//!
//! Words are drawn from per-category corpora, phrased with English article
//! agreement, and scored in persistent per-category ledgers. Selection
//! strategies pick random, best, worst, good, bad or repeated pairs.
//!
//! ```
//! use insult_engine::core::corpus::WordCorpus;
//! use insult_engine::schema::category::Category;
//! use insult_engine::schema::scope::Scope;
//! use insult_engine::schema::strategy::Strategy;
//! use insult_engine::InsultEngine;
//!
//! let mut engine = InsultEngine::builder()
//!     .seed(42)
//!     .with_corpus(Category::Adjective, WordCorpus::from_text("ugly"))
//!     .with_corpus(Category::Noun, WordCorpus::from_text("troll"))
//!     .build();
//!
//! let scope = Scope::channel("general");
//! let insult = engine.generate(Strategy::Random, "Bob", &scope).unwrap();
//! assert_eq!(insult, "Bob is an ugly troll (0,0)");
//!
//! engine.rate(&scope, 1).unwrap();
//! let insult = engine.generate(Strategy::Best, "Bob", &scope).unwrap();
//! assert_eq!(insult, "Bob is an ugly troll (1,1)");
//! ```

pub mod config;
pub mod core;
pub mod schema;

pub use crate::config::EngineConfig;
pub use crate::core::engine::{EngineError, InsultEngine, SharedInsultEngine};
