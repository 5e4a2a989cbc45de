//! Domain vocabulary shared by the engine and its callers.

pub mod category;
pub mod pair;
pub mod rating;
pub mod scope;
pub mod strategy;
