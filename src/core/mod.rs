//! Corpus loading, rating ledgers, selection and composition.

pub mod composer;
pub mod corpus;
pub mod engine;
pub mod ledger;
pub mod selection;
pub mod storage;
