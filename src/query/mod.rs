//! Data-fetching layer shared by the resource `*Queries` facades: a response
//! cache keyed by resource family and parameters, and the declared graph of
//! which families a mutation makes stale.

pub mod cache;
pub mod keys;

pub use cache::QueryCache;
pub use keys::{Family, InvalidationGraph, QueryKey};
