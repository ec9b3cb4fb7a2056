//! Session-scoped vector retrieval

mod index;

pub use index::{SearchResult, SessionIndex};
