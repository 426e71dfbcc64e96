//! Sample document types, displayed with this crate's combinators.
//!
//! - [`Json`](json::Json)

pub mod json;
