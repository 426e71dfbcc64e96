//! Profiling hooks. With the `profile` feature, `span!` records a flamegraph span for the rest of
//! the enclosing scope; without it, `span!` expands to nothing.

#[cfg(feature = "profile")]
pub use no_nonsense_flamegraphs::span;

#[cfg(not(feature = "profile"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __pretty_doc_span {
    ($name:expr) => {};
}

// `macro_export` puts the macro at the crate root, so re-export it here to keep call sites
// uniform: `use crate::infra::span`.
#[cfg(not(feature = "profile"))]
pub use crate::__pretty_doc_span as span;
