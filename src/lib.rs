//! Build a tree of text, concatenation, line breaks, and indentation, then render it into a
//! string. Indentation nests: every line inside an `Indent`, however it got there, is prefixed by
//! the sum of the enclosing indentation amounts.
//!
//! ```
//! use pretty_doc::{block, join, render, text, comma_newline};
//!
//! let body = join(vec![text("a"), text("b")], comma_newline());
//! assert_eq!(render(&block("[", body, "]")), "[\n  a,\n  b\n]");
//! ```

mod combinators;
mod doc;
mod error;
mod infra;
mod rendering;

pub mod examples;

pub use combinators::{
    block, comma, comma_newline, comma_space, join, surround, ToDoc, COMMA, COMMA_NEWLINE,
    COMMA_SPACE,
};
pub use doc::{empty, indent, newline, seq, text, text_fmt, try_indent, Doc, Width};
pub use error::DocError;
pub use rendering::{debug, render, render_to};

pub mod testing {
    //! Slow reference implementations, for testing against.

    pub use crate::rendering::oracular_render;
}
