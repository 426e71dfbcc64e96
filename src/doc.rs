use crate::error::DocError;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, BitXor, Shr};
use std::sync::Arc;

/// Number of spaces, for indentation.
pub type Width = usize;

/// A document: a description of some text to be rendered, built out of literal text, line breaks,
/// concatenation, and indentation.
///
/// Documents are immutable. Cloning one is cheap (it bumps a reference count), so the same
/// sub-document can be shared by any number of parents. Construct documents with the functions
/// in this module ([`empty`], [`text`], [`newline`], [`seq`], [`indent`]) or with the operator
/// shorthands, then turn them into strings with [`render`](crate::render).
#[derive(Clone)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum Doc {
    /// Display nothing.
    Empty,
    /// Display a piece of text verbatim. It may contain newlines, and those lines will be indented
    /// like any other.
    Text(Arc<str>),
    /// Display a single `\n`.
    Newline,
    /// Display each document in order, with nothing in between.
    Concat(Arc<[Doc]>),
    /// Display the contained document, with _every_ line of it (including the first, and
    /// including a trailing empty line) prefixed by the given number of spaces.
    Indent(Width, Arc<Doc>),
}

impl Default for Doc {
    fn default() -> Doc {
        Doc::Empty
    }
}

/// Display nothing.
pub fn empty() -> Doc {
    Doc::Empty
}

/// Display `s` exactly as given: no escaping, no trimming.
pub fn text<S: Into<Arc<str>>>(s: S) -> Doc {
    Doc::Text(s.into())
}

/// Format the arguments, then display the result as [`text`]. See also the [`textf!`] macro.
///
/// [`textf!`]: crate::textf
pub fn text_fmt(args: fmt::Arguments) -> Doc {
    match args.as_str() {
        Some(s) => text(s),
        None => text(fmt::format(args)),
    }
}

/// Display a line break.
pub fn newline() -> Doc {
    Doc::Newline
}

/// Display each of `docs` in order. An empty sequence is [`empty`].
pub fn seq<I: IntoIterator<Item = Doc>>(docs: I) -> Doc {
    let docs = docs.into_iter().collect::<Vec<_>>();
    if docs.is_empty() {
        Doc::Empty
    } else {
        Doc::Concat(docs.into())
    }
}

/// Indent every line of `doc` by `amount` spaces.
pub fn indent(amount: Width, doc: Doc) -> Doc {
    Doc::Indent(amount, Arc::new(doc))
}

/// Like [`indent`], but for a signed amount. Fails if `amount` is negative.
pub fn try_indent(amount: isize, doc: Doc) -> Result<Doc, DocError> {
    let amount = Width::try_from(amount).map_err(|_| DocError::NegativeIndent(amount))?;
    Ok(indent(amount, doc))
}

/// Construct a [`text`] document from a format string, like `format!`.
#[macro_export]
macro_rules! textf {
    ($($arg:tt)*) => {
        $crate::text_fmt(::std::format_args!($($arg)*))
    };
}

impl Add<Doc> for Doc {
    type Output = Doc;

    /// Shorthand for `seq([self, other])`.
    fn add(self, other: Doc) -> Doc {
        seq([self, other])
    }
}

impl BitXor<Doc> for Doc {
    type Output = Doc;

    /// Shorthand for `X + newline() + Y`.
    fn bitxor(self, other: Doc) -> Doc {
        seq([self, Doc::Newline, other])
    }
}

impl Shr<Doc> for Width {
    type Output = Doc;

    /// Shorthand for `indent(self, doc)`.
    fn shr(self, doc: Doc) -> Doc {
        indent(self, doc)
    }
}
