//! Conveniences for building common shapes of document, out of the primitives in
//! [`doc`](crate::doc).

use crate::doc::{indent, newline, seq, text, Doc};
use crate::rendering::render;
use once_cell::sync::Lazy;

/// `,`
pub static COMMA: Lazy<Doc> = Lazy::new(|| text(","));
/// `, `
pub static COMMA_SPACE: Lazy<Doc> = Lazy::new(|| text(", "));
/// `,` followed by a line break.
pub static COMMA_NEWLINE: Lazy<Doc> = Lazy::new(|| seq([comma(), newline()]));

pub fn comma() -> Doc {
    COMMA.clone()
}

pub fn comma_space() -> Doc {
    COMMA_SPACE.clone()
}

pub fn comma_newline() -> Doc {
    COMMA_NEWLINE.clone()
}

/// Display each of `docs`, with `sep` in between each consecutive pair. Zero documents is
/// [`empty`](crate::empty), and a single document is returned unchanged.
pub fn join<I: IntoIterator<Item = Doc>>(docs: I, sep: Doc) -> Doc {
    let mut joined = Vec::new();
    for (i, doc) in docs.into_iter().enumerate() {
        if i > 0 {
            joined.push(sep.clone());
        }
        joined.push(doc);
    }
    if joined.len() == 1 {
        joined.pop().unwrap_or_default()
    } else {
        seq(joined)
    }
}

/// Display `doc` between `before` and `after`, on the same line.
pub fn surround(before: &str, doc: Doc, after: &str) -> Doc {
    seq([text(before), doc, text(after)])
}

/// Display `start`, then `doc` indented by two on the following lines, then `end` on its own
/// line:
///
/// ```text
/// start
///   doc
/// end
/// ```
pub fn block(start: &str, doc: Doc, end: &str) -> Doc {
    seq([text(start), newline(), indent(2, doc), newline(), text(end)])
}

/// Like [`seq`](crate::seq), but takes its documents as separate arguments.
#[macro_export]
macro_rules! seqv {
    ($($doc:expr),* $(,)?) => {
        $crate::seq(::std::vec![$($doc),*])
    };
}

/// Something that can describe how it should be displayed, as a [`Doc`].
pub trait ToDoc {
    fn to_doc(&self) -> Doc;

    /// Render [`ToDoc::to_doc`].
    fn to_pretty_string(&self) -> String {
        render(&self.to_doc())
    }
}

impl ToDoc for Doc {
    fn to_doc(&self) -> Doc {
        self.clone()
    }
}
