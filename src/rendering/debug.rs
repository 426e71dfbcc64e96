use crate::doc::Doc;
use std::fmt;

/// Show the top-level structure of a document, for debugging.
///
/// This is only one level deep: the children of a `Concat` or `Indent` are shown _rendered_, not
/// recursively dumped. Text is quoted and escaped, so that whitespace and newlines are visible.
/// The exact format is not stable.
pub fn debug(doc: &Doc) -> String {
    format!("{:?}", doc)
}

impl fmt::Debug for Doc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Doc::Empty => write!(f, "Empty"),
            Doc::Text(s) => write!(f, "Text({:?})", s),
            Doc::Newline => write!(f, "Newline"),
            Doc::Concat(docs) => {
                write!(f, "Seq(")?;
                for (i, doc) in docs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", doc)?;
                }
                write!(f, ")")
            }
            Doc::Indent(amount, doc) => write!(f, "Indent({}, {})", amount, doc),
        }
    }
}
