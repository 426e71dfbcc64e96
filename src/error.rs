/// The ways that constructing a [`Doc`](crate::Doc) can fail. Rendering cannot fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    #[error("Indentation amount must be non-negative, but was {0}.")]
    NegativeIndent(isize),
}
