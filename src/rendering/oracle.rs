use crate::doc::Doc;

/// For testing!
///
/// Render the document the simple way: every `Indent` renders its contents to a string, splits
/// it into lines, and prefixes each one. This is quadratic in the nesting depth, but it's easy to
/// see that it's right, so [`render`](crate::render) is tested against it.
pub fn oracular_render(doc: &Doc) -> String {
    match doc {
        Doc::Empty => String::new(),
        Doc::Text(s) => s.to_string(),
        Doc::Newline => "\n".to_owned(),
        Doc::Concat(docs) => docs.iter().map(oracular_render).collect(),
        Doc::Indent(amount, doc) => {
            let prefix = " ".repeat(*amount);
            oracular_render(doc)
                .split('\n')
                .map(|line| format!("{}{}", prefix, line))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}
