use crate::doc::{Doc, Width};
use crate::infra::span;
use std::fmt;

/// Render the document to a string.
///
/// Every line that an `Indent` contains is prefixed by its amount of spaces, and nested indents
/// add up. This makes a single pass over the document, carrying the current indentation along, so
/// it takes time linear in the size of the output. It uses an explicit stack rather than
/// recursion, so deeply nested documents are fine.
pub fn render(doc: &Doc) -> String {
    span!("render");

    doc.to_string()
}

/// Render the document into any `fmt::Write`r, such as a `String` or a `fmt::Formatter`.
pub fn render_to<W: fmt::Write + ?Sized>(doc: &Doc, out: &mut W) -> fmt::Result {
    span!("render_to");

    let mut printer = Printer::new(out);
    let mut stack = vec![Chunk::Doc(doc)];
    while let Some(chunk) = stack.pop() {
        match chunk {
            Chunk::Dedent(amount) => printer.indent -= amount,
            Chunk::Doc(Doc::Empty) => (),
            Chunk::Doc(Doc::Text(s)) => printer.text(s)?,
            Chunk::Doc(Doc::Newline) => printer.newline()?,
            Chunk::Doc(Doc::Concat(docs)) => stack.extend(docs.iter().rev().map(Chunk::Doc)),
            Chunk::Doc(Doc::Indent(amount, doc)) => {
                // The first line of an `Indent` starts wherever the `Indent` does.
                printer.spaces(*amount)?;
                printer.indent += amount;
                stack.push(Chunk::Dedent(*amount));
                stack.push(Chunk::Doc(doc));
            }
        }
    }
    Ok(())
}

/// Remaining work. Children are pushed in reverse, so popping yields them in order.
enum Chunk<'d> {
    Doc(&'d Doc),
    /// Leave an `Indent` of this amount.
    Dedent(Width),
}

struct Printer<'w, W: fmt::Write + ?Sized> {
    out: &'w mut W,
    /// Sum of the amounts of every enclosing `Indent`.
    indent: Width,
}

impl<'w, W: fmt::Write + ?Sized> Printer<'w, W> {
    fn new(out: &'w mut W) -> Printer<'w, W> {
        Printer { out, indent: 0 }
    }

    fn text(&mut self, s: &str) -> fmt::Result {
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                self.newline()?;
            }
            self.out.write_str(line)?;
        }
        Ok(())
    }

    fn newline(&mut self) -> fmt::Result {
        self.out.write_char('\n')?;
        self.spaces(self.indent)
    }

    fn spaces(&mut self, amount: Width) -> fmt::Result {
        if amount == 0 {
            return Ok(());
        }
        write!(self.out, "{:amount$}", "", amount = amount)
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render_to(self, f)
    }
}
