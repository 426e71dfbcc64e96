use pretty_doc::{empty, indent, newline, seq, text, Doc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::iter;

/// A source of choices for building test documents: either random, or a systematic walk over
/// every possible sequence of choices.
pub trait Picker {
    /// Pick an integer in `0..max`.
    fn pick(&mut self, max: u32) -> u32;
}

impl Picker for StdRng {
    fn pick(&mut self, max: u32) -> u32 {
        self.gen_range(0..max)
    }
}

/// Picks every sequence of choices in turn. Each pick is a digit, and digits are added the first
/// time they're asked for.
#[derive(Default)]
struct Odometer {
    digits: Vec<(u32, u32)>,
    position: usize,
}

impl Picker for Odometer {
    fn pick(&mut self, max: u32) -> u32 {
        assert_ne!(max, 0);
        if self.position == self.digits.len() {
            self.digits.push((0, max));
        }
        let (digit, _) = self.digits[self.position];
        self.position += 1;
        digit
    }
}

impl Odometer {
    /// Move to the next sequence of choices. False once they've all been seen.
    fn turn(&mut self) -> bool {
        self.position = 0;
        while let Some((digit, max)) = self.digits.pop() {
            if digit + 1 < max {
                self.digits.push((digit + 1, max));
                return true;
            }
        }
        false
    }
}

/// Every document with `size` nodes.
pub fn all_docs(size: u32) -> Vec<Doc> {
    let mut odometer = Odometer::default();
    let mut docs = vec![make_doc(size, &mut odometer)];
    while odometer.turn() {
        docs.push(make_doc(size, &mut odometer));
    }
    docs
}

/// An endless stream of random documents with `size` nodes.
pub fn random_docs(size: u32, seed: [u8; 32]) -> impl Iterator<Item = Doc> {
    let mut rng = StdRng::from_seed(seed);
    iter::repeat_with(move || make_doc(size, &mut rng))
}

/// A document with `size` nodes. Its text is chosen to have interesting newlines: none, one in
/// the middle, and one at the end.
///
/// Panics if size is zero, as there are no documents of size 0!
pub fn make_doc<P: Picker>(mut size: u32, picker: &mut P) -> Doc {
    assert_ne!(size, 0);
    if size == 1 {
        return match picker.pick(6) {
            0 => empty(),
            1 => newline(),
            2 => text("a"),
            3 => text("bb"),
            4 => text("c\nd"),
            5 => text("e\n"),
            _ => unreachable!(),
        };
    }

    // Account for this node
    size -= 1;
    match picker.pick(2) {
        0 => {
            let amount = picker.pick(3) as usize;
            indent(amount, make_doc(size, picker))
        }
        1 => {
            // Divvy `size` out to any number of children.
            let mut children = vec![];
            while size > 0 {
                let child_size = picker.pick(size) + 1;
                size -= child_size;
                children.push(make_doc(child_size, picker));
            }
            seq(children)
        }
        _ => unreachable!(),
    }
}
