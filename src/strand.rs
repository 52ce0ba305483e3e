//! Strand container.
//!
//! A [`Strand`] is a named chain of nucleotide symbols. Nodes live in an
//! arena owned by the strand and are linked by index:
//! - appending is O(1) through the tail link
//! - reversal relinks the nodes in place without allocating
//! - dropping the strand releases the arena, and with it every node, once
//!
//! The container does not check the alphabet. Any `char` can be stored.

use std::fmt;

/// Symbol returned by [`Strand::get_data`] for a position past the end.
pub const NO_SYMBOL: char = '\0';

/// Marker written after the last symbol when rendering a strand.
pub const END_MARKER: &str = "END";

/// Name given to strands built through `Default`.
const DEFAULT_NAME: &str = "default strand";

#[derive(Debug, Clone)]
struct Node {
    data: char,
    next: Option<usize>,
}

/// A named, ordered chain of symbols.
#[derive(Debug, Clone)]
pub struct Strand {
    name: String,
    nodes: Vec<Node>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl Strand {
    /// Creates an empty strand with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates a strand holding every character of `symbols`, in order.
    pub fn from_symbols(name: impl Into<String>, symbols: &str) -> Self {
        let mut strand = Self::new(name);
        strand.extend(symbols.chars());
        strand
    }

    /// Appends a symbol at the end of the strand.
    pub fn insert_end(&mut self, data: char) {
        let idx = self.nodes.len();
        self.nodes.push(Node { data, next: None });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Returns the strand label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of symbols in the strand.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the strand holds no symbol.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets the symbol at a 0-based position by walking from the head.
    ///
    /// Positions at or past the end give `None`.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.iter().nth(pos)
    }

    /// Same as [`Strand::char_at`], with [`NO_SYMBOL`] standing in for `None`.
    pub fn get_data(&self, pos: usize) -> char {
        self.char_at(pos).unwrap_or(NO_SYMBOL)
    }

    /// Reverses the strand in place.
    ///
    /// Each node is relinked to its predecessor in a single walk, then head
    /// and tail trade places. Name and length are untouched.
    pub fn reverse(&mut self) {
        let mut prev: Option<usize> = None;
        let mut curr = self.head;

        while let Some(idx) = curr {
            let next = self.nodes[idx].next;
            self.nodes[idx].next = prev;
            prev = curr;
            curr = next;
        }

        self.tail = self.head;
        self.head = prev;
    }

    /// Iterates over the symbols from head to tail.
    pub fn iter(&self) -> Symbols<'_> {
        Symbols {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Renders the strand with `link` between symbols, followed by `END`.
    pub fn render(&self, link: &str) -> String {
        let mut out = String::with_capacity(self.len() * (link.len() + 1) + END_MARKER.len());
        for c in self.iter() {
            out.push(c);
            out.push_str(link);
        }
        out.push_str(END_MARKER);
        out
    }

    /// Collects the symbols into a plain string.
    pub fn to_symbol_string(&self) -> String {
        self.iter().collect()
    }
}

impl Default for Strand {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

impl Extend<char> for Strand {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.nodes.reserve(iter.size_hint().0);
        for c in iter {
            self.insert_end(c);
        }
    }
}

impl PartialEq for Strand {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Strand {}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{}→", c)?;
        }
        f.write_str(END_MARKER)
    }
}

impl<'a> IntoIterator for &'a Strand {
    type Item = char;
    type IntoIter = Symbols<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over the symbols of a [`Strand`].
#[derive(Debug, Clone)]
pub struct Symbols<'a> {
    nodes: &'a [Node],
    current: Option<usize>,
    remaining: usize,
}

impl Iterator for Symbols<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let idx = self.current?;
        let node = &self.nodes[idx];
        self.current = node.next;
        self.remaining -= 1;
        Some(node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Symbols<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strand_is_empty() {
        let strand = Strand::new("seq1");
        assert_eq!(strand.name(), "seq1");
        assert_eq!(strand.len(), 0);
        assert!(strand.is_empty());
        assert_eq!(strand.char_at(0), None);
        assert_eq!(strand.to_string(), "END");
    }

    #[test]
    fn test_default_name() {
        assert_eq!(Strand::default().name(), "default strand");
    }

    #[test]
    fn test_insert_end() {
        let mut strand = Strand::new("seq1");
        strand.insert_end('A');
        assert_eq!(strand.len(), 1);
        assert_eq!(strand.char_at(0), Some('A'));

        strand.insert_end('T');
        strand.insert_end('G');
        assert_eq!(strand.len(), 3);
        assert_eq!(strand.to_symbol_string(), "ATG");
    }

    #[test]
    fn test_char_at_out_of_range() {
        let strand = Strand::from_symbols("seq1", "ACGT");
        assert_eq!(strand.char_at(3), Some('T'));
        assert_eq!(strand.char_at(strand.len()), None);
        assert_eq!(strand.char_at(100), None);
        assert_eq!(strand.get_data(4), NO_SYMBOL);
        assert_eq!(strand.get_data(1), 'C');
    }

    #[test]
    fn test_reverse() {
        let mut strand = Strand::from_symbols("seq1", "AATTGC");
        strand.reverse();
        assert_eq!(strand.to_symbol_string(), "CGTTAA");
        assert_eq!(strand.len(), 6);
        assert_eq!(strand.name(), "seq1");
    }

    #[test]
    fn test_reverse_twice_restores_order() {
        let original = Strand::from_symbols("seq1", "ATGCCGTAA");
        let mut strand = original.clone();
        strand.reverse();
        assert_ne!(strand, original);
        strand.reverse();
        assert_eq!(strand, original);
    }

    #[test]
    fn test_reverse_empty_and_single() {
        let mut empty = Strand::new("empty");
        empty.reverse();
        assert!(empty.is_empty());
        assert_eq!(empty.iter().count(), 0);

        let mut single = Strand::from_symbols("single", "G");
        single.reverse();
        assert_eq!(single.to_symbol_string(), "G");
    }

    #[test]
    fn test_insert_after_reverse_goes_to_new_end() {
        let mut strand = Strand::from_symbols("seq1", "ACG");
        strand.reverse();
        strand.insert_end('T');
        assert_eq!(strand.to_symbol_string(), "GCAT");
        assert_eq!(strand.len(), 4);

        strand.reverse();
        assert_eq!(strand.to_symbol_string(), "TACG");
    }

    #[test]
    fn test_iter_is_exact_size() {
        let strand = Strand::from_symbols("seq1", "ACGTA");
        let mut iter = strand.iter();
        assert_eq!(iter.len(), 5);
        iter.next();
        assert_eq!(iter.len(), 4);
    }

    #[test]
    fn test_render() {
        let strand = Strand::from_symbols("seq1", "ATG");
        assert_eq!(strand.to_string(), "A→T→G→END");
        assert_eq!(strand.render("->"), "A->T->G->END");
    }

    #[test]
    fn test_equality_ignores_layout() {
        let mut reversed = Strand::from_symbols("seq1", "GCA");
        reversed.reverse();
        let built = Strand::from_symbols("seq1", "ACG");
        assert_eq!(reversed, built);

        let renamed = Strand::from_symbols("other", "ACG");
        assert_ne!(built, renamed);
    }
}
