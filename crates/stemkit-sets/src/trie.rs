// Binary trie over the bits of byte strings.
//
// Each byte contributes eight levels, most significant bit first. Nodes
// carry no key material: a value is represented by the path of bits from
// the root.

/// Insertion and lookup of byte strings.
pub trait Trie {
    fn add(&mut self, value: &[u8]);

    /// Whether the bit path of `value` exists in the trie.
    fn find(&self, value: &[u8]) -> bool;
}

#[derive(Debug, Default)]
struct Node {
    children: [Option<Box<Node>>; 2],
    /// A value ends at this node.
    terminal: bool,
}

/// Bitwise radix trie.
///
/// [`Trie::find`] answers path membership: it is true for every added value
/// and for every prefix of one, and always true for the empty value.
/// [`Radix::contains`] answers exact membership.
#[derive(Debug, Default)]
pub struct Radix {
    root: Option<Box<Node>>,
    len: usize,
}

/// Bits of `value`, most significant bit of each byte first.
fn bits(value: &[u8]) -> impl Iterator<Item = usize> + '_ {
    value
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |shift| usize::from((byte >> shift) & 1)))
}

impl Radix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct values added.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `value` itself was added.
    pub fn contains(&self, value: &[u8]) -> bool {
        self.walk(value).is_some_and(|node| node.terminal)
    }

    fn walk(&self, value: &[u8]) -> Option<&Node> {
        let mut node = self.root.as_deref()?;
        for bit in bits(value) {
            node = node.children[bit].as_deref()?;
        }
        Some(node)
    }
}

impl Trie for Radix {
    fn add(&mut self, value: &[u8]) {
        let mut node: &mut Node = self.root.get_or_insert_with(Box::default);
        for bit in bits(value) {
            node = node.children[bit].get_or_insert_with(Box::default).as_mut();
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    fn find(&self, value: &[u8]) -> bool {
        if self.root.is_none() {
            return value.is_empty();
        }
        self.walk(value).is_some()
    }
}

impl<V: AsRef<[u8]>> FromIterator<V> for Radix {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut trie = Radix::new();
        for value in iter {
            trie.add(value.as_ref());
        }
        trie
    }
}

impl Drop for Radix {
    // Paths are eight nodes per byte; drop them with an explicit stack
    // rather than recursively.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_added_values() {
        let mut trie = Radix::new();
        trie.add(b"asdf");
        assert!(trie.find(b"asdf"));

        assert!(!trie.find(b"qwer"));
        trie.add(b"qwer");
        assert!(trie.find(b"qwer"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn empty_value() {
        let mut trie = Radix::new();
        assert!(trie.find(b""));
        assert!(!trie.find(b"zxcv"));
        assert!(!trie.contains(b""));

        trie.add(b"");
        assert!(trie.find(b""));
        assert!(trie.contains(b""));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn find_accepts_prefixes_contains_does_not() {
        let trie: Radix = ["asdf"].into_iter().collect();
        assert!(trie.find(b"as"));
        assert!(!trie.contains(b"as"));
        assert!(trie.contains(b"asdf"));
        assert!(!trie.find(b"asdfg"));
    }

    #[test]
    fn values_differing_in_one_bit() {
        // 'a' = 0x61, 'c' = 0x63
        let trie: Radix = ["a"].into_iter().collect();
        assert!(trie.contains(b"a"));
        assert!(!trie.contains(b"c"));
        assert!(!trie.find(b"c"));
    }

    #[test]
    fn duplicate_adds_count_once() {
        let mut trie = Radix::new();
        trie.add(b"x");
        trie.add(b"x");
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn arbitrary_bytes() {
        let values: Vec<Vec<u8>> = vec![vec![0x00], vec![0xff, 0x00], vec![0x80; 3]];
        let trie: Radix = values.iter().collect();
        for value in &values {
            assert!(trie.contains(value));
        }
        assert!(!trie.contains(&[0xff]));
        assert!(trie.find(&[0xff]));
        assert!(!trie.contains(&[0x01]));
    }

    #[test]
    fn deep_values_drop_cleanly() {
        let long = vec![0xa5u8; 64 * 1024];
        let mut trie = Radix::new();
        trie.add(&long);
        assert!(trie.contains(&long));
        drop(trie);
    }
}
