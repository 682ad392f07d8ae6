// Consonant/vowel classification of letters within a word.
//
// `a e i o u` are always vowels. `y` takes the opposite role of the letter
// before it, and is a consonant at the start of a word. Every other byte is
// a consonant.

/// Letters that are vowels regardless of position.
const VOWELS: &[u8] = b"aeiou";

/// The role a letter plays at a given position of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Consonant,
    Vowel,
}

impl LetterClass {
    /// Single-letter code used in `c`/`v` encodings ("tapir" -> "cvcvc").
    pub fn symbol(self) -> char {
        match self {
            LetterClass::Consonant => 'c',
            LetterClass::Vowel => 'v',
        }
    }
}

/// Check whether a byte is one of the fixed vowels `a e i o u`.
///
/// `y` is not included: its role depends on context, see [`is_consonant`].
pub fn is_vowel_letter(b: u8) -> bool {
    VOWELS.contains(&b)
}

/// Returns `true` when the letter at position `i` acts as a consonant.
///
/// For `y`, the role alternates along a run of consecutive `y`s, starting
/// from the opposite of the letter preceding the run (or "consonant" when
/// the run starts the word). This walks back over the run instead of
/// recursing letter by letter, so long runs of `y` cost no stack.
///
/// # Panics
///
/// Panics if `i` is out of bounds for `word`.
pub fn is_consonant(word: &[u8], i: usize) -> bool {
    let b = word[i];
    if is_vowel_letter(b) {
        return false;
    }
    if b != b'y' {
        return true;
    }

    let run_start = word[..i]
        .iter()
        .rposition(|&c| c != b'y')
        .map_or(0, |p| p + 1);
    let run_starts_as_consonant = run_start == 0 || is_vowel_letter(word[run_start - 1]);

    run_starts_as_consonant == ((i - run_start) % 2 == 0)
}

/// Classify every position of `word`, front to back.
pub fn classes(word: &[u8]) -> Classes<'_> {
    Classes {
        word,
        pos: 0,
        prev: None,
    }
}

/// Iterator over the [`LetterClass`] of each position of a word.
///
/// Each letter is classified from its predecessor's class, so the whole
/// word is classified in one pass.
#[derive(Debug, Clone)]
pub struct Classes<'a> {
    word: &'a [u8],
    pos: usize,
    prev: Option<LetterClass>,
}

impl Iterator for Classes<'_> {
    type Item = LetterClass;

    fn next(&mut self) -> Option<LetterClass> {
        let &b = self.word.get(self.pos)?;
        self.pos += 1;

        let class = if is_vowel_letter(b) {
            LetterClass::Vowel
        } else if b == b'y' {
            match self.prev {
                Some(LetterClass::Vowel) | None => LetterClass::Consonant,
                Some(LetterClass::Consonant) => LetterClass::Vowel,
            }
        } else {
            LetterClass::Consonant
        };

        self.prev = Some(class);
        Some(class)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.word.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Classes<'_> {}
