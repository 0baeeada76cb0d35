use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Range,
    sync::Arc,
};

use crate::{types::*, utils};

/// A contiguous piece of a word. Offsets are in chars relative to the start of the word.
#[derive(Debug, Clone)]
pub struct Fragment {
    chars: Range<usize>,
    morpheme_len: usize,
    splittable: bool,
}

impl Fragment {
    pub(crate) fn new(chars: Range<usize>, morpheme_len: usize, splittable: bool) -> Self {
        debug_assert!(morpheme_len <= chars.len());

        Fragment {
            chars,
            morpheme_len,
            splittable,
        }
    }

    /// The chars covered by this fragment, including the linking morpheme.
    pub fn chars(&self) -> &Range<usize> {
        &self.chars
    }

    /// The chars covered by this fragment without the linking morpheme.
    pub fn stem_chars(&self) -> Range<usize> {
        self.chars.start..self.chars.end - self.morpheme_len
    }

    /// The number of chars of the linking morpheme at the end of this fragment. Zero if there is none.
    pub fn morpheme_len(&self) -> usize {
        self.morpheme_len
    }

    /// Whether the splitter may split this fragment again.
    pub fn is_splittable(&self) -> bool {
        self.splittable
    }
}

// fragments are equal if they cover the same text, whether they may be split again does not matter
impl PartialEq for Fragment {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars && self.morpheme_len == other.morpheme_len
    }
}

impl Eq for Fragment {}

impl Hash for Fragment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chars.hash(state);
        self.morpheme_len.hash(state);
    }
}

/// A word together with one way to split it. The fragments always tile the word: there are no gaps
/// and no overlaps, so concatenating [DecompoundedWord::parts] gives back the word.
#[derive(Debug, Clone)]
pub struct DecompoundedWord {
    word: Arc<str>,
    offsets: Arc<[usize]>,
    fragments: Vec<Fragment>,
}

impl DecompoundedWord {
    /// The trivial split: the whole word as one splittable fragment.
    pub fn unsplit(word: &str) -> Self {
        let offsets: Arc<[usize]> = utils::char_offsets(word).into();
        let n_chars = offsets.len() - 1;

        DecompoundedWord {
            word: word.into(),
            offsets,
            fragments: vec![Fragment::new(0..n_chars, 0, true)],
        }
    }

    /// Replaces the last fragment with `left` (carrying a linking morpheme of `morpheme_len` chars) and
    /// `rest`, splitting at char `at`.
    pub(crate) fn split_last(&self, at: usize, morpheme_len: usize) -> Self {
        let mut fragments = self.fragments.clone();
        let last = fragments.pop().expect("a decompounded word has at least one fragment");

        debug_assert!(last.chars.start < at && at < last.chars.end);

        fragments.push(Fragment::new(last.chars.start..at, morpheme_len, false));
        fragments.push(Fragment::new(at..last.chars.end, 0, true));

        DecompoundedWord {
            word: Arc::clone(&self.word),
            offsets: Arc::clone(&self.offsets),
            fragments,
        }
    }

    /// The text of the chars `chars` of the word.
    pub(crate) fn slice(&self, chars: Range<usize>) -> &str {
        &self.word[self.offsets[chars.start]..self.offsets[chars.end]]
    }

    fn span(&self, chars: Range<usize>) -> Span {
        Span::new(
            self.offsets[chars.start]..self.offsets[chars.end],
            chars,
        )
    }

    /// The word this is a split of.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether this splits the word into more than one fragment.
    pub fn is_split(&self) -> bool {
        self.fragments.len() > 1
    }

    /// The text of each fragment in its original casing, linking morphemes included.
    pub fn parts(&self) -> Vec<&str> {
        self.fragments
            .iter()
            .map(|x| self.slice(x.chars.clone()))
            .collect()
    }

    /// The lowercase dictionary form of each fragment i. e. without linking morphemes.
    pub fn stems(&self) -> Vec<String> {
        self.fragments
            .iter()
            .map(|x| self.slice(x.stem_chars()).to_lowercase())
            .collect()
    }

    /// The linking morpheme at the end of each fragment, if any.
    pub fn morphemes(&self) -> Vec<Option<&str>> {
        self.fragments
            .iter()
            .map(|x| {
                if x.morpheme_len == 0 {
                    None
                } else {
                    Some(self.slice(x.chars.end - x.morpheme_len..x.chars.end))
                }
            })
            .collect()
    }

    /// The span of the stem of the `index`th fragment relative to the word.
    pub fn stem_span(&self, index: usize) -> Span {
        self.span(self.fragments[index].stem_chars())
    }

    /// The span of the linking morpheme of the `index`th fragment relative to the word, if it has one.
    pub fn morpheme_span(&self, index: usize) -> Option<Span> {
        let fragment = &self.fragments[index];

        if fragment.morpheme_len == 0 {
            None
        } else {
            Some(self.span(fragment.chars.end - fragment.morpheme_len..fragment.chars.end))
        }
    }
}

impl PartialEq for DecompoundedWord {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word && self.fragments == other.fragments
    }
}

impl Eq for DecompoundedWord {}

impl Hash for DecompoundedWord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
        self.fragments.hash(state);
    }
}

/// Formats as lowercase stems joined by `+` with linking morphemes in parentheses e. g. `kapitän(s)+mütze`.
impl fmt::Display for DecompoundedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (stem, morpheme)) in self
            .stems()
            .into_iter()
            .zip(self.morphemes())
            .enumerate()
        {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{}", stem)?;
            if let Some(morpheme) = morpheme {
                write!(f, "({})", morpheme.to_lowercase())?;
            }
        }

        Ok(())
    }
}
