//! Lookup of known phrases i. e. token sequences in tokenized text.

use std::{
    io::{BufRead, BufReader},
    ops::Range,
    path::Path,
};

use fs_err::File;
use log::info;
use serde::{Deserialize, Serialize};

use super::Component;
use crate::{tokenizer, types::*, Error};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PhraseNode {
    children: DefaultHashMap<String, PhraseNode>,
    /// `Some` if a phrase ends at this node. Holds the value of the phrase, if it has one.
    end: Option<Option<String>>,
}

/// A prefix tree over token sequences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhraseTree {
    root: PhraseNode,
    len: usize,
}

impl PhraseTree {
    /// Adds a phrase. Adding a phrase again overwrites its value.
    /// Empty phrases are ignored.
    pub fn add_phrase<S: AsRef<str>>(&mut self, tokens: &[S], value: Option<String>) {
        if tokens.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for token in tokens {
            node = node
                .children
                .entry(token.as_ref().to_owned())
                .or_insert_with(PhraseNode::default);
        }

        if node.end.is_none() {
            self.len += 1;
        }
        node.end = Some(value);
    }

    /// Reads phrases from a file with one phrase per line. Tokens are separated by whitespace,
    /// an optional value follows after a tab. Lines starting with `#` are comments, a `#` anywhere
    /// else is part of the phrase.
    /// # Errors
    /// - If the file can not be opened or is not valid UTF-8.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let tree = PhraseTree::from_reader(reader)?;

        info!(
            "Read {} phrases from {}.",
            tree.len(),
            path.as_ref().display()
        );
        Ok(tree)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut tree = PhraseTree::default();

        for (tokens, value) in read_phrases(reader)? {
            tree.add_phrase(&tokens, value);
        }

        Ok(tree)
    }

    fn node<S: AsRef<str>>(&self, tokens: &[S]) -> Option<&PhraseNode> {
        let mut node = &self.root;
        for token in tokens {
            node = node.children.get(token.as_ref())?;
        }
        Some(node)
    }

    /// Whether `tokens` is exactly one of the phrases.
    pub fn contains<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        self.node(tokens).map_or(false, |x| x.end.is_some())
    }

    /// Whether `tokens` is the beginning of (or exactly) one of the phrases.
    pub fn contains_prefix<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        !tokens.is_empty() && self.node(tokens).is_some()
    }

    /// The longest phrase which `tokens` starts with. Returns the number of tokens of the phrase and its value.
    pub fn longest_match<S: AsRef<str>>(&self, tokens: &[S]) -> Option<(usize, Option<&str>)> {
        let mut node = &self.root;
        let mut longest = None;

        for (i, token) in tokens.iter().enumerate() {
            node = match node.children.get(token.as_ref()) {
                Some(node) => node,
                None => break,
            };

            if let Some(value) = &node.end {
                longest = Some((i + 1, value.as_deref()));
            }
        }

        longest
    }

    /// The number of phrases.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A phrase found in a text.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseMatch {
    /// The indices of the matched tokens.
    pub tokens: Range<usize>,
    /// From the start of the first to the end of the last matched token.
    pub span: Span,
    pub value: Option<String>,
}

/// Marks all occurences of known phrases in a text. Where phrases overlap, the longest match starting
/// leftmost wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhraseAnnotator {
    tree: PhraseTree,
    lowercase: bool,
}

impl Component for PhraseAnnotator {
    fn name() -> &'static str {
        "phrase annotator"
    }
}

impl PhraseAnnotator {
    /// Creates an annotator from phrases. If `lowercase` is set, matching ignores case.
    pub fn new<I, P, S>(phrases: I, lowercase: bool) -> Self
    where
        I: IntoIterator<Item = (P, Option<String>)>,
        P: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut tree = PhraseTree::default();
        for (phrase, value) in phrases {
            let tokens: Vec<_> = phrase
                .as_ref()
                .iter()
                .map(|x| Self::normalize(x.as_ref(), lowercase))
                .collect();
            tree.add_phrase(&tokens, value);
        }

        PhraseAnnotator { tree, lowercase }
    }

    /// Creates an annotator from a phrase file in the format read by [PhraseTree::from_path].
    /// If `lowercase` is set and phrases collide after lowercasing, the later value wins.
    pub fn from_path<P: AsRef<Path>>(path: P, lowercase: bool) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let annotator = PhraseAnnotator::from_reader(reader, lowercase)?;

        info!(
            "Read {} phrases from {}.",
            annotator.tree.len(),
            path.as_ref().display()
        );
        Ok(annotator)
    }

    pub fn from_reader<R: BufRead>(reader: R, lowercase: bool) -> Result<Self, Error> {
        Ok(PhraseAnnotator::new(read_phrases(reader)?, lowercase))
    }

    fn normalize(token: &str, lowercase: bool) -> String {
        if lowercase {
            token.to_lowercase()
        } else {
            token.to_owned()
        }
    }

    pub fn tree(&self) -> &PhraseTree {
        &self.tree
    }

    /// Finds the phrases in a sequence of tokens.
    pub fn annotate(&self, tokens: &[Token]) -> Vec<PhraseMatch> {
        let normalized: Vec<_> = tokens
            .iter()
            .map(|x| Self::normalize(x.as_str(), self.lowercase))
            .collect();

        let mut matches = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            match self.tree.longest_match(&normalized[i..]) {
                Some((len, value)) => {
                    let start = tokens[i].span();
                    let end = tokens[i + len - 1].span();

                    matches.push(PhraseMatch {
                        tokens: i..i + len,
                        span: Span::new(
                            start.byte().start..end.byte().end,
                            start.char().start..end.char().end,
                        ),
                        value: value.map(str::to_owned),
                    });
                    i += len;
                }
                None => i += 1,
            }
        }

        matches
    }

    /// Tokenizes `text` and finds the phrases in it.
    pub fn annotate_text(&self, text: &str) -> Vec<PhraseMatch> {
        self.annotate(&tokenizer::tokenize(text))
    }
}

/// Parses phrase lines into tokens and values, in file order.
fn read_phrases<R: BufRead>(reader: R) -> Result<Vec<(Vec<String>, Option<String>)>, Error> {
    let mut phrases = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim_start().starts_with('#') {
            continue;
        }

        let mut tab_split = line.splitn(2, '\t');
        let tokens: Vec<_> = tab_split
            .next()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        if tokens.is_empty() {
            continue;
        }

        let value = tab_split
            .next()
            .map(str::trim)
            .filter(|x| !x.is_empty())
            .map(str::to_owned);

        phrases.push((tokens, value));
    }

    Ok(phrases)
}
