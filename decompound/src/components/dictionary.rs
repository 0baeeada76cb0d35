//! Word lists consulted while splitting: the [Dictionary] of valid words and the [LinkingMorphemes]
//! which may join two words in a compound.
//!
//! Both are read from flat UTF-8 files with one entry per line. Anything after a `|` is a comment,
//! blank lines are skipped. Entries are lowercased on load.

use std::{
    io::{BufRead, BufReader},
    path::Path,
};

use fs_err::File;
use itertools::Itertools;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{lang, types::*, utils, Error};

const COMMENT: char = '|';

fn normalize<S: AsRef<str>>(entry: S) -> Option<String> {
    let entry = entry.as_ref().trim();

    if entry.is_empty() {
        None
    } else {
        Some(entry.to_lowercase())
    }
}

/// A set of known words. Immutable once built, lookups are case-insensitive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dictionary {
    words: DefaultHashSet<String>,
}

impl Dictionary {
    /// Creates a dictionary from a list of words. Words are lowercased, empty words are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Dictionary {
            words: words.into_iter().filter_map(normalize).collect(),
        }
    }

    /// Reads a dictionary from a word list.
    /// # Errors
    /// - If the file can not be opened or is not valid UTF-8.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let dictionary = Dictionary::from_reader(reader)?;

        info!(
            "Read dictionary with {} words from {}.",
            dictionary.len(),
            path.as_ref().display()
        );
        Ok(dictionary)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        Ok(Dictionary::new(utils::read_entries(reader, COMMENT)?))
    }

    /// Whether the dictionary contains `word`, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over all words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|x| x.as_str())
    }
}

/// Short fragments which may connect the parts of a compound e. g. the "s" in "Kapitänsmütze".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LinkingMorphemes {
    /// Sorted longest first, then alphabetically.
    morphemes: Vec<String>,
}

impl LinkingMorphemes {
    pub fn new<I, S>(morphemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let morphemes = morphemes
            .into_iter()
            .filter_map(normalize)
            .unique()
            .sorted_by(|a, b| {
                b.chars()
                    .count()
                    .cmp(&a.chars().count())
                    .then_with(|| a.cmp(b))
            })
            .collect();

        LinkingMorphemes { morphemes }
    }

    /// The built-in linking morphemes of a language.
    /// # Errors
    /// - If there are no built-in options for the language code.
    pub fn for_lang(lang_code: &str) -> Result<Self, Error> {
        Ok(LinkingMorphemes::new(
            &lang::options(lang_code)?.linking_morphemes,
        ))
    }

    /// Reads linking morphemes from a file in the same format as a [Dictionary].
    /// # Errors
    /// - If the file can not be opened or is not valid UTF-8.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let morphemes = LinkingMorphemes::from_reader(reader)?;

        info!(
            "Read {} linking morphemes from {}.",
            morphemes.len(),
            path.as_ref().display()
        );
        Ok(morphemes)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        Ok(LinkingMorphemes::new(utils::read_entries(reader, COMMENT)?))
    }

    pub fn contains(&self, morpheme: &str) -> bool {
        let morpheme = morpheme.to_lowercase();
        self.morphemes.iter().any(|x| *x == morpheme)
    }

    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    /// Iterates over the morphemes, longest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.morphemes.iter().map(|x| x.as_str())
    }
}
