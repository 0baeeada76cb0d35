//! Corpus frequencies used to rank candidate splits.

use std::{
    io::{BufRead, BufReader, Write},
    path::Path,
};

use fs_err as fs;
use fs_err::File;
use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{dictionary::Dictionary, Component};
use crate::{tokenizer, types::*, utils, Error};

/// Something which knows how often n-grams occur.
pub trait FrequencyProvider {
    /// The count of an n-gram. Tokens of the n-gram are separated by a single space.
    fn frequency(&self, ngram: &str) -> u64;

    /// The total number of unigrams.
    fn total(&self) -> u64;

    fn frequency_of(&self, tokens: &[&str]) -> u64 {
        self.frequency(&tokens.join(" "))
    }
}

/// Every known word counts once. Allows ranking without a corpus.
impl FrequencyProvider for Dictionary {
    fn frequency(&self, ngram: &str) -> u64 {
        self.contains(ngram) as u64
    }

    fn total(&self) -> u64 {
        self.len() as u64
    }
}

/// N-gram counts held in memory. Keys are lowercase with tokens separated by a single space.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NGramIndex {
    counts: DefaultHashMap<String, u64>,
    total: u64,
}

impl FrequencyProvider for NGramIndex {
    fn frequency(&self, ngram: &str) -> u64 {
        self.counts
            .get(&utils::normalize_whitespace(&ngram.to_lowercase()))
            .copied()
            .unwrap_or(0)
    }

    fn total(&self) -> u64 {
        self.total
    }
}

impl Component for NGramIndex {
    fn name() -> &'static str {
        "ngram index"
    }
}

impl NGramIndex {
    /// Adds `count` occurences of `ngram`.
    pub fn insert(&mut self, ngram: &str, count: u64) {
        let key = utils::normalize_whitespace(&ngram.to_lowercase());
        if key.is_empty() {
            return;
        }

        if !key.contains(' ') {
            self.total += count;
        }
        *self.counts.entry(key).or_insert(0) += count;
    }

    /// Reads counts in the `ngram\tcount` format. Malformed lines are skipped, counts of repeated n-grams are summed.
    pub fn read<R: BufRead>(&mut self, reader: R) -> Result<(), Error> {
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let parsed = line
                .rsplit_once('\t')
                .and_then(|(ngram, count)| Some((ngram, count.trim().parse::<u64>().ok()?)));

            match parsed {
                Some((ngram, count)) => self.insert(ngram, count),
                None => debug!("Skipping malformed n-gram line {}: {:?}", i + 1, line),
            }
        }

        Ok(())
    }

    /// Reads all count files in a directory, in sorted order.
    /// # Errors
    /// - If the directory or one of the files in it can not be read.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, Error> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut index = NGramIndex::default();
        for path in &paths {
            index.read(BufReader::new(File::open(path)?))?;
        }

        info!(
            "Read {} n-grams from {} file(s) in {}.",
            index.len(),
            paths.len(),
            dir.as_ref().display()
        );
        Ok(index)
    }

    /// Counts all n-grams of length `1..=max_n` within each text. Only word tokens are counted and
    /// n-grams never cross text boundaries.
    pub fn count<I, S>(texts: I, max_n: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = NGramIndex::default();

        for text in texts {
            let words: Vec<_> = tokenizer::tokenize(text.as_ref())
                .into_iter()
                .filter(|x| tokenizer::is_word(x.as_str()))
                .map(|x| x.as_str().to_lowercase())
                .collect();

            for n in 1..=max_n {
                for window in words.windows(n) {
                    index.insert(&window.join(" "), 1);
                }
            }
        }

        index
    }

    /// Writes the counts in the `ngram\tcount` format read by [NGramIndex::read], sorted by n-gram.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        for (ngram, count) in self.counts.iter().sorted() {
            writeln!(writer, "{}\t{}", ngram, count)?;
        }

        Ok(())
    }

    /// The number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
