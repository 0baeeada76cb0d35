//! Recursive search for dictionary-valid split points in a word.
//!
//! Starting from the unsplit word, the last fragment is split at every position where the left part is a
//! known word, optionally followed by a linking morpheme. The right remainder is split again in the same way
//! until no split is found or the maximal tree depth is reached. All candidates are collected in a
//! [DecompoundingTree], choosing between them is up to a [Ranker][super::ranker::Ranker].

use std::cmp;

use log::debug;
use serde::{Deserialize, Serialize};

use super::dictionary::{Dictionary, LinkingMorphemes};
use crate::Error;

mod tree;
mod word;

pub use tree::{DecompoundingTree, SplitNode};
pub use word::{DecompoundedWord, Fragment};

/// How many split points to follow at each level of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Only follow the shortest known stem, with and without each linking morpheme after it.
    LeftToRight,
    /// Follow every valid split point.
    Exhaustive,
}

impl Default for SplitMode {
    fn default() -> Self {
        SplitMode::Exhaustive
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Options to configure the splitter.
pub struct SplitterOptions {
    pub mode: SplitMode,
    /// The minimum number of chars of a left part, not counting the linking morpheme.
    pub min_word_length: usize,
    /// The minimum number of chars of the remainder right of a split point.
    pub min_rest_length: usize,
    /// The maximum number of times a word is split in sequence. Bounds the size of the tree for long words.
    pub max_tree_depth: usize,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        SplitterOptions {
            mode: SplitMode::default(),
            min_word_length: 3,
            min_rest_length: 3,
            max_tree_depth: 5,
        }
    }
}

impl SplitterOptions {
    /// # Errors
    /// - If a minimum length is zero. Fragments must never be empty.
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_word_length == 0 || self.min_rest_length == 0 {
            return Err(Error::InvalidConfig(format!(
                "minimum fragment lengths must be at least one, got min_word_length={} and min_rest_length={}",
                self.min_word_length, self.min_rest_length
            )));
        }

        Ok(())
    }
}

/// Builds the [DecompoundingTree] of a word. Cheap to create, only borrows the resources.
#[derive(Debug, Clone, Copy)]
pub struct Splitter<'a> {
    dictionary: &'a Dictionary,
    morphemes: &'a LinkingMorphemes,
    options: &'a SplitterOptions,
}

impl<'a> Splitter<'a> {
    pub fn new(
        dictionary: &'a Dictionary,
        morphemes: &'a LinkingMorphemes,
        options: &'a SplitterOptions,
    ) -> Self {
        Splitter {
            dictionary,
            morphemes,
            options,
        }
    }

    /// Computes all candidate splits of `word`. A word without any valid split point gives a tree
    /// consisting only of the root.
    pub fn split(&self, word: &str) -> DecompoundingTree {
        let mut root = SplitNode::new(DecompoundedWord::unsplit(word));
        self.expand(&mut root, 0);

        let tree = DecompoundingTree::new(root);
        debug!("Split tree of '{}' has depth {}.", word, tree.depth());
        tree
    }

    fn expand(&self, node: &mut SplitNode, depth: usize) {
        if depth >= self.options.max_tree_depth {
            return;
        }

        for split in self.make_splits(node.value()) {
            let mut child = SplitNode::new(split);
            self.expand(&mut child, depth + 1);
            node.push(child);
        }
    }

    /// Splits the last fragment of `word` once at every valid split point. A left part whose stem
    /// is a known word gives a split directly after the stem and one after each linking morpheme
    /// following the stem.
    fn make_splits(&self, word: &DecompoundedWord) -> Vec<DecompoundedWord> {
        let last = match word.fragments().last() {
            Some(last) if last.is_splittable() => last.chars().clone(),
            _ => return Vec::new(),
        };

        let min_word_length = cmp::max(self.options.min_word_length, 1);
        let min_rest_length = cmp::max(self.options.min_rest_length, 1);

        let mut splits = Vec::new();
        if last.len() < min_word_length + min_rest_length {
            return splits;
        }
        let max_at = last.end - min_rest_length;

        for stem_end in last.start + min_word_length..=max_at {
            if !self.dictionary.contains(word.slice(last.start..stem_end)) {
                continue;
            }

            splits.push(word.split_last(stem_end, 0));

            for morpheme in self.morphemes.iter() {
                let at = stem_end + morpheme.chars().count();

                if at <= max_at && word.slice(stem_end..at).to_lowercase() == morpheme {
                    splits.push(word.split_last(at, at - stem_end));
                }
            }

            if self.options.mode == SplitMode::LeftToRight {
                break;
            }
        }

        splits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splits(
        dictionary: &[&str],
        morphemes: &[&str],
        options: &SplitterOptions,
        word: &str,
    ) -> Vec<String> {
        let dictionary = Dictionary::new(dictionary);
        let morphemes = LinkingMorphemes::new(morphemes);

        Splitter::new(&dictionary, &morphemes, options)
            .split(word)
            .all_splits()
            .iter()
            .map(|x| x.to_string())
            .collect()
    }

    #[test]
    fn unsplittable_word_gives_root_only() {
        let dictionary = Dictionary::new(vec!["fallen"]);
        let morphemes = LinkingMorphemes::new(vec!["s"]);
        let options = SplitterOptions::default();

        let tree = Splitter::new(&dictionary, &morphemes, &options).split("umfallen");

        assert!(tree.root().is_leaf());
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.all_splits()[0].parts(), vec!["umfallen"]);
    }

    #[test]
    fn linking_morpheme_is_bridged() {
        assert_eq!(
            splits(
                &["Kapitän", "mütze"],
                &["s"],
                &SplitterOptions::default(),
                "Kapitänsmütze"
            ),
            vec!["kapitänsmütze", "kapitän+smütze", "kapitän(s)+mütze"]
        );
    }

    #[test]
    fn remainder_is_split_recursively() {
        let tree_splits = splits(
            &["dampf", "schiff", "fahrt"],
            &[],
            &SplitterOptions::default(),
            "Dampfschifffahrt",
        );

        assert_eq!(
            tree_splits,
            vec!["dampfschifffahrt", "dampf+schifffahrt", "dampf+schiff+fahrt"]
        );
    }

    #[test]
    fn left_to_right_stops_at_first_split_point() {
        let options = SplitterOptions {
            mode: SplitMode::LeftToRight,
            ..SplitterOptions::default()
        };

        assert_eq!(
            splits(
                &["dampf", "dampfschiff", "fahrt"],
                &[],
                &options,
                "dampfschifffahrt"
            ),
            vec!["dampfschifffahrt", "dampf+schifffahrt"]
        );
    }

    #[test]
    fn left_to_right_bridges_linking_morphemes() {
        let options = SplitterOptions {
            mode: SplitMode::LeftToRight,
            ..SplitterOptions::default()
        };

        assert_eq!(
            splits(&["Kapitän", "mütze"], &["s"], &options, "Kapitänsmütze"),
            vec!["kapitänsmütze", "kapitän+smütze", "kapitän(s)+mütze"]
        );
    }

    #[test]
    fn plain_and_morpheme_split_at_same_point_are_distinct() {
        let dictionary = &["kind", "kinder", "garten"];

        assert_eq!(
            splits(dictionary, &["er"], &SplitterOptions::default(), "Kindergarten"),
            vec![
                "kindergarten",
                "kind+ergarten",
                "kind(er)+garten",
                "kinder+garten"
            ]
        );

        let options = SplitterOptions {
            mode: SplitMode::LeftToRight,
            ..SplitterOptions::default()
        };
        assert_eq!(
            splits(dictionary, &["er"], &options, "Kindergarten"),
            vec!["kindergarten", "kind+ergarten", "kind(er)+garten"]
        );
    }

    #[test]
    fn depth_is_bounded() {
        let options = SplitterOptions {
            max_tree_depth: 1,
            ..SplitterOptions::default()
        };

        let dictionary = Dictionary::new(vec!["dampf", "schiff", "fahrt"]);
        let morphemes = LinkingMorphemes::default();
        let tree = Splitter::new(&dictionary, &morphemes, &options).split("dampfschifffahrt");

        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn minimum_lengths_are_respected() {
        let options = SplitterOptions {
            min_word_length: 3,
            min_rest_length: 4,
            ..SplitterOptions::default()
        };

        // "um" is too short and "umhaus" leaves a rest of three chars
        assert_eq!(
            splits(&["um", "umhaus", "tür"], &[], &options, "umhaustür"),
            vec!["umhaustür"]
        );
    }

    #[test]
    fn zero_lengths_are_invalid() {
        let options = SplitterOptions {
            min_rest_length: 0,
            ..SplitterOptions::default()
        };

        assert!(options.validate().is_err());
        assert!(SplitterOptions::default().validate().is_ok());
    }
}
