//! Orders candidate splits by how plausible their parts are according to corpus frequencies.

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use super::{
    frequency::FrequencyProvider,
    splitter::{DecompoundedWord, DecompoundingTree, SplitNode},
};
use crate::Error;

/// Computes the score of a split. Higher is better.
#[enum_dispatch]
pub trait Score {
    fn score(&self, split: &DecompoundedWord, frequencies: &dyn FrequencyProvider) -> f64;
}

/// Geometric mean of the frequencies of the parts, see Koehn & Knight (2003), "Empirical Methods for Compound Splitting".
/// A single unknown part makes the score zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometricMean {}

impl Score for GeometricMean {
    fn score(&self, split: &DecompoundedWord, frequencies: &dyn FrequencyProvider) -> f64 {
        let mut log_sum = 0.;

        for stem in split.stems() {
            let freq = frequencies.frequency(&stem);
            if freq == 0 {
                return 0.;
            }
            log_sum += (freq as f64).ln();
        }

        (log_sum / split.len() as f64).exp()
    }
}

/// Arithmetic mean of the frequencies of the parts. Lenient towards unknown parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticMean {}

impl Score for ArithmeticMean {
    fn score(&self, split: &DecompoundedWord, frequencies: &dyn FrequencyProvider) -> f64 {
        let sum: u64 = split
            .stems()
            .iter()
            .map(|x| frequencies.frequency(x))
            .sum();

        sum as f64 / split.len() as f64
    }
}

/// Log-probability of the parts occuring independently, with additive smoothing.
/// Every additional part lowers the score, so splits have to be earned by frequent parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Probability {
    pub smoothing: f64,
}

impl Default for Probability {
    fn default() -> Self {
        Probability { smoothing: 1. }
    }
}

impl Score for Probability {
    fn score(&self, split: &DecompoundedWord, frequencies: &dyn FrequencyProvider) -> f64 {
        let total = frequencies.total() as f64 + self.smoothing;

        split
            .stems()
            .iter()
            .map(|x| ((frequencies.frequency(x) as f64 + self.smoothing) / total).ln())
            .sum()
    }
}

#[enum_dispatch(Score)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// The scoring strategy of a [Ranker]. In [RankerOptions] JSON, the strategy is named by a `"type"` field
/// e. g. `{"type": "probability", "smoothing": 0.5}`.
pub enum Strategy {
    GeometricMean,
    ArithmeticMean,
    Probability,
}

impl Default for Strategy {
    fn default() -> Self {
        GeometricMean::default().into()
    }
}

/// How to order splits with equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Prefer splits with fewer parts, in particular the unsplit word.
    FewerFragments,
    /// Prefer splits with more parts.
    MoreFragments,
    /// Keep the order of the input.
    Stable,
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::FewerFragments
    }
}

impl TieBreak {
    fn cmp(&self, a: &DecompoundedWord, b: &DecompoundedWord) -> Ordering {
        match self {
            TieBreak::FewerFragments => a.len().cmp(&b.len()),
            TieBreak::MoreFragments => b.len().cmp(&a.len()),
            TieBreak::Stable => Ordering::Equal,
        }
    }
}

/// Where to look for the best split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Search {
    /// Rank all distinct splits in the tree.
    Flat,
    /// Descend from the root into the best child as long as it improves on its parent.
    Tree,
}

impl Default for Search {
    fn default() -> Self {
        Search::Flat
    }
}

/// Internally tagged representation of [Strategy] for human-readable formats.
/// bincode can not read internally tagged enums, so other formats use the derived representation.
mod tagged_strategy {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{ArithmeticMean, GeometricMean, Probability, Strategy};

    #[derive(Serialize, Deserialize)]
    #[serde(tag = "type", rename_all = "snake_case")]
    enum Tagged {
        GeometricMean(GeometricMean),
        ArithmeticMean(ArithmeticMean),
        Probability(Probability),
    }

    pub fn serialize<S: Serializer>(strategy: &Strategy, serializer: S) -> Result<S::Ok, S::Error> {
        if !serializer.is_human_readable() {
            return strategy.serialize(serializer);
        }

        let tagged = match strategy.clone() {
            Strategy::GeometricMean(x) => Tagged::GeometricMean(x),
            Strategy::ArithmeticMean(x) => Tagged::ArithmeticMean(x),
            Strategy::Probability(x) => Tagged::Probability(x),
        };
        tagged.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Strategy, D::Error> {
        if !deserializer.is_human_readable() {
            return Strategy::deserialize(deserializer);
        }

        Ok(match Tagged::deserialize(deserializer)? {
            Tagged::GeometricMean(x) => x.into(),
            Tagged::ArithmeticMean(x) => x.into(),
            Tagged::Probability(x) => x.into(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Options to configure the ranker.
pub struct RankerOptions {
    #[serde(with = "tagged_strategy")]
    pub strategy: Strategy,
    pub tie_break: TieBreak,
    pub search: Search,
}

impl RankerOptions {
    /// # Errors
    /// - If the smoothing of [Probability] is not a positive number. Unknown parts would score `-inf`.
    pub fn validate(&self) -> Result<(), Error> {
        if let Strategy::Probability(Probability { smoothing }) = &self.strategy {
            if !(smoothing.is_finite() && *smoothing > 0.) {
                return Err(Error::InvalidConfig(format!(
                    "probability smoothing must be positive, got {}",
                    smoothing
                )));
            }
        }

        Ok(())
    }
}

/// A split with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSplit {
    split: DecompoundedWord,
    score: f64,
}

impl RankedSplit {
    pub fn split(&self) -> &DecompoundedWord {
        &self.split
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn into_split(self) -> DecompoundedWord {
        self.split
    }
}

impl From<RankedSplit> for DecompoundedWord {
    fn from(ranked: RankedSplit) -> Self {
        ranked.split
    }
}

/// Scores and orders splits. Cheap to create, only borrows the frequencies.
#[derive(Clone, Copy)]
pub struct Ranker<'a> {
    frequencies: &'a dyn FrequencyProvider,
    options: &'a RankerOptions,
}

impl<'a> Ranker<'a> {
    pub fn new(frequencies: &'a dyn FrequencyProvider, options: &'a RankerOptions) -> Self {
        Ranker {
            frequencies,
            options,
        }
    }

    fn score(&self, split: DecompoundedWord) -> RankedSplit {
        let score = self.options.strategy.score(&split, self.frequencies);
        RankedSplit { split, score }
    }

    fn cmp(&self, a: &RankedSplit, b: &RankedSplit) -> Ordering {
        b.score
            .total_cmp(&a.score)
            .then_with(|| self.options.tie_break.cmp(&a.split, &b.split))
    }

    /// Orders `splits` from best to worst. The sort is stable, so ranking a ranked list does not change it.
    pub fn rank<I>(&self, splits: I) -> Vec<RankedSplit>
    where
        I: IntoIterator,
        I::Item: Into<DecompoundedWord>,
    {
        let mut ranked: Vec<_> = splits
            .into_iter()
            .map(|x| self.score(x.into()))
            .collect();
        ranked.sort_by(|a, b| self.cmp(a, b));

        ranked
    }

    /// The best of `splits`, `None` if there are no splits.
    pub fn highest_rank<I>(&self, splits: I) -> Option<RankedSplit>
    where
        I: IntoIterator,
        I::Item: Into<DecompoundedWord>,
    {
        self.rank(splits).into_iter().next()
    }

    /// Greedily descends the tree from the root, moving to the best child of the current node as long
    /// as it scores strictly higher than the current node.
    pub fn highest_rank_in_tree(&self, tree: &DecompoundingTree) -> RankedSplit {
        let mut node: &SplitNode = tree.root();
        let mut best = self.score(node.value().clone());

        loop {
            let child = node
                .children()
                .iter()
                .map(|x| (x, self.score(x.value().clone())))
                .min_by(|a, b| self.cmp(&a.1, &b.1));

            match child {
                Some((child, ranked)) if ranked.score > best.score => {
                    node = child;
                    best = ranked;
                }
                _ => return best,
            }
        }
    }
}
