//! Splitting and ranking combined: finds the best split of single words and marks compounds in text.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    dictionary::{Dictionary, LinkingMorphemes},
    frequency::{FrequencyProvider, NGramIndex},
    ranker::{RankedSplit, Ranker, RankerOptions, Search},
    splitter::{DecompoundedWord, Splitter, SplitterOptions},
    Component,
};
use crate::{tokenizer, types::*};

/// One part of a compound in a text.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundPart {
    /// The span of the part without linking morpheme.
    pub span: Span,
    /// The lowercase dictionary form of the part.
    pub stem: String,
    /// The span of the linking morpheme following this part, if there is one.
    pub morpheme: Option<Span>,
}

/// A word in a text which was split into more than one part.
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    pub span: Span,
    pub parts: Vec<CompoundPart>,
}

impl Compound {
    fn new(split: &DecompoundedWord, token: &Token) -> Self {
        let start = token.span().start();

        let parts = split
            .stems()
            .into_iter()
            .enumerate()
            .map(|(i, stem)| CompoundPart {
                span: split.stem_span(i).rshift(start),
                stem,
                morpheme: split.morpheme_span(i).map(|x| x.rshift(start)),
            })
            .collect();

        Compound {
            span: token.span().clone(),
            parts,
        }
    }
}

/// Owns all resources needed to decompound words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Decompounder {
    dictionary: Dictionary,
    morphemes: LinkingMorphemes,
    ngrams: Option<NGramIndex>,
    splitter_options: SplitterOptions,
    ranker_options: RankerOptions,
}

impl Component for Decompounder {
    fn name() -> &'static str {
        "decompounder"
    }
}

impl Decompounder {
    /// Creates a decompounder with default options which ranks by dictionary membership.
    pub fn new(dictionary: Dictionary, morphemes: LinkingMorphemes) -> Self {
        Decompounder {
            dictionary,
            morphemes,
            ..Decompounder::default()
        }
    }

    /// Ranks splits by the counts in `ngrams` instead of dictionary membership.
    pub fn with_ngrams(mut self, ngrams: NGramIndex) -> Self {
        self.ngrams = Some(ngrams);
        self
    }

    pub fn with_splitter_options(mut self, options: SplitterOptions) -> Self {
        self.splitter_options = options;
        self
    }

    pub fn with_ranker_options(mut self, options: RankerOptions) -> Self {
        self.ranker_options = options;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn morphemes(&self) -> &LinkingMorphemes {
        &self.morphemes
    }

    pub fn splitter_options(&self) -> &SplitterOptions {
        &self.splitter_options
    }

    pub fn ranker_options(&self) -> &RankerOptions {
        &self.ranker_options
    }

    fn frequencies(&self) -> &dyn FrequencyProvider {
        match &self.ngrams {
            Some(ngrams) => ngrams,
            None => &self.dictionary,
        }
    }

    pub fn splitter(&self) -> Splitter {
        Splitter::new(&self.dictionary, &self.morphemes, &self.splitter_options)
    }

    pub fn ranker(&self) -> Ranker {
        Ranker::new(self.frequencies(), &self.ranker_options)
    }

    /// All distinct splits of `word`, best first.
    pub fn candidates(&self, word: &str) -> Vec<RankedSplit> {
        self.ranker().rank(self.splitter().split(word).all_splits())
    }

    /// The best split of `word`. If the word can not be split, this is the unsplit word.
    pub fn decompound(&self, word: &str) -> DecompoundedWord {
        let tree = self.splitter().split(word);
        let ranker = self.ranker();

        let best = match self.ranker_options.search {
            Search::Flat => ranker
                .highest_rank(tree.all_splits())
                .expect("a split tree always contains its root"),
            Search::Tree => ranker.highest_rank_in_tree(&tree),
        };

        debug!("Best split of '{}' is {} ({}).", word, best.split(), best.score());
        best.into_split()
    }

    /// The parts of the best split of `word` in their original casing.
    pub fn split(&self, word: &str) -> Vec<String> {
        self.decompound(word)
            .parts()
            .into_iter()
            .map(|x| x.to_owned())
            .collect()
    }

    /// Finds all words in `text` which are compounds.
    pub fn annotate(&self, text: &str) -> Vec<Compound> {
        let min_len =
            self.splitter_options.min_word_length + self.splitter_options.min_rest_length;

        tokenizer::tokenize(text)
            .iter()
            .filter(|x| tokenizer::is_word(x.as_str()) && x.as_str().chars().count() >= min_len)
            .filter_map(|token| {
                let split = self.decompound(token.as_str());

                if split.is_split() {
                    Some(Compound::new(&split, token))
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ranker::{ArithmeticMean, TieBreak};

    fn decompounder() -> Decompounder {
        Decompounder::new(
            Dictionary::new(vec!["Kapitän", "mütze", "dampf", "schiff", "fahrt"]),
            LinkingMorphemes::new(vec!["s"]),
        )
    }

    #[test]
    fn splits_with_linking_morpheme() {
        assert_eq!(
            decompounder().split("Kapitänsmütze"),
            vec!["Kapitäns", "mütze"]
        );
    }

    #[test]
    fn unsplittable_word_is_returned_whole() {
        assert_eq!(decompounder().split("umfallen"), vec!["umfallen"]);
        assert_eq!(decompounder().split(""), vec![""]);
    }

    #[test]
    fn ngrams_override_dictionary_ranking() {
        let mut ngrams = NGramIndex::default();
        ngrams.insert("dampfschifffahrt", 1000);
        ngrams.insert("dampf", 1);
        ngrams.insert("schiff", 1);
        ngrams.insert("fahrt", 1);

        assert_eq!(
            decompounder().split("Dampfschifffahrt"),
            vec!["Dampf", "schiff", "fahrt"]
        );
        assert_eq!(
            decompounder().with_ngrams(ngrams).split("Dampfschifffahrt"),
            vec!["Dampfschifffahrt"]
        );
    }

    #[test]
    fn compounds_are_annotated_with_text_offsets() {
        let text = "Die Kapitänsmütze liegt auf dem Dampfschiff.";
        let compounds = decompounder().annotate(text);

        assert_eq!(compounds.len(), 2);

        let hat = &compounds[0];
        assert_eq!(&text[hat.span.byte().clone()], "Kapitänsmütze");
        assert_eq!(hat.parts.len(), 2);
        assert_eq!(&text[hat.parts[0].span.byte().clone()], "Kapitän");
        assert_eq!(hat.parts[0].stem, "kapitän");
        assert_eq!(
            &text[hat.parts[0].morpheme.clone().unwrap().byte().clone()],
            "s"
        );
        assert_eq!(&text[hat.parts[1].span.byte().clone()], "mütze");
        assert_eq!(*hat.parts[1].span.char(), 12..17);

        let schiff = &compounds[1];
        assert_eq!(
            schiff.parts.iter().map(|x| x.stem.as_str()).collect::<Vec<_>>(),
            vec!["dampf", "schiff"]
        );
    }

    #[test]
    fn tree_search_stops_at_worse_children() {
        let mut ngrams = NGramIndex::default();
        ngrams.insert("dampfschifffahrt", 5);
        ngrams.insert("dampf", 1);
        ngrams.insert("schifffahrt", 1);
        ngrams.insert("schiff", 1000);
        ngrams.insert("fahrt", 1000);
        let decompounder = decompounder().with_ngrams(ngrams);

        assert_eq!(
            decompounder.split("Dampfschifffahrt"),
            vec!["Dampf", "schiff", "fahrt"]
        );

        // dampf+schifffahrt scores lower than the unsplit word, so the descent never reaches the best split
        let decompounder = decompounder.with_ranker_options(RankerOptions {
            search: Search::Tree,
            tie_break: TieBreak::FewerFragments,
            ..RankerOptions::default()
        });
        assert_eq!(
            decompounder.split("Dampfschifffahrt"),
            vec!["Dampfschifffahrt"]
        );
    }

    #[test]
    fn can_be_serialized() {
        let decompounder = decompounder().with_ranker_options(RankerOptions {
            strategy: ArithmeticMean::default().into(),
            tie_break: TieBreak::MoreFragments,
            ..RankerOptions::default()
        });

        let mut bytes = Vec::new();
        decompounder.to_writer(&mut bytes).unwrap();
        let loaded = Decompounder::from_reader(bytes.as_slice()).unwrap();

        assert_eq!(loaded.split("Kapitänsmütze"), vec!["Kapitäns", "mütze"]);
        assert_eq!(loaded.dictionary().len(), 5);
        assert_eq!(loaded.ranker_options(), decompounder.ranker_options());
    }
}
