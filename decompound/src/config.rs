//! Explicit configuration of a [Decompounder]: where its resources live and how to split and rank.
//!
//! Example config:
//! ```json
//! {
//!     "lang": "de",
//!     "dictionary": "words.txt",
//!     "ngrams": "counts/",
//!     "ranker": { "strategy": { "type": "geometric_mean" }, "tie_break": "fewer_fragments" }
//! }
//! ```
//! Relative paths are resolved against the directory of the config file.

use std::path::{Path, PathBuf};

use fs_err as fs;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    components::{
        decompounder::Decompounder,
        dictionary::{Dictionary, LinkingMorphemes},
        frequency::NGramIndex,
        ranker::RankerOptions,
        splitter::SplitterOptions,
    },
    lang, Error,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecompounderConfig {
    /// Language code to take default linking morphemes and splitter options from.
    #[serde(default)]
    pub lang: Option<String>,
    /// Word list with one word per line.
    pub dictionary: PathBuf,
    /// Linking morpheme list in the same format as the dictionary. Overrides the language default.
    #[serde(default)]
    pub linking_morphemes: Option<PathBuf>,
    /// Directory of n-gram count files. If not set, splits are ranked by dictionary membership.
    #[serde(default)]
    pub ngrams: Option<PathBuf>,
    /// Overrides the language default.
    #[serde(default)]
    pub splitter: Option<SplitterOptions>,
    #[serde(default)]
    pub ranker: RankerOptions,
}

impl DecompounderConfig {
    /// Creates a config with only a dictionary set.
    pub fn new<P: Into<PathBuf>>(dictionary: P) -> Self {
        DecompounderConfig {
            lang: None,
            dictionary: dictionary.into(),
            linking_morphemes: None,
            ngrams: None,
            splitter: None,
            ranker: RankerOptions::default(),
        }
    }

    /// Reads a JSON config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let config: DecompounderConfig = serde_json::from_str(&fs::read_to_string(path.as_ref())?)?;

        let base = path.as_ref().parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve(base))
    }

    /// Makes all relative paths relative to `base`.
    pub fn resolve(mut self, base: &Path) -> Self {
        let join = |path: PathBuf| {
            if path.is_relative() {
                base.join(path)
            } else {
                path
            }
        };

        self.dictionary = join(self.dictionary);
        self.linking_morphemes = self.linking_morphemes.map(join);
        self.ngrams = self.ngrams.map(join);
        self
    }

    /// Loads all resources and builds the decompounder.
    /// # Errors
    /// - If a resource can not be read.
    /// - If the language is not supported or the options are invalid. Options are checked before
    ///   any resource is read.
    pub fn build(&self) -> Result<Decompounder, Error> {
        let lang_options = self.lang.as_deref().map(lang::options).transpose()?;

        let splitter_options = self
            .splitter
            .clone()
            .or_else(|| lang_options.map(|x| x.splitter.clone()))
            .unwrap_or_default();
        splitter_options.validate()?;
        self.ranker.validate()?;

        let dictionary = Dictionary::from_path(&self.dictionary)?;
        if dictionary.is_empty() {
            warn!("Dictionary {} is empty.", self.dictionary.display());
        }

        let morphemes = match (&self.linking_morphemes, lang_options) {
            (Some(path), _) => LinkingMorphemes::from_path(path)?,
            (None, Some(options)) => LinkingMorphemes::new(&options.linking_morphemes),
            (None, None) => {
                warn!("Neither linking morphemes nor a language are set. Parts can only be joined directly.");
                LinkingMorphemes::default()
            }
        };

        let mut decompounder = Decompounder::new(dictionary, morphemes)
            .with_splitter_options(splitter_options)
            .with_ranker_options(self.ranker.clone());

        if let Some(path) = &self.ngrams {
            decompounder = decompounder.with_ngrams(NGramIndex::from_dir(path)?);
        }

        info!("Built decompounder from {}.", self.dictionary.display());
        Ok(decompounder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ranker::TieBreak, splitter::SplitMode};

    #[test]
    fn relative_paths_are_resolved() {
        let config: DecompounderConfig = serde_json::from_str(
            r#"{"dictionary": "words.txt", "ngrams": "/data/counts"}"#,
        )
        .unwrap();
        let config = config.resolve(Path::new("/etc/decompound"));

        assert_eq!(config.dictionary, PathBuf::from("/etc/decompound/words.txt"));
        assert_eq!(config.ngrams, Some(PathBuf::from("/data/counts")));
        assert_eq!(config.linking_morphemes, None);
    }

    #[test]
    fn options_have_defaults() {
        let config: DecompounderConfig = serde_json::from_str(
            r#"{
                "dictionary": "words.txt",
                "splitter": {"mode": "left_to_right"},
                "ranker": {"tie_break": "more_fragments"}
            }"#,
        )
        .unwrap();

        let splitter = config.splitter.unwrap();
        assert_eq!(splitter.mode, SplitMode::LeftToRight);
        assert_eq!(splitter.min_word_length, SplitterOptions::default().min_word_length);
        assert_eq!(config.ranker.tie_break, TieBreak::MoreFragments);
    }

    #[test]
    fn missing_dictionary_is_fatal() {
        let config = DecompounderConfig::new("/this/path/does/not/exist.txt");

        assert!(matches!(config.build(), Err(Error::Io(_))));
    }

    #[test]
    fn unknown_language_is_fatal() {
        let mut config = DecompounderConfig::new("words.txt");
        config.lang = Some("tlh".into());

        assert!(matches!(config.build(), Err(Error::UnknownLanguage(..))));
    }

    #[test]
    fn zero_smoothing_is_rejected_before_loading() {
        let config: DecompounderConfig = serde_json::from_str(
            r#"{
                "dictionary": "/this/path/does/not/exist.txt",
                "ranker": {"strategy": {"type": "probability", "smoothing": 0.0}}
            }"#,
        )
        .unwrap();

        assert!(matches!(config.build(), Err(Error::InvalidConfig(_))));
    }
}
