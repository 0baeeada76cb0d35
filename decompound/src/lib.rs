//! Dictionary-based splitting of compound words.
//! # Overview
//!
//! decompound has the following core abstractions:
//! - A [Dictionary][components::dictionary::Dictionary] and a set of
//!   [LinkingMorphemes][components::dictionary::LinkingMorphemes] loaded once from flat word lists.
//! - A [Splitter][components::splitter::Splitter] which searches a word for dictionary-valid split points and
//!   builds a [DecompoundingTree][components::splitter::DecompoundingTree] of candidate splits.
//! - A [Ranker][components::ranker::Ranker] ordering candidates by corpus frequency taken from a
//!   [FrequencyProvider][components::frequency::FrequencyProvider].
//! - A [Decompounder][components::decompounder::Decompounder] tying all of the above together.
//!
//! Independent of splitting, a [PhraseTree][components::phrase::PhraseTree] matches known token sequences.
//!
//! # Examples
//!
//! Split a word:
//!
//! ```
//! use decompound::components::{
//!     decompounder::Decompounder,
//!     dictionary::{Dictionary, LinkingMorphemes},
//! };
//!
//! let dictionary = Dictionary::new(vec!["Kapitän", "mütze"]);
//! let morphemes = LinkingMorphemes::new(vec!["s"]);
//! let decompounder = Decompounder::new(dictionary, morphemes);
//!
//! assert_eq!(decompounder.split("Kapitänsmütze"), vec!["Kapitäns", "mütze"]);
//! assert_eq!(decompounder.split("umfallen"), vec!["umfallen"]);
//! ```
//!
//! Inspect all candidates:
//!
//! ```
//! use decompound::components::{
//!     decompounder::Decompounder,
//!     dictionary::{Dictionary, LinkingMorphemes},
//! };
//!
//! let decompounder = Decompounder::new(
//!     Dictionary::new(vec!["dampf", "schiff", "fahrt", "dampfschiff"]),
//!     LinkingMorphemes::for_lang("de")?,
//! );
//!
//! for candidate in decompounder.candidates("Dampfschifffahrt") {
//!     println!("{} {}", candidate.split(), candidate.score());
//! }
//! # Ok::<(), decompound::Error>(())
//! ```

use std::io;

use thiserror::Error;

pub mod components;
pub mod config;
pub mod lang;
pub mod tokenizer;
pub mod types;
pub(crate) mod utils;

pub use components::decompounder::Decompounder;
pub use config::DecompounderConfig;

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// (De)serialization error. Can have occured during deserialization or during serialization.
    #[error(transparent)]
    Serialization(#[from] bincode::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("unknown language code '{0}'. Supported languages: {1:?}.")]
    UnknownLanguage(String, Vec<String>),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
