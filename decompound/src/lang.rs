//! Built-in defaults for the supported languages. The configs are inlined at compile time from `configs/`.

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::{components::splitter::SplitterOptions, types::*, Error};

/// Language-specific defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct LangOptions {
    /// Fragments which may join the parts of a compound in this language.
    pub linking_morphemes: Vec<String>,
    #[serde(default)]
    pub splitter: SplitterOptions,
}

lazy_static! {
    static ref LANG_OPTIONS: DefaultHashMap<String, LangOptions> = serde_json::from_str(
        include_str!(concat!(env!("OUT_DIR"), "/lang_configs.json"))
    )
    .expect("inlined language configs must be valid");
}

/// Gets the defaults for a language code e. g. `"de"`.
/// # Errors
/// - If the language is not supported.
pub fn options(lang_code: &str) -> Result<&'static LangOptions, Error> {
    LANG_OPTIONS
        .get(lang_code)
        .ok_or_else(|| Error::UnknownLanguage(lang_code.to_owned(), supported()))
}

/// All supported language codes, sorted.
pub fn supported() -> Vec<String> {
    let mut codes: Vec<_> = LANG_OPTIONS.keys().cloned().collect();
    codes.sort();
    codes
}
