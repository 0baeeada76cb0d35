use std::io::Write;

use decompound::{
    components::{
        dictionary::{Dictionary, LinkingMorphemes},
        frequency::{FrequencyProvider, NGramIndex},
        phrase::PhraseAnnotator,
        Component,
    },
    Decompounder, DecompounderConfig,
};
use lazy_static::lazy_static;
use quickcheck_macros::quickcheck;
use tempfile::TempDir;

const WORDS: &str = "\
Kapitän|noun
mütze
dampf
schiff
fahrt

hund
haus
tür
";

lazy_static! {
    static ref DECOMPOUNDER: Decompounder = Decompounder::new(
        Dictionary::from_reader(WORDS.as_bytes()).unwrap(),
        LinkingMorphemes::for_lang("de").unwrap(),
    );
}

fn write_file(dir: &TempDir, name: &str, content: &str) {
    let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

#[test]
fn splits_example_compounds() {
    assert_eq!(
        DECOMPOUNDER.split("Kapitänsmütze"),
        vec!["Kapitäns", "mütze"]
    );
    assert_eq!(DECOMPOUNDER.split("Hundehaus"), vec!["Hunde", "haus"]);
    assert_eq!(DECOMPOUNDER.split("Haustür"), vec!["Haus", "tür"]);
    assert_eq!(DECOMPOUNDER.split("umfallen"), vec!["umfallen"]);
}

#[test]
fn can_split_empty_word() {
    assert_eq!(DECOMPOUNDER.split(""), vec![""]);
}

#[quickcheck]
fn parts_reconstruct_the_word(word: String) -> bool {
    DECOMPOUNDER.split(&word).join("") == word
}

#[quickcheck]
fn words_without_dictionary_words_are_not_split(word: String) -> bool {
    let decompounder = Decompounder::new(Dictionary::default(), LinkingMorphemes::default());

    decompounder.split(&word) == vec![word]
}

#[quickcheck]
fn ranking_is_idempotent(word: String) -> bool {
    let ranker = DECOMPOUNDER.ranker();

    let once = DECOMPOUNDER.candidates(&word);
    let twice = ranker.rank(once.clone());

    once == twice
}

#[test]
fn builds_from_config_file() {
    let dir = TempDir::new().unwrap();

    write_file(&dir, "words.txt", WORDS);
    write_file(&dir, "morphemes.txt", "s\n\n| joins with an e\ne\n");
    std::fs::create_dir(dir.path().join("counts")).unwrap();
    write_file(
        &dir,
        "counts/1gms.txt",
        "kapitänsmütze\t2\nkapitän\t40\nmütze\t30\nbroken line\n",
    );
    write_file(
        &dir,
        "config.json",
        r#"{
            "lang": "de",
            "dictionary": "words.txt",
            "linking_morphemes": "morphemes.txt",
            "ngrams": "counts",
            "splitter": {"max_tree_depth": 3},
            "ranker": {"strategy": {"type": "geometric_mean"}}
        }"#,
    );

    let decompounder = DecompounderConfig::from_path(dir.path().join("config.json"))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(decompounder.morphemes().len(), 2);
    assert_eq!(decompounder.splitter_options().max_tree_depth, 3);
    assert_eq!(
        decompounder.split("Kapitänsmütze"),
        vec!["Kapitäns", "mütze"]
    );

    let candidates = decompounder.candidates("Kapitänsmütze");
    assert_eq!(candidates[0].split().to_string(), "kapitän(s)+mütze");
    assert_eq!(candidates[1].split().to_string(), "kapitänsmütze");
    assert!((candidates[0].score() - (40f64 * 30.).sqrt()).abs() < 1e-9);
}

#[test]
fn compiled_decompounder_can_be_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("decompounder.bin");

    DECOMPOUNDER
        .to_writer(std::fs::File::create(&path).unwrap())
        .unwrap();
    let loaded = <Decompounder as Component>::new(&path).unwrap();

    assert_eq!(loaded.split("Haustür"), vec!["Haus", "tür"]);
}

#[test]
fn counted_ngrams_rank_splits() {
    let dir = TempDir::new().unwrap();
    let ngrams = NGramIndex::count(
        vec![
            "Der Hund bellt vor dem Haus.",
            "Die Tür zum Haus ist offen, der Hund läuft hinaus.",
        ],
        2,
    );
    ngrams
        .write(std::fs::File::create(dir.path().join("counts.txt")).unwrap())
        .unwrap();

    let decompounder = Decompounder::new(
        Dictionary::from_reader(WORDS.as_bytes()).unwrap(),
        LinkingMorphemes::for_lang("de").unwrap(),
    )
    .with_ngrams(NGramIndex::from_dir(dir.path()).unwrap());

    assert_eq!(decompounder.split("Haustür"), vec!["Haus", "tür"]);
    assert_eq!(decompounder.split("Hundehaus"), vec!["Hunde", "haus"]);
}

#[test]
fn counts_from_all_files_are_summed() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "b.txt", "haus\t5\nhaus tür\t2\n");
    write_file(&dir, "a.txt", "haus\t3\ntür\t1\nbroken\n");
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    write_file(&dir, "nested/c.txt", "haus\t100\n");

    let ngrams = NGramIndex::from_dir(dir.path()).unwrap();

    assert_eq!(ngrams.frequency("haus"), 8);
    assert_eq!(ngrams.frequency_of(&["haus", "tür"]), 2);
    assert_eq!(ngrams.total(), 9);
    assert_eq!(ngrams.len(), 3);

    let mut written = Vec::new();
    ngrams.write(&mut written).unwrap();
    assert_eq!(
        String::from_utf8(written).unwrap(),
        "haus\t8\nhaus tür\t2\ntür\t1\n"
    );
}

#[test]
fn missing_ngram_directory_is_fatal() {
    assert!(NGramIndex::from_dir("/this/path/does/not/exist").is_err());
}

#[test]
fn phrases_are_annotated_from_file() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "phrases.txt", "# adverbials\nzu Hause\tADV\nvor allem\n");

    let annotator = PhraseAnnotator::from_path(dir.path().join("phrases.txt"), true).unwrap();
    let text = "Vor allem bleibt der Kapitän zu Hause.";
    let matches = annotator.annotate_text(text);

    assert_eq!(matches.len(), 2);
    assert_eq!(&text[matches[0].span.byte().clone()], "Vor allem");
    assert_eq!(matches[0].value, None);
    assert_eq!(&text[matches[1].span.byte().clone()], "zu Hause");
    assert_eq!(matches[1].value.as_deref(), Some("ADV"));
}
