use std::io::BufWriter;

use clap::Parser;
use decompound::components::frequency::NGramIndex;
use fs_err as fs;
use log::info;

#[derive(Parser)]
#[clap(
    version = "1.0",
    author = "Benjamin Minixhofer <bminixhofer@gmail.com>",
    about = "Counts n-grams in text files and writes them in the `ngram\\tcount` format."
)]
struct Opts {
    inputs: Vec<String>,
    #[clap(long, short)]
    out: String,
    /// Longest n-gram to count.
    #[clap(long, short = 'n', default_value = "2")]
    max_n: usize,
}

fn main() -> Result<(), decompound::Error> {
    env_logger::init();
    let opts = Opts::parse();

    let mut texts = Vec::new();
    for input in &opts.inputs {
        texts.push(fs::read_to_string(input)?);
    }

    let index = NGramIndex::count(texts.iter().flat_map(|x| x.lines()), opts.max_n);
    info!("Counted {} distinct n-grams.", index.len());

    index.write(BufWriter::new(fs::File::create(&opts.out)?))?;
    Ok(())
}
