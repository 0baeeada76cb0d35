use clap::Parser;
use decompound::{components::Component, Decompounder, DecompounderConfig};

#[derive(Parser)]
#[clap(
    version = "1.0",
    author = "Benjamin Minixhofer <bminixhofer@gmail.com>"
)]
struct Opts {
    words: Vec<String>,
    /// JSON config to build the decompounder from.
    #[clap(long, short, conflicts_with = "binary", required_unless_present = "binary")]
    config: Option<String>,
    /// Decompounder binary written by `compile`.
    #[clap(long, short)]
    binary: Option<String>,
    /// Print all candidates with their scores instead of only the best split.
    #[clap(long, short)]
    all: bool,
}

fn main() -> Result<(), decompound::Error> {
    env_logger::init();
    let opts = Opts::parse();

    let decompounder = match (&opts.config, &opts.binary) {
        (Some(config), _) => DecompounderConfig::from_path(config)?.build()?,
        (None, Some(binary)) => <Decompounder as Component>::new(binary)?,
        (None, None) => unreachable!("clap requires one of --config and --binary"),
    };

    for word in &opts.words {
        if opts.all {
            println!("{}", word);
            for candidate in decompounder.candidates(word) {
                println!("\t{}\t{}", candidate.split(), candidate.score());
            }
        } else {
            println!("{}\t{}", word, decompounder.split(word).join(" "));
        }
    }

    Ok(())
}
