use std::io::BufWriter;

use clap::Parser;
use decompound::{components::Component, DecompounderConfig};
use fs_err::File;

#[derive(Parser)]
#[clap(
    version = "1.0",
    author = "Benjamin Minixhofer <bminixhofer@gmail.com>",
    about = "Builds a decompounder from a JSON config and stores it as binary."
)]
struct Opts {
    #[clap(long, short)]
    config: String,
    #[clap(long, short)]
    out: String,
}

fn main() -> Result<(), decompound::Error> {
    env_logger::init();
    let opts = Opts::parse();

    let decompounder = DecompounderConfig::from_path(&opts.config)?.build()?;
    decompounder.to_writer(BufWriter::new(File::create(&opts.out)?))?;

    Ok(())
}
