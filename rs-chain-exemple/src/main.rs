use std::env;
use std::error::Error;

use log::info;
use rs_chain_core::io::read_corpus;
use rs_chain_core::model::{ChainModel, ModelLimits, SentenceConfig, SentenceGenerator};

/// Corpus used when no path is given on the command line.
const EMBEDDED_CORPUS: &str = include_str!("../data/corpus.txt");

fn main() -> Result<(), Box<dyn Error>> {
    // Silent unless RUST_LOG is set, stdout only carries the sentences
    env_logger::init();

    // An optional positional path replaces the embedded corpus
    let corpus = match env::args().nth(1) {
        Some(path) => {
            info!("Loading corpus from {}", path);
            read_corpus(&path)?
        }
        None => EMBEDDED_CORPUS.to_owned(),
    };

    // Unbounded tables: the corpus size only matters for memory
    let model = ChainModel::from_corpus(&corpus, ModelLimits::default())?;

    // 1000 bytes per sentence, terminator slot included
    let generator = SentenceGenerator::new(&model, SentenceConfig::default())?;

    // Seeded once from OS entropy, every run is different
    let mut rng = rand::rng();

    // Generate sentences until one is a question
    let question = generator.generate_ending_with(&mut rng, '?')?;
    println!("{}", question);
    println!();

    // Then until one is an exclamation
    let exclamation = generator.generate_ending_with(&mut rng, '!')?;
    println!("{}", exclamation);

    Ok(())
}
