use std::io::{self, BufRead};

use trigram_core::io::read_tokens;
use trigram_core::{GenerationConfig, Generator, TrigramModel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, controlled by RUST_LOG (e.g. RUST_LOG=debug)
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        return Err(e);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // The corpus path is the single line read from stdin
    let mut filename = String::new();
    io::stdin().lock().read_line(&mut filename)?;
    let filename = filename.trim();

    // Tokens are dropped once the model is built
    let model = {
        let tokens = read_tokens(filename)?;
        TrigramModel::build_parallel(&tokens)?
    };
    log::info!(
        "model built from '{}': {} prefixes, {} trigrams",
        filename,
        model.len(),
        model.trigram_count()
    );

    let config = GenerationConfig::default();
    let count = config.sentence_count;
    let generator = Generator::new(&model, config);

    // Any failure aborts the whole run
    let mut rng = rand::rng();
    for _ in 0..count {
        println!("{}", generator.generate(&mut rng)?);
    }

    Ok(())
}
