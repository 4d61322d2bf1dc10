use rand::SeedableRng;
use rand::rngs::StdRng;

use wordgram_core::{GenerationInput, NGramModel, SeedMode};

const CORPUS: &str = "The cat sat on the mat. The cat ran to the door. \
    The dog sat on the rug. The dog ran after the cat. \
    Don't let the cat out, the dog said.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Trigram model: two words of context predict the third
    let mut model = NGramModel::new(3)?;

    // Text must hold at least n words, otherwise nothing is learned
    let report = model.train("too short");
    println!("Short text trained: {} ({} words)", report.is_trained(), report.words);

    // Counts accumulate across calls
    let report = model.train(CORPUS);
    println!("Corpus trained: {} words, {} contexts", report.words, report.contexts);

    print!("{}", model.stats(3));

    // Full distribution, most likely first (ties sorted by word)
    let distribution = model.probabilities(&["the", "cat"])?;
    for (word, probability) in distribution.iter() {
        println!("P({} | the cat) = {:.3}", word, probability);
    }

    // Argmax prediction, None when the context was never seen
    println!("predict_next(the cat) = {:?}", model.predict_next(&["the", "cat"])?);
    println!("predict_next(purple cat) = {:?}", model.predict_next(&["purple", "cat"])?);

    // Contexts of the wrong size are rejected, never truncated
    match model.predict_next(&["cat"]) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {}", e),
    }

    // Sampling with a seeded random source is reproducible
    let mut rng = StdRng::seed_from_u64(2024);
    for i in 0..5 {
        println!("Sample {}: {:?}", i + 1, model.sample_next(&["the", "dog"], &mut rng)?);
    }

    // Generation stops early when the window reaches an unseen context
    let words = model.generate(&["the", "dog"], 12, &mut rng)?;
    println!("Generated: {}", words.join(" "));

    // Same thing, configured through a GenerationInput
    let mut input = GenerationInput::default();
    input.max_words = 8;
    input.seed = SeedMode::Fixed(7);
    println!("Generated (seed 7): {}", model.generate_with(&["the", "cat"], &input)?.join(" "));

    Ok(())
}
