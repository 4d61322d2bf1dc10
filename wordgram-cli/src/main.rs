use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use wordgram_core::{GenerationInput, NGramModel, SeedMode, load_corpus};

mod session;

use session::Session;

/// Word n-gram next-word predictor.
#[derive(Parser, Debug)]
#[command(name = "wordgram")]
#[command(about = "Train a word n-gram model on a text corpus and predict the next word")]
#[command(version)]
struct Args {
	/// Training text file, or a directory of .txt files
	#[arg(long, default_value = "corpus/train-text.txt")]
	corpus: PathBuf,

	/// Order of the model (contexts hold n - 1 words)
	#[arg(short = 'n', long = "order", default_value_t = 3)]
	order: usize,

	/// Number of predictions shown for a context
	#[arg(short = 'k', long, default_value_t = 5)]
	top_k: usize,

	/// Number of words in a generated continuation
	#[arg(short = 'w', long, default_value_t = 10)]
	max_words: usize,

	/// Seed for the random source (reproducible runs)
	#[arg(long)]
	seed: Option<u64>,

	/// Answer a single context and exit instead of prompting
	#[arg(long)]
	context: Option<String>,

	/// Print model statistics as JSON
	#[arg(long)]
	stats_json: bool,

	/// Number of most common contexts listed in the statistics
	#[arg(long, default_value_t = 5)]
	top_contexts: usize,
}

impl Args {
	/// Maps the query-time options onto a `GenerationInput`.
	fn generation_input(&self) -> Result<GenerationInput, Box<dyn std::error::Error>> {
		let mut input = GenerationInput::default();
		input.set_top_k(self.top_k)?;
		input.max_words = self.max_words;
		input.seed = SeedMode::from(self.seed);
		Ok(input)
	}
}

/// Loads and trains the model, prints its statistics, then answers queries
/// read from `stdin` (or the single `--context` query).
fn run<R: BufRead, W: Write>(args: &Args, stdin: R, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
	let input = args.generation_input()?;
	let mut model = NGramModel::new(args.order)?;

	let documents = load_corpus(&args.corpus)?;
	log::info!("Training {}-gram model on {} document(s)...", args.order, documents.len());
	for document in &documents {
		let report = model.train(&document.text);
		log::debug!("{}: {:?}", document.name, report);
	}

	let stats = model.stats(args.top_contexts);
	if args.stats_json {
		writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
	} else {
		writeln!(out, "\n{}", stats)?;
	}

	let mut session = Session::new(&model, input);
	match &args.context {
		Some(context) => session.answer(context, out)?,
		None => {
			writeln!(out, "=== Interactive Prediction ===")?;
			writeln!(
				out,
				"Enter {} to predict the next word (or 'quit' to exit):",
				session.words_label()
			)?;
			session.run(stdin, out)?;
		}
	}
	out.flush()?;

	Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();
	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());
	run(&args, io::stdin().lock(), &mut out)
}
