use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;

use wordgram_core::{GenerationInput, NGramModel, tokenize};

/// Inputs that end the interactive loop.
const QUIT_COMMANDS: [&str; 2] = ["quit", "q"];

/// Interactive prediction session over a trained model.
///
/// The random source is created once per session, so a seeded session
/// produces the same continuations for the same sequence of queries.
pub struct Session<'a> {
	model: &'a NGramModel,
	input: GenerationInput,
	rng: StdRng,
}

impl<'a> Session<'a> {
	pub fn new(model: &'a NGramModel, input: GenerationInput) -> Self {
		let rng = input.seed.make_rng();
		Self { model, input, rng }
	}

	/// Prompts for contexts until a quit command or end of input.
	pub fn run<R: BufRead, W: Write>(&mut self, reader: R, out: &mut W) -> io::Result<()> {
		let mut lines = reader.lines();
		loop {
			write!(out, "\nEnter context ({}): ", self.words_label())?;
			out.flush()?;

			let line = match lines.next() {
				Some(line) => line?,
				None => break,
			};
			let line = line.trim();

			if QUIT_COMMANDS.contains(&line) {
				break;
			}
			self.answer(line, out)?;
		}

		writeln!(out, "\nGoodbye!")
	}

	/// Prints the top predictions for `line` and one generated continuation.
	pub fn answer<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
		let context = tokenize(line);
		if context.len() != self.model.context_len() {
			return writeln!(out, "Please enter exactly {}.", self.words_label());
		}

		let distribution = match self.model.probabilities(context.as_slice()) {
			Ok(distribution) => distribution,
			Err(e) => return writeln!(out, "{e}"),
		};
		if distribution.is_empty() {
			return writeln!(out, "Context not found in training data.");
		}

		writeln!(out, "\nTop predictions:")?;
		for (word, probability) in distribution.top(self.input.top_k()) {
			writeln!(out, "  {} (probability: {:.3})", word, probability)?;
		}

		match self.model.generate(context.as_slice(), self.input.max_words, &mut self.rng) {
			Ok(words) => writeln!(out, "\nGenerated text: {}", words.join(" ")),
			Err(e) => writeln!(out, "{e}"),
		}
	}

	/// "2 words", "1 word"
	pub fn words_label(&self) -> String {
		match self.model.context_len() {
			1 => "1 word".to_owned(),
			n => format!("{n} words"),
		}
	}
}
