use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CorpusError;

/// Extension of the training files picked up from a corpus directory.
pub const CORPUS_EXTENSION: &str = "txt";

/// One training document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
	/// File name without extension.
	pub name: String,
	/// Raw text, not yet tokenized.
	pub text: String,
}

/// Reads a whole text file into memory.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<String, CorpusError> {
	let path = path.as_ref();
	fs::read_to_string(path).map_err(|source| CorpusError::Io { path: path.to_path_buf(), source })
}

/// Loads the training documents found at `path`.
///
/// - A directory yields every `.txt` file directly inside it, sorted by name
///   (subdirectories are ignored).
/// - Anything else is read as a single file.
///
/// # Errors
/// - `CorpusError::Io` if a file or the directory cannot be read.
/// - `CorpusError::Empty` if no document holds any text.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<Corpus>, CorpusError> {
	let path = path.as_ref();

	let files = if path.is_dir() {
		list_files(path, CORPUS_EXTENSION)?
	} else {
		vec![path.to_path_buf()]
	};

	let mut documents = Vec::with_capacity(files.len());
	for file in files {
		let text = read_corpus(&file)?;
		log::debug!("Loaded {} ({} bytes)", file.display(), text.len());
		documents.push(Corpus { name: get_filename(&file), text });
	}

	if documents.iter().all(|document| document.text.is_empty()) {
		return Err(CorpusError::Empty { path: path.to_path_buf() });
	}

	Ok(documents)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./corpus/train-text.txt"` → `"train-text"`
/// - `"notes"` → `"notes"`
fn get_filename<P: AsRef<Path>>(path: P) -> String {
	path.as_ref()
		.file_stem()
		.map(|stem| stem.to_string_lossy().to_string())
		.unwrap_or_default()
}

/// Lists all files with a given extension in a directory, sorted by path.
fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, CorpusError> {
	let io_error = |source: std::io::Error| CorpusError::Io { path: dir.to_path_buf(), source };

	let mut files = Vec::new();
	for entry in fs::read_dir(dir).map_err(io_error)? {
		let path = entry.map_err(io_error)?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn test_single_file() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("train-text.txt");
		fs::write(&path, "the cat sat").unwrap();

		let documents = load_corpus(&path).unwrap();
		assert_eq!(documents, vec![Corpus { name: "train-text".to_owned(), text: "the cat sat".to_owned() }]);
	}

	#[test]
	fn test_directory_keeps_txt_files_sorted() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("b.txt"), "second").unwrap();
		fs::write(dir.path().join("a.txt"), "first").unwrap();
		fs::write(dir.path().join("ignored.md"), "nope").unwrap();
		fs::create_dir(dir.path().join("nested.txt")).unwrap();

		let names: Vec<String> = load_corpus(dir.path()).unwrap().into_iter().map(|d| d.name).collect();
		assert_eq!(names, vec!["a", "b"]);
	}

	#[test]
	fn test_missing_file_is_io_error() {
		let dir = tempdir().unwrap();
		let err = load_corpus(dir.path().join("missing.txt")).unwrap_err();
		assert!(matches!(err, CorpusError::Io { .. }));
	}

	#[test]
	fn test_empty_file_is_empty_corpus() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("empty.txt");
		fs::write(&path, "").unwrap();

		assert!(matches!(load_corpus(&path).unwrap_err(), CorpusError::Empty { .. }));
	}

	#[test]
	fn test_directory_without_text_files_is_empty_corpus() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("readme.md"), "hello").unwrap();

		assert!(matches!(load_corpus(dir.path()).unwrap_err(), CorpusError::Empty { .. }));
	}

	#[test]
	fn test_get_filename() {
		assert_eq!(get_filename("./corpus/train-text.txt"), "train-text");
		assert_eq!(get_filename("notes"), "notes");
	}
}
