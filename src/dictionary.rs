//! # Dictionary
//!
//! Herein is support for loading the word list against which the board is
//! checked. All runtime lookups are performed against a [`Dictionary`], which
//! is a prefix tree of normalized (trimmed, uppercase) words.

use std::{
	fs::File,
	io::{self, BufRead, BufReader, ErrorKind, Read, Write},
	path::Path
};

use log::{error, trace, warn};
use pfx::PrefixTreeSet;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// A dictionary is a [`PrefixTreeSet`] of uppercase words.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Dictionary(PrefixTreeSet<String>);

impl Dictionary
{
	/// Construct an empty dictionary. Same as [`Default::default`]. An empty
	/// dictionary matches nothing, which is exactly the behavior required
	/// when the word list could not be loaded.
	#[inline]
	pub fn new() -> Self { Self(Default::default()) }

	/// Check if the dictionary is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Check if the dictionary contains the given word. The lookup is exact,
	/// so the caller must supply an uppercase word.
	///
	/// # Arguments
	///
	/// * `word` - The word to check.
	///
	/// # Returns
	///
	/// `true` if the dictionary contains the word, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn contains(&self, word: &str) -> bool { self.0.contains(word) }

	/// Populate the dictionary with the given words. Every word is trimmed
	/// and uppercased before insertion; words that are blank after trimming
	/// are skipped.
	///
	/// # Arguments
	///
	/// * `words` - The intended content of the dictionary.
	///
	/// # Returns
	///
	/// The number of words actually inserted.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T]) -> usize
	{
		let mut inserted = 0;
		for word in words
		{
			let word = word.as_ref().trim();
			if word.is_empty()
			{
				continue
			}
			self.0.insert(word.to_uppercase());
			inserted += 1;
		}
		inserted
	}

	/// Construct a dictionary from a block of text, one word per line. Both
	/// `\n` and `\r\n` line terminators are accepted.
	///
	/// # Arguments
	///
	/// * `text` - The word list.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the text.
	pub fn from_text(text: &str) -> Self
	{
		let words = text.lines().collect::<Vec<_>>();
		let mut dictionary = Self::new();
		dictionary.populate(&words);
		dictionary
	}

	/// Open a dictionary with the given name. Only the specified directory will
	/// be searched. `name` denotes the dictionary file, sans the extension. If
	/// a binary dictionary (`<name>.dict`) exists _and_ is newer than the text
	/// file (`<name>.txt`), it will be read; otherwise, the text file will be
	/// read and a binary dictionary will be written for next time. A binary
	/// dictionary that cannot be decoded is treated as stale.
	///
	/// # Arguments
	///
	/// * `dir` - The directory to search.
	/// * `name` - The name of the dictionary file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// If the text file cannot be opened or read, an error is returned.
	pub fn open<T: AsRef<Path>>(dir: T, name: &str) -> Result<Self, io::Error>
	{
		let dict_path = dir.as_ref().join(format!("{}.dict", name));
		let txt_path = dir.as_ref().join(format!("{}.txt", name));
		// Missing files make `metadata` fail, which lands us on the text path.
		let snapshot_is_fresh = dict_path
			.metadata()
			.and_then(|m| m.modified())
			.and_then(|dict_time| {
				txt_path
					.metadata()
					.and_then(|n| n.modified())
					.map(|txt_time| dict_time > txt_time)
			})
			.unwrap_or(false);
		if snapshot_is_fresh
		{
			// A damaged snapshot is rebuilt from the text file.
			match Self::deserialize_from_file(&dict_path)
			{
				Ok(dictionary) =>
				{
					trace!("Read binary dictionary: {}", dict_path.display());
					return Ok(dictionary)
				},
				Err(e) => warn!(
					"Ignoring unreadable binary dictionary: {}: {}",
					dict_path.display(),
					e
				)
			}
		}
		let dictionary = Self::read_from_file(&txt_path)?;
		trace!("Read text dictionary: {}", txt_path.display());
		match dictionary.serialize_to_file(&dict_path)
		{
			Ok(_) => trace!("Wrote binary dictionary: {}", dict_path.display()),
			Err(e) => warn!(
				"Failed to write binary dictionary: {}: {}",
				dict_path.display(),
				e
			)
		}
		Ok(dictionary)
	}

	/// Open a dictionary as per [`open`](Self::open), but never fail: if the
	/// dictionary cannot be loaded, log the problem and answer an empty
	/// dictionary. The game remains playable; no word will ever match.
	///
	/// # Arguments
	///
	/// * `dir` - The directory to search.
	/// * `name` - The name of the dictionary file.
	pub fn open_or_empty<T: AsRef<Path>>(dir: T, name: &str) -> Self
	{
		match Self::open(dir.as_ref(), name)
		{
			Ok(dictionary) => dictionary,
			Err(e) =>
			{
				error!(
					"Error loading dictionary {}/{}: {}",
					dir.as_ref().display(),
					name,
					e
				);
				Self::new()
			}
		}
	}

	/// Construct a dictionary from the contents of the given file. Each line
	/// in the file is considered a single word.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let reader = BufReader::new(file);
		let words = reader.lines().collect::<Result<Vec<_>, _>>()?;
		let mut dictionary = Self::new();
		let inserted = dictionary.populate(&words);
		trace!("Loaded {} words from {} lines", inserted, words.len());
		Ok(dictionary)
	}

	/// Deserialize a dictionary from the given file. The file must contain a
	/// serialized dictionary in [`bincode`](bincode) format.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let mut reader = BufReader::new(file);
		let mut content = Vec::new();
		reader.read_to_end(&mut content)?;
		let dictionary = bincode::deserialize(&content)
			.map_err(|_e| ErrorKind::InvalidData)?;
		Ok(dictionary)
	}

	/// Serialize the dictionary to the given file in [`bincode`](bincode)
	/// format.
	///
	/// # Errors
	///
	/// If the file cannot be created or written, an error is returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let mut file = File::create(path)?;
		let content =
			bincode::serialize(self).map_err(|_e| ErrorKind::InvalidData)?;
		file.write_all(&content)?;
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::{
		fs::{self, File},
		io::Write,
		time::Duration
	};

	use crate::dictionary::Dictionary;
	use tempfile::{tempdir, NamedTempFile};

	/// The path to the bundled word list.
	#[inline]
	#[must_use]
	const fn test_path() -> &'static str { "dict/english.txt" }

	/// Test basic functionality of [`Dictionary`]:
	///
	/// * [`Dictionary::new`]
	/// * [`Dictionary::is_empty`]
	/// * [`Dictionary::populate`]
	/// * [`Dictionary::contains`]
	#[test]
	fn test_populate()
	{
		let mut dictionary = Dictionary::new();
		assert!(dictionary.is_empty());
		assert!(!dictionary.contains("CODE"));
		let inserted = dictionary.populate(&["code", " Tree ", "", "   "]);
		assert_eq!(inserted, 2);
		assert!(dictionary.contains("CODE"));
		assert!(dictionary.contains("TREE"));
		assert!(!dictionary.contains("code"));
		assert!(!dictionary.contains(""));
	}

	/// Line terminators of either flavor are stripped, and trailing blank
	/// lines are harmless.
	#[test]
	fn test_from_text()
	{
		let dictionary = Dictionary::from_text("Code\r\nTREE\nwolf\r\n\r\n\n");
		assert!(dictionary.contains("CODE"));
		assert!(dictionary.contains("TREE"));
		assert!(dictionary.contains("WOLF"));
		assert!(!dictionary.contains("CODE\r"));
		assert!(!dictionary.contains(""));
	}

	/// Test reading a dictionary from a file:
	///
	/// * [`Dictionary::read_from_file`]
	#[test]
	fn test_read_from_file()
	{
		let dictionary = Dictionary::read_from_file(test_path()).unwrap();
		assert!(!dictionary.is_empty());
		assert!(dictionary.contains("CODE"));
		assert!(dictionary.contains("TREE"));
	}

	/// A file with CRLF terminators and mixed case reads the same as a tidy
	/// one.
	#[test]
	fn test_read_crlf_file()
	{
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(b"  Word\r\nLIST\r\n\r\n").unwrap();
		let dictionary = Dictionary::read_from_file(file.path()).unwrap();
		assert!(dictionary.contains("WORD"));
		assert!(dictionary.contains("LIST"));
	}

	/// Test serializing and deserializing a dictionary:
	///
	/// * [`Dictionary::serialize_to_file`]
	/// * [`Dictionary::deserialize_from_file`]
	#[test]
	fn test_serialize_to_file()
	{
		let dictionary = Dictionary::read_from_file(test_path()).unwrap();
		let file = NamedTempFile::new().unwrap();
		dictionary.serialize_to_file(file.path()).unwrap();
		let deserialized =
			Dictionary::deserialize_from_file(file.path()).unwrap();
		assert_eq!(dictionary, deserialized);
	}

	/// Opening a dictionary writes the binary snapshot beside the text file.
	#[test]
	fn test_open_writes_snapshot()
	{
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("tiny.txt"), "code\ntree\n").unwrap();
		let dictionary = Dictionary::open(dir.path(), "tiny").unwrap();
		assert!(dictionary.contains("CODE"));
		assert!(dir.path().join("tiny.dict").exists());
		let reopened = Dictionary::open(dir.path(), "tiny").unwrap();
		assert_eq!(dictionary, reopened);
	}

	/// A snapshot that is newer than the text file but cannot be decoded is
	/// replaced by a fresh one built from the text file.
	#[test]
	fn test_open_corrupt_snapshot()
	{
		let dir = tempdir().unwrap();
		let txt_path = dir.path().join("tiny.txt");
		let dict_path = dir.path().join("tiny.dict");
		fs::write(&txt_path, "code\ntree\n").unwrap();
		fs::write(&dict_path, [0xff; 16]).unwrap();
		let newer = fs::metadata(&txt_path).unwrap().modified().unwrap()
			+ Duration::from_secs(60);
		File::options()
			.write(true)
			.open(&dict_path)
			.unwrap()
			.set_modified(newer)
			.unwrap();
		assert!(Dictionary::deserialize_from_file(&dict_path).is_err());
		let dictionary = Dictionary::open(dir.path(), "tiny").unwrap();
		assert!(dictionary.contains("CODE"));
		assert!(dictionary.contains("TREE"));
		let snapshot = Dictionary::deserialize_from_file(&dict_path).unwrap();
		assert_eq!(snapshot, dictionary);
	}

	/// A missing dictionary is an error for [`Dictionary::open`] but merely
	/// an empty dictionary for [`Dictionary::open_or_empty`].
	#[test]
	fn test_open_missing()
	{
		let dir = tempdir().unwrap();
		assert!(Dictionary::open(dir.path(), "absent").is_err());
		let dictionary = Dictionary::open_or_empty(dir.path(), "absent");
		assert!(dictionary.is_empty());
	}
}
