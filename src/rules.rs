//! # Rules
//!
//! The tunable parameters of the game: how long a word must be, and how much
//! each letter is worth. The board itself is always 10 columns by 20 rows.

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	str::FromStr
};

use crate::grid::COLUMNS;

////////////////////////////////////////////////////////////////////////////////
//                                Tile scores.                                //
////////////////////////////////////////////////////////////////////////////////

/// The point value of every letter, `A` through `Z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct TileScores([u32; 26]);

impl Default for TileScores
{
	/// The Scrabble tile values.
	fn default() -> Self
	{
		Self([
			1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3,
			1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10
		])
	}
}

impl TileScores
{
	/// Construct a table from explicit values, indexed from `A`.
	#[inline]
	pub const fn new(values: [u32; 26]) -> Self { Self(values) }

	/// Get the point value of a letter. Letters are matched without regard
	/// to case; anything outside `A`–`Z` is worth nothing.
	///
	/// # Arguments
	///
	/// * `letter` - The letter to value.
	///
	/// # Returns
	///
	/// The point value.
	#[inline]
	#[must_use]
	pub fn value(&self, letter: char) -> u32
	{
		Self::index(letter).map(|i| self.0[i]).unwrap_or(0)
	}

	/// Compute the score of a word as the sum of its letters' values. The sum
	/// saturates at `u32::MAX`.
	///
	/// # Arguments
	///
	/// * `word` - The word to score.
	///
	/// # Returns
	///
	/// The score of the word.
	#[must_use]
	pub fn word_score(&self, word: &str) -> u32
	{
		word.chars().fold(0, |score, c| score.saturating_add(self.value(c)))
	}

	/// Answer a copy of this table with one letter revalued.
	///
	/// # Arguments
	///
	/// * `score` - The override to apply.
	pub fn with_override(mut self, score: TileScore) -> Self
	{
		if let Some(i) = Self::index(score.letter)
		{
			self.0[i] = score.value;
		}
		self
	}

	/// Map a letter onto its table slot, if it has one.
	#[inline]
	fn index(letter: char) -> Option<usize>
	{
		let upper = letter.to_ascii_uppercase();
		upper.is_ascii_uppercase().then(|| (upper as u8 - b'A') as usize)
	}
}

/// A single `letter=value` override of the tile score table, as supplied on
/// the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileScore
{
	/// The letter being revalued, always uppercase.
	pub letter: char,

	/// The new value of the letter.
	pub value: u32
}

impl FromStr for TileScore
{
	type Err = RulesError;

	fn from_str(s: &str) -> Result<Self, Self::Err>
	{
		let malformed = || RulesError::MalformedTileScore(s.to_string());
		let (letter, value) = s.split_once('=').ok_or_else(malformed)?;
		let mut chars = letter.trim().chars();
		let letter = match (chars.next(), chars.next())
		{
			(Some(c), None) if c.is_ascii_alphabetic() =>
				c.to_ascii_uppercase(),
			_ => return Err(malformed())
		};
		let value = value.trim().parse::<u32>().map_err(|_| malformed())?;
		Ok(Self { letter, value })
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Rules.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The smallest permissible word length.
pub const MIN_WORD_LENGTH: usize = 2;

/// The largest permissible word length. A horizontal word has to fit on the
/// board.
pub const MAX_WORD_LENGTH: usize = COLUMNS;

/// The default word length.
pub const DEFAULT_WORD_LENGTH: usize = 4;

/// The rules of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Rules
{
	/// The exact length of a scoring word, i.e., the size of every window
	/// examined by the scanner.
	word_length: usize,

	/// The point value of every letter.
	tile_scores: TileScores
}

impl Default for Rules
{
	fn default() -> Self
	{
		Self {
			word_length: DEFAULT_WORD_LENGTH,
			tile_scores: TileScores::default()
		}
	}
}

impl Rules
{
	/// Construct a validated set of rules.
	///
	/// # Arguments
	///
	/// * `word_length` - The exact length of a scoring word.
	/// * `tile_scores` - The point value of every letter.
	///
	/// # Errors
	///
	/// [`RulesError::WordLength`] if `word_length` lies outside
	/// [`MIN_WORD_LENGTH`]`..=`[`MAX_WORD_LENGTH`].
	pub fn new(
		word_length: usize,
		tile_scores: TileScores
	) -> Result<Self, RulesError>
	{
		if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word_length)
		{
			return Err(RulesError::WordLength(word_length))
		}
		Ok(Self { word_length, tile_scores })
	}

	/// The exact length of a scoring word.
	#[inline]
	#[must_use]
	pub fn word_length(&self) -> usize { self.word_length }

	/// The point value of every letter.
	#[inline]
	pub fn tile_scores(&self) -> &TileScores { &self.tile_scores }
}

////////////////////////////////////////////////////////////////////////////////
//                                  Errors.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The ways in which rules can be misconfigured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RulesError
{
	/// The word length cannot be used on the board.
	WordLength(usize),

	/// A tile score override was not of the form `letter=value`.
	MalformedTileScore(String)
}

impl Display for RulesError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			RulesError::WordLength(n) => write!(
				f,
				"word length must be between {} and {}, not {}",
				MIN_WORD_LENGTH,
				MAX_WORD_LENGTH,
				n
			),
			RulesError::MalformedTileScore(s) => write!(
				f,
				"expected a tile score like Q=10, not {:?}",
				s
			)
		}
	}
}

impl Error for RulesError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
