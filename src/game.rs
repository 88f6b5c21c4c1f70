//! # Game
//!
//! The complete state of a game, and the turn cycle that drives it. Every
//! accepted letter runs the same sequence to completion before the next
//! letter is considered: place the letter, sweep the board for words
//! (clearing and scoring each as it is found), let the survivors fall, and
//! move on to the next input slot.

use std::{
	fmt::{self, Display, Formatter},
	rc::Rc
};

use fixedstr::str32;
use log::{debug, trace};

use crate::{
	dictionary::Dictionary,
	grid::{Grid, Position},
	input::{accept, SlotCycle},
	rules::Rules,
	scanner::{Match, Scanner}
};

////////////////////////////////////////////////////////////////////////////////
//                                   Words.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A word found on the board, and what it was worth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Found
{
	/// The word.
	pub word: str32,

	/// The points awarded for the word.
	pub score: u32
}

impl Display for Found
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "{} ({})", self.word, self.score)
	}
}

/// The outcome of a single accepted letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn
{
	/// The letter, uppercased.
	pub letter: char,

	/// The column the letter was routed to.
	pub column: usize,

	/// Where the letter landed, or `None` if the column was full and the
	/// letter was discarded.
	pub landed: Option<Position>,

	/// The words found during the sweep, with their scores, in the order they
	/// were found.
	pub found: Vec<(Match, u32)>,

	/// How many letters fell during gravity resolution.
	pub fallen: usize
}

impl Turn
{
	/// The points earned during this turn, saturating at `u32::MAX`.
	#[must_use]
	pub fn score(&self) -> u32
	{
		self.found.iter()
			.fold(0, |total, (_, score)| total.saturating_add(*score))
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Game.                                    //
////////////////////////////////////////////////////////////////////////////////

/// The state of a game. There is exactly one mode of play: awaiting the next
/// letter at the active slot.
#[derive(Clone, Debug)]
#[must_use]
pub struct Game
{
	/// The words that count. An empty dictionary is legal, and simply means
	/// that nothing will ever match.
	dictionary: Rc<Dictionary>,

	/// The rules in force.
	rules: Rules,

	/// The board.
	grid: Grid,

	/// The input slots.
	slots: SlotCycle,

	/// The running total, which never decreases.
	total_score: u32,

	/// Every word found so far, oldest first.
	found: Vec<Found>,

	/// Where the most recent letter came to rest, provided that nothing has
	/// disturbed it since.
	last_placed: Option<Position>
}

impl Game
{
	/// Start a new game on an empty board.
	///
	/// # Arguments
	///
	/// * `dictionary` - The words that count.
	/// * `rules` - The rules in force.
	pub fn new(dictionary: Rc<Dictionary>, rules: Rules) -> Self
	{
		Self {
			dictionary,
			rules,
			grid: Grid::new(),
			slots: SlotCycle::new(),
			total_score: 0,
			found: Vec::new(),
			last_placed: None
		}
	}

	/// Process one typed character. Anything other than an ASCII letter is
	/// ignored outright: no state changes and the active slot stays put.
	///
	/// A letter is dropped into the active slot's column, the board is swept
	/// for words, gravity is resolved once, and the next slot becomes
	/// active. A letter typed at a full column is discarded, but still uses
	/// up the turn.
	///
	/// # Arguments
	///
	/// * `c` - The typed character.
	///
	/// # Returns
	///
	/// The outcome of the turn, or `None` if the character was ignored.
	pub fn enter(&mut self, c: char) -> Option<Turn>
	{
		let Some(letter) = accept(c) else
		{
			trace!("ignoring input: {:?}", c);
			return None
		};
		let column = self.slots.active();
		let landed = self.grid.place(letter, column);
		if landed.is_none()
		{
			debug!("column {} is full, discarding {}", column, letter);
		}
		let scanner = Scanner::new(&self.dictionary, self.rules.word_length());
		let matches = scanner.sweep(&mut self.grid);
		let found = matches
			.into_iter()
			.map(|m| {
				let score = self.award(m.word);
				(m, score)
			})
			.collect::<Vec<_>>();
		let fallen = self.grid.apply_gravity();
		// The new tile only stays "fresh" while it sits where it landed.
		self.last_placed = landed.filter(|_| found.is_empty() && fallen == 0);
		let next = self.slots.advance();
		debug!(
			"turn {}: {} -> column {}, {} word(s), total {}, next slot {}",
			self.slots.turn(),
			letter,
			column,
			found.len(),
			self.total_score,
			next
		);
		Some(Turn { letter, column, landed, found, fallen })
	}

	/// Score a word and add it to the running total.
	///
	/// # Arguments
	///
	/// * `word` - The word that was found.
	///
	/// # Returns
	///
	/// The score of the word.
	fn award(&mut self, word: str32) -> u32
	{
		let score = self.rules.tile_scores().word_score(word.as_str());
		self.total_score = self.total_score.saturating_add(score);
		let found = Found { word, score };
		debug!("found word: {}, total score: {}", found, self.total_score);
		self.found.push(found);
		score
	}

	/// The board.
	#[inline]
	pub fn grid(&self) -> &Grid { &self.grid }

	/// The rules in force.
	#[inline]
	pub fn rules(&self) -> &Rules { &self.rules }

	/// The column bound to the active input slot.
	#[inline]
	#[must_use]
	pub fn active_column(&self) -> usize { self.slots.active() }

	/// The input slots.
	#[inline]
	pub fn slots(&self) -> &SlotCycle { &self.slots }

	/// The running total.
	#[inline]
	#[must_use]
	pub fn total_score(&self) -> u32 { self.total_score }

	/// The most recently found word, if any.
	#[inline]
	#[must_use]
	pub fn last_found(&self) -> Option<&Found> { self.found.last() }

	/// Every word found so far, oldest first.
	#[inline]
	#[must_use]
	pub fn found_words(&self) -> &[Found] { &self.found }

	/// Where the most recent letter came to rest, if it is still there and
	/// undisturbed.
	#[inline]
	#[must_use]
	pub fn last_placed(&self) -> Option<Position> { self.last_placed }

	/// Check if there are any words to find. When the dictionary failed to
	/// load, play continues but nothing can score.
	#[inline]
	#[must_use]
	pub fn is_dictionary_ready(&self) -> bool { !self.dictionary.is_empty() }
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
