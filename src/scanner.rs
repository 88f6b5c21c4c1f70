//! # Scanner
//!
//! Herein is the word scanner. After every placement, the scanner examines
//! every horizontal and vertical run of cells whose length equals the word
//! length, in a fixed order, and clears each run that spells a dictionary
//! word the moment it is found.

use std::fmt::{self, Display, Formatter};

use fixedstr::str32;
use log::{debug, trace};

use crate::{
	dictionary::Dictionary,
	grid::{Grid, Position, COLUMNS, ROWS}
};

////////////////////////////////////////////////////////////////////////////////
//                                  Windows.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The reading direction of a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction
{
	/// Left to right along a row.
	Horizontal,

	/// Top to bottom down a column.
	Vertical
}

impl Display for Direction
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Direction::Horizontal => write!(f, "row"),
			Direction::Vertical => write!(f, "column")
		}
	}
}

/// A contiguous run of cells examined as a candidate word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Window
{
	/// The first cell of the run: leftmost for a horizontal window, topmost
	/// for a vertical one.
	pub start: Position,

	/// The reading direction.
	pub direction: Direction,

	/// The number of cells in the run.
	pub length: usize
}

impl Window
{
	/// Get the cells of the window, in reading order.
	#[must_use]
	pub fn positions(&self) -> Vec<Position>
	{
		let Position { column, row } = self.start;
		(0..self.length)
			.map(|offset| match self.direction
			{
				Direction::Horizontal => Position::new(column + offset, row),
				Direction::Vertical => Position::new(column, row + offset)
			})
			.collect()
	}

}

/// Enumerate every window of the given length, in scanning order: all
/// horizontal windows first (rows top to bottom, then starting columns left
/// to right), then all vertical windows (columns left to right, then
/// starting rows top to bottom).
///
/// # Arguments
///
/// * `length` - The length of each window. A length that does not fit in a
///   direction yields no windows in that direction.
///
/// # Returns
///
/// An iterator over the windows.
pub fn windows(length: usize) -> impl Iterator<Item = Window>
{
	let horizontal = (0..ROWS).flat_map(move |row| {
		(0..(COLUMNS + 1).saturating_sub(length)).map(move |column| Window {
			start: Position::new(column, row),
			direction: Direction::Horizontal,
			length
		})
	});
	let vertical = (0..COLUMNS).flat_map(move |column| {
		(0..(ROWS + 1).saturating_sub(length)).map(move |row| Window {
			start: Position::new(column, row),
			direction: Direction::Vertical,
			length
		})
	});
	horizontal.chain(vertical).filter(|w| w.length > 0)
}

////////////////////////////////////////////////////////////////////////////////
//                                  Matches.                                  //
////////////////////////////////////////////////////////////////////////////////

/// A window that spelled a dictionary word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Match
{
	/// The word spelled by the window.
	pub word: str32,

	/// The window that spelled it.
	pub window: Window
}

////////////////////////////////////////////////////////////////////////////////
//                                  Scanner.                                  //
////////////////////////////////////////////////////////////////////////////////

/// Scans the board for words of a fixed length.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'d>
{
	/// The words that count.
	dictionary: &'d Dictionary,

	/// The exact length of a word.
	word_length: usize
}

impl<'d> Scanner<'d>
{
	/// Construct a scanner.
	///
	/// # Arguments
	///
	/// * `dictionary` - The words that count.
	/// * `word_length` - The exact length of a word.
	#[inline]
	#[must_use]
	pub fn new(dictionary: &'d Dictionary, word_length: usize) -> Self
	{
		Self { dictionary, word_length }
	}

	/// Check whether a window currently spells a word. Every cell must hold a
	/// letter, and the letters, in reading order, must form a dictionary
	/// word.
	///
	/// # Arguments
	///
	/// * `grid` - The board.
	/// * `window` - The window to read.
	///
	/// # Returns
	///
	/// The word, if the window spells one.
	#[must_use]
	pub fn check(&self, grid: &Grid, window: &Window) -> Option<str32>
	{
		let word = grid.letters(&window.positions());
		// An empty cell shortens the concatenation, so the length test also
		// rejects incomplete windows.
		if word.len() == self.word_length
			&& self.dictionary.contains(word.as_str())
		{
			Some(word)
		}
		else
		{
			None
		}
	}

	/// Sweep the board once. Each window is read against the board as it
	/// stands at that moment; a matching window is cleared immediately, so
	/// its cells read as empty for every window examined after it. Gravity
	/// is _not_ applied.
	///
	/// # Arguments
	///
	/// * `grid` - The board.
	///
	/// # Returns
	///
	/// The matches, in the order they were found.
	pub fn sweep(&self, grid: &mut Grid) -> Vec<Match>
	{
		let mut matches = Vec::new();
		if self.dictionary.is_empty()
		{
			trace!("dictionary is empty, nothing can match");
			return matches
		}
		for window in windows(self.word_length)
		{
			if let Some(word) = self.check(grid, &window)
			{
				debug!(
					"found {} in {} at {}",
					word,
					window.direction,
					window.start
				);
				grid.clear(&window.positions());
				matches.push(Match { word, window });
			}
		}
		matches
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use super::*;

	/// Build a dictionary from a handful of words.
	fn dictionary(words: &[&str]) -> Dictionary
	{
		let mut dictionary = Dictionary::new();
		dictionary.populate(words);
		dictionary
	}

	/// Write a word across a row, starting at the given column. Every column
	/// touched must already be stacked up to just beneath `row`.
	fn write_row(grid: &mut Grid, word: &str, column: usize, row: usize)
	{
		for (offset, letter) in word.chars().enumerate()
		{
			let landed = grid.place(letter, column + offset);
			assert_eq!(landed, Some(Position::new(column + offset, row)));
		}
	}

	/// There are 7 horizontal windows per row and 17 vertical windows per
	/// column, and they come out in the documented order.
	#[test]
	fn test_window_order()
	{
		let all = windows(4).collect::<Vec<_>>();
		assert_eq!(all.len(), 7 * ROWS + 17 * COLUMNS);
		assert_eq!(all[0].start, Position::new(0, 0));
		assert_eq!(all[1].start, Position::new(1, 0));
		assert_eq!(all[7].start, Position::new(0, 1));
		let first_vertical = 7 * ROWS;
		assert!(all[..first_vertical]
			.iter()
			.all(|w| w.direction == Direction::Horizontal));
		assert_eq!(all[first_vertical].direction, Direction::Vertical);
		assert_eq!(all[first_vertical].start, Position::new(0, 0));
		assert_eq!(all[first_vertical + 1].start, Position::new(0, 1));
		assert_eq!(all[first_vertical + 17].start, Position::new(1, 0));
		assert_eq!(all.last().unwrap().start, Position::new(9, 16));
		let full_width = windows(COLUMNS)
			.filter(|w| w.direction == Direction::Horizontal)
			.count();
		assert_eq!(full_width, ROWS);
	}

	/// Window geometry.
	#[test]
	fn test_window_positions()
	{
		let window = Window {
			start: Position::new(6, 3),
			direction: Direction::Horizontal,
			length: 4
		};
		assert_eq!(
			window.positions(),
			vec![
				Position::new(6, 3),
				Position::new(7, 3),
				Position::new(8, 3),
				Position::new(9, 3)
			]
		);
		let window = Window {
			start: Position::new(0, 16),
			direction: Direction::Vertical,
			length: 4
		};
		assert_eq!(window.positions().last(), Some(&Position::new(0, 19)));
	}

	/// A window matches only when it is full and spells a word.
	#[test]
	fn test_check()
	{
		let dictionary = dictionary(&["CODE"]);
		let scanner = Scanner::new(&dictionary, 4);
		let mut grid = Grid::new();
		let window = Window {
			start: Position::new(0, 19),
			direction: Direction::Horizontal,
			length: 4
		};
		write_row(&mut grid, "COD", 0, 19);
		assert_eq!(scanner.check(&grid, &window), None);
		grid.place('E', 3);
		assert_eq!(scanner.check(&grid, &window), Some(str32::from("CODE")));
		let shifted = Window { start: Position::new(1, 19), ..window };
		assert_eq!(scanner.check(&grid, &shifted), None);
	}

	/// A gap inside a window disqualifies it even when the remaining letters
	/// would spell a word of the right length elsewhere.
	#[test]
	fn test_gap_never_matches()
	{
		let dictionary = dictionary(&["ODE", "CODE"]);
		let scanner = Scanner::new(&dictionary, 4);
		let mut grid = Grid::new();
		grid.place('O', 1);
		grid.place('D', 2);
		grid.place('E', 3);
		let before = grid.clone();
		assert!(scanner.sweep(&mut grid).is_empty());
		assert_eq!(grid, before);
	}

	/// A horizontal word is found and cleared.
	#[test]
	fn test_sweep_horizontal()
	{
		let dictionary = dictionary(&["CODE"]);
		let scanner = Scanner::new(&dictionary, 4);
		let mut grid = Grid::new();
		write_row(&mut grid, "CODE", 3, 19);
		let matches = scanner.sweep(&mut grid);
		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].word.as_str(), "CODE");
		assert_eq!(matches[0].window.direction, Direction::Horizontal);
		assert_eq!(matches[0].window.start, Position::new(3, 19));
		assert!(grid.is_empty());
	}

	/// A vertical word reads from top to bottom.
	#[test]
	fn test_sweep_vertical()
	{
		let dictionary = dictionary(&["TREE"]);
		let scanner = Scanner::new(&dictionary, 4);
		let mut grid = Grid::new();
		// Dropped in reverse so that T ends up on top.
		for letter in "EERT".chars()
		{
			grid.place(letter, 0);
		}
		let matches = scanner.sweep(&mut grid);
		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].window.direction, Direction::Vertical);
		assert_eq!(matches[0].window.start, Position::new(0, 16));
		assert!(grid.is_empty());
	}

	/// Two disjoint words in the same row are both found in one sweep.
	#[test]
	fn test_sweep_two_in_a_row()
	{
		let dictionary = dictionary(&["CODE", "TREE"]);
		let scanner = Scanner::new(&dictionary, 4);
		let mut grid = Grid::new();
		write_row(&mut grid, "CODE", 0, 19);
		write_row(&mut grid, "TREE", 5, 19);
		let matches = scanner.sweep(&mut grid);
		let words = matches.iter().map(|m| m.word.as_str()).collect::<Vec<_>>();
		assert_eq!(words, vec!["CODE", "TREE"]);
		assert!(grid.is_empty());
	}

	/// When windows overlap, the earlier window wins and empties the shared
	/// cells, spoiling the later one.
	#[test]
	fn test_sweep_overlap_first_wins()
	{
		// "CODES" holds both CODE (columns 0..4) and ODES (columns 1..5).
		let dictionary = dictionary(&["CODE", "ODES"]);
		let scanner = Scanner::new(&dictionary, 4);
		let mut grid = Grid::new();
		write_row(&mut grid, "CODES", 0, 19);
		let matches = scanner.sweep(&mut grid);
		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].word.as_str(), "CODE");
		assert_eq!(grid.get(Position::new(4, 19)), Some('S'));
		assert_eq!(grid.tile_count(), 1);
	}

	/// A horizontal match is cleared before the vertical pass begins, so a
	/// crossing vertical word loses its shared letter.
	#[test]
	fn test_sweep_horizontal_before_vertical()
	{
		let dictionary = dictionary(&["CODE", "ECHO"]);
		let scanner = Scanner::new(&dictionary, 4);
		let mut grid = Grid::new();
		// Column 3 reads E C H O from row 16 down, and the E doubles as the
		// last letter of CODE across row 16.
		for letter in "OHC".chars()
		{
			grid.place(letter, 3);
		}
		for column in 0..3
		{
			for _ in 0..3
			{
				grid.place('X', column);
			}
		}
		write_row(&mut grid, "CODE", 0, 16);
		assert_eq!(grid.get(Position::new(3, 16)), Some('E'));
		let matches = scanner.sweep(&mut grid);
		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].word.as_str(), "CODE");
		assert_eq!(grid.get(Position::new(3, 17)), Some('C'));
		assert_eq!(grid.get(Position::new(3, 16)), None);
	}

	/// Without a dictionary, nothing ever matches.
	#[test]
	fn test_sweep_empty_dictionary()
	{
		let dictionary = Dictionary::new();
		let scanner = Scanner::new(&dictionary, 4);
		let mut grid = Grid::new();
		write_row(&mut grid, "CODE", 0, 19);
		assert!(scanner.sweep(&mut grid).is_empty());
		assert_eq!(grid.tile_count(), 4);
	}
}
