//! # Grid
//!
//! The board: a fixed matrix of cells, each holding at most one letter.
//! Letters enter at the top of a column and come to rest on whatever is
//! beneath them.

use std::fmt::{self, Display, Formatter};

use fixedstr::str32;
use log::trace;

////////////////////////////////////////////////////////////////////////////////
//                                 Positions.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The number of columns on the board.
pub const COLUMNS: usize = 10;

/// The number of rows on the board.
pub const ROWS: usize = 20;

/// The coordinates of a cell. Row 0 is the top of the board and row
/// [`ROWS`]` - 1` is the bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position
{
	/// The column, in `0..COLUMNS`.
	pub column: usize,

	/// The row, in `0..ROWS`.
	pub row: usize
}

impl Position
{
	/// Construct a position.
	#[inline]
	#[must_use]
	pub const fn new(column: usize, row: usize) -> Self
	{
		Self { column, row }
	}
}

impl Display for Position
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "({}, {})", self.column, self.row)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Grid.                                    //
////////////////////////////////////////////////////////////////////////////////

/// The board, stored column-major so that the per-column operations
/// (placement and gravity) walk contiguous memory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Grid
{
	/// The cells, indexed first by column and then by row.
	columns: [[Option<char>; ROWS]; COLUMNS]
}

impl Default for Grid
{
	fn default() -> Self { Self::new() }
}

impl Grid
{
	/// Construct an empty board.
	#[inline]
	pub const fn new() -> Self
	{
		Self { columns: [[None; ROWS]; COLUMNS] }
	}

	/// Get the letter at the given position, if any. Positions off the board
	/// are empty.
	#[inline]
	#[must_use]
	pub fn get(&self, position: Position) -> Option<char>
	{
		self.columns
			.get(position.column)
			.and_then(|column| column.get(position.row))
			.copied()
			.flatten()
	}

	/// Check if the board holds no letters at all.
	#[must_use]
	pub fn is_empty(&self) -> bool
	{
		self.columns.iter().flatten().all(Option::is_none)
	}

	/// Count the letters on the board.
	#[must_use]
	pub fn tile_count(&self) -> usize
	{
		self.columns.iter().flatten().filter(|c| c.is_some()).count()
	}

	/// Count the letters in a column.
	///
	/// # Arguments
	///
	/// * `column` - The column to examine. Columns off the board are empty.
	#[must_use]
	pub fn column_height(&self, column: usize) -> usize
	{
		self.columns
			.get(column)
			.map(|cells| cells.iter().filter(|c| c.is_some()).count())
			.unwrap_or(0)
	}

	/// Check if a column has no room for another letter.
	#[inline]
	#[must_use]
	pub fn is_column_full(&self, column: usize) -> bool
	{
		self.columns
			.get(column)
			.map(|cells| cells.iter().all(Option::is_some))
			.unwrap_or(true)
	}

	/// Drop a letter into a column. The letter lands in the bottom-most empty
	/// cell. If the column is full, or does not exist, the letter is silently
	/// discarded and the board is unchanged.
	///
	/// # Arguments
	///
	/// * `letter` - The letter to place.
	/// * `column` - The target column.
	///
	/// # Returns
	///
	/// Where the letter landed, or `None` if it was discarded.
	pub fn place(&mut self, letter: char, column: usize) -> Option<Position>
	{
		let cells = self.columns.get_mut(column)?;
		let row = (0..ROWS).rev().find(|&row| cells[row].is_none())?;
		cells[row] = Some(letter);
		trace!("placed {} at ({}, {})", letter, column, row);
		Some(Position::new(column, row))
	}

	/// Empty each of the given cells. Positions off the board are ignored.
	///
	/// # Arguments
	///
	/// * `positions` - The cells to empty.
	pub fn clear(&mut self, positions: &[Position])
	{
		for position in positions
		{
			if let Some(cell) = self.columns
				.get_mut(position.column)
				.and_then(|column| column.get_mut(position.row))
			{
				*cell = None;
			}
		}
	}

	/// Concatenate the letters at the given positions, in order. Empty cells
	/// contribute nothing, so the result is shorter than `positions` whenever
	/// any of them is empty.
	///
	/// # Arguments
	///
	/// * `positions` - The cells to read, at most 31 of them.
	#[must_use]
	pub fn letters(&self, positions: &[Position]) -> str32
	{
		let mut word = str32::default();
		for letter in positions.iter().filter_map(|&p| self.get(p))
		{
			word.push_char(letter);
		}
		word
	}

	/// Let every letter fall as far as it can. Each column is compacted
	/// toward the bottom of the board, preserving the top-to-bottom order of
	/// its letters. Applying gravity to a settled board changes nothing.
	///
	/// # Returns
	///
	/// The number of letters that moved.
	pub fn apply_gravity(&mut self) -> usize
	{
		let mut moved = 0;
		for cells in self.columns.iter_mut()
		{
			// Walk upward from the bottom, sliding each letter down to the
			// lowest cell not yet claimed.
			let mut write = ROWS;
			for read in (0..ROWS).rev()
			{
				if let Some(letter) = cells[read]
				{
					write -= 1;
					if write != read
					{
						cells[write] = Some(letter);
						cells[read] = None;
						moved += 1;
					}
				}
			}
		}
		if moved > 0
		{
			trace!("gravity moved {} letters", moved);
		}
		moved
	}

	/// Check that no letter is floating, i.e., that within every column the
	/// letters form an unbroken stack resting on the bottom row.
	#[must_use]
	pub fn is_settled(&self) -> bool
	{
		self.columns.iter().all(|cells| {
			let height = cells.iter().filter(|c| c.is_some()).count();
			cells[ROWS - height..].iter().all(Option::is_some)
		})
	}
}

impl Display for Grid
{
	/// Render the board as text, one line per row, using `.` for empty cells.
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for row in 0..ROWS
		{
			for column in 0..COLUMNS
			{
				let letter = self.columns[column][row].unwrap_or('.');
				write!(f, "{}", letter)?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
