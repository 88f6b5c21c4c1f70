//! # Input
//!
//! Routing of typed characters onto the board. There is one input slot per
//! column and exactly one slot is active at a time; after each accepted
//! letter the next slot, cyclically, becomes active. Which slot is active is
//! pure policy and has nothing to do with how the slots are drawn.

use crate::grid::COLUMNS;

/// Normalize a typed character into a tile letter.
///
/// # Arguments
///
/// * `c` - The typed character.
///
/// # Returns
///
/// The uppercase letter for an ASCII alphabetic character, `None` for
/// anything else.
#[inline]
#[must_use]
pub fn accept(c: char) -> Option<char>
{
	c.is_ascii_alphabetic().then(|| c.to_ascii_uppercase())
}

/// Get the column that receives the letter of the given turn, counting turns
/// from zero.
#[inline]
#[must_use]
pub const fn column_for(turn: usize) -> usize
{
	turn % COLUMNS
}

/// The cyclic sequence of input slots, one bound to each column in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct SlotCycle
{
	/// The number of letters accepted so far.
	turn: usize
}

impl SlotCycle
{
	/// Construct a cycle whose first slot is active.
	#[inline]
	pub const fn new() -> Self { Self { turn: 0 } }

	/// The index of the active slot, which is also its column.
	#[inline]
	#[must_use]
	pub const fn active(&self) -> usize { column_for(self.turn) }

	/// The number of letters accepted so far.
	#[inline]
	#[must_use]
	pub const fn turn(&self) -> usize { self.turn }

	/// Check if the given slot is the active one.
	#[inline]
	#[must_use]
	pub const fn is_active(&self, slot: usize) -> bool
	{
		self.active() == slot
	}

	/// Retire the active slot and activate the next one.
	///
	/// # Returns
	///
	/// The newly active slot.
	pub fn advance(&mut self) -> usize
	{
		self.turn = self.turn.wrapping_add(1);
		self.active()
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use super::*;

	/// Letters are accepted and uppercased; everything else is refused.
	#[test]
	fn test_accept()
	{
		for c in 'a' ..= 'z'
		{
			assert_eq!(accept(c), Some(c.to_ascii_uppercase()));
		}
		for c in 'A' ..= 'Z'
		{
			assert_eq!(accept(c), Some(c));
		}
		for c in ['0', '9', ' ', '-', '\n', 'é', 'ß', 'Ж']
		{
			assert_eq!(accept(c), None, "{:?}", c);
		}
	}

	/// The active slot walks the columns in order and wraps around.
	#[test]
	fn test_cycle()
	{
		let mut slots = SlotCycle::new();
		assert_eq!(slots.active(), 0);
		for expected in (1..COLUMNS).chain([0, 1])
		{
			assert_eq!(slots.advance(), expected);
			assert!(slots.is_active(expected));
		}
		assert_eq!(slots.turn(), COLUMNS + 1);
		assert_eq!(column_for(25), 5);
	}
}
