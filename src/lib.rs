//! # Letter Drop
//!
//! The rules engine for a falling-letter word game. Letters are typed one at
//! a time into a 10×20 board, each landing in the next column in turn. After
//! every letter the board is swept for runs of letters, across or down, that
//! spell dictionary words; those runs vanish and score, and whatever was
//! above them falls into the gaps.
//!
//! Nothing here knows about terminals. The [`game::Game`] owns all mutable
//! state and is driven one character at a time.

pub mod dictionary;
pub mod game;
pub mod grid;
pub mod input;
pub mod rules;
pub mod scanner;
