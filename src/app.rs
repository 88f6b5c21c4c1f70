//! # Application
//!
//! The application state and logic, including the text-based user interface
//! (TUI): the board, the row of input slots beneath it, and the score panel.

use std::io;

use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use letter_drop::{
	game::Game,
	grid::{Position, COLUMNS, ROWS}
};
use log::trace;
use ratatui::{
	buffer::Buffer,
	layout::{Alignment, Constraint, Direction, Layout, Rect},
	style::{Color, Modifier, Style, Stylize},
	text::{Line, Span},
	widgets::{
		Block, BorderType, Borders, List, ListState, Paragraph,
		StatefulWidget, Widget
	},
	Frame
};

use crate::tui::Tui;

/// The width of a single cell, in terminal columns.
const CELL_WIDTH: u16 = 3;

/// The width of the board panel, including its border.
const BOARD_WIDTH: u16 = COLUMNS as u16 * CELL_WIDTH + 2;

/// The height of the board panel: every row, the slot row, and the border.
const BOARD_HEIGHT: u16 = ROWS as u16 + 1 + 2;

////////////////////////////////////////////////////////////////////////////////
//                                Application.                                //
////////////////////////////////////////////////////////////////////////////////

/// The application state.
#[must_use]
pub struct App
{
	/// Whether the application is running.
	state: ExecutionState,

	/// The game being played.
	game: Game
}

// Public interface.
impl App
{
	/// Create a new application around a fresh game.
	///
	/// # Arguments
	///
	/// * `game` - The game to play.
	#[inline]
	pub fn new(game: Game) -> Self
	{
		Self { state: ExecutionState::Playing, game }
	}

	/// Run the application until the player quits, alternately rendering
	/// the frame and waiting for the next key.
	///
	/// # Arguments
	///
	/// * `tui` - The text-based user interface (TUI).
	///
	/// # Returns
	///
	/// The game as it stood when the player quit.
	///
	/// # Errors
	///
	/// Any error that occurs while drawing or reading the terminal.
	pub fn run(mut self, tui: &mut Tui) -> io::Result<Game>
	{
		while self.is_running()
		{
			tui.draw(|frame| self.render_frame(frame))?;
			self.process_event()?;
		}
		Ok(self.game)
	}

	/// Check if the application is running.
	#[inline]
	#[must_use]
	pub fn is_running(&self) -> bool
	{
		!matches!(self.state, ExecutionState::Exiting)
	}
}

// Private implementation details.
impl App
{
	/// Render the application frame.
	fn render_frame(&self, frame: &mut Frame)
	{
		frame.render_widget(self, frame.area());
	}

	/// Render the board, with the input slots along its bottom edge.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_board(&self, area: Rect, buf: &mut Buffer)
	{
		let grid = self.game.grid();
		let fresh = self.game.last_placed();
		let mut lines = (0..ROWS)
			.map(|row| {
				let cells = (0..COLUMNS)
					.map(|column| {
						let position = Position::new(column, row);
						match grid.get(position)
						{
							Some(letter) =>
							{
								let style = Style::default()
									.fg(Color::Black)
									.bg(Color::Yellow);
								let style =
									if fresh == Some(position)
									{
										style.bg(Color::LightYellow)
											.add_modifier(Modifier::BOLD)
									}
									else { style };
								Span::styled(format!(" {} ", letter), style)
							},
							None => Span::styled(
								" · ",
								Style::default().fg(Color::DarkGray)
							)
						}
					})
					.collect::<Vec<_>>();
				Line::from(cells)
			})
			.collect::<Vec<_>>();
		// One slot per column; only the active one accepts a letter.
		let slots = (0..COLUMNS)
			.map(|column| {
				if self.game.slots().is_active(column)
				{
					Span::styled(
						" ▲ ",
						Style::default().fg(Color::Black).bg(Color::Cyan)
					)
				}
				else
				{
					Span::styled(" ▲ ", Style::default().fg(Color::DarkGray))
				}
			})
			.collect::<Vec<_>>();
		lines.push(Line::from(slots));
		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(Style::default().fg(Color::White))
			.title(Line::from("Board").centered())
			.title_bottom(Line::from("A-Z – drop".cyan()).centered());
		Paragraph::new(lines).block(block).render(area, buf);
	}

	/// Render the score panel: the most recent word, the running total, and
	/// every word found so far.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_scores(&self, area: Rect, buf: &mut Buffer)
	{
		let panel = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(3),
				Constraint::Length(3),
				Constraint::Min(3)
			])
			.split(area);
		let found = match self.game.last_found()
		{
			Some(found) => Line::from(format!(
				"You found this word: {} (Score: {})",
				found.word,
				found.score
			)),
			None if !self.game.is_dictionary_ready() =>
				Line::from("No dictionary loaded".red()),
			None => Line::from("No words yet")
		};
		Paragraph::new(found)
			.block(Block::default().borders(Borders::ALL))
			.render(panel[0], buf);
		Paragraph::new(format!("Total Score: {}", self.game.total_score()))
			.block(Block::default().borders(Borders::ALL))
			.alignment(Alignment::Left)
			.style(Style::default().fg(Color::Green))
			.render(panel[1], buf);
		// The word list keeps the newest word selected.
		let words = self.game.found_words();
		let mut list_state = ListState::default();
		list_state.select(words.len().checked_sub(1));
		let list = List::new(words.iter().map(|found| found.to_string()))
			.block(
				Block::default()
					.title(format!(
						"Words ({} letters)",
						self.game.rules().word_length()
					))
					.title_alignment(Alignment::Center)
					.borders(Borders::ALL)
			)
			.style(Style::default().fg(Color::White))
			.highlight_style(Style::default().fg(Color::Yellow));
		StatefulWidget::render(&list, panel[2], buf, &mut list_state);
	}

	/// Wait for the next terminal event and process it.
	///
	/// # Errors
	///
	/// Any error that occurs while reading events.
	fn process_event(&mut self) -> io::Result<()>
	{
		match read()?
		{
			Event::Key(event) if event.kind == KeyEventKind::Press =>
				self.process_key_event(event),
			_ => {}
		}
		Ok(())
	}

	/// Process a key event:
	///
	/// * Escape, Ctrl+C - Exit the application.
	/// * A-Z - Drop the letter at the active slot, unless Ctrl or Alt is held.
	///
	/// Everything else is ignored.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event(&mut self, event: KeyEvent)
	{
		match event.code
		{
			KeyCode::Esc => self.exit(),
			KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) =>
				self.exit(),
			KeyCode::Char(c)
				if !event.modifiers.intersects(
					KeyModifiers::CONTROL | KeyModifiers::ALT
				) =>
			{
				if let Some(turn) = self.game.enter(c)
				{
					trace!("turn scored {}", turn.score());
				}
			},
			_ => {}
		}
	}

	/// Mark the application for exit. The application will exit after the next
	/// iteration of the main loop.
	fn exit(&mut self)
	{
		self.state = ExecutionState::Exiting;
	}
}

impl Widget for &App
{
	fn render(self, area: Rect, buf: &mut Buffer)
	{
		if !self.is_running()
		{
			return
		}
		let outer = Layout::default()
			.direction(Direction::Horizontal)
			.margin(1)
			.constraints([
				Constraint::Length(BOARD_WIDTH),
				Constraint::Min(20)
			])
			.split(area);
		let board = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(BOARD_HEIGHT), Constraint::Min(0)])
			.split(outer[0]);
		Block::default()
			.title(Line::from("⎋ – exit".yellow().bold()).left_aligned())
			.render(board[1], buf);
		self.render_board(board[0], buf);
		self.render_scores(outer[1], buf);
	}
}

/// The execution state of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExecutionState
{
	/// The player is dropping letters.
	Playing,

	/// The application is exiting.
	Exiting
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
