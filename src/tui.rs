//! # Text-based user interface (TUI)
//!
//! Terminal setup and teardown. The terminal is switched to raw mode on the
//! alternate screen for the duration of a session and put back afterward,
//! whether the session returns normally, returns an error, or panics.

use std::{io::{self, stdout, Stdout}, panic, sync::Arc};

use crossterm::{
	cursor::Show,
	execute,
	terminal::{
		disable_raw_mode, enable_raw_mode,
		EnterAlternateScreen, LeaveAlternateScreen
	}
};
use log::warn;
use ratatui::{backend::CrosstermBackend, Terminal};

////////////////////////////////////////////////////////////////////////////////
//                         Text-based user interface.                         //
////////////////////////////////////////////////////////////////////////////////

/// The text-based user interface (TUI) type.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run `f` against a freshly initialized terminal, restoring the terminal
/// afterward.
///
/// # Arguments
///
/// * `f` - The session to run.
///
/// # Returns
///
/// The result of `f`.
///
/// # Errors
///
/// Any error that occurs while initializing the terminal, running `f`, or
/// restoring the terminal.
pub fn tui<F, T>(f: F) -> io::Result<T>
	where F: FnOnce(&mut Tui) -> io::Result<T>
{
	let previous_hook = Arc::new(panic::take_hook());
	let chained_hook = Arc::clone(&previous_hook);
	panic::set_hook(Box::new(move |info| {
		// Restore first, or the panic message lands on the alternate screen
		// and vanishes with it.
		let _ = restore();
		(**chained_hook)(info);
	}));
	let result = Session::start().and_then(|session| {
		let result = Tui::new(CrosstermBackend::new(stdout()))
			.and_then(|mut terminal| f(&mut terminal));
		session.finish().and(result)
	});
	// Dropping our hook releases its share of the previous one.
	drop(panic::take_hook());
	if let Ok(hook) = Arc::try_unwrap(previous_hook)
	{
		panic::set_hook(hook);
	}
	result
}

/// An active terminal session. Dropping the session without calling
/// [`finish`](Self::finish) still restores the terminal, but swallows any
/// error in doing so.
struct Session
{
	/// Whether the terminal has already been restored.
	finished: bool
}

impl Session
{
	/// Switch the terminal into raw mode on the alternate screen. If raw mode
	/// cannot be enabled, the alternate screen is abandoned again.
	fn start() -> io::Result<Self>
	{
		execute!(stdout(), EnterAlternateScreen)?;
		let session = Self { finished: false };
		enable_raw_mode()?;
		Ok(session)
	}

	/// Restore the terminal, reporting any failure.
	fn finish(mut self) -> io::Result<()>
	{
		self.finished = true;
		restore()
	}
}

impl Drop for Session
{
	fn drop(&mut self)
	{
		if !self.finished
		{
			if let Err(e) = restore()
			{
				warn!("Failed to restore terminal: {}", e);
			}
		}
	}
}

/// Put the terminal back the way we found it.
fn restore() -> io::Result<()>
{
	disable_raw_mode()?;
	execute!(stdout(), LeaveAlternateScreen, Show)
}
