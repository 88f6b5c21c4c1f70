//! # Letter Drop
//!
//! A falling-letter word game for the terminal. Letters are typed one at a
//! time and drop into the columns of a 10×20 board in turn, left to right and
//! around again. Whenever four letters (by default) in a row or column spell a
//! word from the dictionary, they vanish, score their Scrabble tile values,
//! and the letters above them fall into the gap.
//!
//! Via command line options, the user can choose the dictionary, the word
//! length, and the value of individual letters. When the player quits, the
//! words found and the final score are written to standard output.

mod app;
mod tui;

use std::{fs::File, rc::Rc};

use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::{debug, info, trace, warn};

use app::App;
use letter_drop::{
	dictionary::Dictionary,
	game::Game,
	rules::{Rules, TileScore, TileScores, DEFAULT_WORD_LENGTH}
};
use tui::tui;

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// A falling-letter word game.
#[derive(Clone, Debug, Parser)]
#[command(version = "1.0", author = "Todd L Smith")]
struct Opts
{
	/// The path to the directory containing the dictionary files.
	#[arg(short = 'd', long, default_value = "dict")]
	directory: String,

	/// The name of the dictionary. This is the name shared by the text and
	/// binary files, sans the extension.
	#[arg(short = 'n', long, default_value = "english")]
	dictionary: String,

	/// Write log output to this file instead of standard error. The level is
	/// controlled by `RUST_LOG`.
	#[arg(long)]
	log: Option<String>,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Clone, Debug, Subcommand)]
enum Command
{
	/// Just generate the binary dictionary and exit.
	Generate,

	/// Play the game in the text-based user interface (TUI). The words found
	/// and the final score will be written to standard output.
	Play {
		/// The exact length of a scoring word.
		#[arg(short = 'w', long, default_value_t = DEFAULT_WORD_LENGTH)]
		word_length: usize,

		/// Override the value of a letter, e.g., `-s Q=12`. May be repeated.
		#[arg(short = 's', long = "score")]
		scores: Vec<TileScore>,

		/// Suppress emission of the results to standard output.
		#[arg(short = 'q', long)]
		quiet: bool
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main()
{
	// Parse the command line options.
	let opts = Opts::parse();
	init_logging(opts.log.as_deref());
	debug!("Command line options: {:?}", opts);

	match opts.command
	{
		Command::Generate =>
		{
			// Opening the text dictionary writes the binary snapshot.
			let dictionary = Dictionary::open(&opts.directory, &opts.dictionary)
				.unwrap_or_else(|e|
					panic!(
						"Failed to open dictionary: {}/{}.txt: {}",
						opts.directory,
						opts.dictionary,
						e
					)
				);
			if dictionary.is_empty()
			{
				warn!(
					"Generated an empty dictionary: {}/{}.txt",
					opts.directory,
					opts.dictionary
				);
			}
			trace!("Exiting after generating binary dictionary");
		},
		Command::Play { word_length, scores, quiet } =>
		{
			let tile_scores = scores.into_iter()
				.fold(TileScores::default(), TileScores::with_override);
			let rules = Rules::new(word_length, tile_scores)
				.unwrap_or_else(|e| panic!("Invalid rules: {}", e));
			// A missing dictionary is not fatal; the game is merely unwinnable.
			let dictionary =
				Dictionary::open_or_empty(&opts.directory, &opts.dictionary);
			let game = Game::new(Rc::new(dictionary), rules);
			trace!("Opening TUI");
			let game = tui(|terminal| App::new(game).run(terminal))
				.unwrap_or_else(|e| panic!("Failed to drive TUI: {}", e));
			info!(
				"Finished with {} word(s) for {} point(s)",
				game.found_words().len(),
				game.total_score()
			);
			if !quiet
			{
				print_results(&game);
			}
		}
	}
}

/// Initialize the logger. Logging to standard error would scribble over the
/// TUI, so a log file may be given instead.
///
/// # Arguments
///
/// * `path` - The log file, if any.
fn init_logging(path: Option<&str>)
{
	let mut builder = Builder::from_default_env();
	if let Some(path) = path
	{
		let file = File::create(path).unwrap_or_else(|e|
			panic!("Failed to create log file: {}: {}", path, e)
		);
		builder.target(Target::Pipe(Box::new(file)));
	}
	builder.init();
}

/// Print the words found and the final score to standard output.
///
/// # Arguments
///
/// * `game` - The finished game.
fn print_results(game: &Game)
{
	for found in game.found_words()
	{
		println!("{}", found);
	}
	println!("Total Score: {}", game.total_score());
}
