// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod day09;
mod grid;
mod input;
mod report;
mod rope;

use {std::path::PathBuf, anyhow::{Context as _, Result}, clap::{ArgAction, Parser}};


/// Simulates a rope dragged around a grid, and counts the cells its tail visits.
#[derive(Parser, Debug)]
struct Cli {
	/// File with one move (e.g. `R 4`) per line.
	#[arg(default_value = "inputs/day09.txt")]
	input: PathBuf,

	/// Number of knots per rope, head and tail included.
	#[arg(short, long, value_delimiter = ',', default_values_t = [2, 10],
		value_parser = clap::value_parser!(u16).range(2..))]
	knots: Vec<u16>,

	/// Also draw the cells each tail visited.
	#[arg(short, long)]
	draw: bool,

	/// Log more (repeat for even more).
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

fn init_logging(verbose: u8) {
	use tracing::Level;
	let level = match verbose { 0 => Level::WARN, 1 => Level::INFO, 2 => Level::DEBUG, _ => Level::TRACE };
	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_writer(std::io::stderr)
		.init();
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let text = input::read_move_text(&cli.input)?;
	let moves = day09::moves_from_str(&text)
		.with_context(|| format!("could not parse moves from {}", cli.input.display()))?;
	tracing::debug!(moves = moves.len(), "Parsed moves");

	for knots in cli.knots.into_iter().map(usize::from) {
		let phrase = format!("Rope of {knots} knots; tail visited {{}} positions");
		report::report(&phrase, day09::visited_impl(&moves, knots));
		if cli.draw { println!("{}", day09::tail_path(&moves, knots)) }
	}

	Ok(())
}


#[test]
fn cli() {
	use clap::CommandFactory as _;
	Cli::command().debug_assert();

	let cli = Cli::try_parse_from(["knots"]).unwrap();
	assert_eq!(cli.input, PathBuf::from("inputs/day09.txt"));
	assert_eq!(cli.knots, [2, 10]);
	assert!(!cli.draw);

	let cli = Cli::try_parse_from(["knots", "-k", "3", "moves.txt", "-d", "-vv"]).unwrap();
	assert_eq!(cli.input, PathBuf::from("moves.txt"));
	assert_eq!(cli.knots, [3]);
	assert!(cli.draw);
	assert_eq!(cli.verbose, 2);

	let cli = Cli::try_parse_from(["knots", "-k", "2,5", "--knots", "10"]).unwrap();
	assert_eq!(cli.knots, [2, 5, 10]);

	assert!(Cli::try_parse_from(["knots", "-k", "1"]).is_err());
}
