// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::rope::{count_visited, Move, Rope, TailPath};


pub(crate) fn moves_from_str(s: &str) -> Result<Vec<Move>, parsing::MovesError> {
	parsing::moves_from_str(s).collect()
}


#[tracing::instrument(level = "debug", skip(moves), fields(moves = moves.len()))]
pub(crate) fn visited_impl(moves: &[Move], knots: usize) -> usize {
	let visited = count_visited(Rope::new(knots).tail_positions(moves));
	tracing::debug!(visited, "Simulated rope");
	visited
}

pub(crate) fn tail_path(moves: &[Move], knots: usize) -> TailPath {
	Rope::new(knots).tail_positions(moves).collect()
}


mod parsing {
	use std::{num::{NonZeroUsize, ParseIntError}, str::FromStr};
	use crate::{grid::Dir, rope::Move};

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum DirError {
		Len(usize),
		Invalid(char),
	}

	impl FromStr for Dir {
		type Err = DirError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let &[b] = s.as_bytes() else { return Err(DirError::Len(s.len())) };
			match b {
				b'R' => Ok(Dir::Right),
				b'L' => Ok(Dir::Left),
				b'U' => Ok(Dir::Up),
				b'D' => Ok(Dir::Down),
				_ => Err(DirError::Invalid(b as char)),
			}
		}
	}

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum AmountError {
		NotDigit(char),
		Int(ParseIntError),
	}

	/// Plain decimal digits only; `NonZeroUsize::from_str` alone would take a `+` sign.
	fn try_amount_from_str(s: &str) -> Result<NonZeroUsize, AmountError> {
		if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
			return Err(AmountError::NotDigit(c)) }
		s.parse().map_err(AmountError::Int)
	}

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum MoveError {
		NoSpace,
		Dir(DirError),
		Amount(AmountError),
	}

	impl FromStr for Move {
		type Err = MoveError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (dir, amount) = s.split_once(' ').ok_or(MoveError::NoSpace)?;
			Ok(Move(
				dir.parse().map_err(MoveError::Dir)?,
				try_amount_from_str(amount).map_err(MoveError::Amount)?))
		}
	}

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) struct MovesError {
		pub(crate) line: usize,
		pub(crate) source: MoveError,
	}

	impl std::fmt::Display for MovesError {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			write!(f, "invalid move on line {}: ", self.line)?;
			match &self.source {
				MoveError::NoSpace => f.write_str("expected a direction and an amount separated by a space"),
				MoveError::Dir(DirError::Len(len)) => write!(f, "expected a one-letter direction, got {len} bytes"),
				MoveError::Dir(DirError::Invalid(c)) => write!(f, "unknown direction {c:?}"),
				MoveError::Amount(AmountError::NotDigit(c)) => write!(f, "unexpected {c:?} in amount"),
				MoveError::Amount(AmountError::Int(e)) => write!(f, "invalid amount ({e})"),
			}
		}
	}

	impl std::error::Error for MovesError {
		fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
			match &self.source {
				MoveError::Amount(AmountError::Int(e)) => Some(e),
				_ => None,
			}
		}
	}

	pub(super) fn moves_from_str(s: &str) -> impl Iterator<Item = Result<Move, MovesError>> + '_ {
		use {std::iter::empty, either::Either};
		if s.trim().is_empty() { return Either::Left(empty()) }

		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| MovesError { line: l + 1, source: e })))
	}
}
