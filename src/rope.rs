// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::num::NonZeroUsize;
use crate::grid::{Dir, Pos};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Move(pub(crate) Dir, pub(crate) NonZeroUsize);

impl Move {
	fn unit_steps(self) -> impl Iterator<Item = Dir> {
		std::iter::repeat(self.0).take(self.1.get())
	}
}


/// Knots from head (first) to tail (last); always at least two of them.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Rope(Vec<Pos>);

impl Rope {
	pub(crate) fn new(len: usize) -> Self {
		assert!(len >= 2, "A rope needs at least two knots, got {len}");
		Rope(vec![Pos::ORIGIN; len])
	}

	#[cfg(test)]
	pub(crate) fn knots(&self) -> &[Pos] {
		&self.0
	}

	pub(crate) fn head(&self) -> Pos {
		self.0[0]
	}

	pub(crate) fn tail(&self) -> Pos {
		self.0[self.0.len() - 1]
	}

	/// Moves the head one cell, then each following knot after its (already
	/// moved) predecessor.
	pub(crate) fn step(&self, dir: Dir) -> Rope {
		use std::iter::once;
		let head = self.head().step(dir);
		Rope(once(head)
			.chain(self.0[1..].iter().scan(head, |leader, &knot| {
				*leader = knot.catch_up(*leader);
				Some(*leader)
			}))
			.collect())
	}

	/// Every rope after each unit step of `moves`, excluding `self`.
	pub(crate) fn trajectory(self, moves: &[Move]) -> impl Iterator<Item = Rope> + '_ {
		moves.iter()
			.flat_map(|&m| m.unit_steps())
			.scan(self, |rope, dir| {
				*rope = rope.step(dir);
				Some(rope.clone())
			})
	}

	/// The tail of `self`, followed by the tail after each unit step of `moves`.
	pub(crate) fn tail_positions(self, moves: &[Move]) -> impl Iterator<Item = Pos> + '_ {
		std::iter::once(self.tail())
			.chain(self.trajectory(moves).map(|rope| rope.tail()))
	}
}


pub(crate) fn count_visited(positions: impl Iterator<Item = Pos>) -> usize {
	use itertools::Itertools as _;
	positions.unique().count()
}


/// The cells a tail visited, drawn with the highest row first.
pub(crate) struct TailPath(std::collections::BTreeSet<Pos>);

impl FromIterator<Pos> for TailPath {
	fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
		TailPath(iter.into_iter().collect())
	}
}

impl std::fmt::Display for TailPath {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use {std::fmt::Write, itertools::Itertools as _};

		let Some((x_min, x_max)) = self.0.iter().map(|p| p.x).minmax().into_option()
			else { return Ok(()) };
		let Some((y_min, y_max)) = self.0.iter().map(|p| p.y).minmax().into_option()
			else { return Ok(()) };

		for y in (y_min..=y_max).rev() {
			for x in x_min..=x_max {
				let pos = Pos { x, y };
				f.write_char(if pos == Pos::ORIGIN { 's' }
					else if self.0.contains(&pos) { '#' }
					else { '.' })?
			}
			if y > y_min { f.write_char('\n')? }
		}
		Ok(())
	}
}
