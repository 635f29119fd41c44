// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Debug)]
pub(crate) struct Pos {
	pub(crate) x: isize,
	pub(crate) y: isize,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Dir { Up, Down, Left, Right }

impl Dir {
	pub(crate) fn delta(self) -> [isize; 2] {
		match self { Dir::Up => [0, 1], Dir::Down => [0, -1], Dir::Left => [-1, 0], Dir::Right => [1, 0] }
	}
}

impl Pos {
	pub(crate) const ORIGIN: Pos = Pos { x: 0, y: 0 };

	pub(crate) fn step(self, dir: Dir) -> Pos {
		let [dx, dy] = dir.delta();
		Pos { x: self.x + dx, y: self.y + dy }
	}

	/// Whether `other` is on the same cell, or on one of the eight around it.
	pub(crate) fn touches(self, other: Pos) -> bool {
		self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
	}

	/// Where a knot at `self` ends up to stay touching `leader`.
	///
	/// A knot that already touches stays put. Otherwise it moves a single cell
	/// along each axis on which it is behind, so diagonally when the leader is
	/// off both axes. The leader is assumed to have moved at most one cell
	/// (orthogonally or diagonally) away from touching, as it does in a rope.
	pub(crate) fn catch_up(self, leader: Pos) -> Pos {
		if self.touches(leader) { return self }
		let caught_up = Pos { x: self.x + (leader.x - self.x).signum(), y: self.y + (leader.y - self.y).signum() };
		debug_assert!(caught_up.touches(leader), "{leader:?} is too far ahead of {self:?}");
		caught_up
	}
}


#[cfg(test)]
mod tests {
	use test_case::test_case;
	use super::{Dir::{self, *}, Pos};

	const fn pos(x: isize, y: isize) -> Pos { Pos { x, y } }

	#[test_case(Right, pos(1, 0))]
	#[test_case(Left, pos(-1, 0))]
	#[test_case(Up, pos(0, 1))]
	#[test_case(Down, pos(0, -1))]
	fn step(dir: Dir, expected: Pos) {
		assert_eq!(Pos::ORIGIN.step(dir), expected);
		assert_eq!(pos(3, -7).step(dir), pos(3 + expected.x, -7 + expected.y));
	}

	#[test]
	fn step_back_and_forth() {
		let p = pos(-2, 5);
		assert_eq!(p.step(Right).step(Left), p);
		assert_eq!(p.step(Up).step(Down), p);
		assert_eq!(p.step(Left).step(Right), p.step(Down).step(Up));
	}

	#[test_case(pos(0, 0), true; "same")]
	#[test_case(pos(1, 0), true; "orthogonal")]
	#[test_case(pos(-1, 1), true; "diagonal")]
	#[test_case(pos(2, 0), false; "two apart")]
	#[test_case(pos(2, -1), false; "knight")]
	#[test_case(pos(-2, -2), false; "two diagonal")]
	fn touches(other: Pos, expected: bool) {
		assert_eq!(Pos::ORIGIN.touches(other), expected);
		assert_eq!(other.touches(Pos::ORIGIN), expected);
	}

	#[test]
	fn catch_up_touching_stays() {
		for x in -1..=1 { for y in -1..=1 {
			let follower = pos(4, 4);
			assert_eq!(follower.catch_up(pos(4 + x, 4 + y)), follower);
		} }
	}

	#[test_case(pos(2, 0), pos(1, 0); "right")]
	#[test_case(pos(0, -2), pos(0, -1); "down")]
	#[test_case(pos(2, 1), pos(1, 1); "knight right up")]
	#[test_case(pos(-1, -2), pos(-1, -1); "knight down left")]
	#[test_case(pos(2, 2), pos(1, 1); "diagonal")]
	fn catch_up(leader: Pos, expected: Pos) {
		let caught_up = Pos::ORIGIN.catch_up(leader);
		assert_eq!(caught_up, expected);
		assert!(caught_up.touches(leader));
	}

	#[cfg(debug_assertions)]
	#[test_case(pos(5, 0) => panics "too far ahead"; "far right")]
	#[test_case(pos(-3, 2) => panics "too far ahead"; "far left")]
	fn catch_up_too_far(leader: Pos) {
		Pos::ORIGIN.catch_up(leader);
	}
}
