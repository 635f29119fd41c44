// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::fmt::Display;


/// Fills the first `{}` in `phrase` with `value`.
pub(crate) fn format_report(phrase: &str, value: impl Display) -> String {
	phrase.replacen("{}", &value.to_string(), 1)
}

pub(crate) fn report<T: Display>(phrase: &str, value: T) -> T {
	println!("{}", format_report(phrase, &value));
	value
}


#[test]
fn tests() {
	assert_eq!(format_report("Tail visited {} positions", 13), "Tail visited 13 positions");
	assert_eq!(format_report("{} knots, {} left alone", 2), "2 knots, {} left alone");
	assert_eq!(format_report("no placeholder", 1), "no placeholder");
	assert_eq!(report("{}", 36), 36);
}
