// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use {std::{fs, path::Path}, anyhow::{Context as _, Result}};


/// Reads the whole file, without leading or trailing whitespace.
pub(crate) fn read_move_text(path: &Path) -> Result<String> {
	let text = fs::read_to_string(path)
		.with_context(|| format!("could not read moves from {}", path.display()))?;
	tracing::info!(path = %path.display(), bytes = text.len(), "Read input");
	Ok(text.trim().to_owned())
}


#[test]
fn tests() {
	let path = std::env::temp_dir().join(format!("knots-input-{}.txt", std::process::id()));
	fs::write(&path, "\n  R 4\nU 2\n\n").unwrap();
	assert_eq!(read_move_text(&path).unwrap(), "R 4\nU 2");
	fs::remove_file(&path).unwrap();

	let err = read_move_text(&path).unwrap_err();
	assert!(err.to_string().starts_with("could not read moves from "), "{err:#}");
}
