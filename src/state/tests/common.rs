use crate::config::EditorConfig;
use crate::state::EditorState;

/// A 10x20 text area over `lines`, cursor at the origin.
pub(super) fn test_state(lines: &[&str]) -> EditorState {
	sized_state(lines, 10, 20)
}

pub(super) fn sized_state(lines: &[&str], rows: usize, cols: usize) -> EditorState {
	let mut state = EditorState::new(EditorConfig::default(), rows, cols);
	for line in lines {
		state.document.append_line(line.as_bytes());
	}
	state
}

pub(super) fn contents(state: &EditorState) -> Vec<String> {
	state
		.document
		.lines()
		.iter()
		.map(|line| String::from_utf8_lossy(line.content()).into_owned())
		.collect()
}
