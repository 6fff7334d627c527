use super::{WindowAreaWidget, visible_slice, welcome_text};
use crate::config::EditorConfig;
use crate::state::EditorState;

fn rendered_rows(state: &EditorState) -> Vec<String> {
	let mut out = Vec::new();
	WindowAreaWidget::from_state(state).render(&mut out).expect("render rows");
	let text = String::from_utf8(out).expect("ascii rows");
	text.split_terminator("\r\n").map(|row| row.trim_end_matches("\x1b[K").to_string()).collect()
}

fn state(lines: &[&str], rows: usize, cols: usize) -> EditorState {
	let mut state = EditorState::new(EditorConfig::default(), rows, cols);
	for line in lines {
		state.document.append_line(line.as_bytes());
	}
	state
}

#[test]
fn visible_slice_clamps_to_line_and_width() {
	assert_eq!(visible_slice(b"abcdef", 0, 4), b"abcd");
	assert_eq!(visible_slice(b"abcdef", 2, 10), b"cdef");
	assert_eq!(visible_slice(b"abcdef", 6, 4), b"");
	assert_eq!(visible_slice(b"abc", 9, 4), b"");
	assert_eq!(visible_slice(b"abc", 0, 0), b"");
}

#[test]
fn every_row_clears_to_end_of_line() {
	let mut out = Vec::new();
	WindowAreaWidget::from_state(&state(&["a"], 2, 10)).render(&mut out).expect("render rows");
	assert_eq!(out, b"a\x1b[K\r\n~\x1b[K\r\n");
}

#[test]
fn rows_past_document_end_show_tilde() {
	let rows = rendered_rows(&state(&["one", "two"], 4, 10));
	assert_eq!(rows, vec!["one", "two", "~", "~"]);
}

#[test]
fn rows_show_tab_expanded_text_scrolled_by_offsets() {
	let mut state = state(&["zero", "a\tbcdef", "two"], 2, 4);
	state.viewport.row_offset = 1;
	state.viewport.col_offset = 2;
	let rows = rendered_rows(&state);
	// "a\tbcdef" renders as "a   bcdef".
	assert_eq!(rows, vec!["  bc", "o"]);
}

#[test]
fn empty_document_centers_welcome_a_third_down() {
	let welcome = welcome_text();
	let rows = rendered_rows(&state(&[], 6, 40));
	let padding = (40 - welcome.len()) / 2;

	assert_eq!(rows.len(), 6);
	assert_eq!(rows[2], format!("~{}{}", " ".repeat(padding - 1), welcome));
	for (y, row) in rows.iter().enumerate().filter(|(y, _)| *y != 2) {
		assert_eq!(row, "~", "row {y}");
	}
}

#[test]
fn welcome_is_truncated_on_narrow_screens() {
	let welcome = welcome_text();
	let rows = rendered_rows(&state(&[], 3, 5));
	assert_eq!(rows[1], &welcome[..5]);
}

#[test]
fn document_with_lines_shows_no_welcome() {
	let welcome = welcome_text();
	let rows = rendered_rows(&state(&[""], 6, 40));
	assert!(rows.iter().all(|row| !row.contains(&welcome)));
	assert_eq!(rows[0], "");
}
