use crate::state::Document;

#[test]
fn tab_renders_to_next_stop() {
	let document = Document::from_lines(["a\tb"], 4);
	let line = document.line(0).expect("line exists");
	assert_eq!(line.render(), b"a   b");
	assert_eq!(line.render().len(), 5);
}

#[test]
fn tab_width_follows_document_setting() {
	let document = Document::from_lines(["\tx", "ab\t"], 8);
	assert_eq!(document.line(0).expect("line").render(), b"        x");
	assert_eq!(document.line(1).expect("line").render(), b"ab      ");
}

#[test]
fn insert_char_into_empty_document_appends_line() {
	let mut document = Document::new(4);
	assert_eq!(document.insert_char(0, 0, b'h'), 0);
	assert_eq!(document.insert_char(0, 1, b'i'), 1);
	assert_eq!(document.len(), 1);
	assert_eq!(document.line(0).expect("line").content(), b"hi");
	assert_eq!(document.line(0).expect("line").render(), b"hi");
}

#[test]
fn insert_char_clamps_column_past_end() {
	let mut document = Document::from_lines(["ab"], 4);
	assert_eq!(document.insert_char(0, 99, b'c'), 2);
	assert_eq!(document.line(0).expect("line").content(), b"abc");
}

#[test]
fn insert_tab_rerenders_only_that_line() {
	let mut document = Document::from_lines(["ab", "cd"], 4);
	document.insert_char(0, 1, b'\t');
	assert_eq!(document.line(0).expect("line").render(), b"a   b");
	assert_eq!(document.line(1).expect("line").render(), b"cd");
}

#[test]
fn insert_then_delete_restores_line() {
	let mut document = Document::from_lines(["x\ty z"], 4);
	let before = document.line(0).expect("line").clone();
	document.insert_char(0, 2, b'\t');
	assert_ne!(document.line(0).expect("line"), &before);
	assert!(document.delete_char(0, 2));
	assert_eq!(document.line(0).expect("line"), &before);
}

#[test]
fn delete_char_out_of_range_is_refused() {
	let mut document = Document::from_lines(["ab"], 4);
	assert!(!document.delete_char(0, 2));
	assert!(!document.delete_char(3, 0));
	assert_eq!(document.line(0).expect("line").content(), b"ab");
}

#[test]
fn split_and_join_are_inverse() {
	let mut document = Document::from_lines(["hello world"], 4);
	document.split_line(0, 5);
	assert_eq!(document.len(), 2);
	assert_eq!(document.line(0).expect("line").content(), b"hello");
	assert_eq!(document.line(1).expect("line").content(), b" world");

	assert_eq!(document.join_with_previous(1), Some(5));
	assert_eq!(document.len(), 1);
	assert_eq!(document.line(0).expect("line").content(), b"hello world");
}

#[test]
fn join_first_or_missing_row_does_nothing() {
	let mut document = Document::from_lines(["a", "b"], 4);
	assert_eq!(document.join_with_previous(0), None);
	assert_eq!(document.join_with_previous(2), None);
	assert_eq!(document.len(), 2);
}

#[test]
fn insert_line_past_end_appends() {
	let mut document = Document::from_lines(["a"], 4);
	document.insert_line(0, "top");
	document.insert_line(10, "bottom");
	let contents = document.lines().iter().map(|line| line.content().to_vec()).collect::<Vec<_>>();
	assert_eq!(contents, vec![b"top".to_vec(), b"a".to_vec(), b"bottom".to_vec()]);
}

#[test]
fn flat_bytes_terminate_every_line() {
	let document = Document::from_lines(["one", "", "t\two"], 4);
	let bytes = document.to_flat_bytes();
	assert_eq!(bytes, b"one\n\nt\two\n");
	assert_eq!(bytes.len(), 10);
	assert!(Document::new(4).to_flat_bytes().is_empty());
}

#[test]
fn zero_tab_stop_is_raised_to_one() {
	let document = Document::from_lines(["a\tb"], 0);
	assert_eq!(document.tab_stop(), 1);
	assert_eq!(document.line(0).expect("line").render(), b"a b");
}
