use crate::state::MoveDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
	InsertByte(u8),
	InsertNewline,
	Backspace,
	DeleteForward,
	Move(MoveDirection),
	MoveLineStart,
	MoveLineEnd,
	PageUp,
	PageDown,
	Save,
	Quit,
	/// Escape and Ctrl-L; the next refresh redraws anyway.
	Redraw,
}
