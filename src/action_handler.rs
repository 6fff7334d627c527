use std::ops::ControlFlow;

use tracing::{debug, warn};

use crate::action::EditorAction;
use crate::file_io::FileIo;
use crate::input::{BACKSPACE, ENTER, Key, ctrl};
use crate::state::{EditorState, MoveDirection};

pub const HELP_MESSAGE: &str = "lb help: Ctrl-S to save | Ctrl-Q to quit";
pub const NO_FILENAME_MESSAGE: &str = "no file name; nothing saved";

const QUIT: u8 = ctrl(b'q');
const SAVE: u8 = ctrl(b's');
const REDRAW: u8 = ctrl(b'l');
const CTRL_H: u8 = ctrl(b'h');
const TAB: u8 = b'\t';

/// Maps keys to actions and applies them to the editor state.
#[derive(Debug, Default)]
pub struct ActionHandler;

impl ActionHandler {
	pub fn new() -> Self { Self }

	pub fn action_for_key(&self, key: Key) -> Option<EditorAction> {
		let action = match key {
			Key::Byte(QUIT) => EditorAction::Quit,
			Key::Byte(SAVE) => EditorAction::Save,
			Key::Byte(REDRAW) | Key::Escape => EditorAction::Redraw,
			Key::Byte(ENTER) => EditorAction::InsertNewline,
			Key::Byte(BACKSPACE | CTRL_H) => EditorAction::Backspace,
			Key::Delete => EditorAction::DeleteForward,
			Key::Byte(byte) if byte == TAB || !byte.is_ascii_control() => EditorAction::InsertByte(byte),
			Key::Byte(byte) => {
				debug!("ignoring control byte {:#04x}", byte);
				return None;
			}
			Key::ArrowLeft => EditorAction::Move(MoveDirection::Left),
			Key::ArrowRight => EditorAction::Move(MoveDirection::Right),
			Key::ArrowUp => EditorAction::Move(MoveDirection::Up),
			Key::ArrowDown => EditorAction::Move(MoveDirection::Down),
			Key::Home => EditorAction::MoveLineStart,
			Key::End => EditorAction::MoveLineEnd,
			Key::PageUp => EditorAction::PageUp,
			Key::PageDown => EditorAction::PageDown,
		};
		Some(action)
	}

	/// Applies `action`. `Break` means the editor should quit.
	pub fn apply(&self, state: &mut EditorState, file_io: &impl FileIo, action: EditorAction) -> ControlFlow<()> {
		debug!("apply {:?}", action);
		match action {
			EditorAction::InsertByte(byte) => state.insert_byte(byte),
			EditorAction::InsertNewline => state.insert_newline(),
			EditorAction::Backspace => state.backspace(),
			EditorAction::DeleteForward => state.delete_forward(),
			EditorAction::Move(direction) => state.move_cursor(direction),
			EditorAction::MoveLineStart => state.move_cursor_line_start(),
			EditorAction::MoveLineEnd => state.move_cursor_line_end(),
			EditorAction::PageUp => state.page_up(),
			EditorAction::PageDown => state.page_down(),
			EditorAction::Save => save(state, file_io),
			EditorAction::Quit => return ControlFlow::Break(()),
			EditorAction::Redraw => {}
		}
		ControlFlow::Continue(())
	}
}

fn save(state: &mut EditorState, file_io: &impl FileIo) {
	let Some((path, bytes)) = state.save_snapshot() else {
		state.set_status_message(NO_FILENAME_MESSAGE);
		return;
	};
	match file_io.save(&path, &bytes) {
		Ok(written) => state.set_status_message(format!("{} bytes successfully written to disk.", written)),
		Err(err) => {
			warn!("save failed: {}: {}", err, err.io_error());
			state.set_status_message(format!("ERROR: Can't save! I/O error: {}", err.io_error()));
		}
	}
}
