use std::io;
use std::time::Instant;

use crossterm::queue;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use crate::state::EditorState;

const MAX_FILENAME_CHARS: usize = 20;
const NO_FILENAME: &str = "[New File]";

/// The inverted status line plus the message line below it.
pub(super) struct StatusBarWidget<'a> {
	status_line: String,
	position:    String,
	message:     Option<&'a str>,
	cols:        usize,
}

impl<'a> StatusBarWidget<'a> {
	pub(super) fn from_state(state: &'a EditorState, now: Instant) -> Self {
		let filename = state
			.filename()
			.map(|path| path.display().to_string().chars().take(MAX_FILENAME_CHARS).collect::<String>())
			.unwrap_or_else(|| NO_FILENAME.to_string());
		let line_count = state.document.len();
		Self {
			status_line: format!("# {} - {} lines", filename, line_count),
			position:    format!("{}:{} {} ", state.cursor.row + 1, state.cursor.col + 1, line_count),
			message:     state.visible_message(now),
			cols:        state.viewport.cols(),
		}
	}

	pub(super) fn render(&self, out: &mut Vec<u8>) -> io::Result<()> {
		queue!(out, SetAttribute(Attribute::Reverse))?;
		let status = &self.status_line.as_bytes()[..self.status_line.len().min(self.cols)];
		out.extend_from_slice(status);
		let mut len = status.len();
		while len < self.cols {
			if self.cols - len == self.position.len() {
				out.extend_from_slice(self.position.as_bytes());
				break;
			}
			out.push(b' ');
			len += 1;
		}
		queue!(out, SetAttribute(Attribute::Reset))?;
		out.extend_from_slice(b"\r\n");

		queue!(out, Clear(ClearType::UntilNewLine))?;
		if let Some(message) = self.message {
			out.extend_from_slice(&message.as_bytes()[..message.len().min(self.cols)]);
		}
		Ok(())
	}
}
