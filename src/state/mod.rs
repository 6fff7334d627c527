use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use crate::config::EditorConfig;

mod document;
mod edit;
mod viewport;

pub use document::{DEFAULT_TAB_STOP, Document, Line};
pub use edit::MoveDirection;
pub use viewport::{Viewport, buffer_col_to_render_col, line_render_col};

/// Longest status message kept, in bytes.
pub const MAX_MESSAGE_LEN: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
	pub row: usize,
	pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
	pub text:   String,
	pub set_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarState {
	pub filename: Option<PathBuf>,
	pub message:  Option<StatusMessage>,
}

/// Everything one editing session mutates: the document, the cursor and the
/// scroll position, owned by the controller loop.
#[derive(Debug, Clone)]
pub struct EditorState {
	pub document:   Document,
	pub cursor:     CursorState,
	pub viewport:   Viewport,
	pub status_bar: StatusBarState,
	pub config:     EditorConfig,
}

impl EditorState {
	/// `text_rows` and `text_cols` describe the area left for document text.
	pub fn new(config: EditorConfig, text_rows: usize, text_cols: usize) -> Self {
		Self {
			document: Document::new(config.tab_stop),
			cursor: CursorState::default(),
			viewport: Viewport::new(text_rows, text_cols),
			status_bar: StatusBarState::default(),
			config,
		}
	}

	/// Replaces the document with `lines` read from `path`.
	pub fn open<I, L>(&mut self, path: PathBuf, lines: I)
	where
		I: IntoIterator<Item = L>,
		L: Into<Vec<u8>>,
	{
		self.document = Document::from_lines(lines, self.config.tab_stop);
		self.cursor = CursorState::default();
		self.viewport = Viewport::new(self.viewport.rows(), self.viewport.cols());
		info!("opened {} ({} lines)", path.display(), self.document.len());
		self.status_bar.filename = Some(path);
	}

	pub fn filename(&self) -> Option<&Path> { self.status_bar.filename.as_deref() }

	pub fn set_status_message(&mut self, text: impl Into<String>) {
		self.set_status_message_at(text, Instant::now());
	}

	pub fn set_status_message_at(&mut self, text: impl Into<String>, now: Instant) {
		let mut text = text.into();
		if text.len() > MAX_MESSAGE_LEN {
			let mut end = MAX_MESSAGE_LEN;
			while !text.is_char_boundary(end) {
				end -= 1;
			}
			text.truncate(end);
		}
		self.status_bar.message = Some(StatusMessage { text, set_at: now });
	}

	/// The status message if it is non-empty and has not expired at `now`.
	pub fn visible_message(&self, now: Instant) -> Option<&str> {
		let message = self.status_bar.message.as_ref()?;
		if message.text.is_empty() {
			return None;
		}
		(now.saturating_duration_since(message.set_at) < self.config.message_timeout)
			.then_some(message.text.as_str())
	}

	/// Cursor column in screen space, recomputed from the active line.
	pub fn cursor_render_col(&self) -> usize {
		line_render_col(self.document.line(self.cursor.row), self.cursor.col, self.document.tab_stop())
	}

	/// Adjusts the scroll offsets so the cursor is visible and returns its
	/// render column.
	pub fn scroll(&mut self) -> usize {
		let render_col = self.cursor_render_col();
		self.viewport.scroll_to(self.cursor.row, render_col);
		render_col
	}

	/// Path and flattened contents to write, if the buffer has a name.
	pub fn save_snapshot(&self) -> Option<(PathBuf, Vec<u8>)> {
		let path = self.status_bar.filename.clone()?;
		Some((path, self.document.to_flat_bytes()))
	}
}

#[cfg(test)]
mod tests;
