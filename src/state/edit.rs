use tracing::debug;

use super::EditorState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
	Left,
	Right,
	Up,
	Down,
}

impl EditorState {
	/// One-cell cursor move. Left at column 0 and right at end of line wrap to
	/// the neighbouring line; the column is clamped to the target line after.
	pub fn move_cursor(&mut self, direction: MoveDirection) {
		let len = self.document.len();
		let cursor = &mut self.cursor;
		match direction {
			MoveDirection::Left => {
				if cursor.col > 0 {
					cursor.col -= 1;
				} else if cursor.row > 0 {
					cursor.row -= 1;
					cursor.col = self.document.line_len(cursor.row);
				}
			}
			MoveDirection::Right => {
				if let Some(line) = self.document.line(cursor.row) {
					if cursor.col < line.len() {
						cursor.col += 1;
					} else if cursor.col == line.len() {
						cursor.row += 1;
						cursor.col = 0;
					}
				}
			}
			MoveDirection::Up => {
				cursor.row = cursor.row.saturating_sub(1);
			}
			MoveDirection::Down => {
				if cursor.row < len {
					cursor.row += 1;
				}
			}
		}
		self.clamp_cursor_col();
	}

	pub fn move_cursor_line_start(&mut self) { self.cursor.col = 0; }

	pub fn move_cursor_line_end(&mut self) {
		if let Some(line) = self.document.line(self.cursor.row) {
			self.cursor.col = line.len();
		}
	}

	/// Jumps to the top of the viewport, then steps up one screenful.
	pub fn page_up(&mut self) {
		self.cursor.row = self.viewport.row_offset.min(self.document.len());
		self.clamp_cursor_col();
		for _ in 0..self.viewport.rows() {
			self.move_cursor(MoveDirection::Up);
		}
	}

	/// Jumps to the last visible row, then steps down one screenful.
	pub fn page_down(&mut self) {
		let bottom = self.viewport.row_offset + self.viewport.rows() - 1;
		self.cursor.row = bottom.min(self.document.len());
		self.clamp_cursor_col();
		for _ in 0..self.viewport.rows() {
			self.move_cursor(MoveDirection::Down);
		}
	}

	pub fn insert_byte(&mut self, byte: u8) {
		let col = self.document.insert_char(self.cursor.row, self.cursor.col, byte);
		self.cursor.row = self.cursor.row.min(self.document.len() - 1);
		self.cursor.col = col + 1;
	}

	pub fn insert_newline(&mut self) {
		let row = self.cursor.row;
		if self.cursor.col == 0 || row >= self.document.len() {
			self.document.insert_line(row, Vec::new());
		} else {
			self.document.split_line(row, self.cursor.col);
		}
		self.cursor.row = row + 1;
		self.cursor.col = 0;
	}

	/// Deletes the byte left of the cursor, joining with the previous line at
	/// column 0. The virtual append row holds nothing to delete.
	pub fn backspace(&mut self) {
		let row = self.cursor.row;
		if row >= self.document.len() {
			return;
		}
		if self.cursor.col > 0 {
			if self.document.delete_char(row, self.cursor.col - 1) {
				self.cursor.col -= 1;
			}
		} else if let Some(join_col) = self.document.join_with_previous(row) {
			debug!("joined line {} into {}", row, row - 1);
			self.cursor.row = row - 1;
			self.cursor.col = join_col;
		}
	}

	/// Deletes the byte under the cursor, or joins the next line at end of line.
	pub fn delete_forward(&mut self) {
		let row = self.cursor.row;
		if row + 1 >= self.document.len() && self.cursor.col >= self.document.line_len(row) {
			return;
		}
		self.move_cursor(MoveDirection::Right);
		self.backspace();
	}

	fn clamp_cursor_col(&mut self) {
		let max_col = self.document.line_len(self.cursor.row);
		if self.cursor.col > max_col {
			self.cursor.col = max_col;
		}
	}
}
