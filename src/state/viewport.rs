use super::document::Line;

/// Maps a buffer column to the screen column it occupies after tab expansion.
///
/// Walks the whole prefix of the line, so it must be recomputed whenever the
/// cursor row or column changes.
pub fn buffer_col_to_render_col(content: &[u8], col: usize, tab_stop: usize) -> usize {
	let tab_stop = tab_stop.max(1);
	content.iter().take(col).fold(0, |render_col, &byte| {
		if byte == b'\t' { render_col + tab_stop - render_col % tab_stop } else { render_col + 1 }
	})
}

/// Render column for `col` on `line`, or 0 for the virtual append row.
pub fn line_render_col(line: Option<&Line>, col: usize, tab_stop: usize) -> usize {
	line.map(|line| buffer_col_to_render_col(line.content(), col, tab_stop)).unwrap_or(0)
}

/// Scroll offsets plus the text area they apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
	pub row_offset: usize,
	pub col_offset: usize,
	rows:           usize,
	cols:           usize,
}

impl Viewport {
	pub fn new(rows: usize, cols: usize) -> Self {
		Self { row_offset: 0, col_offset: 0, rows: rows.max(1), cols: cols.max(1) }
	}

	/// Number of text rows, excluding the status and message lines.
	pub fn rows(&self) -> usize { self.rows }

	pub fn cols(&self) -> usize { self.cols }

	/// Moves the offsets by the smallest amount that brings
	/// (`row`, `render_col`) inside the visible area.
	pub fn scroll_to(&mut self, row: usize, render_col: usize) {
		if row < self.row_offset {
			self.row_offset = row;
		}
		if row >= self.row_offset + self.rows {
			self.row_offset = row + 1 - self.rows;
		}

		if render_col < self.col_offset {
			self.col_offset = render_col;
		}
		if render_col >= self.col_offset + self.cols {
			self.col_offset = render_col + 1 - self.cols;
		}
	}

	pub fn contains(&self, row: usize, render_col: usize) -> bool {
		(self.row_offset..self.row_offset + self.rows).contains(&row)
			&& (self.col_offset..self.col_offset + self.cols).contains(&render_col)
	}
}
