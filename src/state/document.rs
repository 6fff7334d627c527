/// Column width of a tab stop when none is configured.
pub const DEFAULT_TAB_STOP: usize = 4;

/// One row of text: the stored bytes plus their tab-expanded projection.
///
/// `render` is rebuilt inside every mutating call, so a `Line` handed out by
/// [`Document`] is never stale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
	content: Vec<u8>,
	render:  Vec<u8>,
}

impl Line {
	fn new(content: Vec<u8>, tab_stop: usize) -> Self {
		let mut line = Self { content, render: Vec::new() };
		line.update_render(tab_stop);
		line
	}

	pub fn content(&self) -> &[u8] { &self.content }

	pub fn render(&self) -> &[u8] { &self.render }

	pub fn len(&self) -> usize { self.content.len() }

	pub fn is_empty(&self) -> bool { self.content.is_empty() }

	fn update_render(&mut self, tab_stop: usize) {
		let tabs = self.content.iter().filter(|byte| **byte == b'\t').count();
		let mut render = Vec::with_capacity(self.content.len() + tabs * (tab_stop - 1));
		for &byte in &self.content {
			if byte == b'\t' {
				render.push(b' ');
				while render.len() % tab_stop != 0 {
					render.push(b' ');
				}
			} else {
				render.push(byte);
			}
		}
		self.render = render;
	}
}

/// Ordered lines of the buffer being edited.
///
/// Row indices in `[0, len]` are valid cursor rows; `len` itself is the virtual
/// append position below the last line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	lines:    Vec<Line>,
	tab_stop: usize,
}

impl Document {
	pub fn new(tab_stop: usize) -> Self { Self { lines: Vec::new(), tab_stop: tab_stop.max(1) } }

	pub fn from_lines<I, L>(lines: I, tab_stop: usize) -> Self
	where
		I: IntoIterator<Item = L>,
		L: Into<Vec<u8>>,
	{
		let mut document = Self::new(tab_stop);
		for line in lines {
			document.append_line(line);
		}
		document
	}

	pub fn tab_stop(&self) -> usize { self.tab_stop }

	pub fn len(&self) -> usize { self.lines.len() }

	pub fn is_empty(&self) -> bool { self.lines.is_empty() }

	pub fn line(&self, row: usize) -> Option<&Line> { self.lines.get(row) }

	pub fn lines(&self) -> &[Line] { &self.lines }

	/// Length of `row`, or 0 for the virtual append row.
	pub fn line_len(&self, row: usize) -> usize { self.lines.get(row).map(Line::len).unwrap_or(0) }

	pub fn append_line(&mut self, content: impl Into<Vec<u8>>) {
		self.lines.push(Line::new(content.into(), self.tab_stop));
	}

	/// Inserts a new line before `at`; `at` past the end appends.
	pub fn insert_line(&mut self, at: usize, content: impl Into<Vec<u8>>) {
		let at = at.min(self.lines.len());
		self.lines.insert(at, Line::new(content.into(), self.tab_stop));
	}

	/// Inserts `byte` into `row` before column `col` and returns the column it
	/// landed on. A `row` at or past the end materializes a new empty line.
	pub fn insert_char(&mut self, row: usize, col: usize, byte: u8) -> usize {
		let row = if row >= self.lines.len() {
			self.append_line(Vec::new());
			self.lines.len() - 1
		} else {
			row
		};
		let tab_stop = self.tab_stop;
		let line = &mut self.lines[row];
		let col = col.min(line.content.len());
		line.content.insert(col, byte);
		line.update_render(tab_stop);
		col
	}

	/// Splits `row` at `col`; the tail becomes a new line directly below.
	pub fn split_line(&mut self, row: usize, col: usize) {
		let tab_stop = self.tab_stop;
		let Some(line) = self.lines.get_mut(row) else {
			self.append_line(Vec::new());
			return;
		};
		let col = col.min(line.content.len());
		let tail = line.content.split_off(col);
		line.update_render(tab_stop);
		self.lines.insert(row + 1, Line::new(tail, tab_stop));
	}

	/// Removes the byte at `col` in `row`. Returns `false` when there is none.
	pub fn delete_char(&mut self, row: usize, col: usize) -> bool {
		let tab_stop = self.tab_stop;
		let Some(line) = self.lines.get_mut(row) else {
			return false;
		};
		if col >= line.content.len() {
			return false;
		}
		line.content.remove(col);
		line.update_render(tab_stop);
		true
	}

	/// Appends `row` onto the line above it and removes `row`. Returns the
	/// column in the previous line where the joined text starts.
	pub fn join_with_previous(&mut self, row: usize) -> Option<usize> {
		if row == 0 || row >= self.lines.len() {
			return None;
		}
		let removed = self.lines.remove(row);
		let tab_stop = self.tab_stop;
		let previous = &mut self.lines[row - 1];
		let join_col = previous.content.len();
		previous.content.extend_from_slice(&removed.content);
		previous.update_render(tab_stop);
		Some(join_col)
	}

	/// Every line followed by `\n`, including the last one.
	pub fn to_flat_bytes(&self) -> Vec<u8> {
		let total = self.lines.iter().map(|line| line.len() + 1).sum();
		let mut bytes = Vec::with_capacity(total);
		for line in &self.lines {
			bytes.extend_from_slice(&line.content);
			bytes.push(b'\n');
		}
		bytes
	}
}

impl Default for Document {
	fn default() -> Self { Self::new(DEFAULT_TAB_STOP) }
}
