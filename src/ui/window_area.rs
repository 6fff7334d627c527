use std::io;

use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::state::{EditorState, Line};

pub(super) struct WindowAreaWidget<'a> {
	lines:      &'a [Line],
	row_offset: usize,
	col_offset: usize,
	rows:       usize,
	cols:       usize,
}

impl<'a> WindowAreaWidget<'a> {
	pub(super) fn from_state(state: &'a EditorState) -> Self {
		Self {
			lines:      state.document.lines(),
			row_offset: state.viewport.row_offset,
			col_offset: state.viewport.col_offset,
			rows:       state.viewport.rows(),
			cols:       state.viewport.cols(),
		}
	}

	pub(super) fn render(&self, out: &mut Vec<u8>) -> io::Result<()> {
		for y in 0..self.rows {
			match self.lines.get(y + self.row_offset) {
				Some(line) => out.extend_from_slice(visible_slice(line.render(), self.col_offset, self.cols)),
				None if self.lines.is_empty() && y == self.rows / 3 => render_welcome(out, self.cols),
				None => out.push(b'~'),
			}
			queue!(out, Clear(ClearType::UntilNewLine))?;
			out.extend_from_slice(b"\r\n");
		}
		Ok(())
	}
}

fn render_welcome(out: &mut Vec<u8>, cols: usize) {
	let welcome = welcome_text();
	let welcome = &welcome.as_bytes()[..welcome.len().min(cols)];
	let mut padding = (cols - welcome.len()) / 2;
	if padding > 0 {
		out.push(b'~');
		padding -= 1;
	}
	out.extend(std::iter::repeat_n(b' ', padding));
	out.extend_from_slice(welcome);
}

fn welcome_text() -> String {
	format!("{} editor -- v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// At most `max_cols` bytes of `render` starting at `skip_cols`; empty once
/// the line is scrolled out of view.
fn visible_slice(render: &[u8], skip_cols: usize, max_cols: usize) -> &[u8] {
	let start = skip_cols.min(render.len());
	let end = start.saturating_add(max_cols).min(render.len());
	&render[start..end]
}

#[cfg(test)]
mod tests;
