pub mod geometry;
mod status_bar;
mod terminal_session;
mod window_area;

use std::io::{self, Write};
use std::time::Instant;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tracing::trace;

use crate::state::EditorState;
pub use geometry::{GeometryError, WindowSize};
use status_bar::StatusBarWidget;
pub use terminal_session::{READ_TIMEOUT_DECISECONDS, TerminalSession, TerminalSessionError, Tty};
use window_area::WindowAreaWidget;

/// Builds whole frames and writes each one to the terminal in a single write.
#[derive(Debug, Default)]
pub struct Renderer {
	/// Capacity of the previous frame, reused as the next one's starting size.
	last_frame_len: usize,
}

impl Renderer {
	pub fn new() -> Self { Self::default() }

	/// Scrolls the viewport to the cursor, then redraws everything.
	pub fn refresh<W: Write>(&mut self, state: &mut EditorState, out: &mut W) -> io::Result<()> {
		state.scroll();
		let frame = self.compose(state, Instant::now())?;
		out.write_all(&frame)?;
		out.flush()?;
		trace!("frame written: {} bytes", frame.len());
		self.last_frame_len = frame.len();
		Ok(())
	}

	/// One complete frame for `state` as it would look at `now`. Assumes the
	/// viewport already contains the cursor.
	pub fn compose(&self, state: &EditorState, now: Instant) -> io::Result<Vec<u8>> {
		let mut frame = Vec::with_capacity(self.last_frame_len);
		queue!(frame, Hide, MoveTo(0, 0))?;
		WindowAreaWidget::from_state(state).render(&mut frame)?;
		StatusBarWidget::from_state(state, now).render(&mut frame)?;

		let screen_row = state.cursor.row.saturating_sub(state.viewport.row_offset);
		let screen_col = state.cursor_render_col().saturating_sub(state.viewport.col_offset);
		queue!(frame, MoveTo(to_u16(screen_col), to_u16(screen_row)), Show)?;
		Ok(frame)
	}
}

/// Clears the screen and homes the cursor, as done on quit and on fatal errors.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
	queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
	out.flush()
}

fn to_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }
