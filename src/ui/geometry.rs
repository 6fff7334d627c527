use std::io::{self, Write};

use crossterm::cursor::{MoveDown, MoveRight};
use crossterm::queue;
use thiserror::Error;
use tracing::debug;

use crate::input::ByteSource;

/// Device status report request; the terminal answers `ESC [ rows ; cols R`.
const CURSOR_POSITION_QUERY: &[u8] = b"\x1b[6n";
const MAX_REPORT_LEN: usize = 31;
/// Rows taken by the status and message lines.
pub const RESERVED_ROWS: u16 = 2;

#[derive(Debug, Error)]
pub enum GeometryError {
	#[error("write cursor position probe failed")]
	Probe {
		#[source]
		source: io::Error,
	},
	#[error("read cursor position report failed")]
	ReadReport {
		#[source]
		source: io::Error,
	},
	#[error("malformed cursor position report: {report:?}")]
	MalformedReport { report: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
	pub rows: u16,
	pub cols: u16,
}

impl WindowSize {
	/// Rows left for document text.
	pub fn text_rows(&self) -> usize { self.rows.saturating_sub(RESERVED_ROWS) as usize }

	pub fn text_cols(&self) -> usize { self.cols as usize }
}

/// Resolves the window size from `primary` (`(cols, rows)`, as returned by
/// [`crossterm::terminal::size`]), probing the cursor position through `tty`
/// when the query failed or reported zero columns.
pub fn resolve<T>(primary: io::Result<(u16, u16)>, tty: &mut T) -> Result<WindowSize, GeometryError>
where T: Write + ByteSource {
	match primary {
		Ok((cols, rows)) if cols > 0 => return Ok(WindowSize { rows, cols }),
		Ok(_) => debug!("size query reported zero columns, probing cursor position"),
		Err(err) => debug!("size query failed: {}, probing cursor position", err),
	}
	probe(tty)
}

fn probe<T>(tty: &mut T) -> Result<WindowSize, GeometryError>
where T: Write + ByteSource {
	queue!(tty, MoveRight(999), MoveDown(999)).map_err(|source| GeometryError::Probe { source })?;
	tty.write_all(CURSOR_POSITION_QUERY).map_err(|source| GeometryError::Probe { source })?;
	tty.flush().map_err(|source| GeometryError::Probe { source })?;

	let mut report = Vec::with_capacity(MAX_REPORT_LEN);
	while report.len() < MAX_REPORT_LEN {
		match tty.read_byte().map_err(|source| GeometryError::ReadReport { source })? {
			Some(b'R') | None => break,
			Some(byte) => report.push(byte),
		}
	}

	parse_cursor_report(&report).ok_or_else(|| GeometryError::MalformedReport {
		report: String::from_utf8_lossy(&report).into_owned(),
	})
}

/// Parses `ESC [ rows ; cols` (the trailing `R` already stripped).
pub fn parse_cursor_report(report: &[u8]) -> Option<WindowSize> {
	let body = std::str::from_utf8(report.strip_prefix(b"\x1b[")?).ok()?;
	let (rows, cols) = body.split_once(';')?;
	Some(WindowSize { rows: rows.parse().ok()?, cols: cols.parse().ok()? })
}

#[cfg(test)]
mod tests {
	use std::collections::VecDeque;
	use std::io::{self, Write};

	use super::{GeometryError, WindowSize, parse_cursor_report, resolve};
	use crate::input::ByteSource;

	#[derive(Default)]
	struct FakeTty {
		written: Vec<u8>,
		replies: VecDeque<u8>,
	}

	impl FakeTty {
		fn replying(reply: &[u8]) -> Self { Self { written: Vec::new(), replies: reply.iter().copied().collect() } }
	}

	impl Write for FakeTty {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> { self.written.write(buf) }

		fn flush(&mut self) -> io::Result<()> { Ok(()) }
	}

	impl ByteSource for FakeTty {
		fn read_byte(&mut self) -> io::Result<Option<u8>> { Ok(self.replies.pop_front()) }
	}

	#[test]
	fn primary_query_wins_when_it_reports_columns() {
		let mut tty = FakeTty::default();
		let size = resolve(Ok((80, 24)), &mut tty).expect("resolve");
		assert_eq!(size, WindowSize { rows: 24, cols: 80 });
		assert!(tty.written.is_empty());
	}

	#[test]
	fn zero_columns_falls_back_to_cursor_probe() {
		let mut tty = FakeTty::replying(b"\x1b[24;80R");
		let size = resolve(Ok((0, 0)), &mut tty).expect("resolve");
		assert_eq!(size, WindowSize { rows: 24, cols: 80 });
		assert_eq!(tty.written, b"\x1b[999C\x1b[999B\x1b[6n");
	}

	#[test]
	fn failed_query_falls_back_and_stops_at_terminator() {
		let mut tty = FakeTty::replying(b"\x1b[50;132Rleftover");
		let size = resolve(Err(io::Error::other("no ioctl")), &mut tty).expect("resolve");
		assert_eq!(size, WindowSize { rows: 50, cols: 132 });
		assert_eq!(tty.replies.iter().copied().collect::<Vec<_>>(), b"leftover");
	}

	#[test]
	fn silent_terminal_is_a_geometry_error() {
		let mut tty = FakeTty::default();
		let err = resolve(Ok((0, 0)), &mut tty).expect_err("no report");
		assert!(matches!(err, GeometryError::MalformedReport { .. }));
	}

	#[test]
	fn report_parsing() {
		assert_eq!(parse_cursor_report(b"\x1b[1;1"), Some(WindowSize { rows: 1, cols: 1 }));
		assert_eq!(parse_cursor_report(b"[24;80"), None);
		assert_eq!(parse_cursor_report(b"\x1b[24"), None);
		assert_eq!(parse_cursor_report(b"\x1b[a;b"), None);
	}

	#[test]
	fn text_area_excludes_status_lines() {
		let size = WindowSize { rows: 24, cols: 80 };
		assert_eq!(size.text_rows(), 22);
		assert_eq!(size.text_cols(), 80);
		assert_eq!(WindowSize { rows: 1, cols: 10 }.text_rows(), 0);
	}
}
