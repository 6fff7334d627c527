use std::io::{self, Stdin};
use std::os::fd::AsFd;

use rustix::io::Errno;
use rustix::termios::{self, ControlModes, InputModes, LocalModes, OptionalActions, OutputModes, SpecialCodeIndex, Termios};
use thiserror::Error;
use tracing::{debug, error};

use crate::input::ByteSource;

/// Read timeout applied in raw mode, in tenths of a second.
pub const READ_TIMEOUT_DECISECONDS: u8 = 10;

#[derive(Debug, Error)]
pub enum TerminalSessionError {
	#[error("read terminal attributes failed")]
	GetAttributes {
		#[source]
		source: io::Error,
	},
	#[error("enable raw mode failed")]
	EnableRawMode {
		#[source]
		source: io::Error,
	},
	#[error("restore terminal attributes failed")]
	Restore {
		#[source]
		source: io::Error,
	},
}

/// Raw mode on a terminal for as long as the value lives, the controlling
/// terminal (stdin) unless entered with [`enter_on`].
///
/// Dropping the session restores the attributes captured on entry, which
/// covers early returns, `?` propagation and unwinding panics alike.
///
/// [`enter_on`]: TerminalSession::enter_on
pub struct TerminalSession<F: AsFd = Stdin> {
	tty:      F,
	original: Termios,
	restored: bool,
}

impl TerminalSession {
	pub fn enter() -> Result<Self, TerminalSessionError> { Self::enter_on(io::stdin()) }
}

impl<F: AsFd> TerminalSession<F> {
	pub fn enter_on(tty: F) -> Result<Self, TerminalSessionError> {
		let original = termios::tcgetattr(&tty)
			.map_err(|errno| TerminalSessionError::GetAttributes { source: errno.into() })?;

		let mut raw = original.clone();
		make_raw(&mut raw);
		termios::tcsetattr(&tty, OptionalActions::Flush, &raw)
			.map_err(|errno| TerminalSessionError::EnableRawMode { source: errno.into() })?;
		debug!("raw mode enabled");
		Ok(Self { tty, original, restored: false })
	}

	/// Restores the original attributes now, reporting failure to the caller.
	pub fn leave(mut self) -> Result<(), TerminalSessionError> {
		self.restored = true;
		self.restore()
	}

	fn restore(&self) -> Result<(), TerminalSessionError> {
		termios::tcsetattr(&self.tty, OptionalActions::Flush, &self.original)
			.map_err(|errno| TerminalSessionError::Restore { source: errno.into() })
	}
}

impl<F: AsFd> Drop for TerminalSession<F> {
	fn drop(&mut self) {
		if self.restored {
			return;
		}
		if let Err(err) = self.restore() {
			error!("{:#}", anyhow::Error::new(err));
		}
	}
}

/// Byte-at-a-time input without echo, signals or CR translation, raw output,
/// and reads that give up after [`READ_TIMEOUT_DECISECONDS`] with no byte.
pub fn make_raw(termios: &mut Termios) {
	termios.input_modes.remove(
		InputModes::IXON | InputModes::ICRNL | InputModes::BRKINT | InputModes::INPCK | InputModes::ISTRIP,
	);
	termios.output_modes.remove(OutputModes::OPOST);
	termios.control_modes.insert(ControlModes::CS8);
	termios.local_modes.remove(LocalModes::ECHO | LocalModes::ICANON | LocalModes::ISIG | LocalModes::IEXTEN);
	termios.special_codes[SpecialCodeIndex::VMIN] = 0;
	termios.special_codes[SpecialCodeIndex::VTIME] = READ_TIMEOUT_DECISECONDS;
}

/// Unbuffered handle on the terminal: bytes in from stdin, bytes out to
/// stdout, one system call per `write`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tty;

impl ByteSource for Tty {
	fn read_byte(&mut self) -> io::Result<Option<u8>> {
		let mut byte = [0u8; 1];
		match rustix::io::read(io::stdin(), &mut byte[..]) {
			Ok(0) => Ok(None),
			Ok(_) => Ok(Some(byte[0])),
			Err(errno) if errno == Errno::AGAIN || errno == Errno::INTR => Ok(None),
			Err(errno) => Err(errno.into()),
		}
	}
}

impl io::Write for Tty {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		rustix::io::write(io::stdout(), buf).map_err(io::Error::from)
	}

	fn flush(&mut self) -> io::Result<()> { Ok(()) }
}
