use std::io;

use thiserror::Error;
use tracing::trace;

pub const ESCAPE: u8 = 0x1b;
pub const BACKSPACE: u8 = 0x7f;
pub const ENTER: u8 = b'\r';

/// Byte produced by holding Ctrl with `key`.
pub const fn ctrl(key: u8) -> u8 { key & 0x1f }

/// A logical key decoded from the terminal byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	/// Any byte that does not start a recognized sequence, passed through as is.
	Byte(u8),
	ArrowLeft,
	ArrowRight,
	ArrowUp,
	ArrowDown,
	Home,
	End,
	PageUp,
	PageDown,
	Delete,
	Escape,
}

#[derive(Debug, Error)]
pub enum InputError {
	#[error("read from terminal failed")]
	Read {
		#[source]
		source: io::Error,
	},
}

/// Blocking byte input with a read timeout. `Ok(None)` means the timeout
/// elapsed without a byte.
pub trait ByteSource {
	fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DecodeState {
	#[default]
	Normal,
	SawEscape,
	SawBracket,
	SawBracketDigit(u8),
	SawO,
	/// ESC followed by a byte that starts no known sequence; one more byte is
	/// still consumed before collapsing to Escape.
	SawUnknown,
}

/// Turns a byte stream into [`Key`]s without touching the terminal.
#[derive(Debug, Default)]
pub struct KeyDecoder {
	state: DecodeState,
}

impl KeyDecoder {
	pub fn new() -> Self { Self::default() }

	pub fn is_idle(&self) -> bool { self.state == DecodeState::Normal }

	/// Feeds one byte. Returns a key once a sequence is complete.
	pub fn feed(&mut self, byte: u8) -> Option<Key> {
		let (next, key) = match (self.state, byte) {
			(DecodeState::Normal, ESCAPE) => (DecodeState::SawEscape, None),
			(DecodeState::Normal, byte) => (DecodeState::Normal, Some(Key::Byte(byte))),
			(DecodeState::SawEscape, b'[') => (DecodeState::SawBracket, None),
			(DecodeState::SawEscape, b'O') => (DecodeState::SawO, None),
			(DecodeState::SawEscape, _) => (DecodeState::SawUnknown, None),
			(DecodeState::SawBracket, digit @ b'0'..=b'9') => (DecodeState::SawBracketDigit(digit), None),
			(DecodeState::SawBracket, letter) => (DecodeState::Normal, Some(bracket_letter_key(letter))),
			(DecodeState::SawBracketDigit(digit), b'~') => (DecodeState::Normal, Some(tilde_key(digit))),
			(DecodeState::SawBracketDigit(_), _) => (DecodeState::Normal, Some(Key::Escape)),
			(DecodeState::SawO, letter) => (DecodeState::Normal, Some(o_letter_key(letter))),
			(DecodeState::SawUnknown, _) => (DecodeState::Normal, Some(Key::Escape)),
		};
		self.state = next;
		key
	}

	/// The read timed out. A pending sequence degrades to a bare Escape.
	pub fn timeout(&mut self) -> Option<Key> {
		if self.is_idle() {
			return None;
		}
		trace!("escape sequence timed out in {:?}", self.state);
		self.state = DecodeState::Normal;
		Some(Key::Escape)
	}
}

fn bracket_letter_key(letter: u8) -> Key {
	match letter {
		b'A' => Key::ArrowUp,
		b'B' => Key::ArrowDown,
		b'C' => Key::ArrowRight,
		b'D' => Key::ArrowLeft,
		b'H' => Key::Home,
		b'F' => Key::End,
		_ => Key::Escape,
	}
}

fn tilde_key(digit: u8) -> Key {
	match digit {
		b'1' | b'7' => Key::Home,
		b'3' => Key::Delete,
		b'4' | b'8' => Key::End,
		b'5' => Key::PageUp,
		b'6' => Key::PageDown,
		_ => Key::Escape,
	}
}

fn o_letter_key(letter: u8) -> Key {
	match letter {
		b'H' => Key::Home,
		b'F' => Key::End,
		_ => Key::Escape,
	}
}

/// Pulls keys from a [`ByteSource`].
pub struct InputReader<S> {
	source:  S,
	decoder: KeyDecoder,
}

impl<S: ByteSource> InputReader<S> {
	pub fn new(source: S) -> Self { Self { source, decoder: KeyDecoder::new() } }

	/// Waits for the next key. Returns `Ok(None)` when one timeout interval
	/// passes with no input at all.
	pub fn next_key(&mut self) -> Result<Option<Key>, InputError> {
		loop {
			match self.source.read_byte().map_err(|source| InputError::Read { source })? {
				Some(byte) => {
					if let Some(key) = self.decoder.feed(byte) {
						return Ok(Some(key));
					}
				}
				None => return Ok(self.decoder.timeout()),
			}
		}
	}
}
