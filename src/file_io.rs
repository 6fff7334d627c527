use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PersistenceError {
	#[error("open file failed: {}", path.display())]
	Open {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("read file failed: {}", path.display())]
	Read {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("write file failed: {}", path.display())]
	Write {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
}

impl PersistenceError {
	/// The underlying I/O failure, for user-facing messages.
	pub fn io_error(&self) -> &io::Error {
		match self {
			Self::Open { source, .. } | Self::Read { source, .. } | Self::Write { source, .. } => source,
		}
	}
}

/// Loads and stores document bytes.
pub trait FileIo {
	/// Lines of `path` with trailing `\r`/`\n` removed.
	fn load_lines(&self, path: &Path) -> Result<Vec<Vec<u8>>, PersistenceError>;

	/// Replaces the contents of `path` with `bytes`, returning the count written.
	fn save(&self, path: &Path, bytes: &[u8]) -> Result<usize, PersistenceError>;
}

/// [`FileIo`] on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileIo;

impl FileIo for LocalFileIo {
	fn load_lines(&self, path: &Path) -> Result<Vec<Vec<u8>>, PersistenceError> {
		let file =
			File::open(path).map_err(|source| PersistenceError::Open { path: path.to_path_buf(), source })?;
		let mut lines = Vec::new();
		for line in BufReader::new(file).split(b'\n') {
			let mut line = line.map_err(|source| PersistenceError::Read { path: path.to_path_buf(), source })?;
			while matches!(line.last(), Some(b'\n' | b'\r')) {
				line.pop();
			}
			lines.push(line);
		}
		info!("loaded {} lines from {}", lines.len(), path.display());
		Ok(lines)
	}

	fn save(&self, path: &Path, bytes: &[u8]) -> Result<usize, PersistenceError> {
		let write_err = |source| PersistenceError::Write { path: path.to_path_buf(), source };
		let mut file = OpenOptions::new()
			.read(true)
			.write(true)
			.create(true)
			.truncate(false)
			.mode(0o644)
			.open(path)
			.map_err(write_err)?;
		file.set_len(bytes.len() as u64).map_err(write_err)?;
		file.write_all(bytes).map_err(write_err)?;
		info!("wrote {} bytes to {}", bytes.len(), path.display());
		Ok(bytes.len())
	}
}
