use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::action_handler::{ActionHandler, HELP_MESSAGE};
use crate::config::EditorConfig;
use crate::file_io::{FileIo, LocalFileIo, PersistenceError};
use crate::input::{InputError, InputReader};
use crate::state::EditorState;
use crate::ui::{self, GeometryError, Renderer, TerminalSession, TerminalSessionError, Tty, geometry};

#[derive(Debug, Error)]
pub enum AppError {
	#[error("terminal session failed")]
	Session(#[from] TerminalSessionError),
	#[error("determine window size failed")]
	Geometry(#[from] GeometryError),
	#[error("load file failed")]
	Load(#[from] PersistenceError),
	#[error("read key failed")]
	Input(#[from] InputError),
	#[error("draw frame failed")]
	Draw {
		#[source]
		source: io::Error,
	},
}

/// The editor controller: read one key, apply one action, redraw.
pub struct App {
	state:          EditorState,
	renderer:       Renderer,
	action_handler: ActionHandler,
	input:          InputReader<Tty>,
	tty:            Tty,
	file_io:        LocalFileIo,
	session:        TerminalSession,
}

impl App {
	/// Enters raw mode, sizes the screen and loads `file` if given.
	pub fn new(config: EditorConfig, file: Option<PathBuf>) -> Result<Self, AppError> {
		let session = TerminalSession::enter()?;
		let mut tty = Tty;
		let size = geometry::resolve(crossterm::terminal::size(), &mut tty)?;
		info!("window size: {} rows x {} cols", size.rows, size.cols);

		let mut state = EditorState::new(config, size.text_rows(), size.text_cols());
		let file_io = LocalFileIo;
		if let Some(path) = file {
			let lines = file_io.load_lines(&path)?;
			state.open(path, lines);
		}
		state.set_status_message(HELP_MESSAGE);

		Ok(Self {
			state,
			renderer: Renderer::new(),
			action_handler: ActionHandler::new(),
			input: InputReader::new(tty),
			tty,
			file_io,
			session,
		})
	}

	pub fn run(mut self) -> Result<(), AppError> {
		loop {
			self.renderer.refresh(&mut self.state, &mut self.tty).map_err(|source| AppError::Draw { source })?;

			let Some(key) = self.input.next_key()? else {
				continue;
			};
			let Some(action) = self.action_handler.action_for_key(key) else {
				continue;
			};
			if self.action_handler.apply(&mut self.state, &self.file_io, action).is_break() {
				break;
			}
		}

		info!("quit requested");
		ui::clear_screen(&mut self.tty).map_err(|source| AppError::Draw { source })?;
		self.session.leave()?;
		Ok(())
	}
}
