use std::{path::PathBuf, time::Duration};

use clap::Parser;

use tracing_subscriber::EnvFilter;

use crate::logging::DEFAULT_LOG_FILTER;
use crate::state::DEFAULT_TAB_STOP;

pub const DEFAULT_MESSAGE_TIMEOUT_SECS: u64 = 5;

/// Settings that shape rendering and status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
	pub tab_stop:        usize,
	pub message_timeout: Duration,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			tab_stop:        DEFAULT_TAB_STOP,
			message_timeout: Duration::from_secs(DEFAULT_MESSAGE_TIMEOUT_SECS),
		}
	}
}

#[derive(Debug, Parser)]
#[command(name = "lb", version, about = "A small screen-oriented text editor")]
pub struct Cli {
	/// File to open; starts with an empty, unnamed buffer when omitted.
	pub file: Option<PathBuf>,

	/// Columns between tab stops.
	#[arg(long, default_value_t = DEFAULT_TAB_STOP, value_parser = parse_tab_stop)]
	pub tab_stop: usize,

	/// Seconds a status message stays visible.
	#[arg(long, default_value_t = DEFAULT_MESSAGE_TIMEOUT_SECS)]
	pub message_timeout: u64,

	/// Log directives (`tracing` env-filter syntax) used when `RUST_LOG` is unset.
	#[arg(long, default_value = DEFAULT_LOG_FILTER, value_parser = parse_log_filter)]
	pub log_filter: String,
}

impl Cli {
	pub fn into_parts(self) -> (EditorConfig, Option<PathBuf>) {
		let config = EditorConfig {
			tab_stop:        self.tab_stop,
			message_timeout: Duration::from_secs(self.message_timeout),
		};
		(config, self.file)
	}
}

fn parse_tab_stop(value: &str) -> Result<usize, String> {
	let tab_stop = value.parse::<usize>().map_err(|err| err.to_string())?;
	if tab_stop == 0 {
		return Err("tab stop must be at least 1".to_string());
	}
	Ok(tab_stop)
}

fn parse_log_filter(value: &str) -> Result<String, String> {
	EnvFilter::try_new(value).map_err(|err| err.to_string())?;
	Ok(value.to_string())
}

#[cfg(test)]
mod tests {
	use std::{path::PathBuf, time::Duration};

	use clap::Parser;

	use super::{Cli, EditorConfig};

	#[test]
	fn defaults_without_arguments() {
		let cli = Cli::try_parse_from(["lb"]).expect("parse");
		assert_eq!(cli.log_filter, "info");
		let (config, file) = cli.into_parts();
		assert_eq!(config, EditorConfig::default());
		assert_eq!(file, None);
	}

	#[test]
	fn positional_file_and_flags() {
		let cli = Cli::try_parse_from(["lb", "--tab-stop", "8", "--message-timeout", "2", "notes.txt"])
			.expect("parse");
		let (config, file) = cli.into_parts();
		assert_eq!(config.tab_stop, 8);
		assert_eq!(config.message_timeout, Duration::from_secs(2));
		assert_eq!(file, Some(PathBuf::from("notes.txt")));
	}

	#[test]
	fn zero_tab_stop_is_rejected() {
		assert!(Cli::try_parse_from(["lb", "--tab-stop", "0"]).is_err());
	}

	#[test]
	fn log_filter_is_validated() {
		let cli = Cli::try_parse_from(["lb", "--log-filter", "lb=debug"]).expect("parse");
		assert_eq!(cli.log_filter, "lb=debug");
		assert!(Cli::try_parse_from(["lb", "--log-filter", "lb=loudest"]).is_err());
	}
}
