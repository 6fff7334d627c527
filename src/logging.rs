use std::path::PathBuf;

use thiserror::Error;
use time::macros::format_description;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::time::UtcTime;

/// Filter used when neither `RUST_LOG` nor `--log-filter` says otherwise.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
	#[error("create log directory failed")]
	CreateLogDir {
		#[source]
		source: std::io::Error,
	},
	#[error("invalid log filter {filter:?}")]
	InvalidFilter {
		filter: String,
		#[source]
		source: ParseError,
	},
	#[error("initialize tracing subscriber failed")]
	InitSubscriber {
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
}

/// Logs go to a file: the terminal is in raw mode and owned by the editor.
/// `RUST_LOG`, when set, takes precedence over `default_filter`.
pub fn init_logging(default_filter: &str) -> Result<(), LoggingError> {
	let filter = build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok(), default_filter)?;
	let log_dir = user_log_dir();
	std::fs::create_dir_all(&log_dir).map_err(|source| LoggingError::CreateLogDir { source })?;

	let timer =
		UtcTime::new(format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"));
	let file_appender = tracing_appender::rolling::never(&log_dir, "lb.log");
	tracing_subscriber::fmt()
		.with_timer(timer)
		.with_env_filter(filter)
		.with_writer(file_appender)
		.with_ansi(false)
		.try_init()
		.map_err(|source| LoggingError::InitSubscriber { source })?;

	Ok(())
}

fn build_filter(from_env: Option<String>, default_filter: &str) -> Result<EnvFilter, LoggingError> {
	let filter = from_env.filter(|directives| !directives.is_empty()).unwrap_or_else(|| default_filter.to_string());
	EnvFilter::try_new(&filter).map_err(|source| LoggingError::InvalidFilter { filter, source })
}

fn user_log_dir() -> PathBuf {
	#[cfg(target_os = "macos")]
	{
		std::env::var_os("HOME")
			.map(PathBuf::from)
			.unwrap_or_else(std::env::temp_dir)
			.join("Library")
			.join("Logs")
			.join("lb")
	}

	#[cfg(not(target_os = "macos"))]
	{
		if let Some(state_home) = std::env::var_os("XDG_STATE_HOME").map(PathBuf::from) {
			return state_home.join("lb").join("logs");
		}
		std::env::var_os("HOME")
			.map(PathBuf::from)
			.unwrap_or_else(std::env::temp_dir)
			.join(".local")
			.join("state")
			.join("lb")
			.join("logs")
	}
}

#[cfg(test)]
mod tests {
	use super::{DEFAULT_LOG_FILTER, LoggingError, build_filter};

	#[test]
	fn default_filter_applies_without_env() {
		let filter = build_filter(None, DEFAULT_LOG_FILTER).expect("valid filter");
		assert_eq!(filter.to_string(), "info");

		let filter = build_filter(Some(String::new()), "lb=debug").expect("valid filter");
		assert_eq!(filter.to_string(), "lb=debug");
	}

	#[test]
	fn env_directives_take_precedence() {
		let filter = build_filter(Some("lb=trace".to_string()), "warn").expect("valid filter");
		assert_eq!(filter.to_string(), "lb=trace");
	}

	#[test]
	fn malformed_directives_are_reported() {
		let err = build_filter(Some("lb=loudest".to_string()), DEFAULT_LOG_FILTER).expect_err("bad level");
		assert!(matches!(err, LoggingError::InvalidFilter { ref filter, .. } if filter == "lb=loudest"));
	}
}
