use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use lb::{app::App, config::Cli, logging, ui};

fn main() {
	if let Err(err) = run() {
		die(&err);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();
	logging::init_logging(&cli.log_filter).context("initialize logging failed")?;
	let (config, file) = cli.into_parts();
	let app = App::new(config, file).context("start editor failed")?;
	app.run().context("run editor failed")
}

/// Single exit path for fatal errors. The terminal session has already been
/// dropped (and raw mode restored) by the time the error reaches here.
fn die(err: &anyhow::Error) -> ! {
	tracing::error!("{:#}", err);
	let _ = ui::clear_screen(&mut io::stdout());
	eprintln!("lb: {:#}", err);
	std::process::exit(1);
}
