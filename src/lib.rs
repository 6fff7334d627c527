#[cfg(not(unix))]
compile_error!("lb drives the terminal through termios and only builds on unix");

pub mod action;
pub mod action_handler;
pub mod app;
pub mod config;
pub mod file_io;
pub mod input;
pub mod logging;
pub mod state;
pub mod ui;
