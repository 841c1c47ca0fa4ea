// Library surface for the dashboard binary and headless integration tests.
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod logging;
pub mod members;
pub mod runtime;
pub mod session;
pub mod simulation;
pub mod time_series;
pub mod timer;
pub mod ui;
