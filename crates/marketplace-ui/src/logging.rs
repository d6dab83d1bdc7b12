//! Browser console logging for `tracing` events.

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` events from this crate and the core crate to the console.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let console_layer = fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new());

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_err()
    {
        leptos::logging::warn!("Console logging was already initialized");
    }
}
