//! Diagnostics setup.
//!
//! The behavior modules only emit `tracing` events. Which subscriber receives
//! them depends on where the crate runs: the browser console for the wasm
//! build, stderr for the CLI.

/// Stderr subscriber for the CLI, filtered by `RUST_LOG` (default `warn`).
#[cfg(feature = "cli")]
pub fn init_cli() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Console subscriber for the page. `tracing-web` routes each event to the
/// console method matching its level. No timestamps: the browser clock is not
/// reachable through `std` on wasm32, and the console stamps lines anyway.
#[cfg(target_arch = "wasm32")]
pub fn init_console(level: tracing::level_filters::LevelFilter) {
    use tracing_subscriber::prelude::*;

    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());
    let _ = tracing_subscriber::registry()
        .with(console.with_filter(level))
        .try_init();
}
