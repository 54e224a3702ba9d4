//! # Todoz CLI
//!
//! The binary is intentionally thin: argument parsing, logging setup and
//! output live in `src/cli/`, while this file only invokes `cli::run()` and
//! handles process termination.
//!
//! ```text
//! cli::setup     clap definitions + tracing subscriber
//! cli::commands  context wiring (config → FileStore → TodoApi) and dispatch
//! cli::print     colored rendering of messages and todos
//! ```
//!
//! Everything behind `TodoApi` is UI agnostic. Tests for the CLI parse
//! argument vectors with clap directly; end-to-end behavior is covered by the
//! integration tests in `tests/`, which drive the built binary.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
