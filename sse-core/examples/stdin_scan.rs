//! Scan an event stream from stdin and print each event.
//!
//! Run with: curl -sN https://example.com/stream | cargo run --example stdin_scan -- --comments
//! Set RUST_LOG=sse_core=debug to watch the scanner.

use std::io;

use sse_core::{CommentPolicy, ScanConfig, Scanner};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let comments = if std::env::args().any(|a| a == "--comments") {
        CommentPolicy::Capture
    } else {
        CommentPolicy::Discard
    };

    let mut scanner = Scanner::from_reader(io::stdin().lock(), ScanConfig::new().comments(comments));
    while scanner.advance() {
        println!("EVENT: {:?}", scanner.event());
    }

    if let Some(err) = scanner.err() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
