//! Echo raw stdin traffic to stderr while printing parsed event data.
//!
//! Run with: printf 'data: a\r\n\r\n' | cargo run --example tee_stderr

use std::io;

use sse_core::{ScanConfig, Scanner};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut scanner = Scanner::from_reader(io::stdin().lock(), ScanConfig::default()).tee(io::stderr());
    for event in &mut scanner {
        match event {
            Ok(event) => println!("{}", event.data),
            Err(e) => {
                eprintln!("error: {e}");
                break;
            }
        }
    }
    scanner.close()
}
