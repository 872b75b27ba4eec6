//! SSE Core Scanner
//!
//! Streaming, pull-based parser for Server-Sent Events (`text/event-stream`).
//! Reads from any blocking byte source and produces structured events
//! without ever interpreting their payloads.
//!
//! # Architecture
//!
//! - **splitter.rs** - CR LF / CR / LF line tokenizer, chunk-boundary safe
//! - **lines.rs** - Buffered driver feeding source bytes to the splitter
//! - **field.rs** - Literal field prefix classification
//! - **scanner.rs** - Event assembler, the public `Scanner`
//! - **event.rs** - `ServerSentEvent` output type
//! - **source.rs** - `Close` capability and `NoClose` adapter
//! - **tee.rs** - Raw traffic duplication
//! - **config.rs** - Construction-time options
//! - **error.rs** - Terminal errors

pub mod config;
pub mod error;
pub mod event;
mod field;
mod lines;
pub mod scanner;
pub mod source;
pub mod splitter;
pub mod tee;

pub use config::{CommentPolicy, ScanConfig};
pub use error::{ScanError, ScanResult};
pub use event::ServerSentEvent;
pub use scanner::Scanner;
pub use source::{Close, NoClose};
pub use splitter::{EolSplitter, Split};
pub use tee::Tee;
