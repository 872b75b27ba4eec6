//! Test infrastructure for the SSE scanner
//!
//! Provides chunked and failing byte sources plus seeded chunk generation.

#![allow(dead_code, unused_imports)]

mod generators;
mod sources;

pub use generators::Gen;
pub use sources::{ChunkedReader, CountingClose, FailingReader};

use sse_core::{CommentPolicy, ScanConfig, Scanner, ServerSentEvent};

/// Scan every event from a chunked source, asserting a clean end of input.
pub fn scan_chunks(chunks: Vec<Vec<u8>>, comments: CommentPolicy) -> Vec<ServerSentEvent> {
    // Small buffer so chunks also exercise compaction and growth.
    let config = ScanConfig::new().comments(comments).buffer_capacity(8);
    let mut scanner = Scanner::from_reader(ChunkedReader::new(chunks), config);
    let mut events = Vec::new();
    while scanner.advance() {
        events.push(scanner.event().clone());
    }
    assert!(scanner.err().is_none(), "unexpected error: {:?}", scanner.err());
    events
}

/// Scan every event from a single buffer.
pub fn scan_all(input: &[u8], comments: CommentPolicy) -> Vec<ServerSentEvent> {
    scan_chunks(vec![input.to_vec()], comments)
}

/// Split `input` at the given sorted offsets.
pub fn split_at_offsets(input: &[u8], offsets: &[usize]) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();
    let mut prev = 0;
    for &at in offsets {
        let at = at.clamp(prev, input.len());
        chunks.push(input[prev..at].to_vec());
        prev = at;
    }
    chunks.push(input[prev..].to_vec());
    chunks
}
