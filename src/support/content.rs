// src/support/content.rs
// =============================================================================
// Reads a response body stream into memory.
//
// The reader does NOT own the stream: whoever opened it (the crawl engine) is
// responsible for closing it, which in Rust simply means dropping it.
// =============================================================================

use std::io::{self, Read};

/// Size of the chunk we pull from the stream on each read.
pub const READ_BUFFER_SIZE: usize = 4096;

// Reads `stream` until end-of-stream and decodes it as text
//
// There is no size cap: the stream's own length is the only bound.
// Bytes are collected first and decoded once at the end, so a multi-byte
// UTF-8 character split across two reads is not mangled. Invalid UTF-8 is
// replaced rather than treated as an error (pages lie about encodings).
//
// An empty stream yields an empty String after a single read call.
pub fn get_page_contents<R: Read + ?Sized>(stream: &mut R) -> io::Result<String> {
    let mut buffer = [0u8; READ_BUFFER_SIZE];
    let mut bytes = Vec::new();

    loop {
        match stream.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => bytes.extend_from_slice(&buffer[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
