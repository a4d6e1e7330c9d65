//! Look-ahead reader for sniffing stream prefixes.
//!
//! `std::io::BufReader::fill_buf` only returns what is already buffered, so
//! it cannot guarantee that a short prefix is visible. `PeekReader` keeps its
//! own small look-ahead buffer and keeps reading until the requested number
//! of bytes is available or the inner reader reaches EOF.

use std::io;
use std::io::Read;

/// Reader wrapper that supports peeking without consuming.
///
/// Peeked bytes are replayed by subsequent `read` calls, so sequential
/// consumers see the stream exactly as if no peek had happened.
///
/// # Examples
///
/// ```
/// use std::io::Read;
/// use tarsink_core::io::PeekReader;
///
/// let mut reader = PeekReader::new(&b"\x1f\x8brest"[..]);
/// assert_eq!(reader.peek(2)?, &[0x1f, 0x8b]);
///
/// let mut all = Vec::new();
/// reader.read_to_end(&mut all)?;
/// assert_eq!(all, b"\x1f\x8brest");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct PeekReader<R> {
    inner: R,
    lookahead: Vec<u8>,
    pos: usize,
}

impl<R: Read> PeekReader<R> {
    /// Wraps a reader.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            lookahead: Vec::new(),
            pos: 0,
        }
    }

    /// Returns up to `n` upcoming bytes without consuming them.
    ///
    /// The returned slice is shorter than `n` only if the inner reader hit
    /// EOF first.
    ///
    /// # Errors
    ///
    /// Propagates read errors from the inner reader. `Interrupted` is
    /// retried.
    pub fn peek(&mut self, n: usize) -> io::Result<&[u8]> {
        if self.pos > 0 {
            self.lookahead.drain(..self.pos);
            self.pos = 0;
        }

        let mut chunk = [0u8; 64];
        while self.lookahead.len() < n {
            let want = (n - self.lookahead.len()).min(chunk.len());
            match self.inner.read(&mut chunk[..want]) {
                Ok(0) => break,
                Ok(read) => self.lookahead.extend_from_slice(&chunk[..read]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }

        let end = n.min(self.lookahead.len());
        Ok(&self.lookahead[..end])
    }
}

impl<R: Read> Read for PeekReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos < self.lookahead.len() {
            let pending = &self.lookahead[self.pos..];
            let n = pending.len().min(buf.len());
            buf[..n].copy_from_slice(&pending[..n]);
            self.pos += n;
            if self.pos == self.lookahead.len() {
                self.lookahead.clear();
                self.pos = 0;
            }
            return Ok(n);
        }
        self.inner.read(buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Yields one byte per read call.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.0[0];
            self.0 = &self.0[1..];
            Ok(1)
        }
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut reader = PeekReader::new(&b"abcdef"[..]);
        assert_eq!(reader.peek(2).unwrap(), b"ab");
        assert_eq!(reader.peek(3).unwrap(), b"abc");

        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "abcdef");
    }

    #[test]
    fn test_peek_across_short_reads() {
        let mut reader = PeekReader::new(Trickle(b"xyz"));
        assert_eq!(reader.peek(2).unwrap(), b"xy");

        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"xyz");
    }

    #[test]
    fn test_peek_short_stream() {
        let mut reader = PeekReader::new(&b"a"[..]);
        assert_eq!(reader.peek(2).unwrap(), b"a");

        let mut empty = PeekReader::new(&b""[..]);
        assert!(empty.peek(2).unwrap().is_empty());
    }

    #[test]
    fn test_partial_read_then_peek() {
        let mut reader = PeekReader::new(&b"abcdef"[..]);
        reader.peek(4).unwrap();

        let mut buf = [0u8; 1];
        reader.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"a");

        assert_eq!(reader.peek(2).unwrap(), b"bc");
        let mut rest = Vec::new();
        reader.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"bcdef");
    }
}
