//! Byte sources for the token stream.

use crate::error::{Error, Result};
use core::cmp;
use std::io;

/// Trait used by [`StreamParser`](crate::StreamParser) to pull bytes from its
/// input. Slices get a read-only `peek` and compute positions only when an
/// error needs one.
///
/// This trait is sealed and cannot be implemented for types outside of
/// `longint`.
pub trait Read: private::Sealed {
    #[doc(hidden)]
    fn peek(&mut self) -> Result<Option<u8>>;

    /// Only valid after a call to peek(). Discards the peeked byte.
    #[doc(hidden)]
    fn discard(&mut self);

    /// Position of the byte returned by the most recent call to peek().
    #[doc(hidden)]
    fn peek_position(&self) -> Position;
}

/// One-based line and column of a byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Input source that reads from a `std::io` stream, one byte at a time.
///
/// Apply your own buffering (`std::io::BufReader`) when short reads on the
/// underlying source are slow.
pub struct IoRead<R>
where
    R: io::Read,
{
    bytes: io::Bytes<R>,
    /// Temporary storage of peeked byte.
    ch: Option<u8>,
    line: usize,
    /// Column of the peeked byte, or of the last discarded one.
    column: usize,
}

/// Input source that reads from a slice of bytes.
pub struct SliceRead<'a> {
    slice: &'a [u8],
    /// Index of the *next* byte that will be returned by peek().
    index: usize,
}

/// Input source that reads from a UTF-8 string.
pub struct StrRead<'a> {
    delegate: SliceRead<'a>,
}

// Prevent users from implementing the Read trait.
mod private {
    pub trait Sealed {}
}

//////////////////////////////////////////////////////////////////////////////

impl<R> IoRead<R>
where
    R: io::Read,
{
    /// Create an input source to read from a std::io input stream.
    pub fn new(reader: R) -> Self {
        IoRead {
            bytes: reader.bytes(),
            ch: None,
            line: 1,
            column: 0,
        }
    }
}

impl<R> private::Sealed for IoRead<R> where R: io::Read {}

impl<R> Read for IoRead<R>
where
    R: io::Read,
{
    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        if let Some(ch) = self.ch {
            return Ok(Some(ch));
        }
        match self.bytes.next() {
            Some(Err(err)) => Err(Error::io(err)),
            Some(Ok(ch)) => {
                // The position moves when a byte is first seen, so that it
                // names the peeked byte.
                if ch == b'\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += 1;
                }
                self.ch = Some(ch);
                Ok(Some(ch))
            }
            None => Ok(None),
        }
    }

    #[inline]
    fn discard(&mut self) {
        self.ch = None;
    }

    fn peek_position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<'a> SliceRead<'a> {
    /// Create an input source to read from a slice of bytes.
    pub fn new(slice: &'a [u8]) -> Self {
        SliceRead { slice, index: 0 }
    }

    /// Line and zero-based column of index `i`, which is the one-based column
    /// of the byte before it.
    fn position_of_index(&self, i: usize) -> Position {
        let start_of_line = match memchr::memrchr(b'\n', &self.slice[..i]) {
            Some(position) => position + 1,
            None => 0,
        };
        Position {
            line: 1 + memchr::memchr_iter(b'\n', &self.slice[..start_of_line]).count(),
            column: i - start_of_line,
        }
    }
}

impl<'a> private::Sealed for SliceRead<'a> {}

impl<'a> Read for SliceRead<'a> {
    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        Ok(self.slice.get(self.index).copied())
    }

    #[inline]
    fn discard(&mut self) {
        self.index += 1;
    }

    fn peek_position(&self) -> Position {
        // Cap it at slice.len() in case peek() hit the end.
        self.position_of_index(cmp::min(self.slice.len(), self.index + 1))
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<'a> StrRead<'a> {
    /// Create an input source to read from a UTF-8 string.
    pub fn new(s: &'a str) -> Self {
        StrRead {
            delegate: SliceRead::new(s.as_bytes()),
        }
    }
}

impl<'a> private::Sealed for StrRead<'a> {}

impl<'a> Read for StrRead<'a> {
    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        self.delegate.peek()
    }

    #[inline]
    fn discard(&mut self) {
        self.delegate.discard();
    }

    fn peek_position(&self) -> Position {
        self.delegate.peek_position()
    }
}

//////////////////////////////////////////////////////////////////////////////

/// Marker for whether StreamParser can implement FusedIterator.
///
/// An exhausted slice stays exhausted, while an `io::Read` may produce more
/// bytes after reporting end of input.
pub trait Fused: private::Sealed {}
impl<'a> Fused for SliceRead<'a> {}
impl<'a> Fused for StrRead<'a> {}
