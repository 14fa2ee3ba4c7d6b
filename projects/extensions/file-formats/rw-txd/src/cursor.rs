//! Sequential little-endian reader over an immutable byte buffer.
//!
//! Every successful read records how far it moved the cursor, so the most recent
//! step can be undone with [`Cursor::rewind`]. A failed read returns
//! [`TxdError::OutOfBounds`] and leaves the cursor untouched.

use crate::error::{TxdError, TxdResult};
use alloc::string::String;
use alloc::vec::Vec;

/// Read cursor over a byte slice. All reads are little-endian.
///
/// # Example
///
/// ```
/// use rw_txd::Cursor;
///
/// let data = [0x15, 0x00, 0x00, 0x00, 0xAA];
/// let mut cursor = Cursor::new(&data);
/// assert_eq!(cursor.read_u32().unwrap(), 0x15);
/// cursor.rewind();
/// assert_eq!(cursor.position(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    /// Signed movement of every read, forward and rewind, most recent last.
    history: Vec<isize>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            history: Vec::new(),
        }
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of underlying data.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the underlying buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Remaining bytes from current position.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether any bytes are left to read.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.pos < self.data.len()
    }

    /// The whole underlying buffer, independent of the current position.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    fn ensure(&self, n: usize) -> TxdResult<()> {
        if n > self.remaining() {
            return Err(TxdError::OutOfBounds {
                offset: self.pos,
                requested: n,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
        self.history.push(n as isize);
    }

    /// Reads a `u8`.
    pub fn read_u8(&mut self) -> TxdResult<u8> {
        let bytes = self.read_array::<1>()?;
        Ok(bytes[0])
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16(&mut self) -> TxdResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self) -> TxdResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    fn read_array<const N: usize>(&mut self) -> TxdResult<[u8; N]> {
        self.ensure(N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.advance(N);
        Ok(bytes)
    }

    /// Returns the next `n` bytes without copying.
    pub fn read_section(&mut self, n: usize) -> TxdResult<&'a [u8]> {
        self.ensure(n)?;
        let section = &self.data[self.pos..self.pos + n];
        self.advance(n);
        Ok(section)
    }

    /// Reads a fixed-size `n` byte text field.
    ///
    /// The text ends at the first null byte wherever it occurs, so a field starting
    /// with a null byte is empty. Invalid UTF-8 is replaced with `U+FFFD`.
    pub fn read_string(&mut self, n: usize) -> TxdResult<String> {
        let section = self.read_section(n)?;
        let end = section.iter().position(|&b| b == 0).unwrap_or(section.len());
        Ok(String::from_utf8_lossy(&section[..end]).into_owned())
    }

    /// Splits as much of the remaining buffer as possible into `n` byte views.
    ///
    /// Returns `floor(remaining / n)` views and advances past them. A trailing partial
    /// view is left unread. `n == 0` returns nothing and does not move the cursor.
    pub fn read_chunks(&mut self, n: usize) -> Vec<&'a [u8]> {
        if n == 0 {
            return Vec::new();
        }

        let rest = &self.data[self.pos..];
        let chunks: Vec<&'a [u8]> = rest.chunks_exact(n).collect();
        self.advance(chunks.len() * n);
        chunks
    }

    /// Skips `n` bytes.
    pub fn forward(&mut self, n: usize) -> TxdResult<()> {
        self.ensure(n)?;
        self.advance(n);
        Ok(())
    }

    /// Undoes the most recent movement.
    ///
    /// The reverse movement is itself recorded, so a second call repeats the step that
    /// was just undone. Does nothing if the cursor has not moved yet.
    pub fn rewind(&mut self) {
        let Some(&last) = self.history.last() else {
            return;
        };

        let undo = -last;
        match self.pos.checked_add_signed(undo) {
            Some(pos) if pos <= self.data.len() => {
                self.pos = pos;
                self.history.push(undo);
            }
            _ => {}
        }
    }
}
