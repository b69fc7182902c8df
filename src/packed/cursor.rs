use crate::deserialization::{decode_key, decode_value};
use crate::error::PackError;
use crate::value::Value;

// ─── Cursor ─────────────────────────────────────────────────────────────────

/// Forward-only sequential reader over a packed buffer.
///
/// Each cursor is independent and starts at offset 0; re-traversal means
/// constructing a new cursor over the same buffer. The borrow on the
/// buffer rules out mutation mid-traversal, and every decode step is still
/// bounds-checked.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Decode the record at the current position and advance past it.
    /// Yields `None` once the buffer is exhausted.
    pub fn next_entry(&mut self) -> Result<Option<(&'a [u8], Value)>, PackError> {
        if self.pos >= self.buf.len() {
            return Ok(None);
        }
        let (key, value_pos) = decode_key(self.buf, self.pos)?;
        let (value, next) = decode_value(self.buf, value_pos)?;
        self.pos = next;
        Ok(Some((key, value)))
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = Result<(&'a [u8], Value), PackError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().transpose()
    }
}
