use crate::error::PackError;
use crate::types::*;
use crate::value::Value;

// ─── Readers ────────────────────────────────────────────────────────────────
//
// Every read validates the declared length against the remaining buffer
// before slicing, so a corrupt or truncated buffer yields an error rather
// than an out-of-bounds access.

#[inline]
fn read_u16_be(buf: &[u8], pos: usize) -> Result<u16, PackError> {
    match buf.get(pos..pos + 2) {
        Some(bytes) => Ok(u16::from_be_bytes([bytes[0], bytes[1]])),
        None => Err(PackError::TruncatedRecord {
            offset: pos,
            needed: 2,
            available: buf.len().saturating_sub(pos),
        }),
    }
}

#[inline]
fn take<'a>(buf: &'a [u8], pos: usize, len: usize) -> Result<&'a [u8], PackError> {
    buf.get(pos..pos + len).ok_or(PackError::TruncatedRecord {
        offset: pos,
        needed: len,
        available: buf.len().saturating_sub(pos),
    })
}

/// Decode a key sub-record at `pos`. Returns the key bytes and the offset
/// just past them.
#[inline]
pub fn decode_key(buf: &[u8], pos: usize) -> Result<(&[u8], usize), PackError> {
    let len = read_u16_be(buf, pos)? as usize;
    let start = pos + KEY_HEADER_SIZE;
    let key = take(buf, start, len)?;
    Ok((key, start + len))
}

/// Decode a value sub-record at `pos`. Returns the value and the offset
/// just past its payload.
pub fn decode_value(buf: &[u8], pos: usize) -> Result<(Value, usize), PackError> {
    let header = read_u16_be(buf, pos)?;
    let tag = (header >> 12) as u8;
    let len = (header & 0x0FFF) as usize;
    let start = pos + VALUE_HEADER_SIZE;
    let payload = take(buf, start, len)?;

    let value = match tag {
        TAG_NULL => Value::Null,
        TAG_BOOL_FALSE => Value::Bool(false),
        TAG_BOOL_TRUE => Value::Bool(true),
        TAG_INT => Value::Int(i64::from_le_bytes(numeric_payload(payload)?)),
        TAG_FLOAT => Value::Float(f64::from_le_bytes(numeric_payload(payload)?)),
        TAG_STR => Value::Str(payload.to_vec()),
        other => return Err(PackError::UnknownTypeTag(other)),
    };
    Ok((value, start + len))
}

/// Advance past a value sub-record at `pos` without materialising it.
/// The lookup scan uses this to step over non-matching entries.
#[inline]
pub fn skip_value(buf: &[u8], pos: usize) -> Result<usize, PackError> {
    let header = read_u16_be(buf, pos)?;
    let len = (header & 0x0FFF) as usize;
    let start = pos + VALUE_HEADER_SIZE;
    take(buf, start, len)?;
    Ok(start + len)
}

#[inline]
fn numeric_payload(payload: &[u8]) -> Result<[u8; 8], PackError> {
    payload.try_into().map_err(|_| PackError::LengthMismatch {
        expected: NUMERIC_PAYLOAD_SIZE,
        actual: payload.len(),
    })
}
