use crate::error::PackError;
use crate::types::*;
use crate::value::Value;

// ─── Writers ────────────────────────────────────────────────────────────────
//
// Append-style encoders. Both 16-bit headers are big-endian; the 8-byte
// numeric payloads are little-endian. The writers enforce only the wire
// ceilings (u16 key length, 12-bit value length); the 64-byte policy
// limits belong to the container.

/// Append a key sub-record: `u16_be(len) ++ key`.
#[inline]
pub fn write_key_into(buf: &mut Vec<u8>, key: &[u8]) -> Result<(), PackError> {
    if key.len() > WIRE_KEY_MAX {
        return Err(PackError::KeyTooLong(key.len()));
    }
    buf.extend_from_slice(&(key.len() as u16).to_be_bytes());
    buf.extend_from_slice(key);
    Ok(())
}

/// Append a value sub-record: `u16_be(tag << 12 | len) ++ payload`.
pub fn write_value_into(buf: &mut Vec<u8>, value: &Value) -> Result<(), PackError> {
    match value {
        Value::Null => write_header_into(buf, TAG_NULL, 0),
        Value::Bool(false) => write_header_into(buf, TAG_BOOL_FALSE, 0),
        Value::Bool(true) => write_header_into(buf, TAG_BOOL_TRUE, 0),
        Value::Int(i) => {
            write_header_into(buf, TAG_INT, NUMERIC_PAYLOAD_SIZE);
            buf.extend_from_slice(&i.to_le_bytes());
        }
        Value::Float(f) => {
            write_header_into(buf, TAG_FLOAT, NUMERIC_PAYLOAD_SIZE);
            buf.extend_from_slice(&f.to_le_bytes());
        }
        Value::Str(bytes) => {
            if bytes.len() > WIRE_VALUE_MAX {
                return Err(PackError::ValueTooLarge(bytes.len()));
            }
            write_header_into(buf, TAG_STR, bytes.len());
            buf.extend_from_slice(bytes);
        }
        Value::Array(_) | Value::Object(_) => return Err(PackError::UnsupportedType),
    }
    Ok(())
}

#[inline]
fn write_header_into(buf: &mut Vec<u8>, tag: u8, len: usize) {
    debug_assert!(len <= WIRE_VALUE_MAX);
    let header = (tag as u16) << 12 | len as u16;
    buf.extend_from_slice(&header.to_be_bytes());
}
