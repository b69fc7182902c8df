// ─── Type Tags ──────────────────────────────────────────────────────────────
//
// 4-bit discriminators stored in the high nibble of the value header.
// Booleans encode their payload in the tag itself and carry zero payload
// bytes.

pub const TAG_NULL: u8 = 0b0000;
pub const TAG_BOOL_FALSE: u8 = 0b0010;
pub const TAG_BOOL_TRUE: u8 = 0b0011;
pub const TAG_INT: u8 = 0b0100;
pub const TAG_FLOAT: u8 = 0b0101;
pub const TAG_STR: u8 = 0b1000;

// ─── Binary Layout ──────────────────────────────────────────────────────────
//
//  One record, repeated back to back with no gaps or padding:
//
//  ┌──────────────────────────────────────────────┐
//  │ Key sub-record                               │
//  │   key_len: u16 (BE)                          │
//  │   key_bytes: [u8; key_len]                   │
//  ├──────────────────────────────────────────────┤
//  │ Value sub-record                             │
//  │   header: u16 (BE) = tag << 12 | len         │
//  │   payload: [u8; len]                         │
//  │     Null/Bool  → 0 bytes                     │
//  │     Int/Float  → 8 bytes (LE)                │
//  │     Str        → len raw bytes               │
//  └──────────────────────────────────────────────┘

pub const KEY_HEADER_SIZE: usize = 2;
pub const VALUE_HEADER_SIZE: usize = 2;
pub const NUMERIC_PAYLOAD_SIZE: usize = 8;

/// Hard ceilings imposed by the header fields themselves.
pub const WIRE_KEY_MAX: usize = u16::MAX as usize;
pub const WIRE_VALUE_MAX: usize = 0x0FFF;

// ─── Packed-Format Policy Limits ────────────────────────────────────────────
//
// Checked by the container before every write while packed. A violating
// write unpacks the container instead of erroring.

pub const MAX_ENTRIES: usize = 64;
pub const MAX_KEY_LEN: usize = 64;
pub const MAX_VALUE_LEN: usize = 64;
