//! A compact, ordered key-value map stored as a single packed byte buffer.
//!
//! Small maps (nulls, booleans, 64-bit integers, 64-bit floats, short byte
//! strings) live in a dense record stream instead of a generic map
//! structure; the first write outside the packed format's limits
//! transparently moves every entry into an insertion-ordered fallback
//! mapping.
//!
//! ```
//! use packmap::{PackMap, Value};
//!
//! let mut map = PackMap::new();
//! map.set(b"a", 1i64);
//! map.set(b"b", "hello");
//! assert_eq!(map.get(b"b"), Some(Value::from("hello")));
//! assert_eq!(map.len(), 2);
//! ```

pub mod deserialization;
pub mod error;
pub mod map;
pub mod packed;
pub mod serialization;
pub mod types;
pub mod value;

pub use error::PackError;
pub use map::PackMap;
pub use packed::{Cursor, PackedStore};
pub use value::{FastMap, Value};
