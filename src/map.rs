use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::PackError;
use crate::packed::{Cursor, PackedStore};
use crate::types::{MAX_ENTRIES, MAX_KEY_LEN};
use crate::value::{FastMap, Value};

// ─── Representation ─────────────────────────────────────────────────────────

/// The two representations a map can be in. `Unpacked` is permanent: once
/// a write falls outside the packed format's limits, the entries move to a
/// generic insertion-ordered mapping for the rest of the map's life.
#[derive(Debug, Clone)]
enum Repr {
    Packed(PackedStore),
    Unpacked(FastMap<Vec<u8>, Value>),
}

/// Unwrap a decode result on the private buffer. The packed buffer is only
/// ever written by the codec, so an error here means the store's invariant
/// is broken, not bad caller input.
#[inline]
fn valid<T>(res: Result<T, PackError>) -> T {
    res.expect("packed buffer invariant broken")
}

// ─── PackMap ────────────────────────────────────────────────────────────────

/// An ordered key-value map that stores small entries in a single packed
/// byte buffer.
///
/// Keys are byte strings of at most 64 bytes; packed values are nulls,
/// booleans, 64-bit integers, 64-bit floats, and byte strings of at most
/// 64 bytes, for at most 64 entries. The first write outside those limits
/// transparently unpacks every entry into a generic insertion-ordered
/// mapping, which also admits `Array` and `Object` values.
///
/// Iteration order is first-insertion order, adjusted for removals;
/// overwriting a key never moves it.
#[derive(Debug, Clone)]
pub struct PackMap {
    repr: Repr,
}

impl PackMap {
    /// An empty map in the packed representation.
    pub fn new() -> Self {
        Self {
            repr: Repr::Packed(PackedStore::new()),
        }
    }

    /// Whether the entries still live in the packed buffer.
    #[inline]
    pub fn is_packed(&self) -> bool {
        matches!(self.repr, Repr::Packed(_))
    }

    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Packed(store) => store.count(),
            Repr::Unpacked(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        match &self.repr {
            Repr::Packed(store) => valid(store.find(key)).is_some(),
            Repr::Unpacked(map) => map.contains_key(key),
        }
    }

    /// Look up a key, decoding (packed) or cloning (unpacked) its value.
    pub fn get(&self, key: &[u8]) -> Option<Value> {
        match &self.repr {
            Repr::Packed(store) => {
                let pos = valid(store.find(key))?;
                Some(valid(store.value_at(pos)))
            }
            Repr::Unpacked(map) => map.get(key).cloned(),
        }
    }

    /// Upsert a key. While packed, a write that would exceed the entry
    /// budget, an over-long key, an over-long string, or a non-packable
    /// value type first unpacks the map, then lands in the mapping.
    pub fn set(&mut self, key: &[u8], value: impl Into<Value>) {
        let value = value.into();
        if let Repr::Packed(store) = &mut self.repr {
            if key.len() <= MAX_KEY_LEN && value.fits_packed() {
                match valid(store.find(key)) {
                    Some(pos) => return valid(store.replace(pos, &value)),
                    None if store.count() < MAX_ENTRIES => {
                        return valid(store.insert(key, &value));
                    }
                    None => {}
                }
            }
            self.unpack();
        }
        if let Repr::Unpacked(map) = &mut self.repr {
            // IndexMap keeps an existing key's position on overwrite, so
            // replacement stays order-neutral in both representations.
            map.insert(key.to_vec(), value);
        }
    }

    /// Remove a key if present; absent keys are a no-op. Never unpacks.
    pub fn unset(&mut self, key: &[u8]) {
        match &mut self.repr {
            Repr::Packed(store) => {
                if let Some(pos) = valid(store.find(key)) {
                    valid(store.remove(pos));
                }
            }
            Repr::Unpacked(map) => {
                map.shift_remove(key);
            }
        }
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            repr: match &self.repr {
                Repr::Packed(store) => IterRepr::Packed(store.cursor()),
                Repr::Unpacked(map) => IterRepr::Unpacked(map.iter()),
            },
        }
    }

    /// Snapshot of all entries as an insertion-ordered mapping.
    pub fn to_map(&self) -> FastMap<Vec<u8>, Value> {
        self.iter().map(|(k, v)| (k.to_vec(), v)).collect()
    }

    /// The one-way transition out of the packed representation: drain the
    /// buffer into a fresh mapping in entry order, then drop the buffer.
    fn unpack(&mut self) {
        if let Repr::Packed(store) = &self.repr {
            let mut map =
                FastMap::with_capacity_and_hasher(store.count(), Default::default());
            let mut cursor = store.cursor();
            while let Some((key, value)) = valid(cursor.next_entry()) {
                map.insert(key.to_vec(), value);
            }
            self.repr = Repr::Unpacked(map);
        }
    }
}

impl Default for PackMap {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Iteration ──────────────────────────────────────────────────────────────

pub struct Iter<'a> {
    repr: IterRepr<'a>,
}

enum IterRepr<'a> {
    Packed(Cursor<'a>),
    Unpacked(indexmap::map::Iter<'a, Vec<u8>, Value>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a [u8], Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.repr {
            IterRepr::Packed(cursor) => valid(cursor.next_entry()),
            IterRepr::Unpacked(iter) => iter.next().map(|(k, v)| (k.as_slice(), v.clone())),
        }
    }
}

impl<'a> IntoIterator for &'a PackMap {
    type Item = (&'a [u8], Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── Collection glue ────────────────────────────────────────────────────────

impl<K: AsRef<[u8]>, V: Into<Value>> FromIterator<(K, V)> for PackMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = PackMap::new();
        map.extend(iter);
        map
    }
}

impl<K: AsRef<[u8]>, V: Into<Value>> Extend<(K, V)> for PackMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key.as_ref(), value);
        }
    }
}

// ─── Serialize (JSON export) ────────────────────────────────────────────────

impl Serialize for PackMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut m = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            m.serialize_entry(&String::from_utf8_lossy(key), &value)?;
        }
        m.end()
    }
}
