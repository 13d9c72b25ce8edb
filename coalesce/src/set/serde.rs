use serde::de::{Error, SeqAccess, Visitor};
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use super::serialization::{COOKIE_BYTES, INTERVAL_BYTES, SIZE_BYTES};
use crate::IntervalSet;

/// Upper bound on the bytes preallocated from a sequence size hint.
const MAX_PREALLOCATED_BYTES: usize = COOKIE_BYTES + SIZE_BYTES + 4096 * INTERVAL_BYTES;

struct SetVisitor;

impl SetVisitor {
    /// Decodes a whole buffer; trailing bytes after the last interval are an
    /// error.
    fn decode<E: Error>(bytes: &[u8]) -> Result<IntervalSet, E> {
        let set = IntervalSet::deserialize_from(bytes).map_err(E::custom)?;
        if set.serialized_size() != bytes.len() {
            return Err(E::invalid_length(bytes.len(), &SetVisitor));
        }
        Ok(set)
    }
}

impl<'de> Visitor<'de> for SetVisitor {
    type Value = IntervalSet;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a cookie, an interval count and as many little endian [i64; 2] pairs")
    }

    fn visit_bytes<E: Error>(self, bytes: &[u8]) -> Result<IntervalSet, E> {
        SetVisitor::decode(bytes)
    }

    // self describing formats like JSON hand the bytes over as a sequence
    fn visit_seq<A>(self, mut seq: A) -> Result<IntervalSet, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let hint = seq.size_hint().unwrap_or(COOKIE_BYTES + SIZE_BYTES);
        let mut bytes: Vec<u8> = Vec::with_capacity(hint.min(MAX_PREALLOCATED_BYTES));
        while let Some(byte) = seq.next_element()? {
            bytes.push(byte);
        }
        SetVisitor::decode(&bytes)
    }
}

impl<'de> Deserialize<'de> for IntervalSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_bytes(SetVisitor)
    }
}

impl Serialize for IntervalSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut buf = Vec::with_capacity(self.serialized_size());
        self.serialize_into(&mut buf).map_err(serde::ser::Error::custom)?;

        serializer.serialize_bytes(&buf)
    }
}
