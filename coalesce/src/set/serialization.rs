use bytemuck::cast_slice_mut;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;

use crate::{Interval, IntervalSet};

pub(crate) const SERIAL_COOKIE: u32 = 0x4C43_4956;

// Sizes of header structures
pub(crate) const COOKIE_BYTES: usize = 4;
pub(crate) const SIZE_BYTES: usize = 4;

// Size of one serialized interval, low then high
pub(crate) const INTERVAL_BYTES: usize = 16;

const CHUNK_INTERVALS: usize = 256;

impl IntervalSet {
    /// Return the size in bytes of the serialized output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalesce::{Interval, IntervalSet};
    ///
    /// let set1: IntervalSet = [(1, 4), (9, 12)].into_iter().map(Interval::from).collect();
    /// let mut bytes = Vec::with_capacity(set1.serialized_size());
    /// set1.serialize_into(&mut bytes).unwrap();
    /// let set2 = IntervalSet::deserialize_from(&bytes[..]).unwrap();
    ///
    /// assert_eq!(bytes.len(), set1.serialized_size());
    /// assert_eq!(set1, set2);
    /// ```
    pub fn serialized_size(&self) -> usize {
        COOKIE_BYTES + SIZE_BYTES + self.len() * INTERVAL_BYTES
    }

    /// Serialize this set as a little endian cookie, the number of intervals,
    /// then the `low` and `high` of every interval in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalesce::{Interval, IntervalSet};
    ///
    /// let set1: IntervalSet = [(-3, 3)].into_iter().map(Interval::from).collect();
    /// let mut bytes = vec![];
    /// set1.serialize_into(&mut bytes).unwrap();
    /// let set2 = IntervalSet::deserialize_from(&bytes[..]).unwrap();
    ///
    /// assert_eq!(set1, set2);
    /// ```
    pub fn serialize_into<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        let size = u32::try_from(self.len()).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "too many intervals to serialize")
        })?;

        writer.write_u32::<LittleEndian>(SERIAL_COOKIE)?;
        writer.write_u32::<LittleEndian>(size)?;
        for interval in self.iter() {
            writer.write_i64::<LittleEndian>(interval.low)?;
            writer.write_i64::<LittleEndian>(interval.high)?;
        }

        Ok(())
    }

    /// Deserialize a set written by [`IntervalSet::serialize_into`]. This
    /// method checks that the intervals are well formed and form a minimal
    /// cover. If deserializing from a trusted source consider
    /// [`IntervalSet::deserialize_unchecked_from`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalesce::{Interval, IntervalSet};
    ///
    /// let set1: IntervalSet = [(1, 2), (3, 4)].into_iter().map(Interval::from).collect();
    /// let mut bytes = vec![];
    /// set1.serialize_into(&mut bytes).unwrap();
    /// let set2 = IntervalSet::deserialize_from(&bytes[..]).unwrap();
    ///
    /// assert_eq!(set1, set2);
    /// ```
    pub fn deserialize_from<R: io::Read>(reader: R) -> io::Result<IntervalSet> {
        IntervalSet::deserialize_from_impl(reader, |intervals| {
            IntervalSet::from_sorted_intervals(intervals)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        })
    }

    /// Deserialize a set written by [`IntervalSet::serialize_into`]. This
    /// method is memory safe and rejects malformed intervals, but does not
    /// check that the intervals are sorted and apart from each other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalesce::{Interval, IntervalSet};
    ///
    /// let set1: IntervalSet = [(1, 2), (8, 9)].into_iter().map(Interval::from).collect();
    /// let mut bytes = vec![];
    /// set1.serialize_into(&mut bytes).unwrap();
    /// let set2 = IntervalSet::deserialize_unchecked_from(&bytes[..]).unwrap();
    ///
    /// assert_eq!(set1, set2);
    /// ```
    pub fn deserialize_unchecked_from<R: io::Read>(reader: R) -> io::Result<IntervalSet> {
        IntervalSet::deserialize_from_impl(reader, |intervals| {
            if intervals.iter().any(|iv| !iv.is_well_formed()) {
                return Err(io::Error::new(io::ErrorKind::InvalidData, "malformed interval"));
            }
            Ok(IntervalSet::from_vec_unchecked(intervals))
        })
    }

    fn deserialize_from_impl<R, B>(mut reader: R, build: B) -> io::Result<IntervalSet>
    where
        R: io::Read,
        B: FnOnce(Vec<Interval>) -> io::Result<IntervalSet>,
    {
        let cookie = reader.read_u32::<LittleEndian>()?;
        if cookie != SERIAL_COOKIE {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "unknown cookie value"));
        }
        let size = reader.read_u32::<LittleEndian>()? as usize;

        // bounded chunks, a forged size must not allocate ahead of the data
        let mut intervals = Vec::with_capacity(size.min(CHUNK_INTERVALS));
        let mut chunk = [[0i64; 2]; CHUNK_INTERVALS];
        let mut remaining = size;
        while remaining > 0 {
            let n = remaining.min(CHUNK_INTERVALS);
            reader.read_exact(cast_slice_mut(&mut chunk[..n]))?;
            intervals.extend(chunk[..n].iter().map(|&[low, high]| {
                Interval::with_bounds(i64::from_le(low), i64::from_le(high))
            }));
            remaining -= n;
        }

        build(intervals)
    }
}

#[cfg(test)]
mod test {
    use crate::{Interval, IntervalSet};
    use proptest::prelude::*;
    use std::io;

    proptest! {
        #[test]
        fn test_serialization(
            set in IntervalSet::arbitrary(),
        ) {
            let mut buffer = Vec::new();
            set.serialize_into(&mut buffer).unwrap();
            prop_assert_eq!(buffer.len(), set.serialized_size());
            prop_assert_eq!(&set, &IntervalSet::deserialize_from(buffer.as_slice()).unwrap());
            prop_assert_eq!(set, IntervalSet::deserialize_unchecked_from(buffer.as_slice()).unwrap());
        }
    }

    #[test]
    fn test_layout() {
        let set = IntervalSet::from(vec![Interval::with_bounds(-1, 2)]);
        let mut buffer = Vec::new();
        set.serialize_into(&mut buffer).unwrap();

        let mut expected: Vec<u8> = vec![0x56, 0x49, 0x43, 0x4C, 1, 0, 0, 0];
        expected.extend((-1i64).to_le_bytes());
        expected.extend(2i64.to_le_bytes());
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_deserialize_unknown_cookie() {
        let data: [u8; 8] = [1, 2, 3, 4, 0, 0, 0, 0];
        let error = IntervalSet::deserialize_from(&data[..]).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_deserialize_truncated() {
        let set = IntervalSet::from(vec![Interval::with_bounds(1, 2), Interval::with_bounds(5, 9)]);
        let mut buffer = Vec::new();
        set.serialize_into(&mut buffer).unwrap();
        buffer.truncate(buffer.len() - 3);

        let error = IntervalSet::deserialize_from(buffer.as_slice()).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
    }

    fn raw(pairs: &[(i64, i64)]) -> Vec<u8> {
        let mut buffer: Vec<u8> = vec![0x56, 0x49, 0x43, 0x4C];
        buffer.extend((pairs.len() as u32).to_le_bytes());
        for &(low, high) in pairs {
            buffer.extend(low.to_le_bytes());
            buffer.extend(high.to_le_bytes());
        }
        buffer
    }

    #[test]
    fn test_deserialize_touching_intervals() {
        let data = raw(&[(1, 2), (3, 4)]);
        let error = IntervalSet::deserialize_from(data.as_slice()).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);

        let set = IntervalSet::deserialize_unchecked_from(data.as_slice()).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_deserialize_malformed_interval() {
        let data = raw(&[(4, 1)]);
        assert!(IntervalSet::deserialize_from(data.as_slice()).is_err());
        assert!(IntervalSet::deserialize_unchecked_from(data.as_slice()).is_err());
    }
}
