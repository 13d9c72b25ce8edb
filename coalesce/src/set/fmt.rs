use core::fmt;

use crate::IntervalSet;

impl fmt::Debug for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() < 16 {
            write!(f, "IntervalSet<{:?}>", self.as_slice())
        } else {
            write!(
                f,
                "IntervalSet<{:?} intervals between {:?} and {:?}>",
                self.len(),
                self.min().unwrap(),
                self.max().unwrap()
            )
        }
    }
}
