//! Time values as encoded by Amino.

use crate::limits::{MAX_TIME_NANOS, MAX_TIME_SECONDS, MIN_TIME_SECONDS};

/// A point in time as seconds and nanoseconds since the Unix epoch (UTC).
///
/// Amino restricts times to years 0001 through 9999.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: u32,
}

impl Timestamp {
    /// The Unix epoch, which Amino encodes as zero bytes.
    pub const UNIX_EPOCH: Timestamp = Timestamp { seconds: 0, nanos: 0 };

    pub fn new(seconds: i64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Returns an error message if the timestamp cannot be encoded.
    pub fn validate(&self) -> Option<&'static str> {
        if self.seconds < MIN_TIME_SECONDS || self.seconds >= MAX_TIME_SECONDS {
            return Some("seconds have to be >= -62135596800 and < 253402300800");
        }
        if self.nanos > MAX_TIME_NANOS {
            return Some("nanoseconds have to be >= 0 and <= 999999999");
        }
        None
    }

    /// Returns true if this is the Unix epoch.
    pub fn is_epoch(&self) -> bool {
        *self == Self::UNIX_EPOCH
    }
}
