use crate::common::get_current_seconds_or_zero;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::fmt::{Debug, Display, Formatter};

static TIMESTAMP_GENERATOR: Lazy<TimestampGenerator> = Lazy::new(TimestampGenerator::new);

/// An internal-ordering timestamp: a (seconds, ordinal) pair.
///
/// This is the store's replication-ordering value, distinct from the
/// user-facing [`DateTime`](crate::types::DateTime). The first component is
/// wall-clock seconds since the UNIX epoch; the second is an ordinal that
/// disambiguates timestamps assigned within the same second.
///
/// Timestamps are normally obtained from [`Timestamp::next`], which is backed
/// by a process-global generator and yields strictly increasing pairs even if
/// the wall clock moves backwards.
#[derive(PartialEq, Eq, Ord, PartialOrd, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Timestamp {
    /// Seconds since the UNIX epoch.
    pub time: u32,
    /// Ordinal within the second, starting at 1.
    pub increment: u32,
}

impl Timestamp {
    /// Creates a timestamp from an explicit (seconds, ordinal) pair.
    pub fn new(time: u32, increment: u32) -> Self {
        Timestamp { time, increment }
    }

    /// Gets the next process-monotonic timestamp.
    ///
    /// # Returns
    ///
    /// A `Timestamp` strictly greater than every timestamp previously returned
    /// by this process. The ordinal restarts at 1 whenever the clock advances
    /// to a new second.
    pub fn next() -> Self {
        TIMESTAMP_GENERATOR.next()
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timestamp({}, {})", self.time, self.increment)
    }
}

impl Debug for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Process-global monotonic generator for [`Timestamp`] values.
///
/// Guards the last handed-out pair behind a mutex. If the wall clock reads
/// earlier than the last observed second, the last second is reused and the
/// ordinal keeps climbing, so the sequence never goes backwards.
struct TimestampGenerator {
    last: Mutex<(u32, u32)>,
}

impl TimestampGenerator {
    fn new() -> Self {
        TimestampGenerator {
            last: Mutex::new((0, 0)),
        }
    }

    fn next(&self) -> Timestamp {
        let mut last = self.last.lock();
        let now = get_current_seconds_or_zero() as u32;
        let (last_time, last_increment) = *last;

        let next = if now > last_time {
            (now, 1)
        } else {
            // same second, or clock moved backwards
            (last_time, last_increment + 1)
        };
        *last = next;
        Timestamp {
            time: next.0,
            increment: next.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_strictly_increasing_timestamps() {
        let mut previous = Timestamp::next();
        for _ in 0..1000 {
            let current = Timestamp::next();
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn ordinal_restarts_when_clock_advances() {
        let generator = TimestampGenerator::new();
        let first = generator.next();
        // generator starts at second 0, so the first call lands on a new second
        assert_eq!(first.increment, 1);
        let second = generator.next();
        assert_eq!(second.time, first.time);
        assert_eq!(second.increment, 2);
    }

    #[test]
    fn survives_clock_moving_backwards() {
        let generator = TimestampGenerator::new();
        {
            let mut last = generator.last.lock();
            *last = (u32::MAX - 1, 7);
        }
        let timestamp = generator.next();
        assert_eq!(timestamp.time, u32::MAX - 1);
        assert_eq!(timestamp.increment, 8);
    }

    #[test]
    fn explicit_pair_ordering() {
        assert!(Timestamp::new(10, 2) > Timestamp::new(10, 1));
        assert!(Timestamp::new(11, 1) > Timestamp::new(10, 9));
        assert_eq!(Timestamp::new(5, 5), Timestamp::new(5, 5));
    }

    #[test]
    fn display_shows_both_components() {
        let timestamp = Timestamp::new(1700000000, 3);
        assert_eq!(format!("{}", timestamp), "Timestamp(1700000000, 3)");
    }

    #[test]
    fn concurrent_generation_stays_unique() {
        use std::collections::HashSet;
        use std::sync::{Arc, Mutex as StdMutex};
        use std::thread;

        let seen = Arc::new(StdMutex::new(HashSet::new()));
        let mut handles = vec![];
        for _ in 0..8 {
            let seen = seen.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    let timestamp = Timestamp::next();
                    assert!(seen.lock().unwrap().insert((timestamp.time, timestamp.increment)));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
