use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Every clock reports a resolution of 1ms
pub const CLOCK_RESOLUTION_NANOS: u64 = 1_000_000;

///
/// The clocks that the shim supports
///
/// WASI also defines process and thread CPU-time clocks (ids 2 and 3): these are not supported.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ClockId {
    Realtime,
    Monotonic,
}

impl ClockId {
    pub fn from_raw(clock_id: i32) -> Option<ClockId> {
        match clock_id {
            0 => Some(ClockId::Realtime),
            1 => Some(ClockId::Monotonic),
            _ => None,
        }
    }
}

///
/// Reads a clock, in nanoseconds
///
/// The monotonic clock counts from `start_time`, so it's relative to when the script's system calls were created.
/// It follows whatever source `Instant` uses on the host and so is only as monotonic as that is.
///
pub fn read_clock(clock: ClockId, start_time: Instant) -> u64 {
    let nanos = match clock {
        ClockId::Realtime   => SystemTime::now().duration_since(UNIX_EPOCH).map(|since_epoch| since_epoch.as_nanos()).unwrap_or(0),
        ClockId::Monotonic  => start_time.elapsed().as_nanos(),
    };

    u64::try_from(nanos).unwrap_or(u64::MAX)
}
