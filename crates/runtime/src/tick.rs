use foundation::time::Time;

/// Deterministic refresh-cycle metadata.
///
/// One tick corresponds to one scheduled data refresh. It is intentionally
/// small and pure so runs can be recorded and replayed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tick {
    /// 0-based refresh index.
    pub index: u64,
    /// Fixed refresh interval (seconds).
    pub interval_s: f64,
    /// Schedule time at the start of the tick (seconds).
    pub time: Time,
}

impl Tick {
    pub fn new(index: u64, interval_s: f64) -> Self {
        Self {
            index,
            interval_s,
            time: Time(index as f64 * interval_s),
        }
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.interval_s)
    }
}
