//! Timestamp debounce gate
//!
//! Mechanical buttons bounce, producing several edges per press. The gate
//! admits an edge only when at least `window_ms` have passed since the last
//! admitted edge of the same source. Rejected edges leave no trace.
//!
//! Timestamps are 32-bit milliseconds since boot. Differences use wrapping
//! arithmetic so the gate keeps working across the counter rollover.

use portable_atomic::{AtomicU32, Ordering};

use super::ButtonSource;

/// Debounce gate for a single edge source
#[derive(Debug)]
pub struct DebounceGate {
    /// Timestamp of the last admitted edge
    last_accepted_ms: AtomicU32,
    window_ms: u32,
}

impl DebounceGate {
    /// Create a gate with a fixed window
    ///
    /// The stored timestamp starts one window before boot, so the first
    /// edge is admitted even at t = 0.
    pub const fn new(window_ms: u32) -> Self {
        Self {
            last_accepted_ms: AtomicU32::new(0u32.wrapping_sub(window_ms)),
            window_ms,
        }
    }

    /// Debounce window in milliseconds
    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Timestamp of the most recently admitted edge
    pub fn last_accepted_ms(&self) -> u32 {
        self.last_accepted_ms.load(Ordering::Acquire)
    }

    /// Decide whether an edge at `timestamp_ms` is a real press
    ///
    /// Returns `true` and records the timestamp when admitted. Returns
    /// `false` without side effects when the edge falls inside the window.
    /// Never blocks.
    pub fn admit(&self, timestamp_ms: u32) -> bool {
        self.last_accepted_ms
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                (timestamp_ms.wrapping_sub(last) >= self.window_ms).then_some(timestamp_ms)
            })
            .is_ok()
    }
}

/// One debounce gate per button source, all sharing a window
#[derive(Debug)]
pub struct DebounceTable {
    gates: [DebounceGate; ButtonSource::COUNT],
}

impl DebounceTable {
    /// Create a table of gates with the same window
    pub const fn new(window_ms: u32) -> Self {
        Self {
            gates: [DebounceGate::new(window_ms), DebounceGate::new(window_ms)],
        }
    }

    /// Gate belonging to `source`
    pub fn gate(&self, source: ButtonSource) -> &DebounceGate {
        &self.gates[source.index()]
    }

    /// Admit or reject an edge from `source` at `timestamp_ms`
    pub fn admit(&self, source: ButtonSource, timestamp_ms: u32) -> bool {
        self.gate(source).admit(timestamp_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_edge_at_boot_admitted() {
        let gate = DebounceGate::new(200);
        assert!(gate.admit(0));
        assert_eq!(gate.last_accepted_ms(), 0);
    }

    #[test]
    fn test_bounce_inside_window_rejected() {
        let gate = DebounceGate::new(200);
        assert!(gate.admit(1000));
        assert!(!gate.admit(1001));
        assert!(!gate.admit(1150));
        assert!(!gate.admit(1199));
        // Rejections do not move the reference point
        assert_eq!(gate.last_accepted_ms(), 1000);
        assert!(gate.admit(1200));
        assert_eq!(gate.last_accepted_ms(), 1200);
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let gate = DebounceGate::new(500);
        assert!(gate.admit(10));
        assert!(!gate.admit(509));
        assert!(gate.admit(510));
    }

    #[test]
    fn test_rollover() {
        let gate = DebounceGate::new(200);
        assert!(gate.admit(u32::MAX - 300));
        assert!(gate.admit(u32::MAX - 50));
        // 100 ms later, counter has wrapped
        assert!(!gate.admit(49));
        // 201 ms later
        assert!(gate.admit(150));
    }

    #[test]
    fn test_sources_are_independent() {
        let table = DebounceTable::new(200);
        assert!(table.admit(ButtonSource::Mode, 0));
        assert!(table.admit(ButtonSource::Indicator, 10));
        assert!(!table.admit(ButtonSource::Mode, 20));
        assert!(!table.admit(ButtonSource::Indicator, 30));
        assert_eq!(table.gate(ButtonSource::Mode).last_accepted_ms(), 0);
        assert_eq!(table.gate(ButtonSource::Indicator).last_accepted_ms(), 10);
    }

    proptest! {
        #[test]
        fn prop_second_edge_rejected_iff_inside_window(
            t in 0u32..1_000_000,
            d in 0u32..2_000,
            window in 1u32..1_000,
        ) {
            let gate = DebounceGate::new(window);
            prop_assert!(gate.admit(t));

            let admitted = gate.admit(t + d);
            prop_assert_eq!(admitted, d >= window);

            let expected_last = if admitted { t + d } else { t };
            prop_assert_eq!(gate.last_accepted_ms(), expected_last);
        }
    }
}
