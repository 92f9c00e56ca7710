use crate::config::{AVG_SHIFT, BATCH_SIZE};

/// Outcome of feeding one raw sample into the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatchStatus {
    InProgress,
    /// The batch is full; carries the averaged magnitude. The internal
    /// sum and counter are already cleared for the next cycle.
    Complete(u32),
}

/// Rectifies and sums raw converter results until a full batch has been
/// seen, then reduces the sum to one averaged magnitude.
///
/// Runs in the converter's completion interrupt: O(1), no allocation, no
/// division (the reduction is the [`AVG_SHIFT`] right shift).
pub struct RectifyingAccumulator {
    sum: u32,
    count: u8,
}

impl RectifyingAccumulator {
    pub const fn new() -> Self {
        Self { sum: 0, count: 0 }
    }

    /// Rectify `raw` and add it to the running sum.
    ///
    /// Rectification widens instead of negating in place: `unsigned_abs`
    /// maps `i16::MIN` to its exact magnitude 32768, so no input can wrap.
    /// Worst case sum is 32768 * [`BATCH_SIZE`], well inside `u32`.
    pub fn accumulate(&mut self, raw: i16) -> BatchStatus {
        self.sum += raw.unsigned_abs() as u32;
        self.count = self.count.wrapping_add(1) & (BATCH_SIZE as u8).wrapping_sub(1);
        if self.count == 0 {
            let average = self.sum >> AVG_SHIFT;
            self.sum = 0;
            BatchStatus::Complete(average)
        } else {
            BatchStatus::InProgress
        }
    }

    /// Drop any partial batch. Called on entry to a new acquisition cycle.
    pub fn reset(&mut self) {
        self.sum = 0;
        self.count = 0;
    }
}
