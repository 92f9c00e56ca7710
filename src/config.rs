//! Fixed scaling contract of the acquisition pipeline.
//!
//! The batch reduction is a single arithmetic right shift, so `BATCH_SIZE`
//! must stay a power of two. Changing any constant here changes the value
//! reported over the air.

/// Raw samples accumulated per acquisition cycle.
pub const BATCH_SIZE: usize = 64;

/// log2 of [`BATCH_SIZE`].
pub const BATCH_SHIFT: u32 = 6;

/// Correction for the fixed 4x gain of the analog front end.
pub const GAIN_SHIFT: u32 = 2;

/// Total shift applied to the accumulated sum: divide by `BATCH_SIZE`,
/// then undo the front-end gain.
pub const AVG_SHIFT: u32 = BATCH_SHIFT + GAIN_SHIFT;

/// Nominal cadence of the report timer collaborator. The timer itself is
/// platform hardware; this constant documents what the node is tuned for.
pub const REPORT_INTERVAL_MS: u32 = 1000;

const _: () = assert!(BATCH_SIZE.is_power_of_two());
const _: () = assert!(1usize << BATCH_SHIFT == BATCH_SIZE);
const _: () = assert!(BATCH_SIZE <= u8::MAX as usize + 1);
