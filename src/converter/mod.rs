//! Seams to the sampling hardware.
//!
//! Both interrupts are edge triggered; the core clears them through
//! `acknowledge` before its handler entry points return.

/// The SAR converter collaborator.
///
/// `start` begins free-running conversions, each raising the completion
/// interrupt; `stop` halts it between acquisition cycles so it draws no
/// power while the node is idle.
pub trait Converter {
    fn start(&mut self);
    fn stop(&mut self);
    /// Latest conversion result, a signed bipolar sample.
    fn latest_result(&self) -> i16;
    /// Clear the pending conversion-complete interrupt.
    fn acknowledge(&mut self);
}

/// The fixed-rate report timer collaborator. Payload-free: the tick itself
/// is the whole message.
pub trait SampleTimer {
    /// Clear the pending timer interrupt.
    fn acknowledge(&mut self);
}
