//! Acquisition state machine.
//!
//! One acquisition cycle is Idle -> Active -> Completed: a timer tick
//! starts the converter, each conversion-complete event feeds the
//! rectifying accumulator, and a full batch parks the averaged reading in
//! `Completed` until the foreground loop consumes it.
//!
//! The type itself is pure: interrupt entry points are event methods that
//! return the converter command to apply, which keeps every transition
//! testable without any interrupt context. [`crate::mailbox::SamplingCell`]
//! wraps it for cross-context sharing.

mod accumulator;

pub use accumulator::{BatchStatus, RectifyingAccumulator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AcquisitionState {
    Idle,
    Active,
    Completed,
}

/// Hardware effect requested by a state transition, applied by the caller
/// after the transition has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConverterCommand {
    Start,
    Stop,
}

pub struct Acquisition {
    state: AcquisitionState,
    accumulator: RectifyingAccumulator,
    value: u32,
}

impl Acquisition {
    pub const fn new() -> Self {
        Self {
            state: AcquisitionState::Idle,
            accumulator: RectifyingAccumulator::new(),
            value: 0,
        }
    }

    pub fn state(&self) -> AcquisitionState {
        self.state
    }

    /// Most recent averaged reading. Only meaningful while `Completed`
    /// (it keeps the previous batch's value afterwards).
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Timer tick event: start a new cycle iff idle.
    ///
    /// A tick that lands while a cycle is in flight is skipped, not
    /// queued; the next interval retries. This is the only backpressure
    /// in the pipeline.
    pub fn on_timer_tick(&mut self) -> Option<ConverterCommand> {
        match self.state {
            AcquisitionState::Idle => {
                self.accumulator.reset();
                self.state = AcquisitionState::Active;
                Some(ConverterCommand::Start)
            }
            AcquisitionState::Active | AcquisitionState::Completed => None,
        }
    }

    /// Conversion-complete event: accumulate one raw result.
    ///
    /// A straggler conversion that fires outside `Active` (the stop
    /// command races the last sample) is ignored.
    pub fn on_conversion_complete(&mut self, raw: i16) -> Option<ConverterCommand> {
        if self.state != AcquisitionState::Active {
            return None;
        }
        match self.accumulator.accumulate(raw) {
            BatchStatus::InProgress => None,
            BatchStatus::Complete(average) => {
                self.value = average;
                self.state = AcquisitionState::Completed;
                Some(ConverterCommand::Stop)
            }
        }
    }

    /// Consume a completed reading, returning to `Idle`.
    ///
    /// The single foreground-driven transition; all other states are
    /// untouched by it.
    pub fn take_completed(&mut self) -> Option<u32> {
        if self.state == AcquisitionState::Completed {
            self.state = AcquisitionState::Idle;
            Some(self.value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BATCH_SIZE;

    fn fill_batch(acq: &mut Acquisition, magnitude: i16) {
        for _ in 0..BATCH_SIZE - 1 {
            assert_eq!(acq.on_conversion_complete(magnitude), None);
        }
        assert_eq!(
            acq.on_conversion_complete(magnitude),
            Some(ConverterCommand::Stop)
        );
    }

    #[test]
    fn full_cycle_reaches_completed_and_back() {
        let mut acq = Acquisition::new();
        assert_eq!(acq.state(), AcquisitionState::Idle);

        assert_eq!(acq.on_timer_tick(), Some(ConverterCommand::Start));
        assert_eq!(acq.state(), AcquisitionState::Active);

        fill_batch(&mut acq, 100);
        assert_eq!(acq.state(), AcquisitionState::Completed);

        assert_eq!(acq.take_completed(), Some(25));
        assert_eq!(acq.state(), AcquisitionState::Idle);
    }

    #[test]
    fn tick_while_active_is_idempotent_skip() {
        let mut acq = Acquisition::new();
        acq.on_timer_tick();
        for _ in 0..5 {
            acq.on_conversion_complete(300);
        }

        assert_eq!(acq.on_timer_tick(), None);
        assert_eq!(acq.state(), AcquisitionState::Active);

        // The partial batch survived the skipped tick: completing the
        // remaining samples yields the value of one uninterrupted batch.
        for _ in 0..BATCH_SIZE - 6 {
            assert_eq!(acq.on_conversion_complete(300), None);
        }
        assert_eq!(
            acq.on_conversion_complete(300),
            Some(ConverterCommand::Stop)
        );
        assert_eq!(acq.take_completed(), Some(75));
    }

    #[test]
    fn tick_while_completed_is_skipped() {
        let mut acq = Acquisition::new();
        acq.on_timer_tick();
        fill_batch(&mut acq, 40);

        assert_eq!(acq.on_timer_tick(), None);
        assert_eq!(acq.state(), AcquisitionState::Completed);
        assert_eq!(acq.take_completed(), Some(10));
    }

    #[test]
    fn conversion_outside_active_is_ignored() {
        let mut acq = Acquisition::new();
        assert_eq!(acq.on_conversion_complete(i16::MAX), None);
        assert_eq!(acq.state(), AcquisitionState::Idle);

        acq.on_timer_tick();
        fill_batch(&mut acq, 0);
        assert_eq!(acq.on_conversion_complete(i16::MAX), None);
        assert_eq!(acq.state(), AcquisitionState::Completed);
        assert_eq!(acq.take_completed(), Some(0));
    }

    #[test]
    fn take_outside_completed_is_a_no_op() {
        let mut acq = Acquisition::new();
        assert_eq!(acq.take_completed(), None);
        acq.on_timer_tick();
        assert_eq!(acq.take_completed(), None);
        assert_eq!(acq.state(), AcquisitionState::Active);
    }

    #[test]
    fn value_persists_until_next_batch() {
        let mut acq = Acquisition::new();
        acq.on_timer_tick();
        fill_batch(&mut acq, 100);
        assert_eq!(acq.take_completed(), Some(25));

        acq.on_timer_tick();
        fill_batch(&mut acq, 200);
        assert_eq!(acq.take_completed(), Some(50));
    }
}
