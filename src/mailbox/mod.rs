//! Single-slot mailbox between interrupt and foreground context.
//!
//! The acquisition state and the latest averaged reading form one slot
//! with single-producer (the two interrupt entry points) and
//! single-consumer (the foreground loop) semantics. The slot lives in an
//! `embassy_sync` blocking mutex over a critical section, so every access
//! is one short interrupts-off window; the target platforms have no
//! multi-word atomics, and state plus value must always be observed
//! together.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::acquisition::{Acquisition, AcquisitionState, ConverterCommand};
use crate::converter::{Converter, SampleTimer};

pub struct SamplingCell {
    slot: Mutex<CriticalSectionRawMutex, RefCell<Acquisition>>,
}

impl SamplingCell {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(RefCell::new(Acquisition::new())),
        }
    }

    /// Report-timer interrupt entry point.
    ///
    /// Starts a new acquisition cycle iff the slot is idle; a tick that
    /// lands mid-cycle is skipped. The converter command is applied after
    /// the slot is released: a completion interrupt cannot preempt us
    /// before `start` has run, so no sample is lost, and the timer edge is
    /// acknowledged last, before the handler returns.
    pub fn on_timer_tick<T: SampleTimer, C: Converter>(&self, timer: &mut T, converter: &mut C) {
        let command = self.slot.lock(|slot| slot.borrow_mut().on_timer_tick());
        if let Some(ConverterCommand::Start) = command {
            converter.start();
        }
        timer.acknowledge();
    }

    /// Conversion-complete interrupt entry point.
    ///
    /// Feeds the latest result to the accumulator; on batch completion the
    /// converter is stopped so it draws nothing while the node idles. A
    /// straggler conversion racing the stop command finds the slot out of
    /// `Active` and is dropped. The edge is acknowledged before returning.
    pub fn on_conversion_complete<C: Converter>(&self, converter: &mut C) {
        let raw = converter.latest_result();
        let command = self
            .slot
            .lock(|slot| slot.borrow_mut().on_conversion_complete(raw));
        if let Some(ConverterCommand::Stop) = command {
            converter.stop();
        }
        converter.acknowledge();
    }

    /// Snapshot of the acquisition state, for the sleep arbiter.
    pub fn state(&self) -> AcquisitionState {
        self.slot.lock(|slot| slot.borrow().state())
    }

    /// Consume a completed reading, moving the slot back to idle.
    ///
    /// The only foreground-driven transition. State check and value read
    /// are one critical section, so the reading can never pair with a
    /// stale state.
    pub fn take_reading(&self) -> Option<u32> {
        self.slot.lock(|slot| slot.borrow_mut().take_completed())
    }
}
