//! Foreground loop glue.
//!
//! One [`Node::poll`] call is one pass of the cooperative main loop: pump
//! the transport, consume a completed reading if one is parked in the
//! mailbox, then arbitrate and enter the deepest safe sleep mode. The
//! next hardware interrupt wakes the platform and the caller loops.

use crate::debug::{self, DebugLink};
use crate::error::Error;
use crate::mailbox::SamplingCell;
use crate::power::{self, PowerControl};
use crate::transport::{ConnectionState, Transport};

pub struct Node<'a, T, P, D> {
    cell: &'a SamplingCell,
    transport: T,
    power: P,
    debug: D,
}

pub struct NodeBuilder<'a, T, P, D> {
    cell: &'a SamplingCell,
    transport: Option<T>,
    power: Option<P>,
    debug: Option<D>,
}

impl<'a, T, P, D> Node<'a, T, P, D>
where
    T: Transport,
    P: PowerControl,
    D: DebugLink,
{
    /// One pass of the main loop.
    ///
    /// A transport failure is reported to the caller, but only after the
    /// sleep arbitration has run; a failed notify must not keep the node
    /// awake. The dropped reading is self-correcting, the next batch
    /// replaces it.
    pub fn poll(&mut self) -> Result<(), Error> {
        self.transport.process_events();

        let published = match self.cell.take_reading() {
            Some(reading) => self.publish(reading),
            None => Ok(()),
        };

        self.idle();
        published
    }

    /// Consume one averaged reading.
    ///
    /// The debug line goes out unconditionally; the transport is only
    /// touched while connected (the stack resets its attribute state on
    /// reconnect, so a reading pushed while disconnected would be lost
    /// anyway). The attribute write always happens on a connected link;
    /// the peer notification is additionally gated by the peer-controlled
    /// enable flag.
    fn publish(&mut self, reading: u32) -> Result<(), Error> {
        self.debug.put_line(&debug::hex32_line(reading));

        if self.transport.connection_state() != ConnectionState::Connected {
            return Ok(());
        }

        let payload = reading.to_le_bytes();
        self.transport
            .write_reading(payload)
            .map_err(|_| Error::AttributeWrite)?;
        if self.transport.notifications_enabled() {
            self.transport
                .notify_reading(payload)
                .map_err(|_| Error::Notification)?;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("node: published reading {=u32:x}", reading);

        Ok(())
    }

    /// Snapshot, decide, commit.
    ///
    /// The whole sequence sits in one critical section so the acquisition
    /// state cannot move between the read and the sleep entry. The
    /// interrupts-off window is the decision plus the entry instruction
    /// only, never the sleep itself: the platform wakes on any enabled
    /// interrupt source.
    fn idle(&mut self) {
        critical_section::with(|_| {
            let mode = power::select_sleep_mode(
                self.cell.state(),
                self.transport.connection_state(),
                self.transport.link_low_power_state(),
            );
            self.power.enter(mode);
        });
    }
}

impl<'a, T, P, D> NodeBuilder<'a, T, P, D> {
    pub fn new(cell: &'a SamplingCell) -> Self {
        Self {
            cell,
            transport: None,
            power: None,
            debug: None,
        }
    }

    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_power(mut self, power: P) -> Self {
        self.power = Some(power);
        self
    }

    pub fn with_debug(mut self, debug: D) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn build(self) -> Result<Node<'a, T, P, D>, Error> {
        if let (Some(transport), Some(power), Some(debug)) = (self.transport, self.power, self.debug)
        {
            Ok(Node {
                cell: self.cell,
                transport,
                power,
                debug,
            })
        } else {
            Err(Error::MissingCollaborator)
        }
    }
}
