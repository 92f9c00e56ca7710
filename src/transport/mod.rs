//! Seam to the connection-oriented wireless stack.
//!
//! The core never drives the radio from interrupt context; everything
//! here is called once per foreground pass.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

/// The radio subsystem's own low-power classification, independent of the
/// application-level connection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkLowPowerState {
    /// Radio parked in its deepest idle substate.
    DeepSleep,
    /// Radio waking, crystal oscillator still stabilizing. The link is not
    /// yet drawing active current, so system deep sleep remains safe.
    OscillatorStartup,
    /// A connection event is being closed; transitional, treat as busy.
    EventWindow,
    Active,
}

/// Wireless transport collaborator.
///
/// Attribute encoding is the transport's concern; the core hands it the
/// raw little-endian 4-byte magnitude. The notification enable flag is
/// owned by the transport (written by the remote peer, reset by the stack
/// on reconnect) and only read here.
pub trait Transport {
    type Error;

    /// Pump the stack's event queue. Called once per foreground pass.
    fn process_events(&mut self);

    fn connection_state(&self) -> ConnectionState;

    fn link_low_power_state(&self) -> LinkLowPowerState;

    /// Push the latest reading into the outward-facing attribute.
    fn write_reading(&mut self, value: [u8; 4]) -> Result<(), Self::Error>;

    /// Notify the connected peer of the latest reading.
    fn notify_reading(&mut self, value: [u8; 4]) -> Result<(), Self::Error>;

    /// Whether the peer has enabled reading notifications.
    fn notifications_enabled(&self) -> bool;
}
