#![cfg_attr(not(test), no_std)]

//! Sampling and power-coordination core for a battery powered wireless
//! AC current sensor node.
//!
//! The crate owns the acquisition state machine, the rectifying batch
//! accumulator and the sleep-mode arbiter. Everything hardware- or
//! radio-specific (the SAR converter, the periodic report timer, the BLE
//! stack, the low-power instructions) is reached through the traits in
//! [`converter`], [`transport`], [`power`] and [`debug`], so the core runs
//! unchanged on target and under the host test harness.

pub mod acquisition;
pub mod config;
pub mod converter;
pub mod debug;
pub mod error;
pub mod mailbox;
pub mod node;
pub mod power;
pub mod transport;

pub use acquisition::{Acquisition, AcquisitionState, BatchStatus};
pub use error::Error;
pub use mailbox::SamplingCell;
pub use node::{Node, NodeBuilder};
pub use power::SleepMode;
pub use transport::{ConnectionState, LinkLowPowerState};
