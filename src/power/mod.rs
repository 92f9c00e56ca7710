//! Sleep-mode arbitration.
//!
//! Once per foreground pass the node snapshots the acquisition and link
//! state and enters the deepest mode that neither stalls an in-flight
//! batch nor starves the radio stack.

use crate::acquisition::AcquisitionState;
use crate::transport::{ConnectionState, LinkLowPowerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepMode {
    /// CPU halted, peripherals clocked. Short wake latency; the converter
    /// keeps sampling.
    Light,
    /// Lowest current draw. Only safe while nothing needs a running clock.
    Deep,
}

/// Platform low-power seam.
pub trait PowerControl {
    /// Enter `mode`. Called inside the arbitration critical section so the
    /// decision inputs cannot change between read and entry; the platform
    /// wakes on the next enabled interrupt, which also ends the critical
    /// section's relevance.
    fn enter(&mut self, mode: SleepMode);
}

/// Pick the deepest safe sleep mode.
///
/// An `Active` acquisition always forces [`SleepMode::Light`]: deep sleep
/// would stop the converter clock mid-batch. Otherwise the link substate
/// decides; only its two genuinely idle substates permit deep sleep, and
/// any transitional or busy substate falls back to light sleep. The
/// connection state never loosens that gate, it is part of the snapshot
/// because a disconnected link parks itself in `DeepSleep` between
/// advertising windows, which is what makes the disconnected node reach
/// deep sleep at all.
pub fn select_sleep_mode(
    acquisition: AcquisitionState,
    connection: ConnectionState,
    link: LinkLowPowerState,
) -> SleepMode {
    if acquisition == AcquisitionState::Active {
        return SleepMode::Light;
    }
    match (connection, link) {
        (_, LinkLowPowerState::DeepSleep | LinkLowPowerState::OscillatorStartup) => SleepMode::Deep,
        (_, LinkLowPowerState::EventWindow | LinkLowPowerState::Active) => SleepMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACQ: [AcquisitionState; 3] = [
        AcquisitionState::Idle,
        AcquisitionState::Active,
        AcquisitionState::Completed,
    ];
    const CONN: [ConnectionState; 2] = [ConnectionState::Disconnected, ConnectionState::Connected];
    const LINK: [LinkLowPowerState; 4] = [
        LinkLowPowerState::DeepSleep,
        LinkLowPowerState::OscillatorStartup,
        LinkLowPowerState::EventWindow,
        LinkLowPowerState::Active,
    ];

    #[test]
    fn active_acquisition_never_deep_sleeps() {
        for conn in CONN {
            for link in LINK {
                assert_eq!(
                    select_sleep_mode(AcquisitionState::Active, conn, link),
                    SleepMode::Light,
                    "{conn:?}/{link:?}"
                );
            }
        }
    }

    #[test]
    fn idle_link_permits_deep_sleep() {
        for acq in [AcquisitionState::Idle, AcquisitionState::Completed] {
            for conn in CONN {
                for link in [
                    LinkLowPowerState::DeepSleep,
                    LinkLowPowerState::OscillatorStartup,
                ] {
                    assert_eq!(select_sleep_mode(acq, conn, link), SleepMode::Deep);
                }
            }
        }
    }

    #[test]
    fn disconnected_idle_node_deep_sleeps_when_link_permits() {
        assert_eq!(
            select_sleep_mode(
                AcquisitionState::Idle,
                ConnectionState::Disconnected,
                LinkLowPowerState::DeepSleep,
            ),
            SleepMode::Deep
        );
    }

    #[test]
    fn transitional_link_defaults_to_light_sleep() {
        for acq in ACQ {
            for conn in CONN {
                assert_eq!(
                    select_sleep_mode(acq, conn, LinkLowPowerState::EventWindow),
                    SleepMode::Light
                );
            }
        }
    }

    #[test]
    fn busy_link_defaults_to_light_sleep() {
        for acq in ACQ {
            for conn in CONN {
                assert_eq!(
                    select_sleep_mode(acq, conn, LinkLowPowerState::Active),
                    SleepMode::Light
                );
            }
        }
    }
}
