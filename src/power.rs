//! Power and reset sequencing
//!
//! The ICM-20948 comes out of power-on (and out of a soft reset) asleep, on
//! the internal oscillator, with bank 0 selected. Bringing it into active
//! sampling mode is a write to `PWR_MGMT_1` selecting a clock source and
//! clearing the sleep bit. Register access during the post-reset quiescence
//! window is undefined, so the engine waits [`RESET_SETTLE_MS`] after
//! asserting the reset bit before touching the device again.

/// Clock source selection (`PWR_MGMT_1.CLKSEL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Internal 20 MHz oscillator
    Internal20MHz = 0,
    /// Auto-select the best available clock (PLL when the gyro is running)
    AutoSelect = 1,
    /// Stop clock (lowest power)
    Stop = 7,
}

/// Settle delay after a device reset, in milliseconds
///
/// The device requires this quiescence period; register access immediately
/// after reset is undefined.
pub const RESET_SETTLE_MS: u32 = 10;
