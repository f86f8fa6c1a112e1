//! Data-ready interrupt bridge
//!
//! The ICM-20948 asserts its INT1 pin on every raw-data-ready event once
//! `INT_ENABLE_1.RAW_DATA_0_RDY_EN` is set (the engine sets it during
//! initialization). Watching that pin is not this driver's job: the
//! surrounding system owns the GPIO edge-detection mechanism and exposes it
//! through [`InterruptBridge`]. The driver's side of the contract is only
//! that [`Icm20948Engine::handle_data_ready`](crate::Icm20948Engine::handle_data_ready)
//! is the thing to call on each rising edge.
//!
//! # Example
//!
//! ```ignore
//! # use icm20948_imu::{Icm20948Engine, InterruptBridge};
//! # let (mut bridge, mut imu, mut clock) = todo!();
//! // The closure owns the engine; the bridge invokes it per rising edge.
//! bridge.subscribe(move || imu.handle_data_ready(&mut clock))?;
//! ```

/// GPIO edge-interrupt subscription capability
///
/// Implemented by the surrounding system for whatever watches the data-ready
/// line (a Linux GPIO character device, an EXTI line behind a critical
/// section, a test double). Exactly one callback is expected per line;
/// re-subscription behavior is the implementer's choice.
pub trait InterruptBridge {
    /// Error reported by the subscription mechanism
    type Error;

    /// Invoke `callback` on each rising edge of the data-ready line
    ///
    /// The callback takes no arguments; any state it needs (the engine, a
    /// clock) is captured by the closure. No untyped context pointers are
    /// involved.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge subscription cannot be established.
    fn subscribe<F>(&mut self, callback: F) -> Result<(), Self::Error>
    where
        F: FnMut() + Send + 'static;
}
