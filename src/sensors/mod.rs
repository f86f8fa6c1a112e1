//! Sensor configuration types for the ICM-20948
//!
//! Full-scale ranges, digital low-pass filter selections, and sample-rate
//! dividers for the accelerometer and gyroscope. The engine writes these
//! into the bank-2 configuration registers during initialization and uses
//! the full-scale sensitivities for raw-to-SI conversion, so the divisor
//! used in conversion always matches what the device was configured with.

pub mod accelerometer;
pub mod gyroscope;

// Re-export main types
pub use accelerometer::{AccelConfig, AccelDlpf, AccelFullScale};
pub use gyroscope::{GyroConfig, GyroDlpf, GyroFullScale};
