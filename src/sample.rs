//! Acquisition data types and raw-to-SI conversion
//!
//! A [`RawSample`] is the ephemeral register-level reading (six signed
//! 16-bit values, each assembled big-endian from a high/low register pair).
//! Conversion into an [`ImuSample`] divides by the full-scale sensitivity of
//! the range the device was configured with, then scales into SI units:
//! m/s² for acceleration, rad/s for angular velocity.
//!
//! The converted sample is handed by value to whatever [`SampleSink`] is
//! registered on the engine; [`NullSink`] drops it silently.

/// Standard gravity in m/s², used to convert g-force to acceleration
pub const STANDARD_GRAVITY: f32 = 9.80665;

const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

/// One register-level reading of all six axes
///
/// Constructed per acquisition cycle and consumed immediately by conversion;
/// never retained by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Raw accelerometer axes
    pub accel: AccelData,
    /// Raw gyroscope axes
    pub gyro: GyroData,
}

/// Linear acceleration in m/s²
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataMs2 {
    /// X-axis acceleration in m/s²
    pub x: f32,
    /// Y-axis acceleration in m/s²
    pub y: f32,
    /// Z-axis acceleration in m/s²
    pub z: f32,
}

impl AccelDataMs2 {
    /// Convert raw axes using the configured full-scale sensitivity
    ///
    /// `raw / sensitivity` is g-force; multiplying by [`STANDARD_GRAVITY`]
    /// yields m/s². Conversion is linear through zero.
    #[must_use]
    pub fn from_raw(raw: AccelData, sensitivity: f32) -> Self {
        Self {
            x: f32::from(raw.x) / sensitivity * STANDARD_GRAVITY,
            y: f32::from(raw.y) / sensitivity * STANDARD_GRAVITY,
            z: f32::from(raw.z) / sensitivity * STANDARD_GRAVITY,
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Angular velocity in radians per second
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataRps {
    /// X-axis rotation rate in rad/s
    pub x: f32,
    /// Y-axis rotation rate in rad/s
    pub y: f32,
    /// Z-axis rotation rate in rad/s
    pub z: f32,
}

impl GyroDataRps {
    /// Convert raw axes using the configured full-scale sensitivity
    ///
    /// `raw / sensitivity` is degrees per second; multiplying by π/180
    /// yields rad/s. Conversion is linear through zero.
    #[must_use]
    pub fn from_raw(raw: GyroData, sensitivity: f32) -> Self {
        Self {
            x: f32::from(raw.x) / sensitivity * DEG_TO_RAD,
            y: f32::from(raw.y) / sensitivity * DEG_TO_RAD,
            z: f32::from(raw.z) / sensitivity * DEG_TO_RAD,
        }
    }

    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// One converted six-axis sample
///
/// Constructed by the engine once per acquisition cycle and passed by value
/// to the registered sink. The engine also keeps a single-slot working copy,
/// overwritten each cycle (not a queue).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImuSample {
    /// Linear acceleration in m/s²
    pub accel: AccelDataMs2,
    /// Angular velocity in rad/s
    pub gyro: GyroDataRps,
    /// Capture timestamp in microseconds, taken when conversion completes
    pub timestamp_us: u64,
}

impl ImuSample {
    /// Convert a raw reading using the configured sensitivities
    #[must_use]
    pub fn from_raw(
        raw: RawSample,
        accel_sensitivity: f32,
        gyro_sensitivity: f32,
        timestamp_us: u64,
    ) -> Self {
        Self {
            accel: AccelDataMs2::from_raw(raw.accel, accel_sensitivity),
            gyro: GyroDataRps::from_raw(raw.gyro, gyro_sensitivity),
            timestamp_us,
        }
    }
}

/// Consumer capability for converted samples
///
/// Any `FnMut(ImuSample)` closure is a sink. The engine holds exactly one;
/// registering another replaces it.
pub trait SampleSink {
    /// Accept one converted sample, by value
    fn accept(&mut self, sample: ImuSample);
}

impl<F> SampleSink for F
where
    F: FnMut(ImuSample),
{
    fn accept(&mut self, sample: ImuSample) {
        self(sample);
    }
}

/// Sink that silently drops every sample
///
/// The engine's default: acquisition with no registered consumer is
/// acceptable behavior, not an error.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NullSink;

impl SampleSink for NullSink {
    fn accept(&mut self, _sample: ImuSample) {}
}

/// Monotonic time capability for sample timestamps
pub trait Clock {
    /// Current monotonic time in microseconds
    fn now_us(&mut self) -> u64;
}
