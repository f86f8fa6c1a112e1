//! Gyroscope configuration types
//!
//! Provides the full-scale, low-pass filter, and sample-rate types for the
//! ICM-20948's 3-axis gyroscope.

/// Gyroscope full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    /// ±250°/s range
    Dps250 = 0,
    /// ±500°/s range
    Dps500 = 1,
    /// ±1000°/s range
    Dps1000 = 2,
    /// ±2000°/s range
    Dps2000 = 3,
}

impl GyroFullScale {
    /// Get the sensitivity in LSB/(°/s)
    ///
    /// The full ±32768 raw span maps onto the configured ±dps range (so for
    /// ±250°/s, 32768/250 = 131.072 LSB per degree per second).
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::Dps250 => 131.072, // LSB/(°/s)
            Self::Dps500 => 65.536,  // LSB/(°/s)
            Self::Dps1000 => 32.768, // LSB/(°/s)
            Self::Dps2000 => 16.384, // LSB/(°/s)
        }
    }

    /// Get the maximum value in °/s
    #[must_use]
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
        }
    }
}

/// Gyroscope Digital Low Pass Filter (DLPF) bandwidth
///
/// Discriminants are the `GYRO_DLPFCFG` field values; the filter only takes
/// effect when `GYRO_FCHOICE` is set (see [`GyroConfig::dlpf_enable`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroDlpf {
    /// 197 Hz bandwidth
    Hz197 = 0,
    /// 152 Hz bandwidth
    Hz152 = 1,
    /// 120 Hz bandwidth
    Hz120 = 2,
    /// 51 Hz bandwidth
    Hz51 = 3,
    /// 24 Hz bandwidth
    Hz24 = 4,
    /// 12 Hz bandwidth
    Hz12 = 5,
    /// 6 Hz bandwidth
    Hz6 = 6,
    /// 361 Hz bandwidth (widest filtered setting)
    Hz361 = 7,
}

impl GyroDlpf {
    /// Get the 3dB bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz197 => 197,
            Self::Hz152 => 152,
            Self::Hz120 => 120,
            Self::Hz51 => 51,
            Self::Hz24 => 24,
            Self::Hz12 => 12,
            Self::Hz6 => 6,
            Self::Hz361 => 361,
        }
    }
}

/// Gyroscope configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Full-scale range
    pub full_scale: GyroFullScale,
    /// Digital Low Pass Filter bandwidth
    pub dlpf: GyroDlpf,
    /// Enable the DLPF (`GYRO_FCHOICE`)
    pub dlpf_enable: bool,
    /// Sample rate divider (0-255)
    /// Actual sample rate = 1.1 kHz / (1 + `sample_rate_div`)
    pub sample_rate_div: u8,
}

impl Default for GyroConfig {
    /// ±250°/s, 361 Hz filter bandwidth, 220 Hz output rate
    fn default() -> Self {
        Self {
            full_scale: GyroFullScale::Dps250,
            dlpf: GyroDlpf::Hz361,
            dlpf_enable: true,
            sample_rate_div: 4,
        }
    }
}

impl GyroConfig {
    /// Calculate the effective sample rate in Hz
    #[must_use]
    pub fn sample_rate_hz(&self) -> f32 {
        1100.0 / (1.0 + f32::from(self.sample_rate_div))
    }
}
