//! Accelerometer configuration types
//!
//! Provides the full-scale, low-pass filter, and sample-rate types for the
//! ICM-20948's 3-axis accelerometer.

/// Accelerometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    /// ±2g range (most sensitive, least range)
    G2 = 0,
    /// ±4g range
    G4 = 1,
    /// ±8g range
    G8 = 2,
    /// ±16g range (least sensitive, most range)
    G16 = 3,
}

impl AccelFullScale {
    /// Get the sensitivity in LSB/g
    ///
    /// The full ±32768 raw span maps onto the configured ±g range; dividing
    /// a raw reading by this value yields g-force.
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::G2 => 16384.0, // LSB/g
            Self::G4 => 8192.0,  // LSB/g
            Self::G8 => 4096.0,  // LSB/g
            Self::G16 => 2048.0, // LSB/g
        }
    }

    /// Get the maximum value in g
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }
}

/// Accelerometer Digital Low Pass Filter (DLPF) bandwidth
///
/// Discriminants are the `ACCEL_DLPFCFG` field values; the filter only takes
/// effect when `ACCEL_FCHOICE` is set (see [`AccelConfig::dlpf_enable`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelDlpf {
    /// 246 Hz bandwidth
    Hz246 = 1,
    /// 111 Hz bandwidth
    Hz111 = 2,
    /// 50 Hz bandwidth
    Hz50 = 3,
    /// 24 Hz bandwidth
    Hz24 = 4,
    /// 12 Hz bandwidth
    Hz12 = 5,
    /// 6 Hz bandwidth
    Hz6 = 6,
    /// 473 Hz bandwidth (widest filtered setting)
    Hz473 = 7,
}

impl AccelDlpf {
    /// Get the 3dB bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz246 => 246,
            Self::Hz111 => 111,
            Self::Hz50 => 50,
            Self::Hz24 => 24,
            Self::Hz12 => 12,
            Self::Hz6 => 6,
            Self::Hz473 => 473,
        }
    }
}

/// Accelerometer configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// Full-scale range
    pub full_scale: AccelFullScale,
    /// Digital Low Pass Filter bandwidth
    pub dlpf: AccelDlpf,
    /// Enable the DLPF (`ACCEL_FCHOICE`)
    pub dlpf_enable: bool,
    /// Sample rate divider (12-bit logical field, 0-4095)
    /// Actual sample rate = 1.125 kHz / (1 + `sample_rate_div`)
    pub sample_rate_div: u16,
}

impl Default for AccelConfig {
    /// ±2g, 473 Hz filter bandwidth, 225 Hz output rate
    fn default() -> Self {
        Self {
            full_scale: AccelFullScale::G2,
            dlpf: AccelDlpf::Hz473,
            dlpf_enable: true,
            sample_rate_div: 4,
        }
    }
}

impl AccelConfig {
    /// Calculate the effective sample rate in Hz
    #[must_use]
    pub fn sample_rate_hz(&self) -> f32 {
        1125.0 / (1.0 + f32::from(self.sample_rate_div))
    }
}
