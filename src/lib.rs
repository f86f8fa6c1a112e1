#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod interrupt;
pub mod power;
pub mod registers;
pub mod sample;
pub mod sensors;

// Re-export main types
pub use device::{DeviceState, Icm20948Engine};
pub use interface::I2cInterface;
pub use interrupt::InterruptBridge;
pub use sample::{
    AccelData, AccelDataMs2, Clock, GyroData, GyroDataRps, ImuSample, NullSink, RawSample,
    SampleSink, STANDARD_GRAVITY,
};
pub use sensors::{AccelConfig, AccelDlpf, AccelFullScale, GyroConfig, GyroDlpf, GyroFullScale};

/// ICM-20948 I2C address when the AD0 pin is low (default: 0x68)
///
/// This is the most common configuration. The AD0 pin is typically pulled low
/// or left floating (has internal pull-down). Use [`I2cInterface::default()`]
/// for this configuration.
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// ICM-20948 I2C address when the AD0 pin is high (alternative: 0x69)
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// Expected value of the `WHO_AM_I` identity register
pub const WHO_AM_I_VALUE: u8 = 0xEA;

/// Register bank identifiers
///
/// The ICM-20948 multiplexes register meaning through `REG_BANK_SEL`: the
/// same numeric address names different registers depending on the selected
/// bank. This driver only ever touches bank 0 (identity, power, interrupts,
/// sensor data) and bank 2 (gyro/accel configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    /// Bank 0 - identity, power management, interrupts, sensor data
    Bank0 = 0,
    /// Bank 2 - gyro and accelerometer configuration
    Bank2 = 2,
}

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
