//! Register protocol engine for the ICM-20948
//!
//! This module owns the communication state machine of the device: bank
//! selection, reset and power sequencing, identity confirmation, sample-rate
//! and filter configuration, interrupt enablement, and the acquisition
//! pipeline invoked on each data-ready edge.
//!
//! The engine signals discovery and configuration outcomes through a single
//! [`DeviceState`] value rather than per-operation errors; callers check the
//! state before relying on sampling. Internally, every register access still
//! propagates transport errors through `Result`, and the public entry points
//! fold those into the state.

use crate::power::{ClockSource, RESET_SETTLE_MS};
use crate::registers::Icm20948 as RegisterDevice;
use crate::sample::{AccelData, Clock, GyroData, ImuSample, NullSink, RawSample, SampleSink};
use crate::sensors::{AccelConfig, GyroConfig};
use crate::{Bank, Error, WHO_AM_I_VALUE};

use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;

/// Communication state of the device
///
/// The sole mutable control state of the engine. It is set only by
/// [`initialize`](Icm20948Engine::initialize) and
/// [`probe`](Icm20948Engine::probe) and can be read at any time, without
/// side effects, via [`state`](Icm20948Engine::state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// No bus contact attempted yet
    Uninitialized,
    /// Bus transport failed; unrecoverable without re-initialization
    DeviceError,
    /// Bus reachable but identity unconfirmed
    CommunicationEstablished,
    /// Identity byte matched; fully configured and sampling-ready
    DeviceConfirmed,
}

/// Register protocol engine for the ICM-20948
///
/// Generic over the bus interface `I` and the sample sink `S`. The engine
/// exclusively owns its state: the device handle, the cached bank selection,
/// the scale configuration used for conversion, and the single-slot working
/// copy of the last converted sample.
pub struct Icm20948Engine<I, S = NullSink> {
    device: RegisterDevice<I>,
    state: DeviceState,
    current_bank: Option<Bank>,
    accel_config: AccelConfig,
    gyro_config: GyroConfig,
    sink: S,
    last_sample: Option<ImuSample>,
}

impl<I> Icm20948Engine<I, NullSink> {
    /// Create an engine with default configuration (±2g, ±250°/s) and no sink
    ///
    /// No bus contact is attempted; the engine starts
    /// [`Uninitialized`](DeviceState::Uninitialized). Call
    /// [`initialize`](Self::initialize) to open communication and configure
    /// the device.
    pub fn new(interface: I) -> Self {
        Self::with_config(interface, AccelConfig::default(), GyroConfig::default())
    }

    /// Create an engine with explicit scale/filter/rate configuration
    pub fn with_config(interface: I, accel_config: AccelConfig, gyro_config: GyroConfig) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            state: DeviceState::Uninitialized,
            current_bank: None,
            accel_config,
            gyro_config,
            sink: NullSink,
            last_sample: None,
        }
    }
}

impl<I, S> Icm20948Engine<I, S> {
    /// Replace the registered sink, possibly with a different sink type
    ///
    /// The engine holds exactly one sink; the previous one is dropped.
    pub fn with_sink<T: SampleSink>(self, sink: T) -> Icm20948Engine<I, T> {
        Icm20948Engine {
            device: self.device,
            state: self.state,
            current_bank: self.current_bank,
            accel_config: self.accel_config,
            gyro_config: self.gyro_config,
            sink,
            last_sample: self.last_sample,
        }
    }

    /// Replace the registered sink with another of the same type
    pub fn set_sink(&mut self, sink: S) {
        self.sink = sink;
    }

    /// Current communication state, read-only and side-effect free
    #[must_use]
    pub const fn state(&self) -> DeviceState {
        self.state
    }

    /// Accelerometer configuration the conversion divisor is derived from
    #[must_use]
    pub const fn accel_config(&self) -> AccelConfig {
        self.accel_config
    }

    /// Gyroscope configuration the conversion divisor is derived from
    #[must_use]
    pub const fn gyro_config(&self) -> GyroConfig {
        self.gyro_config
    }

    /// Working copy of the most recent converted sample
    ///
    /// Single slot, overwritten each acquisition cycle; `None` until the
    /// first cycle completes.
    #[must_use]
    pub const fn last_sample(&self) -> Option<ImuSample> {
        self.last_sample
    }

    /// Consume the engine and return the bus interface
    pub fn release(self) -> I {
        self.device.interface
    }
}

impl<I, S> Icm20948Engine<I, S>
where
    I: RegisterInterface<AddressType = u8>,
    S: SampleSink,
{
    /// Initialize communication and configure the device
    ///
    /// The sequence and its order are a correctness requirement of the part:
    ///
    /// 1. Select bank 0 (first bus contact; transport failure here or
    ///    anywhere below yields [`DeviceError`](DeviceState::DeviceError)).
    /// 2. Device reset via `PWR_MGMT_1`, then the mandatory settle delay —
    ///    register access immediately after reset is undefined.
    /// 3. Wake the device with the auto clock source.
    /// 4. Read `WHO_AM_I`. A mismatch leaves the engine at
    ///    [`CommunicationEstablished`](DeviceState::CommunicationEstablished)
    ///    and skips all configuration: the scale invariant only holds for a
    ///    confirmed device.
    /// 5. Select bank 2; write the gyro sample-rate divider, the gyro
    ///    filter/scale register, the accel sample-rate divider (low byte),
    ///    and the accel filter/scale register.
    /// 6. Select bank 0; enable the raw-data-ready interrupt.
    ///
    /// Bank selection is sticky device state, so every configuration block
    /// re-selects its bank explicitly; a missed selection would silently
    /// write the wrong logical register.
    ///
    /// Returns (and stores) the resulting state; callers must check it
    /// before relying on sampling.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DeviceState {
        self.state = match self.init_sequence(delay) {
            Ok(()) => DeviceState::DeviceConfirmed,
            Err(Error::InvalidDevice(_)) => DeviceState::CommunicationEstablished,
            Err(Error::Bus(_)) => DeviceState::DeviceError,
        };
        self.state
    }

    fn init_sequence<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>> {
        let accel = self.accel_config;
        let gyro = self.gyro_config;

        // Re-initialization must not trust a stale bank cache
        self.current_bank = None;
        self.select_bank(Bank::Bank0)?;

        // Reset, then wait out the quiescence window. Reset also returns the
        // hardware to bank 0, which matches the cache written above.
        self.device.pwr_mgmt_1().write(|w| {
            w.set_device_reset(true);
        })?;
        delay.delay_ms(RESET_SETTLE_MS);

        // Out of sleep, auto clock source
        self.device.pwr_mgmt_1().write(|w| {
            w.set_clksel(ClockSource::AutoSelect as u8);
        })?;

        let who_am_i = self.device.who_am_i().read()?.who_am_i();
        if who_am_i != WHO_AM_I_VALUE {
            return Err(Error::InvalidDevice(who_am_i));
        }

        // Gyro and accel configuration live in bank 2
        self.select_bank(Bank::Bank2)?;

        self.device.bank_2_gyro_smplrt_div().write(|w| {
            w.set_gyro_smplrt_div(gyro.sample_rate_div);
        })?;

        self.device.bank_2_gyro_config_1().write(|w| {
            w.set_gyro_dlpfcfg(gyro.dlpf as u8);
            w.set_gyro_fs_sel(gyro.full_scale as u8);
            w.set_gyro_fchoice(gyro.dlpf_enable);
        })?;

        // 12-bit logical field; only the low byte is written here
        self.device.bank_2_accel_smplrt_div_2().write(|w| {
            w.set_accel_smplrt_div_2((accel.sample_rate_div & 0xFF) as u8);
        })?;

        self.device.bank_2_accel_config().write(|w| {
            w.set_accel_dlpfcfg(accel.dlpf as u8);
            w.set_accel_fs_sel(accel.full_scale as u8);
            w.set_accel_fchoice(accel.dlpf_enable);
        })?;

        // Back to bank 0 for the interrupt enable
        self.select_bank(Bank::Bank0)?;
        self.device.int_enable_1().write(|w| {
            w.set_raw_data_0_rdy_en(true);
        })?;

        Ok(())
    }

    /// Opportunistic liveness check
    ///
    /// From [`CommunicationEstablished`](DeviceState::CommunicationEstablished)
    /// or [`DeviceConfirmed`](DeviceState::DeviceConfirmed): re-read the
    /// identity register; a match promotes to `DeviceConfirmed` (idempotent),
    /// a mismatch or read failure leaves the state unchanged — probing never
    /// demotes.
    ///
    /// From [`Uninitialized`](DeviceState::Uninitialized) or
    /// [`DeviceError`](DeviceState::DeviceError): set
    /// `CommunicationEstablished`, assuming the earlier failure was
    /// transient. Probing does not re-run initialization; a device that
    /// needs reconfiguration requires another
    /// [`initialize`](Self::initialize) call.
    pub fn probe(&mut self) {
        match self.state {
            DeviceState::CommunicationEstablished | DeviceState::DeviceConfirmed => {
                if let Ok(who_am_i) = self.read_who_am_i() {
                    if who_am_i == WHO_AM_I_VALUE {
                        self.state = DeviceState::DeviceConfirmed;
                    }
                }
            }
            DeviceState::Uninitialized | DeviceState::DeviceError => {
                self.state = DeviceState::CommunicationEstablished;
            }
        }
    }

    /// Acquisition cycle: the data-ready callback
    ///
    /// Invoked once per rising edge of the data-ready line (see
    /// [`InterruptBridge`](crate::InterruptBridge)). Reads all twelve output
    /// registers, converts with the configured sensitivities, timestamps the
    /// sample when conversion completes, stores it in the working slot, and
    /// hands it to the sink — at most one sink invocation per cycle.
    ///
    /// Runs only while the device is
    /// [`DeviceConfirmed`](DeviceState::DeviceConfirmed): before that the
    /// configuration registers were never written and no divisor matches the
    /// hardware. A transport failure mid-read skips the cycle entirely: no
    /// sink call, no working-slot overwrite, state unchanged.
    pub fn handle_data_ready<C: Clock>(&mut self, clock: &mut C) {
        if self.state != DeviceState::DeviceConfirmed {
            return;
        }

        let raw = match self.read_raw_sample() {
            Ok(raw) => raw,
            Err(_) => return,
        };

        let sample = ImuSample::from_raw(
            raw,
            self.accel_config.full_scale.sensitivity(),
            self.gyro_config.full_scale.sensitivity(),
            clock.now_us(),
        );

        self.last_sample = Some(sample);
        self.sink.accept(sample);
    }

    /// Select a register bank
    ///
    /// Bank selection is sticky hardware state; the engine caches the last
    /// selection and skips the write when the bank is already current.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn select_bank(&mut self, bank: Bank) -> Result<(), Error<I::Error>> {
        if self.current_bank != Some(bank) {
            self.device.reg_bank_sel().write(|w| {
                w.set_user_bank(bank as u8);
            })?;

            self.current_bank = Some(bank);
        }
        Ok(())
    }

    /// Read the `WHO_AM_I` identity register
    ///
    /// Should return 0xEA for a valid ICM-20948.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        self.select_bank(Bank::Bank0)?;
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Read raw accelerometer data
    ///
    /// Returns signed 16-bit values for X, Y, Z, each assembled big-endian
    /// from the high/low register pair.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel(&mut self) -> Result<AccelData, Error<I::Error>> {
        // Read all 6 bytes in one burst to prevent torn reads
        // Register addresses: ACCEL_XOUT_H (0x2D) through ACCEL_ZOUT_L (0x32)
        const ACCEL_XOUT_H: u8 = 0x2D;
        let mut buffer = [0u8; 6];
        self.select_bank(Bank::Bank0)?;
        self.device
            .interface
            .read_register(ACCEL_XOUT_H, 48, &mut buffer)?;

        let x = i16::from_be_bytes([buffer[0], buffer[1]]);
        let y = i16::from_be_bytes([buffer[2], buffer[3]]);
        let z = i16::from_be_bytes([buffer[4], buffer[5]]);

        Ok(AccelData { x, y, z })
    }

    /// Read raw gyroscope data
    ///
    /// Returns signed 16-bit values for X, Y, Z, each assembled big-endian
    /// from the high/low register pair.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro(&mut self) -> Result<GyroData, Error<I::Error>> {
        // Read all 6 bytes in one burst to prevent torn reads
        // Register addresses: GYRO_XOUT_H (0x33) through GYRO_ZOUT_L (0x38)
        const GYRO_XOUT_H: u8 = 0x33;
        let mut buffer = [0u8; 6];
        self.select_bank(Bank::Bank0)?;
        self.device
            .interface
            .read_register(GYRO_XOUT_H, 48, &mut buffer)?;

        let x = i16::from_be_bytes([buffer[0], buffer[1]]);
        let y = i16::from_be_bytes([buffer[2], buffer[3]]);
        let z = i16::from_be_bytes([buffer[4], buffer[5]]);

        Ok(GyroData { x, y, z })
    }

    fn read_raw_sample(&mut self) -> Result<RawSample, Error<I::Error>> {
        let accel = self.read_accel()?;
        let gyro = self.read_gyro()?;
        Ok(RawSample { accel, gyro })
    }
}
