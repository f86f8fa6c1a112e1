//! Register definitions for the ICM-20948
//!
//! Only the registers this driver actually touches are defined here: the
//! bank-0 identity/power/interrupt/data registers and the bank-2 gyro and
//! accelerometer configuration registers.
//!
//! The ICM-20948 uses a bank-switching architecture where registers at
//! addresses 0x00-0x7F have different meanings depending on which bank is
//! selected via `REG_BANK_SEL` (0x7F). Registers sharing addresses across
//! banks use `ALLOW_ADDRESS_OVERLAP = true`; the engine is responsible for
//! selecting the correct bank before every access.

device_driver::create_device!(
    device_name: Icm20948,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        // ==================== BANK 0 REGISTERS ====================

        /// WHO_AM_I - Device ID Register (Bank 0, 0x00)
        /// Expected value: 0xEA
        register WhoAmI {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Device ID (should read 0xEA)
            who_am_i: uint = 0..8,
        },

        /// PWR_MGMT_1 - Power Management 1 (Bank 0, 0x06)
        register PwrMgmt1 {
            const ADDRESS = 0x06;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Clock source select (0=internal 20MHz, 1=auto select best, 2-7=stop clock)
            clksel: uint = 0..3,
            /// Temperature sensor disable
            temp_dis: bool = 3,
            reserved_4: uint = 4..5,
            /// Low power mode enable
            lp_en: bool = 5,
            /// Sleep mode enable
            sleep: bool = 6,
            /// Device reset
            device_reset: bool = 7,
        },

        /// INT_ENABLE_1 - Interrupt Enable 1 (Bank 0, 0x11)
        register IntEnable1 {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Raw data ready interrupt enable
            raw_data_0_rdy_en: bool = 0,
            reserved_7_1: uint = 1..8,
        },

        /// ACCEL_XOUT_H - Accelerometer X-axis High Byte (Bank 0, 0x2D)
        ///
        /// First of the twelve output registers 0x2D-0x38 (accel x/y/z then
        /// gyro x/y/z, each a big-endian high/low pair). The engine reads
        /// them as bursts starting here and at `GYRO_XOUT_H`.
        register AccelXoutH {
            const ADDRESS = 0x2D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Accelerometer X-axis data high byte
            accel_xout_h: uint = 0..8,
        },

        /// GYRO_XOUT_H - Gyroscope X-axis High Byte (Bank 0, 0x33)
        register GyroXoutH {
            const ADDRESS = 0x33;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gyroscope X-axis data high byte
            gyro_xout_h: uint = 0..8,
        },

        /// REG_BANK_SEL - Register Bank Selection (All Banks, 0x7F)
        register RegBankSel {
            const ADDRESS = 0x7F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_3_0: uint = 0..4,
            /// User bank selection (0-3, shifted left by 4 bits: 0x00, 0x10, 0x20, 0x30)
            user_bank: uint = 4..6,
            reserved_7_6: uint = 6..8,
        },

        // ==================== BANK 2 REGISTERS ====================
        // Gyroscope and accelerometer configuration

        /// GYRO_SMPLRT_DIV (Bank 2, 0x00)
        register Bank2GyroSmplrtDiv {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gyroscope sample rate divider (ODR = 1.1 kHz / (1 + div))
            gyro_smplrt_div: uint = 0..8,
        },

        /// GYRO_CONFIG_1 (Bank 2, 0x01)
        register Bank2GyroConfig1 {
            const ADDRESS = 0x01;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gyroscope FCHOICE (DLPF enable)
            gyro_fchoice: bool = 0,
            /// Gyroscope full scale select (±250, ±500, ±1000, ±2000 dps)
            gyro_fs_sel: uint = 1..3,
            /// Gyroscope DLPF configuration
            gyro_dlpfcfg: uint = 3..6,
            reserved_7_6: uint = 6..8,
        },

        /// ACCEL_SMPLRT_DIV_1 (Bank 2, 0x10)
        register Bank2AccelSmplrtDiv1 {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Accelerometer sample rate divider high byte (bits 11:8)
            accel_smplrt_div_1: uint = 0..4,
            reserved_7_4: uint = 4..8,
        },

        /// ACCEL_SMPLRT_DIV_2 (Bank 2, 0x11)
        register Bank2AccelSmplrtDiv2 {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Accelerometer sample rate divider low byte
            accel_smplrt_div_2: uint = 0..8,
        },

        /// ACCEL_CONFIG (Bank 2, 0x14)
        register Bank2AccelConfig {
            const ADDRESS = 0x14;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Accelerometer FCHOICE (DLPF enable)
            accel_fchoice: bool = 0,
            /// Accelerometer full scale select (±2g, ±4g, ±8g, ±16g)
            accel_fs_sel: uint = 1..3,
            /// Accelerometer DLPF configuration
            accel_dlpfcfg: uint = 3..6,
            reserved_7_6: uint = 6..8,
        },
    }
);
