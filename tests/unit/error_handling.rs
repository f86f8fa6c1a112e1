//! Fault injection tests for initialization and acquisition

use crate::common::{create_engine, CollectSink, MockClock, MockDelay, Operation};
use icm20948_imu::DeviceState;

#[test]
fn write_failure_during_configuration_yields_device_error() {
    let (mut engine, mock) = create_engine();
    // Accel configuration is the last bank-2 write of the sequence
    mock.fail_on_write(0x14);

    let state = engine.initialize(&mut MockDelay);

    assert_eq!(state, DeviceState::DeviceError);
}

#[test]
fn read_failure_during_identity_check_yields_device_error() {
    let (mut engine, mock) = create_engine();
    // First three operations are writes; the identity check is the first read
    mock.fail_next_read();

    let state = engine.initialize(&mut MockDelay);

    assert_eq!(state, DeviceState::DeviceError);
}

#[test]
fn acquisition_read_failure_skips_the_cycle() {
    let (mut engine, mock) = create_engine();
    engine.initialize(&mut MockDelay);

    let sink = CollectSink::new();
    let mut engine = engine.with_sink(sink.clone());
    let mut clock = MockClock::new();

    mock.set_accel_data(100, 200, 300);
    mock.set_gyro_data(-100, -200, -300);

    mock.fail_next_read();
    engine.handle_data_ready(&mut clock);

    // No sink delivery, no working-slot overwrite, state untouched
    assert_eq!(sink.len(), 0);
    assert!(engine.last_sample().is_none());
    assert_eq!(engine.state(), DeviceState::DeviceConfirmed);

    // The next cycle works without any recovery action
    engine.handle_data_ready(&mut clock);
    assert_eq!(sink.len(), 1);
    assert!(engine.last_sample().is_some());
}

#[test]
fn acquisition_refused_before_confirmation() {
    let (mut engine, mock) = create_engine();
    mock.set_who_am_i(0x71);
    engine.initialize(&mut MockDelay);
    assert_eq!(engine.state(), DeviceState::CommunicationEstablished);

    let sink = CollectSink::new();
    let mut engine = engine.with_sink(sink.clone());
    let mut clock = MockClock::new();

    mock.set_accel_data(16384, 0, 0);
    mock.clear_operations();

    engine.handle_data_ready(&mut clock);

    // No conversion can be trusted on an unconfirmed device: no bus
    // traffic, no sample
    assert_eq!(sink.len(), 0);
    assert!(engine.last_sample().is_none());
    assert!(!mock
        .operations()
        .iter()
        .any(|op| matches!(op, Operation::ReadRegister { .. })));
}

#[test]
fn acquisition_refused_when_uninitialized() {
    let (engine, mock) = create_engine();
    let sink = CollectSink::new();
    let mut engine = engine.with_sink(sink.clone());
    let mut clock = MockClock::new();

    engine.handle_data_ready(&mut clock);

    assert_eq!(sink.len(), 0);
    assert!(mock.operations().is_empty());
}

#[test]
fn read_failure_preserves_previous_sample() {
    let (mut engine, mock) = create_engine();
    engine.initialize(&mut MockDelay);

    let sink = CollectSink::new();
    let mut engine = engine.with_sink(sink.clone());
    let mut clock = MockClock::new();

    // First deliver a good sample so the working slot is populated
    mock.set_accel_data(16384, 0, 0);
    mock.set_gyro_data(0, 0, 0);
    engine.handle_data_ready(&mut clock);
    let before = engine.last_sample().unwrap();

    // New data is pending but the read fails: the whole cycle is dropped
    // and the working slot keeps the previous sample
    mock.set_accel_data(0, 16384, 0);
    mock.fail_next_read();
    engine.handle_data_ready(&mut clock);

    assert_eq!(sink.len(), 1);
    let after = engine.last_sample().unwrap();
    assert_eq!(after.accel.x, before.accel.x);
}
