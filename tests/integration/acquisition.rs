//! End-to-end acquisition pipeline tests
//!
//! Drive the full path a real deployment exercises: initialize, wire a sink,
//! fire data-ready callbacks, and check the SI-converted samples that come
//! out the other end.

use crate::common::{
    assert_float_eq, create_engine, CollectSink, MockClock, MockDelay, MockInterface,
};
use icm20948_imu::{
    AccelConfig, AccelFullScale, DeviceState, GyroConfig, GyroFullScale, Icm20948Engine,
    InterruptBridge, STANDARD_GRAVITY,
};

const EPSILON: f32 = 1e-4;
const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

#[test]
fn full_cycle_delivers_converted_sample() {
    let (mut engine, mock) = create_engine();
    assert_eq!(engine.initialize(&mut MockDelay), DeviceState::DeviceConfirmed);

    let sink = CollectSink::new();
    let mut engine = engine.with_sink(sink.clone());
    let mut clock = MockClock::new();
    clock.set_time(1_000_000);

    // +1g on X, level elsewhere; quarter-scale rotation about Z
    mock.set_accel_data(16384, 0, -16384);
    mock.set_gyro_data(0, 8192, 16384);

    engine.handle_data_ready(&mut clock);

    let samples = sink.samples();
    assert_eq!(samples.len(), 1);
    let sample = samples[0];

    assert_float_eq(sample.accel.x, STANDARD_GRAVITY, EPSILON);
    assert_float_eq(sample.accel.y, 0.0, EPSILON);
    assert_float_eq(sample.accel.z, -STANDARD_GRAVITY, EPSILON);

    // ±250°/s full scale: 16384 counts = 125°/s exactly
    assert_float_eq(sample.gyro.x, 0.0, EPSILON);
    assert_float_eq(sample.gyro.y, 62.5 * DEG_TO_RAD, EPSILON);
    assert_float_eq(sample.gyro.z, 125.0 * DEG_TO_RAD, EPSILON);

    assert_eq!(sample.timestamp_us, 1_000_000);

    // The working slot holds the same sample
    let last = engine.last_sample().unwrap();
    assert_float_eq(last.accel.x, sample.accel.x, EPSILON);
    assert_eq!(last.timestamp_us, sample.timestamp_us);
}

#[test]
fn conversion_uses_configured_full_scale() {
    let mock = MockInterface::new();
    let accel_config = AccelConfig {
        full_scale: AccelFullScale::G8,
        ..AccelConfig::default()
    };
    let gyro_config = GyroConfig {
        full_scale: GyroFullScale::Dps1000,
        ..GyroConfig::default()
    };
    let mut engine = Icm20948Engine::with_config(mock.clone(), accel_config, gyro_config);
    assert_eq!(engine.initialize(&mut MockDelay), DeviceState::DeviceConfirmed);

    let sink = CollectSink::new();
    let mut engine = engine.with_sink(sink.clone());
    let mut clock = MockClock::new();

    // At ±8g, 4096 counts per g; at ±1000°/s, 32.768 counts per °/s
    mock.set_accel_data(4096, 0, 0);
    mock.set_gyro_data(-32768, 0, 0);

    engine.handle_data_ready(&mut clock);

    let sample = sink.samples()[0];
    assert_float_eq(sample.accel.x, STANDARD_GRAVITY, EPSILON);
    assert_float_eq(sample.gyro.x, -1000.0 * DEG_TO_RAD, 1e-3);
}

#[test]
fn working_slot_is_overwritten_each_cycle() {
    let (mut engine, mock) = create_engine();
    engine.initialize(&mut MockDelay);
    let mut clock = MockClock::new();

    mock.set_accel_data(16384, 0, 0);
    clock.set_time(100);
    engine.handle_data_ready(&mut clock);
    assert_eq!(engine.last_sample().unwrap().timestamp_us, 100);

    mock.set_accel_data(-16384, 0, 0);
    clock.set_time(200);
    engine.handle_data_ready(&mut clock);

    // Single slot: only the newest sample survives
    let last = engine.last_sample().unwrap();
    assert_eq!(last.timestamp_us, 200);
    assert_float_eq(last.accel.x, -STANDARD_GRAVITY, EPSILON);
}

#[test]
fn default_sink_silently_drops_samples() {
    let (mut engine, mock) = create_engine();
    engine.initialize(&mut MockDelay);
    let mut clock = MockClock::new();

    mock.set_accel_data(16384, 0, 0);
    engine.handle_data_ready(&mut clock);

    // No sink registered: the sample is still converted and retained
    assert!(engine.last_sample().is_some());
}

#[test]
fn sink_replacement_redirects_delivery() {
    let (mut engine, mock) = create_engine();
    engine.initialize(&mut MockDelay);

    let first = CollectSink::new();
    let mut engine = engine.with_sink(first.clone());
    let mut clock = MockClock::new();

    mock.set_accel_data(16384, 0, 0);
    engine.handle_data_ready(&mut clock);
    assert_eq!(first.len(), 1);

    let second = CollectSink::new();
    engine.set_sink(second.clone());

    engine.handle_data_ready(&mut clock);

    // The engine holds exactly one sink; the old one stops receiving
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[test]
fn closure_sink_receives_samples() {
    let (mut engine, mock) = create_engine();
    engine.initialize(&mut MockDelay);

    let mut count = 0u32;
    {
        let mut engine = engine.with_sink(|_sample: icm20948_imu::ImuSample| {
            count += 1;
        });
        let mut clock = MockClock::new();

        mock.set_accel_data(16384, 0, 0);
        engine.handle_data_ready(&mut clock);
        engine.handle_data_ready(&mut clock);
    }

    assert_eq!(count, 2);
}

/// Bridge that stores the callback and fires it on demand, standing in for
/// a GPIO edge-interrupt registration.
struct MockBridge {
    callback: Option<Box<dyn FnMut() + Send>>,
}

impl MockBridge {
    fn new() -> Self {
        Self { callback: None }
    }

    fn fire(&mut self) {
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
    }
}

impl InterruptBridge for MockBridge {
    type Error = core::convert::Infallible;

    fn subscribe<F>(&mut self, callback: F) -> Result<(), Self::Error>
    where
        F: FnMut() + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        Ok(())
    }
}

#[test]
fn interrupt_bridge_drives_acquisition() {
    let (mut engine, mock) = create_engine();
    engine.initialize(&mut MockDelay);

    let sink = CollectSink::new();
    let mut engine = engine.with_sink(sink.clone());
    let mut clock = MockClock::new();

    mock.set_accel_data(16384, 0, 0);
    mock.set_gyro_data(0, 0, 16384);

    // Engine and clock move into the callback; the mock handle and the
    // sink clone stay with the test for stimulus and assertions.
    let mut bridge = MockBridge::new();
    bridge
        .subscribe(move || {
            engine.handle_data_ready(&mut clock);
        })
        .unwrap();

    bridge.fire();
    bridge.fire();
    bridge.fire();

    let samples = sink.samples();
    assert_eq!(samples.len(), 3);
    assert_float_eq(samples[2].accel.x, STANDARD_GRAVITY, EPSILON);
    assert_float_eq(samples[2].gyro.z, 125.0 * DEG_TO_RAD, EPSILON);
}
