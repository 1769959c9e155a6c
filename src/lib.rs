//! Polling wrapper for DHT temperature and humidity sensors
//!
//! This crate wraps any DHT bus driver behind a [`SensorReader`] that performs
//! one acquisition per call, rejects invalid values and caches the last good
//! reading. It is built on top of the [`embedded-hal`] traits.
//!
//! # Features
//! - Blocking synchronous API
//! - Designed for `no_std` environments, no allocation
//! - Last-known-good caching: a failed read never clears cached values
//! - Injectable diagnostics instead of a global serial stream
//!
//! # Dependencies
//! - [`SensorDriver`] is the only hardware-facing interface; adapt your DHT
//!   driver crate to it
//! - [`DelayNs`] for the power-on settle time in [`SensorReader::initialize`]
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support and provides
//!   [`DefmtDiagnostics`](diagnostics::DefmtDiagnostics)
//! - `log`: Provides [`LogDiagnostics`](diagnostics::LogDiagnostics) for the
//!   `log` facade
//!
//! # Example
//!
//! ```ignore
//! const SENSOR: PinConfig = PinConfig::new(4, SensorModel::Dht11);
//!
//! let mut reader = SensorReader::new(SENSOR, driver, LogDiagnostics);
//! reader.initialize(&mut delay);
//!
//! loop {
//!     if reader.read().is_ok() {
//!         publish(reader.temperature(), reader.humidity());
//!     }
//!     delay.delay_ms(SENSOR.model.min_sampling_interval_ms());
//! }
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod reader;

pub use diagnostics::{Diagnostics, NoopDiagnostics, SensorEvent, Severity};
pub use driver::{PinConfig, SensorDriver, SensorModel};
pub use error::{Quantity, ReadError};
pub use reader::{Reading, ReadingState, SensorReader};

#[cfg(feature = "defmt")]
pub use diagnostics::DefmtDiagnostics;
#[cfg(feature = "log")]
pub use diagnostics::LogDiagnostics;
