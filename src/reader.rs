use embedded_hal::delay::DelayNs;

use crate::diagnostics::{Diagnostics, NoopDiagnostics, SensorEvent};
use crate::driver::{PinConfig, SensorDriver, SensorModel};
use crate::error::{Quantity, ReadError};

/// Temperature and humidity pair produced by a successful read.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
}

impl Reading {
    /// Value of the cache before the first successful read.
    pub const ZERO: Reading = Reading {
        temperature: 0.0,
        relative_humidity: 0.0,
    };
}

/// Freshness of the cached reading.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadingState {
    /// The most recent read succeeded; the cache holds its values.
    Valid,
    /// The most recent read failed, or none happened yet. The cache holds the
    /// last good pair or [`Reading::ZERO`].
    Stale,
}

/// Polls a single DHT sensor and keeps the last good reading.
///
/// The reader owns its driver. Each [`read`](SensorReader::read) is exactly
/// one acquisition; retrying is left to the caller's poll loop.
pub struct SensorReader<D, L = NoopDiagnostics> {
    config: PinConfig,
    driver: D,
    diagnostics: L,
    last: Reading,
    last_read_succeeded: bool,
    initialized: bool,
}

impl<D> SensorReader<D, NoopDiagnostics>
where
    D: SensorDriver,
{
    /// Creates a reader that discards its diagnostics.
    pub fn without_diagnostics(config: PinConfig, driver: D) -> Self {
        Self::new(config, driver, NoopDiagnostics)
    }
}

impl<D, L> SensorReader<D, L>
where
    D: SensorDriver,
    L: Diagnostics,
{
    /// Binds a driver to a pin configuration.
    ///
    /// Does not touch the hardware. The cache starts at [`Reading::ZERO`] and
    /// the reader reports [`ReadingState::Stale`] until a read succeeds.
    pub fn new(config: PinConfig, driver: D, diagnostics: L) -> Self {
        Self {
            config,
            driver,
            diagnostics,
            last: Reading::ZERO,
            last_read_succeeded: false,
            initialized: false,
        }
    }

    /// Sets up the driver and waits for the sensor to settle after power-up.
    ///
    /// Calling it again only reports that the reader is already initialized;
    /// the driver is set up once.
    pub fn initialize<DELAY: DelayNs>(&mut self, delay: &mut DELAY) {
        let model = self.config.model;

        if self.initialized {
            self.diagnostics
                .record(&SensorEvent::AlreadyInitialized { model });
            return;
        }

        self.driver.begin();
        delay.delay_ms(model.power_on_settle_ms());
        self.initialized = true;

        self.diagnostics.record(&SensorEvent::Initialized { model });
    }

    /// Performs one acquisition.
    ///
    /// Temperature and humidity are both requested, in that order. If either
    /// is invalid the cached pair is left untouched and the reader becomes
    /// [`ReadingState::Stale`].
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` with the new pair, which is now cached.
    /// * `Err(ReadError)` naming the first quantity that could not be read.
    pub fn read(&mut self) -> Result<Reading, ReadError<D::Error>> {
        let model = self.config.model;
        let temperature = validate(Quantity::Temperature, self.driver.read_temperature());
        let humidity = validate(Quantity::Humidity, self.driver.read_humidity());

        match (temperature, humidity) {
            (Ok(temperature), Ok(relative_humidity)) => {
                self.last = Reading {
                    temperature,
                    relative_humidity,
                };
                self.last_read_succeeded = true;

                self.diagnostics.record(&SensorEvent::ReadSucceeded {
                    model,
                    temperature,
                    humidity: relative_humidity,
                });
                Ok(self.last)
            }
            (Err(e), _) | (Ok(_), Err(e)) => {
                self.last_read_succeeded = false;

                self.diagnostics.record(&SensorEvent::ReadFailed {
                    model,
                    quantity: e.quantity(),
                });
                Err(e)
            }
        }
    }

    /// Last good temperature in degrees Celsius, fresh or not.
    pub fn temperature(&self) -> f32 {
        self.last.temperature
    }

    /// Last good relative humidity in percent, fresh or not.
    pub fn humidity(&self) -> f32 {
        self.last.relative_humidity
    }

    /// Outcome of the most recent read.
    pub fn last_read_succeeded(&self) -> bool {
        self.last_read_succeeded
    }

    /// Freshness of the cached pair.
    pub fn state(&self) -> ReadingState {
        if self.last_read_succeeded {
            ReadingState::Valid
        } else {
            ReadingState::Stale
        }
    }

    /// Cached pair, regardless of [`state`](SensorReader::state).
    pub fn last_reading(&self) -> Reading {
        self.last
    }

    /// Cached pair, only if the most recent read produced it.
    pub fn fresh_reading(&self) -> Option<Reading> {
        self.last_read_succeeded.then_some(self.last)
    }

    /// Pin configuration the reader was built with.
    pub fn config(&self) -> PinConfig {
        self.config
    }

    /// Attached sensor model.
    pub fn model(&self) -> SensorModel {
        self.config.model
    }

    /// Whether [`initialize`](SensorReader::initialize) has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Diagnostics sink, for inspecting captured events.
    pub fn diagnostics(&self) -> &L {
        &self.diagnostics
    }

    /// Consumes the reader, handing back the driver and the diagnostics sink.
    pub fn release(self) -> (D, L) {
        (self.driver, self.diagnostics)
    }
}

/// Maps a driver result to a usable value; NaN is the driver's "no reading".
fn validate<E>(quantity: Quantity, value: Result<f32, E>) -> Result<f32, ReadError<E>> {
    match value {
        Ok(v) if v.is_nan() => Err(ReadError::InvalidValue(quantity)),
        Ok(v) => Ok(v),
        Err(e) => Err(ReadError::Driver(quantity, e)),
    }
}
