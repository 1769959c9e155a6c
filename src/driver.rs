/// Sensor model variants of the DHT family.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorModel {
    /// DHT11, 1 °C / 1 % resolution.
    Dht11,
    /// DHT12, single-wire mode.
    Dht12,
    /// DHT21 (AM2301).
    Dht21,
    /// DHT22 (AM2302).
    Dht22,
}

impl SensorModel {
    /// Name used in diagnostic lines.
    pub const fn name(&self) -> &'static str {
        match self {
            SensorModel::Dht11 => "DHT11",
            SensorModel::Dht12 => "DHT12",
            SensorModel::Dht21 => "DHT21",
            SensorModel::Dht22 => "DHT22",
        }
    }

    /// Time the sensor needs after power-up before it accepts a start signal.
    pub const fn power_on_settle_ms(&self) -> u32 {
        1000
    }

    /// Shortest interval between two acquisitions the sensor tolerates.
    ///
    /// Only advisory: the reader never sleeps between reads.
    pub const fn min_sampling_interval_ms(&self) -> u32 {
        match self {
            SensorModel::Dht11 => 1000,
            SensorModel::Dht12 | SensorModel::Dht21 | SensorModel::Dht22 => 2000,
        }
    }
}

/// Hardware binding of a reader: which pin the data line is on and which
/// model is attached to it.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinConfig {
    /// GPIO number of the data line.
    pub pin: u8,
    /// Attached sensor model.
    pub model: SensorModel,
}

impl PinConfig {
    /// Creates a pin configuration, usable in `const` items.
    pub const fn new(pin: u8, model: SensorModel) -> Self {
        Self { pin, model }
    }
}

/// Capability interface of a DHT bus driver.
///
/// Implementations own the bus protocol. A failed acquisition is reported
/// either as `Err` or as `f32::NAN`; the reader treats both the same way.
pub trait SensorDriver {
    /// Error reported by the underlying bus transaction.
    type Error;

    /// One-time setup before the first read, such as configuring the pin
    /// as an open-drain output idling high.
    fn begin(&mut self);

    /// Acquires the temperature in degrees Celsius.
    fn read_temperature(&mut self) -> Result<f32, Self::Error>;

    /// Acquires the relative humidity in percent.
    fn read_humidity(&mut self) -> Result<f32, Self::Error>;
}

impl<T: SensorDriver + ?Sized> SensorDriver for &mut T {
    type Error = T::Error;

    fn begin(&mut self) {
        T::begin(self)
    }

    fn read_temperature(&mut self) -> Result<f32, Self::Error> {
        T::read_temperature(self)
    }

    fn read_humidity(&mut self) -> Result<f32, Self::Error> {
        T::read_humidity(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_names() {
        assert_eq!(SensorModel::Dht11.name(), "DHT11");
        assert_eq!(SensorModel::Dht12.name(), "DHT12");
        assert_eq!(SensorModel::Dht21.name(), "DHT21");
        assert_eq!(SensorModel::Dht22.name(), "DHT22");
    }

    #[test]
    fn test_sampling_intervals() {
        assert_eq!(SensorModel::Dht11.min_sampling_interval_ms(), 1000);
        assert_eq!(SensorModel::Dht22.min_sampling_interval_ms(), 2000);
        assert_eq!(SensorModel::Dht22.power_on_settle_ms(), 1000);
    }

    #[test]
    fn test_const_pin_config() {
        const CONFIG: PinConfig = PinConfig::new(4, SensorModel::Dht11);

        assert_eq!(CONFIG.pin, 4);
        assert_eq!(CONFIG.model, SensorModel::Dht11);
    }

    struct Fixed(f32, f32);

    impl SensorDriver for Fixed {
        type Error = ();

        fn begin(&mut self) {}

        fn read_temperature(&mut self) -> Result<f32, ()> {
            Ok(self.0)
        }

        fn read_humidity(&mut self) -> Result<f32, ()> {
            Ok(self.1)
        }
    }

    fn read_pair<D: SensorDriver>(mut driver: D) -> (Result<f32, D::Error>, Result<f32, D::Error>) {
        driver.begin();
        (driver.read_temperature(), driver.read_humidity())
    }

    #[test]
    fn test_borrowed_driver_forwards() {
        let mut driver = Fixed(21.0, 48.5);

        assert_eq!(read_pair(&mut driver), (Ok(21.0), Ok(48.5)));
    }
}
