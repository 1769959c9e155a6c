use core::fmt;

/// The quantity a failed read was trying to acquire.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature in degrees Celsius.
    Temperature,
    /// Relative humidity in percent.
    Humidity,
}

impl Quantity {
    /// Lowercase name used in diagnostic lines.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Quantity::Temperature => "temperature",
            Quantity::Humidity => "humidity",
        }
    }
}

/// Reasons a single read attempt failed.
///
/// When both quantities are invalid, the error names the temperature, since
/// it is requested first.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum ReadError<E> {
    /// The driver returned its not-a-number sentinel.
    InvalidValue(Quantity),
    /// The driver reported an error of its own.
    Driver(Quantity, E),
}

impl<E> ReadError<E> {
    /// Which quantity could not be acquired.
    pub fn quantity(&self) -> Quantity {
        match self {
            ReadError::InvalidValue(quantity) | ReadError::Driver(quantity, _) => *quantity,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for ReadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::InvalidValue(quantity) => {
                write!(f, "driver returned an invalid {}", quantity.as_str())
            }
            ReadError::Driver(quantity, e) => {
                write!(f, "driver failed to read {}: {:?}", quantity.as_str(), e)
            }
        }
    }
}
