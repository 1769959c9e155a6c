//! Diagnostic output of the reader.
//!
//! Every `initialize()` and `read()` call produces exactly one [`SensorEvent`],
//! handed to the [`Diagnostics`] sink the reader was built with. The rendered
//! text carries the `[SENSOR]` prefix; it is meant for humans only.

use core::fmt;

use crate::driver::SensorModel;
use crate::error::Quantity;

/// Prefix identifying reader output in a shared log stream.
pub const TAG: &str = "[SENSOR]";

/// Something the reader wants to report.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SensorEvent {
    /// The driver was set up and the warm-up delay has elapsed.
    Initialized { model: SensorModel },
    /// `initialize()` was called on an already initialized reader.
    AlreadyInitialized { model: SensorModel },
    /// A read attempt produced a valid pair.
    ReadSucceeded {
        model: SensorModel,
        temperature: f32,
        humidity: f32,
    },
    /// A read attempt failed; cached values were kept.
    ReadFailed {
        model: SensorModel,
        quantity: Quantity,
    },
}

/// Log level an event is reported at.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Setup progress and successful reads.
    Info,
    /// Failed reads.
    Warn,
}

impl SensorEvent {
    /// Whether this event reports a problem.
    pub fn is_failure(&self) -> bool {
        matches!(self, SensorEvent::ReadFailed { .. })
    }

    /// Level the bundled backends report this event at.
    pub fn severity(&self) -> Severity {
        if self.is_failure() {
            Severity::Warn
        } else {
            Severity::Info
        }
    }
}

impl fmt::Display for SensorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorEvent::Initialized { model } => write!(f, "{TAG} {} initialized", model.name()),
            SensorEvent::AlreadyInitialized { model } => {
                write!(f, "{TAG} {} already initialized", model.name())
            }
            SensorEvent::ReadSucceeded {
                model,
                temperature,
                humidity,
            } => write!(
                f,
                "{TAG} {} data: temperature {:.2}°C, humidity {:.2}%",
                model.name(),
                temperature,
                humidity
            ),
            SensorEvent::ReadFailed { model, quantity } => write!(
                f,
                "{TAG} failed to read {} from {}",
                quantity.as_str(),
                model.name()
            ),
        }
    }
}

/// Sink for reader diagnostics.
pub trait Diagnostics {
    /// Handles one event; called once per `initialize()` and `read()`.
    fn record(&mut self, event: &SensorEvent);
}

impl<T: Diagnostics + ?Sized> Diagnostics for &mut T {
    fn record(&mut self, event: &SensorEvent) {
        T::record(self, event)
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn record(&mut self, _event: &SensorEvent) {}
}

/// Forwards events to the `log` facade at their [`Severity`].
#[cfg(feature = "log")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

#[cfg(feature = "log")]
impl Diagnostics for LogDiagnostics {
    fn record(&mut self, event: &SensorEvent) {
        match event.severity() {
            Severity::Info => log::info!("{}", event),
            Severity::Warn => log::warn!("{}", event),
        }
    }
}

/// Forwards events to `defmt` at their [`Severity`], with the same text as
/// the `Display` rendering.
#[cfg(feature = "defmt")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DefmtDiagnostics;

#[cfg(feature = "defmt")]
impl Diagnostics for DefmtDiagnostics {
    fn record(&mut self, event: &SensorEvent) {
        // defmt interns format strings; prefix and units are passed as arguments
        match *event {
            SensorEvent::Initialized { model } => {
                defmt::info!("{=str} {=str} initialized", TAG, model.name())
            }
            SensorEvent::AlreadyInitialized { model } => {
                defmt::info!("{=str} {=str} already initialized", TAG, model.name())
            }
            SensorEvent::ReadSucceeded {
                model,
                temperature,
                humidity,
            } => defmt::info!(
                "{=str} {=str} data: temperature {=f32}{=str}, humidity {=f32}%",
                TAG,
                model.name(),
                temperature,
                "°C",
                humidity
            ),
            SensorEvent::ReadFailed { model, quantity } => defmt::warn!(
                "{=str} failed to read {=str} from {=str}",
                TAG,
                quantity.as_str(),
                model.name()
            ),
        }
    }
}
