//! Core library for the `clima` CLI.
//!
//! This crate defines:
//! - Input sanitization and condition-code lookup tables
//! - Open-Meteo geocoding and forecast clients behind an HTTP transport seam
//! - Alignment of the daily forecast to the provider's notion of "today"
//! - The lookup pipeline tying these together, and its configuration
//!
//! It is used by `clima-cli`, but can also be reused by other binaries or services.

pub mod aligner;
pub mod conditions;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod openmeteo;
pub mod sanitize;
pub mod transport;

#[cfg(test)]
mod testing;

pub use aligner::{DEFAULT_WINDOW, align_and_trim};
pub use conditions::{Language, describe, icon_for};
pub use config::Config;
pub use error::{LookupError, TransportError};
pub use lookup::WeatherLookup;
pub use model::{CurrentConditions, DailySeries, ForecastDay, Location, LookupResult};
pub use sanitize::sanitize;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
