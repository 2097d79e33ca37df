//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - The forecast payload model
//! - Weather-code and wind-direction interpretation
//! - The fixed-layout text report
//! - The Open-Meteo provider and its HTTP seam
//! - Configuration handling
//!
//! It is used by `meteo-cli`, but the interpreters and the report are plain
//! functions that can be reused anywhere.

pub mod compass;
pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;

pub use compass::{CompassPoint, CompassReading, interpret_wind_direction, normalize_bearing};
pub use condition::{CodeInterpretation, WeatherCondition, interpret_weather_code};
pub use config::{Config, DEFAULT_COORDINATES};
pub use error::{FetchError, FetchErrorKind};
pub use model::{Coordinates, CurrentObservation, CurrentUnits, ForecastPayload};
pub use provider::{HttpResponse, HttpTransport, OpenMeteoProvider, WeatherProvider};
pub use report::{Clock, FixedClock, SystemClock, format_report, format_report_now};
