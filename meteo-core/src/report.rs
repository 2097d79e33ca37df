//! Fixed-layout text rendering of a [`ForecastPayload`].

use std::fmt::Display;

use chrono::{Local, NaiveDateTime};

use crate::{
    compass::interpret_wind_direction,
    condition::{WeatherCondition, interpret_weather_code},
    model::{Coordinates, ForecastPayload},
};

/// Timestamp layout used in the title block, e.g. `10/18/2026, 8:05:09 PM`.
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Source of the wall-clock time printed in the report header.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Render the report using the local system clock.
pub fn format_report_now(payload: &ForecastPayload, coordinates: Coordinates) -> String {
    format_report(payload, coordinates, &SystemClock)
}

/// Render the report.
///
/// Coordinates are printed as given followed by `°N` and `°W`; the sign is not
/// turned into a hemisphere letter. Missing measurements or units render as
/// empty text, a missing weather code as the unknown condition and a missing
/// bearing as the `?` reading.
pub fn format_report(
    payload: &ForecastPayload,
    coordinates: Coordinates,
    clock: &dyn Clock,
) -> String {
    let current = &payload.current;
    let units = &payload.current_units;

    let weather = current
        .weather_code
        .map(interpret_weather_code)
        .unwrap_or_else(|| WeatherCondition::Unknown.interpretation());
    let wind = interpret_wind_direction(current.wind_direction_10m.unwrap_or(f64::NAN));
    let timestamp = clock.now().format(TIMESTAMP_FORMAT);

    format!(
        "
🌍 WEATHER FORECAST
=======================

📍 Location: {lat}°N, {lon}°W
🕐 Date: {timestamp}

🌡️  TEMPERATURE
-----------------------
Current:        {temp}{temp_unit}
Feels like:     {apparent}{apparent_unit}
Humidity:       {humidity}{humidity_unit} 💧

☁️  CONDITIONS
-----------------------
Status:         {weather_icon} {weather_description}
Precipitation:  {precip_prob}{precip_prob_unit} 🌧️
Accumulated:    {precip} {precip_unit}

💨 WIND
-----------------------
Speed:          {wind_speed} {wind_speed_unit}
Direction:      {wind_icon}  {wind_label} ({bearing}°)
",
        // `+ 0.0` prints -0.0 as 0.
        lat = coordinates.latitude + 0.0,
        lon = coordinates.longitude + 0.0,
        temp = or_empty(current.temperature_2m),
        temp_unit = or_empty(units.temperature_2m.as_deref()),
        apparent = or_empty(current.apparent_temperature),
        apparent_unit = or_empty(units.apparent_temperature.as_deref()),
        humidity = or_empty(current.relative_humidity_2m),
        humidity_unit = or_empty(units.relative_humidity_2m.as_deref()),
        weather_icon = weather.icon,
        weather_description = weather.description,
        precip_prob = or_empty(current.precipitation_probability),
        precip_prob_unit = or_empty(units.precipitation_probability.as_deref()),
        precip = or_empty(current.precipitation),
        precip_unit = or_empty(units.precipitation.as_deref()),
        wind_speed = or_empty(current.wind_speed_10m),
        wind_speed_unit = or_empty(units.wind_speed_10m.as_deref()),
        wind_icon = wind.icon,
        wind_label = wind.label,
        bearing = or_empty(current.wind_direction_10m),
    )
}

fn or_empty<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
