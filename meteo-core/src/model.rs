use serde::{Deserialize, Deserializer, Serialize};

/// Field names requested from the forecast endpoint, in query order.
pub const CURRENT_FIELDS: [&str; 8] = [
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "precipitation_probability",
    "precipitation",
    "weather_code",
    "wind_speed_10m",
    "wind_direction_10m",
];

/// A point on the globe. Neither component is range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Current measurements as returned under the `current` key.
///
/// Every field is optional: an absent measurement renders as empty text in the
/// report instead of failing the whole request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentObservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_2m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_humidity_2m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apparent_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation_probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<f64>,
    #[serde(
        default,
        deserialize_with = "integral_code",
        skip_serializing_if = "Option::is_none"
    )]
    pub weather_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed_10m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_direction_10m: Option<f64>,
}

/// Accepts any JSON number for the weather code. Integral floats such as `61.0`
/// become the integer; fractional or out-of-range values become `None`, which
/// renders as the unknown condition.
fn integral_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;

    Ok(number.and_then(|n| {
        n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        })
    }))
}

/// Unit strings under `current_units`, keyed like [`CurrentObservation`].
/// The weather code is unitless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUnits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_2m: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_humidity_2m: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apparent_temperature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation_probability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed_10m: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_direction_10m: Option<String>,
}

/// The part of a forecast response the report is built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub current: CurrentObservation,
    #[serde(default, skip_serializing_if = "is_empty_units")]
    pub current_units: CurrentUnits,
}

fn is_empty_units(units: &CurrentUnits) -> bool {
    *units == CurrentUnits::default()
}
