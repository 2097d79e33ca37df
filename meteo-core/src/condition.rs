//! Interpretation of WMO weather codes as reported under `current.weather_code`.

/// Human-readable label and glyph for a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeInterpretation {
    pub description: &'static str,
    pub icon: &'static str,
}

/// Sky and precipitation category for a WMO weather code.
///
/// Several codes share one category (61, 63 and 65 are all [`WeatherCondition::Rain`]).
/// Codes outside the known set map to [`WeatherCondition::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    /// Code 0.
    Clear,
    /// Code 1.
    MainlyClear,
    /// Code 2.
    PartlyCloudy,
    /// Code 3.
    Cloudy,
    /// Codes 45 and 48.
    Fog,
    /// Codes 51, 53 and 55.
    Drizzle,
    /// Codes 61, 63 and 65.
    Rain,
    /// Codes 71, 73 and 75.
    Snow,
    /// Codes 80, 81 and 82.
    Showers,
    /// Codes 95, 96 and 99.
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Exact-match lookup; there is no range matching between listed codes.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => WeatherCondition::Clear,
            1 => WeatherCondition::MainlyClear,
            2 => WeatherCondition::PartlyCloudy,
            3 => WeatherCondition::Cloudy,
            45 | 48 => WeatherCondition::Fog,
            51 | 53 | 55 => WeatherCondition::Drizzle,
            61 | 63 | 65 => WeatherCondition::Rain,
            71 | 73 | 75 => WeatherCondition::Snow,
            80 | 81 | 82 => WeatherCondition::Showers,
            95 | 96 | 99 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::MainlyClear => "Mainly clear",
            WeatherCondition::PartlyCloudy => "Partly cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Showers => "Showers",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Unknown => "Unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "☀️",
            WeatherCondition::MainlyClear => "🌤️",
            WeatherCondition::PartlyCloudy => "⛅",
            WeatherCondition::Cloudy => "☁️",
            WeatherCondition::Fog => "🌫️",
            WeatherCondition::Drizzle => "🌦️",
            WeatherCondition::Rain | WeatherCondition::Showers => "🌧️",
            WeatherCondition::Snow => "❄️",
            WeatherCondition::Thunderstorm => "⛈️",
            WeatherCondition::Unknown => "❓",
        }
    }

    pub fn interpretation(&self) -> CodeInterpretation {
        CodeInterpretation {
            description: self.description(),
            icon: self.icon(),
        }
    }
}

/// Total over all integers: unlisted codes yield the `Unknown` interpretation.
pub fn interpret_weather_code(code: i64) -> CodeInterpretation {
    WeatherCondition::from_code(code).interpretation()
}
