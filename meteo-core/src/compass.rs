//! Bucketing of wind bearings into the eight compass sectors.

/// Compass label and arrow glyph for a bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompassReading {
    pub label: &'static str,
    pub icon: &'static str,
}

impl CompassReading {
    /// Reading for bearings that cannot be normalized (NaN, infinities).
    pub const UNKNOWN: CompassReading = CompassReading { label: "?", icon: "❓" };
}

/// One of the eight 45°-wide sectors, each centred on its compass point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    /// Sector containing `degrees`, or `None` when the bearing is not finite.
    ///
    /// Lower bounds are inclusive and upper bounds exclusive, so 22.5° is NE and
    /// 337.5° is N.
    pub fn from_bearing(degrees: f64) -> Option<Self> {
        let deg = normalize_bearing(degrees);
        if deg.is_nan() {
            return None;
        }

        // Half-open bounds, N wrapping across 0°.
        let point = match deg {
            d if !(22.5..337.5).contains(&d) => CompassPoint::N,
            d if d < 67.5 => CompassPoint::NE,
            d if d < 112.5 => CompassPoint::E,
            d if d < 157.5 => CompassPoint::SE,
            d if d < 202.5 => CompassPoint::S,
            d if d < 247.5 => CompassPoint::SW,
            d if d < 292.5 => CompassPoint::W,
            _ => CompassPoint::NW,
        };
        Some(point)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CompassPoint::N => "⬆️",
            CompassPoint::NE => "↗️",
            CompassPoint::E => "➡️",
            CompassPoint::SE => "↘️",
            CompassPoint::S => "⬇️",
            CompassPoint::SW => "↙️",
            CompassPoint::W => "⬅️",
            CompassPoint::NW => "↖️",
        }
    }

    pub fn reading(&self) -> CompassReading {
        CompassReading {
            label: self.label(),
            icon: self.icon(),
        }
    }
}

/// Reduces a bearing to `[0, 360)`, wrapping negatives (-10 becomes 350).
/// NaN and infinite inputs come back as NaN.
///
/// Values already in range are returned bit-for-bit, so a bearing just below a
/// sector boundary is not rounded onto it.
pub fn normalize_bearing(degrees: f64) -> f64 {
    let rem = degrees % 360.0;
    // `+ 0.0` folds -0.0 into 0.0.
    let wrapped = if rem < 0.0 { rem + 360.0 } else { rem + 0.0 };
    // Tiny negative remainders round up to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Total over all `f64` values; non-finite bearings yield [`CompassReading::UNKNOWN`].
pub fn interpret_wind_direction(degrees: f64) -> CompassReading {
    CompassPoint::from_bearing(degrees)
        .map(|point| point.reading())
        .unwrap_or(CompassReading::UNKNOWN)
}
