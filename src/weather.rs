use rand::Rng;
use serde::Deserialize;
use std::fmt;

/// Top-level views. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Forecast,
    Settings,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Forecast, Page::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Forecast => "Forecast",
            Page::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Condition {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    Thunder,
    Snowy,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Thunder,
        Condition::Snowy,
    ];

    /// Capitalised name shown under the current temperature
    pub fn name(self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Thunder => "Thunder",
            Condition::Snowy => "Snowy",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Condition::Sunny => "☀",
            Condition::Cloudy => "☁",
            Condition::Rainy => "☂",
            Condition::Thunder => "⚡",
            Condition::Snowy => "❄",
        }
    }

    /// Condition used for the icon of a forecast row; cycles through all five
    pub fn for_forecast_row(index: usize) -> Condition {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn random(rng: &mut impl Rng) -> Condition {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display scale. Temperatures are always stored in Fahrenheit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Unit {
    #[default]
    F,
    C,
}

impl Unit {
    pub const ALL: [Unit; 2] = [Unit::F, Unit::C];

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::F => "F",
            Unit::C => "C",
        }
    }
}

// Shown in the settings pick list
impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::F => f.write_str("Fahrenheit"),
            Unit::C => f.write_str("Celsius"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyPoint {
    pub time: &'static str,
    pub temp_f: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPoint {
    pub day: &'static str,
    pub temp_f: i32,
    pub humidity_pct: u32,
    pub wind_mph: u32,
}

pub const HOURLY: [HourlyPoint; 8] = [
    HourlyPoint { time: "12AM", temp_f: 68 },
    HourlyPoint { time: "3AM", temp_f: 65 },
    HourlyPoint { time: "6AM", temp_f: 67 },
    HourlyPoint { time: "9AM", temp_f: 72 },
    HourlyPoint { time: "12PM", temp_f: 76 },
    HourlyPoint { time: "3PM", temp_f: 78 },
    HourlyPoint { time: "6PM", temp_f: 75 },
    HourlyPoint { time: "9PM", temp_f: 71 },
];

pub const DAILY: [DailyPoint; 7] = [
    DailyPoint { day: "Mon", temp_f: 72, humidity_pct: 30, wind_mph: 5 },
    DailyPoint { day: "Tue", temp_f: 75, humidity_pct: 35, wind_mph: 7 },
    DailyPoint { day: "Wed", temp_f: 70, humidity_pct: 40, wind_mph: 6 },
    DailyPoint { day: "Thu", temp_f: 73, humidity_pct: 38, wind_mph: 8 },
    DailyPoint { day: "Fri", temp_f: 76, humidity_pct: 32, wind_mph: 5 },
    DailyPoint { day: "Sat", temp_f: 74, humidity_pct: 36, wind_mph: 6 },
    DailyPoint { day: "Sun", temp_f: 71, humidity_pct: 39, wind_mph: 7 },
];

// Fixed readings shown on the current-conditions card
pub const CURRENT_WIND_MPH: u32 = 5;
pub const CURRENT_HUMIDITY_PCT: u32 = 30;

/// Range of simulated temperatures, in Fahrenheit
pub const SIMULATED_TEMP_RANGE: std::ops::RangeInclusive<i32> = 50..=79;

pub fn random_temperature(rng: &mut impl Rng) -> i32 {
    rng.gen_range(SIMULATED_TEMP_RANGE)
}

// Convert a stored Fahrenheit value to the display unit
pub fn convert(temp_f: i32, unit: Unit) -> i32 {
    match unit {
        Unit::F => temp_f,
        Unit::C => ((temp_f as f64 - 32.0) * 5.0 / 9.0).round() as i32,
    }
}

pub fn format_temperature(temp_f: i32, unit: Unit) -> String {
    format!("{}°{}", convert(temp_f, unit), unit.symbol())
}
