// Telemetry sample domain models
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Calendar label shared across domains, e.g. "Feb 17".
///
/// Streams are sampled at different cadences, so charts and joins align them
/// by this label rather than by raw timestamp equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DateLabel(String);

impl DateLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Label for a UTC instant, in the "Feb 17" form the dashboards use.
    pub fn from_datetime(at: &DateTime<Utc>) -> Self {
        Self(at.format("%b %-d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Field selector naming one numeric attribute across the telemetry domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    EnergyUsage,
    WaterUsage,
    Temperature,
    Humidity,
    WindSpeed,
    Precipitation,
    DissolvedOxygen,
    Ph,
    Turbidity,
    BatteryVoltage,
    WellLevel,
}

impl Metric {
    /// Decimal places used when rounding derived statistics for this field.
    /// Utility quantities are integral; probe metrics keep their native
    /// resolution.
    pub fn decimals(&self) -> i32 {
        match self {
            Metric::EnergyUsage
            | Metric::WaterUsage
            | Metric::Humidity
            | Metric::WindSpeed
            | Metric::Precipitation
            | Metric::WellLevel => 0,
            Metric::Temperature | Metric::Turbidity => 1,
            Metric::DissolvedOxygen | Metric::Ph => 2,
            Metric::BatteryVoltage => 3,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::EnergyUsage => "kWh",
            Metric::WaterUsage => "L",
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::WindSpeed => "km/h",
            Metric::Precipitation => "%",
            Metric::DissolvedOxygen => "mg/L",
            Metric::Ph => "",
            Metric::Turbidity => "NTU",
            Metric::BatteryVoltage => "V",
            Metric::WellLevel => "cm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeatherCondition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    #[serde(rename = "Light Rain")]
    LightRain,
    Rainy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 5] = [
        WeatherCondition::Sunny,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Cloudy,
        WeatherCondition::LightRain,
        WeatherCondition::Rainy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::LightRain => "Light Rain",
            WeatherCondition::Rainy => "Rainy",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MotorState {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl MotorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotorState::On => "ON",
            MotorState::Off => "OFF",
        }
    }
}

impl fmt::Display for MotorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared view over domain samples.
///
/// Every stream the engine touches exposes an instant, a calendar label and
/// a set of numeric fields. A metric the domain does not carry is `None` and
/// drops out of every statistic computed from it.
pub trait Sample {
    fn timestamp_ms(&self) -> i64;
    fn date(&self) -> &DateLabel;
    fn value_of(&self, metric: Metric) -> Option<f64>;
}

/// One environment/utility reading (daily cadence in the demo source).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSample {
    pub date: DateLabel,
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
    pub water_usage: f64,
    pub energy_usage: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub weather_condition: WeatherCondition,
    pub precipitation: f64,
}

impl EnvironmentSample {
    pub fn new(
        at: DateTime<Utc>,
        water_usage: f64,
        energy_usage: f64,
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        weather_condition: WeatherCondition,
        precipitation: f64,
    ) -> Self {
        Self {
            date: DateLabel::from_datetime(&at),
            timestamp_ms: at.timestamp_millis(),
            water_usage,
            energy_usage,
            temperature,
            humidity,
            wind_speed,
            weather_condition,
            precipitation,
        }
    }
}

impl Sample for EnvironmentSample {
    fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    fn date(&self) -> &DateLabel {
        &self.date
    }

    fn value_of(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::EnergyUsage => Some(self.energy_usage),
            Metric::WaterUsage => Some(self.water_usage),
            Metric::Temperature => Some(self.temperature),
            Metric::Humidity => Some(self.humidity),
            Metric::WindSpeed => Some(self.wind_speed),
            Metric::Precipitation => Some(self.precipitation),
            _ => None,
        }
    }
}

/// One water-quality probe reading (20-minute cadence in the device log).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterQualitySample {
    pub date: DateLabel,
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
    pub dissolved_oxygen: f64,
    pub ph: f64,
    pub turbidity: f64,
    pub battery_voltage: f64,
}

impl WaterQualitySample {
    pub fn new(
        at: DateTime<Utc>,
        dissolved_oxygen: f64,
        ph: f64,
        turbidity: f64,
        battery_voltage: f64,
    ) -> Self {
        Self {
            date: DateLabel::from_datetime(&at),
            timestamp_ms: at.timestamp_millis(),
            dissolved_oxygen,
            ph,
            turbidity,
            battery_voltage,
        }
    }
}

impl Sample for WaterQualitySample {
    fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    fn date(&self) -> &DateLabel {
        &self.date
    }

    fn value_of(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::DissolvedOxygen => Some(self.dissolved_oxygen),
            Metric::Ph => Some(self.ph),
            Metric::Turbidity => Some(self.turbidity),
            Metric::BatteryVoltage => Some(self.battery_voltage),
            _ => None,
        }
    }
}

/// One stormwater-well reading (daily cadence in the demo source).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StormwaterSample {
    pub date: DateLabel,
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
    #[serde(rename = "level")]
    pub level_cm: f64,
    #[serde(rename = "motorStatus")]
    pub motor: MotorState,
}

impl StormwaterSample {
    pub fn new(at: DateTime<Utc>, level_cm: f64, motor: MotorState) -> Self {
        Self {
            date: DateLabel::from_datetime(&at),
            timestamp_ms: at.timestamp_millis(),
            level_cm,
            motor,
        }
    }
}

impl Sample for StormwaterSample {
    fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    fn date(&self) -> &DateLabel {
        &self.date
    }

    fn value_of(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::WellLevel => Some(self.level_cm),
            _ => None,
        }
    }
}
