// Dashboard widget view models
use serde::Serialize;

use crate::domain::correlate::CorrelatedRow;
use crate::domain::sample::{DateLabel, Metric, MotorState, WeatherCondition};
use crate::domain::window::RangeToken;

/// Headline statistic tile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub value: f64,
    pub precision: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deviation_pct: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<usize>,
}

impl StatCard {
    pub fn new(id: impl Into<String>, title: impl Into<String>, metric: Metric, value: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            unit: metric.unit().to_string(),
            value,
            precision: metric.decimals(),
            deviation_pct: None,
            average: None,
            sample_count: None,
        }
    }

    pub fn with_deviation(mut self, deviation_pct: i64) -> Self {
        self.deviation_pct = Some(deviation_pct);
        self
    }

    pub fn with_average(mut self, average: f64) -> Self {
        self.average = Some(average);
        self
    }

    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = Some(count);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    MultiLine,
    Bar,
}

/// Chart widget: joined rows plus the metrics plotted from them, primary
/// metric first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub metrics: Vec<Metric>,
    pub rows: Vec<CorrelatedRow>,
}

impl Chart {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ChartKind,
        metrics: Vec<Metric>,
        rows: Vec<CorrelatedRow>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            metrics,
            rows,
        }
    }
}

/// Tabular widget over the same joined-row shape the charts use.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub title: String,
    pub metrics: Vec<Metric>,
    pub rows: Vec<CorrelatedRow>,
}

impl Table {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        metrics: Vec<Metric>,
        rows: Vec<CorrelatedRow>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            metrics,
            rows,
        }
    }
}

/// Latest stormwater-well reading inside the selected window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WellStatus {
    pub date: DateLabel,
    #[serde(rename = "level")]
    pub level_cm: f64,
    #[serde(rename = "motorStatus")]
    pub motor: MotorState,
}

/// Most recent weather reading, shown as the conditions banner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: f64,
    pub condition: WeatherCondition,
    pub wind_speed: f64,
    pub humidity: f64,
    pub precipitation: f64,
}

/// Fully composed dashboard payload for one view and range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: String,
    pub range: RangeToken,
    pub cards: Vec<StatCard>,
    pub charts: Vec<Chart>,
    pub tables: Vec<Table>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub well: Option<WellStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<CurrentConditions>,
}

impl Dashboard {
    pub fn new(title: impl Into<String>, range: RangeToken) -> Self {
        Self {
            title: title.into(),
            range,
            cards: Vec::new(),
            charts: Vec::new(),
            tables: Vec::new(),
            well: None,
            conditions: None,
        }
    }

    pub fn widget_count(&self) -> usize {
        self.cards.len()
            + self.charts.len()
            + self.tables.len()
            + self.well.iter().count()
            + self.conditions.iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_takes_unit_and_precision_from_metric() {
        let card = StatCard::new("energy-current", "Current Usage", Metric::EnergyUsage, 42.0);
        assert_eq!(card.unit, "kWh");
        assert_eq!(card.precision, 0);

        let probe = StatCard::new("do-current", "Dissolved Oxygen", Metric::DissolvedOxygen, 7.31);
        assert_eq!(probe.unit, "mg/L");
        assert_eq!(probe.precision, 2);
    }

    #[test]
    fn test_chart_kind_wire_names() {
        assert_eq!(serde_json::to_string(&ChartKind::Line).unwrap(), "\"line\"");
        assert_eq!(
            serde_json::to_string(&ChartKind::MultiLine).unwrap(),
            "\"multiLine\""
        );
        assert_eq!(serde_json::to_string(&ChartKind::Bar).unwrap(), "\"bar\"");
    }

    #[test]
    fn test_card_omits_absent_stats() {
        let bare = StatCard::new("water-current", "Current Usage", Metric::WaterUsage, 180.0);
        let value = serde_json::to_value(&bare).unwrap();
        assert!(value.get("deviationPct").is_none());
        assert!(value.get("average").is_none());

        let enriched = bare.with_deviation(-12).with_average(205.0);
        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["deviationPct"], -12);
        assert_eq!(value["average"], 205.0);
    }

    #[test]
    fn test_widget_count_spans_all_sections() {
        let mut dashboard = Dashboard::new("Campus Overview", RangeToken::Day7);
        assert_eq!(dashboard.widget_count(), 0);

        dashboard
            .cards
            .push(StatCard::new("energy", "Energy", Metric::EnergyUsage, 1.0));
        dashboard.charts.push(Chart::new(
            "energy-trend",
            "Energy Trend",
            ChartKind::Line,
            vec![Metric::EnergyUsage],
            Vec::new(),
        ));
        dashboard.conditions = Some(CurrentConditions {
            temperature: 21.0,
            condition: WeatherCondition::Sunny,
            wind_speed: 10.0,
            humidity: 50.0,
            precipitation: 5.0,
        });

        assert_eq!(dashboard.widget_count(), 3);
    }
}
