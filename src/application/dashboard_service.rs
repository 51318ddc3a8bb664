// Dashboard service - Use case for composing dashboard views
use std::sync::Arc;

use serde::Serialize;

use crate::application::sample_source::SampleSource;
use crate::domain::correlate::{join_by_date, rows_from_samples, LabeledSeries};
use crate::domain::dashboard::{
    Chart, ChartKind, CurrentConditions, Dashboard, StatCard, Table, WellStatus,
};
use crate::domain::filter::filter_window;
use crate::domain::rollup::rollup;
use crate::domain::sample::Metric;
use crate::domain::window::RangeToken;

const TABLE_ROWS: usize = 7;
const QUALITY_TABLE_ROWS: usize = 10;

/// Dashboard views served by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Overview,
    Energy,
    Water,
    Weather,
}

impl DashboardView {
    pub const ALL: [DashboardView; 4] = [
        DashboardView::Overview,
        DashboardView::Energy,
        DashboardView::Water,
        DashboardView::Weather,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "overview" => Some(DashboardView::Overview),
            "energy" => Some(DashboardView::Energy),
            "water" => Some(DashboardView::Water),
            "weather" => Some(DashboardView::Weather),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            DashboardView::Overview => "overview",
            DashboardView::Energy => "energy",
            DashboardView::Water => "water",
            DashboardView::Weather => "weather",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardView::Overview => "Campus Overview",
            DashboardView::Energy => "Energy Management",
            DashboardView::Water => "Water Management",
            DashboardView::Weather => "Weather Station",
        }
    }
}

fn titled(view: DashboardView, range: RangeToken) -> Dashboard {
    Dashboard::new(format!("{} ({})", view.title(), range.label()), range)
}

/// Trailing slice used by the "recent readings" widgets.
fn tail<S>(samples: &[S], count: usize) -> &[S] {
    &samples[samples.len().saturating_sub(count)..]
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn SampleSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn SampleSource>) -> Self {
        Self { source }
    }

    pub async fn build(
        &self,
        view: DashboardView,
        range: RangeToken,
        now_ms: i64,
    ) -> anyhow::Result<Dashboard> {
        match view {
            DashboardView::Overview => self.build_overview(range, now_ms).await,
            DashboardView::Energy => self.build_energy(range, now_ms).await,
            DashboardView::Water => self.build_water(range, now_ms).await,
            DashboardView::Weather => self.build_weather(range, now_ms).await,
        }
    }

    async fn build_overview(&self, range: RangeToken, now_ms: i64) -> anyhow::Result<Dashboard> {
        let environment = self.source.environment_samples().await?;
        let windowed = filter_window(&environment, range, now_ms);

        let energy = rollup(&windowed, Metric::EnergyUsage);
        let water = rollup(&windowed, Metric::WaterUsage);
        let temperature = rollup(&windowed, Metric::Temperature);
        let humidity = rollup(&windowed, Metric::Humidity);

        let mut dashboard = titled(DashboardView::Overview, range);
        dashboard.cards = vec![
            StatCard::new("energy-usage", "Energy Usage", Metric::EnergyUsage, energy.latest)
                .with_deviation(energy.percent_deviation)
                .with_average(energy.average),
            StatCard::new("water-usage", "Water Usage", Metric::WaterUsage, water.latest)
                .with_deviation(water.percent_deviation)
                .with_average(water.average),
            StatCard::new(
                "temperature",
                "Temperature",
                Metric::Temperature,
                temperature.latest,
            ),
            StatCard::new("humidity", "Humidity", Metric::Humidity, humidity.latest),
        ];

        dashboard.charts = vec![
            Chart::new(
                "energy-trend",
                "Energy Consumption",
                ChartKind::Line,
                vec![Metric::EnergyUsage],
                rows_from_samples(&windowed, &[Metric::EnergyUsage]),
            ),
            Chart::new(
                "water-trend",
                "Water Consumption",
                ChartKind::Line,
                vec![Metric::WaterUsage],
                rows_from_samples(&windowed, &[Metric::WaterUsage]),
            ),
            Chart::new(
                "water-vs-energy",
                "Water vs Energy",
                ChartKind::Bar,
                vec![Metric::WaterUsage, Metric::EnergyUsage],
                rows_from_samples(&windowed, &[Metric::WaterUsage, Metric::EnergyUsage]),
            ),
        ];

        let table_metrics = vec![
            Metric::EnergyUsage,
            Metric::WaterUsage,
            Metric::Temperature,
            Metric::WindSpeed,
        ];
        dashboard.tables = vec![Table::new(
            "recent-readings",
            "Recent Readings",
            table_metrics.clone(),
            rows_from_samples(tail(&windowed, TABLE_ROWS), &table_metrics),
        )];

        Ok(dashboard)
    }

    async fn build_energy(&self, range: RangeToken, now_ms: i64) -> anyhow::Result<Dashboard> {
        let environment = self.source.environment_samples().await?;
        let windowed = filter_window(&environment, range, now_ms);
        let energy = rollup(&windowed, Metric::EnergyUsage);

        let mut dashboard = titled(DashboardView::Energy, range);
        dashboard.cards = vec![
            StatCard::new(
                "energy-current",
                "Current Usage",
                Metric::EnergyUsage,
                energy.latest,
            )
            .with_deviation(energy.percent_deviation),
            StatCard::new(
                "energy-average",
                "Average Usage",
                Metric::EnergyUsage,
                energy.average,
            )
            .with_sample_count(windowed.len()),
            StatCard::new(
                "energy-projected",
                "Projected Monthly",
                Metric::EnergyUsage,
                energy.monthly_projection as f64,
            ),
        ];

        dashboard.charts = vec![
            Chart::new(
                "energy-trend",
                "Energy Consumption",
                ChartKind::Line,
                vec![Metric::EnergyUsage],
                rows_from_samples(&windowed, &[Metric::EnergyUsage]),
            ),
            Chart::new(
                "energy-vs-temperature",
                "Usage vs Temperature",
                ChartKind::MultiLine,
                vec![Metric::EnergyUsage, Metric::Temperature],
                rows_from_samples(&windowed, &[Metric::EnergyUsage, Metric::Temperature]),
            ),
            Chart::new(
                "energy-daily",
                "Daily Usage",
                ChartKind::Bar,
                vec![Metric::EnergyUsage],
                rows_from_samples(tail(&windowed, TABLE_ROWS), &[Metric::EnergyUsage]),
            ),
        ];

        dashboard.tables = vec![Table::new(
            "energy-readings",
            "Recent Readings",
            vec![Metric::EnergyUsage, Metric::Temperature],
            rows_from_samples(
                tail(&windowed, TABLE_ROWS),
                &[Metric::EnergyUsage, Metric::Temperature],
            ),
        )];

        Ok(dashboard)
    }

    async fn build_water(&self, range: RangeToken, now_ms: i64) -> anyhow::Result<Dashboard> {
        let environment = self.source.environment_samples().await?;
        let quality = self.source.water_quality_samples().await?;
        let stormwater = self.source.stormwater_samples().await?;

        let windowed = filter_window(&environment, range, now_ms);
        let windowed_storm = filter_window(&stormwater, range, now_ms);

        let water = rollup(&windowed, Metric::WaterUsage);
        // The probe log is a single-day capture, so its stats cover the whole
        // log instead of the selected window.
        let oxygen = rollup(&quality, Metric::DissolvedOxygen);
        let ph = rollup(&quality, Metric::Ph);
        let turbidity = rollup(&quality, Metric::Turbidity);

        let mut dashboard = titled(DashboardView::Water, range);
        dashboard.cards = vec![
            StatCard::new(
                "water-current",
                "Current Usage",
                Metric::WaterUsage,
                water.latest,
            )
            .with_deviation(water.percent_deviation),
            StatCard::new(
                "water-average",
                "Average Usage",
                Metric::WaterUsage,
                water.average,
            )
            .with_sample_count(windowed.len()),
            StatCard::new(
                "water-projected",
                "Projected Monthly",
                Metric::WaterUsage,
                water.monthly_projection as f64,
            ),
            StatCard::new(
                "do-level",
                "Dissolved Oxygen",
                Metric::DissolvedOxygen,
                oxygen.latest,
            )
            .with_average(oxygen.average)
            .with_sample_count(quality.len()),
            StatCard::new("ph-level", "pH", Metric::Ph, ph.latest)
                .with_average(ph.average)
                .with_sample_count(quality.len()),
            StatCard::new(
                "turbidity-level",
                "Turbidity",
                Metric::Turbidity,
                turbidity.latest,
            )
            .with_average(turbidity.average)
            .with_sample_count(quality.len()),
        ];

        let well_levels = LabeledSeries::from_samples(Metric::WellLevel, &windowed_storm);
        dashboard.charts = vec![
            Chart::new(
                "water-trend",
                "Water Consumption",
                ChartKind::Line,
                vec![Metric::WaterUsage],
                rows_from_samples(&windowed, &[Metric::WaterUsage]),
            ),
            Chart::new(
                "water-vs-well",
                "Usage vs Well Level",
                ChartKind::MultiLine,
                vec![Metric::WaterUsage, Metric::WellLevel],
                join_by_date(Metric::WaterUsage, &windowed, &[well_levels]),
            ),
            Chart::new(
                "quality-trend",
                "Probe Readings",
                ChartKind::MultiLine,
                vec![Metric::DissolvedOxygen, Metric::Ph, Metric::Turbidity],
                rows_from_samples(
                    &quality,
                    &[Metric::DissolvedOxygen, Metric::Ph, Metric::Turbidity],
                ),
            ),
        ];

        let log_metrics = vec![
            Metric::DissolvedOxygen,
            Metric::Ph,
            Metric::Turbidity,
            Metric::BatteryVoltage,
        ];
        dashboard.tables = vec![Table::new(
            "quality-log",
            "Probe Log",
            log_metrics.clone(),
            rows_from_samples(tail(&quality, QUALITY_TABLE_ROWS), &log_metrics),
        )];

        dashboard.well = windowed_storm.last().map(|sample| WellStatus {
            date: sample.date.clone(),
            level_cm: sample.level_cm,
            motor: sample.motor,
        });

        Ok(dashboard)
    }

    async fn build_weather(&self, range: RangeToken, now_ms: i64) -> anyhow::Result<Dashboard> {
        let environment = self.source.environment_samples().await?;
        let windowed = filter_window(&environment, range, now_ms);

        let temperature = rollup(&windowed, Metric::Temperature);
        let humidity = rollup(&windowed, Metric::Humidity);
        let wind = rollup(&windowed, Metric::WindSpeed);

        let mut dashboard = titled(DashboardView::Weather, range);
        dashboard.cards = vec![
            StatCard::new(
                "temperature",
                "Temperature",
                Metric::Temperature,
                temperature.latest,
            )
            .with_average(temperature.average),
            StatCard::new("humidity", "Humidity", Metric::Humidity, humidity.latest)
                .with_average(humidity.average),
            StatCard::new("wind-speed", "Wind Speed", Metric::WindSpeed, wind.latest)
                .with_average(wind.average),
        ];

        dashboard.charts = vec![
            Chart::new(
                "temperature-history",
                "Temperature",
                ChartKind::Line,
                vec![Metric::Temperature],
                rows_from_samples(&windowed, &[Metric::Temperature]),
            ),
            Chart::new(
                "humidity-history",
                "Humidity",
                ChartKind::Line,
                vec![Metric::Humidity],
                rows_from_samples(&windowed, &[Metric::Humidity]),
            ),
            Chart::new(
                "wind-history",
                "Wind Speed",
                ChartKind::Line,
                vec![Metric::WindSpeed],
                rows_from_samples(&windowed, &[Metric::WindSpeed]),
            ),
            Chart::new(
                "precipitation",
                "Precipitation",
                ChartKind::Bar,
                vec![Metric::Precipitation],
                rows_from_samples(&windowed, &[Metric::Precipitation]),
            ),
        ];

        dashboard.conditions = windowed.last().map(|sample| CurrentConditions {
            temperature: sample.temperature,
            condition: sample.weather_condition,
            wind_speed: sample.wind_speed,
            humidity: sample.humidity,
            precipitation: sample.precipitation,
        });

        Ok(dashboard)
    }
}
