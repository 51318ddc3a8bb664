// Synthetic sample source - demo telemetry backing the dashboards
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::application::sample_source::SampleSource;
use crate::domain::campus::{Room, RoomSnapshot};
use crate::domain::rollup::round_to;
use crate::domain::sample::{
    EnvironmentSample, MotorState, StormwaterSample, WaterQualitySample, WeatherCondition,
};
use crate::infrastructure::config::DemoSettings;

/// Water-quality probe capture from 17 Feb 2025, newest row first:
/// (timestamp, battery V, dissolved oxygen mg/L, pH, turbidity NTU).
const PROBE_LOG: [(&str, f64, f64, f64, f64); 26] = [
    ("17-02-2025 23:59:25", 3.936, 8.21, 7.84, 97.9),
    ("17-02-2025 23:39:25", 3.936, 7.88, 7.84, 97.5),
    ("17-02-2025 23:19:26", 3.936, 7.91, 7.85, 97.2),
    ("17-02-2025 22:59:26", 3.936, 8.05, 7.83, 95.3),
    ("17-02-2025 22:39:26", 3.936, 7.81, 7.82, 94.3),
    ("17-02-2025 22:19:27", 3.936, 7.73, 7.83, 94.0),
    ("17-02-2025 21:59:27", 3.942, 7.7, 7.83, 93.0),
    ("17-02-2025 21:39:27", 3.942, 7.64, 7.83, 92.4),
    ("17-02-2025 21:19:28", 3.942, 7.7, 7.83, 92.4),
    ("17-02-2025 20:59:28", 3.948, 7.74, 7.82, 99.1),
    ("17-02-2025 20:39:28", 3.948, 7.76, 7.82, 91.1),
    ("17-02-2025 20:19:29", 3.942, 7.76, 7.82, 94.0),
    ("17-02-2025 19:59:29", 3.942, 7.75, 7.82, 90.2),
    ("17-02-2025 19:39:29", 3.948, 7.79, 7.81, 90.5),
    ("17-02-2025 19:19:30", 3.948, 7.83, 7.81, 90.8),
    ("17-02-2025 18:59:30", 3.948, 7.81, 7.8, 88.9),
    ("17-02-2025 18:39:30", 3.948, 7.8, 7.81, 87.9),
    ("17-02-2025 18:19:31", 3.948, 7.76, 7.8, 88.2),
    ("17-02-2025 17:59:31", 3.948, 7.47, 7.79, 88.2),
    ("17-02-2025 17:39:31", 3.948, 7.65, 7.79, 87.6),
    ("17-02-2025 17:19:31", 3.954, 7.56, 7.79, 86.9),
    ("17-02-2025 16:59:32", 3.954, 7.48, 7.8, 86.6),
    ("17-02-2025 16:39:32", 3.948, 7.45, 7.82, 87.9),
    ("17-02-2025 16:19:32", 3.948, 7.4, 7.78, 87.6),
    ("17-02-2025 15:59:33", 3.954, 7.34, 7.78, 87.6),
    ("17-02-2025 15:39:33", 3.954, 7.31, 7.78, 88.9),
];

/// Demo source: daily environment and stormwater histories generated at
/// startup plus the fixed probe capture. A configured seed makes every run
/// identical.
pub struct SyntheticSampleSource {
    environment: Vec<EnvironmentSample>,
    quality: Vec<WaterQualitySample>,
    stormwater: Vec<StormwaterSample>,
    seed: Option<u64>,
}

impl SyntheticSampleSource {
    pub fn new(settings: &DemoSettings, now: DateTime<Utc>) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            environment: generate_environment(&mut rng, settings.history_days, now),
            quality: probe_log(),
            stormwater: generate_stormwater(&mut rng, settings.history_days, now),
            seed: settings.seed,
        }
    }

    /// Rooms are sampled on demand; with a fixed seed each room still gets
    /// its own stable stream.
    fn room_rng(&self, room_id: &str) -> StdRng {
        match self.seed {
            Some(seed) => {
                let mut hasher = DefaultHasher::new();
                room_id.hash(&mut hasher);
                StdRng::seed_from_u64(seed ^ hasher.finish())
            }
            None => StdRng::from_entropy(),
        }
    }
}

#[async_trait]
impl SampleSource for SyntheticSampleSource {
    async fn environment_samples(&self) -> anyhow::Result<Vec<EnvironmentSample>> {
        Ok(self.environment.clone())
    }

    async fn water_quality_samples(&self) -> anyhow::Result<Vec<WaterQualitySample>> {
        Ok(self.quality.clone())
    }

    async fn stormwater_samples(&self) -> anyhow::Result<Vec<StormwaterSample>> {
        Ok(self.stormwater.clone())
    }

    async fn room_snapshot(&self, room: &Room) -> anyhow::Result<RoomSnapshot> {
        let mut rng = self.room_rng(&room.id);
        Ok(RoomSnapshot {
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            current_usage_kwh: rng.gen_range(5.0_f64..25.0).round(),
            daily_usage_kwh: rng.gen_range(50.0_f64..150.0).round(),
            weekly_usage_kwh: rng.gen_range(300.0_f64..800.0).round(),
            temperature_c: rng.gen_range(20.0_f64..25.0).round(),
            humidity_pct: rng.gen_range(40.0_f64..70.0).round(),
            occupied: rng.gen_bool(0.5),
            lights_on: rng.gen_bool(0.5),
            ac_on: rng.gen_bool(0.5),
        })
    }
}

fn generate_environment(
    rng: &mut StdRng,
    history_days: u32,
    now: DateTime<Utc>,
) -> Vec<EnvironmentSample> {
    (0..i64::from(history_days))
        .rev()
        .map(|days_back| {
            let at = now - Duration::days(days_back);
            let condition = WeatherCondition::ALL[rng.gen_range(0..WeatherCondition::ALL.len())];
            EnvironmentSample::new(
                at,
                rng.gen_range(150.0_f64..250.0).round(),
                rng.gen_range(20.0_f64..70.0).round(),
                round_to(rng.gen_range(15.0..30.0), 1),
                rng.gen_range(40.0_f64..70.0).round(),
                rng.gen_range(5.0_f64..25.0).round(),
                condition,
                rng.gen_range(0.0_f64..60.0).round(),
            )
        })
        .collect()
}

fn generate_stormwater(
    rng: &mut StdRng,
    history_days: u32,
    now: DateTime<Utc>,
) -> Vec<StormwaterSample> {
    (0..i64::from(history_days))
        .rev()
        .map(|days_back| {
            let at = now - Duration::days(days_back);
            let motor = if rng.gen_bool(0.5) {
                MotorState::On
            } else {
                MotorState::Off
            };
            StormwaterSample::new(at, rng.gen_range(50.0_f64..150.0).round(), motor)
        })
        .collect()
}

/// Parses the capture into ascending samples.
fn probe_log() -> Vec<WaterQualitySample> {
    PROBE_LOG
        .iter()
        .rev()
        .filter_map(|&(stamp, battery, oxygen, ph, turbidity)| {
            NaiveDateTime::parse_from_str(stamp, "%d-%m-%Y %H:%M:%S")
                .ok()
                .map(|naive| {
                    WaterQualitySample::new(naive.and_utc(), oxygen, ph, turbidity, battery)
                })
        })
        .collect()
}
