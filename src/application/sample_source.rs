// Sample source - Port for telemetry stream access
use async_trait::async_trait;

use crate::domain::campus::{Room, RoomSnapshot};
use crate::domain::sample::{EnvironmentSample, StormwaterSample, WaterQualitySample};

/// Port for fetching raw telemetry streams.
///
/// Implementations return whole histories in ascending timestamp order and
/// leave windowing and rollups to the services.
#[async_trait]
pub trait SampleSource: Send + Sync {
    async fn environment_samples(&self) -> anyhow::Result<Vec<EnvironmentSample>>;

    async fn water_quality_samples(&self) -> anyhow::Result<Vec<WaterQualitySample>>;

    async fn stormwater_samples(&self) -> anyhow::Result<Vec<StormwaterSample>>;

    async fn room_snapshot(&self, room: &Room) -> anyhow::Result<RoomSnapshot>;
}
