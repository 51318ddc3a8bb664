// Streaming dashboard service - Progressive dashboard loading over NDJSON
use std::time::Instant;

use serde::Serialize;
use tokio::sync::mpsc;

use crate::application::dashboard_service::{DashboardService, DashboardView};
use crate::domain::dashboard::{Chart, CurrentConditions, StatCard, Table, WellStatus};
use crate::domain::window::RangeToken;

const CHANNEL_CAPACITY: usize = 100;

/// One frame in a dashboard stream.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StreamEvent {
    #[serde(rename_all = "camelCase")]
    Skeleton {
        view: DashboardView,
        title: String,
        range: RangeToken,
        widgets: usize,
    },
    Card {
        card: StatCard,
    },
    Chart {
        chart: Chart,
    },
    Table {
        table: Table,
    },
    Well {
        well: WellStatus,
    },
    Conditions {
        conditions: CurrentConditions,
    },
    #[serde(rename_all = "camelCase")]
    Complete {
        widgets: usize,
        elapsed_ms: i64,
    },
}

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboards: DashboardService,
}

impl StreamingDashboardService {
    pub fn new(dashboards: DashboardService) -> Self {
        Self { dashboards }
    }

    /// Builds the view and replays it frame by frame: skeleton first, then
    /// every widget in composition order, then a completion frame carrying
    /// the widget count and elapsed time.
    pub fn stream(
        &self,
        view: DashboardView,
        range: RangeToken,
        now_ms: i64,
    ) -> mpsc::Receiver<StreamEvent> {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let dashboards = self.dashboards.clone();

        tokio::spawn(async move {
            let start = Instant::now();
            let dashboard = match dashboards.build(view, range, now_ms).await {
                Ok(dashboard) => dashboard,
                Err(error) => {
                    tracing::error!("failed to build {} stream: {error:#}", view.slug());
                    return;
                }
            };

            let widgets = dashboard.widget_count();
            let skeleton = StreamEvent::Skeleton {
                view,
                title: dashboard.title.clone(),
                range,
                widgets,
            };
            if tx.send(skeleton).await.is_err() {
                return;
            }

            for card in dashboard.cards {
                if tx.send(StreamEvent::Card { card }).await.is_err() {
                    return;
                }
            }
            for chart in dashboard.charts {
                if tx.send(StreamEvent::Chart { chart }).await.is_err() {
                    return;
                }
            }
            for table in dashboard.tables {
                if tx.send(StreamEvent::Table { table }).await.is_err() {
                    return;
                }
            }
            if let Some(well) = dashboard.well {
                if tx.send(StreamEvent::Well { well }).await.is_err() {
                    return;
                }
            }
            if let Some(conditions) = dashboard.conditions {
                if tx
                    .send(StreamEvent::Conditions { conditions })
                    .await
                    .is_err()
                {
                    return;
                }
            }

            let complete = StreamEvent::Complete {
                widgets,
                elapsed_ms: start.elapsed().as_millis() as i64,
            };
            let _ = tx.send(complete).await;
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sample_source::SampleSource;
    use crate::domain::campus::{Room, RoomSnapshot};
    use crate::domain::sample::{
        EnvironmentSample, StormwaterSample, WaterQualitySample, WeatherCondition,
    };
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::Arc;

    struct StubSource;

    fn base_time() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 17, 12, 0, 0).unwrap()
    }

    #[async_trait]
    impl SampleSource for StubSource {
        async fn environment_samples(&self) -> anyhow::Result<Vec<EnvironmentSample>> {
            Ok((0..3)
                .map(|i| {
                    EnvironmentSample::new(
                        base_time() - Duration::days(2 - i),
                        180.0,
                        40.0 + i as f64,
                        21.0,
                        50.0,
                        10.0,
                        WeatherCondition::Sunny,
                        15.0,
                    )
                })
                .collect())
        }

        async fn water_quality_samples(&self) -> anyhow::Result<Vec<WaterQualitySample>> {
            Ok(Vec::new())
        }

        async fn stormwater_samples(&self) -> anyhow::Result<Vec<StormwaterSample>> {
            Ok(Vec::new())
        }

        async fn room_snapshot(&self, _room: &Room) -> anyhow::Result<RoomSnapshot> {
            Err(anyhow::anyhow!("no rooms in this fixture"))
        }
    }

    #[tokio::test]
    async fn test_stream_replays_skeleton_widgets_then_complete() {
        let service =
            StreamingDashboardService::new(DashboardService::new(Arc::new(StubSource)));
        let mut rx = service.stream(
            DashboardView::Overview,
            RangeToken::Day7,
            base_time().timestamp_millis(),
        );

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }

        let Some(StreamEvent::Skeleton { widgets, title, .. }) = events.first() else {
            panic!("first frame was not a skeleton");
        };
        assert_eq!(title, "Campus Overview (Last 7 Days)");
        assert_eq!(*widgets, events.len() - 2);

        let Some(StreamEvent::Complete {
            widgets: completed, ..
        }) = events.last()
        else {
            panic!("last frame was not a completion");
        };
        assert_eq!(completed, widgets);
    }

    #[tokio::test]
    async fn test_frames_serialize_with_type_tags() {
        let complete = StreamEvent::Complete {
            widgets: 9,
            elapsed_ms: 12,
        };
        let value = serde_json::to_value(&complete).unwrap();
        assert_eq!(value["type"], "complete");
        assert_eq!(value["widgets"], 9);
        assert_eq!(value["elapsedMs"], 12);

        let skeleton = StreamEvent::Skeleton {
            view: DashboardView::Water,
            title: "Water Management (Last 7 Days)".to_string(),
            range: RangeToken::Day7,
            widgets: 11,
        };
        let value = serde_json::to_value(&skeleton).unwrap();
        assert_eq!(value["type"], "skeleton");
        assert_eq!(value["view"], "water");
        assert_eq!(value["range"], "7d");
    }
}
