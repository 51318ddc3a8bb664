// Campus service - Use case for the building management catalog
use std::sync::Arc;

use crate::application::sample_source::SampleSource;
use crate::domain::campus::{Floor, RoomSnapshot};

#[derive(Clone)]
pub struct CampusService {
    floors: Arc<Vec<Floor>>,
    source: Arc<dyn SampleSource>,
}

impl CampusService {
    pub fn new(floors: Vec<Floor>, source: Arc<dyn SampleSource>) -> Self {
        Self {
            floors: Arc::new(floors),
            source,
        }
    }

    /// The floor catalog in display order.
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Live snapshot for a room, or `None` when the id is not in the catalog.
    pub async fn room_status(&self, room_id: &str) -> anyhow::Result<Option<RoomSnapshot>> {
        let room = self.floors.iter().find_map(|floor| floor.room(room_id));
        match room {
            Some(room) => Ok(Some(self.source.room_snapshot(room).await?)),
            None => Ok(None),
        }
    }
}
