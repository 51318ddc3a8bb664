// Campus floor and room catalog models
use serde::{Deserialize, Serialize};

/// Room entry in the campus catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
}

/// Floor entry, carrying its rooms in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    pub id: String,
    pub name: String,
    pub rooms: Vec<Room>,
}

impl Floor {
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == room_id)
    }
}

/// Live status snapshot for one room.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub room_id: String,
    pub room_name: String,
    pub current_usage_kwh: f64,
    pub daily_usage_kwh: f64,
    pub weekly_usage_kwh: f64,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub occupied: bool,
    pub lights_on: bool,
    pub ac_on: bool,
}
