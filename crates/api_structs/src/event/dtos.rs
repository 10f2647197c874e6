use chrono::NaiveDate;
use moyeora_domain::{Event, EventKind, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub host_id: ID,
    pub kind: EventKind,
    pub name: String,
    pub date: NaiveDate,
    pub place: String,
    pub created: i64,
    pub updated: i64,
}

impl EventDTO {
    pub fn new(event: Event) -> Self {
        Self {
            id: event.id,
            host_id: event.host_id,
            kind: event.kind,
            name: event.name,
            date: event.date,
            place: event.place,
            created: event.created,
            updated: event.updated,
        }
    }
}
