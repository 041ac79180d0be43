use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{lenient_date, nullable, RecordId};

/// Timeline categories the API accepts, in display order.
pub const TIMELINE_TYPES: [&str; 6] = [
    "EXPÉRIENCE",
    "STAGE",
    "ALTERNANCE",
    "ENSEIGNEMENT",
    "PERSO",
    "AUTRE",
];

/// One milestone on the career timeline (`/api/timelines`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(rename = "titre", default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(rename = "sousTitre", default, deserialize_with = "nullable")]
    pub subtitle: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: String,
    #[serde(default, with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    /// Name of an icon from the icon catalogue, overriding the category icon.
    #[serde(rename = "customIcone", default, skip_serializing_if = "Option::is_none")]
    pub custom_icon: Option<String>,
}

impl TimelineEntry {
    pub fn kind(&self) -> TimelineKind {
        TimelineKind::parse(&self.kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelineKind {
    Experience,
    Internship,
    WorkStudy,
    Teaching,
    Personal,
    Other,
    /// Anything the API sends outside the known set.
    Unknown,
}

impl TimelineKind {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "EXPÉRIENCE" => TimelineKind::Experience,
            "STAGE" => TimelineKind::Internship,
            "ALTERNANCE" => TimelineKind::WorkStudy,
            "ENSEIGNEMENT" => TimelineKind::Teaching,
            "PERSO" => TimelineKind::Personal,
            "AUTRE" => TimelineKind::Other,
            _ => TimelineKind::Unknown,
        }
    }
}
