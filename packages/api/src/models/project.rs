use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{lenient_date, nullable, nullable_or_true, RecordId};

/// Status values the API accepts, in display order.
pub const PROJECT_STATUSES: [&str; 3] = ["En cours", "Terminé", "Archivé"];

/// Project categories the API accepts, in display order.
pub const PROJECT_TYPES: [&str; 4] = ["Personnel", "Professionnel", "Open Source", "Autre"];

/// Separator between URLs in [`Project::other_images`].
pub const IMAGE_DELIMITER: &str = "|£|";

/// A portfolio project as served by `/api/projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    /// Comma-separated technology names.
    #[serde(default, deserialize_with = "nullable")]
    pub technologies: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: String,
    #[serde(default, with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub cover_image: String,
    /// Extra image URLs joined by [`IMAGE_DELIMITER`].
    #[serde(default, deserialize_with = "nullable")]
    pub other_images: String,
    #[serde(default, deserialize_with = "nullable")]
    pub live_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub repository_url: String,
    #[serde(default = "default_public", deserialize_with = "nullable_or_true")]
    pub is_public: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub client: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: String,
}

fn default_public() -> bool {
    true
}

impl Default for Project {
    fn default() -> Self {
        Self::blank()
    }
}

impl Project {
    /// Empty form state for "add project": public, no dates.
    pub fn blank() -> Self {
        Self {
            id: None,
            title: String::new(),
            subtitle: String::new(),
            description: String::new(),
            technologies: String::new(),
            status: String::new(),
            kind: String::new(),
            start_date: None,
            end_date: None,
            cover_image: String::new(),
            other_images: String::new(),
            live_url: String::new(),
            repository_url: String::new(),
            is_public: default_public(),
            client: String::new(),
            tags: String::new(),
        }
    }

    pub fn status(&self) -> Option<ProjectStatus> {
        ProjectStatus::parse(&self.status)
    }
}

/// The fixed set of project statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    InProgress,
    Done,
    Archived,
}

impl ProjectStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "En cours" => Some(ProjectStatus::InProgress),
            "Terminé" => Some(ProjectStatus::Done),
            "Archivé" => Some(ProjectStatus::Archived),
            _ => None,
        }
    }

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => PROJECT_STATUSES[0],
            ProjectStatus::Done => PROJECT_STATUSES[1],
            ProjectStatus::Archived => PROJECT_STATUSES[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_nulls_and_datetime() {
        let project: Project = serde_json::from_str(
            r#"{"id":3,"title":"Portfolio","subtitle":null,"technologies":"Rust, Dioxus",
                "status":"En cours","type":"Personnel","startDate":"2024-01-15T00:00:00",
                "endDate":null,"isPublic":false,"tags":null}"#,
        )
        .unwrap();
        assert_eq!(project.id, Some(RecordId::Number(3)));
        assert_eq!(project.subtitle, "");
        assert_eq!(project.kind, "Personnel");
        assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(project.end_date, None);
        assert!(!project.is_public);
        assert_eq!(project.status(), Some(ProjectStatus::InProgress));
    }

    #[test]
    fn test_serialize_uses_api_field_names() {
        let project = Project {
            title: "Site".into(),
            kind: "Autre".into(),
            start_date: NaiveDate::from_ymd_opt(2023, 5, 2),
            ..Project::blank()
        };
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["type"], "Autre");
        assert_eq!(json["startDate"], "2023-05-02");
        assert!(json["endDate"].is_null());
        assert_eq!(json["isPublic"], true);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_null_public_flag_reads_as_public() {
        let project: Project =
            serde_json::from_str(r#"{"id":1,"title":"x","isPublic":null}"#).unwrap();
        assert!(project.is_public);

        let hidden: Project =
            serde_json::from_str(r#"{"id":2,"title":"y","isPublic":false}"#).unwrap();
        assert!(!hidden.is_public);
    }

    #[test]
    fn test_unknown_status() {
        assert_eq!(ProjectStatus::parse("Paused"), None);
        assert_eq!(ProjectStatus::Archived.as_str(), "Archivé");
    }
}
