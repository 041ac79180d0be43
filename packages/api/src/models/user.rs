//! # User record
//!
//! Mirrors the `/api/users` resource. The API stores the password in clear
//! text and returns it with the list, which is what the login check in
//! [`crate::auth`] relies on.
//!
//! [`User::to_session`] projects a record into the [`store::Session`] kept in
//! local storage; the projection drops the id and the password.

use serde::{Deserialize, Serialize};
use store::Session;

use super::{nullable, nullable_or_true, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "nullable")]
    pub username: String,
    #[serde(default, deserialize_with = "nullable")]
    pub first_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub last_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub password: String,
    #[serde(default = "default_role", deserialize_with = "nullable")]
    pub role: String,
    #[serde(default = "default_active", deserialize_with = "nullable_or_true")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

fn default_role() -> String {
    "USER".to_string()
}

fn default_active() -> bool {
    true
}

impl Default for User {
    fn default() -> Self {
        Self::blank()
    }
}

impl User {
    /// Empty form state for "create account": role `USER`, active.
    pub fn blank() -> Self {
        Self {
            id: None,
            username: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            role: default_role(),
            active: default_active(),
            image_path: None,
        }
    }

    /// Convert to the persisted session shape (no id, no password).
    pub fn to_session(&self) -> Session {
        Session {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            active: self.active,
            image_path: self.image_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_record() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"username":"alacour","firstName":"Alexandre","lastName":"Lacour",
                "email":"a@example.com","password":"secret","role":"ADMIN","active":true,
                "imagePath":null}"#,
        )
        .unwrap();
        assert_eq!(user.id, Some(RecordId::Number(1)));
        assert_eq!(user.first_name, "Alexandre");
        assert_eq!(user.role, "ADMIN");
        assert!(user.image_path.is_none());
    }

    #[test]
    fn test_nulls_and_missing_fields_use_defaults() {
        let user: User =
            serde_json::from_str(r#"{"username":"x","email":null,"role":null}"#).unwrap();
        assert_eq!(user.email, "");
        assert_eq!(user.role, "");
        assert!(user.active);

        let user: User = serde_json::from_str(r#"{"username":"x"}"#).unwrap();
        assert_eq!(user.role, "USER");
    }

    #[test]
    fn test_null_active_flag_reads_as_active() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id":1,"username":"a","active":null},{"id":2,"username":"b","active":false}]"#,
        )
        .unwrap();
        assert!(users[0].active);
        assert!(!users[1].active);
    }

    #[test]
    fn test_blank_user_serializes_without_id() {
        let json = serde_json::to_value(User::blank()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["role"], "USER");
        assert_eq!(json["active"], true);
        assert_eq!(json["firstName"], "");
    }

    #[test]
    fn test_to_session_drops_id_and_password() {
        let user = User {
            id: Some(RecordId::Number(7)),
            username: "alacour".into(),
            password: "hunter2".into(),
            role: "ADMIN".into(),
            ..User::blank()
        };
        let session = user.to_session();
        assert_eq!(session.username, "alacour");
        assert_eq!(session.role, "ADMIN");
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("\"id\""));
    }
}
