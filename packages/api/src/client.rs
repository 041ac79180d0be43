//! # REST client for the portfolio API
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] and a base URL and exposes one
//! method per resource operation. All three resources follow the same
//! conventions:
//!
//! | Verb | Path | Body | Returns |
//! |------|------|------|---------|
//! | `GET` | `/api/{resource}` | — | list (users: bare array, others: [`Page`] envelope) |
//! | `GET` | `/api/{resource}/{id}` | — | one record |
//! | `POST` | `/api/{resource}` | record | created record |
//! | `PUT` | `/api/{resource}/{id}` | record | updated record |
//! | `DELETE` | `/api/{resource}/{id}` | — | nothing |
//!
//! Any non-2xx status becomes [`ApiError::Status`] carrying the response body;
//! a 2xx body that does not match the expected shape becomes
//! [`ApiError::Decode`]. Nothing is retried.
//!
//! The same code runs natively and in the browser: on `wasm32` reqwest goes
//! through `fetch`.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::PortfolioConfig;

use crate::error::ApiError;
use crate::models::{Page, Project, RecordId, TimelineEntry, User};

pub const USERS_PATH: &str = "/api/users";
pub const PROJECTS_PATH: &str = "/api/projects";
pub const TIMELINES_PATH: &str = "/api/timelines";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &PortfolioConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a collection, or for one member when `id` is given.
    pub fn endpoint(&self, path: &str, id: Option<&RecordId>) -> String {
        match id {
            Some(id) => format!("{}{}/{}", self.base_url, path, id),
            None => format!("{}{}", self.base_url, path),
        }
    }

    // -- users --------------------------------------------------------------

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch(self.endpoint(USERS_PATH, None)).await
    }

    pub async fn get_user(&self, id: &RecordId) -> Result<User, ApiError> {
        self.fetch(self.endpoint(USERS_PATH, Some(id))).await
    }

    pub async fn create_user(&self, user: &User) -> Result<User, ApiError> {
        self.send(Method::POST, self.endpoint(USERS_PATH, None), user)
            .await
    }

    pub async fn update_user(&self, id: &RecordId, user: &User) -> Result<User, ApiError> {
        self.send(Method::PUT, self.endpoint(USERS_PATH, Some(id)), user)
            .await
    }

    pub async fn delete_user(&self, id: &RecordId) -> Result<(), ApiError> {
        self.delete(self.endpoint(USERS_PATH, Some(id))).await
    }

    // -- projects -----------------------------------------------------------

    pub async fn list_projects(&self) -> Result<Page<Project>, ApiError> {
        self.fetch(self.endpoint(PROJECTS_PATH, None)).await
    }

    pub async fn get_project(&self, id: &RecordId) -> Result<Project, ApiError> {
        self.fetch(self.endpoint(PROJECTS_PATH, Some(id))).await
    }

    pub async fn create_project(&self, project: &Project) -> Result<Project, ApiError> {
        self.send(Method::POST, self.endpoint(PROJECTS_PATH, None), project)
            .await
    }

    pub async fn update_project(
        &self,
        id: &RecordId,
        project: &Project,
    ) -> Result<Project, ApiError> {
        self.send(Method::PUT, self.endpoint(PROJECTS_PATH, Some(id)), project)
            .await
    }

    pub async fn delete_project(&self, id: &RecordId) -> Result<(), ApiError> {
        self.delete(self.endpoint(PROJECTS_PATH, Some(id))).await
    }

    // -- timelines ----------------------------------------------------------

    pub async fn list_timelines(&self) -> Result<Page<TimelineEntry>, ApiError> {
        self.fetch(self.endpoint(TIMELINES_PATH, None)).await
    }

    pub async fn get_timeline(&self, id: &RecordId) -> Result<TimelineEntry, ApiError> {
        self.fetch(self.endpoint(TIMELINES_PATH, Some(id))).await
    }

    pub async fn create_timeline(&self, entry: &TimelineEntry) -> Result<TimelineEntry, ApiError> {
        self.send(Method::POST, self.endpoint(TIMELINES_PATH, None), entry)
            .await
    }

    pub async fn update_timeline(
        &self,
        id: &RecordId,
        entry: &TimelineEntry,
    ) -> Result<TimelineEntry, ApiError> {
        self.send(Method::PUT, self.endpoint(TIMELINES_PATH, Some(id)), entry)
            .await
    }

    pub async fn delete_timeline(&self, id: &RecordId) -> Result<(), ApiError> {
        self.delete(self.endpoint(TIMELINES_PATH, Some(id))).await
    }

    // -- transport ----------------------------------------------------------

    async fn fetch<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        tracing::debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        decode(&url, response).await
    }

    async fn send<B, T>(&self, method: Method, url: String, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("{method} {url}");
        let response = self.http.request(method, &url).json(body).send().await?;
        decode(&url, response).await
    }

    async fn delete(&self, url: String) -> Result<(), ApiError> {
        tracing::debug!("DELETE {url}");
        let response = self.http.delete(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("DELETE {url} failed with {status}");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        tracing::warn!("{url} failed with {status}");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    serde_json::from_str(&body).map_err(|e| {
        tracing::error!("{url} returned an unexpected body: {e}");
        ApiError::Decode(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::extract::Path;
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn serve(router: Router) -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        ApiClient::new(format!("http://{addr}/"))
    }

    fn projects_router() -> Router {
        Router::new()
            .route(
                "/api/projects",
                get(|| async {
                    Json(json!({
                        "content": [
                            {"id": 1, "title": "Portfolio", "technologies": "Rust,Dioxus", "isPublic": true},
                            {"id": 2, "title": "Invoices", "status": "Terminé", "isPublic": false}
                        ],
                        "totalElements": 2
                    }))
                })
                .post(|Json(mut body): Json<Value>| async move {
                    body["id"] = json!(10);
                    (StatusCode::CREATED, Json(body))
                }),
            )
            .route(
                "/api/projects/{id}",
                get(|Path(id): Path<i64>| async move {
                    if id == 1 {
                        Ok(Json(json!({"id": 1, "title": "Portfolio"})))
                    } else {
                        Err((StatusCode::NOT_FOUND, "no such project"))
                    }
                })
                .put(|Path(id): Path<i64>, Json(mut body): Json<Value>| async move {
                    body["id"] = json!(id);
                    Json(body)
                })
                .delete(|| async { StatusCode::NO_CONTENT }),
            )
    }

    fn users_and_timelines_router() -> Router {
        Router::new()
            .route(
                "/api/users",
                axum::routing::post(|Json(mut body): Json<Value>| async move {
                    body["id"] = json!(7);
                    (StatusCode::CREATED, Json(body))
                }),
            )
            .route(
                "/api/users/{id}",
                get(|Path(id): Path<i64>| async move {
                    Json(json!({"id": id, "username": format!("user{id}"), "role": "USER"}))
                })
                .put(|Path(id): Path<i64>, Json(mut body): Json<Value>| async move {
                    body["id"] = json!(id);
                    Json(body)
                })
                .delete(|Path(id): Path<i64>| async move {
                    if id == 7 {
                        StatusCode::NO_CONTENT
                    } else {
                        StatusCode::NOT_FOUND
                    }
                }),
            )
            .route(
                "/api/timelines",
                axum::routing::post(|Json(mut body): Json<Value>| async move {
                    body["id"] = json!("t-new");
                    (StatusCode::CREATED, Json(body))
                }),
            )
            .route(
                "/api/timelines/{id}",
                get(|Path(id): Path<String>| async move {
                    Json(json!({"id": id, "titre": "Stage", "type": "STAGE", "date": "2023-09-01"}))
                })
                .put(|Path(id): Path<String>, Json(mut body): Json<Value>| async move {
                    body["id"] = json!(id);
                    Json(body)
                }),
            )
    }

    #[test]
    fn test_endpoint_building() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.endpoint(USERS_PATH, None),
            "http://localhost:8080/api/users"
        );
        assert_eq!(
            client.endpoint(TIMELINES_PATH, Some(&RecordId::Number(4))),
            "http://localhost:8080/api/timelines/4"
        );
    }

    #[test]
    fn test_from_config() {
        let config = PortfolioConfig::default().with_base_url("https://api.example.com");
        let client = ApiClient::from_config(&config);
        assert_eq!(
            client.endpoint(PROJECTS_PATH, None),
            "https://api.example.com/api/projects"
        );
    }

    #[tokio::test]
    async fn test_list_projects_unwraps_envelope() {
        let client = serve(projects_router()).await;
        let page = client.list_projects().await.unwrap();
        assert_eq!(page.total(), 2);
        assert_eq!(page.content[0].title, "Portfolio");
        assert_eq!(page.content[1].status, "Terminé");
        assert!(!page.content[1].is_public);
    }

    #[tokio::test]
    async fn test_project_crud_round() {
        let client = serve(projects_router()).await;

        let draft = Project {
            title: "New".into(),
            ..Project::blank()
        };
        let created = client.create_project(&draft).await.unwrap();
        assert_eq!(created.id, Some(RecordId::Number(10)));
        assert_eq!(created.title, "New");

        let id = RecordId::Number(3);
        let updated = client.update_project(&id, &created).await.unwrap();
        assert_eq!(updated.id, Some(id.clone()));

        client.delete_project(&id).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_record_is_status_error() {
        let client = serve(projects_router()).await;
        assert_eq!(
            client.get_project(&RecordId::Number(1)).await.unwrap().title,
            "Portfolio"
        );

        let err = client.get_project(&RecordId::Number(2)).await.unwrap_err();
        match err {
            ApiError::Status { status, ref body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such project");
            }
            other => panic!("expected status error, got {other:?}"),
        }
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_users_are_a_bare_array() {
        let router = Router::new().route(
            "/api/users",
            get(|| async {
                Json(json!([
                    {"id": 1, "username": "admin", "email": "a@x.io", "password": "pw", "role": "ADMIN", "active": true}
                ]))
            }),
        );
        let client = serve(router).await;
        let users = client.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "admin");
    }

    #[tokio::test]
    async fn test_wrong_shape_is_decode_error() {
        let router = Router::new().route("/api/timelines", get(|| async { "not json" }));
        let client = serve(router).await;
        let err = client.list_timelines().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_delete_failure_carries_status() {
        let router = Router::new().route(
            "/api/timelines/{id}",
            axum::routing::delete(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = serve(router).await;
        let err = client
            .delete_timeline(&RecordId::Text("abc".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Bind then drop so the port is closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(format!("http://{addr}"));
        let err = client.list_users().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_user_crud_round() {
        let client = serve(users_and_timelines_router()).await;

        let fetched = client.get_user(&RecordId::Number(3)).await.unwrap();
        assert_eq!(fetched.id, Some(RecordId::Number(3)));
        assert_eq!(fetched.username, "user3");

        let draft = User {
            username: "new".into(),
            password: "pw".into(),
            ..User::blank()
        };
        let created = client.create_user(&draft).await.unwrap();
        assert_eq!(created.id, Some(RecordId::Number(7)));
        assert_eq!(created.username, "new");
        assert_eq!(created.password, "pw");

        let renamed = User {
            username: "renamed".into(),
            ..created.clone()
        };
        let updated = client
            .update_user(&RecordId::Number(7), &renamed)
            .await
            .unwrap();
        assert_eq!(updated.id, Some(RecordId::Number(7)));
        assert_eq!(updated.username, "renamed");

        client.delete_user(&RecordId::Number(7)).await.unwrap();
        let err = client.delete_user(&RecordId::Number(8)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_timeline_create_get_update() {
        let client = serve(users_and_timelines_router()).await;

        let fetched = client
            .get_timeline(&RecordId::Text("t1".into()))
            .await
            .unwrap();
        assert_eq!(fetched.id, Some(RecordId::Text("t1".into())));
        assert_eq!(fetched.title, "Stage");
        assert_eq!(fetched.date, NaiveDate::from_ymd_opt(2023, 9, 1));

        let draft = TimelineEntry {
            title: "Teaching".into(),
            kind: "ENSEIGNEMENT".into(),
            ..TimelineEntry::default()
        };
        let created = client.create_timeline(&draft).await.unwrap();
        assert_eq!(created.id, Some(RecordId::Text("t-new".into())));
        assert_eq!(created.kind, "ENSEIGNEMENT");

        let id = RecordId::Text("t1".into());
        let updated = client.update_timeline(&id, &created).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.title, "Teaching");
    }
}
