//! Load, save and delete plumbing shared by the back-office tables.
//!
//! Each table calls [`use_admin_table`] for its record type and only keeps
//! the columns, filter and form of its own.

use api::{ApiClient, ApiError, Project, RecordId, TimelineEntry, User};
use dioxus::prelude::*;

use crate::use_api;

/// A record type the back-office can list, save and delete.
pub(crate) trait AdminRecord: Clone + PartialEq + 'static {
    /// Singular name used in banners, e.g. "project".
    const NOUN: &'static str;
    /// What the list is called in banners, e.g. "projects".
    const PLURAL: &'static str;

    fn record_id(&self) -> Option<&RecordId>;

    async fn list(client: &ApiClient) -> Result<Vec<Self>, ApiError>;
    async fn create(client: &ApiClient, record: &Self) -> Result<Self, ApiError>;
    async fn update(client: &ApiClient, id: &RecordId, record: &Self) -> Result<Self, ApiError>;
    async fn delete(client: &ApiClient, id: &RecordId) -> Result<(), ApiError>;
}

impl AdminRecord for User {
    const NOUN: &'static str = "user";
    const PLURAL: &'static str = "users";

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    async fn list(client: &ApiClient) -> Result<Vec<Self>, ApiError> {
        client.list_users().await
    }

    async fn create(client: &ApiClient, record: &Self) -> Result<Self, ApiError> {
        client.create_user(record).await
    }

    async fn update(client: &ApiClient, id: &RecordId, record: &Self) -> Result<Self, ApiError> {
        client.update_user(id, record).await
    }

    async fn delete(client: &ApiClient, id: &RecordId) -> Result<(), ApiError> {
        client.delete_user(id).await
    }
}

impl AdminRecord for Project {
    const NOUN: &'static str = "project";
    const PLURAL: &'static str = "projects";

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    async fn list(client: &ApiClient) -> Result<Vec<Self>, ApiError> {
        Ok(client.list_projects().await?.into_content())
    }

    async fn create(client: &ApiClient, record: &Self) -> Result<Self, ApiError> {
        client.create_project(record).await
    }

    async fn update(client: &ApiClient, id: &RecordId, record: &Self) -> Result<Self, ApiError> {
        client.update_project(id, record).await
    }

    async fn delete(client: &ApiClient, id: &RecordId) -> Result<(), ApiError> {
        client.delete_project(id).await
    }
}

impl AdminRecord for TimelineEntry {
    const NOUN: &'static str = "entry";
    const PLURAL: &'static str = "timeline";

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    async fn list(client: &ApiClient) -> Result<Vec<Self>, ApiError> {
        Ok(client.list_timelines().await?.into_content())
    }

    async fn create(client: &ApiClient, record: &Self) -> Result<Self, ApiError> {
        client.create_timeline(record).await
    }

    async fn update(client: &ApiClient, id: &RecordId, record: &Self) -> Result<Self, ApiError> {
        client.update_timeline(id, record).await
    }

    async fn delete(client: &ApiClient, id: &RecordId) -> Result<(), ApiError> {
        client.delete_timeline(id).await
    }
}

/// Signals and actions behind one back-office table.
pub(crate) struct AdminTable<T: 'static> {
    pub rows: Signal<Vec<T>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    /// Record open in the form, blank for a new one.
    pub editing: Signal<Option<T>>,
    /// Create or update, then close the form.
    pub save: Callback<T>,
    pub delete: Callback<RecordId>,
}

/// Loads the rows once on mount and wires save and delete to the API.
pub(crate) fn use_admin_table<T: AdminRecord>() -> AdminTable<T> {
    let client = use_api();
    let mut rows = use_signal(Vec::<T>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<T>::None);

    let loader = client.clone();
    use_future(move || {
        let client = loader.clone();
        async move {
            match T::list(&client).await {
                Ok(list) => rows.set(list),
                Err(e) => {
                    tracing::error!("Failed to load {}: {e}", T::PLURAL);
                    error.set(Some(format!(
                        "Could not load the {}. {}",
                        T::PLURAL,
                        e.user_message()
                    )));
                }
            }
            loading.set(false);
        }
    });

    let saver = client.clone();
    let save = use_callback(move |record: T| {
        let client = saver.clone();
        spawn(async move {
            let key = record.record_id().cloned();
            let result = match &key {
                Some(id) => T::update(&client, id, &record).await,
                None => T::create(&client, &record).await,
            };
            match result {
                Ok(saved) => {
                    apply_saved(&mut rows.write(), key.as_ref(), saved);
                    editing.set(None);
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to save {}: {e}", T::NOUN);
                    error.set(Some(format!(
                        "Could not save the {}. {}",
                        T::NOUN,
                        e.user_message()
                    )));
                }
            }
        });
    });

    let deleter = client.clone();
    let delete = use_callback(move |id: RecordId| {
        let client = deleter.clone();
        spawn(async move {
            let result = T::delete(&client, &id).await;
            if let Err(e) = &result {
                if e.is_not_found() {
                    tracing::warn!("{} {id} was already gone", T::NOUN);
                } else {
                    tracing::error!("Failed to delete {} {id}: {e}", T::NOUN);
                    error.set(Some(format!(
                        "Could not delete the {}. {}",
                        T::NOUN,
                        e.user_message()
                    )));
                }
            }
            if removes_row(&result) {
                rows.write().retain(|r| r.record_id() != Some(&id));
            }
        });
    });

    AdminTable {
        rows,
        loading,
        error,
        editing,
        save,
        delete,
    }
}

/// Replace the row saved under `key`, or append a newly created one.
fn apply_saved<T: AdminRecord>(rows: &mut Vec<T>, key: Option<&RecordId>, saved: T) {
    match key {
        Some(id) => upsert(rows, saved, |r| r.record_id() == Some(id)),
        None => rows.push(saved),
    }
}

/// A record the server no longer has is dropped from the table too.
fn removes_row(result: &Result<(), ApiError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => e.is_not_found(),
    }
}

/// Replace the first row matching `same` with `item`, or append it.
fn upsert<T>(rows: &mut Vec<T>, item: T, same: impl Fn(&T) -> bool) {
    match rows.iter_mut().find(|row| same(row)) {
        Some(row) => *row = item,
        None => rows.push(item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: Option<i64>, title: &str) -> Project {
        Project {
            id: id.map(RecordId::Number),
            title: title.into(),
            ..Project::blank()
        }
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut rows = vec![(1, "a"), (2, "b"), (3, "c")];
        upsert(&mut rows, (2, "B"), |r| r.0 == 2);
        assert_eq!(rows, vec![(1, "a"), (2, "B"), (3, "c")]);
    }

    #[test]
    fn test_upsert_appends_unknown_rows() {
        let mut rows = vec![(1, "a")];
        upsert(&mut rows, (9, "z"), |r| r.0 == 9);
        assert_eq!(rows, vec![(1, "a"), (9, "z")]);
    }

    #[test]
    fn test_apply_saved_updates_or_appends() {
        let mut rows = vec![project(Some(1), "a"), project(Some(2), "b")];

        apply_saved(&mut rows, Some(&RecordId::Number(2)), project(Some(2), "B"));
        assert_eq!(rows[1].title, "B");
        assert_eq!(rows.len(), 2);

        apply_saved(&mut rows, None, project(Some(3), "new"));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].record_id(), Some(&RecordId::Number(3)));
    }

    #[test]
    fn test_deleting_a_missing_record_still_removes_the_row() {
        assert!(removes_row(&Ok(())));
        assert!(removes_row(&Err(ApiError::Status {
            status: 404,
            body: String::new(),
        })));
        assert!(!removes_row(&Err(ApiError::Status {
            status: 500,
            body: "boom".into(),
        })));
    }

    #[test]
    fn test_record_names() {
        assert_eq!(<User as AdminRecord>::PLURAL, "users");
        assert_eq!(<TimelineEntry as AdminRecord>::NOUN, "entry");
        let entry = TimelineEntry {
            id: Some(RecordId::Text("t1".into())),
            ..TimelineEntry::default()
        };
        assert_eq!(entry.record_id(), Some(&RecordId::Text("t1".into())));
    }
}
