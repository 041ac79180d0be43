use api::{Project, TimelineEntry, User};
use dioxus::prelude::*;

use crate::components::{Alert, Spinner};
use crate::use_api;

/// Summary figures shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub users: usize,
    pub active_users: usize,
    pub projects: usize,
    pub public_projects: usize,
    pub timeline_entries: usize,
}

impl DashboardStats {
    pub fn compute(users: &[User], projects: &[Project], timelines: &[TimelineEntry]) -> Self {
        Self {
            users: users.len(),
            active_users: users.iter().filter(|u| u.active).count(),
            projects: projects.len(),
            public_projects: projects.iter().filter(|p| p.is_public).count(),
            timeline_entries: timelines.len(),
        }
    }

    fn cards(&self) -> [(&'static str, usize); 5] {
        [
            ("Users", self.users),
            ("Active users", self.active_users),
            ("Projects", self.projects),
            ("Public projects", self.public_projects),
            ("Timeline entries", self.timeline_entries),
        ]
    }
}

/// Live counts over the three resources.
#[component]
pub fn DashboardPage() -> Element {
    let client = use_api();

    let stats = use_resource(move || {
        let client = client.clone();
        async move {
            let load = async {
                let users = client.list_users().await?;
                let projects = client.list_projects().await?.into_content();
                let timelines = client.list_timelines().await?.into_content();
                Ok::<_, api::ApiError>(DashboardStats::compute(&users, &projects, &timelines))
            };
            load.await
                .inspect_err(|e| tracing::error!("Failed to load dashboard data: {e}"))
        }
    });

    let body = match &*stats.read() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! {
            Alert { message: format!("Could not load the dashboard. {}", e.user_message()) }
        },
        Some(Ok(stats)) => rsx! {
            div { class: "stat-grid",
                for (label, value) in stats.cards() {
                    div { key: "{label}", class: "card stat-card",
                        p { class: "muted", "{label}" }
                        p { class: "stat-value", "{value}" }
                    }
                }
            }
        },
    };

    rsx! {
        document::Title { "Admin - Dashboard" }
        {body}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_counts() {
        let users = vec![
            User { active: true, ..User::blank() },
            User { active: false, ..User::blank() },
            User { active: true, ..User::blank() },
        ];
        let projects = vec![
            Project { is_public: true, ..Project::blank() },
            Project { is_public: false, ..Project::blank() },
        ];
        let timelines = vec![TimelineEntry::default(); 4];

        let stats = DashboardStats::compute(&users, &projects, &timelines);
        assert_eq!(
            stats,
            DashboardStats {
                users: 3,
                active_users: 2,
                projects: 2,
                public_projects: 1,
                timeline_entries: 4,
            }
        );
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(DashboardStats::compute(&[], &[], &[]), DashboardStats::default());
    }
}
