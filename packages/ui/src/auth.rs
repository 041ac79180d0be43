//! Authentication context and hooks for the UI.
//!
//! The signed-in user lives in a `Signal<AuthState>`. It starts out loading
//! and is filled from the stored [`Session`] once mounted, so the server
//! render and the first client render agree. [`AuthState::login`] and
//! [`AuthState::logout`] keep the signal and local storage in step.

use api::{Role, User};
use dioxus::prelude::*;
use store::Session;

use crate::make_store;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the stored session has been read.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// State restored from local storage.
    pub fn restore() -> Self {
        Self {
            session: store::load_session(&make_store()),
            loading: false,
        }
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| Role::parse(&s.role))
    }

    /// Whether the signed-in user may open the back-office.
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(|r| r.can_access_admin())
    }

    /// Whether the back-office should turn the visitor away. Never while the
    /// stored session is still being read.
    pub fn denies_admin(&self) -> bool {
        !self.loading && !self.is_admin()
    }

    /// Persist `user` (minus id and password) and mark it signed in.
    pub fn login(&mut self, user: &User) {
        let session = user.to_session();
        store::save_session(&make_store(), &session);
        self.session = Some(session);
        self.loading = false;
    }

    pub fn logout(&mut self) {
        store::clear_session(&make_store());
        self.session = None;
        self.loading = false;
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    use_context_provider(|| auth_state);

    // Local storage only exists in the browser, so read it after mount
    use_effect(move || {
        auth_state.set(AuthState::restore());
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> User {
        User {
            username: format!("auth-test-{role}"),
            password: "pw".into(),
            role: role.into(),
            ..User::blank()
        }
    }

    #[test]
    fn test_admin_rules() {
        let mut state = AuthState::default();
        assert!(!state.is_admin());
        assert_eq!(state.role(), None);

        state.session = Some(user("ADMIN").to_session());
        assert!(state.is_admin());

        state.session = Some(user("USER").to_session());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_loading_state_never_denies_admin() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_admin());
        assert!(!state.denies_admin());

        let loaded = AuthState {
            loading: false,
            ..AuthState::default()
        };
        assert!(loaded.denies_admin());

        let admin = AuthState {
            session: Some(user("ADMIN").to_session()),
            loading: false,
        };
        assert!(!admin.denies_admin());
    }

    #[test]
    fn test_login_then_logout_round_trips_storage() {
        let mut state = AuthState::default();
        state.login(&user("ADMIN"));
        assert!(!state.loading);
        let restored = AuthState::restore();
        assert!(!restored.loading);
        assert_eq!(
            restored.session.map(|s| s.username),
            Some("auth-test-ADMIN".to_string())
        );

        state.logout();
        assert!(state.session.is_none());
        assert!(AuthState::restore().session.is_none());
    }
}
