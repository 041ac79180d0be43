use dioxus::prelude::*;

use crate::use_auth;

/// Sign-out page: clears the session, then calls `on_done`.
#[component]
pub fn ExitView(on_done: EventHandler<()>) -> Element {
    let mut auth = use_auth();

    use_effect(move || {
        auth.write().logout();
        tracing::info!("Signed out");
        on_done.call(());
    });

    rsx! {}
}
