use api::{ApiError, User};
use dioxus::prelude::*;

use crate::components::{Alert, Button, ButtonVariant, Field, Input};
use crate::views::ModalOverlay;
use crate::{use_api, use_auth};

/// Sign-in dialog. Checks the credentials against the user list, stores the
/// session on success and hands the matched user to `on_success`.
#[component]
pub fn LoginModal(on_close: EventHandler<()>, on_success: EventHandler<User>) -> Element {
    let client = use_api();
    let mut auth = use_auth();
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<&'static str>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result = api::auth::authenticate(&client, &identifier(), &password()).await;
            loading.set(false);
            match result {
                Ok(user) => {
                    auth.write().login(&user);
                    on_success.call(user);
                    on_close.call(());
                }
                Err(e) => {
                    if !matches!(e, ApiError::InvalidCredentials) {
                        tracing::error!("Sign-in request failed: {e}");
                    }
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            title: "Sign in",
            on_close: move |_| on_close.call(()),
            if let Some(message) = error() {
                Alert { message: message.to_string() }
            }
            form {
                class: "form",
                onsubmit: handle_submit,
                Field { id: "login-identifier", label: "Email or username",
                    Input {
                        id: "login-identifier",
                        value: identifier(),
                        required: true,
                        oninput: move |evt: FormEvent| identifier.set(evt.value()),
                    }
                }
                Field { id: "login-password", label: "Password",
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: password(),
                        required: true,
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    class: "btn-block",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
