//! Sign-in and registration page.

use dioxus::prelude::*;

use crate::api::{Credentials, Registration};
use crate::app::components::TextInput;
use crate::app::navigation::use_navigation;
use crate::app::session_context::use_session;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    SignIn,
    Register,
}

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let navigation = use_navigation();

    let mut mode = use_signal(|| Mode::SignIn);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    // Already signed in (restored session): go straight to the grid
    use_effect(move || {
        if session.is_loaded() && session.is_authenticated() {
            navigation.go_to_cameras();
        }
    });

    let submit = move || async move {
        busy.set(true);
        error.set(None);
        notice.set(None);
        match mode() {
            Mode::SignIn => {
                let credentials = Credentials {
                    username: username.peek().trim().to_string(),
                    password: password.peek().clone(),
                };
                match session.sign_in(credentials).await {
                    Ok(()) => {
                        password.set(String::new());
                        navigation.go_to_cameras();
                    }
                    Err(e) if e.is_unauthorized() => {
                        error.set(Some("Incorrect username or password".to_string()));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            }
            Mode::Register => {
                let registration = Registration {
                    username: username.peek().trim().to_string(),
                    email: email.peek().trim().to_string(),
                    password: password.peek().clone(),
                };
                match session.register(registration).await {
                    Ok(user) => {
                        password.set(String::new());
                        notice.set(Some(format!("Account {} created, sign in to continue", user.username)));
                        mode.set(Mode::SignIn);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            }
        }
        busy.set(false);
    };

    let (heading, action, toggle) = match mode() {
        Mode::SignIn => ("Sign in", "Sign in", "Create an account"),
        Mode::Register => ("Register", "Register", "I already have an account"),
    };

    rsx! {
        document::Title { "{heading} - Camera Dashboard" }
        main { class: "login",
            form {
                class: "card login-card",
                onsubmit: move |e| {
                    e.prevent_default();
                    submit()
                },
                h1 { "{heading}" }
                TextInput {
                    label: "Username",
                    value: username(),
                    on_input: move |v| username.set(v),
                }
                if mode() == Mode::Register {
                    TextInput {
                        label: "Email",
                        kind: "email",
                        value: email(),
                        on_input: move |v| email.set(v),
                    }
                }
                TextInput {
                    label: "Password",
                    kind: "password",
                    value: password(),
                    on_input: move |v| password.set(v),
                }
                if let Some(msg) = error() {
                    p { class: "form-error", role: "alert", "{msg}" }
                }
                if let Some(msg) = notice() {
                    p { class: "form-notice", "{msg}" }
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: busy(), "{action}" }
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| {
                        error.set(None);
                        notice.set(None);
                        mode.set(match mode() {
                            Mode::SignIn => Mode::Register,
                            Mode::Register => Mode::SignIn,
                        });
                    },
                    "{toggle}"
                }
            }
        }
    }
}
