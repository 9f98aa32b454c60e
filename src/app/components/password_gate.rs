//! Password gate in front of every settings page.
//!
//! The typed password is checked by logging the current user in again.
//! The page content mounts only after the backend accepts it, and the gate
//! locks again whenever the page is left.

use dioxus::prelude::*;

use super::layout::Layout;
use crate::app::navigation::use_navigation;
use crate::app::session_context::use_session;
use crate::nav::{Destination, SettingsSection};
use crate::settings::GateState;

#[component]
pub fn PasswordGate(children: Element) -> Element {
    let session = use_session();
    let mut gate = use_signal(GateState::default);
    let mut password = use_signal(String::new);

    let submit = move || async move {
        let typed = password.peek().clone();
        gate.set(GateState::Verifying);
        let next = session.verify_password(&typed).await;
        if next.is_unlocked() {
            tracing::debug!("Settings unlocked");
            password.set(String::new());
        }
        gate.set(next);
    };

    if gate.read().is_unlocked() {
        return rsx! { {children} };
    }

    let verifying = *gate.read() == GateState::Verifying;

    rsx! {
        form {
            class: "card password-gate",
            onsubmit: move |e| {
                e.prevent_default();
                submit()
            },
            p { "Enter your password to change settings." }
            input {
                class: "input",
                r#type: "password",
                autocomplete: "current-password",
                value: "{password}",
                oninput: move |e| password.set(e.value()),
            }
            button { class: "btn btn-primary", r#type: "submit", disabled: verifying,
                if verifying { "Checking..." } else { "Unlock" }
            }
            if let GateState::Rejected(msg) = gate() {
                p { class: "form-error", "{msg}" }
            }
        }
    }
}

#[component]
fn SettingsMenu(active: SettingsSection) -> Element {
    let navigation = use_navigation();

    rsx! {
        div { class: "settings-menu",
            for section in SettingsSection::ALL {
                button {
                    class: if section == active { "btn btn-tab active" } else { "btn btn-tab" },
                    onclick: move |_| navigation.go_to_settings_section(section),
                    "{section.title()}"
                }
            }
        }
    }
}

/// Layout, section menu and password gate shared by the settings pages.
#[component]
pub fn SettingsShell(section: SettingsSection, children: Element) -> Element {
    rsx! {
        Layout {
            title: format!("Settings: {}", section.title()),
            active: Destination::Settings(section),
            SettingsMenu { active: section }
            PasswordGate { {children} }
        }
    }
}
