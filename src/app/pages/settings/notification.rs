//! Notification channel: email or SMS.

use dioxus::prelude::*;

use super::SaveStatus;
use crate::app::components::SettingsShell;
use crate::app::settings_context::use_settings;
use crate::nav::SettingsSection;
use crate::settings::{NotificationChannel, NotificationKind};

#[component]
pub fn SettingsNotification() -> Element {
    rsx! {
        SettingsShell { section: SettingsSection::Notification, NotificationForm {} }
    }
}

#[component]
fn NotificationForm() -> Element {
    let settings = use_settings();
    let saved = settings.get().notification;

    let mut kind = use_signal(|| saved.as_ref().map_or(NotificationKind::Email, |c| c.kind));
    let mut address = use_signal(|| saved.as_ref().map(|c| c.address.clone()).unwrap_or_default());
    let mut result = use_signal(|| None::<Result<(), String>>);

    let current_kind = kind();

    rsx! {
        section { class: "card",
            if let Some(channel) = settings.get().notification {
                p { class: "text-muted",
                    "Notifications go to {channel.address} ({channel.kind.label()})"
                }
            }

            fieldset { class: "radio-group",
                legend { "Notify by" }
                for option in [NotificationKind::Email, NotificationKind::Phone] {
                    label { class: "radio",
                        input {
                            r#type: "radio",
                            name: "notification-kind",
                            value: option.as_str(),
                            checked: option == current_kind,
                            onchange: move |e| {
                                if let Some(k) = NotificationKind::parse(&e.value()) {
                                    kind.set(k);
                                    address.set(String::new());
                                    result.set(None);
                                }
                            },
                        }
                        "{option.label()}"
                    }
                }
            }

            div { class: "form-row",
                label { class: "form-label", "{current_kind.prompt()}" }
                input {
                    class: "input",
                    r#type: if current_kind == NotificationKind::Email { "email" } else { "tel" },
                    placeholder: current_kind.placeholder(),
                    value: "{address}",
                    oninput: move |e| address.set(e.value()),
                }
            }

            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        let typed = address.peek().clone();
                        let outcome = NotificationChannel::new(kind(), &typed)
                            .and_then(|channel| {
                                address.set(channel.address.clone());
                                settings.update(|s| s.notification = Some(channel))
                            })
                            .map_err(|e| e.to_string());
                        result.set(Some(outcome));
                    },
                    "Save"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        let outcome = settings
                            .update(|s| s.notification = None)
                            .map_err(|e| e.to_string());
                        address.set(String::new());
                        result.set(Some(outcome));
                    },
                    "Turn off notifications"
                }
            }
            SaveStatus { result: result() }
        }
    }
}
