//! Profile page: who is signed in and until when.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::navigation::use_navigation;
use crate::app::session_context::use_session;
use crate::nav::Destination;

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let navigation = use_navigation();
    let current = session.session();

    rsx! {
        Layout { title: "Profile".to_string(), active: Destination::Profile,
            div { class: "card",
                if let Some(s) = current {
                    dl { class: "info-list",
                        dt { "User" }
                        dd { "{s.username}" }
                        dt { "Signed in" }
                        dd { {s.issued_at.format("%Y-%m-%d %H:%M UTC").to_string()} }
                        dt { "Session expires" }
                        dd { {s.expires_at.format("%Y-%m-%d %H:%M UTC").to_string()} }
                    }
                }
                div { class: "actions",
                    button { class: "btn btn-primary", onclick: move |_| navigation.go_to_cameras(), "Cameras" }
                    button { class: "btn btn-secondary", onclick: move |_| navigation.go_to_settings(), "Settings" }
                    button { class: "btn btn-ghost", onclick: move |_| navigation.logout(), "Log out" }
                }
            }
        }
    }
}
