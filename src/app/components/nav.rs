//! Side menu.

use dioxus::prelude::*;

use crate::app::navigation::{use_navigation, Navigation};
use crate::app::session_context::use_session;
use crate::nav::{Destination, SettingsSection};

type Entry = (&'static str, Destination, fn(&Navigation));

const ENTRIES: [Entry; 7] = [
    ("Profile", Destination::Profile, Navigation::go_to_profile),
    ("Cameras", Destination::Cameras, Navigation::go_to_cameras),
    (
        "Settings",
        Destination::Settings(SettingsSection::Main),
        Navigation::go_to_settings,
    ),
    ("Staff", Destination::Staff, Navigation::go_to_staff),
    ("Data", Destination::Data, Navigation::go_to_data),
    ("Files", Destination::Files, Navigation::go_to_files),
    ("Report", Destination::Report, Navigation::go_to_report),
];

fn is_active(entry: Destination, active: Destination) -> bool {
    match (entry, active) {
        (Destination::Settings(_), Destination::Settings(_)) => true,
        (Destination::Cameras, Destination::Camera(_)) => true,
        _ => entry == active,
    }
}

#[component]
pub fn Nav(active: Destination) -> Element {
    let navigation = use_navigation();
    let session = use_session();
    let username = session.username().unwrap_or_default();

    rsx! {
        nav { class: "side-nav",
            div { class: "side-nav-brand", strong { "Camera Dashboard" } }
            ul {
                for (label, dest, open) in ENTRIES {
                    li {
                        button {
                            class: if is_active(dest, active) { "nav-link active" } else { "nav-link" },
                            "aria-current": if is_active(dest, active) { "page" } else { "false" },
                            onclick: move |_| open(&navigation),
                            "{label}"
                        }
                    }
                }
            }
            div { class: "side-nav-footer",
                small { class: "text-muted", "{username}" }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| navigation.logout(),
                    "Log out"
                }
            }
        }
    }
}
