//! Layout component wrapping every signed-in page.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::nav::Destination;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab and page header)
    pub title: String,
    /// Highlighted side menu entry
    pub active: Destination,
    /// Page content
    pub children: Element,
}

/// Main layout: side menu plus the page body.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("DASHBOARD_VERSION");
    let full_title = format!("{} - Camera Dashboard", props.title);

    rsx! {
        document::Title { "{full_title}" }

        div { class: "dashboard",
            Nav { active: props.active }
            main { class: "dashboard-main",
                h1 { class: "page-title", "{props.title}" }
                {props.children}
                footer { class: "dashboard-footer",
                    small { class: "text-muted", "Camera Dashboard v{version}" }
                }
            }
        }
    }
}
