use crate::Screen;
use dioxus::prelude::*;

/// Top navigation bar with the two routes: public gallery and admin
#[component]
pub fn NavigationBar(current_screen: Screen, on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        nav { class: "nav-bar",
            h1 { class: "nav-title", "PHOTOFOLIO" }
            div { class: "nav-links",
                button {
                    class: if current_screen == Screen::Gallery { "nav-link active" } else { "nav-link" },
                    onclick: move |_| on_navigate.call(Screen::Gallery),
                    "Gallery"
                }
                button {
                    class: if current_screen == Screen::Admin { "nav-link active" } else { "nav-link" },
                    onclick: move |_| on_navigate.call(Screen::Admin),
                    "Admin"
                }
            }
        }
    }
}
