use dioxus::prelude::*;

mod components;
mod config;
mod error;
mod services;
mod state;

use components::{AdminScreen, GalleryScreen, NavigationBar};
use services::StoreHandle;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    dioxus::launch(App);
}

/// Screen navigation for the app
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Screen {
    Gallery,
    Admin,
}

#[component]
fn App() -> Element {
    // Config and client are built once; the handle is handed to components
    // through context rather than a global
    let store = use_hook(|| {
        services::photo_service::init_store().map_err(|e| {
            log::error!("Startup failed: {}", e);
            e.user_message()
        })
    });

    match store {
        Ok(handle) => rsx! {
            PortfolioShell { store: handle }
        },
        Err(message) => rsx! {
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            div { class: "config-error", "{message}" }
        },
    }
}

#[component]
fn PortfolioShell(store: StoreHandle) -> Element {
    use_context_provider(|| store.clone());
    let mut current_screen = use_signal(|| Screen::Gallery);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "app-shell",
            NavigationBar {
                current_screen: current_screen(),
                on_navigate: move |screen| current_screen.set(screen),
            }
            div { class: "app-content",
                match current_screen() {
                    Screen::Gallery => rsx! {
                        GalleryScreen {}
                    },
                    Screen::Admin => rsx! {
                        AdminScreen {}
                    },
                }
            }
        }
    }
}
