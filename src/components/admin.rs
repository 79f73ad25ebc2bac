use crate::components::{PhotoList, PhotoUpload};
use dioxus::prelude::*;

/// Admin screen: upload form on top, the stored photo list below. A
/// successful upload bumps the refresh token so the list reloads.
#[component]
pub fn AdminScreen() -> Element {
    let mut refresh_count = use_signal(|| 0u64);

    rsx! {
        div { class: "admin-screen",
            h1 { "Admin" }
            PhotoUpload { on_uploaded: move |_| refresh_count += 1 }
            PhotoList { refresh_token: refresh_count() }
        }
    }
}
