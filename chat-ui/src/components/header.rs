use dioxus::prelude::*;

use crate::layout::effects::toggle_login;
use crate::layout::{use_layout, LayoutContext};

#[component]
pub fn Header(title: String) -> Element {
    let LayoutContext { mut store, .. } = use_layout();
    let logged_in = store.read().is_logged_in();

    rsx! {
        header {
            class: "chat-header",

            div {
                class: "header-left",
                button {
                    class: "menu-toggle",
                    title: "Toggle panel",
                    onclick: move |_| store.write().toggle_panel(),
                    "☰"
                }
                h1 { class: "header-title", "{title}" }
            }

            if logged_in {
                button {
                    class: "profile-button",
                    title: "Log out",
                    onclick: move |_| toggle_login(store),
                    "U"
                }
            } else {
                button {
                    class: "login-button",
                    onclick: move |_| toggle_login(store),
                    "Log in"
                }
            }
        }
    }
}
