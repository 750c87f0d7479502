use dioxus::prelude::*;

#[component]
pub fn Header(title: String, subtitle: String) -> Element {
    rsx! {
        header { class: "header",
            div { class: "header-inner",
                div { class: "header-logo", "▣" }
                div {
                    h1 { class: "header-title", "{title}" }
                    p { class: "header-subtitle", "{subtitle}" }
                }
            }
        }
    }
}
