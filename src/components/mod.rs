// Shared layout components: page chrome, content width, page heading.

use dioxus::prelude::*;

#[component]
pub fn Main(children: Element) -> Element {
    rsx! {
        div { class: "page",
            header { class: "header",
                span { class: "header__brand", "Фудграм" }
            }
            main { class: "page-content", {children} }
            footer { class: "footer",
                span { "Фудграм" }
            }
        }
    }
}

#[component]
pub fn Container(children: Element) -> Element {
    rsx! {
        div { class: "container", {children} }
    }
}

#[component]
pub fn Title(text: String) -> Element {
    rsx! {
        h1 { class: "title", "{text}" }
    }
}
