use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "header",
            span { class: "header__logo", "Around" }
            span { class: "header__logo header__logo_accent", "The U.S." }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            p { class: "footer__copyright", "© Around The U.S." }
        }
    }
}
