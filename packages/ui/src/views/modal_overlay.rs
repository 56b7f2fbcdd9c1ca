use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers its children in a modal container.
/// Clicking outside the container or on the close button triggers `on_close`.
///
/// The overlay is always rendered and toggled with `popup_opened` so the
/// open/close transition runs in CSS.
#[component]
pub fn ModalOverlay(
    name: String,
    is_open: bool,
    on_close: EventHandler<()>,
    #[props(default)]
    class: String,
    children: Element,
) -> Element {
    let overlay_class = overlay_class(&name, is_open);

    rsx! {
        div {
            class: "{overlay_class}",
            onclick: move |_| on_close.call(()),
            div {
                class: "popup__container {class}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    class: "popup__close",
                    r#type: "button",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 24, height: 24 }
                }
                {children}
            }
        }
    }
}

fn overlay_class(name: &str, is_open: bool) -> String {
    if is_open {
        format!("popup popup_type_{name} popup_opened")
    } else {
        format!("popup popup_type_{name}")
    }
}
