use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Generic form dialog: title, fields supplied as children, and one submit button.
///
/// The native form submission is suppressed and turned into `on_submit`. While
/// `saving` is set the button is disabled and shows `busy_label`.
#[component]
pub fn PopupWithForm(
    /// Suffix for the `popup_type_*` class and the form name.
    name: String,
    title: String,
    is_open: bool,
    #[props(default = "Save".to_string())]
    submit_label: String,
    #[props(default = "Saving...".to_string())]
    busy_label: String,
    #[props(default)]
    saving: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
    children: Element,
) -> Element {
    let label = button_label(saving, &submit_label, &busy_label);

    rsx! {
        ModalOverlay {
            name: name.clone(),
            is_open,
            on_close,
            form {
                class: "popup__form",
                name: "{name}",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    if !saving {
                        on_submit.call(());
                    }
                },
                h2 { class: "popup__title", "{title}" }
                {children}
                button {
                    class: "popup__save-button",
                    r#type: "submit",
                    disabled: saving,
                    "{label}"
                }
            }
        }
    }
}

/// Label for the submit button given the in-flight flag.
pub(crate) fn button_label<'a>(saving: bool, idle: &'a str, busy: &'a str) -> &'a str {
    if saving {
        busy
    } else {
        idle
    }
}
