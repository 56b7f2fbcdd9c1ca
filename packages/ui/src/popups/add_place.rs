use dioxus::prelude::*;
use store::NewCard;

use super::PopupWithForm;

/// New place form. Starts empty every time it opens.
#[component]
pub fn AddPlacePopup(
    is_open: bool,
    saving: bool,
    on_close: EventHandler<()>,
    on_add: EventHandler<NewCard>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut link = use_signal(String::new);

    let mut opened = use_signal(|| false);
    if *opened.peek() != is_open {
        opened.set(is_open);
        if is_open {
            title.set(String::new());
            link.set(String::new());
        }
    }

    rsx! {
        PopupWithForm {
            name: "add-place",
            title: "New place",
            submit_label: "Create",
            busy_label: "Creating...",
            is_open,
            saving,
            on_close,
            on_submit: move |_| {
                let name = title().trim().to_string();
                let link = link().trim().to_string();
                if name.is_empty() || link.is_empty() {
                    return;
                }
                on_add.call(NewCard { name, link });
            },
            input {
                class: "popup__input",
                r#type: "text",
                name: "name",
                placeholder: "Title",
                required: true,
                minlength: "1",
                maxlength: "30",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            input {
                class: "popup__input",
                r#type: "url",
                name: "link",
                placeholder: "Image link",
                required: true,
                value: link(),
                oninput: move |evt: FormEvent| link.set(evt.value()),
            }
        }
    }
}
