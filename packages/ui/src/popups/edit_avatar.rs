use dioxus::prelude::*;
use store::AvatarUpdate;

use super::PopupWithForm;

#[component]
pub fn EditAvatarPopup(
    is_open: bool,
    saving: bool,
    on_close: EventHandler<()>,
    on_update: EventHandler<AvatarUpdate>,
) -> Element {
    let mut link = use_signal(String::new);

    let mut opened = use_signal(|| false);
    if *opened.peek() != is_open {
        opened.set(is_open);
        if is_open {
            link.set(String::new());
        }
    }

    rsx! {
        PopupWithForm {
            name: "edit-avatar",
            title: "Change profile picture",
            is_open,
            saving,
            on_close,
            on_submit: move |_| {
                let avatar = link().trim().to_string();
                if avatar.is_empty() {
                    return;
                }
                on_update.call(AvatarUpdate { avatar });
            },
            input {
                class: "popup__input",
                r#type: "url",
                name: "avatar",
                placeholder: "Image link",
                required: true,
                value: link(),
                oninput: move |evt: FormEvent| link.set(evt.value()),
            }
        }
    }
}
