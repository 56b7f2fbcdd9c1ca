use dioxus::prelude::*;
use store::{ProfileUpdate, User};

use super::PopupWithForm;

/// Edit name and about. Fields are seeded from `user` each time the popup opens.
#[component]
pub fn EditProfilePopup(
    user: Option<User>,
    is_open: bool,
    saving: bool,
    on_close: EventHandler<()>,
    on_update: EventHandler<ProfileUpdate>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut about = use_signal(String::new);

    let mut opened = use_signal(|| false);
    if *opened.peek() != is_open {
        opened.set(is_open);
        if is_open {
            let (n, a) = user.map(|u| (u.name, u.about)).unwrap_or_default();
            name.set(n);
            about.set(a);
        }
    }

    rsx! {
        PopupWithForm {
            name: "edit-profile",
            title: "Edit profile",
            is_open,
            saving,
            on_close,
            on_submit: move |_| {
                on_update.call(ProfileUpdate {
                    name: name().trim().to_string(),
                    about: about().trim().to_string(),
                });
            },
            input {
                class: "popup__input",
                r#type: "text",
                name: "name",
                placeholder: "Name",
                required: true,
                minlength: "2",
                maxlength: "40",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            input {
                class: "popup__input",
                r#type: "text",
                name: "about",
                placeholder: "About me",
                required: true,
                minlength: "2",
                maxlength: "200",
                value: about(),
                oninput: move |evt: FormEvent| about.set(evt.value()),
            }
        }
    }
}
