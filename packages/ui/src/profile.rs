//! Profile card at the top of the page.

use dioxus::prelude::*;
use store::User;

use crate::icons::{FaPen, FaPlus};
use crate::Icon;

/// Shows the current user's avatar, name and bio with the three edit entry points.
///
/// Before the user has loaded the fields render empty and the profile edit
/// button is disabled, since there is nothing to prefill the form with.
#[component]
pub fn Profile(
    user: Option<User>,
    on_edit_avatar: EventHandler<()>,
    on_edit_profile: EventHandler<()>,
    on_add_place: EventHandler<()>,
) -> Element {
    let loaded = user.is_some();
    let (name, about, avatar) = user
        .map(|u| (u.name, u.about, u.avatar))
        .unwrap_or_default();

    rsx! {
        section {
            class: "profile",

            div {
                class: "profile__image",
                if !avatar.is_empty() {
                    img {
                        class: "profile__avatar",
                        src: "{avatar}",
                        alt: "Avatar",
                    }
                }
                button {
                    class: "profile__avatar-edit",
                    r#type: "button",
                    title: "Change avatar",
                    onclick: move |_| on_edit_avatar.call(()),
                    Icon { icon: FaPen, width: 20, height: 20 }
                }
            }

            div {
                class: "profile__info",
                h1 { class: "profile__name", "{name}" }
                button {
                    class: "profile__edit-button",
                    r#type: "button",
                    title: "Edit profile",
                    disabled: !loaded,
                    onclick: move |_| on_edit_profile.call(()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                p { class: "profile__about", "{about}" }
            }

            button {
                class: "profile__add-button",
                r#type: "button",
                title: "New place",
                onclick: move |_| on_add_place.call(()),
                Icon { icon: FaPlus, width: 22, height: 22 }
            }
        }
    }
}
