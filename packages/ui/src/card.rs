use dioxus::prelude::*;
use store::{Card, UserId};

use crate::icons::{FaHeart, FaTrash};
use crate::Icon;

/// A single photo card.
///
/// Stateless: every click hands the card back to the parent. The heart is active
/// when `viewer` is in the liker set; the trash button only renders for the owner.
#[component]
pub fn CardView(
    card: Card,
    viewer: Option<UserId>,
    on_open: EventHandler<Card>,
    on_like: EventHandler<Card>,
    on_delete: EventHandler<Card>,
) -> Element {
    let liked = viewer.as_ref().is_some_and(|v| card.is_liked_by(v));
    let owned = viewer.as_ref().is_some_and(|v| card.is_owned_by(v));
    let like_count = card.like_count();

    let open_card = card.clone();
    let like_card = card.clone();
    let delete_card = card.clone();

    rsx! {
        li {
            class: "card",

            if owned {
                button {
                    class: "card__delete",
                    r#type: "button",
                    title: "Delete",
                    onclick: move |_| on_delete.call(delete_card.clone()),
                    Icon { icon: FaTrash, width: 18, height: 18 }
                }
            }

            img {
                class: "card__image",
                src: "{card.link}",
                alt: "{card.name}",
                onclick: move |_| on_open.call(open_card.clone()),
            }

            div {
                class: "card__footer",
                h2 { class: "card__title", "{card.name}" }
                div {
                    class: "card__likes",
                    button {
                        class: if liked { "card__like card__like_active" } else { "card__like" },
                        r#type: "button",
                        title: if liked { "Unlike" } else { "Like" },
                        onclick: move |_| on_like.call(like_card.clone()),
                        Icon { icon: FaHeart, width: 20, height: 18 }
                    }
                    span { class: "card__like-count", "{like_count}" }
                }
            }
        }
    }
}
