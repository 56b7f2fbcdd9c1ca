use dioxus::prelude::*;
use store::Card;

use crate::views::ModalOverlay;

/// Full-size preview of the selected card.
///
/// `card` can outlive `is_open` for a short while after closing so the image
/// stays in place while the overlay fades out.
#[component]
pub fn ImagePopup(card: Option<Card>, is_open: bool, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            name: "image",
            class: "popup__container_type_image",
            is_open,
            on_close,
            if let Some(card) = card {
                figure {
                    class: "popup__figure",
                    img {
                        class: "popup__image",
                        src: "{card.link}",
                        alt: "{card.name}",
                    }
                    figcaption { class: "popup__caption", "{card.name}" }
                }
            }
        }
    }
}
