use dioxus::prelude::*;
use store::{Card, UserId};

use crate::CardView;

/// The card collection in server order, newest first.
#[component]
pub fn CardGrid(
    cards: Vec<Card>,
    viewer: Option<UserId>,
    on_open: EventHandler<Card>,
    on_like: EventHandler<Card>,
    on_delete: EventHandler<Card>,
) -> Element {
    rsx! {
        section {
            class: "cards",
            ul {
                class: "cards__list",
                for card in cards {
                    CardView {
                        key: "{card.id}",
                        card: card.clone(),
                        viewer: viewer.clone(),
                        on_open,
                        on_like,
                        on_delete,
                    }
                }
            }
        }
    }
}
