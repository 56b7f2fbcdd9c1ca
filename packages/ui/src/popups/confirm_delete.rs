use dioxus::prelude::*;
use store::Card;

use super::PopupWithForm;

/// Asks before deleting `card`. Open whenever a card is pending deletion.
#[component]
pub fn ConfirmDeletePopup(
    card: Option<Card>,
    saving: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<Card>,
) -> Element {
    let is_open = card.is_some();

    rsx! {
        PopupWithForm {
            name: "confirm-delete",
            title: "Are you sure?",
            submit_label: "Yes",
            busy_label: "Deleting...",
            is_open,
            saving,
            on_close,
            on_submit: move |_| {
                if let Some(card) = card.clone() {
                    on_confirm.call(card);
                }
            },
            p { class: "popup__text", "This place will be removed for everyone." }
        }
    }
}
