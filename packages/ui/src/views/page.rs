use dioxus::prelude::*;
use store::{Action, ActivePopup, Msg};

use crate::{
    use_coordinator, AddPlacePopup, CardGrid, ConfirmDeletePopup, EditAvatarPopup,
    EditProfilePopup, Footer, Header, ImagePopup, Profile,
};

const AROUND_CSS: Asset = asset!("/assets/styling/around.css");

/// The whole single-page layout: header, profile, cards, footer and every popup.
///
/// Must be rendered inside [`crate::AppProvider`].
#[component]
pub fn Page() -> Element {
    let coordinator = use_coordinator();
    let app = coordinator.state()();

    let viewer = app.viewer_id().cloned();
    let user = app.user.as_loaded().cloned();
    let cards = app.cards().to_vec();
    let saving = app.saving;
    let popup = app.popup.clone();

    rsx! {
        document::Stylesheet { href: AROUND_CSS }

        div {
            class: "page",
            Header {}

            main {
                class: "content",
                Profile {
                    user: user.clone(),
                    on_edit_avatar: move |_| coordinator.send(Msg::OpenEditAvatar),
                    on_edit_profile: move |_| coordinator.send(Msg::OpenEditProfile),
                    on_add_place: move |_| coordinator.send(Msg::OpenAddPlace),
                }
                CardGrid {
                    cards,
                    viewer,
                    on_open: move |card| coordinator.send(Msg::OpenImagePreview(card)),
                    on_like: move |card| coordinator.dispatch(Action::ToggleLike(card)),
                    on_delete: move |card| coordinator.send(Msg::OpenConfirmDelete(card)),
                }
            }

            Footer {}
        }

        EditProfilePopup {
            user,
            is_open: popup == ActivePopup::EditProfile,
            saving,
            on_close: move |_| coordinator.send(Msg::CloseAllPopups),
            on_update: move |update| coordinator.dispatch(Action::UpdateProfile(update)),
        }
        EditAvatarPopup {
            is_open: popup == ActivePopup::EditAvatar,
            saving,
            on_close: move |_| coordinator.send(Msg::CloseAllPopups),
            on_update: move |update| coordinator.dispatch(Action::UpdateAvatar(update)),
        }
        AddPlacePopup {
            is_open: popup == ActivePopup::AddPlace,
            saving,
            on_close: move |_| coordinator.send(Msg::CloseAllPopups),
            on_add: move |card| coordinator.dispatch(Action::AddPlace(card)),
        }
        ConfirmDeletePopup {
            card: popup.pending_delete().cloned(),
            saving,
            on_close: move |_| coordinator.send(Msg::CloseAllPopups),
            on_confirm: move |card| coordinator.dispatch(Action::DeleteCard(card)),
        }
        ImagePopup {
            card: app.selected_card.clone(),
            is_open: popup.is_image_preview(),
            on_close: move |_| coordinator.send(Msg::CloseAllPopups),
        }
    }
}
