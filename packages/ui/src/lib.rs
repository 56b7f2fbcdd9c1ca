//! This crate contains all shared UI for the workspace.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod coordinator;
pub use coordinator::{use_app_state, use_coordinator, AppProvider, Coordinator};

mod timer;

mod header;
pub use header::{Footer, Header};

mod profile;
pub use profile::Profile;

mod card;
pub use card::CardView;

mod card_grid;
pub use card_grid::CardGrid;

pub mod popups;
pub use popups::{
    AddPlacePopup, ConfirmDeletePopup, EditAvatarPopup, EditProfilePopup, ImagePopup,
    PopupWithForm,
};

pub mod views;
