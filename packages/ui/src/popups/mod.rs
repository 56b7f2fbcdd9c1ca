//! Modal dialogs. Each one is a thin wrapper over [`PopupWithForm`] or the
//! shared overlay; which one is open is decided by [`store::ActivePopup`].

mod popup_with_form;
pub use popup_with_form::PopupWithForm;

mod edit_profile;
pub use edit_profile::EditProfilePopup;

mod edit_avatar;
pub use edit_avatar::EditAvatarPopup;

mod add_place;
pub use add_place::AddPlacePopup;

mod confirm_delete;
pub use confirm_delete::ConfirmDeletePopup;

mod image_popup;
pub use image_popup::ImagePopup;
