//! # View state: the single source of truth behind every component
//!
//! [`AppState`] holds the two server-backed resources (current user and card
//! collection), which popup is open, and the card selected for the image preview.
//! It changes only through [`AppState::update`], which applies one [`Msg`]
//! synchronously and may hand back an [`Effect`] for the caller to schedule.
//!
//! ## Resources
//!
//! Both resources start [`Resource::Unloaded`] and become [`Resource::Loaded`] on
//! the first successful fetch. Afterwards the card list is edited in place by id:
//! created cards are prepended, updated cards replace their entry, deleted cards are
//! filtered out. Every value stored is the server's response verbatim.
//!
//! ## Popups
//!
//! [`ActivePopup`] is a single variant, so at most one popup is ever open. Opening a
//! popup replaces whatever was open.
//!
//! ## Closing the image preview
//!
//! Closing flips the popup to [`ActivePopup::None`] immediately, but the selected
//! card stays so the preview can animate out. `update` returns
//! [`Effect::ClearSelectionAfter`] carrying the current selection epoch; once the
//! delay has passed the caller sends [`Msg::SelectionExpired`] with that epoch. The
//! selection is dropped only if no newer preview was opened in the meantime.

use std::time::Duration;

use crate::models::{Card, CardId, User, UserId};

/// A server-backed value that may not have arrived yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Resource<T> {
    #[default]
    Unloaded,
    Loaded(T),
}

impl<T> Resource<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Resource::Loaded(_))
    }

    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Resource::Loaded(value) => Some(value),
            Resource::Unloaded => None,
        }
    }
}

/// The popup currently shown, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ActivePopup {
    #[default]
    None,
    EditProfile,
    EditAvatar,
    AddPlace,
    ImagePreview(Card),
    ConfirmDelete(Card),
}

impl ActivePopup {
    pub fn is_open(&self) -> bool {
        !matches!(self, ActivePopup::None)
    }

    pub fn is_image_preview(&self) -> bool {
        matches!(self, ActivePopup::ImagePreview(_))
    }

    /// The card awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&Card> {
        match self {
            ActivePopup::ConfirmDelete(card) => Some(card),
            _ => None,
        }
    }
}

/// Everything that can change [`AppState`].
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    UserLoaded(User),
    CardsLoaded(Vec<Card>),

    OpenEditProfile,
    OpenEditAvatar,
    OpenAddPlace,
    OpenImagePreview(Card),
    OpenConfirmDelete(Card),
    CloseAllPopups,
    /// Sent once the preview close delay has elapsed.
    SelectionExpired { epoch: u64 },

    RequestStarted,
    RequestFailed,

    UserUpdated(User),
    CardCreated(Card),
    CardUpdated(Card),
    CardDeleted(CardId),
}

/// Deferred work requested by [`AppState::update`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Send [`Msg::SelectionExpired`] with `epoch` after `delay`.
    ClearSelectionAfter { delay: Duration, epoch: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub user: Resource<User>,
    pub cards: Resource<Vec<Card>>,
    pub popup: ActivePopup,
    /// Card shown by the image preview. Outlives the popup by the close delay.
    pub selected_card: Option<Card>,
    /// A form submission is waiting for its response.
    pub saving: bool,
    selection_epoch: u64,
    preview_close_delay: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl AppState {
    pub fn new(preview_close_delay: Duration) -> Self {
        Self {
            user: Resource::Unloaded,
            cards: Resource::Unloaded,
            popup: ActivePopup::None,
            selected_card: None,
            saving: false,
            selection_epoch: 0,
            preview_close_delay,
        }
    }

    /// Id of the signed-in user, once loaded.
    pub fn viewer_id(&self) -> Option<&UserId> {
        self.user.as_loaded().map(|user| &user.id)
    }

    /// Loaded cards, or an empty slice before the first fetch.
    pub fn cards(&self) -> &[Card] {
        self.cards.as_loaded().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn selection_epoch(&self) -> u64 {
        self.selection_epoch
    }

    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::UserLoaded(user) => {
                self.user = Resource::Loaded(user);
                None
            }
            Msg::CardsLoaded(cards) => {
                self.cards = Resource::Loaded(cards);
                None
            }

            Msg::OpenEditProfile => self.open(ActivePopup::EditProfile),
            Msg::OpenEditAvatar => self.open(ActivePopup::EditAvatar),
            Msg::OpenAddPlace => self.open(ActivePopup::AddPlace),
            Msg::OpenConfirmDelete(card) => self.open(ActivePopup::ConfirmDelete(card)),
            Msg::OpenImagePreview(card) => {
                self.selection_epoch += 1;
                self.selected_card = Some(card.clone());
                self.popup = ActivePopup::ImagePreview(card);
                None
            }
            Msg::CloseAllPopups => self.close_all(),
            Msg::SelectionExpired { epoch } => {
                if epoch == self.selection_epoch && !self.popup.is_image_preview() {
                    self.selected_card = None;
                }
                None
            }

            Msg::RequestStarted => {
                self.saving = true;
                None
            }
            Msg::RequestFailed => {
                self.saving = false;
                None
            }

            Msg::UserUpdated(user) => {
                self.user = Resource::Loaded(user);
                self.finish()
            }
            Msg::CardCreated(card) => {
                if let Resource::Loaded(cards) = &mut self.cards {
                    cards.insert(0, card);
                } else {
                    self.cards = Resource::Loaded(vec![card]);
                }
                self.finish()
            }
            Msg::CardUpdated(card) => {
                if let Resource::Loaded(cards) = &mut self.cards {
                    if let Some(slot) = cards.iter_mut().find(|c| c.id == card.id) {
                        *slot = card;
                    }
                }
                // likes never raise `saving`, so a form save may still be pending
                self.close_all()
            }
            Msg::CardDeleted(id) => {
                if let Resource::Loaded(cards) = &mut self.cards {
                    cards.retain(|c| c.id != id);
                }
                self.finish()
            }
        }
    }

    fn open(&mut self, popup: ActivePopup) -> Option<Effect> {
        let effect = self.schedule_clear_if_previewing();
        self.popup = popup;
        effect
    }

    fn close_all(&mut self) -> Option<Effect> {
        self.popup = ActivePopup::None;
        self.selected_card.as_ref().map(|_| Effect::ClearSelectionAfter {
            delay: self.preview_close_delay,
            epoch: self.selection_epoch,
        })
    }

    fn finish(&mut self) -> Option<Effect> {
        self.saving = false;
        self.close_all()
    }

    fn schedule_clear_if_previewing(&self) -> Option<Effect> {
        self.popup
            .is_image_preview()
            .then_some(Effect::ClearSelectionAfter {
                delay: self.preview_close_delay,
                epoch: self.selection_epoch,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, about: &str) -> User {
        User {
            id: UserId::new("me"),
            name: name.to_string(),
            about: about.to_string(),
            avatar: "https://example.com/me.jpg".to_string(),
            cohort: None,
        }
    }

    fn card(id: &str) -> Card {
        Card {
            id: CardId::new(id),
            name: format!("caption {id}"),
            link: format!("https://example.com/{id}.jpg"),
            owner: UserId::new("me"),
            likes: Vec::new(),
            created_at: None,
        }
    }

    fn loaded(ids: &[&str]) -> AppState {
        let mut state = AppState::default();
        state.update(Msg::UserLoaded(user("Jacques", "Explorer")));
        state.update(Msg::CardsLoaded(ids.iter().map(|id| card(id)).collect()));
        state
    }

    fn ids(state: &AppState) -> Vec<&str> {
        state.cards().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_initial_state_is_unloaded() {
        let state = AppState::default();
        assert_eq!(state.user, Resource::Unloaded);
        assert_eq!(state.cards, Resource::Unloaded);
        assert_eq!(state.popup, ActivePopup::None);
        assert!(state.viewer_id().is_none());
        assert!(state.cards().is_empty());
    }

    #[test]
    fn test_user_update_stores_response_verbatim() {
        let mut state = loaded(&[]);
        state.update(Msg::OpenEditProfile);
        state.update(Msg::RequestStarted);

        let response = user("Jacques Cousteau", "Sailor, researcher");
        let effect = state.update(Msg::UserUpdated(response.clone()));

        assert_eq!(state.user, Resource::Loaded(response));
        assert_eq!(state.popup, ActivePopup::None);
        assert!(!state.saving);
        assert!(effect.is_none());
    }

    #[test]
    fn test_created_card_is_prepended() {
        let mut state = loaded(&[]);
        state.update(Msg::CardCreated(card("5")));
        assert_eq!(ids(&state), vec!["5"]);

        state.update(Msg::CardCreated(card("6")));
        assert_eq!(ids(&state), vec!["6", "5"]);
        assert_eq!(state.cards()[0], card("6"));
    }

    #[test]
    fn test_created_card_before_initial_load() {
        let mut state = AppState::default();
        state.update(Msg::CardCreated(card("5")));
        assert_eq!(state.cards, Resource::Loaded(vec![card("5")]));
    }

    #[test]
    fn test_deleted_card_is_removed_in_order() {
        let mut state = loaded(&["1", "2", "3", "4"]);
        state.update(Msg::OpenConfirmDelete(card("3")));
        state.update(Msg::CardDeleted(CardId::new("3")));

        assert_eq!(ids(&state), vec!["1", "2", "4"]);
        assert_eq!(state.popup, ActivePopup::None);
    }

    #[test]
    fn test_updated_card_replaces_in_place() {
        let mut state = loaded(&["1", "2", "3"]);
        let mut liked = card("2");
        liked.likes.push(UserId::new("me"));

        state.update(Msg::CardUpdated(liked.clone()));

        assert_eq!(ids(&state), vec!["1", "2", "3"]);
        assert_eq!(state.cards()[1], liked);
    }

    #[test]
    fn test_update_for_unknown_card_is_ignored() {
        let mut state = loaded(&["1"]);
        state.update(Msg::CardUpdated(card("9")));
        assert_eq!(ids(&state), vec!["1"]);
    }

    #[test]
    fn test_reload_replaces_collection() {
        let mut state = loaded(&["1", "2"]);
        state.update(Msg::CardsLoaded(vec![card("3")]));
        assert_eq!(ids(&state), vec!["3"]);
    }

    #[test]
    fn test_opening_popup_replaces_previous() {
        let mut state = loaded(&["1"]);
        state.update(Msg::OpenEditProfile);
        state.update(Msg::OpenAddPlace);
        assert_eq!(state.popup, ActivePopup::AddPlace);

        state.update(Msg::OpenConfirmDelete(card("1")));
        assert_eq!(state.popup.pending_delete(), Some(&card("1")));
    }

    #[test]
    fn test_failed_request_leaves_state_and_popup() {
        let mut state = loaded(&["1", "2"]);
        state.update(Msg::OpenAddPlace);
        state.update(Msg::RequestStarted);
        let before = state.clone();

        state.update(Msg::RequestFailed);

        assert_eq!(state.popup, ActivePopup::AddPlace);
        assert_eq!(state.cards, before.cards);
        assert_eq!(state.user, before.user);
        assert!(!state.saving);
    }

    #[test]
    fn test_close_without_selection_has_no_effect() {
        let mut state = loaded(&[]);
        state.update(Msg::OpenEditAvatar);
        assert_eq!(state.update(Msg::CloseAllPopups), None);
        assert!(!state.popup.is_open());
    }

    #[test]
    fn test_preview_selection_cleared_only_after_delay() {
        let mut state = AppState::new(Duration::from_millis(300));
        state.update(Msg::OpenImagePreview(card("1")));
        assert!(state.popup.is_image_preview());
        let epoch = state.selection_epoch();

        let effect = state.update(Msg::CloseAllPopups);

        // visibility flips at once, the card lingers
        assert_eq!(state.popup, ActivePopup::None);
        assert_eq!(state.selected_card, Some(card("1")));
        assert_eq!(
            effect,
            Some(Effect::ClearSelectionAfter {
                delay: Duration::from_millis(300),
                epoch,
            })
        );

        state.update(Msg::SelectionExpired { epoch });
        assert_eq!(state.selected_card, None);
    }

    #[test]
    fn test_stale_expiry_keeps_newer_selection() {
        let mut state = loaded(&["1", "2"]);
        state.update(Msg::OpenImagePreview(card("1")));
        let first = state.selection_epoch();
        state.update(Msg::CloseAllPopups);

        state.update(Msg::OpenImagePreview(card("2")));
        state.update(Msg::SelectionExpired { epoch: first });

        assert_eq!(state.selected_card, Some(card("2")));
        assert!(state.popup.is_image_preview());
    }

    #[test]
    fn test_expiry_ignored_while_preview_reopened_same_epoch() {
        let mut state = loaded(&["1"]);
        state.update(Msg::OpenImagePreview(card("1")));
        let epoch = state.selection_epoch();

        state.update(Msg::SelectionExpired { epoch });

        assert_eq!(state.selected_card, Some(card("1")));
    }

    #[test]
    fn test_replacing_preview_schedules_clear() {
        let mut state = loaded(&["1"]);
        state.update(Msg::OpenImagePreview(card("1")));
        let epoch = state.selection_epoch();

        let effect = state.update(Msg::OpenConfirmDelete(card("1")));

        assert!(matches!(
            effect,
            Some(Effect::ClearSelectionAfter { epoch: e, .. }) if e == epoch
        ));
        assert_eq!(state.selected_card, Some(card("1")));
    }

    #[test]
    fn test_success_closes_lingering_preview_with_effect() {
        let mut state = loaded(&["1"]);
        state.update(Msg::OpenImagePreview(card("1")));
        let mut liked = card("1");
        liked.likes.push(UserId::new("me"));

        let effect = state.update(Msg::CardUpdated(liked));

        assert_eq!(state.popup, ActivePopup::None);
        assert!(effect.is_some());
    }

    #[test]
    fn test_like_during_form_save_keeps_busy_flag() {
        let mut state = loaded(&["1"]);
        state.update(Msg::OpenAddPlace);
        state.update(Msg::RequestStarted);

        let mut liked = card("1");
        liked.likes.push(UserId::new("me"));
        state.update(Msg::CardUpdated(liked));
        assert!(state.saving);

        state.update(Msg::CardCreated(card("2")));
        assert!(!state.saving);
        assert_eq!(ids(&state), vec!["2", "1"]);
    }
}
